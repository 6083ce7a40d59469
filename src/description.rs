use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::camera::Camera;
use crate::error::ConfigError;
use crate::material::Material;
use crate::math;
use crate::scene::Scene;
use crate::surface::Surface;
use crate::texture::{NormalMap, Texture};

#[derive(Debug, Error)]
pub enum DescriptionError {
	#[error("cannot read {path}: {source}")]
	Io { path: PathBuf, #[source] source: io::Error },

	#[error("invalid scene description: {0}")]
	Json(#[from] serde_json::Error),

	#[error("surface {surface}: unknown material preset {preset:?}")]
	UnknownMaterial { surface: String, preset: String },

	#[error("surface {0}: a normal map takes its size from a texture, but there is none")]
	NormalMapWithoutTexture(String),

	#[error("surface {surface}: {source}")]
	Surface { surface: String, #[source] source: ConfigError },

	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("cannot write {path}: {source}")]
	Output { path: PathBuf, #[source] source: image::ImageError },
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Vec3 {
	Thrice(f32),
	Explicit(f32, f32, f32),
}

impl Vec3 {
	fn convert(&self) -> math::Vec3 {
		match *self {
			Vec3::Thrice(v) => math::Vec3::thrice(v),
			Vec3::Explicit(x, y, z) => math::Vec3 { x, y, z },
		}
	}
}

/// A scene and the camera looking at it, as written in a JSON file
#[derive(Deserialize, Debug)]
pub struct SceneDescription {
	camera: CameraDescription,
	surfaces: Vec<SurfaceDescription>,
}

#[derive(Deserialize, Debug)]
struct CameraDescription {
	eye: Vec3,
	look_at: Vec3,
	#[serde(default = "default_up")]
	up: Vec3,
	fov: f32,
	resolution: Resolution,
}

fn default_up() -> Vec3 {
	Vec3::Explicit(0.0, 1.0, 0.0)
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Resolution {
	Rect(usize, usize),
	Square(usize),
}

#[derive(Deserialize, Debug)]
struct SurfaceDescription {
	name: Option<String>,
	shape: ShapeDescription,
	#[serde(default)]
	transforms: Vec<TransformStep>,
	material: Option<MaterialDescription>,
	texture: Option<TextureDescription>,
	normal_map: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ShapeDescription {
	Box,
	Cylinder { r_start: f32, r_end: f32, height: f32 },
	Sphere,
}

/// One step of a surface's placement, applied in the order written
#[derive(Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
enum TransformStep {
	Translate(Vec3),
	Scale(Vec3),
	Rotate { angle: f32, axis: Vec3 },
}

#[derive(Deserialize, Debug)]
struct MaterialDescription {
	#[serde(default = "default_preset")]
	preset: String,
	reflectivity: Option<f32>,
	shininess: Option<f32>,
	emission: Option<Vec3>,
}

fn default_preset() -> String {
	String::from("default")
}

#[derive(Deserialize, Debug)]
struct TextureDescription {
	file: String,
	dim: usize,
}

/// Read a scene description file; relative texture paths are resolved against its directory
pub fn load<P: AsRef<Path>>(path: P) -> Result<(Scene, Camera), DescriptionError> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|source| DescriptionError::Io { path: path.to_owned(), source })?;
	let description = SceneDescription::from_reader(BufReader::new(file))?;
	description.build(path.parent().unwrap_or_else(|| Path::new(".")))
}

impl SceneDescription {
	pub fn from_reader<R: Read>(reader: R) -> Result<SceneDescription, DescriptionError> {
		Ok(serde_json::from_reader(reader)?)
	}

	pub fn build(self, dir: &Path) -> Result<(Scene, Camera), DescriptionError> {
		let mut scene = Scene::default();
		for (i, s) in self.surfaces.into_iter().enumerate() {
			scene.add(s.build(i, dir)?);
		}
		Ok((scene, self.camera.build()))
	}
}

impl CameraDescription {
	fn build(self) -> Camera {
		let resolution = match self.resolution {
			Resolution::Rect(w, h) => (w, h),
			Resolution::Square(w) => (w, w),
		};
		Camera::look_at(self.eye.convert(), self.look_at.convert(), self.up.convert(), self.fov, resolution)
	}
}

impl SurfaceDescription {
	fn build(self, index: usize, dir: &Path) -> Result<Surface, DescriptionError> {
		let name = self.name.unwrap_or_else(|| format!("surface {}", index));
		let in_surface = |source| DescriptionError::Surface { surface: name.clone(), source };

		let mut surface = match self.shape {
			ShapeDescription::Box => Surface::cuboid(),
			ShapeDescription::Cylinder { r_start, r_end, height } => {
				Surface::cylinder(r_start, r_end, height).map_err(in_surface)?
			}
			ShapeDescription::Sphere => Surface::sphere(),
		};
		surface.set_name(name.clone());

		for step in self.transforms {
			match step {
				TransformStep::Translate(d) => {
					let d = d.convert();
					surface.translate(d.x, d.y, d.z);
				}
				TransformStep::Scale(s) => {
					let s = s.convert();
					surface.scale(s.x, s.y, s.z).map_err(in_surface)?;
				}
				TransformStep::Rotate { angle, axis } => {
					surface.rotate(angle, axis.convert()).map_err(in_surface)?;
				}
			}
		}

		if let Some(m) = self.material {
			let mut material = Material::from_preset(&m.preset).ok_or_else(|| DescriptionError::UnknownMaterial {
				surface: name.clone(),
				preset: m.preset.clone(),
			})?;
			if let Some(r) = m.reflectivity {
				material = material.with_reflectivity(r);
			}
			if let Some(s) = m.shininess {
				material = material.with_shininess(s);
			}
			if let Some(e) = m.emission {
				material = material.with_emission(e.convert());
			}
			surface.set_material(material);
		}

		if let Some(t) = self.texture {
			surface.set_texture(Texture::load(dir.join(&t.file), t.dim).map_err(in_surface)?);
		}

		if let Some(file) = self.normal_map {
			let dim = match surface.texture() {
				Some(texture) => texture.dim(),
				None => return Err(DescriptionError::NormalMapWithoutTexture(name)),
			};
			surface.set_normal_map(NormalMap::load(dir.join(&file), dim).map_err(in_surface)?);
		}

		Ok(surface)
	}
}
