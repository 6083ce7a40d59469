use crate::math::Vec3;

/// Phong-style surface description.
///
/// The intersection code never reads it: it travels with the hit surface to
/// whatever shades the hit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
	pub ambient: Vec3,
	pub diffuse: Vec3,
	pub specular: Vec3,
	pub emission: Vec3,
	pub shininess: f32,
	/// Fraction of the color coming from the mirror direction, in [0, 1]
	pub reflectivity: f32,
	/// Translucent surfaces do not cast shadows
	pub translucent: bool,
}

impl Default for Material {
	/// OpenGL's default material
	fn default() -> Material {
		Material {
			ambient: Vec3::thrice(0.2),
			diffuse: Vec3::thrice(0.8),
			specular: Vec3::zero(),
			emission: Vec3::zero(),
			shininess: 0.0,
			reflectivity: 0.0,
			translucent: false,
		}
	}
}

impl Material {
	fn metal(ambient: Vec3, diffuse: Vec3, specular: Vec3, shininess: f32) -> Material {
		Material { ambient, diffuse, specular, shininess, ..Default::default() }
	}

	pub fn gold() -> Material {
		Material::metal(
			Vec3::new(0.24725, 0.1995, 0.0745),
			Vec3::new(0.75164, 0.60648, 0.22648),
			Vec3::new(0.628281, 0.555802, 0.366065),
			51.2,
		)
	}

	pub fn chrome() -> Material {
		Material::metal(
			Vec3::thrice(0.25),
			Vec3::thrice(0.4),
			Vec3::thrice(0.774597),
			76.8,
		)
	}

	pub fn pewter() -> Material {
		Material::metal(
			Vec3::new(0.105882, 0.058824, 0.113725),
			Vec3::new(0.427451, 0.470588, 0.541176),
			Vec3::new(0.333333, 0.333333, 0.521569),
			9.84615,
		)
	}

	pub fn silver() -> Material {
		Material::metal(
			Vec3::thrice(0.19225),
			Vec3::thrice(0.50754),
			Vec3::thrice(0.508273),
			51.2,
		)
	}

	pub fn copper() -> Material {
		Material::metal(
			Vec3::new(0.19125, 0.0735, 0.0225),
			Vec3::new(0.7038, 0.27048, 0.0828),
			Vec3::new(0.256777, 0.137622, 0.086014),
			12.8,
		)
	}

	/// A light marker: only emits, does not react to light and does not block it
	pub fn emissive_only(color: Vec3) -> Material {
		Material {
			ambient: Vec3::zero(),
			diffuse: Vec3::zero(),
			specular: Vec3::zero(),
			emission: color,
			shininess: 0.0,
			reflectivity: 0.0,
			translucent: true,
		}
	}

	/// Look a preset up by name
	pub fn from_preset(name: &str) -> Option<Material> {
		match name {
			"default" => Some(Material::default()),
			"gold" => Some(Material::gold()),
			"chrome" => Some(Material::chrome()),
			"pewter" => Some(Material::pewter()),
			"silver" => Some(Material::silver()),
			"copper" => Some(Material::copper()),
			"emissive" => Some(Material::emissive_only(Vec3::thrice(1.0))),
			_ => None,
		}
	}

	pub fn with_reflectivity(self, reflectivity: f32) -> Material {
		Material { reflectivity: reflectivity.clamp(0.0, 1.0), ..self }
	}

	pub fn with_shininess(self, shininess: f32) -> Material {
		Material { shininess, ..self }
	}

	pub fn with_emission(self, emission: Vec3) -> Material {
		Material { emission, ..self }
	}
}
