use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::ConfigError;
use crate::math::Vec3;

/// RGBA color with channels in [0, 1]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
	pub a: f32,
}

impl Color {
	pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
	pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

	pub fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
		Color { r, g, b, a }
	}

	pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Color {
		let f = |c: u8| c as f32 / 255.0;
		Color::new(f(r), f(g), f(b), f(a))
	}

	pub fn rgb(self) -> Vec3 {
		Vec3::new(self.r, self.g, self.b)
	}

	pub fn to_rgba8(self) -> [u8; 4] {
		let f = |c: f32| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
		[f(self.r), f(self.g), f(self.b), f(self.a)]
	}
}

impl Default for Color {
	fn default() -> Color {
		Color::WHITE
	}
}

/// Square diffuse texture.
///
/// Rows are stored bottom to top, so that `v = 0` addresses the last row of
/// the source image.
#[derive(Clone, Debug)]
pub struct Texture {
	dim: usize,
	pixels: Vec<Color>,
}

impl Texture {
	/// Build a texture from tightly packed RGBA8 rows, top row first
	pub fn from_rgba8(bytes: &[u8], dim: usize) -> Result<Texture, ConfigError> {
		let pixels = flipped_texels(bytes, dim)?
			.map(Color::from_rgba8)
			.collect();
		Ok(Texture { dim, pixels })
	}

	/// Load a square image of side `dim` from disk
	pub fn load<P: AsRef<Path>>(path: P, dim: usize) -> Result<Texture, ConfigError> {
		let img = open_square(path)?;
		Texture::from_rgba8(img.as_raw(), dim)
	}

	pub fn dim(&self) -> usize {
		self.dim
	}

	/// Nearest texel at parametric coordinates `(u, v)` in [0, 1]
	pub fn sample(&self, (u, v): (f32, f32)) -> Color {
		self.pixels[texel(self.dim, u, v)]
	}
}

/// Square tangent-space normal map, stored like `Texture`.
#[derive(Clone, Debug)]
pub struct NormalMap {
	dim: usize,
	vectors: Vec<Vec3>,
}

impl NormalMap {
	pub fn from_rgba8(bytes: &[u8], dim: usize) -> Result<NormalMap, ConfigError> {
		let vectors = flipped_texels(bytes, dim)?
			.map(|[r, g, b, _]| {
				let f = |c: u8| (c as f32 / 255.0) * 2.0 - 1.0;
				Vec3::new(f(r), f(g), f(b))
			})
			.collect();
		Ok(NormalMap { dim, vectors })
	}

	/// Load a normal map from disk, resampled to `dim` x `dim` if needed
	pub fn load<P: AsRef<Path>>(path: P, dim: usize) -> Result<NormalMap, ConfigError> {
		let path = path.as_ref();
		let mut img = open_square(path)?;
		if img.width() as usize != dim {
			log::warn!("resizing normal map {} from {} to {}", path.display(), img.width(), dim);
			img = imageops::resize(&img, dim as u32, dim as u32, FilterType::Triangle);
		}
		NormalMap::from_rgba8(img.as_raw(), dim)
	}

	pub fn dim(&self) -> usize {
		self.dim
	}

	pub fn sample(&self, (u, v): (f32, f32)) -> Vec3 {
		self.vectors[texel(self.dim, u, v)]
	}
}

/// The optional maps attached to a surface, with their fallbacks
#[derive(Clone, Debug, Default)]
pub struct SurfaceMaps {
	pub texture: Option<Texture>,
	pub normal_map: Option<NormalMap>,
}

impl SurfaceMaps {
	/// Texture color, opaque white without a texture
	pub fn color(&self, uv: (f32, f32)) -> Color {
		match self.texture {
			Some(ref texture) => texture.sample(uv),
			None => Color::WHITE,
		}
	}

	/// Tangent-space perturbation, zero without a normal map
	pub fn perturbation(&self, uv: (f32, f32)) -> Vec3 {
		match self.normal_map {
			Some(ref map) => map.sample(uv),
			None => Vec3::zero(),
		}
	}
}

fn open_square<P: AsRef<Path>>(path: P) -> Result<RgbaImage, ConfigError> {
	let img = image::open(path)?.to_rgba8();
	let (width, height) = img.dimensions();
	if width != height {
		return Err(ConfigError::NonSquareImage { width, height });
	}
	Ok(img)
}

/// Iterate over the RGBA texels of a `dim` x `dim` image, bottom row first
fn flipped_texels(bytes: &[u8], dim: usize) -> Result<impl Iterator<Item=[u8; 4]> + '_, ConfigError> {
	let expected = dim * dim * 4;
	if dim == 0 || bytes.len() != expected {
		return Err(ConfigError::TextureSize { dim, expected, actual: bytes.len() });
	}
	Ok(bytes.chunks_exact(dim * 4)
		.rev()
		.flat_map(|row| row.chunks_exact(4).map(|p| [p[0], p[1], p[2], p[3]])))
}

/// Index of the nearest texel; coordinates outside [0, 1] stick to the border
fn texel(dim: usize, u: f32, v: f32) -> usize {
	let last = (dim - 1) as f32;
	let to_index = |c: f32| (last * c).round_ties_even().clamp(0.0, last) as usize;
	to_index(v) * dim + to_index(u)
}
