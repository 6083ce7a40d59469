use thiserror::Error;

use crate::math::Vec3;

/// Caller misuse detected while setting up a surface, a texture or a render.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("scale factors must be finite and non-zero, got {0:?}")]
	DegenerateScale(Vec3),

	#[error("rotation axis must be finite and non-zero, got {0:?}")]
	DegenerateAxis(Vec3),

	#[error("invalid cylinder (r_start: {r_start}, r_end: {r_end}, height: {height})")]
	DegenerateCylinder { r_start: f32, r_end: f32, height: f32 },

	#[error("expected a square {dim}x{dim} RGBA image ({expected} bytes), got {actual} bytes")]
	TextureSize { dim: usize, expected: usize, actual: usize },

	#[error("texture image must be square, got {width}x{height}")]
	NonSquareImage { width: u32, height: u32 },

	#[error("block size must be at least 1")]
	BlockSize,

	#[error(transparent)]
	Image(#[from] image::ImageError),
}
