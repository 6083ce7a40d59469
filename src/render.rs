use std::time::Instant;

use image::{GrayImage, Luma, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::ConfigError;
use crate::hit::HitRecord;
use crate::math::*;
use crate::scene::Scene;
use crate::texture::Color;

/// What a camera ray found, detached from the scene
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PixelHit {
	pub t: f32,
	pub point: Vec3,
	pub normal: Vec3,
	pub color: Color,
	/// Diffuse color of the owner's material
	pub diffuse: Vec3,
}

impl PixelHit {
	fn from_record(hit: &HitRecord) -> PixelHit {
		PixelHit {
			t: hit.t,
			point: hit.point,
			normal: hit.normal,
			color: hit.surface_color,
			diffuse: hit.material().map_or(Vec3::thrice(1.0), |m| m.diffuse),
		}
	}
}

/// Per-pixel closest hits of a rendered frame, row by row from the top
pub struct HitBuffer {
	width: usize,
	height: usize,
	pixels: Vec<Option<PixelHit>>,
}

/// Trace one ray per `block_size` x `block_size` block of pixels.
///
/// The ray goes through the top left pixel of the block and its result fills
/// the whole block. Bands of blocks are traced in parallel, each ray with its
/// own hit record.
pub fn render(scene: &Scene, camera: &Camera, block_size: usize) -> Result<HitBuffer, ConfigError> {
	if block_size == 0 {
		return Err(ConfigError::BlockSize);
	}

	let (width, height) = camera.resolution();
	// a block never needs to be larger than the frame
	let block_size = block_size.min(width.max(height));
	let mut pixels = vec![None; width * height];
	if pixels.is_empty() {
		return Ok(HitBuffer { width, height, pixels });
	}

	log::info!("tracing {}x{} pixels against {} surfaces, block size {}", width, height, scene.len(), block_size);
	let start = Instant::now();

	pixels.par_chunks_mut(width * block_size).enumerate().for_each(|(band, rows)| {
		let y = band * block_size;
		let mut hit = HitRecord::new();
		for x in (0..width).step_by(block_size) {
			hit.reset();
			let ray = camera.make_ray((x, y));
			let sample = if scene.trace(ray, &mut hit) {
				Some(PixelHit::from_record(&hit))
			} else {
				None
			};

			let x_end = (x + block_size).min(width);
			for row in rows.chunks_mut(width) {
				for p in &mut row[x..x_end] {
					*p = sample;
				}
			}
		}
	});

	let buffer = HitBuffer { width, height, pixels };
	log::info!("traced in {:.3}s, {} pixels covered", start.elapsed().as_secs_f32(), buffer.coverage());
	Ok(buffer)
}

impl HitBuffer {
	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	pub fn get(&self, x: usize, y: usize) -> Option<&PixelHit> {
		self.pixels[self.width * y + x].as_ref()
	}

	/// Number of pixels where something was hit
	pub fn coverage(&self) -> usize {
		self.pixels.iter().filter(|p| p.is_some()).count()
	}

	/// Surface color modulated by the material's diffuse color, black background
	pub fn albedo_image(&self) -> RgbaImage {
		self.rgba_image(|hit| {
			let c = hit.color.rgb() * hit.diffuse;
			Color::new(c.x, c.y, c.z, hit.color.a)
		})
	}

	/// World-space normals mapped from [-1, 1] to [0, 1]
	pub fn normal_image(&self) -> RgbaImage {
		self.rgba_image(|hit| {
			let c = hit.normal * 0.5 + Vec3::thrice(0.5);
			Color::new(c.x, c.y, c.z, 1.0)
		})
	}

	/// Hit distance, white for the nearest hit fading to dark grey for the farthest one
	pub fn depth_image(&self) -> GrayImage {
		let (near, far) = self.pixels.iter()
			.flatten()
			.fold((f32::INFINITY, 0.0f32), |(near, far), hit| (near.min(hit.t), far.max(hit.t)));
		let range = (far - near).max(EPSILON);

		GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
			match self.get(x as usize, y as usize) {
				Some(hit) => Luma([(255.0 - 200.0 * (hit.t - near) / range) as u8]),
				None => Luma([0]),
			}
		})
	}

	fn rgba_image<F>(&self, f: F) -> RgbaImage
		where F: Fn(&PixelHit) -> Color
	{
		RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
			let color = self.get(x as usize, y as usize).map_or(Color::BLACK, &f);
			Rgba(color.to_rgba8())
		})
	}
}
