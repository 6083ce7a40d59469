use crate::math::*;

/// Pinhole camera; rays go through pixel centers.
#[derive(Clone, Debug)]
pub struct Camera {
	transform: Mat4,
	resolution: (usize, usize),
	ratio: f32,
	pixel_size: f32,
	plane_dist: f32,
}

impl Camera {
	pub fn new(transform: &Mat4, resolution: (usize, usize), fov: f32) -> Camera {
		let fov_rad = fov * PI / 180.0;

		Camera {
			transform: *transform,
			resolution,
			ratio: resolution.1 as f32 / resolution.0 as f32,
			pixel_size: 1.0 / resolution.0 as f32,
			plane_dist: 1.0 / (fov_rad * 0.5).tan(),
		}
	}

	/// Camera at `eye` looking at `target`, with a horizontal field of view of `fov` degrees
	pub fn look_at(eye: Vec3, target: Vec3, up: Vec3, fov: f32, resolution: (usize, usize)) -> Camera {
		Camera::new(&Mat4::look_at(eye, target, up), resolution, fov)
	}

	pub fn make_ray(&self, (x, y): (usize, usize)) -> Ray {
		let img_plane_pos = Vec3 {
			x: -1.0       + (x as f32 + 0.5) * 2.0 * self.pixel_size,
			y: self.ratio - (y as f32 + 0.5) * 2.0 * self.pixel_size,
			z: self.plane_dist,
		};

		Ray {
			origin: self.transform.transform_point(Vec3::zero()),
			direction: self.transform.transform_vector(img_plane_pos).normalized(),
		}
	}

	pub fn resolution(&self) -> (usize, usize) {
		self.resolution
	}
}
