use crate::hit::HitRecord;
use crate::math::*;
use crate::surface::Surface;

/// Every surface of the scene, tested one after the other for each ray.
#[derive(Debug, Default)]
pub struct Scene {
	surfaces: Vec<Surface>,
}

impl Scene {
	pub fn new(surfaces: Vec<Surface>) -> Scene {
		log::debug!("scene with {} surfaces", surfaces.len());
		Scene { surfaces }
	}

	pub fn add(&mut self, surface: Surface) {
		log::debug!("adding surface {}", surface.name());
		self.surfaces.push(surface);
	}

	pub fn surfaces(&self) -> &[Surface] {
		&self.surfaces
	}

	pub fn len(&self) -> usize {
		self.surfaces.len()
	}

	pub fn is_empty(&self) -> bool {
		self.surfaces.is_empty()
	}

	/// Test `ray` against every surface, keeping the closest hit in `hit`.
	/// Returns whether any surface improved on the record.
	pub fn trace<'a>(&'a self, ray: Ray, hit: &mut HitRecord<'a>) -> bool {
		self.surfaces.iter().fold(false, |found, surface| surface.intersect(ray, hit) || found)
	}

	/// Closest hit along `ray`, if any
	pub fn intersect(&self, ray: Ray) -> Option<HitRecord<'_>> {
		let mut hit = HitRecord::new();
		if self.trace(ray, &mut hit) {
			Some(hit)
		} else {
			None
		}
	}
}
