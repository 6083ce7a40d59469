use crate::material::Material;
use crate::math::Vec3;
use crate::surface::Surface;
use crate::texture::Color;

/// Value of `HitRecord::t` while nothing has been hit
pub const NO_HIT: f32 = -1.0;

/// Closest intersection found so far along one ray.
///
/// A record is reset once per traced ray and then handed, by mutable borrow,
/// to every surface of the scene in turn. A surface only writes to it when
/// it is hit strictly closer than the current `t`.
#[derive(Copy, Clone, Debug)]
pub struct HitRecord<'a> {
	/// Ray parameter of the hit, `NO_HIT` if unset
	pub t: f32,
	pub point: Vec3,
	/// Unit normal
	pub normal: Vec3,
	pub owner: Option<&'a Surface>,
	pub surface_color: Color,
}

impl<'a> Default for HitRecord<'a> {
	fn default() -> HitRecord<'a> {
		HitRecord::new()
	}
}

impl<'a> HitRecord<'a> {
	pub fn new() -> HitRecord<'a> {
		HitRecord {
			t: NO_HIT,
			point: Vec3::zero(),
			normal: Vec3::zero(),
			owner: None,
			surface_color: Color::WHITE,
		}
	}

	pub fn reset(&mut self) {
		*self = HitRecord::new();
	}

	pub fn is_set(&self) -> bool {
		self.t != NO_HIT
	}

	/// Whether a hit at `t` would replace the current one
	pub fn is_closer(&self, t: f32) -> bool {
		!self.is_set() || t < self.t
	}

	pub fn is_owned_by(&self, surface: &Surface) -> bool {
		self.owner.is_some_and(|owner| std::ptr::eq(owner, surface))
	}

	pub fn material(&self) -> Option<&'a Material> {
		self.owner.map(Surface::material)
	}

	/// Overwrite the geometric part of the record. Owner bookkeeping is left to the surface.
	pub(crate) fn record(&mut self, t: f32, point: Vec3, normal: Vec3, surface_color: Color) {
		self.t = t;
		self.point = point;
		self.normal = normal;
		self.surface_color = surface_color;
	}
}
