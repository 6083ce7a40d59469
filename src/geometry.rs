use std::fmt::Debug;

use crate::hit::HitRecord;
use crate::math::*;
use crate::texture::SurfaceMaps;

/// A canonical shape, defined in its own object space.
pub trait Shape: Debug {
	/// Intersect `ray`, given in object space.
	///
	/// When the shape is hit strictly closer than `hit.t` (or `hit` is
	/// unset), write the hit parameter, the object-space point and normal and
	/// the surface color into `hit` and return true. Otherwise leave `hit`
	/// exactly as it was and return false.
	fn intersect_local(&self, ray: Ray, maps: &SurfaceMaps, hit: &mut HitRecord<'_>) -> bool;
}
