pub mod vec3;
pub mod mat4;
pub mod ray;
pub mod transform;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use ray::Ray;
pub use transform::AffineTransform;
pub use std::f32::consts::*;

pub const EPSILON: f32 = 1e-5;
pub const INV_PI: f32 = FRAC_1_PI;
pub const INV_2_PI: f32 = 0.5 * FRAC_1_PI;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis { X, Y, Z }

impl Axis {
	pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

	/// The two other axes, in x, y, z order
	pub fn others(self) -> (Axis, Axis) {
		match self {
			Axis::X => (Axis::Y, Axis::Z),
			Axis::Y => (Axis::X, Axis::Z),
			Axis::Z => (Axis::X, Axis::Y),
		}
	}
}

#[cfg(test)]
pub(crate) fn assert_vec_eq(a: Vec3, b: Vec3) {
	assert!((a - b).length() < 1e-4, "{:?} != {:?}", a, b);
}
