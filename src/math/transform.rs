use crate::error::ConfigError;
use crate::math::{Mat4, Ray, Vec3};

/// An affine object-to-world transform together with its exact inverse.
///
/// The inverse is never obtained by general matrix inversion. Each operation
/// is post-multiplied onto the forward matrix, so successive calls act in the
/// local frame left by the previous ones, and its own inverse (negated
/// translation, reciprocal scale, negated angle) is pre-multiplied onto the
/// inverse matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform {
	matrix: Mat4,
	inverse: Mat4,
}

impl Default for AffineTransform {
	fn default() -> AffineTransform {
		AffineTransform::identity()
	}
}

impl AffineTransform {
	pub fn identity() -> AffineTransform {
		AffineTransform {
			matrix: Mat4::identity(),
			inverse: Mat4::identity(),
		}
	}

	pub fn matrix(&self) -> &Mat4 {
		&self.matrix
	}

	pub fn inverse(&self) -> &Mat4 {
		&self.inverse
	}

	pub fn reset(&mut self) {
		*self = AffineTransform::identity();
	}

	pub fn translate(&mut self, d: Vec3) {
		self.matrix = self.matrix * Mat4::translate(d);
		self.inverse = Mat4::translate(-d) * self.inverse;
	}

	pub fn scale(&mut self, s: Vec3) -> Result<(), ConfigError> {
		if !s.all_finite() || s.x == 0.0 || s.y == 0.0 || s.z == 0.0 {
			return Err(ConfigError::DegenerateScale(s));
		}
		self.matrix = self.matrix * Mat4::scale(s);
		self.inverse = Mat4::scale(s.map(f32::recip)) * self.inverse;
		Ok(())
	}

	pub fn rotate(&mut self, angle: f32, axis: Vec3) -> Result<(), ConfigError> {
		if !angle.is_finite() || axis.try_normalized().is_none() {
			return Err(ConfigError::DegenerateAxis(axis));
		}
		self.matrix = self.matrix * Mat4::rotate(angle, axis);
		self.inverse = Mat4::rotate(-angle, axis) * self.inverse;
		Ok(())
	}

	/// Express a world-space ray in object space
	pub fn to_object(&self, ray: Ray) -> Ray {
		Ray {
			origin: self.inverse.transform_point(ray.origin),
			direction: self.inverse.transform_vector(ray.direction),
		}
	}

	/// Bring an object-space normal to world space with the inverse-transpose.
	/// The result is not normalized.
	pub fn normal_to_world(&self, n: Vec3) -> Vec3 {
		self.inverse.transpose_transform_vector(n)
	}
}
