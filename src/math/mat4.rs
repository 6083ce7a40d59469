use std::ops::{Index, IndexMut, Mul};
use crate::math::{Vec3, PI};

/// row-major 4x4 matrix
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Mat4([f32; 16]);

impl Mat4 {
	pub fn identity() -> Mat4 {
		Mat4([
			1.0, 0.0, 0.0, 0.0,
			0.0, 1.0, 0.0, 0.0,
			0.0, 0.0, 1.0, 0.0,
			0.0, 0.0, 0.0, 1.0,
		])
	}

	pub fn scale(v: Vec3) -> Mat4 {
		Mat4([
			v.x, 0.0, 0.0, 0.0,
			0.0, v.y, 0.0, 0.0,
			0.0, 0.0, v.z, 0.0,
			0.0, 0.0, 0.0, 1.0,
		])
	}

	pub fn translate(v: Vec3) -> Mat4 {
		Mat4([
			1.0, 0.0, 0.0, v.x,
			0.0, 1.0, 0.0, v.y,
			0.0, 0.0, 1.0, v.z,
			0.0, 0.0, 0.0, 1.0,
		])
	}

	/// Counter-clockwise rotation of `angle` degrees around `axis`, same convention as `glRotate`.
	/// The axis must be of non-zero length.
	pub fn rotate(angle: f32, axis: Vec3) -> Mat4 {
		let a = axis.normalized();
		let r = angle * (PI / 180.0);
		let (s, c) = r.sin_cos();
		let t = 1.0 - c;

		Mat4([
			t*a.x*a.x + c,     t*a.x*a.y - s*a.z, t*a.x*a.z + s*a.y, 0.0,
			t*a.x*a.y + s*a.z, t*a.y*a.y + c,     t*a.y*a.z - s*a.x, 0.0,
			t*a.x*a.z - s*a.y, t*a.y*a.z + s*a.x, t*a.z*a.z + c,     0.0,
			              0.0,               0.0,               0.0, 1.0,
		])
	}

	pub fn look_at(pos: Vec3, look_at: Vec3, up: Vec3) -> Mat4 {
		let f = (look_at - pos).normalized();
		let r = Vec3::cross(f, up).normalized();
		let u = Vec3::cross(r, f).normalized();

		Mat4([
			r.x, u.x, f.x, pos.x,
			r.y, u.y, f.y, pos.y,
			r.z, u.z, f.z, pos.z,
			0.0, 0.0, 0.0, 1.0
		])
	}

	pub fn transform_point(&self, p: Vec3) -> Vec3 {
		let a = &self;
		Vec3 {
			x: a[(0,0)] * p.x + a[(0,1)] * p.y + a[(0,2)] * p.z + a[(0,3)],
			y: a[(1,0)] * p.x + a[(1,1)] * p.y + a[(1,2)] * p.z + a[(1,3)],
			z: a[(2,0)] * p.x + a[(2,1)] * p.y + a[(2,2)] * p.z + a[(2,3)],
		}
	}

	pub fn transform_vector(&self, p: Vec3) -> Vec3 {
		let a = &self;
		Vec3 {
			x: a[(0,0)] * p.x + a[(0,1)] * p.y + a[(0,2)] * p.z,
			y: a[(1,0)] * p.x + a[(1,1)] * p.y + a[(1,2)] * p.z,
			z: a[(2,0)] * p.x + a[(2,1)] * p.y + a[(2,2)] * p.z,
		}
	}

	/// Multiply a vector by the transpose of the upper 3x3 block
	pub fn transpose_transform_vector(&self, p: Vec3) -> Vec3 {
		let a = &self;
		Vec3 {
			x: a[(0,0)] * p.x + a[(1,0)] * p.y + a[(2,0)] * p.z,
			y: a[(0,1)] * p.x + a[(1,1)] * p.y + a[(2,1)] * p.z,
			z: a[(0,2)] * p.x + a[(1,2)] * p.y + a[(2,2)] * p.z,
		}
	}

	/// Largest absolute element-wise difference with `other`
	pub fn max_abs_diff(&self, other: &Mat4) -> f32 {
		self.0.iter()
			.zip(other.0.iter())
			.map(|(a, b)| (a - b).abs())
			.fold(0.0, f32::max)
	}
}

impl Mul for Mat4 {
	type Output = Mat4;
	fn mul(self, rhs: Mat4) -> Mat4 {
		let a = &self.0;
		let b = &rhs.0;
		let mut result = [0.0; 16];

		for i in 0..4 {
			for t in 0..4 {
				result[i*4 + t] =
					a[i*4    ]*b[       t] +
					a[i*4 + 1]*b[4   + t] +
					a[i*4 + 2]*b[2*4 + t] +
					a[i*4 + 3]*b[3*4 + t];
			}
		}

		Mat4(result)
	}
}

impl Index<(usize, usize)> for Mat4 {
	type Output = f32;

	fn index(&self, coord: (usize, usize)) -> &f32 {
		&self.0[4 * coord.0 + coord.1]
	}
}

impl IndexMut<(usize, usize)> for Mat4 {
	fn index_mut(&mut self, coord: (usize, usize)) -> &mut f32 {
		&mut self.0[4 * coord.0 + coord.1]
	}
}
