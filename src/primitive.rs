use crate::error::ConfigError;
use crate::geometry::*;
use crate::hit::{HitRecord, NO_HIT};
use crate::math::*;
use crate::texture::{Color, SurfaceMaps};

/// Face of the canonical cube, in index order
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Face {
	Right,
	Top,
	Back,
	Left,
	Bottom,
	Front,
}

impl Face {
	pub const ALL: [Face; 6] = [Face::Right, Face::Top, Face::Back, Face::Left, Face::Bottom, Face::Front];

	pub fn index(self) -> usize {
		self as usize
	}

	pub fn axis(self) -> Axis {
		match self {
			Face::Right | Face::Left => Axis::X,
			Face::Top | Face::Bottom => Axis::Y,
			Face::Back | Face::Front => Axis::Z,
		}
	}

	/// Coordinate of the face's plane along its axis
	pub fn plane(self) -> f32 {
		if self.index() < 3 { 1.0 } else { -1.0 }
	}

	pub fn normal(self) -> Vec3 {
		let mut n = Vec3::zero();
		n[self.axis()] = self.plane();
		n
	}

	/// Diffuse texture coordinates of a point on the face.
	/// `u` grows towards the right of a viewer facing the face from outside.
	pub fn texture_uv(self, p: Vec3) -> (f32, f32) {
		let flip = |c: f32| (1.0 - c) * 0.5;
		let keep = |c: f32| (1.0 + c) * 0.5;
		match self {
			Face::Right  => (flip(p.z), flip(p.y)),
			Face::Top    => (flip(p.x), flip(p.z)),
			Face::Back   => (keep(p.x), flip(p.y)),
			Face::Left   => (keep(p.z), flip(p.y)),
			Face::Bottom => (flip(p.x), keep(p.z)),
			Face::Front  => (flip(p.x), flip(p.y)),
		}
	}

	/// Normal map coordinates of a point on the face, without the flips of `texture_uv`
	pub fn normal_map_uv(self, p: Vec3) -> (f32, f32) {
		let (a, b) = self.axis().others();
		((p[a] + 1.0) * 0.5, (p[b] + 1.0) * 0.5)
	}
}

/// Axis-aligned cube spanning [-1, 1] on every axis
#[derive(Copy, Clone, Debug, Default)]
pub struct Cuboid;

impl Cuboid {
	/// Closest face crossed at a non-negative `t`, with the hit point snapped onto it.
	///
	/// Every face plane the ray is not parallel to gives a candidate, kept when
	/// the point lies within the face. Ties go to the lowest face index.
	pub fn closest_face(ray: Ray) -> Option<(f32, Face, Vec3)> {
		let mut best: Option<(f32, Face, Vec3)> = None;

		for &face in Face::ALL.iter() {
			let axis = face.axis();
			let d = ray.direction[axis];
			if d == 0.0 {
				continue;
			}

			let t = (face.plane() - ray.origin[axis]) / d;
			if !(t >= 0.0) {
				continue;
			}

			let mut p = ray.point_at(t);
			p[axis] = face.plane();
			let (a, b) = axis.others();
			if !(p[a].abs() <= 1.0 && p[b].abs() <= 1.0) {
				continue;
			}

			if best.map_or(true, |(t_best, _, _)| t < t_best) {
				best = Some((t, face, p));
			}
		}

		best
	}
}

impl Shape for Cuboid {
	fn intersect_local(&self, ray: Ray, maps: &SurfaceMaps, hit: &mut HitRecord<'_>) -> bool {
		let (t, face, p) = match Cuboid::closest_face(ray) {
			Some(candidate) => candidate,
			None => return false,
		};
		if !hit.is_closer(t) {
			return false;
		}

		let n = face.normal();
		let normal = (n + maps.perturbation(face.normal_map_uv(p)))
			.try_normalized()
			.unwrap_or(n);
		hit.record(t, p, normal, maps.color(face.texture_uv(p)));
		true
	}
}

/// Frustum along the z axis, from radius `r_start` at z = 0 to `r_end` at z = `height`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cylinder {
	r_start: f32,
	r_end: f32,
	height: f32,
}

impl Cylinder {
	pub fn new(r_start: f32, r_end: f32, height: f32) -> Result<Cylinder, ConfigError> {
		let valid = height > 0.0 && height.is_finite()
			&& r_start >= 0.0 && r_start.is_finite()
			&& r_end >= 0.0 && r_end.is_finite()
			&& (r_start > 0.0 || r_end > 0.0);
		if !valid {
			return Err(ConfigError::DegenerateCylinder { r_start, r_end, height });
		}
		Ok(Cylinder { r_start, r_end, height })
	}

	pub fn r_start(&self) -> f32 {
		self.r_start
	}

	pub fn r_end(&self) -> f32 {
		self.r_end
	}

	pub fn height(&self) -> f32 {
		self.height
	}

	fn spans(&self, z: f32) -> bool {
		0.0 <= z && z <= self.height
	}

	/// Real roots, in increasing order, of x² + y² = (k z + r_start)² along the ray.
	/// When the equation degenerates to a linear one its root is returned twice.
	pub fn roots(&self, ray: Ray) -> Option<(f32, f32)> {
		let k = (self.r_end - self.r_start) / self.height;
		let r0 = self.r_start;
		let Ray { origin: s, direction: d } = ray;

		let a = d.x*d.x + d.y*d.y - d.z*d.z*k*k;
		let b = 2.0*s.x*d.x + 2.0*s.y*d.y - 2.0*s.z*d.z*k*k - 2.0*d.z*k*r0;
		let c = s.x*s.x + s.y*s.y - s.z*s.z*k*k - 2.0*s.z*k*r0 - r0*r0;

		if a == 0.0 {
			if b == 0.0 {
				return None;
			}
			let t = -c / b;
			return Some((t, t));
		}

		let discriminant = b*b - 4.0*a*c;
		if !(discriminant >= 0.0) {
			return None;
		}

		let s = discriminant.sqrt();
		let t1 = (-b - s) / (2.0 * a);
		let t2 = (-b + s) / (2.0 * a);
		Some(if t1 <= t2 { (t1, t2) } else { (t2, t1) })
	}
}

impl Shape for Cylinder {
	fn intersect_local(&self, ray: Ray, _maps: &SurfaceMaps, hit: &mut HitRecord<'_>) -> bool {
		let (t_lo, t_hi) = match self.roots(ray) {
			Some(roots) => roots,
			None => return false,
		};
		let z_at = |t: f32| ray.origin.z + t * ray.direction.z;

		// decided on the raw entry root, before clamping
		let inside = t_lo < 0.0 || !self.spans(z_at(t_lo));

		let clamp = |t: f32| if self.spans(z_at(t)) { t } else { NO_HIT };
		let (t1, t2) = (clamp(t_lo), clamp(t_hi));
		let t = if t1 > 0.0 && t2 > 0.0 { t1.min(t2) } else { t1.max(t2) };

		if t < 0.0 || !hit.is_closer(t) {
			return false;
		}

		let p = ray.point_at(t);
		let sign: f32 = if inside { -1.0 } else { 1.0 };
		// constant slope term, not the exact gradient of the cone
		let normal = match (sign * Vec3::new(p.x, p.y, (self.r_end - self.r_start) * 0.5)).try_normalized() {
			Some(n) => n,
			None => return false,
		};
		hit.record(t, p, normal, Color::WHITE);
		true
	}
}

/// Unit sphere centered at the origin
#[derive(Copy, Clone, Debug, Default)]
pub struct Sphere;

impl Shape for Sphere {
	fn intersect_local(&self, ray: Ray, maps: &SurfaceMaps, hit: &mut HitRecord<'_>) -> bool {
		let a = Vec3::dot(ray.direction, ray.direction);
		let b = 2.0 * Vec3::dot(ray.origin, ray.direction);
		let c = Vec3::dot(ray.origin, ray.origin) - 1.0;
		let discriminant = b * b - 4.0 * a * c;
		if a == 0.0 || !(discriminant >= 0.0) {
			return false;
		}

		let t = {
			let s = discriminant.sqrt();
			let t1 = (-b - s) / (2.0 * a);
			if t1 >= 0.0 { t1 } else { (-b + s) / (2.0 * a) }
		};
		if t < 0.0 || !hit.is_closer(t) {
			return false;
		}

		let p = ray.point_at(t);
		let normal = match p.try_normalized() {
			Some(n) => n,
			None => return false,
		};
		let u = normal.z.atan2(normal.x) * INV_2_PI;
		let v = 1.0 - normal.y.clamp(-1.0, 1.0).acos() * INV_PI;
		hit.record(t, p, normal, maps.color((u - u.floor(), v)));
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::assert_vec_eq;
	use crate::texture::{NormalMap, Texture};

	fn cast(shape: &dyn Shape, origin: Vec3, direction: Vec3) -> Option<HitRecord<'static>> {
		let mut hit = HitRecord::new();
		if shape.intersect_local(Ray::new(origin, direction), &SurfaceMaps::default(), &mut hit) {
			Some(hit)
		} else {
			None
		}
	}

	#[test]
	fn face_table() {
		let normals: Vec<Vec3> = Face::ALL.iter().map(|f| f.normal()).collect();
		assert_eq!(normals, vec![
			Vec3::new(1.0, 0.0, 0.0),
			Vec3::new(0.0, 1.0, 0.0),
			Vec3::new(0.0, 0.0, 1.0),
			Vec3::new(-1.0, 0.0, 0.0),
			Vec3::new(0.0, -1.0, 0.0),
			Vec3::new(0.0, 0.0, -1.0),
		]);
		for (i, face) in Face::ALL.iter().enumerate() {
			assert_eq!(face.index(), i);
		}
	}

	#[test]
	fn box_back_face() {
		let hit = cast(&Cuboid, Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0)).unwrap();
		assert_eq!(hit.t, 4.0);
		assert_eq!(hit.point, Vec3::new(0.0, 0.0, 1.0));
		assert_eq!(hit.normal, Vec3::new(0.0, 0.0, 1.0));
		assert_eq!(hit.surface_color, Color::WHITE);
	}

	#[test]
	fn box_axis_rays_hit_facing_face() {
		for &face in Face::ALL.iter() {
			let n = face.normal();
			let hit = cast(&Cuboid, n * 3.0, -n).unwrap();
			assert_eq!(hit.t, 2.0);
			assert_eq!(hit.normal, n);
		}
	}

	#[test]
	fn box_from_inside_hits_exit_face() {
		let hit = cast(&Cuboid, Vec3::zero(), Vec3::new(0.0, 0.5, 0.0)).unwrap();
		assert_eq!(hit.t, 2.0);
		assert_eq!(hit.normal, Vec3::new(0.0, 1.0, 0.0));
	}

	#[test]
	fn box_misses() {
		// beside the box
		assert!(cast(&Cuboid, Vec3::new(2.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0)).is_none());
		// pointing away
		assert!(cast(&Cuboid, Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0)).is_none());
		// no direction at all
		assert!(cast(&Cuboid, Vec3::new(0.0, 0.0, 5.0), Vec3::zero()).is_none());
	}

	#[test]
	fn box_oblique_ray() {
		let hit = cast(&Cuboid, Vec3::new(-3.0, 0.5, 0.0), Vec3::new(1.0, 0.25, 0.0)).unwrap();
		assert_eq!(hit.t, 2.0);
		assert_eq!(hit.point, Vec3::new(-1.0, 1.0, 0.0));
		// the edge is shared by the left and top faces: the lowest index wins
		assert_eq!(hit.normal, Vec3::new(0.0, 1.0, 0.0));
	}

	#[test]
	fn box_keeps_closer_record() {
		let mut hit = HitRecord::new();
		hit.record(1.0, Vec3::zero(), Vec3::new(1.0, 0.0, 0.0), Color::BLACK);
		let before = hit;
		let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
		assert!(!Cuboid.intersect_local(ray, &SurfaceMaps::default(), &mut hit));
		assert_eq!(hit.t, before.t);
		assert_eq!(hit.normal, before.normal);
		assert_eq!(hit.surface_color, before.surface_color);
	}

	#[test]
	fn front_face_texture_is_not_mirrored() {
		let front = Face::Front;
		// seen from -z, +x is on the left of the viewer
		assert_eq!(front.texture_uv(Vec3::new(1.0, -1.0, -1.0)), (0.0, 1.0));
		assert_eq!(front.texture_uv(Vec3::new(-1.0, 1.0, -1.0)), (1.0, 0.0));
		assert_eq!(Face::Back.texture_uv(Vec3::new(1.0, -1.0, 1.0)), (1.0, 1.0));
		assert_eq!(Face::Right.normal_map_uv(Vec3::new(1.0, -1.0, 1.0)), (0.0, 1.0));
	}

	#[test]
	fn texture_corners_of_every_face() {
		assert_eq!(Face::Right.texture_uv(Vec3::new(1.0, 1.0, 1.0)), (0.0, 0.0));
		assert_eq!(Face::Right.texture_uv(Vec3::new(1.0, -1.0, -1.0)), (1.0, 1.0));
		assert_eq!(Face::Top.texture_uv(Vec3::new(1.0, 1.0, -1.0)), (0.0, 1.0));
		assert_eq!(Face::Top.texture_uv(Vec3::new(-1.0, 1.0, 1.0)), (1.0, 0.0));
		assert_eq!(Face::Left.texture_uv(Vec3::new(-1.0, 1.0, 1.0)), (1.0, 0.0));
		assert_eq!(Face::Left.texture_uv(Vec3::new(-1.0, -1.0, -1.0)), (0.0, 1.0));
		assert_eq!(Face::Bottom.texture_uv(Vec3::new(-1.0, -1.0, 1.0)), (1.0, 1.0));
		assert_eq!(Face::Bottom.texture_uv(Vec3::new(1.0, -1.0, -1.0)), (0.0, 0.0));
	}

	#[test]
	fn box_samples_texture_and_normal_map() {
		// 2x2 texture, top row red / green, bottom row blue / white
		let pixels: [u8; 16] = [
			255, 0, 0, 255,    0, 255, 0, 255,
			0, 0, 255, 255,    255, 255, 255, 255,
		];
		// uniform normal map tilting towards +x
		let bump: Vec<u8> = [255, 128, 128, 255].repeat(4);
		let maps = SurfaceMaps {
			texture: Some(Texture::from_rgba8(&pixels, 2).unwrap()),
			normal_map: Some(NormalMap::from_rgba8(&bump, 2).unwrap()),
		};

		let mut hit = HitRecord::new();
		let ray = Ray::new(Vec3::new(0.9, 0.9, 5.0), Vec3::new(0.0, 0.0, -1.0));
		assert!(Cuboid.intersect_local(ray, &maps, &mut hit));
		// back face, upper right corner seen from +z: u = 0.95, v = 0.05
		assert_eq!(hit.surface_color, Color::WHITE);

		let mut hit = HitRecord::new();
		let ray = Ray::new(Vec3::new(-0.9, 0.9, 5.0), Vec3::new(0.0, 0.0, -1.0));
		assert!(Cuboid.intersect_local(ray, &maps, &mut hit));
		assert_eq!(hit.surface_color, Color::new(0.0, 0.0, 1.0, 1.0));

		// perturbed towards +x, still facing +z
		assert!(hit.normal.x > 0.5);
		assert!(hit.normal.z > 0.5);
		assert!((hit.normal.length() - 1.0).abs() < 1e-5);
	}

	#[test]
	fn straight_cylinder_side() {
		let cyl = Cylinder::new(1.0, 1.0, 2.0).unwrap();
		let hit = cast(&cyl, Vec3::new(5.0, 0.0, 1.0), Vec3::new(-1.0, 0.0, 0.0)).unwrap();
		assert_eq!(hit.t, 4.0);
		assert_vec_eq(hit.point, Vec3::new(1.0, 0.0, 1.0));
		assert_vec_eq(hit.normal, Vec3::new(1.0, 0.0, 0.0));
		assert_eq!(hit.surface_color, Color::WHITE);
	}

	#[test]
	fn cylinder_on_axis_ray_misses() {
		let cyl = Cylinder::new(1.0, 1.0, 1.0).unwrap();
		assert!(cast(&cyl, Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0)).is_none());
	}

	#[test]
	fn cylinder_tangent_ray() {
		let cyl = Cylinder::new(1.0, 1.0, 2.0).unwrap();
		let ray = Ray::new(Vec3::new(1.0, -5.0, 1.0), Vec3::new(0.0, 1.0, 0.0));
		assert_eq!(cyl.roots(ray), Some((5.0, 5.0)));
		let hit = cast(&cyl, ray.origin, ray.direction).unwrap();
		assert_eq!(hit.t, 5.0);
		assert!(!hit.normal.has_nan());
		assert_vec_eq(hit.normal, Vec3::new(1.0, 0.0, 0.0));
	}

	#[test]
	fn cylinder_from_inside_inverts_normal() {
		let cyl = Cylinder::new(1.0, 1.0, 2.0).unwrap();
		let hit = cast(&cyl, Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0)).unwrap();
		assert_eq!(hit.t, 1.0);
		assert_vec_eq(hit.normal, Vec3::new(0.0, -1.0, 0.0));
	}

	#[test]
	fn cylinder_is_open_ended() {
		let cyl = Cylinder::new(1.0, 1.0, 2.0).unwrap();
		// enters through the open bottom, exits through the side
		let hit = cast(&cyl, Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.5, 0.0, 1.0)).unwrap();
		assert_eq!(hit.t, 2.0);
		assert_vec_eq(hit.point, Vec3::new(1.0, 0.0, 1.0));
		assert_vec_eq(hit.normal, Vec3::new(-1.0, 0.0, 0.0));
		// beyond the top
		assert!(cast(&cyl, Vec3::new(5.0, 0.0, 3.0), Vec3::new(-1.0, 0.0, 0.0)).is_none());
	}

	#[test]
	fn cylinder_seen_through_its_open_end() {
		let cyl = Cylinder::new(1.0, 1.0, 2.0).unwrap();
		// first root at z = -1 is below the tube, the hit is on the inner side
		let ray = Ray::new(Vec3::new(-3.0, 0.0, -3.0), Vec3::new(1.0, 0.0, 1.0));
		assert_eq!(cyl.roots(ray), Some((2.0, 4.0)));
		let hit = cast(&cyl, ray.origin, ray.direction).unwrap();
		assert_eq!(hit.t, 4.0);
		assert_vec_eq(hit.point, Vec3::new(1.0, 0.0, 1.0));
		assert_vec_eq(hit.normal, Vec3::new(-1.0, 0.0, 0.0));
	}

	#[test]
	fn tapered_cylinder() {
		// radius grows from 1 at z = 0 to 2 at z = 2
		let cyl = Cylinder::new(1.0, 2.0, 2.0).unwrap();
		let hit = cast(&cyl, Vec3::new(5.0, 0.0, 1.0), Vec3::new(-1.0, 0.0, 0.0)).unwrap();
		assert_eq!(hit.t, 3.5);
		assert_vec_eq(hit.point, Vec3::new(1.5, 0.0, 1.0));
		assert_vec_eq(hit.normal, Vec3::new(1.5, 0.0, 0.5).normalized());
	}

	#[test]
	fn cone_parallel_to_its_slant() {
		// radius z, the ray runs parallel to the slant line x = z: a single, linear root
		let cyl = Cylinder::new(0.0, 1.0, 1.0).unwrap();
		let ray = Ray::new(Vec3::new(-0.5, 0.0, 0.0), Vec3::new(1.0, 0.0, 1.0));
		let (t_lo, t_hi) = cyl.roots(ray).unwrap();
		assert_eq!(t_lo, t_hi);
		assert!((t_lo - 0.25).abs() < 1e-6);
	}

	#[test]
	fn degenerate_cylinders() {
		assert!(Cylinder::new(1.0, 1.0, 0.0).is_err());
		assert!(Cylinder::new(1.0, 1.0, -1.0).is_err());
		assert!(Cylinder::new(0.0, 0.0, 1.0).is_err());
		assert!(Cylinder::new(-1.0, 1.0, 1.0).is_err());
		assert!(Cylinder::new(f32::NAN, 1.0, 1.0).is_err());
		assert!(Cylinder::new(0.0, 1.0, 3.0).is_ok());
	}

	#[test]
	fn sphere_hits() {
		let hit = cast(&Sphere, Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -1.0)).unwrap();
		assert_eq!(hit.t, 2.0);
		assert_eq!(hit.normal, Vec3::new(0.0, 0.0, 1.0));

		// from inside, the far side
		let hit = cast(&Sphere, Vec3::zero(), Vec3::new(2.0, 0.0, 0.0)).unwrap();
		assert_eq!(hit.t, 0.5);
		assert_eq!(hit.normal, Vec3::new(1.0, 0.0, 0.0));

		assert!(cast(&Sphere, Vec3::new(0.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -1.0)).is_none());
		assert!(cast(&Sphere, Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, 1.0)).is_none());
	}
}
