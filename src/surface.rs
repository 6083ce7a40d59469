use crate::error::ConfigError;
use crate::geometry::Shape;
use crate::hit::HitRecord;
use crate::material::Material;
use crate::math::*;
use crate::primitive::{Cuboid, Cylinder, Sphere};
use crate::texture::{NormalMap, SurfaceMaps, Texture};

/// A shape placed in the world, with its appearance.
///
/// Everything but the local intersection is shared by all shapes: the
/// transform pair, the world/object ray conversion and the normal fix-up.
#[derive(Debug)]
pub struct Surface {
	name: String,
	shape: Box<dyn Shape + Send + Sync>,
	transform: AffineTransform,
	material: Material,
	maps: SurfaceMaps,
}

impl Surface {
	pub fn new<S: Shape + Send + Sync + 'static>(shape: S) -> Surface {
		Surface {
			name: String::from("Unknown"),
			shape: Box::new(shape),
			transform: AffineTransform::identity(),
			material: Material::default(),
			maps: SurfaceMaps::default(),
		}
	}

	/// Cube of side 2 centered at the origin
	pub fn cuboid() -> Surface {
		Surface::new(Cuboid)
	}

	/// Frustum along z from radius `r_start` at z = 0 to `r_end` at z = `height`
	pub fn cylinder(r_start: f32, r_end: f32, height: f32) -> Result<Surface, ConfigError> {
		Ok(Surface::new(Cylinder::new(r_start, r_end, height)?))
	}

	/// Unit sphere centered at the origin
	pub fn sphere() -> Surface {
		Surface::new(Sphere)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn set_name<S: Into<String>>(&mut self, name: S) {
		self.name = name.into();
	}

	pub fn shape(&self) -> &dyn Shape {
		self.shape.as_ref()
	}

	pub fn transform(&self) -> &AffineTransform {
		&self.transform
	}

	pub fn material(&self) -> &Material {
		&self.material
	}

	pub fn texture(&self) -> Option<&Texture> {
		self.maps.texture.as_ref()
	}

	pub fn normal_map(&self) -> Option<&NormalMap> {
		self.maps.normal_map.as_ref()
	}

	pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
		self.transform.translate(Vec3::new(dx, dy, dz));
	}

	pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) -> Result<(), ConfigError> {
		self.transform.scale(Vec3::new(sx, sy, sz))
	}

	/// Rotate by `angle` degrees around `axis`
	pub fn rotate(&mut self, angle: f32, axis: Vec3) -> Result<(), ConfigError> {
		self.transform.rotate(angle, axis)
	}

	pub fn reset_transform(&mut self) {
		self.transform.reset();
	}

	pub fn set_material(&mut self, material: Material) {
		self.material = material;
	}

	pub fn set_texture(&mut self, texture: Texture) {
		log::debug!("{}: {}x{} texture", self.name, texture.dim(), texture.dim());
		self.maps.texture = Some(texture);
	}

	pub fn set_normal_map(&mut self, normal_map: NormalMap) {
		if let Some(ref texture) = self.maps.texture {
			if texture.dim() != normal_map.dim() {
				log::warn!("{}: normal map is {} wide, texture is {}", self.name, normal_map.dim(), texture.dim());
			}
		}
		self.maps.normal_map = Some(normal_map);
	}

	/// Intersect a world-space ray.
	///
	/// On a closer hit, `hit` ends up with the world-space point and unit
	/// normal and this surface as owner.
	pub fn intersect<'a>(&'a self, ray: Ray, hit: &mut HitRecord<'a>) -> bool {
		let object_ray = self.transform.to_object(ray);
		if !self.intersect_local(object_ray, hit) {
			return false;
		}

		// recompute the point from the world ray rather than transforming the object-space one
		hit.point = ray.point_at(hit.t);
		hit.normal = self.transform.normal_to_world(hit.normal).normalized();
		true
	}

	/// Intersect a ray already expressed in object space. The hit is left in object space.
	pub fn intersect_local<'a>(&'a self, ray: Ray, hit: &mut HitRecord<'a>) -> bool {
		if self.shape.intersect_local(ray, &self.maps, hit) {
			hit.owner = Some(self);
			true
		} else {
			false
		}
	}
}
