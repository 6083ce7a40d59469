//! Analytic ray tracing of transformed boxes, tapered cylinders and spheres.
//!
//! Each `Surface` owns an affine transform kept together with its exact
//! inverse. World rays are brought into the surface's object space, solved
//! in closed form against the canonical shape, and the closest hit over the
//! whole `Scene` is accumulated in a `HitRecord`.

#[macro_use]
extern crate serde_derive;

pub mod camera;
pub mod description;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod material;
pub mod math;
pub mod primitive;
pub mod render;
pub mod scene;
pub mod surface;
pub mod texture;

pub use error::ConfigError;
pub use hit::HitRecord;
pub use scene::Scene;
pub use surface::Surface;
