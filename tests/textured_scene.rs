extern crate image;
extern crate raytrace;
extern crate tempfile;

use std::fs;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use raytrace::description::{self, DescriptionError};
use raytrace::math::*;
use raytrace::texture::Color;
use raytrace::ConfigError;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

/// Directory holding a 4x4 texture, green with a red top left texel, and a
/// 2x2 normal map tilting towards +x
fn assets() -> TempDir {
	let dir = TempDir::new().unwrap();
	let mut tex = RgbaImage::from_pixel(4, 4, GREEN);
	tex.put_pixel(0, 0, RED);
	tex.save(dir.path().join("tex.png")).unwrap();
	RgbaImage::from_pixel(2, 2, Rgba([255, 128, 128, 255])).save(dir.path().join("bump.png")).unwrap();
	RgbaImage::new(4, 2).save(dir.path().join("strip.png")).unwrap();
	dir
}

fn write_scene(dir: &TempDir, surface: &str) -> std::path::PathBuf {
	let path = dir.path().join("scene.json");
	let json = format!(r#"{{
		"camera": {{ "eye": [0, 0, 10], "look_at": 0, "fov": 45, "resolution": 8 }},
		"surfaces": [ {} ]
	}}"#, surface);
	fs::write(&path, json).unwrap();
	path
}

#[test]
fn texture_and_normal_map_from_description() {
	let dir = assets();
	let path = write_scene(&dir, r#"{
		"name": "crate",
		"shape": { "type": "box" },
		"texture": { "file": "tex.png", "dim": 4 },
		"normal_map": "bump.png"
	}"#);

	let (scene, _) = description::load(&path).unwrap();
	let surface = &scene.surfaces()[0];
	assert_eq!(surface.texture().map(|t| t.dim()), Some(4));
	// resized to the texture's size
	assert_eq!(surface.normal_map().map(|m| m.dim()), Some(4));

	// back face, lower left corner seen from +z: top left texel of the image
	let hit = scene.intersect(Ray::new(Vec3::new(-0.9, -0.9, 5.0), Vec3::new(0.0, 0.0, -1.0))).unwrap();
	assert_eq!(hit.surface_color, Color::new(1.0, 0.0, 0.0, 1.0));
	assert!(hit.normal.x > 0.5);
	assert!(hit.normal.z > 0.5);

	let hit = scene.intersect(Ray::new(Vec3::new(0.9, 0.9, 5.0), Vec3::new(0.0, 0.0, -1.0))).unwrap();
	assert_eq!(hit.surface_color, Color::new(0.0, 1.0, 0.0, 1.0));
}

#[test]
fn non_square_texture_in_description() {
	let dir = assets();
	let path = write_scene(&dir, r#"{
		"name": "strip",
		"shape": { "type": "box" },
		"texture": { "file": "strip.png", "dim": 4 }
	}"#);

	match description::load(&path) {
		Err(DescriptionError::Surface { surface, source: ConfigError::NonSquareImage { width: 4, height: 2 } }) => {
			assert_eq!(surface, "strip");
		}
		other => panic!("unexpected result {:?}", other.map(|_| ())),
	}
}
