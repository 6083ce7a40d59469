use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use image::DynamicImage;
use log::LevelFilter;

use raytrace::description::{self, DescriptionError};
use raytrace::render;

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl From<LogLevel> for LevelFilter {
	fn from(level: LogLevel) -> Self {
		match level {
			LogLevel::Error => LevelFilter::Error,
			LogLevel::Warn => LevelFilter::Warn,
			LogLevel::Info => LevelFilter::Info,
			LogLevel::Debug => LevelFilter::Debug,
			LogLevel::Trace => LevelFilter::Trace,
		}
	}
}

/// Ray trace a JSON scene description into albedo, normal and depth images
#[derive(Parser)]
#[command(name = "render_scene")]
struct Args {
	/// Scene description file
	scene: PathBuf,

	/// Output file prefix, images are written to <prefix>_{albedo,normal,depth}.png
	#[arg(short, long, default_value = "image")]
	output: String,

	/// Trace one ray per block of this many pixels squared
	#[arg(short, long, default_value_t = 1)]
	block_size: usize,

	#[arg(long, value_enum, default_value = "info")]
	log_level: LogLevel,
}

fn write(img: DynamicImage, prefix: &str, kind: &str) -> Result<(), DescriptionError> {
	let path = PathBuf::from(format!("{}_{}.png", prefix, kind));
	img.save(&path).map_err(|source| DescriptionError::Output { path: path.clone(), source })?;
	log::info!("wrote {}", path.display());
	Ok(())
}

fn run(args: &Args) -> Result<(), DescriptionError> {
	let (scene, camera) = description::load(&args.scene)?;
	log::info!("loaded {} surfaces from {}", scene.len(), args.scene.display());

	let buffer = render::render(&scene, &camera, args.block_size)?;

	write(buffer.albedo_image().into(), &args.output, "albedo")?;
	write(buffer.normal_image().into(), &args.output, "normal")?;
	write(buffer.depth_image().into(), &args.output, "depth")?;
	Ok(())
}

fn main() -> ExitCode {
	let args = Args::parse();
	env_logger::Builder::from_default_env()
		.filter_level(args.log_level.clone().into())
		.init();

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			log::error!("{}", e);
			ExitCode::FAILURE
		}
	}
}
