//! Cave mesh baker.
//!
//! Generates a cave from a TOML configuration and writes the floor and wall
//! meshes as separate OBJ files:
//! - floor.obj: marching-squares floor, shared vertices
//! - walls.obj: extruded wall strips, one quad per outline edge

mod config;
mod obj;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use config::Config;

/// Cave mesh baker for the cave_mesh generator.
#[derive(Parser, Debug)]
#[command(name = "bake_cave")]
#[command(about = "Generates a cave and bakes its floor and walls to OBJ")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Output directory (default: output_dir from the config, next to it).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Override the seed text from the config.
	#[arg(long, conflicts_with = "random_seed")]
	seed: Option<String>,

	/// Ignore the configured seed and derive one from the clock.
	#[arg(long)]
	random_seed: bool,

	/// Print the smoothed grid to stdout.
	#[arg(long)]
	print_grid: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();

	println!("Loading config from: {}", args.config.display());
	let config = Config::load(&args.config)?;

	let output_dir = args.output.clone().unwrap_or_else(|| {
		args.config
			.parent()
			.unwrap_or(Path::new("."))
			.join(&config.output_dir)
	});

	let mut cave_config = config.to_cave_config();
	if let Some(seed) = args.seed {
		cave_config = cave_config.with_seed(seed);
	}
	if args.random_seed {
		cave_config = cave_config.with_random_seed(true);
	}

	println!(
		"Generating {}x{} cave ({}% fill, {} smoothing passes)",
		cave_config.width, cave_config.height, cave_config.fill_percent, cave_config.smooth_iterations
	);

	let cave = cave_mesh::generate(&cave_config).context("Cave generation failed")?;

	if args.print_grid {
		println!("\n{}", cave.grid);
	}

	std::fs::create_dir_all(&output_dir)
		.with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;

	obj::save_obj(&output_dir.join("floor.obj"), "floor", &cave.floor).context("Writing floor.obj")?;
	println!("  ✓ floor.obj ({} triangles)", cave.floor.triangle_count());

	obj::save_obj(&output_dir.join("walls.obj"), "walls", &cave.walls).context("Writing walls.obj")?;
	println!("  ✓ walls.obj ({} triangles)", cave.walls.triangle_count());

	let stats = cave.stats;
	println!("\nSeed: {}", cave.seed.text);
	println!(
		"Outlines: {}, floor vertices: {}, wall vertices: {}",
		stats.outline_count, stats.floor_vertices, stats.wall_vertices
	);
	println!(
		"Timings (µs): fill {}, smooth {}, triangulate {}, outlines {}, walls {}, total {}",
		stats.fill_us, stats.smooth_us, stats.triangulate_us, stats.outline_us, stats.walls_us, stats.total_us
	);
	println!("\nDone! Output written to: {}", output_dir.display());

	Ok(())
}
