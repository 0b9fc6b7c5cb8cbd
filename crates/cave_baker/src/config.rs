//! Configuration parsing for cave baking.

use anyhow::{Context, Result};
use cave_mesh::CaveConfig;
use serde::Deserialize;
use std::path::Path;

/// Root configuration for a cave bake.
///
/// Every generation field is optional and falls back to `CaveConfig::default()`.
#[derive(Debug, Deserialize)]
pub struct Config {
	/// Output directory, relative to the config file.
	#[serde(default = "default_output_dir")]
	pub output_dir: String,
	/// Grid cells along X.
	#[serde(default = "default_width")]
	pub width: usize,
	/// Grid cells along Z.
	#[serde(default = "default_height")]
	pub height: usize,
	/// Initial wall chance, 0-100.
	#[serde(default = "default_fill_percent")]
	pub fill_percent: u32,
	/// Cellular-automaton passes.
	#[serde(default = "default_smooth_iterations")]
	pub smooth_iterations: u32,
	/// Seed text.
	#[serde(default = "default_seed")]
	pub seed: String,
	/// Derive the seed from the clock instead of `seed`.
	#[serde(default)]
	pub use_random_seed: bool,
	/// World size of one cell.
	#[serde(default = "default_square_size")]
	pub square_size: f32,
	/// Wall strip depth.
	#[serde(default = "default_wall_height")]
	pub wall_height: f32,
}

fn default_output_dir() -> String {
	String::from("cave")
}

fn default_width() -> usize {
	CaveConfig::default().width
}

fn default_height() -> usize {
	CaveConfig::default().height
}

fn default_fill_percent() -> u32 {
	CaveConfig::default().fill_percent
}

fn default_smooth_iterations() -> u32 {
	CaveConfig::default().smooth_iterations
}

fn default_seed() -> String {
	CaveConfig::default().seed
}

fn default_square_size() -> f32 {
	CaveConfig::default().square_size
}

fn default_wall_height() -> f32 {
	CaveConfig::default().wall_height
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate TOML text.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config = toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if config.output_dir.trim().is_empty() {
			anyhow::bail!("output_dir must not be empty");
		}
		config
			.to_cave_config()
			.validate()
			.with_context(|| "Invalid cave parameters")?;

		Ok(config)
	}

	/// Generation parameters for `cave_mesh`.
	pub fn to_cave_config(&self) -> CaveConfig {
		CaveConfig::new()
			.with_size(self.width, self.height)
			.with_fill_percent(self.fill_percent)
			.with_smooth_iterations(self.smooth_iterations)
			.with_seed(self.seed.clone())
			.with_random_seed(self.use_random_seed)
			.with_square_size(self.square_size)
			.with_wall_height(self.wall_height)
	}
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
