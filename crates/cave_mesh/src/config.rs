//! CaveConfig - parameters for a single generation run and seed resolution.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::error::{CaveError, Result};

/// Smallest accepted grid dimension (one interior cell surrounded by border).
pub const MIN_GRID_DIMENSION: usize = 3;

/// Largest accepted fill percentage.
pub const MAX_FILL_PERCENT: u32 = 100;

/// Configuration for cave generation.
#[derive(Clone, Debug, PartialEq)]
pub struct CaveConfig {
  /// Grid cells along X.
  pub width: usize,

  /// Grid cells along Z.
  pub height: usize,

  /// Chance (0-100) that an interior cell starts as wall.
  pub fill_percent: u32,

  /// Number of cellular-automaton passes.
  pub smooth_iterations: u32,

  /// Seed text, hashed into the generator seed.
  pub seed: String,

  /// Ignore `seed` and derive one from the current time.
  pub use_random_seed: bool,

  /// World size of one grid cell.
  pub square_size: f32,

  /// Depth of the extruded wall strip.
  pub wall_height: f32,
}

impl Default for CaveConfig {
  fn default() -> Self {
    Self {
      width: 80,
      height: 60,
      fill_percent: 45,
      smooth_iterations: 5,
      seed: String::from("cave"),
      use_random_seed: false,
      square_size: 1.0,
      wall_height: 5.0,
    }
  }
}

impl CaveConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_size(mut self, width: usize, height: usize) -> Self {
    self.width = width;
    self.height = height;
    self
  }

  pub fn with_fill_percent(mut self, fill_percent: u32) -> Self {
    self.fill_percent = fill_percent;
    self
  }

  pub fn with_smooth_iterations(mut self, iterations: u32) -> Self {
    self.smooth_iterations = iterations;
    self
  }

  pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
    self.seed = seed.into();
    self.use_random_seed = false;
    self
  }

  pub fn with_random_seed(mut self, use_random_seed: bool) -> Self {
    self.use_random_seed = use_random_seed;
    self
  }

  pub fn with_square_size(mut self, square_size: f32) -> Self {
    self.square_size = square_size;
    self
  }

  pub fn with_wall_height(mut self, wall_height: f32) -> Self {
    self.wall_height = wall_height;
    self
  }

  /// Reject parameters that cannot produce a valid cave.
  pub fn validate(&self) -> Result<()> {
    if self.width < MIN_GRID_DIMENSION || self.height < MIN_GRID_DIMENSION {
      return Err(CaveError::invalid(format!(
        "grid must be at least {MIN_GRID_DIMENSION}x{MIN_GRID_DIMENSION}, got {}x{}",
        self.width, self.height
      )));
    }
    if self.fill_percent > MAX_FILL_PERCENT {
      return Err(CaveError::invalid(format!(
        "fill_percent must be in [0, {MAX_FILL_PERCENT}], got {}",
        self.fill_percent
      )));
    }
    if !(self.square_size.is_finite() && self.square_size > 0.0) {
      return Err(CaveError::invalid(format!(
        "square_size must be positive, got {}",
        self.square_size
      )));
    }
    if !(self.wall_height.is_finite() && self.wall_height > 0.0) {
      return Err(CaveError::invalid(format!(
        "wall_height must be positive, got {}",
        self.wall_height
      )));
    }
    Ok(())
  }

  /// Resolve the effective seed for this run.
  ///
  /// Random seeds are taken from the wall clock once, so the returned text can
  /// be fed back through `with_seed` to reproduce the run.
  pub fn resolve_seed(&self) -> ResolvedSeed {
    if self.use_random_seed {
      let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
      ResolvedSeed::from_text(nanos.to_string())
    } else {
      ResolvedSeed::from_text(self.seed.clone())
    }
  }
}

/// Seed text together with the integer it hashes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSeed {
  pub text: String,
  pub value: u64,
}

impl ResolvedSeed {
  pub fn from_text(text: String) -> Self {
    let value = hash_seed(&text);
    Self { text, value }
  }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the UTF-8 bytes of `seed`.
///
/// Stable across platforms and compiler versions, unlike `DefaultHasher`.
pub const fn hash_seed(seed: &str) -> u64 {
  let bytes = seed.as_bytes();
  let mut hash = FNV_OFFSET_BASIS;
  let mut i = 0;
  while i < bytes.len() {
    hash ^= bytes[i] as u64;
    hash = hash.wrapping_mul(FNV_PRIME);
    i += 1;
  }
  hash
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
