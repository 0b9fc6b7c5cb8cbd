//! Seeded random fill of the initial grid.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Cell, Grid};
use crate::config::{MAX_FILL_PERCENT, MIN_GRID_DIMENSION};
use crate::error::{CaveError, Result};

/// Fill a `width × height` grid with noise.
///
/// Border cells are always Wall. Interior cells are visited x-outer, y-inner
/// and each consumes one draw from `[0, 100)`; the cell is Wall when the draw
/// is below `fill_percent`. The same `seed` always yields the same grid.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "grid::random_fill"))]
pub fn random_fill(width: usize, height: usize, fill_percent: u32, seed: u64) -> Result<Grid> {
  if width < MIN_GRID_DIMENSION || height < MIN_GRID_DIMENSION {
    return Err(CaveError::invalid(format!(
      "grid must be at least {MIN_GRID_DIMENSION}x{MIN_GRID_DIMENSION}, got {width}x{height}"
    )));
  }
  if fill_percent > MAX_FILL_PERCENT {
    return Err(CaveError::invalid(format!(
      "fill_percent must be in [0, {MAX_FILL_PERCENT}], got {fill_percent}"
    )));
  }

  let mut rng = ChaCha8Rng::seed_from_u64(seed);
  let grid = Grid::from_fn(width, height, |x, y| {
    let is_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
    // Border cells never consume a draw
    if is_border || rng.random_range(0..100u32) < fill_percent {
      Cell::Wall
    } else {
      Cell::Open
    }
  });

  Ok(grid)
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
