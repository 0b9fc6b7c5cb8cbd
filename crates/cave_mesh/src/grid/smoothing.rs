//! Cellular-automaton smoothing.
//!
//! ```text
//! walls among 8 neighbours (outside = wall)
//!   > 4  → Wall
//!   < 4  → Open
//!   = 4  → unchanged
//! ```
//!
//! Every pass reads a frozen snapshot and writes a fresh buffer, so the result
//! does not depend on the order cells are visited. Columns are independent
//! within a pass and run in parallel; the end of the pass is the barrier.

use rayon::prelude::*;

use super::{Cell, Grid};

/// New state of `(x, y)` given the previous pass.
#[inline]
pub fn smoothed_cell(snapshot: &Grid, x: usize, y: usize) -> Cell {
  match snapshot.neighbour_wall_count(x, y) {
    count if count > 4 => Cell::Wall,
    count if count < 4 => Cell::Open,
    _ => snapshot.get(x, y),
  }
}

/// One smoothing pass.
pub fn smooth_pass(snapshot: &Grid) -> Grid {
  let mut next = snapshot.clone();
  let height = snapshot.height;
  if height == 0 {
    return next;
  }

  next
    .cells
    .par_chunks_mut(height)
    .enumerate()
    .for_each(|(x, column)| {
      for (y, cell) in column.iter_mut().enumerate() {
        *cell = smoothed_cell(snapshot, x, y);
      }
    });

  next
}

/// Apply `iterations` smoothing passes.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "grid::smooth"))]
pub fn smooth(grid: &Grid, iterations: u32) -> Grid {
  let mut current = grid.clone();
  for _ in 0..iterations {
    current = smooth_pass(&current);
  }
  current
}

#[cfg(test)]
#[path = "smoothing_test.rs"]
mod smoothing_test;
