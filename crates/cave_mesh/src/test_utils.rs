//! Test utilities shared by the stage tests.
//!
//! Provides grid fixtures and mesh invariant helpers.

use glam::Vec3;

use crate::grid::{Cell, Grid};
use crate::marching_squares::{triangulate, FloorMesh, SquareGrid};

// =============================================================================
// Grid fixtures
// =============================================================================

/// Parse a grid drawn as text, top row first (`#` wall, anything else open).
///
/// ```text
/// "###",
/// "#.#",   → 3×3 grid, centre open
/// "###",
/// ```
pub fn grid_from_rows(rows: &[&str]) -> Grid {
  let height = rows.len();
  let width = rows.first().map_or(0, |row| row.len());
  Grid::from_fn(width, height, |x, y| {
    let row = rows[height - 1 - y].as_bytes();
    if row[x] == b'#' {
      Cell::Wall
    } else {
      Cell::Open
    }
  })
}

/// Wall-bordered room with an open interior.
pub fn empty_room(width: usize, height: usize) -> Grid {
  Grid::from_fn(width, height, |x, y| {
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
      Cell::Wall
    } else {
      Cell::Open
    }
  })
}

/// Room with a single wall pillar in the middle.
pub fn room_with_pillar() -> Grid {
  grid_from_rows(&[
    "#########",
    "#.......#",
    "#.......#",
    "#.......#",
    "#...#...#",
    "#.......#",
    "#.......#",
    "#.......#",
    "#########",
  ])
}

/// Build the square grid and triangulate it with unit squares.
pub fn triangulate_grid(grid: &Grid) -> (SquareGrid, FloorMesh) {
  let mut squares = SquareGrid::build(grid, 1.0).expect("grid should be at least 2x2");
  let floor = triangulate(&mut squares).expect("triangulation should succeed");
  (squares, floor)
}

// =============================================================================
// Mesh helpers
// =============================================================================

/// Face normal of a triangle given by three positions.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
  (b - a).cross(c - a)
}

/// Every directed edge of every triangle in the floor mesh.
pub fn triangle_edges(floor: &FloorMesh) -> Vec<(u32, u32)> {
  floor
    .triangles
    .iter()
    .flat_map(|triangle| {
      let [a, b, c] = triangle.vertices;
      [(a, b), (b, c), (c, a)]
    })
    .collect()
}
