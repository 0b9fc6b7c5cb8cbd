//! End-to-end cave generation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ generate(config)                                                        │
//! │                                                                         │
//! │  validate ─► resolve_seed ─► random_fill ─► smooth × N                  │
//! │                                                  │                      │
//! │                                                  ▼ mesh_grid            │
//! │  ┌─────────────────────────────────────────────────────────────┐        │
//! │  │ SquareGrid::build ─► triangulate ─► extract_outlines        │        │
//! │  │                          │                 │                │        │
//! │  │                          ▼                 ▼                │        │
//! │  │                     floor MeshOutput   extrude_walls        │        │
//! │  │                                            │                │        │
//! │  │                                            ▼                │        │
//! │  │                                       wall MeshOutput       │        │
//! │  └─────────────────────────────────────────────────────────────┘        │
//! │                                                                         │
//! │  CaveMesh { grid, seed, floor, walls, outlines, stats }                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every run owns its node registry, vertex buffer, adjacency index and
//! checked set. Nothing is shared between runs, so `generate_batch` simply
//! fans configurations out over rayon.

use rayon::prelude::*;
use web_time::Instant;

use crate::config::{CaveConfig, ResolvedSeed};
use crate::error::{CaveError, Result};
use crate::grid::{random_fill, smooth, Grid};
use crate::marching_squares::{triangulate, SquareGrid};
use crate::outline::{extract_outlines, Outline};
use crate::types::MeshOutput;
use crate::walls::extrude_walls;

/// Per-stage timings (microseconds) and output counts of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
  pub fill_us: u64,
  pub smooth_us: u64,
  pub triangulate_us: u64,
  pub outline_us: u64,
  pub walls_us: u64,
  pub total_us: u64,

  pub floor_vertices: usize,
  pub floor_triangles: usize,
  pub outline_count: usize,
  pub wall_vertices: usize,
  pub wall_triangles: usize,
}

/// Meshes derived from a finished grid.
#[derive(Debug, Clone)]
pub struct CaveGeometry {
  /// Floor triangles with deduplicated vertices.
  pub floor: MeshOutput,

  /// Wall strip with its own index space.
  pub walls: MeshOutput,

  /// Closed outlines, as floor vertex indices.
  pub outlines: Vec<Outline>,

  pub stats: GenerationStats,
}

/// Result of a full generation run.
#[derive(Debug, Clone)]
pub struct CaveMesh {
  pub grid: Grid,
  /// Seed actually used; feed `seed.text` back to reproduce the run.
  pub seed: ResolvedSeed,
  pub floor: MeshOutput,
  pub walls: MeshOutput,
  pub outlines: Vec<Outline>,
  pub stats: GenerationStats,
}

#[inline]
fn elapsed_us(start: Instant) -> u64 {
  start.elapsed().as_micros() as u64
}

/// Generate a cave from scratch.
///
/// Parameters are validated before any work starts; on error nothing is
/// returned.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "cave::generate"))]
pub fn generate(config: &CaveConfig) -> Result<CaveMesh> {
  config.validate()?;
  let total_start = Instant::now();
  let seed = config.resolve_seed();

  let (grid, fill_us) = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("random_fill").entered();
    let start = Instant::now();
    let grid = random_fill(config.width, config.height, config.fill_percent, seed.value)?;
    (grid, elapsed_us(start))
  };

  let (grid, smooth_us) = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("smooth", iterations = config.smooth_iterations).entered();
    let start = Instant::now();
    let grid = smooth(&grid, config.smooth_iterations);
    (grid, elapsed_us(start))
  };

  let geometry = mesh_grid(&grid, config.square_size, config.wall_height)?;

  let stats = GenerationStats {
    fill_us,
    smooth_us,
    total_us: elapsed_us(total_start),
    ..geometry.stats
  };

  #[cfg(feature = "tracing")]
  tracing::debug!(
    seed = %seed.text,
    width = config.width,
    height = config.height,
    floor_triangles = stats.floor_triangles,
    outlines = stats.outline_count,
    wall_triangles = stats.wall_triangles,
    total_us = stats.total_us,
    "cave generated"
  );

  Ok(CaveMesh {
    grid,
    seed,
    floor: geometry.floor,
    walls: geometry.walls,
    outlines: geometry.outlines,
    stats,
  })
}

/// Mesh an existing grid: floor triangulation, outlines and walls.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "cave::mesh_grid"))]
pub fn mesh_grid(grid: &Grid, square_size: f32, wall_height: f32) -> Result<CaveGeometry> {
  if !(square_size.is_finite() && square_size > 0.0) {
    return Err(CaveError::invalid(format!("square_size must be positive, got {square_size}")));
  }
  if !(wall_height.is_finite() && wall_height > 0.0) {
    return Err(CaveError::invalid(format!("wall_height must be positive, got {wall_height}")));
  }
  let total_start = Instant::now();

  let (mut floor, triangulate_us) = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("triangulate").entered();
    let start = Instant::now();
    let mut squares = SquareGrid::build(grid, square_size)?;
    let floor = triangulate(&mut squares)?;
    (floor, elapsed_us(start))
  };

  let (outlines, outline_us) = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("extract_outlines").entered();
    let start = Instant::now();
    let outlines = extract_outlines(&floor.adjacency, &mut floor.checked)?;
    (outlines, elapsed_us(start))
  };

  let (walls, walls_us) = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("extrude_walls").entered();
    let start = Instant::now();
    let walls = extrude_walls(&outlines, &floor.vertices, wall_height)?;
    (walls, elapsed_us(start))
  };

  let floor_output = MeshOutput::from_parts(&floor.vertices, floor.indices());

  let stats = GenerationStats {
    triangulate_us,
    outline_us,
    walls_us,
    total_us: elapsed_us(total_start),
    floor_vertices: floor_output.vertices.len(),
    floor_triangles: floor_output.triangle_count(),
    outline_count: outlines.len(),
    wall_vertices: walls.vertices.len(),
    wall_triangles: walls.triangle_count(),
    ..Default::default()
  };

  Ok(CaveGeometry {
    floor: floor_output,
    walls,
    outlines,
    stats,
  })
}

/// Generate several caves in parallel.
///
/// Results keep the order of `configs`; one failing run does not affect the
/// others.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "cave::generate_batch"))]
pub fn generate_batch(configs: &[CaveConfig]) -> Vec<Result<CaveMesh>> {
  if configs.is_empty() {
    return Vec::new();
  }

  configs.par_iter().map(generate).collect()
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
