//! Wall strip extrusion along outlines.
//!
//! Every outline edge becomes its own quad hanging straight down from the
//! floor. Wall vertices are not shared between edges.
//!
//! ```text
//!   top A (outline[i]) ────────── top B (outline[i+1])      +0 ── +1
//!         │                 ╱          │                     │  ╱  │
//!         │            ╱               │  wall_height        │ ╱   │
//!         │       ╱                    │                     +2 ── +3
//!   bottom A ───────────────────── bottom B
//!
//!   triangles: (+0, +2, +3), (+3, +1, +0)
//! ```

use glam::Vec3;

use crate::error::{CaveError, Result};
use crate::outline::Outline;
use crate::types::MeshOutput;

/// Vertices emitted per outline edge.
pub const VERTICES_PER_EDGE: usize = 4;

/// Indices emitted per outline edge (two triangles).
pub const INDICES_PER_EDGE: usize = 6;

/// Extrude every outline into a wall mesh with its own index space.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "walls::extrude"))]
pub fn extrude_walls(outlines: &[Outline], floor_vertices: &[Vec3], wall_height: f32) -> Result<MeshOutput> {
  let edge_count: usize = outlines.iter().map(|outline| outline.edges().count()).sum();
  let mut output = MeshOutput::with_capacity(edge_count * VERTICES_PER_EDGE, edge_count * INDICES_PER_EDGE);
  let drop = Vec3::Y * wall_height;

  let floor_position = |index: u32| {
    floor_vertices.get(index as usize).copied().ok_or_else(|| {
      CaveError::consistency(format!(
        "outline vertex {index} outside floor buffer of {}",
        floor_vertices.len()
      ))
    })
  };

  for outline in outlines {
    for (a, b) in outline.edges() {
      let top_a = floor_position(a)?;
      let top_b = floor_position(b)?;

      let start = output.vertices.len() as u32;
      output.push_vertex(top_a);
      output.push_vertex(top_b);
      output.push_vertex(top_a - drop);
      output.push_vertex(top_b - drop);

      output.indices.extend_from_slice(&[
        start,
        start + 2,
        start + 3,
        start + 3,
        start + 1,
        start,
      ]);
    }
  }

  Ok(output)
}

#[cfg(test)]
#[path = "walls_test.rs"]
mod walls_test;
