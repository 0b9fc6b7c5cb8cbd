//! Outline tracing over the adjacency index.
//!
//! ```text
//! for v in 0..vertex_count (ascending):
//!   skip if checked
//!   w = first unchecked boundary neighbour of v
//!   none → mark v checked, continue
//!   outline = [v], mark v
//!   while frontier exists:
//!     push frontier, mark it, step to its next unchecked boundary neighbour
//!   push v (close the loop)
//! ```
//!
//! The walk is an explicit loop: contour length grows with the map and must
//! not grow the call stack. Neighbour search goes through incident triangles
//! in creation order and then through each triangle's vertices in order, so
//! the output is fixed by the square scan order.

use super::{AdjacencyIndex, CheckedSet, Outline};
use crate::error::Result;

/// First unchecked vertex joined to `vertex` by a boundary edge.
pub fn connected_outline_vertex(
  adjacency: &AdjacencyIndex,
  checked: &CheckedSet,
  vertex: u32,
) -> Result<Option<u32>> {
  for triangle in adjacency.triangles(vertex)? {
    for &candidate in &triangle.vertices {
      if candidate != vertex
        && !checked.contains(candidate)
        && adjacency.is_boundary_edge(vertex, candidate)?
      {
        return Ok(Some(candidate));
      }
    }
  }
  Ok(None)
}

/// Trace every closed outline of the floor mesh.
///
/// `checked` arrives pre-seeded with interior vertices and leaves containing
/// every vertex.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "outline::extract"))]
pub fn extract_outlines(adjacency: &AdjacencyIndex, checked: &mut CheckedSet) -> Result<Vec<Outline>> {
  let mut outlines = Vec::new();

  for start in 0..adjacency.vertex_count() as u32 {
    if checked.contains(start) {
      continue;
    }

    let Some(first) = connected_outline_vertex(adjacency, checked, start)? else {
      checked.insert(start);
      continue;
    };

    checked.insert(start);
    let mut vertices = vec![start];
    let mut frontier = Some(first);
    while let Some(current) = frontier {
      vertices.push(current);
      checked.insert(current);
      frontier = connected_outline_vertex(adjacency, checked, current)?;
    }
    vertices.push(start);

    outlines.push(Outline::new(vertices));
  }

  Ok(outlines)
}

#[cfg(test)]
#[path = "extractor_test.rs"]
mod extractor_test;
