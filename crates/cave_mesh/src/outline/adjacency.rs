//! Vertex → incident triangle index.
//!
//! Filled while triangles are created and read-only afterwards. Boundary
//! tests only look at the triangles around one vertex instead of the whole
//! triangle list.

use smallvec::SmallVec;

use crate::error::{CaveError, Result};
use crate::marching_squares::Triangle;

/// Incident triangles per vertex, in creation order.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyIndex {
  incident: Vec<SmallVec<[Triangle; 6]>>,
}

impl AdjacencyIndex {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make room for `vertex` so that untouched vertices still resolve.
  pub fn track_vertex(&mut self, vertex: u32) {
    let needed = vertex as usize + 1;
    if self.incident.len() < needed {
      self.incident.resize_with(needed, SmallVec::new);
    }
  }

  /// Append `triangle` to the list of each of its vertices.
  pub fn register(&mut self, triangle: Triangle) {
    for vertex in triangle.vertices {
      self.track_vertex(vertex);
      self.incident[vertex as usize].push(triangle);
    }
  }

  /// Number of tracked vertices.
  pub fn vertex_count(&self) -> usize {
    self.incident.len()
  }

  /// Triangles touching `vertex`, in creation order.
  #[inline]
  pub fn triangles(&self, vertex: u32) -> Result<&[Triangle]> {
    self
      .incident
      .get(vertex as usize)
      .map(|triangles| triangles.as_slice())
      .ok_or_else(|| CaveError::consistency(format!("adjacency lookup for unindexed vertex {vertex}")))
  }

  /// An edge is on the boundary when exactly one triangle contains both ends.
  pub fn is_boundary_edge(&self, a: u32, b: u32) -> Result<bool> {
    let mut shared = 0;
    for triangle in self.triangles(a)? {
      if triangle.contains(b) {
        shared += 1;
        if shared > 1 {
          return Ok(false);
        }
      }
    }
    Ok(shared == 1)
  }
}

#[cfg(test)]
#[path = "adjacency_test.rs"]
mod adjacency_test;
