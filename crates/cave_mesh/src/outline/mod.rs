//! Boundary contours of the floor mesh.
//!
//! An edge is a boundary edge when exactly one floor triangle uses it. Chains
//! of boundary edges form closed outlines: the outer map edge, the walls of
//! each cave region and the rims of any islands.

mod adjacency;
mod extractor;

pub use adjacency::AdjacencyIndex;
pub use extractor::{connected_outline_vertex, extract_outlines};

use std::collections::HashSet;

/// Vertices already consumed by outline extraction, either interior or
/// placed in an outline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckedSet {
  vertices: HashSet<u32>,
}

impl CheckedSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns false when `vertex` was already checked.
  #[inline]
  pub fn insert(&mut self, vertex: u32) -> bool {
    self.vertices.insert(vertex)
  }

  #[inline]
  pub fn contains(&self, vertex: u32) -> bool {
    self.vertices.contains(&vertex)
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }
}

/// Closed loop of floor vertex indices; the last entry repeats the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outline {
  vertices: Vec<u32>,
}

impl Outline {
  pub fn new(vertices: Vec<u32>) -> Self {
    Self { vertices }
  }

  pub fn vertices(&self) -> &[u32] {
    &self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn is_closed(&self) -> bool {
    self.vertices.len() > 1 && self.vertices.first() == self.vertices.last()
  }

  /// Consecutive vertex pairs along the loop.
  pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
    self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
  }

  /// Distinct vertices, without the closing repeat.
  pub fn unique_vertices(&self) -> &[u32] {
    if self.is_closed() {
      &self.vertices[..self.vertices.len() - 1]
    } else {
      &self.vertices
    }
  }
}
