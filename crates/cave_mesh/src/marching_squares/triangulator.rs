//! Fan triangulation of every square and lazy vertex emission.
//!
//! ```text
//! points p0..p5 from the contour table
//!
//!   p0 ──── p1           (p0, p1, p2)
//!   │ ╲ ╲    │           (p0, p2, p3)   n ≥ 4
//!   │  ╲  ╲  p2          (p0, p3, p4)   n ≥ 5
//!   p5  ╲   ╲│           (p0, p4, p5)   n = 6
//!   │    ╲   p3
//!   p4 ─────┘
//! ```
//!
//! A node gets a vertex index the first time any square emits it; later
//! squares reuse that index. Each triangle is registered with the adjacency
//! index as it is created.

use glam::Vec3;
use smallvec::SmallVec;

use super::contour_table::{contour_points, FULL_CONFIGURATION};
use super::square_grid::{NodeId, NodeRegistry, Square, SquareGrid};
use crate::error::Result;
use crate::outline::{AdjacencyIndex, CheckedSet};

/// Three floor vertex indices in winding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
  pub vertices: [u32; 3],
}

impl Triangle {
  #[inline]
  pub const fn new(a: u32, b: u32, c: u32) -> Self {
    Self {
      vertices: [a, b, c],
    }
  }

  #[inline]
  pub fn contains(&self, vertex: u32) -> bool {
    self.vertices.contains(&vertex)
  }
}

/// Floor geometry plus the topology needed for outline extraction.
///
/// Owned by a single generation run.
#[derive(Clone, Debug, Default)]
pub struct FloorMesh {
  pub vertices: Vec<Vec3>,
  pub triangles: Vec<Triangle>,
  pub adjacency: AdjacencyIndex,
  /// Vertices already known to be interior.
  pub checked: CheckedSet,
}

impl FloorMesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Vertex index for `id`, emitting the node on first use.
  fn emit(&mut self, registry: &mut NodeRegistry, id: NodeId) -> Result<u32> {
    if let Some(index) = registry.node(id).assigned_index() {
      return Ok(index);
    }
    let index = self.vertices.len() as u32;
    registry.assign_vertex_index(id, index)?;
    self.vertices.push(registry.node(id).position);
    self.adjacency.track_vertex(index);
    Ok(index)
  }

  fn push_triangle(&mut self, triangle: Triangle) {
    self.triangles.push(triangle);
    self.adjacency.register(triangle);
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  /// Flat index buffer (3 per triangle).
  pub fn indices(&self) -> Vec<u32> {
    self
      .triangles
      .iter()
      .flat_map(|triangle| triangle.vertices)
      .collect()
  }
}

/// Triangulate every square of `grid` in scan order.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "marching_squares::triangulate"))]
pub fn triangulate(grid: &mut SquareGrid) -> Result<FloorMesh> {
  let mut mesh = FloorMesh::new();
  for square in &grid.squares {
    triangulate_square(square, &mut grid.registry, &mut mesh)?;
  }
  Ok(mesh)
}

fn triangulate_square(
  square: &Square,
  registry: &mut NodeRegistry,
  mesh: &mut FloorMesh,
) -> Result<()> {
  let points = contour_points(square.configuration)?;
  if points.is_empty() {
    return Ok(());
  }

  let mut indices: SmallVec<[u32; 6]> = SmallVec::new();
  for &point in points {
    indices.push(mesh.emit(registry, square.node(point))?);
  }

  if square.configuration == FULL_CONFIGURATION {
    // Interior corners of a full square never touch a boundary edge. Border
    // corners still can: the grid edge itself is a boundary.
    for corner in square.corners() {
      if !registry.is_on_border(corner) {
        mesh.checked.insert(registry.require_vertex_index(corner)?);
      }
    }
  }

  let anchor = indices[0];
  for pair in indices[1..].windows(2) {
    mesh.push_triangle(Triangle::new(anchor, pair[0], pair[1]));
  }

  Ok(())
}

#[cfg(test)]
#[path = "triangulator_test.rs"]
mod triangulator_test;
