//! Output buffer types handed to the renderer.

use glam::Vec3;

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Flat vertex/index buffers for one mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshOutput {
  /// Vertex positions.
  pub vertices: Vec<[f32; 3]>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(vertices: usize, indices: usize) -> Self {
    Self {
      vertices: Vec::with_capacity(vertices),
      indices: Vec::with_capacity(indices),
      bounds: MinMaxAABB::empty(),
    }
  }

  /// Build from positions and triangle indices, computing bounds.
  pub fn from_parts(positions: &[Vec3], indices: Vec<u32>) -> Self {
    let mut output = Self::with_capacity(positions.len(), 0);
    for &position in positions {
      output.push_vertex(position);
    }
    output.indices = indices;
    output
  }

  /// Append a vertex and grow the bounds.
  #[inline]
  pub fn push_vertex(&mut self, position: Vec3) {
    let position = position.to_array();
    self.bounds.encapsulate(position);
    self.vertices.push(position);
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Iterate triangles as index triples.
  pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
    self
      .indices
      .chunks_exact(3)
      .map(|tri| [tri[0], tri[1], tri[2]])
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
