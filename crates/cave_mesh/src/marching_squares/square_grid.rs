//! Node registry and square lattice built from a [`Grid`].
//!
//! Every grid cell owns one control node and two edge-midpoint nodes:
//!
//! ```text
//!        above
//!          ●            ● control node (x, y), active = wall
//!          │            ○ midpoint nodes, half a square away
//!   ●──────○ right
//!  (x,y)
//! ```
//!
//! A square borrows its four midpoints from neighbouring control nodes, so two
//! squares that share an edge reference the same [`NodeId`] for the midpoint
//! on that edge, and the four squares around a control node share it too.
//! Vertex deduplication relies entirely on this sharing.
//!
//! ```text
//!   TL=(x,y+1) ── cT=TL.right ── TR=(x+1,y+1)
//!       │                            │
//!   cL=BL.above                 cR=BR.above
//!       │                            │
//!   BL=(x,y) ──── cB=BL.right ── BR=(x+1,y)
//! ```

use glam::Vec3;

use super::contour_table::{configuration, SquarePoint};
use crate::error::{CaveError, Result};
use crate::grid::Grid;

/// Sentinel stored in [`Node::vertex_index`] until the node is emitted.
pub const UNASSIGNED: i32 = -1;

/// Which of the three nodes owned by a grid cell.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
  Control = 0,
  Above = 1,
  Right = 2,
}

const NODES_PER_CELL: usize = 3;

/// Stable handle into a [`NodeRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
  #[inline]
  pub fn raw(self) -> u32 {
    self.0
  }
}

/// Extra state carried by grid-aligned control nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPayload {
  /// Mirrors the grid cell (wall = active).
  pub active: bool,
  /// Midpoint half a square along +Z.
  pub above: NodeId,
  /// Midpoint half a square along +X.
  pub right: NodeId,
  /// Control node sits on the outer edge of the grid.
  pub on_border: bool,
}

/// Mesh node: a position plus a lazily assigned vertex index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
  pub position: Vec3,
  /// Index in the floor vertex buffer, [`UNASSIGNED`] until emitted.
  pub vertex_index: i32,
  /// Present on control nodes only.
  pub control: Option<ControlPayload>,
}

impl Node {
  fn new(position: Vec3, control: Option<ControlPayload>) -> Self {
    Self {
      position,
      vertex_index: UNASSIGNED,
      control,
    }
  }

  #[inline]
  pub fn is_control(&self) -> bool {
    self.control.is_some()
  }

  #[inline]
  pub fn is_active(&self) -> bool {
    self.control.is_some_and(|control| control.active)
  }

  /// Assigned vertex index, `None` while unassigned.
  #[inline]
  pub fn assigned_index(&self) -> Option<u32> {
    u32::try_from(self.vertex_index).ok()
  }
}

/// Arena of every node in the lattice, keyed by `(x, y, kind)`.
///
/// Layout: `id = (x * height + y) * 3 + kind`
#[derive(Clone, Debug)]
pub struct NodeRegistry {
  width: usize,
  height: usize,
  nodes: Vec<Node>,
}

impl NodeRegistry {
  fn build(grid: &Grid, square_size: f32) -> Self {
    let width = grid.width();
    let height = grid.height();
    let map_width = width as f32 * square_size;
    let map_height = height as f32 * square_size;
    let half_square = square_size / 2.0;

    let mut nodes = Vec::with_capacity(width * height * NODES_PER_CELL);
    for x in 0..width {
      for y in 0..height {
        let position = Vec3::new(
          x as f32 * square_size + half_square - map_width / 2.0,
          0.0,
          y as f32 * square_size + half_square - map_height / 2.0,
        );
        let base = Self::slot(height, x, y);
        let control = ControlPayload {
          active: grid.is_wall(x, y),
          above: NodeId((base + NodeKind::Above as usize) as u32),
          right: NodeId((base + NodeKind::Right as usize) as u32),
          on_border: grid.is_border(x, y),
        };
        nodes.push(Node::new(position, Some(control)));
        nodes.push(Node::new(position + Vec3::Z * half_square, None));
        nodes.push(Node::new(position + Vec3::X * half_square, None));
      }
    }

    Self {
      width,
      height,
      nodes,
    }
  }

  #[inline]
  fn slot(height: usize, x: usize, y: usize) -> usize {
    (x * height + y) * NODES_PER_CELL
  }

  /// Handle for the node of `kind` owned by cell `(x, y)`.
  #[inline]
  pub fn lookup(&self, x: usize, y: usize, kind: NodeKind) -> Option<NodeId> {
    if x < self.width && y < self.height {
      Some(NodeId((Self::slot(self.height, x, y) + kind as usize) as u32))
    } else {
      None
    }
  }

  #[inline]
  pub fn node(&self, id: NodeId) -> &Node {
    &self.nodes[id.0 as usize]
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Vertex index of `id`, failing if it was never emitted.
  #[inline]
  pub fn require_vertex_index(&self, id: NodeId) -> Result<u32> {
    self.node(id).assigned_index().ok_or_else(|| {
      CaveError::consistency(format!("node {} referenced before vertex assignment", id.0))
    })
  }

  /// Assign `index` to an unemitted node. Indices are never reassigned.
  pub fn assign_vertex_index(&mut self, id: NodeId, index: u32) -> Result<()> {
    let node = &mut self.nodes[id.0 as usize];
    if node.vertex_index != UNASSIGNED {
      return Err(CaveError::consistency(format!(
        "node {} already has vertex {}",
        id.0, node.vertex_index
      )));
    }
    node.vertex_index = i32::try_from(index)
      .map_err(|_| CaveError::consistency(format!("vertex index {index} overflows")))?;
    Ok(())
  }

  fn control(&self, id: NodeId) -> Result<ControlPayload> {
    self
      .node(id)
      .control
      .ok_or_else(|| CaveError::consistency(format!("node {} is not a control node", id.0)))
  }

  /// True when `id` is a control node on the outer edge of the grid.
  #[inline]
  pub fn is_on_border(&self, id: NodeId) -> bool {
    self.node(id).control.is_some_and(|control| control.on_border)
  }
}

/// One marching-squares cell referencing shared nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square {
  pub top_left: NodeId,
  pub top_right: NodeId,
  pub bottom_right: NodeId,
  pub bottom_left: NodeId,
  pub centre_top: NodeId,
  pub centre_right: NodeId,
  pub centre_bottom: NodeId,
  pub centre_left: NodeId,
  /// 8·TL + 4·TR + 2·BR + 1·BL, computed once at construction.
  pub configuration: u8,
}

impl Square {
  fn new(
    registry: &NodeRegistry,
    top_left: NodeId,
    top_right: NodeId,
    bottom_right: NodeId,
    bottom_left: NodeId,
  ) -> Result<Self> {
    let tl = registry.control(top_left)?;
    let tr = registry.control(top_right)?;
    let br = registry.control(bottom_right)?;
    let bl = registry.control(bottom_left)?;

    Ok(Self {
      top_left,
      top_right,
      bottom_right,
      bottom_left,
      centre_top: tl.right,
      centre_right: br.above,
      centre_bottom: bl.right,
      centre_left: bl.above,
      configuration: configuration(tl.active, tr.active, br.active, bl.active),
    })
  }

  /// Node referenced by a contour point.
  #[inline]
  pub fn node(&self, point: SquarePoint) -> NodeId {
    match point {
      SquarePoint::TopLeft => self.top_left,
      SquarePoint::TopRight => self.top_right,
      SquarePoint::BottomRight => self.bottom_right,
      SquarePoint::BottomLeft => self.bottom_left,
      SquarePoint::CentreTop => self.centre_top,
      SquarePoint::CentreRight => self.centre_right,
      SquarePoint::CentreBottom => self.centre_bottom,
      SquarePoint::CentreLeft => self.centre_left,
    }
  }

  #[inline]
  pub fn corners(&self) -> [NodeId; 4] {
    [
      self.top_left,
      self.top_right,
      self.bottom_right,
      self.bottom_left,
    ]
  }
}

/// Square lattice plus the registry owning its nodes.
#[derive(Clone, Debug)]
pub struct SquareGrid {
  pub registry: NodeRegistry,
  /// Squares in scan order: x outer, y inner.
  pub squares: Vec<Square>,
  pub squares_x: usize,
  pub squares_y: usize,
}

impl SquareGrid {
  /// Lift `grid` into control nodes and squares. No triangulation happens here.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "marching_squares::build"))]
  pub fn build(grid: &Grid, square_size: f32) -> Result<Self> {
    if grid.width() < 2 || grid.height() < 2 {
      return Err(CaveError::invalid(format!(
        "square grid needs at least 2x2 cells, got {}x{}",
        grid.width(),
        grid.height()
      )));
    }

    let registry = NodeRegistry::build(grid, square_size);
    let squares_x = grid.width() - 1;
    let squares_y = grid.height() - 1;

    let mut squares = Vec::with_capacity(squares_x * squares_y);
    for x in 0..squares_x {
      for y in 0..squares_y {
        let control = |cx, cy| {
          registry
            .lookup(cx, cy, NodeKind::Control)
            .ok_or_else(|| CaveError::consistency(format!("no control node at ({cx}, {cy})")))
        };
        squares.push(Square::new(
          &registry,
          control(x, y + 1)?,
          control(x + 1, y + 1)?,
          control(x + 1, y)?,
          control(x, y)?,
        )?);
      }
    }

    Ok(Self {
      registry,
      squares,
      squares_x,
      squares_y,
    })
  }

  /// Square at lattice position `(x, y)`.
  #[inline]
  pub fn square(&self, x: usize, y: usize) -> Option<&Square> {
    if x < self.squares_x && y < self.squares_y {
      self.squares.get(x * self.squares_y + y)
    } else {
      None
    }
  }
}

#[cfg(test)]
#[path = "square_grid_test.rs"]
mod square_grid_test;
