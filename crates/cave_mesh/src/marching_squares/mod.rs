//! Marching squares over the cave grid.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Grid (width × height cells, border = wall)                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  SquareGrid::build                                              │
//! │    control node per cell + "above"/"right" midpoints            │
//! │    (width-1) × (height-1) squares referencing shared NodeIds    │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  triangulate (x outer, y inner)                                 │
//! │    configuration → CONTOUR_TABLE → point list                   │
//! │    emit unindexed nodes into the vertex buffer                  │
//! │    fan triangles from point 0, register adjacency               │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//!          FloorMesh { vertices, triangles, adjacency, checked }
//! ```

pub mod contour_table;
mod square_grid;
mod triangulator;

pub use contour_table::{configuration, contour_points, SquarePoint, CONTOUR_TABLE};
pub use square_grid::{ControlPayload, Node, NodeId, NodeKind, NodeRegistry, Square, SquareGrid, UNASSIGNED};
pub use triangulator::{triangulate, FloorMesh, Triangle};
