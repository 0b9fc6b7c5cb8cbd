//! cave_mesh - Procedural cave meshes from cellular automata
//!
//! Generates a 2D occupancy grid by seeded random fill followed by
//! cellular-automaton smoothing, then turns it into geometry:
//!
//! - **Marching squares** floor triangulation with vertex sharing through an
//!   explicit node registry
//! - **Outline extraction** over boundary edges of the floor mesh, iterative
//!   so contour length never grows the call stack
//! - **Wall extrusion** of every outline into a vertical strip
//!
//! # Example
//!
//! ```
//! use cave_mesh::{generate, CaveConfig};
//!
//! let config = CaveConfig::new().with_size(48, 32).with_seed("docs");
//! let cave = generate(&config).unwrap();
//!
//! println!(
//!   "seed {}: {} floor triangles, {} outlines, {} wall triangles",
//!   cave.seed.text,
//!   cave.floor.triangle_count(),
//!   cave.outlines.len(),
//!   cave.walls.triangle_count()
//! );
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod marching_squares;
pub mod outline;
pub mod pipeline;
pub mod types;
pub mod walls;

#[cfg(test)]
mod test_utils;

pub use config::{hash_seed, CaveConfig, ResolvedSeed};
pub use error::{CaveError, Result};
pub use grid::{random_fill, smooth, Cell, Grid};
pub use marching_squares::{triangulate, FloorMesh, SquareGrid, Triangle};
pub use outline::{extract_outlines, AdjacencyIndex, CheckedSet, Outline};
pub use pipeline::{generate, generate_batch, mesh_grid, CaveGeometry, CaveMesh, GenerationStats};
pub use types::{MeshOutput, MinMaxAABB};
pub use walls::extrude_walls;
