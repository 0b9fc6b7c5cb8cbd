//! Precomputed contour table for marching squares.
//!
//! Maps a 4-bit square configuration to the ordered polygon covering the wall
//! part of the square.
//!
//! # Square Topology
//!
//! ```text
//!   TL ──── cT ──── TR        +Z
//!   │                │         │
//!   cL              cR         │
//!   │                │         └───+X
//!   BL ──── cB ──── BR
//!
//! configuration = 8·TL + 4·TR + 2·BR + 1·BL   (bit set = wall corner)
//! ```
//!
//! Points are listed clockwise when seen from +Y, so fanning from point 0
//! yields triangles whose normals all face +Y.
//!
//! ```text
//! Config 3 (BR, BL walls):      Config 5 (TR, BL walls, saddle joined):
//!
//!   TL ─────────── TR             TL ──── cT ════ TR
//!   │               │             │      ╱        │
//!   cL ═══════════ cR             cL ═╱          cR
//!   ║               ║             ║            ╱  │
//!   BL ═══════════ BR             BL ════ cB ═╱── BR
//!
//!   points: cR, BR, BL, cL        points: cT, TR, cR, cB, BL, cL
//! ```

use crate::error::{CaveError, Result};

/// One of the eight contour points of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SquarePoint {
  TopLeft,
  TopRight,
  BottomRight,
  BottomLeft,
  CentreTop,
  CentreRight,
  CentreBottom,
  CentreLeft,
}

use SquarePoint::{
  BottomLeft as BL, BottomRight as BR, CentreBottom as CB, CentreLeft as CL, CentreRight as CR,
  CentreTop as CT, TopLeft as TL, TopRight as TR,
};

/// Number of distinct square configurations.
pub const CONFIGURATION_COUNT: usize = 16;

/// Fully wall square; its corners never lie on an interior boundary edge.
pub const FULL_CONFIGURATION: u8 = 15;

/// Precomputed contour table.
/// Index: 4-bit configuration
/// Value: polygon points, clockwise from +Y, 0 or 3-6 entries
pub const CONTOUR_TABLE: [&[SquarePoint]; CONFIGURATION_COUNT] = [
  &[],                       // 0
  &[CL, CB, BL],             // 1
  &[BR, CB, CR],             // 2
  &[CR, BR, BL, CL],         // 3
  &[TR, CR, CT],             // 4
  &[CT, TR, CR, CB, BL, CL], // 5
  &[CT, TR, BR, CB],         // 6
  &[CT, TR, BR, BL, CL],     // 7
  &[TL, CT, CL],             // 8
  &[TL, CT, CB, BL],         // 9
  &[TL, CT, CR, BR, CB, CL], // 10
  &[TL, CT, CR, BR, BL],     // 11
  &[TL, TR, CR, CL],         // 12
  &[TL, TR, CR, CB, BL],     // 13
  &[TL, TR, BR, CB, CL],     // 14
  &[TL, TR, BR, BL],         // 15
];

/// Build the configuration code from the wall state of the four corners.
#[inline(always)]
pub const fn configuration(top_left: bool, top_right: bool, bottom_right: bool, bottom_left: bool) -> u8 {
  (top_left as u8) << 3 | (top_right as u8) << 2 | (bottom_right as u8) << 1 | bottom_left as u8
}

/// Contour points for `configuration`.
///
/// Codes outside `[0, 15]` cannot come out of [`configuration`]; seeing one
/// means square construction is broken.
#[inline]
pub fn contour_points(configuration: u8) -> Result<&'static [SquarePoint]> {
  CONTOUR_TABLE
    .get(configuration as usize)
    .copied()
    .ok_or_else(|| CaveError::consistency(format!("square configuration {configuration} out of range")))
}

/// Get point position within the unit square as `[x, z]`.
#[inline(always)]
pub const fn point_offset(point: SquarePoint) -> [f32; 2] {
  match point {
    SquarePoint::TopLeft => [0.0, 1.0],
    SquarePoint::TopRight => [1.0, 1.0],
    SquarePoint::BottomRight => [1.0, 0.0],
    SquarePoint::BottomLeft => [0.0, 0.0],
    SquarePoint::CentreTop => [0.5, 1.0],
    SquarePoint::CentreRight => [1.0, 0.5],
    SquarePoint::CentreBottom => [0.5, 0.0],
    SquarePoint::CentreLeft => [0.0, 0.5],
  }
}

/// True for the four grid-aligned corners.
#[inline(always)]
pub const fn is_corner(point: SquarePoint) -> bool {
  matches!(
    point,
    SquarePoint::TopLeft | SquarePoint::TopRight | SquarePoint::BottomRight | SquarePoint::BottomLeft
  )
}

#[cfg(test)]
#[path = "contour_table_test.rs"]
mod contour_table_test;
