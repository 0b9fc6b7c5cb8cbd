//! Binary occupancy grid: random fill and cellular-automaton smoothing.
//!
//! # Layout
//!
//! ```text
//!   z (y index)
//!   ▲
//!   │ # # # # #      # = Wall (1)
//!   │ # . . # #      . = Open (0)
//!   │ # . . . #
//!   │ # # # # #
//!   └──────────► x
//!
//! index = x * height + y   (x major, y minor)
//! ```
//!
//! Every border cell is Wall once generation finishes.

mod generator;
mod smoothing;

pub use generator::random_fill;
pub use smoothing::{smooth, smooth_pass, smoothed_cell};

use std::fmt;

/// Occupancy state of one grid cell.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
  #[default]
  Open = 0,
  Wall = 1,
}

impl Cell {
  #[inline]
  pub fn is_wall(self) -> bool {
    self == Cell::Wall
  }
}

/// `width × height` cell grid stored x-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
  width: usize,
  height: usize,
  cells: Vec<Cell>,
}

impl Grid {
  /// Create a grid with every cell set to `cell`.
  pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
    Self {
      width,
      height,
      cells: vec![cell; width * height],
    }
  }

  /// Create a grid by evaluating `f(x, y)` for every cell.
  pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Self {
    let mut cells = Vec::with_capacity(width * height);
    for x in 0..width {
      for y in 0..height {
        cells.push(f(x, y));
      }
    }
    Self {
      width,
      height,
      cells,
    }
  }

  #[inline]
  pub fn width(&self) -> usize {
    self.width
  }

  #[inline]
  pub fn height(&self) -> usize {
    self.height
  }

  #[inline]
  fn index(&self, x: usize, y: usize) -> usize {
    x * self.height + y
  }

  /// Cell at `(x, y)`. Panics when out of bounds, like slice indexing.
  #[inline]
  pub fn get(&self, x: usize, y: usize) -> Cell {
    self.cells[self.index(x, y)]
  }

  /// Cell at signed coordinates, `None` outside the grid.
  #[inline]
  pub fn try_get(&self, x: i64, y: i64) -> Option<Cell> {
    if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
      None
    } else {
      Some(self.get(x as usize, y as usize))
    }
  }

  #[inline]
  pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
    let idx = self.index(x, y);
    self.cells[idx] = cell;
  }

  #[inline]
  pub fn is_wall(&self, x: usize, y: usize) -> bool {
    self.get(x, y).is_wall()
  }

  #[inline]
  pub fn is_border(&self, x: usize, y: usize) -> bool {
    x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
  }

  /// True when every border cell is Wall.
  pub fn border_is_wall(&self) -> bool {
    (0..self.width)
      .flat_map(|x| (0..self.height).map(move |y| (x, y)))
      .filter(|&(x, y)| self.is_border(x, y))
      .all(|(x, y)| self.is_wall(x, y))
  }

  /// Walls among the 8 neighbours of `(x, y)`; cells outside the grid count
  /// as walls.
  pub fn neighbour_wall_count(&self, x: usize, y: usize) -> u8 {
    let mut wall_count = 0;
    for dx in -1i64..=1 {
      for dy in -1i64..=1 {
        if dx == 0 && dy == 0 {
          continue;
        }
        let neighbour = self.try_get(x as i64 + dx, y as i64 + dy);
        if neighbour.map_or(true, Cell::is_wall) {
          wall_count += 1;
        }
      }
    }
    wall_count
  }

  pub fn wall_count(&self) -> usize {
    self.cells.iter().filter(|cell| cell.is_wall()).count()
  }

  pub fn cells(&self) -> &[Cell] {
    &self.cells
  }
}

/// Text rendering, top row (highest y) first: `#` wall, `.` open.
impl fmt::Display for Grid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for y in (0..self.height).rev() {
      for x in 0..self.width {
        let glyph = if self.is_wall(x, y) { '#' } else { '.' };
        write!(f, "{glyph}")?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}
