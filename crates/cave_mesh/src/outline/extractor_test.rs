use std::collections::HashSet;

use super::*;
use crate::grid::{random_fill, smooth, Cell, Grid};
use crate::marching_squares::{NodeKind, Triangle};
use crate::test_utils::{empty_room, room_with_pillar, triangle_edges, triangulate_grid};

fn outlines_for(grid: &Grid) -> (crate::marching_squares::FloorMesh, Vec<Outline>) {
  let (_, mut floor) = triangulate_grid(grid);
  let outlines = extract_outlines(&floor.adjacency, &mut floor.checked).unwrap();
  (floor, outlines)
}

#[test]
fn test_single_triangle_outline() {
  let mut adjacency = AdjacencyIndex::new();
  adjacency.register(Triangle::new(0, 1, 2));
  let mut checked = CheckedSet::new();

  let outlines = extract_outlines(&adjacency, &mut checked).unwrap();
  assert_eq!(outlines, vec![Outline::new(vec![0, 1, 2, 0])]);
  assert_eq!(checked.len(), 3);
}

#[test]
fn test_quad_outline_follows_incidence_order() {
  let mut adjacency = AdjacencyIndex::new();
  adjacency.register(Triangle::new(0, 1, 2));
  adjacency.register(Triangle::new(0, 2, 3));
  let mut checked = CheckedSet::new();

  let outlines = extract_outlines(&adjacency, &mut checked).unwrap();
  assert_eq!(outlines, vec![Outline::new(vec![0, 1, 2, 3, 0])]);
}

#[test]
fn test_prechecked_vertices_are_skipped() {
  let mut adjacency = AdjacencyIndex::new();
  adjacency.register(Triangle::new(0, 1, 2));
  adjacency.register(Triangle::new(3, 4, 5));
  let mut checked = CheckedSet::new();
  checked.insert(0);
  checked.insert(1);
  checked.insert(2);

  let outlines = extract_outlines(&adjacency, &mut checked).unwrap();
  assert_eq!(outlines, vec![Outline::new(vec![3, 4, 5, 3])]);
}

#[test]
fn test_isolated_vertex_is_consumed() {
  let mut adjacency = AdjacencyIndex::new();
  adjacency.track_vertex(0);
  let mut checked = CheckedSet::new();

  let outlines = extract_outlines(&adjacency, &mut checked).unwrap();
  assert!(outlines.is_empty());
  assert!(checked.contains(0));
}

#[test]
fn test_connected_vertex_skips_checked() {
  let mut adjacency = AdjacencyIndex::new();
  adjacency.register(Triangle::new(0, 1, 2));
  let mut checked = CheckedSet::new();

  assert_eq!(connected_outline_vertex(&adjacency, &checked, 0), Ok(Some(1)));
  checked.insert(1);
  assert_eq!(connected_outline_vertex(&adjacency, &checked, 0), Ok(Some(2)));
  checked.insert(2);
  assert_eq!(connected_outline_vertex(&adjacency, &checked, 0), Ok(None));
}

#[test]
fn test_empty_room_has_perimeter_and_wall() {
  let (floor, outlines) = outlines_for(&empty_room(10, 10));
  assert_eq!(outlines.len(), 2);

  // Map perimeter: 36 control nodes, room wall: 32 midpoints
  let mut lengths: Vec<usize> = outlines.iter().map(Outline::len).collect();
  lengths.sort_unstable();
  assert_eq!(lengths, vec![33, 37]);

  let covered: usize = outlines.iter().map(|o| o.unique_vertices().len()).sum();
  assert_eq!(covered, floor.vertices.len());
}

#[test]
fn test_full_grid_single_perimeter_outline() {
  let grid = Grid::filled(5, 5, Cell::Wall);
  let (squares, mut floor) = triangulate_grid(&grid);
  let outlines = extract_outlines(&floor.adjacency, &mut floor.checked).unwrap();

  assert_eq!(outlines.len(), 1);
  let outline = &outlines[0];
  assert!(outline.is_closed());
  assert_eq!(outline.len(), 17);

  let perimeter: HashSet<u32> = (0..5)
    .flat_map(|x| (0..5).map(move |y| (x, y)))
    .filter(|&(x, y)| grid.is_border(x, y))
    .map(|(x, y)| {
      let id = squares.registry.lookup(x, y, NodeKind::Control).unwrap();
      squares.registry.require_vertex_index(id).unwrap()
    })
    .collect();
  let traced: HashSet<u32> = outline.unique_vertices().iter().copied().collect();
  assert_eq!(traced, perimeter);
}

#[test]
fn test_pillar_adds_island_outline() {
  let (_, outlines) = outlines_for(&room_with_pillar());
  // Perimeter, room wall, pillar rim
  assert_eq!(outlines.len(), 3);
  // Single-cell pillar: diamond through 4 midpoints
  assert!(outlines.iter().any(|o| o.len() == 5));
}

#[test]
fn test_outlines_closed_and_disjoint() {
  for seed in [1, 2, 3, 99, 1000] {
    let grid = smooth(&random_fill(48, 36, 47, seed).unwrap(), 5);
    let (_, outlines) = outlines_for(&grid);

    let mut seen = HashSet::new();
    for outline in &outlines {
      assert!(outline.is_closed(), "seed {seed}: open outline");
      assert!(outline.len() >= 4, "seed {seed}: degenerate outline");
      for &vertex in outline.unique_vertices() {
        assert!(seen.insert(vertex), "seed {seed}: vertex {vertex} reused");
      }
    }
  }
}

#[test]
fn test_outline_steps_are_boundary_edges() {
  let grid = smooth(&random_fill(40, 40, 45, 8).unwrap(), 5);
  let (floor, outlines) = outlines_for(&grid);
  for outline in &outlines {
    for (a, b) in outline.edges() {
      assert!(
        floor.adjacency.is_boundary_edge(a, b).unwrap(),
        "({a}, {b}) is not a boundary edge"
      );
    }
  }
}

#[test]
fn test_every_boundary_edge_is_traced() {
  let grid = smooth(&random_fill(40, 30, 45, 31).unwrap(), 5);
  let (floor, outlines) = outlines_for(&grid);

  let traced: HashSet<(u32, u32)> = outlines
    .iter()
    .flat_map(|o| o.edges())
    .map(|(a, b)| (a.min(b), a.max(b)))
    .collect();

  for (a, b) in triangle_edges(&floor) {
    if floor.adjacency.is_boundary_edge(a, b).unwrap() {
      assert!(traced.contains(&(a.min(b), a.max(b))), "({a}, {b}) missed");
    }
  }
}

#[test]
fn test_long_contour_does_not_recurse() {
  let (_, outlines) = outlines_for(&empty_room(400, 400));
  let longest = outlines.iter().map(Outline::len).max().unwrap();
  assert_eq!(longest, 4 * 399 + 1);
}
