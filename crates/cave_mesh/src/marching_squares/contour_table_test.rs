use glam::Vec3;

use super::*;
use crate::test_utils::face_normal;

fn point_position(point: SquarePoint) -> Vec3 {
  let [x, z] = point_offset(point);
  Vec3::new(x, 0.0, z)
}

#[test]
fn test_configuration_bits() {
  assert_eq!(configuration(false, false, false, false), 0);
  assert_eq!(configuration(false, false, false, true), 1);
  assert_eq!(configuration(false, false, true, false), 2);
  assert_eq!(configuration(false, true, false, false), 4);
  assert_eq!(configuration(true, false, false, false), 8);
  assert_eq!(configuration(true, true, true, true), FULL_CONFIGURATION);
}

#[test]
fn test_point_counts() {
  for (config, points) in CONTOUR_TABLE.iter().enumerate() {
    assert!(
      matches!(points.len(), 0 | 3 | 4 | 5 | 6),
      "config {} has {} points",
      config,
      points.len()
    );
  }
  assert!(CONTOUR_TABLE[0].is_empty());
  assert_eq!(CONTOUR_TABLE[15].len(), 4);
}

#[test]
fn test_corners_match_configuration() {
  // Corners in the polygon are exactly the wall corners
  let corner_bits = [(TL, 8u8), (TR, 4), (BR, 2), (BL, 1)];
  for (config, points) in CONTOUR_TABLE.iter().enumerate() {
    for (corner, bit) in corner_bits {
      assert_eq!(
        points.contains(&corner),
        config as u8 & bit != 0,
        "config {config} corner {corner:?}"
      );
    }
  }
}

#[test]
fn test_no_duplicate_points() {
  for (config, points) in CONTOUR_TABLE.iter().enumerate() {
    for (i, a) in points.iter().enumerate() {
      for b in &points[i + 1..] {
        assert_ne!(a, b, "config {config} repeats {a:?}");
      }
    }
  }
}

#[test]
fn test_fan_winding_faces_up() {
  for (config, points) in CONTOUR_TABLE.iter().enumerate() {
    if points.is_empty() {
      continue;
    }
    let anchor = point_position(points[0]);
    for pair in points[1..].windows(2) {
      let normal = face_normal(anchor, point_position(pair[0]), point_position(pair[1]));
      assert!(
        normal.y > 0.0 && normal.x == 0.0 && normal.z == 0.0,
        "config {config} triangle winds to {normal:?}"
      );
    }
  }
}

#[test]
fn test_complement_covers_square() {
  // Wall polygon area plus the complement's wall polygon area is the unit
  // square, except the joined saddles
  fn area(points: &[SquarePoint]) -> f32 {
    let mut twice = 0.0;
    for i in 0..points.len() {
      let [x0, z0] = point_offset(points[i]);
      let [x1, z1] = point_offset(points[(i + 1) % points.len()]);
      twice += x0 * z1 - x1 * z0;
    }
    twice.abs() * 0.5
  }

  for config in 0..16usize {
    if config == 5 || config == 10 {
      continue;
    }
    let total = area(CONTOUR_TABLE[config]) + area(CONTOUR_TABLE[15 - config]);
    assert!((total - 1.0).abs() < 1e-6, "config {config} total {total}");
  }
}

#[test]
fn test_out_of_range_configuration() {
  assert!(contour_points(15).is_ok());
  assert!(matches!(contour_points(16), Err(CaveError::Consistency(_))));
  assert!(matches!(contour_points(255), Err(CaveError::Consistency(_))));
}

#[test]
fn test_is_corner() {
  assert!(is_corner(TL));
  assert!(is_corner(BR));
  assert!(!is_corner(CT));
  assert!(!is_corner(CL));
}
