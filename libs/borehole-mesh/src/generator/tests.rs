//! Mesh generator tests.

use super::*;
use crate::point::Point;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::collections::HashMap;

fn cone_at(point: Point, length: f64, sides: i64, rings: i64, dip: f64) -> ConeDescriptor {
    ConeDescriptor::new(point, length, sides, rings, dip).unwrap().0
}

fn cone(length: f64, sides: i64, rings: i64, dip: f64) -> ConeDescriptor {
    cone_at(Point::origin(), length, sides, rings, dip)
}

// =============================================================================
// POLAR POINTS
// =============================================================================

#[test]
fn test_polar_point_count() {
    for (sides, rings) in [(3, 1), (4, 2), (8, 5), (17, 9)] {
        let points = points_polar(&cone(10.0, sides, rings, 45.0)).unwrap();
        assert_eq!(points.len(), (rings * sides + 2) as usize);
    }
}

#[test]
fn test_polar_tip_is_single_point() {
    let points = points_polar(&cone(100.0, 6, 3, 60.0)).unwrap();
    let tip: Vec<_> = points.iter().filter(|p| p.ring == 0).collect();
    assert_eq!(tip.len(), 1);
    assert_eq!(tip[0].radius, 0.0);
    assert_eq!(tip[0].angle, 0.0);
    assert_eq!(tip[0].height, -100.0);
}

#[test]
fn test_polar_apex_is_last() {
    let points = points_polar(&cone(100.0, 6, 3, 60.0)).unwrap();
    let apex = points.last().unwrap();
    assert_eq!(
        *apex,
        PolarPoint {
            ring: APEX_RING,
            radius: 0.0,
            angle: 0.0,
            height: 0.0
        }
    );
    assert_eq!(points.iter().filter(|p| p.ring == APEX_RING).count(), 1);
}

#[test]
fn test_polar_radius_and_height_per_ring() {
    let length = 100.0;
    let dip = 60f64;
    let points = points_polar(&cone(length, 4, 2, dip)).unwrap();
    let rim = length * dip.to_radians().cos();

    for p in points.iter().filter(|p| p.ring >= 0) {
        let expected_radius = f64::from(p.ring) * rim / 2.0;
        assert_relative_eq!(p.radius, expected_radius, epsilon = 1e-12);
        assert_relative_eq!(
            p.height,
            -(length * length - expected_radius * expected_radius).sqrt(),
            epsilon = 1e-12
        );
        // Every lattice point lies on the sphere of radius `length`.
        assert_relative_eq!(p.radius.hypot(p.height), length, epsilon = 1e-9);
    }
}

#[test]
fn test_polar_rim_depth_matches_dip() {
    let length = 100.0;
    let points = points_polar(&cone(length, 4, 3, 30.0)).unwrap();
    let rim = points.iter().find(|p| p.ring == 3).unwrap();
    assert_relative_eq!(rim.height, -length * 30f64.to_radians().sin(), epsilon = 1e-9);
}

#[test]
fn test_polar_angles_evenly_spaced() {
    let points = points_polar(&cone(10.0, 4, 1, 45.0)).unwrap();
    let angles: Vec<f64> = points.iter().filter(|p| p.ring == 1).map(|p| p.angle).collect();
    assert_eq!(angles.len(), 4);
    for (j, angle) in angles.iter().enumerate() {
        assert_relative_eq!(*angle, j as f64 * std::f64::consts::FRAC_PI_2);
    }
}

#[test]
fn test_hemisphere_depth_clamps_drift() {
    let drift = -1e-12 * 100.0 * 100.0;
    let radius = (100.0f64 * 100.0 - drift).sqrt();
    assert_eq!(hemisphere_depth(100.0, radius, 3, EPSILON).unwrap(), 0.0);
}

#[test]
fn test_hemisphere_depth_rejects_real_violation() {
    let err = hemisphere_depth(100.0, 120.0, 2, EPSILON).unwrap_err();
    assert!(matches!(err, MeshError::NumericDomain { ring: 2, .. }));
}

// =============================================================================
// CARTESIAN POINTS AND INDICES
// =============================================================================

#[test]
fn test_cartesian_offsets_by_anchor() {
    let anchor = Point::new(500.0, -250.0, 1200.0).unwrap();
    let shifted = points_cartesian(&cone_at(anchor, 40.0, 5, 3, 50.0)).unwrap();
    let centered = points_cartesian(&cone(40.0, 5, 3, 50.0)).unwrap();

    assert_eq!(shifted.len(), centered.len());
    for (a, b) in shifted.iter().zip(&centered) {
        assert_eq!(a.ring, b.ring);
        let delta = a.position - b.position;
        assert_abs_diff_eq!(delta.x, 500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(delta.y, -250.0, epsilon = 1e-9);
        assert_abs_diff_eq!(delta.z, 1200.0, epsilon = 1e-9);
    }
    assert_eq!(shifted.last().unwrap().position, anchor.to_dvec3());
}

#[test]
fn test_cartesian_first_ring_point_on_x_axis() {
    let points = points_cartesian(&cone(100.0, 4, 2, 60.0)).unwrap();
    // ring 1, side 0: radius = 100 * cos(60°) / 2 = 25
    let p = points[1];
    assert_eq!(p.ring, 1);
    assert_abs_diff_eq!(p.position.x, 25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.position.y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_indices_are_sequential_with_apex_last() {
    let c = cone(100.0, 4, 2, 60.0);
    let vertices = indices(&c).unwrap();
    for (i, v) in vertices.iter().enumerate() {
        assert_eq!(v.index as usize, i + 1);
    }
    let apex = vertices.last().unwrap();
    assert_eq!(apex.index, 10);
    assert_eq!(apex.ring, APEX_RING);

    let rings: Vec<i32> = vertices.iter().map(|v| v.ring).collect();
    assert_eq!(rings, vec![0, 1, 1, 1, 1, 2, 2, 2, 2, -1]);
}

// =============================================================================
// RING TABLE
// =============================================================================

#[test]
fn test_ring_table_groups_in_order() {
    let vertices = indices(&cone(100.0, 4, 2, 60.0)).unwrap();
    let table = RingTable::from_vertices(&vertices);
    assert_eq!(table.len(), 4);
    assert_eq!(table.ring(0), &[1]);
    assert_eq!(table.ring(1), &[2, 3, 4, 5]);
    assert_eq!(table.ring(2), &[6, 7, 8, 9]);
    assert_eq!(table.ring(APEX_RING), &[10]);
    assert!(table.ring(7).is_empty());
}

#[test]
fn test_stitch_rejects_missing_apex() {
    let mut vertices = indices(&cone(100.0, 4, 2, 60.0)).unwrap();
    vertices.pop();
    let table = RingTable::from_vertices(&vertices);
    assert!(matches!(
        stitch(&table, 2),
        Err(MeshError::InvalidTopology { .. })
    ));
}

#[test]
fn test_stitch_rejects_ragged_ring() {
    let mut vertices = indices(&cone(100.0, 4, 2, 60.0)).unwrap();
    vertices.remove(6);
    let table = RingTable::from_vertices(&vertices);
    assert!(stitch(&table, 2).is_err());
}

// =============================================================================
// FACES
// =============================================================================

#[test]
fn test_face_count_closed_form() {
    for (sides, rings) in [(3, 1), (4, 2), (6, 3), (12, 7), (32, 16)] {
        let c = cone(250.0, sides, rings, 70.0);
        let faces = faces(&c).unwrap();
        assert_eq!(faces.len(), (2 * sides * rings) as usize);
        assert_eq!(faces.len(), c.face_count());
    }
}

#[test]
fn test_face_indices_in_range() {
    let c = cone(80.0, 7, 4, 35.0);
    let vertex_count = c.vertex_count() as u32;
    for face in faces(&c).unwrap() {
        for index in face.indices() {
            assert!((1..=vertex_count).contains(&index), "bad index {index}");
        }
    }
}

#[test]
fn test_face_layout_small_cone() {
    // Tip 1, ring 1 = 2..=5, ring 2 = 6..=9, apex 10.
    let faces = faces(&cone(100.0, 4, 2, 60.0)).unwrap();
    let expected = vec![
        // tip fan
        Face::new(1, 3, 2),
        Face::new(1, 4, 3),
        Face::new(1, 5, 4),
        Face::new(1, 2, 5),
        // body, ring 1 → ring 2
        Face::new(2, 3, 6),
        Face::new(3, 7, 6),
        Face::new(3, 4, 7),
        Face::new(4, 8, 7),
        Face::new(4, 5, 8),
        Face::new(5, 9, 8),
        Face::new(5, 2, 9),
        Face::new(2, 6, 9),
        // apex fan
        Face::new(10, 6, 7),
        Face::new(10, 7, 8),
        Face::new(10, 8, 9),
        Face::new(10, 9, 6),
    ];
    assert_eq!(faces, expected);
}

#[test]
fn test_single_ring_is_tip_fan_plus_apex_fan() {
    let faces = faces(&cone(10.0, 3, 1, 45.0)).unwrap();
    assert_eq!(
        faces,
        vec![
            Face::new(1, 3, 2),
            Face::new(1, 4, 3),
            Face::new(1, 2, 4),
            Face::new(5, 2, 3),
            Face::new(5, 3, 4),
            Face::new(5, 4, 2),
        ]
    );
}

// =============================================================================
// ORIENTATION
// =============================================================================

#[test]
fn test_every_edge_has_one_opposite() {
    let mesh = generate(&cone(100.0, 9, 5, 40.0)).unwrap();
    let mut uses: HashMap<(u32, u32), usize> = HashMap::new();
    for face in mesh.faces() {
        let [a, b, c] = face.indices();
        for edge in [(a, b), (b, c), (c, a)] {
            *uses.entry(edge).or_default() += 1;
        }
    }
    for (&(a, b), &count) in &uses {
        assert_eq!(count, 1, "edge ({a}, {b}) used {count} times");
        assert_eq!(uses.get(&(b, a)), Some(&1), "edge ({a}, {b}) has no twin");
    }
}

#[test]
fn test_signed_volume_positive() {
    for (sides, rings, dip) in [(3, 1, 45.0), (4, 2, 60.0), (16, 8, 20.0), (24, 12, 85.0)] {
        let mesh = generate(&cone(100.0, sides, rings, dip)).unwrap();
        assert!(
            mesh.signed_volume() > 0.0,
            "sides={sides} rings={rings} dip={dip}"
        );
    }
}

#[test]
fn test_signed_volume_approaches_solid() {
    // Spherical cap below the rim plus the cone above it.
    let (length, dip) = (100.0f64, 60f64.to_radians());
    let rim = length * dip.cos();
    let depth = length * dip.sin();
    let cap_height = length - depth;
    let cap = std::f64::consts::PI * cap_height * cap_height * (3.0 * length - cap_height) / 3.0;
    let cone_part = std::f64::consts::PI * rim * rim * depth / 3.0;

    let mesh = generate(&cone(length, 256, 64, 60.0)).unwrap();
    assert_relative_eq!(mesh.signed_volume(), cap + cone_part, max_relative = 1e-3);
}

#[test]
fn test_tip_fan_faces_down_and_apex_fan_faces_up() {
    let c = cone(100.0, 8, 3, 50.0);
    let mesh = generate(&c).unwrap();
    let sides = c.sides() as usize;
    let normals = mesh.face_normals();

    for normal in &normals[..sides] {
        assert!(normal.z < 0.0);
    }
    for normal in &normals[normals.len() - sides..] {
        assert!(normal.z > 0.0);
    }
}

#[test]
fn test_normals_point_away_from_axis() {
    let c = cone(100.0, 12, 6, 45.0);
    let mesh = generate(&c).unwrap();
    for (face, normal) in mesh.faces().iter().zip(mesh.face_normals()) {
        let centroid = face
            .indices()
            .iter()
            .map(|&i| mesh.vertex(i).unwrap().position)
            .sum::<DVec3>()
            / 3.0;
        let radial = DVec3::new(centroid.x, centroid.y, 0.0);
        assert!(normal.dot(radial) > 0.0, "face {:?} faces inward", face);
    }
}

// =============================================================================
// FULL MESH
// =============================================================================

#[test]
fn test_scenario_four_sides_two_rings() {
    let mesh = generate(&cone(100.0, 4, 2, 60.0)).unwrap();
    assert_eq!(mesh.vertex_count(), 10);
    assert_eq!(mesh.face_count(), 16);

    let apex = mesh.apex().unwrap();
    assert_eq!(apex.index, 10);
    assert_eq!(mesh.rounded_positions(3)[9], DVec3::ZERO);
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_generation_is_deterministic() {
    let c = cone_at(Point::new(3.5, 7.25, -40.0).unwrap(), 75.0, 11, 6, 33.0);
    let first = generate(&c).unwrap();
    let second = generate(&c).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.faces(), faces(&c).unwrap().as_slice());
    assert_eq!(first.vertices(), indices(&c).unwrap().as_slice());
}

#[test]
fn test_near_vertical_dip_has_no_nan() {
    let mesh = generate(&cone(100.0, 8, 4, 89.9)).unwrap();
    assert!(mesh.vertices().iter().all(|v| v.position.is_finite()));
    assert!(mesh.face_normals().iter().all(|n| n.is_finite()));
    assert!(mesh.validate().is_ok());

    let (min, max) = mesh.bounding_box();
    assert!(max.x - min.x < 1.0);
    assert_relative_eq!(min.z, -100.0);
}

#[test]
fn test_validation_holds_at_any_length_unit() {
    for length in [0.01, 1.0, 1e6] {
        let mesh = generate(&cone(length, 64, 32, 45.0)).unwrap();
        assert!(mesh.validate().is_ok(), "length {length}");
        assert!(mesh.signed_volume() > 0.0);
    }
}

#[test]
fn test_shallow_dip_validates() {
    let mesh = generate(&cone(100.0, 16, 8, 0.5)).unwrap();
    assert!(mesh.validate().is_ok());
    let (min, max) = mesh.bounding_box();
    assert!(max.x > 99.0 && min.x < -99.0);
}

#[test]
fn test_clamped_cone_generates() {
    let (c, notices) = ConeDescriptor::new(Point::origin(), 10.0, 2, 0, 45.0).unwrap();
    assert_eq!(notices.len(), 2);
    let mesh = generate(&c).unwrap();
    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.face_count(), 6);
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_generate_with_config() {
    let c = cone(100.0, 4, 2, 60.0);
    let config = GlobalConfig::new(1e-6, 3).unwrap();
    assert_eq!(generate_with(&c, &config).unwrap(), generate(&c).unwrap());
}
