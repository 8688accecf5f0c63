//! Tests for Quadray conversion and arithmetic.

use super::*;
use approx::assert_abs_diff_eq;
use config::constants::{BASIS_EDGE_QUADRANCE, EPSILON, REFERENCE_POINT, TETRAHEDRAL_SPREAD};

fn assert_vec3_eq(actual: Vec3, expected: Vec3) {
    assert!(
        crate::core::vec3::approx_eq(actual, expected, EPSILON),
        "{actual:?} != {expected:?}"
    );
}

// --- Basis vertices ---

#[test]
fn basis_vertices_map_to_table_directions() {
    for axis in Axis::ALL {
        assert_eq!(Quadray::basis(axis).to_cartesian(), axis.direction());
    }
}

/// `[0,1,1,1]` is the vertex of the dual tetrahedron opposite `W`.
#[test]
fn w_absent_dual_vertex() {
    let xyz = Quadray::new(0.0, 1.0, 1.0, 1.0).to_cartesian();
    assert_eq!(xyz, -Axis::W.direction());
}

#[test]
fn janus_inversion_matches_dual_vertex() {
    let inverted = (-Quadray::W).to_cartesian();
    let dual = Quadray::new(0.0, 1.0, 1.0, 1.0).to_cartesian();
    assert_eq!(inverted, dual);
}

#[test]
fn origin_to_cartesian() {
    assert_eq!(Quadray::ORIGIN.to_cartesian(), Vec3::ZERO);
}

// --- Edge quadrance and spread ---

#[test]
fn all_tet_edges_equal_quadrance() {
    for a in Axis::ALL {
        for b in Axis::ALL {
            if a.index() < b.index() {
                let q = Quadray::basis(a).quadrance(&Quadray::basis(b));
                assert_abs_diff_eq!(q, BASIS_EDGE_QUADRANCE, epsilon = EPSILON);
            }
        }
    }
}

#[test]
fn basis_vectors_spread_is_tetrahedral() {
    assert_abs_diff_eq!(
        Quadray::W.spread(&Quadray::Z),
        TETRAHEDRAL_SPREAD,
        epsilon = EPSILON
    );
}

// --- Round trip ---

#[test]
fn cartesian_round_trip_reference_point() {
    let p = Vec3::from_array(REFERENCE_POINT);
    assert_vec3_eq(quadray_to_cartesian(&cartesian_to_quadray(p)), p);
}

#[test]
fn cartesian_round_trip_many_points() {
    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(-3.5, 2.25, 7.0),
        Vec3::new(1e3, -1e3, 0.5),
        Vec3::new(-0.1, -0.2, -0.3),
    ];
    for p in points {
        assert_vec3_eq(Quadray::from_cartesian(p).to_cartesian(), p);
    }
}

#[test]
fn quadray_round_trip_recovers_canonical_form() {
    let original = Quadray::new(2.0, 1.0, 0.0, 1.0);
    let recovered = Quadray::from_cartesian(original.to_cartesian());
    assert!(recovered.is_canonical(EPSILON));
    for (a, b) in recovered.to_array().iter().zip(original.to_array()) {
        assert_abs_diff_eq!(*a, b, epsilon = EPSILON);
    }
}

/// Regression fixture for the reference point.
#[test]
fn reference_point_canonical_components() {
    let q = cartesian_to_quadray(Vec3::from_array(REFERENCE_POINT));
    assert_abs_diff_eq!(q.w, 0.75, epsilon = EPSILON);
    assert_abs_diff_eq!(q.x, 0.35, epsilon = EPSILON);
    assert_abs_diff_eq!(q.y, 0.10, epsilon = EPSILON);
    assert_eq!(q.z, 0.0);
}

// --- Normal forms ---

#[test]
fn normalized_has_zero_and_no_negatives() {
    let q = Quadray::new(-2.0, 5.0, 0.5, -1.0).normalized();
    assert!(q.is_canonical(0.0));
    assert_eq!(q.w, 0.0);
}

#[test]
fn constant_shift_does_not_move_point() {
    let q = Quadray::new(0.3, 1.2, 0.0, 2.5);
    assert_vec3_eq(q.shifted(4.0).to_cartesian(), q.to_cartesian());
    assert_vec3_eq(q.zero_sum().to_cartesian(), q.to_cartesian());
    assert_vec3_eq(q.normalized().to_cartesian(), q.to_cartesian());
}

#[test]
fn zero_sum_sums_to_zero() {
    let n = Quadray::new(3.0, 1.0, 2.0, 0.0).zero_sum();
    assert_abs_diff_eq!(n.w + n.x + n.y + n.z, 0.0, epsilon = EPSILON);
}

#[test]
fn raw_inverse_is_zero_sum() {
    let raw = cartesian_to_quadray_raw(Vec3::new(1.0, 0.5, 0.3));
    assert_abs_diff_eq!(raw.iter().sum::<f64>(), 0.0, epsilon = EPSILON);
    assert!(raw.iter().any(|c| *c < 0.0));
}

#[test]
fn is_canonical_rejects_negatives_and_missing_zero() {
    assert!(!Quadray::new(-0.5, 0.0, 1.0, 1.0).is_canonical(EPSILON));
    assert!(!Quadray::new(1.0, 1.0, 1.0, 1.0).is_canonical(EPSILON));
}

// --- Component access ---

#[test]
fn component_access_follows_axis_index() {
    let q = Quadray::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q.component(Axis::Y), 3.0);
    assert_eq!(q.with_component(Axis::X, 9.0), Quadray::new(1.0, 9.0, 3.0, 4.0));
}

// --- Batch ---

#[test]
fn batch_conversion_preserves_order() {
    let verts = [Quadray::W, Quadray::X, Quadray::Y, Quadray::Z];
    let xyz = batch_quadray_to_cartesian(&verts);
    assert_eq!(xyz.len(), 4);
    assert_eq!(xyz[1], Axis::X.direction());
    let back = batch_cartesian_to_quadray(&xyz);
    for (q, original) in back.iter().zip(verts) {
        assert_vec3_eq(q.to_cartesian(), original.to_cartesian());
    }
}

// --- Operators ---

#[test]
fn add_sub_scale() {
    let sum = Quadray::W + Quadray::X;
    assert_eq!(sum, Quadray::new(1.0, 1.0, 0.0, 0.0));
    assert_eq!(sum - Quadray::X, Quadray::W);
    assert_eq!(Quadray::W * 3.0, Quadray::new(3.0, 0.0, 0.0, 0.0));
}

#[test]
fn addition_matches_cartesian_addition() {
    let a = Quadray::new(0.2, 0.0, 1.0, 0.4);
    let b = Quadray::new(0.0, 2.0, 0.5, 0.1);
    assert_vec3_eq((a + b).to_cartesian(), a.to_cartesian() + b.to_cartesian());
}

#[test]
fn display_format() {
    assert_eq!(
        Quadray::new(0.75, 0.35, 0.1, 0.0).to_string(),
        "[W=0.7500, X=0.3500, Y=0.1000, Z=0.0000]"
    );
}
