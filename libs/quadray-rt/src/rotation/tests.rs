//! Tests for the per-axis rotation operators.

use super::*;
use crate::core::vec3::{max_abs_diff, Vec3};
use approx::assert_abs_diff_eq;
use config::constants::{EPSILON, REFERENCE_POINT};
use glam::DQuat;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

fn reference_quadray() -> Quadray {
    Quadray::from_cartesian(Vec3::from_array(REFERENCE_POINT))
}

fn quaternion_rotate(axis: Axis, theta: f64, p: Vec3) -> Vec3 {
    DQuat::from_axis_angle(axis.unit_direction(), theta) * p
}

fn assert_same_point(a: &Quadray, b: &Quadray) {
    let err = max_abs_diff(a.to_cartesian(), b.to_cartesian());
    assert!(err <= EPSILON, "{a} vs {b}: error {err:e}");
}

#[test]
fn matches_quaternion_for_every_axis() {
    let q = reference_quadray();
    let p = q.to_cartesian();
    for axis in Axis::ALL {
        for deg in [30.0_f64, 45.0, 60.0, 90.0, 135.0, -70.0] {
            let theta = deg.to_radians();
            let err = max_abs_diff(
                rotate_about(&q, axis, theta).to_cartesian(),
                quaternion_rotate(axis, theta, p),
            );
            assert!(err <= EPSILON, "axis {axis} at {deg}°: error {err:e}");
        }
    }
}

#[test]
fn named_operators_dispatch_to_their_axis() {
    let q = reference_quadray();
    let theta = 0.9;
    assert_eq!(rotate_about_w(&q, theta), rotate_about(&q, Axis::W, theta));
    assert_eq!(rotate_about_x(&q, theta), rotate_about(&q, Axis::X, theta));
    assert_eq!(rotate_about_y(&q, theta), rotate_about(&q, Axis::Y, theta));
    assert_eq!(rotate_about_z(&q, theta), rotate_about(&q, Axis::Z, theta));
}

#[test]
fn fixed_component_is_untouched() {
    let q = Quadray::new(0.2, 1.4, 0.6, 0.9);
    for axis in Axis::ALL {
        let r = rotate_about(&q, axis, 1.234);
        assert_eq!(r.component(axis), q.component(axis));
    }
}

#[test]
fn rotation_then_inverse_is_identity() {
    let q = reference_quadray();
    for axis in Axis::ALL {
        for theta in [0.3, FRAC_PI_4, 2.0, -1.1] {
            let back = rotate_about(&rotate_about(&q, axis, theta), axis, -theta);
            for (a, b) in back.to_array().iter().zip(q.to_array()) {
                assert_abs_diff_eq!(*a, b, epsilon = EPSILON);
            }
        }
    }
}

#[test]
fn same_axis_rotations_add() {
    let q = reference_quadray();
    for axis in Axis::ALL {
        for (t1, t2) in [(0.2, 0.5), (FRAC_PI_4, FRAC_PI_4), (1.7, -2.4)] {
            let twice = rotate_about(&rotate_about(&q, axis, t1), axis, t2);
            let once = rotate_about(&q, axis, t1 + t2);
            assert_same_point(&twice, &once);
        }
    }
}

/// Two 45° steps about W equal one 90° step, for the reference point.
#[test]
fn two_eighth_turns_about_w_equal_quarter_turn() {
    let q = reference_quadray();
    let twice = rotate_about_w(&rotate_about_w(&q, FRAC_PI_4), FRAC_PI_4);
    assert_same_point(&twice, &rotate_about_w(&q, FRAC_PI_2));
}

#[test]
fn full_turn_is_identity() {
    let q = reference_quadray();
    for axis in Axis::ALL {
        assert_same_point(&rotate_about(&q, axis, TAU), &q);
    }
}

/// With the opposite circulant ordering the result is the rotation by −θ.
#[test]
fn wrong_ordering_mirrors_the_rotation() {
    let q = reference_quadray();
    let p = q.to_cartesian();
    let theta = FRAC_PI_4;
    for axis in Axis::ALL {
        let wrong = rotate_with(&q, axis, &Fgh::from_angle(theta), axis.chirality().opposite());
        let err = max_abs_diff(wrong.to_cartesian(), quaternion_rotate(axis, theta, p));
        assert!(err > 1e-3, "axis {axis}: wrong ordering went undetected");
        assert_same_point(&wrong, &rotate_about(&q, axis, -theta));
    }
}

#[test]
fn non_canonical_input_rotates_to_same_point() {
    let q = reference_quadray();
    let shifted = q.shifted(2.5);
    for axis in Axis::ALL {
        let a = rotate_about(&q, axis, 0.8);
        let b = rotate_about(&shifted, axis, 0.8);
        assert_same_point(&a, &b);
    }
}

#[test]
fn spread_path_matches_angle_path() {
    let q = reference_quadray();
    let theta = PI / 3.0;
    for axis in Axis::ALL {
        let by_spread = rotate_about_spread(&q, axis, 0.75, Polarity::Positive);
        assert_same_point(&by_spread, &rotate_about(&q, axis, theta));
        let obtuse = rotate_about_spread(&q, axis, 0.75, Polarity::Negative);
        assert_same_point(&obtuse, &rotate_about(&q, axis, PI - theta));
    }
}

// --- QuadrayRotation ---

#[test]
fn rotation_value_applies_like_operator() {
    let q = reference_quadray();
    let r = QuadrayRotation::new(Axis::Z, 0.6);
    assert_eq!(r.apply(&q), rotate_about_z(&q, 0.6));
    assert_eq!(QuadrayRotation::identity(Axis::X).apply(&q), q);
}

#[test]
fn then_composes_same_axis() {
    let q = reference_quadray();
    let a = QuadrayRotation::new(Axis::X, 0.4);
    let b = QuadrayRotation::new(Axis::X, 0.9);
    let ab = a.then(&b).unwrap();
    assert_same_point(&ab.apply(&q), &b.apply(&a.apply(&q)));
    assert_same_point(&ab.apply(&q), &rotate_about_x(&q, 1.3));
}

#[test]
fn then_rejects_cross_axis() {
    let a = QuadrayRotation::new(Axis::W, 0.4);
    let b = QuadrayRotation::new(Axis::Y, 0.4);
    assert_eq!(
        a.then(&b),
        Err(RtError::AxisMismatch {
            first: Axis::W,
            second: Axis::Y
        })
    );
}

#[test]
fn inverse_undoes_rotation() {
    let q = reference_quadray();
    let r = QuadrayRotation::from_spread(Axis::Y, 0.3, Polarity::Negative);
    assert_same_point(&r.inverse().apply(&r.apply(&q)), &q);
}

#[test]
fn matrix_agrees_with_apply() {
    let q = Quadray::new(0.3, 1.0, 0.0, 0.7);
    for axis in Axis::ALL {
        let r = QuadrayRotation::new(axis, 1.05);
        let m = r.matrix();
        let v = q.to_array();
        let mut out = [0.0; 4];
        for (row, slot) in m.iter().zip(out.iter_mut()) {
            *slot = row.iter().zip(v).map(|(a, b)| a * b).sum();
        }
        let expected = r.apply(&q).to_array();
        for (a, b) in out.iter().zip(expected) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-14);
        }
        let fixed = axis.index();
        assert_eq!(m[fixed][fixed], 1.0);
    }
}
