//! # Rational Trigonometry primitives
//!
//! Quadrance (squared distance) and spread (squared sine) replace distance and
//! angle. Everything here stays in Q-space; square roots appear only in the
//! few helpers whose purpose is to leave it (`spread_to_sin_cos`,
//! `slope_from_spread`, `sphere_plane_circle_radius`), and callers should
//! reach for those at the display / rendering boundary.
//!
//! ## Key spreads
//!
//! | spread | angle |
//! |--------|-------|
//! | 0      | 0° (parallel) |
//! | 1/4    | 30° |
//! | 1/2    | 45° |
//! | 3/4    | 60° |
//! | 8/9    | tetrahedral |
//! | 1      | 90° |

use glam::DMat3;
use serde::{Deserialize, Serialize};

use config::constants::EPSILON;

use crate::core::vec3::Vec3;
use crate::error::{RtError, RtResult};

// =============================================================================
// QUADRANCE / SPREAD
// =============================================================================

/// Quadrance between two points: `dx² + dy² + dz²`. Never takes a root.
///
/// # Examples
/// ```
/// use quadray_rt::{quadrance, Vec3};
/// assert_eq!(quadrance(Vec3::ZERO, Vec3::ONE), 3.0); // not √3
/// ```
pub fn quadrance(p1: Vec3, p2: Vec3) -> f64 {
    (p2 - p1).length_squared()
}

/// Spread at the vertex between two sides of quadrance `q1` and `q2`, with
/// `q3` the quadrance of the opposite side:
///
/// ```text
/// s = 1 − (Q1 + Q2 − Q3)² / (4·Q1·Q2)
/// ```
///
/// Requires `q1 > 0` and `q2 > 0` (checked in debug builds). The result is NOT
/// clamped: quadrances that no triangle can realize give a value outside
/// `[0, 1]`. Use [`checked_spread`] to turn both conditions into errors.
///
/// # Examples
/// ```
/// use quadray_rt::spread;
/// // right isosceles triangle: legs Q=1, hypotenuse Q=2
/// assert_eq!(spread(1.0, 1.0, 2.0), 1.0);
/// ```
pub fn spread(q1: f64, q2: f64, q3: f64) -> f64 {
    debug_assert!(
        q1 > 0.0 && q2 > 0.0,
        "spread needs positive adjacent quadrances, got Q1={q1}, Q2={q2}"
    );
    let n = q1 + q2 - q3;
    1.0 - (n * n) / (4.0 * q1 * q2)
}

/// [`spread`] with explicit domain checks.
///
/// # Errors
/// - [`RtError::DegenerateQuadrance`] when `q1 ≤ 0` or `q2 ≤ 0`.
/// - [`RtError::SpreadOutOfRange`] when the triple is not realizable.
pub fn checked_spread(q1: f64, q2: f64, q3: f64) -> RtResult<f64> {
    if !(q1 > 0.0 && q2 > 0.0) {
        return Err(RtError::DegenerateQuadrance { q1, q2 });
    }
    ensure_spread_range(spread(q1, q2, q3))
}

/// Spread between two vectors: `1 − (v1·v2)² / (Q(v1)·Q(v2))`.
///
/// 0 for parallel vectors, 1 for perpendicular ones. A zero vector gives 0.
///
/// # Examples
/// ```
/// use quadray_rt::{vector_spread, Vec3};
/// assert_eq!(vector_spread(Vec3::X, Vec3::Y), 1.0);
/// ```
pub fn vector_spread(v1: Vec3, v2: Vec3) -> f64 {
    let q1 = v1.length_squared();
    let q2 = v2.length_squared();
    if q1 == 0.0 || q2 == 0.0 {
        return 0.0;
    }
    let dot = v1.dot(v2);
    1.0 - (dot * dot) / (q1 * q2)
}

fn ensure_spread_range(s: f64) -> RtResult<f64> {
    if (-EPSILON..=1.0 + EPSILON).contains(&s) {
        Ok(s)
    } else {
        Err(RtError::SpreadOutOfRange(s))
    }
}

// =============================================================================
// LEAVING Q-SPACE
// =============================================================================

/// `(sin θ, cos θ)` for the first-quadrant angle with spread `s`:
/// `sin = √s`, `cos = √(1 − s)`.
///
/// Out-of-range input produces NaN rather than a clamped value; see
/// [`checked_spread_to_sin_cos`].
pub fn spread_to_sin_cos(s: f64) -> (f64, f64) {
    (s.sqrt(), (1.0 - s).sqrt())
}

/// [`spread_to_sin_cos`] rejecting spreads outside `[0, 1]`.
///
/// # Errors
/// [`RtError::SpreadOutOfRange`] for `s < 0` or `s > 1`.
pub fn checked_spread_to_sin_cos(s: f64) -> RtResult<(f64, f64)> {
    if (0.0..=1.0).contains(&s) {
        Ok(spread_to_sin_cos(s))
    } else {
        Err(RtError::SpreadOutOfRange(s))
    }
}

/// Slope of a line through the origin making spread `s` with the x-axis:
/// `√(s / (1 − s))`, i.e. `tan θ`.
///
/// # Examples
/// ```
/// use quadray_rt::slope_from_spread;
/// assert!((slope_from_spread(0.5) - 1.0).abs() < 1e-15);
/// ```
pub fn slope_from_spread(s: f64) -> f64 {
    (s / (1.0 - s)).sqrt()
}

/// Radius of the circle cut from a sphere by a plane, from the sphere's
/// radius quadrance and the plane's distance quadrance.
///
/// `None` when the plane misses the sphere. The root is taken last.
pub fn sphere_plane_circle_radius(sphere_radius_q: f64, distance_q: f64) -> Option<f64> {
    if distance_q > sphere_radius_q {
        return None;
    }
    Some((sphere_radius_q - distance_q).sqrt())
}

// =============================================================================
// RATIONAL PARAMETERIZATION
// =============================================================================

/// Rational point on the unit circle:
/// `((1 − t²) / (1 + t²), 2t / (1 + t²))`, with `t = tan(θ/2)`.
///
/// # Examples
/// ```
/// use quadray_rt::circle_param;
/// assert_eq!(circle_param(1.0), [0.0, 1.0]);
/// ```
pub fn circle_param(t: f64) -> [f64; 2] {
    let t2 = t * t;
    let d = 1.0 + t2;
    [(1.0 - t2) / d, (2.0 * t) / d]
}

/// Parameter `t ∈ [0, 1]` of [`circle_param`] whose point has spread `s`
/// with the x-axis, solving `s = 4t² / (1 + t²)²`.
///
/// Takes the root with `θ ≤ 90°`. Spreads at or beyond 0 and 1 map to the
/// end parameters 0 and 1.
pub fn spread_to_param(s: f64) -> f64 {
    if s <= 0.0 {
        return 0.0;
    }
    if s >= 1.0 {
        return 1.0;
    }
    // smaller root of s·u² + (2s − 4)·u + s = 0, u = t²
    let u = s / (2.0 - s + 2.0 * (1.0 - s).sqrt());
    u.sqrt()
}

/// Reflects `(x, y)` across the line through the origin with slope `m`.
///
/// Purely rational:
/// ```text
/// x' = ((1 − m²)x + 2my) / (1 + m²)
/// y' = (2mx − (1 − m²)y) / (1 + m²)
/// ```
/// `reflect_in_line(r, 0, m) == r · circle_param(m)`.
pub fn reflect_in_line(x: f64, y: f64, m: f64) -> [f64; 2] {
    let m2 = m * m;
    let d = 1.0 + m2;
    [
        ((1.0 - m2) * x + 2.0 * m * y) / d,
        (2.0 * m * x - (1.0 - m2) * y) / d,
    ]
}

/// ZYX Euler rotation `Rz(θ1)·Ry(θ2)·Rx(θ3)` built from three spreads.
///
/// Each spread selects its first-quadrant angle, so this covers rotations
/// with all three angles in `[0°, 90°]`.
pub fn rotation_matrix_from_spreads(s1: f64, s2: f64, s3: f64) -> DMat3 {
    let (sin1, cos1) = spread_to_sin_cos(s1);
    let (sin2, cos2) = spread_to_sin_cos(s2);
    let (sin3, cos3) = spread_to_sin_cos(s3);
    DMat3::from_cols(
        Vec3::new(cos1 * cos2, sin1 * cos2, -sin2),
        Vec3::new(
            cos1 * sin2 * sin3 - sin1 * cos3,
            sin1 * sin2 * sin3 + cos1 * cos3,
            cos2 * sin3,
        ),
        Vec3::new(
            cos1 * sin2 * cos3 + sin1 * sin3,
            sin1 * sin2 * cos3 - cos1 * sin3,
            cos2 * cos3,
        ),
    )
}

// =============================================================================
// POLYHEDRON CHECKS
// =============================================================================

/// Quadrance check for one edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeValidation {
    /// Vertex indices of the edge.
    pub edge: [usize; 2],
    /// Measured quadrance.
    pub quadrance: f64,
    /// `|quadrance − expected|`.
    pub error: f64,
    /// `error < tolerance`.
    pub valid: bool,
}

/// Checks that every edge has the expected quadrance (a regular polyhedron
/// has a single edge quadrance).
///
/// # Errors
/// [`RtError::EdgeIndexOutOfRange`] when an edge names a missing vertex.
///
/// # Examples
/// ```
/// use quadray_rt::{validate_edges, Vec3};
/// let tri = [Vec3::ZERO, Vec3::X, Vec3::Y];
/// let res = validate_edges(&tri, &[[0, 1], [0, 2]], 1.0, 1e-10).unwrap();
/// assert!(res.iter().all(|e| e.valid));
/// ```
pub fn validate_edges(
    vertices: &[Vec3],
    edges: &[[usize; 2]],
    expected_q: f64,
    tolerance: f64,
) -> RtResult<Vec<EdgeValidation>> {
    let vertex = |index: usize| {
        vertices.get(index).copied().ok_or(RtError::EdgeIndexOutOfRange {
            index,
            len: vertices.len(),
        })
    };
    edges
        .iter()
        .map(|&[i, j]| -> RtResult<EdgeValidation> {
            let q = quadrance(vertex(i)?, vertex(j)?);
            let error = (q - expected_q).abs();
            Ok(EdgeValidation {
                edge: [i, j],
                quadrance: q,
                error,
                valid: error < tolerance,
            })
        })
        .collect()
}

/// Euler's formula for convex polyhedra: `V − E + F = 2`.
pub fn verify_euler(vertices: usize, edges: usize, faces: usize) -> bool {
    vertices as i64 - edges as i64 + faces as i64 == 2
}
