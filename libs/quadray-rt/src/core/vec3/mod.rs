//! Thin wrapper around `glam::DVec3` used as the Cartesian point type.
//!
//! The helper functions keep comparisons readable while avoiding direct
//! dependencies on `glam` from the binding layer.

pub use glam::DVec3 as Vec3;

/// Largest absolute per-component difference between two points.
///
/// This is the error measure of the verification harness: a check passes when
/// every Cartesian component agrees within the tolerance.
///
/// # Examples
/// ```
/// use quadray_rt::core::vec3::{max_abs_diff, Vec3};
/// let d = max_abs_diff(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.5, 2.0));
/// assert_eq!(d, 1.0);
/// ```
pub fn max_abs_diff(a: Vec3, b: Vec3) -> f64 {
    (a - b).abs().max_element()
}

/// Returns `true` when every component of `a` is within `tolerance` of `b`.
///
/// # Examples
/// ```
/// use quadray_rt::core::vec3::{approx_eq, Vec3};
/// assert!(approx_eq(Vec3::ONE, Vec3::new(1.0, 1.0, 1.0 + 1e-12), 1e-10));
/// ```
pub fn approx_eq(a: Vec3, b: Vec3, tolerance: f64) -> bool {
    max_abs_diff(a, b) <= tolerance
}
