//! # Per-axis Quadray rotations
//!
//! A rotation about basis axis `k` keeps component `k` fixed and mixes the
//! other three (taken in ascending index order) with the circulant matrix of
//! [`Fgh`]. The ordering of that circulant comes from the axis table:
//!
//! | axis | ordering |
//! |------|----------|
//! | W, Y | right    |
//! | X, Z | left     |
//!
//! Using the other ordering rotates by −θ instead of θ.
//!
//! Because `F + G + H = 1`, every operator commutes with adding a constant to
//! all four components, so canonical and non-canonical representatives of a
//! point rotate to representatives of the same image point.
//!
//! Rotations about the same axis compose by adding angles. Rotations about
//! different axes do not reduce to a single-axis rotation; see
//! [`crate::verify`] for how that case is reported.

pub mod fgh;

use serde::{Deserialize, Serialize};

use crate::core::basis::{Axis, Circulant};
use crate::core::quadray::Quadray;
use crate::error::{RtError, RtResult};

pub use fgh::{Fgh, Polarity};

// =============================================================================
// OPERATORS
// =============================================================================

/// Rotates `q` by `theta` radians about `axis`.
///
/// # Examples
/// ```
/// use quadray_rt::{rotate_about, Axis, Quadray};
/// let q = Quadray::new(0.75, 0.35, 0.1, 0.0);
/// // the fixed component is untouched
/// assert_eq!(rotate_about(&q, Axis::W, 1.0).w, 0.75);
/// ```
pub fn rotate_about(q: &Quadray, axis: Axis, theta: f64) -> Quadray {
    rotate_with(q, axis, &Fgh::from_angle(theta), axis.chirality())
}

/// Rotation about `W`.
pub fn rotate_about_w(q: &Quadray, theta: f64) -> Quadray {
    rotate_about(q, Axis::W, theta)
}

/// Rotation about `X`.
pub fn rotate_about_x(q: &Quadray, theta: f64) -> Quadray {
    rotate_about(q, Axis::X, theta)
}

/// Rotation about `Y`.
pub fn rotate_about_y(q: &Quadray, theta: f64) -> Quadray {
    rotate_about(q, Axis::Y, theta)
}

/// Rotation about `Z`.
pub fn rotate_about_z(q: &Quadray, theta: f64) -> Quadray {
    rotate_about(q, Axis::Z, theta)
}

/// RT-pure rotation: the angle is given as a spread plus polarity.
pub fn rotate_about_spread(q: &Quadray, axis: Axis, spread: f64, polarity: Polarity) -> Quadray {
    rotate_with(q, axis, &Fgh::from_spread(spread, polarity), axis.chirality())
}

/// Applies `coefficients` about `axis` with an explicit circulant ordering.
///
/// The named operators always pass `axis.chirality()`. Passing the opposite
/// ordering is how the verification harness shows that the chirality table
/// matters.
pub fn rotate_with(q: &Quadray, axis: Axis, coefficients: &Fgh, ordering: Circulant) -> Quadray {
    let free = axis.free_axes();
    let mixed = coefficients.apply(ordering, free.map(|a| q.component(a)));
    free.iter()
        .zip(mixed)
        .fold(*q, |acc, (a, value)| acc.with_component(*a, value))
}

// =============================================================================
// ROTATION VALUE
// =============================================================================

/// A single-axis rotation as a value: axis plus coefficients.
///
/// # Examples
/// ```
/// use quadray_rt::{Axis, Quadray, QuadrayRotation};
/// use std::f64::consts::FRAC_PI_4;
///
/// let eighth = QuadrayRotation::new(Axis::Y, FRAC_PI_4);
/// let quarter = eighth.then(&eighth).unwrap();
/// let q = Quadray::new(0.75, 0.35, 0.1, 0.0);
/// let (a, b) = (quarter.apply(&q), QuadrayRotation::new(Axis::Y, 2.0 * FRAC_PI_4).apply(&q));
/// assert!((a.w - b.w).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrayRotation {
    /// Axis whose component stays fixed.
    pub axis: Axis,
    /// Circulant coefficients.
    pub coefficients: Fgh,
}

impl QuadrayRotation {
    /// Rotation by `theta` radians.
    pub fn new(axis: Axis, theta: f64) -> Self {
        Self {
            axis,
            coefficients: Fgh::from_angle(theta),
        }
    }

    /// Rotation given by a spread and polarity.
    pub fn from_spread(axis: Axis, spread: f64, polarity: Polarity) -> Self {
        Self {
            axis,
            coefficients: Fgh::from_spread(spread, polarity),
        }
    }

    /// The identity, tagged with `axis`.
    pub fn identity(axis: Axis) -> Self {
        Self {
            axis,
            coefficients: Fgh::IDENTITY,
        }
    }

    /// Applies the rotation.
    pub fn apply(&self, q: &Quadray) -> Quadray {
        rotate_with(q, self.axis, &self.coefficients, self.axis.chirality())
    }

    /// Rotation by the opposite angle.
    pub fn inverse(&self) -> Self {
        Self {
            axis: self.axis,
            coefficients: self.coefficients.inverse(),
        }
    }

    /// `self` followed by `next`, as one rotation.
    ///
    /// # Errors
    /// [`RtError::AxisMismatch`] when the axes differ: two rotations about
    /// different tetrahedral axes are not a rotation about either.
    pub fn then(&self, next: &Self) -> RtResult<Self> {
        if self.axis != next.axis {
            return Err(RtError::AxisMismatch {
                first: self.axis,
                second: next.axis,
            });
        }
        Ok(Self {
            axis: self.axis,
            coefficients: self.coefficients.compose(&next.coefficients),
        })
    }

    /// 4×4 matrix acting on `[w, x, y, z]` column vectors: 1 on the fixed
    /// diagonal entry, the circulant in the free rows and columns.
    pub fn matrix(&self) -> [[f64; 4]; 4] {
        let mut m = [[0.0; 4]; 4];
        let fixed = self.axis.index();
        m[fixed][fixed] = 1.0;
        let free = self.axis.free_axes();
        let c = self.coefficients.circulant(self.axis.chirality());
        for (r, row_axis) in free.iter().enumerate() {
            for (k, col_axis) in free.iter().enumerate() {
                m[row_axis.index()][col_axis.index()] = c[r][k];
            }
        }
        m
    }
}

#[cfg(test)]
mod tests;
