//! Quadray coordinates and the Cartesian ↔ Quadray conversion.
//!
//! A Quadray is a 4-tuple `(w, x, y, z)` of weights on the four basis
//! directions of [`crate::core::basis`]. Four numbers carry three degrees of
//! freedom: adding the same constant to every component does not move the
//! point, because the basis directions sum to zero. The canonical
//! representative subtracts the minimum component, leaving no negatives and at
//! least one zero.
//!
//! ## Conversion
//!
//! ```text
//! forward   x = w + x_q − y_q − z_q
//!           y = w − x_q + y_q − z_q
//!           z = w − x_q − y_q + z_q
//!
//! inverse   w   = ( x + y + z) / 4      then subtract min(w, x_q, y_q, z_q)
//!           x_q = ( x − y − z) / 4
//!           y_q = (−x + y − z) / 4
//!           z_q = (−x − y + z) / 4
//! ```
//!
//! The inverse lands on the zero-sum representative; `forward(inverse(p)) == p`
//! holds exactly because the forward map ignores the all-ones direction.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::core::basis::Axis;
use crate::core::vec3::Vec3;
use crate::rt;

/// Quadray coordinate in the `W, X, Y, Z` tetrahedral basis.
///
/// Not necessarily canonical: rotation and arithmetic preserve whatever
/// representative they are given. Call [`Quadray::normalized`] for the
/// canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quadray {
    /// Weight on the `W` direction `(+1, +1, +1)`.
    pub w: f64,
    /// Weight on the `X` direction `(+1, -1, -1)`.
    pub x: f64,
    /// Weight on the `Y` direction `(-1, +1, -1)`.
    pub y: f64,
    /// Weight on the `Z` direction `(-1, -1, +1)`.
    pub z: f64,
}

impl Quadray {
    /// Basis vector `W`.
    pub const W: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Basis vector `X`.
    pub const X: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Basis vector `Y`.
    pub const Y: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Basis vector `Z`.
    pub const Z: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a Quadray from its four components.
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a Quadray from `[w, x, y, z]`.
    pub const fn from_array(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Components as `[w, x, y, z]`.
    pub const fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Basis vector for `axis`.
    ///
    /// # Examples
    /// ```
    /// use quadray_rt::{Axis, Quadray};
    /// assert_eq!(Quadray::basis(Axis::Y), Quadray::Y);
    /// ```
    pub fn basis(axis: Axis) -> Self {
        Self::ORIGIN.with_component(axis, 1.0)
    }

    /// Component belonging to `axis`.
    pub fn component(&self, axis: Axis) -> f64 {
        self.to_array()[axis.index()]
    }

    /// Copy with the component for `axis` replaced.
    pub fn with_component(&self, axis: Axis, value: f64) -> Self {
        let mut c = self.to_array();
        c[axis.index()] = value;
        Self::from_array(c)
    }

    /// Smallest component.
    pub fn min_component(&self) -> f64 {
        self.w.min(self.x).min(self.y).min(self.z)
    }

    /// Canonical form: subtract the minimum component from all four.
    ///
    /// # Examples
    /// ```
    /// use quadray_rt::Quadray;
    /// let q = Quadray::new(3.0, 1.0, 2.0, 1.5).normalized();
    /// assert_eq!(q, Quadray::new(2.0, 0.0, 1.0, 0.5));
    /// ```
    pub fn normalized(&self) -> Self {
        self.shifted(-self.min_component())
    }

    /// Zero-sum form: subtract the average so the components sum to 0.
    ///
    /// Maps `[1, 0, 0, 0]` to `[3/4, −1/4, −1/4, −1/4]`.
    pub fn zero_sum(&self) -> Self {
        self.shifted(-(self.w + self.x + self.y + self.z) / 4.0)
    }

    /// Adds `k` to every component. The represented point does not move.
    pub fn shifted(&self, k: f64) -> Self {
        Self::new(self.w + k, self.x + k, self.y + k, self.z + k)
    }

    /// Returns `true` when no component is below `-tolerance` and at least one
    /// is within `tolerance` of zero.
    pub fn is_canonical(&self, tolerance: f64) -> bool {
        let c = self.to_array();
        c.iter().all(|v| *v >= -tolerance) && c.iter().any(|v| v.abs() <= tolerance)
    }

    /// Scales all components by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.w * factor, self.x * factor, self.y * factor, self.z * factor)
    }

    /// Forward transform to Cartesian.
    ///
    /// # Examples
    /// ```
    /// use quadray_rt::{Quadray, Vec3};
    /// assert_eq!(Quadray::W.to_cartesian(), Vec3::new(1.0, 1.0, 1.0));
    /// ```
    pub fn to_cartesian(&self) -> Vec3 {
        quadray_to_cartesian_raw(self.to_array())
    }

    /// Inverse transform from Cartesian, canonical output.
    pub fn from_cartesian(p: Vec3) -> Self {
        Self::from_array(cartesian_to_quadray_raw(p)).normalized()
    }

    /// Quadrance between two Quadray points, measured in Cartesian space.
    ///
    /// # Examples
    /// ```
    /// use quadray_rt::Quadray;
    /// assert_eq!(Quadray::W.quadrance(&Quadray::X), 8.0);
    /// ```
    pub fn quadrance(&self, other: &Self) -> f64 {
        rt::quadrance(self.to_cartesian(), other.to_cartesian())
    }

    /// Spread between the two vectors from the origin to each point.
    pub fn spread(&self, other: &Self) -> f64 {
        rt::vector_spread(self.to_cartesian(), other.to_cartesian())
    }
}

// ─── Free-function conversion surface ─────────────────────────────────

/// Converts a Cartesian point to its canonical Quadray.
///
/// # Examples
/// ```
/// use quadray_rt::{cartesian_to_quadray, Quadray, Vec3};
/// let q = cartesian_to_quadray(Vec3::new(1.0, 0.5, 0.3));
/// assert!((q.w - 0.75).abs() < 1e-15);
/// assert_eq!(q.z, 0.0);
/// ```
pub fn cartesian_to_quadray(p: Vec3) -> Quadray {
    Quadray::from_cartesian(p)
}

/// Converts a Quadray (canonical or not) to Cartesian.
pub fn quadray_to_cartesian(q: &Quadray) -> Vec3 {
    q.to_cartesian()
}

/// Forward transform on raw components.
///
/// Accepts any representative, including negative components: `[-1, 0, 0, 0]`
/// and `[0, 1, 1, 1]` land on the same Cartesian point.
pub fn quadray_to_cartesian_raw(c: [f64; 4]) -> Vec3 {
    let [w, x, y, z] = c;
    Vec3::new(w + x - y - z, w - x + y - z, w - x - y + z)
}

/// Inverse transform without the min-shift: the zero-sum representative,
/// components may be negative.
pub fn cartesian_to_quadray_raw(p: Vec3) -> [f64; 4] {
    [
        (p.x + p.y + p.z) / 4.0,
        (p.x - p.y - p.z) / 4.0,
        (-p.x + p.y - p.z) / 4.0,
        (-p.x - p.y + p.z) / 4.0,
    ]
}

/// Converts a vertex list to Cartesian. Topology stored by index passes
/// through unchanged.
pub fn batch_quadray_to_cartesian(vertices: &[Quadray]) -> Vec<Vec3> {
    vertices.iter().map(Quadray::to_cartesian).collect()
}

/// Converts a Cartesian vertex list to canonical Quadrays.
pub fn batch_cartesian_to_quadray(vertices: &[Vec3]) -> Vec<Quadray> {
    vertices.iter().copied().map(Quadray::from_cartesian).collect()
}

// ─── Operator overloads ───────────────────────────────────────────────

impl Add for Quadray {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Quadray {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Quadray {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

/// Janus inversion: negating every component maps the basis tetrahedron onto
/// its dual.
impl Neg for Quadray {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl fmt::Display for Quadray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[W={:.4}, X={:.4}, Y={:.4}, Z={:.4}]",
            self.w, self.x, self.y, self.z
        )
    }
}

#[cfg(test)]
mod tests;
