//! # F, G, H rotation coefficients
//!
//! A rotation by θ about a Quadray axis mixes the three free components with
//! a 3×3 circulant matrix whose entries are
//!
//! ```text
//! F = (2·cos θ + 1) / 3
//! G = (2·cos(θ − 120°) + 1) / 3 = (2·(cos θ·cos120° + sin θ·sin120°) + 1) / 3
//! H = (2·cos(θ + 120°) + 1) / 3 = (2·(cos θ·cos120° − sin θ·sin120°) + 1) / 3
//! ```
//!
//! The three cosines are 120° apart, so they sum to zero and `F + G + H = 1`
//! for every θ. At θ = 0 the coefficients are `(1, 0, 0)`.
//!
//! The RT-pure constructor takes a spread `s = sin²θ` and a [`Polarity`]
//! instead of θ: `cos θ = p·√(1 − s)`, `sin θ = √s`. No trigonometric function
//! is evaluated on that path.

use serde::{Deserialize, Serialize};

use config::constants::{COS_120, SIN_120};

use crate::core::basis::Circulant;
use crate::error::{RtError, RtResult};

/// Sign selecting which of the angles sharing a spread is meant.
///
/// With `sin θ = √s ≥ 0`, `Positive` picks `θ ∈ [0°, 90°]` and `Negative`
/// picks `θ ∈ [90°, 180°]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// `cos θ ≥ 0`.
    Positive,
    /// `cos θ ≤ 0`.
    Negative,
}

impl Polarity {
    /// `+1.0` or `-1.0`.
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Positive => 1.0,
            Polarity::Negative => -1.0,
        }
    }

    /// Polarity of a signed number; zero counts as positive.
    pub fn from_sign(value: f64) -> Self {
        if value < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Positive
        }
    }
}

/// The three circulant coefficients of a single-axis rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Fgh {
    /// Diagonal coefficient.
    pub f: f64,
    /// Coefficient built from `cos(θ − 120°)`.
    pub g: f64,
    /// Coefficient built from `cos(θ + 120°)`.
    pub h: f64,
}

impl Fgh {
    /// Coefficients of the identity rotation.
    pub const IDENTITY: Self = Self {
        f: 1.0,
        g: 0.0,
        h: 0.0,
    };

    /// Coefficients from a cosine/sine pair. Shared by both constructors.
    pub fn from_cos_sin(cos: f64, sin: f64) -> Self {
        Self {
            f: (2.0 * cos + 1.0) / 3.0,
            g: (2.0 * (cos * COS_120 + sin * SIN_120) + 1.0) / 3.0,
            h: (2.0 * (cos * COS_120 - sin * SIN_120) + 1.0) / 3.0,
        }
    }

    /// Coefficients for a rotation by `theta` radians.
    ///
    /// # Examples
    /// ```
    /// use quadray_rt::Fgh;
    /// assert_eq!(Fgh::from_angle(0.0), Fgh::IDENTITY);
    /// ```
    pub fn from_angle(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::from_cos_sin(cos, sin)
    }

    /// Coefficients from a spread and polarity (RT-pure path).
    ///
    /// `spread` must lie in `[0, 1]`; outside it the roots are NaN. Use
    /// [`Fgh::checked_from_spread`] to get an error instead.
    ///
    /// # Examples
    /// ```
    /// use quadray_rt::{Fgh, Polarity};
    /// let a = Fgh::from_spread(0.5, Polarity::Positive);
    /// let b = Fgh::from_angle(std::f64::consts::FRAC_PI_4);
    /// assert!((a.g - b.g).abs() < 1e-12);
    /// ```
    pub fn from_spread(spread: f64, polarity: Polarity) -> Self {
        let cos = polarity.sign() * (1.0 - spread).sqrt();
        let sin = spread.sqrt();
        Self::from_cos_sin(cos, sin)
    }

    /// [`Fgh::from_spread`] rejecting spreads outside `[0, 1]`.
    ///
    /// # Errors
    /// [`RtError::SpreadOutOfRange`] when `spread < 0` or `spread > 1`.
    pub fn checked_from_spread(spread: f64, polarity: Polarity) -> RtResult<Self> {
        if (0.0..=1.0).contains(&spread) {
            Ok(Self::from_spread(spread, polarity))
        } else {
            Err(RtError::SpreadOutOfRange(spread))
        }
    }

    /// `F + G + H`, identically 1.
    pub fn sum(&self) -> f64 {
        self.f + self.g + self.h
    }

    /// The 3×3 circulant matrix in the given ordering, rows first.
    ///
    /// # Examples
    /// ```
    /// use quadray_rt::{Circulant, Fgh};
    /// let c = Fgh { f: 1.0, g: 2.0, h: 3.0 };
    /// assert_eq!(c.circulant(Circulant::Right)[0], [1.0, 3.0, 2.0]);
    /// assert_eq!(c.circulant(Circulant::Left)[0], [1.0, 2.0, 3.0]);
    /// ```
    pub fn circulant(&self, ordering: Circulant) -> [[f64; 3]; 3] {
        let Fgh { f, g, h } = *self;
        match ordering {
            Circulant::Right => [[f, h, g], [g, f, h], [h, g, f]],
            Circulant::Left => [[f, g, h], [h, f, g], [g, h, f]],
        }
    }

    /// Multiplies a 3-vector by the circulant matrix.
    pub fn apply(&self, ordering: Circulant, v: [f64; 3]) -> [f64; 3] {
        let m = self.circulant(ordering);
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    /// Coefficients of the product of two circulants of the same ordering,
    /// `self` applied first. Same-ordering circulants commute, and the rule
    /// is identical for both orderings.
    ///
    /// `from_angle(a).compose(&from_angle(b)) == from_angle(a + b)`.
    pub fn compose(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self {
            f: a.f * b.f + a.g * b.h + a.h * b.g,
            g: a.f * b.g + a.g * b.f + a.h * b.h,
            h: a.f * b.h + a.h * b.f + a.g * b.g,
        }
    }

    /// Coefficients of the inverse rotation (θ → −θ): `G` and `H` swap.
    pub fn inverse(&self) -> Self {
        Self {
            f: self.f,
            g: self.h,
            h: self.g,
        }
    }
}

impl Default for Fgh {
    fn default() -> Self {
        Self::IDENTITY
    }
}
