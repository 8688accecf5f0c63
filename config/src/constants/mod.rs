//! Centralized numeric values shared across the Quadray / RT workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Every identity of the coordinate algebra (round trips, `F + G + H = 1`,
/// same-axis composition) is expected to hold to this tolerance.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((0.1 + 0.2 - 0.3_f64).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Absolute per-component error threshold used by the verification harness
/// when comparing a Quadray-path result against the quaternion reference.
///
/// # Examples
/// ```
/// use config::constants::{EPSILON, VERIFICATION_TOLERANCE};
/// assert!(VERIFICATION_TOLERANCE <= EPSILON);
/// ```
pub const VERIFICATION_TOLERANCE: f64 = 1e-10;

// =============================================================================
// RADICALS
// =============================================================================

/// √2 as a literal.
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// √3 as a literal.
///
/// # Examples
/// ```
/// use config::constants::SQRT_3;
/// assert!((SQRT_3 * SQRT_3 - 3.0).abs() < 1e-15);
/// ```
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// √6 as a literal.
pub const SQRT_6: f64 = 2.449_489_742_783_178;

/// cos 120°, exact.
pub const COS_120: f64 = -0.5;

/// sin 120° = √3/2.
///
/// # Examples
/// ```
/// use config::constants::{COS_120, SIN_120};
/// assert!((COS_120 * COS_120 + SIN_120 * SIN_120 - 1.0).abs() < 1e-15);
/// ```
pub const SIN_120: f64 = SQRT_3 / 2.0;

/// Perpendicular distance between adjacent parallel planes of the Quadray
/// grid: √6/4.
pub const QUADRAY_GRID_INTERVAL: f64 = SQRT_6 / 4.0;

// =============================================================================
// TETRAHEDRAL REFERENCE VALUES
// =============================================================================

/// Spread between any two Quadray basis directions.
///
/// The basis directions meet at the tetrahedral angle (cosine −1/3), so the
/// spread is `1 − 1/9`.
///
/// # Examples
/// ```
/// use config::constants::TETRAHEDRAL_SPREAD;
/// assert_eq!(TETRAHEDRAL_SPREAD, 8.0 / 9.0);
/// ```
pub const TETRAHEDRAL_SPREAD: f64 = 8.0 / 9.0;

/// Quadrance between the tips of two Quadray basis vectors.
///
/// The basis vectors are `(±1, ±1, ±1)` with an even number of minus signs,
/// so two of them differ by 2 in exactly two coordinates.
pub const BASIS_EDGE_QUADRANCE: f64 = 8.0;

// =============================================================================
// VERIFICATION PARAMETERS
// =============================================================================

/// Cartesian test point used by the verification harness and the regression
/// fixtures.
///
/// # Examples
/// ```
/// use config::constants::REFERENCE_POINT;
/// assert_eq!(REFERENCE_POINT, [1.0, 0.5, 0.3]);
/// ```
pub const REFERENCE_POINT: [f64; 3] = [1.0, 0.5, 0.3];

/// Angles (degrees) swept by the single-axis check.
pub const VERIFICATION_ANGLES_DEG: [f64; 4] = [30.0, 45.0, 60.0, 90.0];

/// Step angle (degrees) applied twice by the composition checks.
///
/// # Examples
/// ```
/// use config::constants::COMPOSITION_STEP_DEG;
/// assert_eq!(2.0 * COMPOSITION_STEP_DEG, 90.0);
/// ```
pub const COMPOSITION_STEP_DEG: f64 = 45.0;

// =============================================================================
// HELPERS
// =============================================================================

/// Converts degrees to radians.
///
/// Angles only enter the core at its boundary; internally everything is
/// expressed through cosine/sine pairs or spreads.
///
/// # Examples
/// ```
/// use config::constants::degrees_to_radians;
/// assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of verification settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Absolute per-component comparison tolerance.
    pub tolerance: f64,
    /// Cartesian point the verification checks rotate.
    pub reference_point: [f64; 3],
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and reference point.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-8, [0.0, 1.0, 2.0]).expect("valid config");
    /// assert_eq!(cfg.reference_point[2], 2.0);
    /// ```
    pub fn new(tolerance: f64, reference_point: [f64; 3]) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if reference_point.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::NonFinitePoint(reference_point));
        }
        Ok(Self {
            tolerance,
            reference_point,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: VERIFICATION_TOLERANCE,
            reference_point: REFERENCE_POINT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when a reference point has a NaN or infinite component.
    NonFinitePoint([f64; 3]),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::NonFinitePoint(point) => {
                write!(f, "reference point must be finite: {point:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
