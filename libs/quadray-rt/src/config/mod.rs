//! Verification configuration building on the shared `config` crate.
//!
//! The harness reads every knob from [`VerificationConfig`], so tests and the
//! binding layer can sweep other points or angles without touching constants.

use serde::{Deserialize, Serialize};

use config::constants::{
    GlobalConfig, COMPOSITION_STEP_DEG, REFERENCE_POINT, VERIFICATION_ANGLES_DEG,
    VERIFICATION_TOLERANCE,
};

use crate::core::vec3::Vec3;
use crate::error::{RtError, RtResult};

/// Settings for one run of the verification harness.
///
/// # Examples
/// ```
/// use quadray_rt::config::VerificationConfig;
/// let cfg = VerificationConfig::default();
/// assert_eq!(cfg.angles_deg, vec![30.0, 45.0, 60.0, 90.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Absolute per-component error threshold.
    pub tolerance: f64,
    /// Cartesian point every check rotates.
    pub point: Vec3,
    /// Angles (degrees) of the single-axis sweep.
    pub angles_deg: Vec<f64>,
    /// Step (degrees) used twice by the composition checks.
    pub composition_step_deg: f64,
}

impl VerificationConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Errors
    /// [`RtError::InvalidConfig`] when the tolerance is not positive and
    /// finite, the point or any angle is not finite, or no angles are given.
    ///
    /// # Examples
    /// ```
    /// use quadray_rt::config::VerificationConfig;
    /// let cfg = VerificationConfig::new(1e-9, [0.0, 1.0, 2.0], vec![10.0], 30.0).unwrap();
    /// assert_eq!(cfg.point.z, 2.0);
    /// assert!(VerificationConfig::new(0.0, [0.0; 3], vec![10.0], 30.0).is_err());
    /// ```
    pub fn new(
        tolerance: f64,
        point: [f64; 3],
        angles_deg: Vec<f64>,
        composition_step_deg: f64,
    ) -> RtResult<Self> {
        let global = GlobalConfig::new(tolerance, point)
            .map_err(|e| RtError::InvalidConfig(e.to_string()))?;
        if angles_deg.is_empty() {
            return Err(RtError::InvalidConfig("no verification angles".into()));
        }
        if let Some(bad) = angles_deg
            .iter()
            .chain(std::iter::once(&composition_step_deg))
            .find(|a| !a.is_finite())
        {
            return Err(RtError::InvalidConfig(format!(
                "angle must be finite: {bad}"
            )));
        }
        Ok(Self {
            tolerance: global.tolerance,
            point: Vec3::from_array(global.reference_point),
            angles_deg,
            composition_step_deg,
        })
    }

    /// Same settings with another test point.
    pub fn with_point(mut self, point: Vec3) -> Self {
        self.point = point;
        self
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            tolerance: VERIFICATION_TOLERANCE,
            point: Vec3::from_array(REFERENCE_POINT),
            angles_deg: VERIFICATION_ANGLES_DEG.to_vec(),
            composition_step_deg: COMPOSITION_STEP_DEG,
        }
    }
}
