//! Tests for the validated global configuration.

use super::*;

/// Ensures default values are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_config_is_valid() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.tolerance, VERIFICATION_TOLERANCE);
    assert_eq!(cfg.reference_point, REFERENCE_POINT);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0.0, [0.0; 3]).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, REFERENCE_POINT).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert!(matches!(
        GlobalConfig::new(f64::INFINITY, REFERENCE_POINT),
        Err(ConfigError::InvalidTolerance(_))
    ));
    assert!(matches!(
        GlobalConfig::new(1.0e-9, [f64::NAN, 0.0, 0.0]),
        Err(ConfigError::NonFinitePoint(_))
    ));
}

#[test]
fn error_display_names_the_value() {
    let msg = ConfigError::InvalidTolerance(-1.0).to_string();
    assert!(msg.contains("-1"));
}
