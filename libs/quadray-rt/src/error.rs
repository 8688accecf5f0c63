//! # Error Types
//!
//! The coordinate and rotation algebra is total over finite inputs, so most
//! of the crate returns plain values. The `checked_*` entry points and the
//! composition helpers return [`RtResult`] so callers can detect inputs that
//! fall outside a formula's domain instead of receiving a silently clamped
//! number.
//!
//! ## Error Policy
//!
//! - NO clamping of out-of-range spreads
//! - Verification mismatches are data, never errors
//! - Errors include the offending values for debugging

use thiserror::Error;

use crate::core::basis::Axis;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the checked Rational Trigonometry entry points.
///
/// ## Example
///
/// ```rust
/// use quadray_rt::{checked_spread, RtError};
///
/// match checked_spread(0.0, 1.0, 1.0) {
///     Err(RtError::DegenerateQuadrance { q1, .. }) => assert_eq!(q1, 0.0),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RtError {
    /// Spread requested at a vertex where one adjacent side has zero (or
    /// negative) quadrance.
    #[error("spread undefined for quadrances Q1={q1}, Q2={q2}: both must be positive")]
    DegenerateQuadrance {
        /// Quadrance of the first side adjacent to the vertex.
        q1: f64,
        /// Quadrance of the second side adjacent to the vertex.
        q2: f64,
    },

    /// A spread outside `[0, 1]`, i.e. a geometrically unrealizable
    /// configuration.
    #[error("spread {0} lies outside [0, 1]")]
    SpreadOutOfRange(f64),

    /// Same-axis composition was requested for rotations about different axes.
    #[error("cannot compose a rotation about {first} with a rotation about {second}")]
    AxisMismatch {
        /// Axis of the first rotation.
        first: Axis,
        /// Axis of the second rotation.
        second: Axis,
    },

    /// An axis name that is not one of `W`, `X`, `Y`, `Z`.
    #[error("unknown Quadray axis '{0}' (expected W, X, Y or Z)")]
    UnknownAxis(String),

    /// Edge validation referenced a vertex that does not exist.
    #[error("edge references vertex {index} but only {len} vertices exist")]
    EdgeIndexOutOfRange {
        /// Offending vertex index.
        index: usize,
        /// Number of vertices supplied.
        len: usize,
    },

    /// Invalid verification configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for checked RT operations.
pub type RtResult<T> = Result<T, RtError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = RtError::SpreadOutOfRange(1.25);
        assert!(err.to_string().contains("1.25"));

        let err = RtError::AxisMismatch {
            first: Axis::W,
            second: Axis::Z,
        };
        let msg = err.to_string();
        assert!(msg.contains('W'));
        assert!(msg.contains('Z'));

        let err = RtError::UnknownAxis("Q".to_string());
        assert!(err.to_string().contains("'Q'"));
    }

    /// Test error types are Send + Sync for use across the rayon pool.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RtError>();
    }
}
