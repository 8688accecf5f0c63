//! Quadray coordinates and Rational Trigonometry rotation algebra.
//!
//! This crate provides the numeric core of the Quadray explorer: conversion
//! between Cartesian points and four-component tetrahedral coordinates,
//! quadrance/spread primitives, the F/G/H circulant rotation coefficients,
//! per-axis rotation operators and a verification harness that checks them
//! against quaternion rotation.
//!
//! ```
//! use quadray_rt::{rotate_about, Axis, Quadray, Vec3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = Quadray::from_cartesian(Vec3::new(1.0, 0.5, 0.3));
//! let r = rotate_about(&q, Axis::W, FRAC_PI_2);
//! assert_eq!(r.w, q.w);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod rotation;
pub mod rt;
pub mod verify;

pub use crate::core::basis::{Axis, AxisSpec, Circulant, AXIS_TABLE};
pub use crate::core::quadray::{
    batch_cartesian_to_quadray, batch_quadray_to_cartesian, cartesian_to_quadray,
    cartesian_to_quadray_raw, quadray_to_cartesian, quadray_to_cartesian_raw, Quadray,
};
pub use crate::core::vec3::Vec3;
pub use self::config::VerificationConfig;
pub use error::{RtError, RtResult};
pub use rotation::{
    rotate_about, rotate_about_spread, rotate_about_w, rotate_about_x, rotate_about_y,
    rotate_about_z, rotate_with, Fgh, Polarity, QuadrayRotation,
};
pub use rt::{
    checked_spread, checked_spread_to_sin_cos, circle_param, quadrance, reflect_in_line,
    rotation_matrix_from_spreads, slope_from_spread, sphere_plane_circle_radius, spread,
    spread_to_param, spread_to_sin_cos, validate_edges, vector_spread, verify_euler,
    EdgeValidation,
};
pub use verify::{
    run_verification_suite, run_verification_suite_with, CheckCategory, CheckResult, Tally,
    VerificationSummary,
};
