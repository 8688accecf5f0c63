//! # Config Crate
//!
//! Centralized configuration constants for the Quadray / Rational
//! Trigonometry workspace. Tolerances, exact radicals, the tetrahedral
//! reference values and the verification sweep parameters are defined here
//! so every crate agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, SIN_120, SQRT_3};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Exact radicals are literals, not runtime square roots
//! assert_eq!(SIN_120, SQRT_3 / 2.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **No Runtime Radicals**: √2, √3, √6 are compile-time literals

pub mod constants;
