//! WASM-facing entry points for the Quadray rotation core.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every exported function that can fail has a `*_internal`
//! helper returning Rust types, so native tests never need a JS host.
//!
//! ```
//! let q = quadray_wasm::cartesian_to_quadray(1.0, 0.5, 0.3);
//! assert_eq!(q.len(), 4);
//! ```

use std::str::FromStr;

use config::constants::VERIFICATION_TOLERANCE;
use quadray_rt::{Axis, Fgh, Polarity, Quadray, RtError, Vec3};
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod report;

pub use report::{CheckStatus, VerificationReport};

/// Errors raised while decoding JavaScript arguments or encoding results.
#[derive(Error, Debug)]
pub enum BindingError {
    /// A coordinate array had the wrong number of elements.
    #[error("expected {expected} coordinates, got {got}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Supplied length.
        got: usize,
    },
    /// Domain error from the core crate.
    #[error(transparent)]
    Rt(#[from] RtError),
    /// JSON encoding failed.
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}

fn to_js(err: BindingError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn point3(coords: &[f64]) -> Result<Vec3, BindingError> {
    match coords {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(BindingError::WrongLength {
            expected: 3,
            got: coords.len(),
        }),
    }
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "quadray-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Absolute per-component tolerance used by the verification harness.
///
/// # Examples
/// ```
/// assert!(quadray_wasm::verification_tolerance() > 0.0);
/// ```
#[wasm_bindgen]
pub fn verification_tolerance() -> f64 {
    VERIFICATION_TOLERANCE
}

// ─── Conversion ───────────────────────────────────────────────────────

/// Cartesian `(x, y, z)` to canonical `[w, x, y, z]`.
#[wasm_bindgen]
pub fn cartesian_to_quadray(x: f64, y: f64, z: f64) -> Vec<f64> {
    quadray_rt::cartesian_to_quadray(Vec3::new(x, y, z))
        .to_array()
        .to_vec()
}

/// Quadray `(w, x, y, z)` to Cartesian `[x, y, z]`.
///
/// # Examples
/// ```
/// assert_eq!(quadray_wasm::quadray_to_cartesian(1.0, 0.0, 0.0, 0.0), vec![1.0, 1.0, 1.0]);
/// ```
#[wasm_bindgen]
pub fn quadray_to_cartesian(w: f64, x: f64, y: f64, z: f64) -> Vec<f64> {
    Quadray::new(w, x, y, z).to_cartesian().to_array().to_vec()
}

// ─── RT primitives ────────────────────────────────────────────────────

/// Quadrance between two Cartesian points given as 3-element arrays.
///
/// # Errors
/// Returns a JavaScript error when either array does not hold 3 numbers.
#[wasm_bindgen]
pub fn quadrance(p1: &[f64], p2: &[f64]) -> Result<f64, JsValue> {
    quadrance_internal(p1, p2).map_err(to_js)
}

/// Host-only helper behind [`quadrance`].
///
/// # Examples
/// ```
/// let q = quadray_wasm::quadrance_internal(&[0.0, 0.0, 0.0], &[1.0, 2.0, 2.0]).unwrap();
/// assert_eq!(q, 9.0);
/// ```
pub fn quadrance_internal(p1: &[f64], p2: &[f64]) -> Result<f64, BindingError> {
    Ok(quadray_rt::quadrance(point3(p1)?, point3(p2)?))
}

/// Spread at the vertex between sides of quadrance `q1` and `q2`, opposite
/// side `q3`.
///
/// # Errors
/// Returns a JavaScript error for degenerate sides or an unrealizable triple.
#[wasm_bindgen]
pub fn spread(q1: f64, q2: f64, q3: f64) -> Result<f64, JsValue> {
    spread_internal(q1, q2, q3).map_err(to_js)
}

/// Host-only helper behind [`spread`].
pub fn spread_internal(q1: f64, q2: f64, q3: f64) -> Result<f64, BindingError> {
    Ok(quadray_rt::checked_spread(q1, q2, q3)?)
}

// ─── Coefficients ─────────────────────────────────────────────────────

/// F, G, H coefficients handed to JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const c = fgh_coefficients(Math.PI / 4);
/// // console.log(c.f, c.g, c.h);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FghHandle {
    inner: Fgh,
}

#[wasm_bindgen]
impl FghHandle {
    /// Diagonal coefficient.
    #[wasm_bindgen(getter)]
    pub fn f(&self) -> f64 {
        self.inner.f
    }

    /// `cos(θ − 120°)` coefficient.
    #[wasm_bindgen(getter)]
    pub fn g(&self) -> f64 {
        self.inner.g
    }

    /// `cos(θ + 120°)` coefficient.
    #[wasm_bindgen(getter)]
    pub fn h(&self) -> f64 {
        self.inner.h
    }

    /// `F + G + H`.
    pub fn sum(&self) -> f64 {
        self.inner.sum()
    }
}

impl From<Fgh> for FghHandle {
    fn from(inner: Fgh) -> Self {
        Self { inner }
    }
}

/// Coefficients for a rotation by `theta` radians.
#[wasm_bindgen]
pub fn fgh_coefficients(theta: f64) -> FghHandle {
    Fgh::from_angle(theta).into()
}

/// Coefficients from a spread and a polarity sign (negative selects the
/// obtuse angle, anything else the acute one).
///
/// # Errors
/// Returns a JavaScript error when `spread` lies outside `[0, 1]`.
#[wasm_bindgen]
pub fn fgh_coefficients_from_spread(spread: f64, polarity: i32) -> Result<FghHandle, JsValue> {
    fgh_coefficients_from_spread_internal(spread, polarity).map_err(to_js)
}

/// Host-only helper behind [`fgh_coefficients_from_spread`].
pub fn fgh_coefficients_from_spread_internal(
    spread: f64,
    polarity: i32,
) -> Result<FghHandle, BindingError> {
    let polarity = Polarity::from_sign(f64::from(polarity));
    Ok(Fgh::checked_from_spread(spread, polarity)?.into())
}

// ─── Rotation ─────────────────────────────────────────────────────────

/// Rotates `(w, x, y, z)` by `theta` about the axis named `axis`
/// (`"W"`, `"X"`, `"Y"` or `"Z"`, case-insensitive).
///
/// # Errors
/// Returns a JavaScript error for an unknown axis name.
#[wasm_bindgen]
pub fn rotate_about(
    axis: &str,
    w: f64,
    x: f64,
    y: f64,
    z: f64,
    theta: f64,
) -> Result<Vec<f64>, JsValue> {
    rotate_about_internal(axis, [w, x, y, z], theta)
        .map(|q| q.to_vec())
        .map_err(to_js)
}

/// Host-only helper behind [`rotate_about`].
///
/// # Examples
/// ```
/// let r = quadray_wasm::rotate_about_internal("x", [0.75, 0.35, 0.1, 0.0], 0.5).unwrap();
/// assert_eq!(r[1], 0.35);
/// ```
pub fn rotate_about_internal(
    axis: &str,
    q: [f64; 4],
    theta: f64,
) -> Result<[f64; 4], BindingError> {
    let axis = Axis::from_str(axis)?;
    Ok(rotate(axis, q, theta))
}

fn rotate(axis: Axis, q: [f64; 4], theta: f64) -> [f64; 4] {
    quadray_rt::rotate_about(&Quadray::from_array(q), axis, theta).to_array()
}

/// Rotation about `W`.
#[wasm_bindgen]
pub fn rotate_about_w(w: f64, x: f64, y: f64, z: f64, theta: f64) -> Vec<f64> {
    rotate(Axis::W, [w, x, y, z], theta).to_vec()
}

/// Rotation about `X`.
#[wasm_bindgen]
pub fn rotate_about_x(w: f64, x: f64, y: f64, z: f64, theta: f64) -> Vec<f64> {
    rotate(Axis::X, [w, x, y, z], theta).to_vec()
}

/// Rotation about `Y`.
#[wasm_bindgen]
pub fn rotate_about_y(w: f64, x: f64, y: f64, z: f64, theta: f64) -> Vec<f64> {
    rotate(Axis::Y, [w, x, y, z], theta).to_vec()
}

/// Rotation about `Z`.
#[wasm_bindgen]
pub fn rotate_about_z(w: f64, x: f64, y: f64, z: f64, theta: f64) -> Vec<f64> {
    rotate(Axis::Z, [w, x, y, z], theta).to_vec()
}

// ─── Verification ─────────────────────────────────────────────────────

/// Runs the verification harness and returns the summary as JSON
/// (`{passed, total, allPass, results, ...}`).
///
/// # Errors
/// Returns a JavaScript error if the summary cannot be encoded.
#[wasm_bindgen]
pub fn run_verification_suite() -> Result<String, JsValue> {
    run_verification_suite_internal().map_err(to_js)
}

/// Host-only helper behind [`run_verification_suite`].
pub fn run_verification_suite_internal() -> Result<String, BindingError> {
    Ok(serde_json::to_string(&quadray_rt::run_verification_suite())?)
}

/// Runs the verification harness and returns a handle with per-check
/// accessors.
#[wasm_bindgen]
pub fn verification_report() -> VerificationReport {
    VerificationReport::from(quadray_rt::run_verification_suite())
}
