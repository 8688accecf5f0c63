//! # Verification harness
//!
//! Cross-checks the Quadray rotation operators against an independent
//! quaternion rotation of the same Cartesian point:
//!
//! ```text
//! p ──from_cartesian──▶ q ──rotate_about──▶ q' ──to_cartesian──▶ p'
//! p ──────────── DQuat::from_axis_angle(unit axis, θ) * p ──────▶ p_ref
//! error = max |p' − p_ref| per component
//! ```
//!
//! Four categories of check are run:
//!
//! - single-axis parity for every axis and every configured angle
//! - same-axis composition (two steps against one combined step, and θ
//!   followed by −θ against the input)
//! - cross-axis composition against the quaternion product applied in the
//!   same order
//! - chirality: the opposite circulant ordering must be detected
//!
//! Cross-axis results are recorded and reported but never asserted; they
//! count towards [`VerificationSummary::informational`] and are left out of
//! `passed`, `total` and `all_pass`. A mismatch is data in the returned
//! summary, never an error or a panic.

use std::collections::BTreeMap;
use std::fmt;

use glam::DQuat;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::VerificationConfig;
use crate::core::basis::Axis;
use crate::core::quadray::Quadray;
use crate::core::vec3::{max_abs_diff, Vec3};
use crate::rotation::{rotate_about, rotate_with, Fgh};

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Kind of check a [`CheckResult`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    /// One rotation about one axis against the quaternion reference.
    SingleAxis,
    /// Two rotations about the same axis against one combined rotation.
    SameAxisComposition,
    /// Rotations about two different axes against the quaternion product.
    CrossAxisComposition,
    /// The opposite circulant ordering must produce a mismatch.
    Chirality,
}

impl CheckCategory {
    /// All categories in reporting order.
    pub const ALL: [CheckCategory; 4] = [
        CheckCategory::SingleAxis,
        CheckCategory::SameAxisComposition,
        CheckCategory::CrossAxisComposition,
        CheckCategory::Chirality,
    ];

    /// Recorded and reported, but not part of the pass/fail verdict.
    pub fn is_informational(self) -> bool {
        matches!(self, CheckCategory::CrossAxisComposition)
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckCategory::SingleAxis => "single-axis",
            CheckCategory::SameAxisComposition => "same-axis composition",
            CheckCategory::CrossAxisComposition => "cross-axis composition",
            CheckCategory::Chirality => "chirality",
        };
        f.write_str(name)
    }
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Category of the check.
    pub category: CheckCategory,
    /// Whether the check passed.
    pub pass: bool,
    /// Largest absolute Cartesian component error. For chirality checks this
    /// is the mismatch of the wrong ordering, which must exceed the tolerance.
    pub max_error: f64,
    /// Axis name, or `"W→X"` for compositions across two axes.
    pub axis_name: String,
    /// Angle in radians (per step for compositions).
    pub theta: f64,
    /// Human-readable description.
    pub label: String,
}

/// Pass count over a group of checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Checks that passed.
    pub passed: usize,
    /// Checks run.
    pub total: usize,
}

impl Tally {
    fn record(&mut self, pass: bool) {
        self.total += 1;
        if pass {
            self.passed += 1;
        }
    }

    /// `true` when every counted check passed.
    pub fn all_pass(&self) -> bool {
        self.passed == self.total
    }
}

/// Aggregated outcome of a verification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSummary {
    /// Asserting checks that passed.
    pub passed: usize,
    /// Asserting checks run.
    pub total: usize,
    /// `passed == total`.
    pub all_pass: bool,
    /// Every check in a fixed order, informational ones included.
    pub results: Vec<CheckResult>,
    /// Tallies keyed by [`CheckResult::axis_name`].
    pub by_axis: BTreeMap<String, Tally>,
    /// Tallies keyed by category.
    pub by_category: BTreeMap<CheckCategory, Tally>,
    /// Tally of the informational (cross-axis) checks.
    pub informational: Tally,
}

impl VerificationSummary {
    fn from_results(results: Vec<CheckResult>) -> Self {
        let mut asserting = Tally::default();
        let mut informational = Tally::default();
        let mut by_axis: BTreeMap<String, Tally> = BTreeMap::new();
        let mut by_category: BTreeMap<CheckCategory, Tally> = BTreeMap::new();

        for r in &results {
            if r.category.is_informational() {
                informational.record(r.pass);
            } else {
                asserting.record(r.pass);
            }
            by_axis.entry(r.axis_name.clone()).or_default().record(r.pass);
            by_category.entry(r.category).or_default().record(r.pass);
        }

        Self {
            passed: asserting.passed,
            total: asserting.total,
            all_pass: asserting.all_pass(),
            results,
            by_axis,
            by_category,
            informational,
        }
    }

    /// Asserting checks that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results
            .iter()
            .filter(|r| !r.pass && !r.category.is_informational())
    }

    /// Results of one category.
    pub fn in_category(&self, category: CheckCategory) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(move |r| r.category == category)
    }
}

// =============================================================================
// CHECKS
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Check {
    SingleAxis { axis: Axis, theta: f64 },
    TwoSteps { axis: Axis, theta: f64 },
    ThereAndBack { axis: Axis, theta: f64 },
    CrossAxis { first: Axis, second: Axis, theta: f64 },
    Chirality { axis: Axis, theta: f64 },
}

/// Quaternion rotation of `p` about the axis' Cartesian unit direction.
fn reference_rotation(axis: Axis, theta: f64) -> DQuat {
    DQuat::from_axis_angle(axis.unit_direction(), theta)
}

/// Per-component error; non-finite results count as infinitely wrong.
fn component_error(actual: Vec3, expected: Vec3) -> f64 {
    if actual.is_finite() && expected.is_finite() {
        max_abs_diff(actual, expected)
    } else {
        f64::INFINITY
    }
}

impl Check {
    fn plan(config: &VerificationConfig) -> Vec<Check> {
        let step = config.composition_step_deg.to_radians();
        let mut checks = Vec::new();

        for axis in Axis::ALL {
            for deg in &config.angles_deg {
                checks.push(Check::SingleAxis {
                    axis,
                    theta: deg.to_radians(),
                });
            }
        }
        for axis in Axis::ALL {
            checks.push(Check::TwoSteps { axis, theta: step });
            checks.push(Check::ThereAndBack { axis, theta: step });
        }
        for first in Axis::ALL {
            for second in Axis::ALL.into_iter().filter(|s| *s != first) {
                checks.push(Check::CrossAxis {
                    first,
                    second,
                    theta: step,
                });
            }
        }
        for axis in Axis::ALL {
            checks.push(Check::Chirality { axis, theta: step });
        }
        checks
    }

    fn category(&self) -> CheckCategory {
        match self {
            Check::SingleAxis { .. } => CheckCategory::SingleAxis,
            Check::TwoSteps { .. } | Check::ThereAndBack { .. } => {
                CheckCategory::SameAxisComposition
            }
            Check::CrossAxis { .. } => CheckCategory::CrossAxisComposition,
            Check::Chirality { .. } => CheckCategory::Chirality,
        }
    }

    fn run(&self, point: Vec3, tolerance: f64) -> CheckResult {
        let q = Quadray::from_cartesian(point);
        let (axis_name, theta, label, error) = match *self {
            Check::SingleAxis { axis, theta } => {
                let actual = rotate_about(&q, axis, theta).to_cartesian();
                let expected = reference_rotation(axis, theta) * point;
                (
                    axis.name().to_string(),
                    theta,
                    format!("rotate about {axis} by {:.1}°", theta.to_degrees()),
                    component_error(actual, expected),
                )
            }
            Check::TwoSteps { axis, theta } => {
                let twice = rotate_about(&rotate_about(&q, axis, theta), axis, theta);
                let once = rotate_about(&q, axis, 2.0 * theta);
                (
                    axis.name().to_string(),
                    theta,
                    format!(
                        "{axis}: two {:.1}° steps vs one {:.1}° rotation",
                        theta.to_degrees(),
                        2.0 * theta.to_degrees()
                    ),
                    component_error(twice.to_cartesian(), once.to_cartesian()),
                )
            }
            Check::ThereAndBack { axis, theta } => {
                let back = rotate_about(&rotate_about(&q, axis, theta), axis, -theta);
                (
                    axis.name().to_string(),
                    theta,
                    format!("{axis}: {:.1}° then back", theta.to_degrees()),
                    component_error(back.to_cartesian(), point),
                )
            }
            Check::CrossAxis {
                first,
                second,
                theta,
            } => {
                let actual = rotate_about(&rotate_about(&q, first, theta), second, theta);
                let product = reference_rotation(second, theta) * reference_rotation(first, theta);
                (
                    format!("{first}→{second}"),
                    theta,
                    format!(
                        "{first} then {second} by {:.1}° each vs quaternion product",
                        theta.to_degrees()
                    ),
                    component_error(actual.to_cartesian(), product * point),
                )
            }
            Check::Chirality { axis, theta } => {
                let wrong = rotate_with(
                    &q,
                    axis,
                    &Fgh::from_angle(theta),
                    axis.chirality().opposite(),
                );
                let expected = reference_rotation(axis, theta) * point;
                (
                    axis.name().to_string(),
                    theta,
                    format!(
                        "{axis}: {:?} ordering must mismatch at {:.1}°",
                        axis.chirality().opposite(),
                        theta.to_degrees()
                    ),
                    component_error(wrong.to_cartesian(), expected),
                )
            }
        };

        let category = self.category();
        let pass = match category {
            CheckCategory::Chirality => error.is_finite() && error > tolerance,
            _ => error <= tolerance,
        };

        debug!(%category, axis = %axis_name, theta, max_error = error, pass, "{label}");
        if !pass && !category.is_informational() {
            warn!(%category, axis = %axis_name, max_error = error, "check failed: {label}");
        }

        CheckResult {
            category,
            pass,
            max_error: error,
            axis_name,
            theta,
            label,
        }
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Runs the harness with [`VerificationConfig::default`].
///
/// # Examples
/// ```
/// let summary = quadray_rt::run_verification_suite();
/// assert!(summary.all_pass);
/// assert_eq!(summary.passed, summary.total);
/// ```
pub fn run_verification_suite() -> VerificationSummary {
    run_verification_suite_with(&VerificationConfig::default())
}

/// Runs the harness with explicit settings.
///
/// Checks are independent; with the `parallel` feature they run on the
/// rayon pool. Result order is the same either way.
///
/// Chirality checks need a point off the rotation axes and an angle that is
/// not a multiple of 180°; otherwise both orderings agree and the check fails.
pub fn run_verification_suite_with(config: &VerificationConfig) -> VerificationSummary {
    let checks = Check::plan(config);
    let (point, tolerance) = (config.point, config.tolerance);

    #[cfg(feature = "parallel")]
    let results: Vec<CheckResult> = checks.par_iter().map(|c| c.run(point, tolerance)).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<CheckResult> = checks.iter().map(|c| c.run(point, tolerance)).collect();

    let summary = VerificationSummary::from_results(results);

    for (category, tally) in &summary.by_category {
        info!(%category, passed = tally.passed, total = tally.total, "category tally");
    }
    info!(
        passed = summary.passed,
        total = summary.total,
        all_pass = summary.all_pass,
        informational_passed = summary.informational.passed,
        informational_total = summary.informational.total,
        "verification complete"
    );
    summary
}

#[cfg(test)]
mod tests;
