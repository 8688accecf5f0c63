//! WASM-compatible verification report types.
//!
//! This module wraps the harness summary in handles JavaScript can walk
//! without parsing JSON.

use quadray_rt::{CheckResult, VerificationSummary};
use wasm_bindgen::prelude::*;

/// Check outcome for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    /// Recorded only; not part of the verdict.
    Informational,
}

impl From<&CheckResult> for CheckStatus {
    fn from(result: &CheckResult) -> Self {
        if result.category.is_informational() {
            CheckStatus::Informational
        } else if result.pass {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }
}

/// Verification summary for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const report = verification_report();
/// // for (let i = 0; i < report.len(); i++) {
/// //   console.log(report.label(i), report.max_error(i));
/// // }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct VerificationReport {
    summary: VerificationSummary,
}

#[wasm_bindgen]
impl VerificationReport {
    /// Asserting checks that passed.
    pub fn passed(&self) -> usize {
        self.summary.passed
    }

    /// Asserting checks run.
    pub fn total(&self) -> usize {
        self.summary.total
    }

    /// Whether every asserting check passed.
    pub fn all_pass(&self) -> bool {
        self.summary.all_pass
    }

    /// Number of checks, informational ones included.
    pub fn len(&self) -> usize {
        self.summary.results.len()
    }

    /// `true` when no checks ran.
    pub fn is_empty(&self) -> bool {
        self.summary.results.is_empty()
    }

    /// Status of check `index`, `None` past the end.
    pub fn status(&self, index: usize) -> Option<CheckStatus> {
        self.summary.results.get(index).map(CheckStatus::from)
    }

    /// Label of check `index`.
    pub fn label(&self, index: usize) -> Option<String> {
        self.summary.results.get(index).map(|r| r.label.clone())
    }

    /// Axis name of check `index`.
    pub fn axis_name(&self, index: usize) -> Option<String> {
        self.summary.results.get(index).map(|r| r.axis_name.clone())
    }

    /// Largest component error of check `index`.
    pub fn max_error(&self, index: usize) -> Option<f64> {
        self.summary.results.get(index).map(|r| r.max_error)
    }
}

impl From<VerificationSummary> for VerificationReport {
    fn from(summary: VerificationSummary) -> Self {
        Self { summary }
    }
}
