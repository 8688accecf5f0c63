//! Tests for the verification harness.

use super::*;

#[test]
fn default_suite_passes() {
    let summary = run_verification_suite();
    let failed: Vec<_> = summary.failures().map(|r| r.label.clone()).collect();
    assert!(summary.all_pass, "failed checks: {failed:?}");
    assert_eq!(summary.passed, summary.total);
}

#[test]
fn plan_sizes_per_category() {
    let summary = run_verification_suite();
    let count = |c| summary.in_category(c).count();
    assert_eq!(count(CheckCategory::SingleAxis), 16);
    assert_eq!(count(CheckCategory::SameAxisComposition), 8);
    assert_eq!(count(CheckCategory::CrossAxisComposition), 12);
    assert_eq!(count(CheckCategory::Chirality), 4);
    assert_eq!(summary.total, 28);
    assert_eq!(summary.results.len(), 40);
}

#[test]
fn cross_axis_checks_are_informational() {
    let summary = run_verification_suite();
    assert_eq!(summary.informational.total, 12);
    let cross = summary.by_category[&CheckCategory::CrossAxisComposition];
    assert_eq!(cross, summary.informational);
    assert!(summary
        .in_category(CheckCategory::CrossAxisComposition)
        .all(|r| r.axis_name.contains('→')));
}

#[test]
fn by_axis_counts_single_axis_names() {
    let summary = run_verification_suite();
    for axis in Axis::ALL {
        // 4 angles + 2 same-axis + 1 chirality
        assert_eq!(summary.by_axis[axis.name()].total, 7);
    }
    assert!(summary.by_axis.contains_key("W→X"));
}

#[test]
fn chirality_checks_report_large_mismatch() {
    let summary = run_verification_suite();
    for r in summary.in_category(CheckCategory::Chirality) {
        assert!(r.pass);
        assert!(r.max_error > 1e-3, "{}: {}", r.label, r.max_error);
    }
}

#[test]
fn results_are_in_plan_order() {
    let summary = run_verification_suite();
    let first = &summary.results[0];
    assert_eq!(first.category, CheckCategory::SingleAxis);
    assert_eq!(first.axis_name, "W");
    assert!((first.theta - 30f64.to_radians()).abs() < 1e-15);
    let last = summary.results.last().map(|r| (r.category, r.axis_name.as_str()));
    assert_eq!(last, Some((CheckCategory::Chirality, "Z")));
}

/// A tolerance no float computation can meet turns mismatches into data.
#[test]
fn failures_are_reported_not_raised() {
    let config = VerificationConfig {
        tolerance: 1e-300,
        ..VerificationConfig::default()
    };
    let summary = run_verification_suite_with(&config);
    assert!(!summary.all_pass);
    assert!(summary.passed < summary.total);
    assert!(summary.failures().count() > 0);
}

#[test]
fn point_on_axis_defeats_chirality_check() {
    let config = VerificationConfig::default().with_point(Axis::W.direction());
    let summary = run_verification_suite_with(&config);
    let w = summary
        .in_category(CheckCategory::Chirality)
        .find(|r| r.axis_name == "W");
    assert_eq!(w.map(|r| r.pass), Some(false));
}

#[test]
fn custom_angles_change_the_sweep() {
    let config = VerificationConfig {
        angles_deg: vec![10.0, 170.0, -45.0],
        ..VerificationConfig::default()
    };
    let summary = run_verification_suite_with(&config);
    assert!(summary.all_pass);
    assert_eq!(summary.in_category(CheckCategory::SingleAxis).count(), 12);
}

#[test]
fn category_flags_and_tally() {
    let tally = Tally { passed: 1, total: 2 };
    assert!(!tally.all_pass());
    assert!(CheckCategory::CrossAxisComposition.is_informational());
    assert!(!CheckCategory::Chirality.is_informational());
    assert_eq!(CheckCategory::SameAxisComposition.to_string(), "same-axis composition");
}
