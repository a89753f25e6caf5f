//! RunStats unit tests.

use tapeworks_core::stats::RunStats;

#[test]
fn default_stats_all_zero() {
    let stats = RunStats::default();
    assert_eq!(stats.steps, 0);
    assert_eq!(stats.animations, 0);
    assert_eq!(stats.cases_started, 0);
    assert_eq!(stats.cases_passed, 0);
    assert_eq!(stats.cases_failed, 0);
    assert_eq!(stats.faults, 0);
    assert_eq!(stats.pass_rate(), 0.0);
    assert_eq!(stats.steps_per_case(), 0.0);
}

#[test]
fn derived_rates() {
    let mut stats = RunStats::default();
    stats.steps = 30;
    stats.cases_passed = 3;
    stats.cases_failed = 1;
    assert_eq!(stats.cases_judged(), 4);
    assert!((stats.pass_rate() - 75.0).abs() < 1e-9);
    assert!((stats.steps_per_case() - 7.5).abs() < 1e-9);
}

#[test]
fn report_lists_every_counter() {
    let mut stats = RunStats::default();
    stats.steps = 12;
    stats.faults = 2;
    stats.cases_passed = 1;
    let report = stats.render();
    assert!(report.contains("TAPEWORKS RUN STATISTICS"));
    assert!(report.contains("steps                    12"));
    assert!(report.contains("faults                   2"));
    assert!(report.contains("cases.pass_rate        100.00%"));
}
