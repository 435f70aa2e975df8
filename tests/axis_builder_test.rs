//! Axis construction tests
//!
//! Covers the per-parameter encoding policy: log, categorical and numeric
//! axes, missing values, parameter selection and label truncation.

use approx::assert_relative_eq;
use trueno_parcoords::axis::{AxisBuilder, Target};
use trueno_parcoords::study::{Distribution, TrialRecord, TrialState};
use trueno_parcoords::{Diagnostic, Error};

fn example_trials() -> Vec<TrialRecord> {
    vec![
        TrialRecord::builder(0).param("x", 1.0).param("y", "a").value(5.0).build(),
        TrialRecord::builder(1).param("x", 10.0).param("y", "b").value(3.0).build(),
        TrialRecord::builder(2).param("x", 100.0).param("y", "a").value(9.0).build(),
    ]
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_end_to_end_example() {
    let axes = AxisBuilder::new().target_name("Objective Value").build(&example_trials()).unwrap();
    let dims = axes.dimensions();
    assert_eq!(dims.len(), 3);

    let target = &dims[0];
    assert_eq!(target.label(), "Objective Value");
    assert_eq!(target.values(), &[5.0, 3.0, 9.0]);
    assert_eq!(target.range(), (3.0, 9.0));
    assert!(target.ticks().is_none());

    let x = &dims[1];
    assert_eq!(x.label(), "x");
    assert_eq!(x.values(), &[0.0, 1.0, 2.0]);
    assert_eq!(x.range(), (0.0, 2.0));
    assert_eq!(x.tickvals().unwrap(), &[0.0, 1.0, 2.0]);
    assert_eq!(x.ticktext().unwrap(), ["1", "10", "100"]);

    let y = &dims[2];
    assert_eq!(y.label(), "y");
    assert_eq!(y.values(), &[0.0, 1.0, 0.0]);
    assert_eq!(y.range(), (0.0, 1.0));
    assert_eq!(y.tickvals().unwrap(), &[0.0, 1.0]);
    assert_eq!(y.ticktext().unwrap(), ["a", "b"]);

    assert!(axes.diagnostics().is_empty());
}

#[test]
fn test_deterministic_output() {
    let trials = example_trials();
    let builder = AxisBuilder::new();
    let first = serde_json::to_string(builder.build(&trials).unwrap().dimensions()).unwrap();
    let second = serde_json::to_string(builder.build(&trials).unwrap().dimensions()).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Eligibility and empty input
// =============================================================================

#[test]
fn test_empty_trials() {
    let axes = AxisBuilder::new().build(&[]).unwrap();
    assert!(axes.is_empty());
    assert!(axes.target().is_none());
    assert_eq!(axes.diagnostics(), &[Diagnostic::NoCompletedTrials]);
}

#[test]
fn test_only_unfinished_trials_is_empty() {
    let trials = vec![
        TrialRecord::builder(0).state(TrialState::Running).param("x", 1.0).build(),
        TrialRecord::builder(1).state(TrialState::Fail).param("x", 2.0).build(),
    ];
    // Unknown parameters are not checked when nothing is plotted.
    let axes = AxisBuilder::new().params(["nonexistent"]).build(&trials).unwrap();
    assert!(axes.is_empty());
}

#[test]
fn test_non_complete_trials_are_skipped() {
    let trials = vec![
        TrialRecord::builder(0).param("x", 1.0).value(1.0).build(),
        TrialRecord::builder(1).state(TrialState::Pruned).param("x", 50.0).build(),
        TrialRecord::builder(2).param("x", 2.0).value(2.0).build(),
    ];
    let axes = AxisBuilder::new().build(&trials).unwrap();
    assert_eq!(axes.target().unwrap().values(), &[1.0, 2.0]);
    assert_eq!(axes.params()[0].values(), &[1.0, 2.0]);
}

// =============================================================================
// Parameter selection
// =============================================================================

#[test]
fn test_unknown_parameter_rejected() {
    let err = AxisBuilder::new().params(["nonexistent"]).build(&example_trials()).unwrap_err();
    assert!(matches!(err, Error::UnknownParameter(ref name) if name == "nonexistent"));
    assert!(err.to_string().contains("nonexistent"));
}

#[test]
fn test_parameter_known_only_to_failed_trial_rejected() {
    let mut trials = example_trials();
    trials.push(TrialRecord::builder(3).state(TrialState::Fail).param("z", 1.0).build());
    let err = AxisBuilder::new().params(["z"]).build(&trials).unwrap_err();
    assert!(matches!(err, Error::UnknownParameter(_)));
}

#[test]
fn test_subset_is_sorted_and_deduplicated() {
    let trials = vec![TrialRecord::builder(0)
        .param("b", 1.0)
        .param("a", 2.0)
        .param("c", 3.0)
        .value(0.0)
        .build()];
    let axes = AxisBuilder::new().params(["c", "a", "c"]).build(&trials).unwrap();
    let labels: Vec<&str> = axes.dimensions().iter().map(|d| d.label()).collect();
    assert_eq!(labels, ["Objective Value", "a", "c"]);
}

#[test]
fn test_all_parameters_sorted_by_name() {
    let trials = vec![
        TrialRecord::builder(0).param("zeta", 1.0).param("alpha", 1.0).value(0.0).build(),
        TrialRecord::builder(1).param("mu", 1.0).value(0.0).build(),
    ];
    let axes = AxisBuilder::new().build(&trials).unwrap();
    let labels: Vec<&str> = axes.params().iter().map(|d| d.label()).collect();
    assert_eq!(labels, ["alpha", "mu", "zeta"]);
}

// =============================================================================
// Missing values
// =============================================================================

#[test]
fn test_missing_values_are_skipped() {
    let trials = vec![
        TrialRecord::builder(0).param("x", 1.0).param("opt", "adam").value(1.0).build(),
        TrialRecord::builder(1).param("x", 2.0).value(2.0).build(),
        TrialRecord::builder(2).param("x", 3.0).param("opt", "sgd").value(3.0).build(),
    ];
    let axes = AxisBuilder::new().build(&trials).unwrap();

    assert_eq!(axes.target().unwrap().values().len(), 3);
    let opt = &axes.params()[0];
    assert_eq!(opt.label(), "opt");
    assert_eq!(opt.values(), &[0.0, 1.0]);
    assert_eq!(
        axes.diagnostics(),
        &[Diagnostic::MissingValues { param: "opt".to_string(), missing: 1 }]
    );
}

// =============================================================================
// Log-scaled axes
// =============================================================================

#[test]
fn test_log_axis_round_trip() {
    let raw = [3e-5, 0.002, 0.7, 42.0];
    let trials: Vec<TrialRecord> = raw
        .iter()
        .enumerate()
        .map(|(i, &lr)| TrialRecord::builder(i as u64).param("lr", lr).value(0.0).build())
        .collect();
    let axes = AxisBuilder::new().build(&trials).unwrap();
    let lr = &axes.params()[0];

    for (&original, &scaled) in raw.iter().zip(lr.values()) {
        assert_relative_eq!(10f64.powf(scaled), original, max_relative = 1e-12);
    }
}

#[test]
fn test_log_axis_fractional_bounds() {
    let trials = vec![
        TrialRecord::builder(0).param("lr", 0.03).value(0.0).build(),
        TrialRecord::builder(1).param("lr", 50.0).value(0.0).build(),
    ];
    let axes = AxisBuilder::new().build(&trials).unwrap();
    let lr = &axes.params()[0];
    let (min, max) = lr.range();
    let tickvals = lr.tickvals().unwrap();

    assert_relative_eq!(tickvals[0], min);
    assert_eq!(&tickvals[1..4], &[-1.0, 0.0, 1.0]);
    assert_relative_eq!(tickvals[4], max);
    assert_eq!(lr.ticktext().unwrap(), ["0.03", "0.1", "1", "10", "50"]);
    assert!(tickvals.iter().all(|t| (min..=max).contains(t)));
}

#[test]
fn test_log_distribution_metadata_forces_log_axis() {
    let dist = Distribution::Float { low: 1.0, high: 10.0, log: true, step: None };
    let trials = vec![
        TrialRecord::builder(0).param_with_distribution("x", 2.0, dist.clone()).value(0.0).build(),
        TrialRecord::builder(1).param_with_distribution("x", 4.0, dist).value(0.0).build(),
    ];
    let axes = AxisBuilder::new().build(&trials).unwrap();
    let x = &axes.params()[0];
    assert!(x.ticks().is_some());
    assert_relative_eq!(x.values()[0], 2f64.log10());
}

#[test]
fn test_infinite_value_is_not_log_scaled() {
    let trials = vec![
        TrialRecord::builder(0).param("x", 1.0).value(0.0).build(),
        TrialRecord::builder(1).param("x", f64::INFINITY).value(1.0).build(),
    ];
    let axes = AxisBuilder::new().build(&trials).unwrap();
    let x = &axes.params()[0];
    assert!(x.ticks().is_none());
    assert_eq!(x.values(), &[1.0, f64::INFINITY]);
}

#[test]
fn test_infinite_value_with_log_metadata_rejected() {
    let dist = Distribution::Float { low: 1.0, high: 10.0, log: true, step: None };
    let trials = vec![
        TrialRecord::builder(0).param_with_distribution("x", 1.0, dist.clone()).value(0.0).build(),
        TrialRecord::builder(1).param_with_distribution("x", f64::INFINITY, dist).value(1.0).build(),
    ];
    let err = AxisBuilder::new().build(&trials).unwrap_err();
    assert!(matches!(err, Error::InvalidLogValue { ref param, ref value } if param == "x" && value == "inf"));
}

#[test]
fn test_log_threshold_is_configurable() {
    let trials = example_trials();
    let axes = AxisBuilder::new().log_scale_min_decades(3.0).build(&trials).unwrap();
    let x = &axes.params()[0];
    assert_eq!(x.values(), &[1.0, 10.0, 100.0]);
    assert!(x.ticks().is_none());
}

// =============================================================================
// Categorical axes
// =============================================================================

#[test]
fn test_categorical_bijection() {
    let trials: Vec<TrialRecord> = ["a", "b", "a", "c"]
        .iter()
        .enumerate()
        .map(|(i, &v)| TrialRecord::builder(i as u64).param("p", v).value(0.0).build())
        .collect();
    let axes = AxisBuilder::new().build(&trials).unwrap();
    let p = &axes.params()[0];
    assert_eq!(p.values(), &[0.0, 1.0, 0.0, 2.0]);
    assert_eq!(p.range(), (0.0, 2.0));
    assert_eq!(p.tickvals().unwrap(), &[0.0, 1.0, 2.0]);
    assert_eq!(p.ticktext().unwrap(), ["a", "b", "c"]);
}

#[test]
fn test_numeric_categorical_choices() {
    let dist = Distribution::Categorical { choices: vec![(-1_i64).into(), 0_i64.into(), 1_i64.into()] };
    let trials: Vec<TrialRecord> = [1_i64, -1, 1]
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            TrialRecord::builder(i as u64)
                .param_with_distribution("y", v, dist.clone())
                .value(0.0)
                .build()
        })
        .collect();
    let axes = AxisBuilder::new().build(&trials).unwrap();
    let y = &axes.params()[0];
    assert_eq!(y.values(), &[0.0, 1.0, 0.0]);
    assert_eq!(y.ticktext().unwrap(), ["1", "-1"]);
}

#[test]
fn test_mixed_types_fail_fast() {
    let trials = vec![
        TrialRecord::builder(0).param("p", "a").value(0.0).build(),
        TrialRecord::builder(1).param("p", 1.0).value(0.0).build(),
    ];
    let err = AxisBuilder::new().build(&trials).unwrap_err();
    assert!(matches!(err, Error::TypeInconsistency { ref param } if param == "p"));
}

// =============================================================================
// Numeric axes and labels
// =============================================================================

#[test]
fn test_numeric_axis_unchanged() {
    let trials = vec![
        TrialRecord::builder(0).param("n", 4_i64).value(0.0).build(),
        TrialRecord::builder(1).param("n", -2_i64).value(0.0).build(),
        TrialRecord::builder(2).param("n", 7_i64).value(0.0).build(),
    ];
    let axes = AxisBuilder::new().build(&trials).unwrap();
    let n = &axes.params()[0];
    assert_eq!(n.values(), &[4.0, -2.0, 7.0]);
    assert_eq!(n.range(), (-2.0, 7.0));
    assert!(n.ticks().is_none());
}

#[test]
fn test_long_label_truncated() {
    let name = "this_is_a_very_long_parameter_name";
    let trials = vec![TrialRecord::builder(0).param(name, 1.0).value(0.0).build()];
    let axes = AxisBuilder::new().build(&trials).unwrap();
    assert_eq!(axes.params()[0].label(), "this_is_a_very_lo...");
}

// =============================================================================
// Targets
// =============================================================================

#[test]
fn test_custom_target() {
    let trials = vec![
        TrialRecord::builder(0).param("x", 1.0).values(vec![1.0, 10.0]).build(),
        TrialRecord::builder(1).param("x", 2.0).values(vec![2.0, 20.0]).build(),
    ];
    let target = Target::custom(|t| t.values().map_or(f64::NAN, |v| v[1]));
    let axes = AxisBuilder::new().target(target).target_name("latency").build(&trials).unwrap();
    let dim = axes.target().unwrap();
    assert_eq!(dim.label(), "latency");
    assert_eq!(dim.values(), &[10.0, 20.0]);
}

#[test]
fn test_objective_target_on_multi_objective_trial_fails() {
    let trials = vec![TrialRecord::builder(4).param("x", 1.0).values(vec![1.0, 2.0]).build()];
    let err = AxisBuilder::new().build(&trials).unwrap_err();
    assert!(matches!(err, Error::MissingObjectiveValue { number: 4 }));
}
