//! Trial Record - one evaluated configuration of a study

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Distribution, ParamValue};

/// Lifecycle state of a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrialState {
    /// Trial is currently being evaluated.
    Running,
    /// Trial is enqueued but not yet started.
    Waiting,
    /// Trial finished and reported its objective value(s).
    Complete,
    /// Trial was stopped early by a pruner.
    Pruned,
    /// Trial failed with an error.
    Fail,
}

impl TrialState {
    /// Whether the trial has reached a terminal state.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Complete | Self::Pruned | Self::Fail)
    }
}

/// Trial Record represents a single evaluated configuration.
///
/// Parameters are keyed by name; a trial may lack parameters that other
/// trials of the same study have (conditional search spaces).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrialRecord {
    number: u64,
    state: TrialState,
    #[serde(default)]
    params: BTreeMap<String, ParamValue>,
    #[serde(default)]
    distributions: BTreeMap<String, Distribution>,
    #[serde(default)]
    values: Option<Vec<f64>>,
    #[serde(default)]
    datetime_start: Option<DateTime<Utc>>,
    #[serde(default)]
    datetime_complete: Option<DateTime<Utc>>,
}

impl TrialRecord {
    /// Create a new running trial with no parameters.
    #[must_use]
    pub fn new(number: u64) -> Self {
        Self {
            number,
            state: TrialState::Running,
            params: BTreeMap::new(),
            distributions: BTreeMap::new(),
            values: None,
            datetime_start: Some(Utc::now()),
            datetime_complete: None,
        }
    }

    /// Create a builder for constructing a trial record.
    #[must_use]
    pub fn builder(number: u64) -> TrialRecordBuilder {
        TrialRecordBuilder::new(number)
    }

    /// Get the trial number.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Get the trial state.
    #[must_use]
    pub const fn state(&self) -> TrialState {
        self.state
    }

    /// Whether the trial completed successfully.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == TrialState::Complete
    }

    /// Get all recorded parameters.
    #[must_use]
    pub const fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }

    /// Get a single parameter value, if the trial recorded it.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// Get the distribution a parameter was sampled from, if known.
    #[must_use]
    pub fn distribution(&self, name: &str) -> Option<&Distribution> {
        self.distributions.get(name)
    }

    /// Get all objective values.
    #[must_use]
    pub fn values(&self) -> Option<&[f64]> {
        self.values.as_deref()
    }

    /// Get the objective value of a single-objective trial.
    ///
    /// Returns `None` when the trial has no values or reports more than one.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self.values.as_deref() {
            Some([value]) => Some(*value),
            _ => None,
        }
    }

    /// Get the start timestamp, if known.
    #[must_use]
    pub const fn datetime_start(&self) -> Option<DateTime<Utc>> {
        self.datetime_start
    }

    /// Get the completion timestamp, if the trial finished.
    #[must_use]
    pub const fn datetime_complete(&self) -> Option<DateTime<Utc>> {
        self.datetime_complete
    }

    /// Record a parameter sampled during evaluation.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.insert(name.into(), value.into());
    }

    /// Complete the trial with its objective value(s).
    ///
    /// Sets the `datetime_complete` timestamp to now.
    pub fn complete(&mut self, values: Vec<f64>) {
        self.state = TrialState::Complete;
        self.values = Some(values);
        self.datetime_complete = Some(Utc::now());
    }

    /// Finish the trial without a value (`Pruned` or `Fail`).
    pub fn finish(&mut self, state: TrialState) {
        self.state = state;
        self.datetime_complete = Some(Utc::now());
    }
}

/// Builder for `TrialRecord`.
#[derive(Debug)]
pub struct TrialRecordBuilder {
    number: u64,
    state: TrialState,
    params: BTreeMap<String, ParamValue>,
    distributions: BTreeMap<String, Distribution>,
    values: Option<Vec<f64>>,
}

impl TrialRecordBuilder {
    /// Create a new builder for a completed trial.
    #[must_use]
    pub const fn new(number: u64) -> Self {
        Self {
            number,
            state: TrialState::Complete,
            params: BTreeMap::new(),
            distributions: BTreeMap::new(),
            values: None,
        }
    }

    /// Set the trial state (defaults to `Complete`).
    #[must_use]
    pub const fn state(mut self, state: TrialState) -> Self {
        self.state = state;
        self
    }

    /// Record a parameter value.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Record a parameter value together with its distribution.
    #[must_use]
    pub fn param_with_distribution(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
        distribution: Distribution,
    ) -> Self {
        let name = name.into();
        self.distributions.insert(name.clone(), distribution);
        self.params.insert(name, value.into());
        self
    }

    /// Set a single objective value.
    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.values = Some(vec![value]);
        self
    }

    /// Set multiple objective values.
    #[must_use]
    pub fn values(mut self, values: Vec<f64>) -> Self {
        self.values = Some(values);
        self
    }

    /// Build the `TrialRecord`.
    #[must_use]
    pub fn build(self) -> TrialRecord {
        let started_at = Utc::now();
        TrialRecord {
            number: self.number,
            state: self.state,
            params: self.params,
            distributions: self.distributions,
            values: self.values,
            datetime_start: Some(started_at),
            datetime_complete: self.state.is_finished().then_some(started_at),
        }
    }
}
