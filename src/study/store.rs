//! Study - in-memory trial storage for one optimization study
//!
//! Trials are kept in insertion order, which is the order axis values
//! are laid out in.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::TrialRecord;
use crate::{Error, Result};

/// Optimization direction of one objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyDirection {
    /// Lower objective values are better.
    #[default]
    Minimize,
    /// Higher objective values are better.
    Maximize,
}

/// In-memory store for the trials of one study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Study {
    name: String,
    directions: Vec<StudyDirection>,
    #[serde(default)]
    trials: Vec<TrialRecord>,
}

impl Study {
    /// Create a new single-objective study.
    #[must_use]
    pub fn new(name: impl Into<String>, direction: StudyDirection) -> Self {
        Self {
            name: name.into(),
            directions: vec![direction],
            trials: Vec::new(),
        }
    }

    /// Create a builder for a study with one or more objectives.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> StudyBuilder {
        StudyBuilder::new(name)
    }

    /// Load a study from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the document is not a valid study.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the study name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the optimization direction of every objective.
    #[must_use]
    pub fn directions(&self) -> &[StudyDirection] {
        &self.directions
    }

    /// Whether the study optimizes more than one objective.
    #[must_use]
    pub fn is_multi_objective(&self) -> bool {
        self.directions.len() > 1
    }

    /// Get the direction of a single-objective study.
    ///
    /// # Errors
    ///
    /// Returns `Error::MultiObjectiveDirection` for multi-objective studies.
    pub fn direction(&self) -> Result<StudyDirection> {
        match self.directions.as_slice() {
            [direction] => Ok(*direction),
            other => Err(Error::MultiObjectiveDirection(other.len())),
        }
    }

    /// Add a trial to the study.
    pub fn add_trial(&mut self, trial: TrialRecord) {
        self.trials.push(trial);
    }

    /// Get all trials in insertion order.
    #[must_use]
    pub fn trials(&self) -> &[TrialRecord] {
        &self.trials
    }

    /// Get the number of trials in the study.
    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    /// Get the completed trials in insertion order.
    #[must_use]
    pub fn completed_trials(&self) -> Vec<&TrialRecord> {
        self.trials.iter().filter(|t| t.is_complete()).collect()
    }

    /// Get the names of all parameters recorded by completed trials, sorted.
    #[must_use]
    pub fn param_names(&self) -> BTreeSet<&str> {
        self.trials
            .iter()
            .filter(|t| t.is_complete())
            .flat_map(|t| t.params().keys().map(String::as_str))
            .collect()
    }
}

/// Builder for `Study`.
#[derive(Debug)]
pub struct StudyBuilder {
    name: String,
    directions: Vec<StudyDirection>,
}

impl StudyBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directions: Vec::new(),
        }
    }

    /// Add an objective with the given direction.
    #[must_use]
    pub fn direction(mut self, direction: StudyDirection) -> Self {
        self.directions.push(direction);
        self
    }

    /// Build the `Study`. Defaults to a single minimized objective.
    #[must_use]
    pub fn build(self) -> Study {
        let directions = if self.directions.is_empty() {
            vec![StudyDirection::default()]
        } else {
            self.directions
        };
        Study {
            name: self.name,
            directions,
            trials: Vec::new(),
        }
    }
}
