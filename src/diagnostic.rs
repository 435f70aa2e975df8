//! Non-fatal conditions reported alongside results
//!
//! Axis construction is pure and never logs; it hands these back to the
//! caller, which decides whether to emit them as warnings.

use std::fmt;

use serde::Serialize;

/// A condition worth telling the user about that does not stop plotting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// No trial reached the `Complete` state; the chart is empty.
    NoCompletedTrials,
    /// Some completed trials did not record a parameter.
    MissingValues {
        /// Parameter name.
        param: String,
        /// Number of completed trials without a value.
        missing: usize,
    },
    /// A custom target was given but the target axis keeps the default name.
    DefaultTargetName,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCompletedTrials => f.write_str("Your study does not have any completed trials."),
            Self::MissingValues { param, missing } => write!(
                f,
                "Parameter {param} is missing in {missing} completed trial(s); those trials are not drawn on its axis."
            ),
            Self::DefaultTargetName => f.write_str(
                "`target` is specified, but `target_name` is the default value, Objective Value.",
            ),
        }
    }
}
