//! Error types for trueno-parcoords
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// trueno-parcoords error types
#[derive(Error, Debug)]
pub enum Error {
    /// A requested parameter does not appear in any completed trial
    #[error("Parameter {0} does not exist in your study.")]
    UnknownParameter(String),

    /// A parameter mixes numeric and string values without categorical metadata
    #[error("Parameter {param} mixes numeric and string values\nDeclare a categorical distribution for it to plot the values as categories")]
    TypeInconsistency {
        /// Offending parameter name
        param: String,
    },

    /// A log-scaled parameter holds a value that has no logarithm
    #[error("Parameter {param} is log-scaled but holds the value {value}\nLog-scaled values must be positive numbers")]
    InvalidLogValue {
        /// Offending parameter name
        param: String,
        /// Display form of the offending value
        value: String,
    },

    /// A completed trial has no objective value to plot
    #[error("Trial {number} is complete but has no objective value\nSupply a custom target to plot this study")]
    MissingObjectiveValue {
        /// Trial number
        number: u64,
    },

    /// The study is multi-objective and no custom target was given
    #[error("If the `study` is being used for multi-objective optimization, please specify the `target`.")]
    TargetRequired,

    /// A single direction was requested from a multi-objective study
    #[error("Study has {0} objectives; a single direction is undefined")]
    MultiObjectiveDirection(usize),

    /// Invalid plot configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
