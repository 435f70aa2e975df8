//! Parameter values and distribution metadata

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw value a trial recorded for one parameter.
///
/// Deserializes untagged: JSON integers become `Int`, other numbers
/// `Float`, strings `Categorical`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Integer-valued parameter.
    Int(i64),
    /// Float-valued parameter.
    Float(f64),
    /// String-valued (categorical) parameter.
    Categorical(String),
}

impl ParamValue {
    /// Numeric view of the value, `None` for strings.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Categorical(_) => None,
        }
    }

    /// Category label of the value: the string itself, or the number's
    /// display form.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Self::Categorical(v) => Cow::Borrowed(v),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Whether the value is a number.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Self::Categorical(_))
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Categorical(v) => f.write_str(v),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Categorical(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Categorical(value)
    }
}

/// Search-space distribution a parameter was sampled from.
///
/// Optional metadata: when present it overrides value-based
/// classification of the parameter's axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Distribution {
    /// Continuous range.
    Float {
        /// Lower bound (inclusive).
        low: f64,
        /// Upper bound (inclusive).
        high: f64,
        /// Sampled in log domain.
        #[serde(default)]
        log: bool,
        /// Discretization step, if any.
        #[serde(default)]
        step: Option<f64>,
    },
    /// Integer range.
    Int {
        /// Lower bound (inclusive).
        low: i64,
        /// Upper bound (inclusive).
        high: i64,
        /// Sampled in log domain.
        #[serde(default)]
        log: bool,
        /// Discretization step.
        #[serde(default = "default_int_step")]
        step: i64,
    },
    /// Finite set of choices.
    Categorical {
        /// Allowed choices.
        choices: Vec<ParamValue>,
    },
}

const fn default_int_step() -> i64 {
    1
}

impl Distribution {
    /// Whether the distribution samples in log domain.
    #[must_use]
    pub const fn is_log(&self) -> bool {
        match self {
            Self::Float { log, .. } | Self::Int { log, .. } => *log,
            Self::Categorical { .. } => false,
        }
    }

    /// Whether the distribution is categorical.
    #[must_use]
    pub const fn is_categorical(&self) -> bool {
        matches!(self, Self::Categorical { .. })
    }
}
