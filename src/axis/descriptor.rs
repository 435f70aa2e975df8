//! Axis descriptor - one renderable dimension of the chart

use serde::{Deserialize, Serialize};

/// Names at least this many characters long are truncated for display.
pub const LABEL_MAX_CHARS: usize = 20;

/// Characters of a truncated name that are kept before the ellipsis.
pub const LABEL_KEEP_CHARS: usize = 17;

const ELLIPSIS: &str = "...";

/// Shorten a parameter name for display on an axis.
///
/// ```rust
/// use trueno_parcoords::axis::truncate_label;
///
/// assert_eq!(truncate_label("learning_rate"), "learning_rate");
/// assert_eq!(truncate_label("this_is_a_very_long_parameter_name"), "this_is_a_very_lo...");
/// ```
#[must_use]
pub fn truncate_label(name: &str) -> String {
    if name.chars().count() < LABEL_MAX_CHARS {
        return name.to_string();
    }
    let mut label: String = name.chars().take(LABEL_KEEP_CHARS).collect();
    label.push_str(ELLIPSIS);
    label
}

/// Labeled reference positions of an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTicks {
    /// Tick positions in axis coordinates.
    pub tickvals: Vec<f64>,
    /// Display text, one entry per position.
    pub ticktext: Vec<String>,
}

/// One dimension of a parallel-coordinate chart.
///
/// Values are already in axis coordinates: log10 for log-scaled
/// parameters, category codes for categorical ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDescriptor {
    label: String,
    values: Vec<f64>,
    range: (f64, f64),
    #[serde(flatten, default)]
    ticks: Option<AxisTicks>,
}

impl AxisDescriptor {
    /// Create an axis whose range spans its values.
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        let range = value_range(&values);
        Self {
            label: label.into(),
            values,
            range,
            ticks: None,
        }
    }

    /// Attach ticks given as `(position, text)` pairs.
    #[must_use]
    pub fn with_ticks(mut self, ticks: impl IntoIterator<Item = (f64, String)>) -> Self {
        let (tickvals, ticktext) = ticks.into_iter().unzip();
        self.ticks = Some(AxisTicks { tickvals, ticktext });
        self
    }

    /// Get the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the scaled values, in trial order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the `(min, max)` range of the values.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Get the ticks, present for log-scaled and categorical axes.
    #[must_use]
    pub const fn ticks(&self) -> Option<&AxisTicks> {
        self.ticks.as_ref()
    }

    /// Get the tick positions, if any.
    #[must_use]
    pub fn tickvals(&self) -> Option<&[f64]> {
        self.ticks.as_ref().map(|t| t.tickvals.as_slice())
    }

    /// Get the tick display text, if any.
    #[must_use]
    pub fn ticktext(&self) -> Option<&[String]> {
        self.ticks.as_ref().map(|t| t.ticktext.as_slice())
    }
}

/// `(min, max)` of `values`, ignoring NaN. Empty input gives `(inf, -inf)`.
#[must_use]
pub fn value_range(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
