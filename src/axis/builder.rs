//! Axis builder - trial records to parallel-coordinate dimensions
//!
//! The target axis comes first, followed by one axis per parameter in
//! lexicographic order. Only `Complete` trials take part.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::descriptor::{truncate_label, value_range, AxisDescriptor};
use super::format::format_general;
use super::scale::AxisScale;
use super::vocabulary::CategoryVocabulary;
use crate::config::{PlotConfig, DEFAULT_TARGET_NAME};
use crate::diagnostic::Diagnostic;
use crate::study::{ParamValue, TrialRecord};
use crate::{Error, Result};

/// Significant digits of log-axis tick text.
const TICK_PRECISION: usize = 3;

/// Shared target-extraction function.
pub type TargetFn = Arc<dyn Fn(&TrialRecord) -> f64 + Send + Sync>;

/// Value plotted on the target axis.
#[derive(Clone, Default)]
pub enum Target {
    /// The trial's single objective value.
    #[default]
    Objective,
    /// A caller-supplied function of the trial.
    Custom(TargetFn),
}

impl Target {
    /// Wrap a closure as a custom target.
    #[must_use]
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&TrialRecord) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Whether a custom function was supplied.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    fn evaluate(&self, trial: &TrialRecord) -> Result<f64> {
        match self {
            Self::Objective => trial.value().ok_or(Error::MissingObjectiveValue {
                number: trial.number(),
            }),
            Self::Custom(f) => Ok(f(trial)),
        }
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Objective => f.write_str("Objective"),
            Self::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

/// Ordered axes plus the diagnostics gathered while building them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisSet {
    dimensions: Vec<AxisDescriptor>,
    diagnostics: Vec<Diagnostic>,
}

impl AxisSet {
    /// Get all axes, target axis first.
    #[must_use]
    pub fn dimensions(&self) -> &[AxisDescriptor] {
        &self.dimensions
    }

    /// Get the target axis, absent when there were no completed trials.
    #[must_use]
    pub fn target(&self) -> Option<&AxisDescriptor> {
        self.dimensions.first()
    }

    /// Get the parameter axes in name order.
    #[must_use]
    pub fn params(&self) -> &[AxisDescriptor] {
        self.dimensions.get(1..).unwrap_or_default()
    }

    /// Get the non-fatal conditions found while building.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of axes, including the target axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Whether there are no axes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Split into axes and diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (Vec<AxisDescriptor>, Vec<Diagnostic>) {
        (self.dimensions, self.diagnostics)
    }
}

/// Builds parallel-coordinate axes from trial records.
///
/// ## Example
///
/// ```rust
/// use trueno_parcoords::axis::AxisBuilder;
/// use trueno_parcoords::study::TrialRecord;
///
/// let trials = vec![
///     TrialRecord::builder(0).param("x", 1.0).param("y", "a").value(5.0).build(),
///     TrialRecord::builder(1).param("x", 10.0).param("y", "b").value(3.0).build(),
///     TrialRecord::builder(2).param("x", 100.0).param("y", "a").value(9.0).build(),
/// ];
///
/// let axes = AxisBuilder::new().build(&trials)?;
/// let x = &axes.dimensions()[1];
/// assert_eq!(x.values(), &[0.0, 1.0, 2.0]);
/// assert_eq!(x.ticktext().unwrap(), ["1", "10", "100"]);
/// # Ok::<(), trueno_parcoords::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AxisBuilder {
    params: Option<Vec<String>>,
    target: Target,
    target_name: String,
    log_scale_min_decades: f64,
}

impl Default for AxisBuilder {
    fn default() -> Self {
        Self {
            params: None,
            target: Target::Objective,
            target_name: DEFAULT_TARGET_NAME.to_string(),
            log_scale_min_decades: PlotConfig::default().log_scale_min_decades,
        }
    }
}

impl AxisBuilder {
    /// Create a builder plotting every parameter against the objective value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder using the classification settings of `config`.
    #[must_use]
    pub fn with_config(config: &PlotConfig) -> Self {
        Self::default().log_scale_min_decades(config.log_scale_min_decades)
    }

    /// Restrict the plot to the named parameters.
    #[must_use]
    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = Some(params.into_iter().map(Into::into).collect());
        self
    }

    /// Set the value plotted on the target axis.
    #[must_use]
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Set the target axis label.
    #[must_use]
    pub fn target_name(mut self, name: impl Into<String>) -> Self {
        self.target_name = name.into();
        self
    }

    /// Set the spread, in decades, that puts positive numbers on a log axis.
    #[must_use]
    pub const fn log_scale_min_decades(mut self, decades: f64) -> Self {
        self.log_scale_min_decades = decades;
        self
    }

    /// Build the axes for `trials`.
    ///
    /// Trials that are not `Complete` are ignored. Without completed trials
    /// the result is empty and carries `Diagnostic::NoCompletedTrials`.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownParameter` if a requested parameter appears in no
    ///   completed trial
    /// - `Error::TypeInconsistency` if a parameter mixes numbers and strings
    /// - `Error::InvalidLogValue` if a log-scaled parameter has a value
    ///   without a logarithm
    /// - `Error::MissingObjectiveValue` if the objective target meets a
    ///   trial without a single objective value
    pub fn build(&self, trials: &[TrialRecord]) -> Result<AxisSet> {
        let completed: Vec<&TrialRecord> = trials.iter().filter(|t| t.is_complete()).collect();
        if completed.is_empty() {
            return Ok(AxisSet {
                dimensions: Vec::new(),
                diagnostics: vec![Diagnostic::NoCompletedTrials],
            });
        }

        let selected = self.select_params(&completed)?;

        let target_values = completed
            .iter()
            .map(|t| self.target.evaluate(t))
            .collect::<Result<Vec<f64>>>()?;

        let mut dimensions = Vec::with_capacity(selected.len() + 1);
        let mut diagnostics = Vec::new();
        dimensions.push(AxisDescriptor::new(self.target_name.clone(), target_values));

        for name in selected {
            let values: Vec<&ParamValue> = completed.iter().filter_map(|t| t.param(name)).collect();
            let missing = completed.len() - values.len();
            if missing > 0 {
                diagnostics.push(Diagnostic::MissingValues {
                    param: name.to_string(),
                    missing,
                });
            }
            dimensions.push(self.param_axis(name, &completed, &values)?);
        }

        Ok(AxisSet {
            dimensions,
            diagnostics,
        })
    }

    fn select_params<'t>(&'t self, completed: &[&'t TrialRecord]) -> Result<BTreeSet<&'t str>> {
        let all: BTreeSet<&str> = completed
            .iter()
            .flat_map(|t| t.params().keys().map(String::as_str))
            .collect();

        let Some(requested) = &self.params else {
            return Ok(all);
        };
        requested
            .iter()
            .map(|name| {
                if all.contains(name.as_str()) {
                    Ok(name.as_str())
                } else {
                    Err(Error::UnknownParameter(name.clone()))
                }
            })
            .collect()
    }

    fn param_axis(
        &self,
        name: &str,
        completed: &[&TrialRecord],
        values: &[&ParamValue],
    ) -> Result<AxisDescriptor> {
        let label = truncate_label(name);
        match AxisScale::classify(name, completed, values, self.log_scale_min_decades)? {
            AxisScale::Log => log_axis(name, label, values),
            AxisScale::Categorical => Ok(categorical_axis(label, values)),
            AxisScale::Numeric => Ok(AxisDescriptor::new(
                label,
                values.iter().filter_map(|v| v.as_f64()).collect(),
            )),
        }
    }
}

fn log_axis(name: &str, label: String, values: &[&ParamValue]) -> Result<AxisDescriptor> {
    let logs = values
        .iter()
        .map(|v| match v.as_f64() {
            Some(x) if x > 0.0 && x.is_finite() => Ok(x.log10()),
            _ => Err(Error::InvalidLogValue {
                param: name.to_string(),
                value: v.to_string(),
            }),
        })
        .collect::<Result<Vec<f64>>>()?;

    let (min, max) = value_range(&logs);
    let ticks = log_tick_positions(min, max)
        .into_iter()
        .map(|t| (t, format_general(10f64.powf(t), TICK_PRECISION)));

    Ok(AxisDescriptor::new(label, logs).with_ticks(ticks))
}

/// Integer decades `ceil(min)..ceil(max)`, bracketed by `min` and `max`
/// themselves when they are not already integer positions.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn log_tick_positions(min: f64, max: f64) -> Vec<f64> {
    let mut ticks: Vec<f64> = (min.ceil() as i64..max.ceil() as i64)
        .map(|t| t as f64)
        .collect();
    if !ticks.contains(&min) {
        ticks.insert(0, min);
    }
    if !ticks.contains(&max) {
        ticks.push(max);
    }
    ticks
}

#[allow(clippy::cast_precision_loss)]
fn categorical_axis(label: String, values: &[&ParamValue]) -> AxisDescriptor {
    let mut vocab = CategoryVocabulary::new();
    let codes = values
        .iter()
        .map(|v| vocab.code_for(&v.label()) as f64)
        .collect();
    let ticks = vocab
        .into_labels()
        .into_iter()
        .enumerate()
        .map(|(code, text)| (code as f64, text));

    AxisDescriptor::new(label, codes).with_ticks(ticks)
}
