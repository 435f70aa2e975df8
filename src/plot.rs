//! Parallel-coordinate figure assembly
//!
//! Entry point for plotting a whole study: checks arguments, builds the
//! axes, logs diagnostics and attaches the styling hints a renderer needs.
//!
//! ```rust
//! use trueno_parcoords::plot::plot_parallel_coordinate;
//! use trueno_parcoords::study::{Study, StudyDirection, TrialRecord};
//!
//! let mut study = Study::new("demo", StudyDirection::Minimize);
//! study.add_trial(TrialRecord::builder(0).param("x", 1.0).value(2.0).build());
//! study.add_trial(TrialRecord::builder(1).param("x", 3.0).value(1.0).build());
//!
//! let figure = plot_parallel_coordinate(&study, None, None, "Objective Value")?;
//! let trace = figure.trace().unwrap();
//! assert_eq!(trace.dimensions.len(), 2);
//! assert!(trace.line.reversescale);
//! # Ok::<(), trueno_parcoords::Error>(())
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::axis::{AxisBuilder, AxisDescriptor, Target, TargetFn};
use crate::config::{LabelSide, PlotConfig, DEFAULT_TARGET_NAME};
use crate::diagnostic::Diagnostic;
use crate::study::{Study, StudyDirection};
use crate::{Error, Result};

/// Colorbar attached to the trial lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorBar {
    /// Colorbar title, the target name.
    pub title: String,
}

/// Line styling: each trial is colored by its target value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    /// Color value per trial, equal to the target axis values.
    pub color: Vec<f64>,
    /// Named colorscale.
    pub colorscale: String,
    /// Colorbar settings.
    pub colorbar: ColorBar,
    /// Whether the colorbar is shown.
    pub showscale: bool,
    /// Whether the colorscale runs from high to low.
    pub reversescale: bool,
}

/// A parallel-coordinates trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcoordsTrace {
    /// Axes, target first.
    pub dimensions: Vec<AxisDescriptor>,
    /// Axis label rotation in degrees.
    pub labelangle: i32,
    /// Side the axis labels are drawn on.
    pub labelside: LabelSide,
    /// Trial line styling.
    pub line: LineStyle,
}

/// Renderer-agnostic description of a parallel-coordinate chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallelCoordinateFigure {
    title: String,
    trace: Option<ParcoordsTrace>,
    diagnostics: Vec<Diagnostic>,
}

impl ParallelCoordinateFigure {
    /// Get the figure title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the trace, absent when the study has no completed trials.
    #[must_use]
    pub const fn trace(&self) -> Option<&ParcoordsTrace> {
        self.trace.as_ref()
    }

    /// Get the axes, empty when there is no trace.
    #[must_use]
    pub fn dimensions(&self) -> &[AxisDescriptor] {
        self.trace
            .as_ref()
            .map(|t| t.dimensions.as_slice())
            .unwrap_or_default()
    }

    /// Get the warnings raised while building the figure.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Plotly figure document (`data` + `layout`).
    #[must_use]
    pub fn to_plotly_value(&self) -> serde_json::Value {
        let data: Vec<serde_json::Value> = self
            .trace
            .iter()
            .map(|trace| {
                serde_json::json!({
                    "type": "parcoords",
                    "dimensions": trace.dimensions,
                    "labelangle": trace.labelangle,
                    "labelside": trace.labelside,
                    "line": trace.line,
                })
            })
            .collect();

        serde_json::json!({
            "data": data,
            "layout": { "title": { "text": self.title } },
        })
    }

    /// Serialize the plotly figure document to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if serialization fails.
    pub fn to_plotly_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_plotly_value())?)
    }
}

/// Validate plot arguments against the study.
///
/// # Errors
///
/// Returns `Error::TargetRequired` for a multi-objective study without a
/// custom target.
///
/// # Returns
///
/// `Some(Diagnostic::DefaultTargetName)` when a custom target keeps the
/// default axis name.
pub fn check_plot_args(
    study: &Study,
    has_custom_target: bool,
    target_name: &str,
) -> Result<Option<Diagnostic>> {
    if !has_custom_target && study.is_multi_objective() {
        return Err(Error::TargetRequired);
    }
    if has_custom_target && target_name == DEFAULT_TARGET_NAME {
        return Ok(Some(Diagnostic::DefaultTargetName));
    }
    Ok(None)
}

/// Plot the parameter relationships of a study with default styling.
///
/// Shorthand for [`ParallelCoordinatePlot`].
///
/// # Errors
///
/// See [`ParallelCoordinatePlot::build`].
pub fn plot_parallel_coordinate(
    study: &Study,
    params: Option<&[&str]>,
    target: Option<TargetFn>,
    target_name: &str,
) -> Result<ParallelCoordinateFigure> {
    let mut plot = ParallelCoordinatePlot::new(study).target_name(target_name);
    if let Some(params) = params {
        plot = plot.params(params.iter().copied());
    }
    if let Some(target) = target {
        plot = plot.target(Target::Custom(target));
    }
    plot.build()
}

/// Builder for a parallel-coordinate figure of one study.
#[derive(Debug, Clone)]
pub struct ParallelCoordinatePlot<'a> {
    study: &'a Study,
    params: Option<Vec<String>>,
    target: Target,
    target_name: String,
    config: PlotConfig,
}

impl<'a> ParallelCoordinatePlot<'a> {
    /// Plot every parameter of `study` against its objective value.
    #[must_use]
    pub fn new(study: &'a Study) -> Self {
        Self {
            study,
            params: None,
            target: Target::Objective,
            target_name: DEFAULT_TARGET_NAME.to_string(),
            config: PlotConfig::default(),
        }
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

    /// Set the target axis and colorbar name.
    #[must_use]
    pub fn target_name(mut self, name: impl Into<String>) -> Self {
        self.target_name = name.into();
        self
    }

    /// Replace the styling and classification settings.
    #[must_use]
    pub fn config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the figure.
    ///
    /// A study without completed trials gives a figure without a trace and
    /// logs a warning.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidConfig` for an invalid configuration
    /// - `Error::TargetRequired` for a multi-objective study without a
    ///   custom target
    /// - any error of [`AxisBuilder::build`]
    pub fn build(self) -> Result<ParallelCoordinateFigure> {
        self.config.validate()?;
        let custom = self.target.is_custom();
        let mut diagnostics: Vec<Diagnostic> =
            check_plot_args(self.study, custom, &self.target_name)?
                .into_iter()
                .collect();

        // Custom targets have no known direction and are always drawn reversed.
        let reversescale = custom || self.study.direction()? == StudyDirection::Minimize;

        let mut builder = AxisBuilder::with_config(&self.config)
            .target(self.target)
            .target_name(self.target_name.clone());
        if let Some(params) = self.params {
            builder = builder.params(params);
        }

        let (dimensions, axis_diagnostics) = builder.build(self.study.trials())?.into_parts();
        diagnostics.extend(axis_diagnostics);
        for diagnostic in &diagnostics {
            warn!(study = self.study.name(), "{diagnostic}");
        }
        debug!(
            study = self.study.name(),
            dimensions = dimensions.len(),
            reversescale,
            "built parallel coordinate figure"
        );

        let color = dimensions.first().map(|target| target.values().to_vec());
        let trace = color.map(|color| ParcoordsTrace {
            line: LineStyle {
                color,
                colorscale: self.config.colorscale,
                colorbar: ColorBar {
                    title: self.target_name,
                },
                showscale: true,
                reversescale,
            },
            labelangle: self.config.label_angle,
            labelside: self.config.label_side,
            dimensions,
        });

        Ok(ParallelCoordinateFigure {
            title: self.config.title,
            trace,
            diagnostics,
        })
    }
}
