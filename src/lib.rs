//! # trueno-parcoords: Parallel-Coordinate Axes for Optimization Studies
//!
//! Turns the trials of a hyperparameter optimization study into the axes of
//! a parallel-coordinates chart: one axis for the target value, then one per
//! parameter, each scaled and labeled for its value domain.
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Jidoka**: Mixed-type parameters stop the line (`TypeInconsistency`)
//!   instead of being silently misclassified
//! - **Poka-Yoke**: Axis classification is one explicit `AxisScale` decision
//!   per parameter
//! - **Heijunka**: Axis construction is a pure function; warnings come back
//!   as values and are logged by the caller layer
//!
//! ## Example Usage
//!
//! ```rust
//! use trueno_parcoords::plot::ParallelCoordinatePlot;
//! use trueno_parcoords::study::{Study, StudyDirection, TrialRecord};
//!
//! let mut study = Study::new("example", StudyDirection::Minimize);
//! study.add_trial(TrialRecord::builder(0).param("x", 1.0).param("y", "a").value(5.0).build());
//! study.add_trial(TrialRecord::builder(1).param("x", 10.0).param("y", "b").value(3.0).build());
//! study.add_trial(TrialRecord::builder(2).param("x", 100.0).param("y", "a").value(9.0).build());
//!
//! let figure = ParallelCoordinatePlot::new(&study).build()?;
//! let labels: Vec<&str> = figure.dimensions().iter().map(|d| d.label()).collect();
//! assert_eq!(labels, ["Objective Value", "x", "y"]);
//! # Ok::<(), trueno_parcoords::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod axis;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod plot;
pub mod study;
pub mod telemetry;

pub use axis::{AxisBuilder, AxisDescriptor, AxisScale, AxisSet, Target};
pub use config::PlotConfig;
pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use plot::{plot_parallel_coordinate, ParallelCoordinateFigure, ParallelCoordinatePlot};
pub use study::{Study, StudyDirection, TrialRecord, TrialState};
