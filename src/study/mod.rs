//! Study Schema
//!
//! Data structures for the trials of a hyperparameter optimization study,
//! the input side of parallel-coordinate axis construction.
//!
//! ## Schema Overview
//!
//! ```text
//! Study (1) ──< TrialRecord (N)
//!                  │
//!                  ├── params:        name -> ParamValue
//!                  └── distributions: name -> Distribution (optional)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use trueno_parcoords::study::{Study, StudyDirection, TrialRecord};
//!
//! let mut study = Study::new("lr-sweep", StudyDirection::Minimize);
//!
//! let mut trial = TrialRecord::new(0);
//! trial.set_param("lr", 0.01);
//! trial.set_param("optimizer", "adam");
//! trial.complete(vec![0.42]);
//!
//! study.add_trial(trial);
//! assert_eq!(study.completed_trials().len(), 1);
//! ```

mod param;
mod store;
mod trial_record;

pub use param::{Distribution, ParamValue};
pub use store::{Study, StudyBuilder, StudyDirection};
pub use trial_record::{TrialRecord, TrialRecordBuilder, TrialState};
