//! Axis scale classification
//!
//! Each parameter is classified once, before any value is transformed.
//! Distribution metadata wins over the observed values; without it the
//! values decide.

use crate::study::{ParamValue, TrialRecord};
use crate::{Error, Result};

/// How a parameter's values are mapped onto its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    /// log10 of positive numbers, with power-of-ten ticks.
    Log,
    /// Dense integer codes, with one tick per category.
    Categorical,
    /// Numbers as recorded.
    Numeric,
}

impl AxisScale {
    /// Classify parameter `param` from the trials that recorded `values`.
    ///
    /// Checked in order:
    /// 1. log: a trial declares a log distribution, or every value is a
    ///    positive number and `max / min >= 10^min_decades`;
    /// 2. categorical: a trial declares a categorical distribution, or
    ///    every value is a string;
    /// 3. numeric otherwise.
    ///
    /// # Errors
    ///
    /// Returns `Error::TypeInconsistency` when strings and numbers are mixed
    /// and no categorical distribution is declared.
    pub fn classify(
        param: &str,
        trials: &[&TrialRecord],
        values: &[&ParamValue],
        min_decades: f64,
    ) -> Result<Self> {
        let (mut declared_log, mut declared_categorical) = (false, false);
        for distribution in trials.iter().filter_map(|t| t.distribution(param)) {
            declared_log |= distribution.is_log();
            declared_categorical |= distribution.is_categorical();
        }

        if declared_log {
            return Ok(Self::Log);
        }
        if declared_categorical {
            return Ok(Self::Categorical);
        }

        if values.iter().all(|v| !v.is_numeric()) {
            return Ok(Self::Categorical);
        }
        if !values.iter().all(|v| v.is_numeric()) {
            return Err(Error::TypeInconsistency {
                param: param.to_string(),
            });
        }

        let numeric: Vec<f64> = values.iter().filter_map(|v| v.as_f64()).collect();
        if spans_decades(&numeric, min_decades) {
            Ok(Self::Log)
        } else {
            Ok(Self::Numeric)
        }
    }
}

/// All values positive and `max / min` at least `10^min_decades`.
fn spans_decades(values: &[f64], min_decades: f64) -> bool {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if !v.is_finite() || v <= 0.0 {
            return false;
        }
        min = min.min(v);
        max = max.max(v);
    }
    max / min >= 10f64.powf(min_decades)
}
