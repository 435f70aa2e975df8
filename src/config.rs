//! Plot configuration
//!
//! Every field has a default, so a config file only needs to name the
//! settings it changes:
//!
//! ```rust
//! use trueno_parcoords::config::PlotConfig;
//!
//! let config = PlotConfig::from_json_str(r#"{ "colorscale": "viridis" }"#)?;
//! assert_eq!(config.colorscale, "viridis");
//! assert_eq!(config.title, "Parallel Coordinate Plot");
//! # Ok::<(), trueno_parcoords::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default figure title
pub const DEFAULT_TITLE: &str = "Parallel Coordinate Plot";

/// Default target axis label
pub const DEFAULT_TARGET_NAME: &str = "Objective Value";

/// Side of the axis the labels are drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSide {
    /// Above the axes.
    Top,
    /// Below the axes.
    #[default]
    Bottom,
}

/// Styling and classification settings for a parallel-coordinate figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Figure title.
    pub title: String,
    /// Named colorscale for the trial lines.
    pub colorscale: String,
    /// Axis label rotation in degrees.
    pub label_angle: i32,
    /// Side the axis labels are drawn on.
    pub label_side: LabelSide,
    /// Minimum spread, in decades, for positive numeric values without
    /// distribution metadata to get a log axis.
    pub log_scale_min_decades: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            colorscale: "blues".to_string(),
            label_angle: 30,
            label_side: LabelSide::Bottom,
            log_scale_min_decades: 2.0,
        }
    }
}

impl PlotConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` for malformed documents and
    /// `Error::InvalidConfig` for out-of-range settings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the figure title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the colorscale name.
    #[must_use]
    pub fn with_colorscale(mut self, colorscale: impl Into<String>) -> Self {
        self.colorscale = colorscale.into();
        self
    }

    /// Set the axis label rotation.
    #[must_use]
    pub const fn with_label_angle(mut self, degrees: i32) -> Self {
        self.label_angle = degrees;
        self
    }

    /// Set the side the axis labels are drawn on.
    #[must_use]
    pub const fn with_label_side(mut self, side: LabelSide) -> Self {
        self.label_side = side;
        self
    }

    /// Set the log-axis spread threshold in decades.
    #[must_use]
    pub const fn with_log_scale_min_decades(mut self, decades: f64) -> Self {
        self.log_scale_min_decades = decades;
        self
    }

    /// Check settings that would make axis construction meaningless.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the decade threshold is negative,
    /// NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if !self.log_scale_min_decades.is_finite() || self.log_scale_min_decades < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "log_scale_min_decades must be a finite, non-negative number (got {})",
                self.log_scale_min_decades
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlotConfig::new();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.colorscale, "blues");
        assert_eq!(config.label_angle, 30);
        assert_eq!(config.label_side, LabelSide::Bottom);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config =
            PlotConfig::from_json_str(r#"{"label_side": "top", "log_scale_min_decades": 3}"#)
                .unwrap();
        assert_eq!(config.label_side, LabelSide::Top);
        assert!((config.log_scale_min_decades - 3.0).abs() < f64::EPSILON);
        assert_eq!(config.label_angle, 30);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = PlotConfig::from_json_str(r#"{"log_scale_min_decades": -1.0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = PlotConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
