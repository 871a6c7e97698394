//! Analysis parameter types.
//!
//! Defaults match the documented detection and correlation behavior:
//! peak threshold 1.5, weakness percentile 10, lags every 30 days up to
//! 365, 30-day cluster window, alpha 0.05, and the synthetic archive
//! spanning 1900-01-01 to 2100-01-01 with seed 42.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::validate::{ValidationError, ValidationResult};

/// Parameters for one synthetic evolutionary point process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessParams {
    /// Bernoulli probability of an event in any given month.
    pub monthly_probability: f64,
    /// Uniform magnitude range, inclusive lower bound.
    pub magnitude_min: f64,
    /// Uniform magnitude range, exclusive upper bound.
    pub magnitude_max: f64,
    /// Maximum number of affected taxa (minimum is 1).
    pub max_taxa: u32,
}

/// Complete parameter set for a correlation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// FTRT value a local maximum must exceed to count as a peak.
    pub peak_threshold: f64,
    /// Percentile of in-range intensity below which the field is weak.
    pub weakness_percentile: f64,
    /// Largest forward shift evaluated, in days.
    pub max_lag_days: i64,
    /// Spacing between evaluated lags, in days.
    pub lag_step_days: i64,
    /// Temporal proximity threshold for clustering, in days.
    pub cluster_window_days: i64,
    /// Significance cutoff for p-values.
    pub significance_alpha: f64,
    /// Speciation point process.
    pub speciation: ProcessParams,
    /// Extinction point process.
    pub extinction: ProcessParams,
    /// First month of the precomputed synthetic archive.
    pub archive_start: NaiveDate,
    /// Last month of the precomputed synthetic archive.
    pub archive_end: NaiveDate,
    /// Seed for every provider's random generator.
    pub seed: u64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        AnalysisParams {
            peak_threshold: 1.5,
            weakness_percentile: 10.0,
            max_lag_days: 365,
            lag_step_days: 30,
            cluster_window_days: 30,
            significance_alpha: 0.05,
            speciation: ProcessParams {
                monthly_probability: 0.10,
                magnitude_min: 1.0,
                magnitude_max: 10.0,
                max_taxa: 5,
            },
            extinction: ProcessParams {
                monthly_probability: 0.05,
                magnitude_min: 1.0,
                magnitude_max: 8.0,
                max_taxa: 3,
            },
            archive_start: NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid constant date"),
            archive_end: NaiveDate::from_ymd_opt(2100, 1, 1).expect("valid constant date"),
            seed: 42,
        }
    }
}

impl AnalysisParams {
    /// Load parameters from a TOML file, falling back to defaults for
    /// omitted fields, then validate.
    pub fn load(path: &Path) -> ValidationResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ValidationError::IoError(format!("{}: {}", path.display(), e)))?;
        let params: AnalysisParams =
            toml::from_str(&text).map_err(|e| ValidationError::ParseError(e.to_string()))?;
        crate::validate::validate(&params)?;
        Ok(params)
    }

    /// Validated defaults with an overridden seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = AnalysisParams::default();
        crate::validate::validate(&params).unwrap();
        assert_eq!(params.peak_threshold, 1.5);
        assert_eq!(params.speciation.monthly_probability, 0.10);
        assert_eq!(params.extinction.max_taxa, 3);
        assert_eq!(params.seed, 42);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let params: AnalysisParams = toml::from_str(
            r#"
            peak_threshold = 2.0
            seed = 7

            [speciation]
            monthly_probability = 0.2
            magnitude_min = 1.0
            magnitude_max = 10.0
            max_taxa = 5
            "#,
        )
        .unwrap();
        assert_eq!(params.peak_threshold, 2.0);
        assert_eq!(params.seed, 7);
        assert_eq!(params.speciation.monthly_probability, 0.2);
        // untouched fields keep their defaults
        assert_eq!(params.max_lag_days, 365);
        assert_eq!(params.extinction.monthly_probability, 0.05);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = AnalysisParams::load(Path::new("/nonexistent/params.toml")).unwrap_err();
        assert!(matches!(err, ValidationError::IoError(_)));
    }

    #[test]
    fn load_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        let params = AnalysisParams::default().with_seed(99);
        std::fs::write(&path, toml::to_string(&params).unwrap()).unwrap();
        let loaded = AnalysisParams::load(&path).unwrap();
        assert_eq!(loaded, params);
    }
}
