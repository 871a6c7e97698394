//! Semantic validation for analysis parameters.

use thiserror::Error;

use crate::params::{AnalysisParams, ProcessParams};

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parameter validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::InvalidValue { .. } => 62,
        }
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a parameter set semantically.
pub fn validate(params: &AnalysisParams) -> ValidationResult<()> {
    if !params.peak_threshold.is_finite() {
        return Err(invalid("peak_threshold", "must be finite"));
    }
    if !(0.0..100.0).contains(&params.weakness_percentile) || params.weakness_percentile <= 0.0 {
        return Err(invalid(
            "weakness_percentile",
            format!("must be in (0, 100), got {}", params.weakness_percentile),
        ));
    }
    if params.max_lag_days < 0 {
        return Err(invalid(
            "max_lag_days",
            format!("must be non-negative, got {}", params.max_lag_days),
        ));
    }
    if params.lag_step_days <= 0 {
        return Err(invalid(
            "lag_step_days",
            format!("must be positive, got {}", params.lag_step_days),
        ));
    }
    if params.cluster_window_days <= 0 {
        return Err(invalid(
            "cluster_window_days",
            format!("must be positive, got {}", params.cluster_window_days),
        ));
    }
    if !(0.0..=1.0).contains(&params.significance_alpha) {
        return Err(invalid(
            "significance_alpha",
            format!("must be in [0, 1], got {}", params.significance_alpha),
        ));
    }
    if params.archive_end <= params.archive_start {
        return Err(invalid(
            "archive_end",
            format!(
                "archive window is inverted: {} .. {}",
                params.archive_start, params.archive_end
            ),
        ));
    }
    validate_process("speciation", &params.speciation)?;
    validate_process("extinction", &params.extinction)?;
    Ok(())
}

fn validate_process(name: &str, process: &ProcessParams) -> ValidationResult<()> {
    if !(0.0..=1.0).contains(&process.monthly_probability) {
        return Err(invalid(
            &format!("{}.monthly_probability", name),
            format!("must be in [0, 1], got {}", process.monthly_probability),
        ));
    }
    if process.magnitude_min >= process.magnitude_max {
        return Err(invalid(
            &format!("{}.magnitude_min", name),
            format!(
                "magnitude range is inverted: [{}, {})",
                process.magnitude_min, process.magnitude_max
            ),
        ));
    }
    if process.max_taxa == 0 {
        return Err(invalid(
            &format!("{}.max_taxa", name),
            "events must affect at least one taxon",
        ));
    }
    Ok(())
}
