//! Analysis parameter loading and validation.
//!
//! This crate provides:
//! - Typed analysis parameters with the documented defaults
//! - TOML file loading
//! - Semantic validation with structured errors

pub mod params;
pub mod validate;

pub use params::{AnalysisParams, ProcessParams};
pub use validate::{validate, ValidationError, ValidationResult};
