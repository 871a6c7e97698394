//! Cosmic/evolution correlator common types and errors.
//!
//! This crate provides foundational types shared across cev-core modules:
//! - Event records for both time-series domains
//! - Correlation and analysis result records
//! - Common error types with stable codes
//! - Date-range parsing with boundary defaults

pub mod error;
pub mod events;
pub mod range;

pub use error::{Error, ErrorCategory, EventSide, Result};
pub use events::{
    AnalysisResult, ClusterMap, CorrelationResult, CosmicEvent, CosmicEventKind,
    EvolutionaryEvent, EvolutionaryEventKind,
};
pub use range::DateRange;
