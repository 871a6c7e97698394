//! Cosmic/Evolution Correlation Engine
//!
//! This library correlates two independent time-series domains:
//! astronomical forcing signals (a planetary tidal-force proxy and a
//! geomagnetic intensity series) and biological event records
//! (speciation/extinction episodes). It provides:
//! - Synthetic data providers behind capability traits
//! - Peak and threshold-interval detection
//! - Lagged cross-correlation with Fisher-z confidence intervals
//! - Greedy temporal clustering
//! - An orchestrator assembling one analysis result per request
//!
//! The binary entry point is in `main.rs`.

pub mod analyzer;
pub mod cluster;
pub mod correlate;
pub mod detect;
pub mod exit_codes;
pub mod logging;
pub mod providers;
