//! Event and result records for both time-series domains.
//!
//! All records serialize directly to the JSON interchange shape consumed
//! by the CLI and any HTTP layer: ISO-8601 dates, plain numeric fields,
//! snake_case enum tags. Events are immutable once constructed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cluster id to day-offset mapping produced by temporal clustering.
///
/// Offsets are days since the earliest timestamp in the clustered list;
/// the mapping back to original events is intentionally not carried.
pub type ClusterMap = BTreeMap<usize, Vec<i64>>;

/// Kinds of cosmic forcing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CosmicEventKind {
    PlanetaryAlignment,
    GeomagneticWeakness,
    SolarStorm,
    CosmicRayFlux,
}

impl std::fmt::Display for CosmicEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CosmicEventKind::PlanetaryAlignment => write!(f, "planetary_alignment"),
            CosmicEventKind::GeomagneticWeakness => write!(f, "geomagnetic_weakness"),
            CosmicEventKind::SolarStorm => write!(f, "solar_storm"),
            CosmicEventKind::CosmicRayFlux => write!(f, "cosmic_ray_flux"),
        }
    }
}

impl std::str::FromStr for CosmicEventKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planetary_alignment" => Ok(CosmicEventKind::PlanetaryAlignment),
            "geomagnetic_weakness" => Ok(CosmicEventKind::GeomagneticWeakness),
            "solar_storm" => Ok(CosmicEventKind::SolarStorm),
            "cosmic_ray_flux" => Ok(CosmicEventKind::CosmicRayFlux),
            _ => Err(format!("unknown cosmic event kind: {}", s)),
        }
    }
}

/// Kinds of evolutionary events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionaryEventKind {
    Speciation,
    Extinction,
}

impl std::fmt::Display for EvolutionaryEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvolutionaryEventKind::Speciation => write!(f, "speciation"),
            EvolutionaryEventKind::Extinction => write!(f, "extinction"),
        }
    }
}

impl std::str::FromStr for EvolutionaryEventKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "speciation" => Ok(EvolutionaryEventKind::Speciation),
            "extinction" => Ok(EvolutionaryEventKind::Extinction),
            _ => Err(format!("unknown evolutionary event kind: {}", s)),
        }
    }
}

/// A dated cosmic forcing event (alignment peak, field weakness, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmicEvent {
    pub timestamp: NaiveDate,
    #[serde(rename = "type")]
    pub kind: CosmicEventKind,
    pub magnitude: f64,
    pub duration_days: i64,
    pub description: String,
}

/// A dated evolutionary event (speciation or extinction episode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionaryEvent {
    pub timestamp: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EvolutionaryEventKind,
    pub magnitude: f64,
    /// Identifiers of the affected taxa; never empty.
    pub affected_taxa: Vec<String>,
    pub description: String,
}

/// Result of correlating the two series at one time-lag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Pearson coefficient over the aligned windows, in [-1, 1].
    pub correlation_coefficient: f64,
    /// Two-sided p-value, in [0, 1].
    pub p_value: f64,
    /// Forward shift applied to the cosmic series, multiple of the lag step.
    pub time_lag_days: i64,
    /// 95% interval via Fisher z; exactly (0, 0) when the aligned sample
    /// count is 3 or fewer.
    pub confidence_interval: (f64, f64),
    /// Whether p_value fell below the significance threshold.
    pub significant: bool,
}

/// Complete output of one correlation run.
///
/// Built fresh per request; nothing here is shared across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub cosmic_events: Vec<CosmicEvent>,
    pub evolutionary_events: Vec<EvolutionaryEvent>,
    pub correlation_results: Vec<CorrelationResult>,
    pub best_correlation: Option<CorrelationResult>,
    pub cosmic_clusters: ClusterMap,
    pub evolutionary_clusters: ClusterMap,
}
