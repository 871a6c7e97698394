//! Orchestrates providers, detection, correlation, and clustering.

use crate::cluster::cluster_timestamps;
use crate::correlate::{best_correlation, cross_correlation};
use crate::detect::{find_peaks, find_weak_intervals};
use crate::providers::{
    DivergenceClock, EventProvider, FossilRecord, GeomagneticArchive, SeriesProvider,
    TidalForceModel,
};
use cev_common::{
    AnalysisResult, CosmicEvent, DateRange, EvolutionaryEvent, EvolutionaryEventKind, Result,
};
use cev_config::AnalysisParams;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Which cosmic source to draw events from.
///
/// Parsed permissively: unrecognized selector strings mean "both sources"
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CosmicSource {
    Ftrt,
    Geomagnetic,
}

impl CosmicSource {
    /// Permissive parse; `None` requests both sources.
    pub fn parse(selector: Option<&str>) -> Option<CosmicSource> {
        match selector.map(str::to_lowercase).as_deref() {
            Some("ftrt") | Some("tidal") => Some(CosmicSource::Ftrt),
            Some("geomagnetic") | Some("geomag") => Some(CosmicSource::Geomagnetic),
            _ => None,
        }
    }
}

/// Parse an evolutionary kind selector; unrecognized strings mean "all".
pub fn parse_kind(selector: Option<&str>) -> Option<EvolutionaryEventKind> {
    selector.and_then(|s| s.parse().ok())
}

/// The correlation engine context.
///
/// Owns the data providers and parameters. Construct one explicitly and
/// pass it where needed; everything is read-only after construction, so
/// sharing across threads needs no locking.
pub struct Analyzer {
    ftrt: Box<dyn SeriesProvider + Send + Sync>,
    geomagnetic: Box<dyn SeriesProvider + Send + Sync>,
    fossils: Box<dyn EventProvider + Send + Sync>,
    divergence: DivergenceClock,
    params: AnalysisParams,
}

impl Analyzer {
    /// Build an analyzer with the synthetic providers, all seeded from
    /// `params.seed`.
    pub fn new(params: AnalysisParams) -> Self {
        let geomagnetic = GeomagneticArchive::new(
            params.archive_start,
            params.archive_end,
            params.seed,
        );
        let fossils = FossilRecord::new(
            params.archive_start,
            params.archive_end,
            &params.speciation,
            &params.extinction,
            params.seed,
        );
        let divergence = DivergenceClock::new(params.seed);
        info!(seed = params.seed, "analyzer initialized");
        Analyzer {
            ftrt: Box::new(TidalForceModel::new()),
            geomagnetic: Box::new(geomagnetic),
            fossils: Box::new(fossils),
            divergence,
            params,
        }
    }

    /// Build an analyzer over substituted providers (real data sources or
    /// test doubles).
    pub fn with_providers(
        params: AnalysisParams,
        ftrt: Box<dyn SeriesProvider + Send + Sync>,
        geomagnetic: Box<dyn SeriesProvider + Send + Sync>,
        fossils: Box<dyn EventProvider + Send + Sync>,
    ) -> Self {
        let divergence = DivergenceClock::new(params.seed);
        Analyzer {
            ftrt,
            geomagnetic,
            fossils,
            divergence,
            params,
        }
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Cosmic events in a range: FTRT peaks, geomagnetic weak periods, or
    /// both concatenated FTRT-first.
    pub fn cosmic_events(
        &self,
        range: &DateRange,
        source: Option<CosmicSource>,
    ) -> Vec<CosmicEvent> {
        let mut events = Vec::new();
        if source != Some(CosmicSource::Geomagnetic) {
            let series = self.ftrt.sample(range);
            events.extend(find_peaks(&series, self.params.peak_threshold));
        }
        if source != Some(CosmicSource::Ftrt) {
            let series = self.geomagnetic.sample(range);
            events.extend(find_weak_intervals(
                &series,
                self.params.weakness_percentile,
            ));
        }
        debug!(count = events.len(), ?source, "cosmic events gathered");
        events
    }

    /// Evolutionary events in a range, optionally restricted to one kind.
    pub fn evolutionary_events(
        &self,
        range: &DateRange,
        kind: Option<EvolutionaryEventKind>,
    ) -> Vec<EvolutionaryEvent> {
        self.fossils.events_in(range, kind)
    }

    /// Divergence-date estimates for a list of taxa.
    pub fn divergence_estimates(&self, taxa: &[String]) -> BTreeMap<String, NaiveDate> {
        self.divergence
            .estimate_divergence(taxa, Utc::now().date_naive())
    }

    /// Run the full correlation pipeline for a date range.
    ///
    /// When either event family is empty there is nothing to correlate:
    /// the result carries empty correlation output and no best record
    /// instead of an error. Direct callers of `cross_correlation` get the
    /// fail-fast precondition instead.
    pub fn correlate(&self, range: &DateRange) -> Result<AnalysisResult> {
        info!(start = %range.start, end = %range.end, "starting correlation analysis");

        let cosmic_events = self.cosmic_events(range, None);
        let evolutionary_events = self.evolutionary_events(range, None);

        let correlation_results = if cosmic_events.is_empty() || evolutionary_events.is_empty()
        {
            debug!(
                cosmic = cosmic_events.len(),
                evolutionary = evolutionary_events.len(),
                "one event family is empty; skipping correlation"
            );
            Vec::new()
        } else {
            cross_correlation(&cosmic_events, &evolutionary_events, &self.params)?
        };
        let best = best_correlation(&correlation_results);

        let cosmic_stamps: Vec<NaiveDate> =
            cosmic_events.iter().map(|e| e.timestamp).collect();
        let evolutionary_stamps: Vec<NaiveDate> =
            evolutionary_events.iter().map(|e| e.timestamp).collect();
        let cosmic_clusters =
            cluster_timestamps(&cosmic_stamps, self.params.cluster_window_days);
        let evolutionary_clusters =
            cluster_timestamps(&evolutionary_stamps, self.params.cluster_window_days);

        info!(
            cosmic = cosmic_events.len(),
            evolutionary = evolutionary_events.len(),
            correlations = correlation_results.len(),
            "correlation analysis completed"
        );

        Ok(AnalysisResult {
            cosmic_events,
            evolutionary_events,
            correlation_results,
            best_correlation: best,
            cosmic_clusters,
            evolutionary_clusters,
        })
    }
}
