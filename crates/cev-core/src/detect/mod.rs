//! Peak and threshold-interval detection over ordered series.

use cev_common::{CosmicEvent, CosmicEventKind};
use cev_math::{mean, percentile};
use chrono::NaiveDate;

/// Find local maxima above `threshold` in a daily series.
///
/// A peak requires strict inequality against both neighbors, so the first
/// and last samples can never qualify and plateaus are never detected.
/// The plateau exclusion is documented behavior, not an oversight.
/// Duration counts the peak day plus each consecutive following day still
/// above the threshold.
pub fn find_peaks(series: &[(NaiveDate, f64)], threshold: f64) -> Vec<CosmicEvent> {
    let mut peaks = Vec::new();
    for i in 1..series.len().saturating_sub(1) {
        let value = series[i].1;
        if value > series[i - 1].1 && value > series[i + 1].1 && value > threshold {
            let mut duration_days = 1i64;
            let mut j = i + 1;
            while j < series.len() && series[j].1 > threshold {
                duration_days += 1;
                j += 1;
            }
            peaks.push(CosmicEvent {
                timestamp: series[i].0,
                kind: CosmicEventKind::PlanetaryAlignment,
                magnitude: value,
                duration_days,
                description: format!("FTRT peak of {:.2} detected", value),
            });
        }
    }
    peaks
}

/// Find contiguous runs below a percentile-derived threshold.
///
/// The threshold is the `threshold_percentile` percentile of the values in
/// the series. Walking in order, a value below the threshold opens an
/// interval; the first value at or above it closes the interval and emits
/// one event with magnitude averaged over points in `[open, close)` and
/// duration equal to the day delta. An interval still open when the series
/// ends is dropped, never emitted. Empty input yields empty output.
pub fn find_weak_intervals(
    series: &[(NaiveDate, f64)],
    threshold_percentile: f64,
) -> Vec<CosmicEvent> {
    if series.is_empty() {
        return Vec::new();
    }
    let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
    let threshold = percentile(&values, threshold_percentile);

    let mut intervals = Vec::new();
    let mut open: Option<NaiveDate> = None;
    for &(date, value) in series {
        match open {
            None if value < threshold => open = Some(date),
            Some(start) if value >= threshold => {
                let in_interval: Vec<f64> = series
                    .iter()
                    .filter(|(d, _)| start <= *d && *d < date)
                    .map(|(_, v)| *v)
                    .collect();
                let avg_intensity = mean(&in_interval);
                let duration_days = (date - start).num_days();
                intervals.push(CosmicEvent {
                    timestamp: start,
                    kind: CosmicEventKind::GeomagneticWeakness,
                    magnitude: avg_intensity,
                    duration_days,
                    description: format!(
                        "Geomagnetic field weakened to {:.0} nT for {} days",
                        avg_intensity, duration_days
                    ),
                });
                open = None;
            }
            _ => {}
        }
    }
    intervals
}
