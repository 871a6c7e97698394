//! Lagged cross-correlation between cosmic and evolutionary event lists.

use cev_common::{
    CorrelationResult, CosmicEvent, Error, EventSide, EvolutionaryEvent, Result,
};
use cev_config::AnalysisParams;
use cev_math::{fisher_interval, pearson_test, std_dev};

/// Correlate two event lists across a sequence of forward lags.
///
/// Both lists must be non-empty; the span is the closed interval from the
/// earliest to the latest timestamp across both. Each event writes its
/// magnitude into a dense daily array at its day offset; later events on
/// the same day overwrite earlier ones (last-write-wins is the documented
/// collision policy).
///
/// Lags run from zero to `max_lag_days` in `lag_step_days` increments.
/// A lag is skipped, not failed, when it reaches past the span or when
/// either aligned window is constant (zero variance makes the correlation
/// undefined). The output therefore holds one record per evaluated lag,
/// not per requested lag.
pub fn cross_correlation(
    cosmic: &[CosmicEvent],
    evolutionary: &[EvolutionaryEvent],
    params: &AnalysisParams,
) -> Result<Vec<CorrelationResult>> {
    if cosmic.is_empty() {
        return Err(Error::EmptyInput {
            side: EventSide::Cosmic,
        });
    }
    if evolutionary.is_empty() {
        return Err(Error::EmptyInput {
            side: EventSide::Evolutionary,
        });
    }

    let mut start = cosmic[0].timestamp;
    let mut end = start;
    let stamps = cosmic
        .iter()
        .map(|e| e.timestamp)
        .chain(evolutionary.iter().map(|e| e.timestamp));
    for stamp in stamps {
        start = start.min(stamp);
        end = end.max(stamp);
    }
    let span_days = (end - start).num_days() + 1;

    let mut cosmic_series = vec![0.0; span_days as usize];
    let mut evolutionary_series = vec![0.0; span_days as usize];
    for event in cosmic {
        let idx = (event.timestamp - start).num_days() as usize;
        cosmic_series[idx] = event.magnitude;
    }
    for event in evolutionary {
        let idx = (event.timestamp - start).num_days() as usize;
        evolutionary_series[idx] = event.magnitude;
    }

    let mut results = Vec::new();
    let mut lag = 0i64;
    while lag <= params.max_lag_days {
        if lag < span_days {
            let shifted_cosmic = &cosmic_series[lag as usize..];
            let aligned_evolutionary = &evolutionary_series[..shifted_cosmic.len()];

            if !shifted_cosmic.is_empty()
                && std_dev(shifted_cosmic) > 0.0
                && std_dev(aligned_evolutionary) > 0.0
            {
                let (r, p_value) = pearson_test(shifted_cosmic, aligned_evolutionary);
                let confidence_interval = fisher_interval(r, shifted_cosmic.len());
                results.push(CorrelationResult {
                    correlation_coefficient: r,
                    p_value,
                    time_lag_days: lag,
                    confidence_interval,
                    significant: p_value < params.significance_alpha,
                });
            }
        }
        lag += params.lag_step_days;
    }
    Ok(results)
}

/// Select the strongest significant correlation.
///
/// Ranks by |r| but scores non-significant results as zero, so a weak
/// significant record beats any non-significant one, while a
/// non-significant record can still win when nothing scores above zero.
/// In that case the returned record's own `significant` flag is false.
/// Ties keep the earliest record. This ranking is externally observable
/// behavior and is preserved as-is.
pub fn best_correlation(results: &[CorrelationResult]) -> Option<CorrelationResult> {
    let mut best: Option<&CorrelationResult> = None;
    let mut best_key = f64::NEG_INFINITY;
    for result in results {
        let key = if result.significant {
            result.correlation_coefficient.abs()
        } else {
            0.0
        };
        if best.is_none() || key > best_key {
            best = Some(result);
            best_key = key;
        }
    }
    best.cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cev_common::{CosmicEventKind, EvolutionaryEventKind};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cosmic_at(day: i64, magnitude: f64) -> CosmicEvent {
        CosmicEvent {
            timestamp: date(2020, 1, 1) + chrono::Duration::days(day),
            kind: CosmicEventKind::PlanetaryAlignment,
            magnitude,
            duration_days: 1,
            description: String::new(),
        }
    }

    fn evolutionary_at(day: i64, magnitude: f64) -> EvolutionaryEvent {
        EvolutionaryEvent {
            timestamp: date(2020, 1, 1) + chrono::Duration::days(day),
            kind: EvolutionaryEventKind::Speciation,
            magnitude,
            affected_taxa: vec!["Taxus_0".into()],
            description: String::new(),
        }
    }

    fn result(r: f64, significant: bool) -> CorrelationResult {
        CorrelationResult {
            correlation_coefficient: r,
            p_value: if significant { 0.01 } else { 0.5 },
            time_lag_days: 0,
            confidence_interval: (0.0, 0.0),
            significant,
        }
    }

    #[test]
    fn empty_cosmic_list_fails_fast() {
        let params = AnalysisParams::default();
        let evo = vec![evolutionary_at(0, 1.0)];
        let err = cross_correlation(&[], &evo, &params).unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyInput {
                side: EventSide::Cosmic
            }
        ));
    }

    #[test]
    fn empty_evolutionary_list_fails_fast() {
        let params = AnalysisParams::default();
        let cosmic = vec![cosmic_at(0, 1.0)];
        let err = cross_correlation(&cosmic, &[], &params).unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyInput {
                side: EventSide::Evolutionary
            }
        ));
    }

    #[test]
    fn degenerate_windows_are_skipped_not_failed() {
        // One event each on the same day: the single-sample window has
        // zero variance at every lag.
        let params = AnalysisParams::default();
        let cosmic = vec![cosmic_at(0, 2.0)];
        let evo = vec![evolutionary_at(0, 3.0)];
        let results = cross_correlation(&cosmic, &evo, &params).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn identical_ramps_correlate_perfectly_at_lag_zero() {
        let params = AnalysisParams::default();
        // Magnitude ramps over 40 consecutive days on both sides.
        let cosmic: Vec<CosmicEvent> =
            (0..40).map(|i| cosmic_at(i, (i + 1) as f64)).collect();
        let evo: Vec<EvolutionaryEvent> =
            (0..40).map(|i| evolutionary_at(i, (i + 1) as f64)).collect();
        let results = cross_correlation(&cosmic, &evo, &params).unwrap();

        let lag0 = results.iter().find(|r| r.time_lag_days == 0).unwrap();
        assert!((lag0.correlation_coefficient - 1.0).abs() < 1e-9);
        assert!(lag0.p_value < 1e-12);
        assert!(lag0.significant);
        let (lo, hi) = lag0.confidence_interval;
        assert!(lo > 0.99 && hi > 0.99);
    }

    #[test]
    fn lags_step_by_thirty_and_stay_inside_the_span() {
        let params = AnalysisParams::default();
        let cosmic: Vec<CosmicEvent> =
            (0..100).map(|i| cosmic_at(i, ((i * 7) % 13) as f64 + 1.0)).collect();
        let evo: Vec<EvolutionaryEvent> =
            (0..100).map(|i| evolutionary_at(i, ((i * 5) % 11) as f64 + 1.0)).collect();
        let results = cross_correlation(&cosmic, &evo, &params).unwrap();
        // span is 100 days, so only lags 0, 30, 60, 90 are reachable
        let lags: Vec<i64> = results.iter().map(|r| r.time_lag_days).collect();
        assert_eq!(lags, vec![0, 30, 60, 90]);
    }

    #[test]
    fn small_aligned_windows_get_the_sentinel_interval() {
        let params = AnalysisParams::default();
        // Span of 3 days: the lag-0 window has n = 3 <= 3.
        let cosmic = vec![cosmic_at(0, 1.0), cosmic_at(2, 5.0)];
        let evo = vec![evolutionary_at(0, 2.0), evolutionary_at(1, 4.0)];
        let results = cross_correlation(&cosmic, &evo, &params).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].confidence_interval, (0.0, 0.0));
    }

    #[test]
    fn same_day_collisions_keep_the_last_write() {
        let params = AnalysisParams::default();
        let cosmic = vec![
            cosmic_at(0, 1.0),
            cosmic_at(1, 9.0),
            cosmic_at(1, 2.0), // overwrites the 9.0
            cosmic_at(2, 3.0),
            cosmic_at(3, 4.0),
        ];
        let evo = vec![
            evolutionary_at(0, 1.0),
            evolutionary_at(1, 2.0),
            evolutionary_at(2, 3.0),
            evolutionary_at(3, 4.0),
        ];
        let results = cross_correlation(&cosmic, &evo, &params).unwrap();
        let lag0 = results.iter().find(|r| r.time_lag_days == 0).unwrap();
        // With the overwrite both series are the ramp 1,2,3,4.
        assert!((lag0.correlation_coefficient - 1.0).abs() < 1e-9);
    }

    #[test]
    fn weak_significant_beats_strong_nonsignificant() {
        let results = vec![result(0.9, false), result(0.3, true)];
        let best = best_correlation(&results).unwrap();
        assert_eq!(best.correlation_coefficient, 0.3);
        assert!(best.significant);
    }

    #[test]
    fn all_nonsignificant_keeps_the_first_record() {
        let results = vec![result(0.2, false), result(0.9, false), result(-0.7, false)];
        let best = best_correlation(&results).unwrap();
        // every key is zero, so the first record wins and its own
        // significant flag is false
        assert_eq!(best.correlation_coefficient, 0.2);
        assert!(!best.significant);
    }

    #[test]
    fn negative_correlations_rank_by_absolute_value() {
        let results = vec![result(0.4, true), result(-0.8, true)];
        let best = best_correlation(&results).unwrap();
        assert_eq!(best.correlation_coefficient, -0.8);
    }

    #[test]
    fn no_results_means_no_best() {
        assert!(best_correlation(&[]).is_none());
    }
}
