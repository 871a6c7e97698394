//! Synthetic geomagnetic intensity archive.
//!
//! A monthly series generated once at construction: a declining linear
//! trend plus a seasonal oscillation plus Gaussian noise, nominally in
//! nanotesla. The series is frozen for the provider's lifetime; queries
//! only filter it.

use super::{month_ends, SeriesProvider};
use cev_common::DateRange;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Baseline field intensity in nT.
const BASE_INTENSITY: f64 = 50_000.0;
/// Linear decline per month in nT.
const TREND_PER_MONTH: f64 = 50.0;
/// Seasonal oscillation amplitude in nT.
const SEASONAL_AMPLITUDE: f64 = 5_000.0;
/// Noise standard deviation in nT.
const NOISE_SIGMA: f64 = 1_000.0;

/// Precomputed monthly geomagnetic intensity series.
#[derive(Debug, Clone)]
pub struct GeomagneticArchive {
    samples: Vec<(NaiveDate, f64)>,
}

impl GeomagneticArchive {
    /// Generate the archive over `[start, end]` with a seeded generator.
    pub fn new(start: NaiveDate, end: NaiveDate, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let samples = month_ends(start, end)
            .into_iter()
            .enumerate()
            .map(|(i, date)| {
                let i = i as f64;
                let value = BASE_INTENSITY - TREND_PER_MONTH * i
                    + SEASONAL_AMPLITUDE * (i / 12.0).sin()
                    + sample_normal(&mut rng, 0.0, NOISE_SIGMA);
                (date, value)
            })
            .collect();
        GeomagneticArchive { samples }
    }

    /// Intensity at the nearest covered month, if any month is covered.
    pub fn value_at(&self, date: NaiveDate) -> Option<f64> {
        self.samples
            .iter()
            .min_by_key(|(d, _)| (*d - date).num_days().abs())
            .map(|(_, v)| *v)
    }

    /// Number of months in the archive.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl SeriesProvider for GeomagneticArchive {
    fn sample(&self, range: &DateRange) -> Vec<(NaiveDate, f64)> {
        self.samples
            .iter()
            .filter(|(date, _)| range.contains(*date))
            .copied()
            .collect()
    }
}

/// Draw from N(mean, sigma^2) via the Box-Muller transform.
fn sample_normal(rng: &mut StdRng, mean: f64, sigma: f64) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-12);
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
    mean + sigma * z
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn archive() -> GeomagneticArchive {
        GeomagneticArchive::new(date(1900, 1, 1), date(2100, 1, 1), 42)
    }

    #[test]
    fn archive_is_monthly_over_two_centuries() {
        let archive = archive();
        // 1900-01 through 2099-12 plus 2100-01 excluded (month end past window)
        assert_eq!(archive.len(), 200 * 12);
    }

    #[test]
    fn construction_is_deterministic_per_seed() {
        let a = GeomagneticArchive::new(date(1900, 1, 1), date(1910, 1, 1), 42);
        let b = GeomagneticArchive::new(date(1900, 1, 1), date(1910, 1, 1), 42);
        let c = GeomagneticArchive::new(date(1900, 1, 1), date(1910, 1, 1), 7);
        assert_eq!(a.samples, b.samples);
        assert_ne!(a.samples, c.samples);
    }

    #[test]
    fn queries_outside_the_window_are_empty() {
        let archive = archive();
        let range = DateRange::new(date(2150, 1, 1), date(2160, 1, 1)).unwrap();
        assert!(archive.sample(&range).is_empty());
    }

    #[test]
    fn in_range_samples_are_plausible_intensities() {
        let archive = archive();
        let range = DateRange::new(date(2000, 1, 1), date(2010, 1, 1)).unwrap();
        let samples = archive.sample(&range);
        assert_eq!(samples.len(), 120);
        for (d, value) in samples {
            assert!(range.contains(d));
            // a century of -50 nT/month trend has dragged the series far
            // below its 50,000 nT base by 2000
            assert!(value > -30_000.0 && value < 0.0, "value = {}", value);
        }
    }

    #[test]
    fn value_at_picks_the_nearest_month() {
        let archive = GeomagneticArchive::new(date(2000, 1, 1), date(2000, 6, 30), 1);
        let nearest = archive.value_at(date(2000, 2, 2)).unwrap();
        let expected = archive
            .sample(&DateRange::new(date(2000, 1, 1), date(2000, 1, 31)).unwrap())[0]
            .1;
        assert_eq!(nearest, expected);
    }
}
