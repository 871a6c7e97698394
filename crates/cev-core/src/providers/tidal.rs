//! Planetary tidal-force proxy (FTRT).
//!
//! A synthetic stand-in for real ephemeris lookups: each body's distance
//! varies sinusoidally with a phase derived from the day of month, so the
//! signal is a deterministic, periodic function of the calendar day only.

use super::SeriesProvider;
use cev_common::DateRange;
use chrono::{Datelike, NaiveDate};
use std::f64::consts::TAU;

/// A contributing body with mass and orbital period.
#[derive(Debug, Clone, Copy)]
struct Body {
    name: &'static str,
    mass_kg: f64,
    orbital_period_days: f64,
}

const BODIES: [Body; 5] = [
    Body {
        name: "mercury",
        mass_kg: 3.3011e23,
        orbital_period_days: 87.97,
    },
    Body {
        name: "venus",
        mass_kg: 4.8675e24,
        orbital_period_days: 224.70,
    },
    Body {
        name: "mars",
        mass_kg: 6.4171e23,
        orbital_period_days: 686.98,
    },
    Body {
        name: "jupiter",
        mass_kg: 1.8982e27,
        orbital_period_days: 4332.59,
    },
    Body {
        name: "saturn",
        mass_kg: 5.6834e26,
        orbital_period_days: 10759.22,
    },
];

/// Normalization divisor bringing summed contributions to order 1e3.
const FORCE_SCALE: f64 = 1e24;

/// Computes the total relative tidal force from the fixed body table.
#[derive(Debug, Default, Clone)]
pub struct TidalForceModel;

impl TidalForceModel {
    pub fn new() -> Self {
        TidalForceModel
    }

    /// Names of the contributing bodies, in table order.
    pub fn body_names(&self) -> Vec<&'static str> {
        BODIES.iter().map(|b| b.name).collect()
    }

    /// Total tidal-force proxy for a date.
    ///
    /// Sum over bodies of mass / distance_factor^3 where distance_factor =
    /// 1 + 0.2*sin(2*pi*phase) and phase derives from the day of month.
    /// Always finite and strictly positive.
    pub fn value_at(&self, date: NaiveDate) -> f64 {
        let day = date.day() as i64;
        let mut total = 0.0;
        for body in &BODIES {
            let period = body.orbital_period_days;
            let phase = (day % period.floor() as i64) as f64 / period;
            let distance_factor = 1.0 + 0.2 * (TAU * phase).sin();
            total += body.mass_kg / distance_factor.powi(3);
        }
        total / FORCE_SCALE
    }
}

impl SeriesProvider for TidalForceModel {
    fn sample(&self, range: &DateRange) -> Vec<(NaiveDate, f64)> {
        range.days().map(|d| (d, self.value_at(d))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn values_are_finite_and_positive() {
        let model = TidalForceModel::new();
        let range = DateRange::new(date(2020, 1, 1), date(2020, 12, 31)).unwrap();
        for (_, value) in model.sample(&range) {
            assert!(value.is_finite());
            assert!(value > 0.0);
        }
    }

    #[test]
    fn signal_depends_only_on_day_of_month() {
        let model = TidalForceModel::new();
        assert_eq!(
            model.value_at(date(1995, 3, 17)),
            model.value_at(date(2044, 11, 17))
        );
        assert_ne!(
            model.value_at(date(2020, 5, 3)),
            model.value_at(date(2020, 5, 4))
        );
    }

    #[test]
    fn sample_covers_every_day_inclusive() {
        let model = TidalForceModel::new();
        let range = DateRange::new(date(2021, 2, 26), date(2021, 3, 2)).unwrap();
        let series = model.sample(&range);
        assert_eq!(series.len(), 5);
        assert_eq!(series[0].0, range.start);
        assert_eq!(series[4].0, range.end);
    }

    #[test]
    fn jupiter_dominates_the_sum() {
        // Sanity: the scaled sum sits in the low thousands because of
        // Jupiter's 1.9e27 kg mass.
        let value = TidalForceModel::new().value_at(date(2020, 6, 15));
        assert!(value > 1000.0 && value < 10_000.0, "value = {}", value);
    }
}
