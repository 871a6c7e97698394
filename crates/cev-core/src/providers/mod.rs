//! Pluggable data providers.
//!
//! The synthetic generators stand in for real data sources (JPL ephemerides,
//! GEOMAGIA-style paleomagnetic archives, the Paleobiology Database). They
//! hide behind small capability traits so real sources can be substituted
//! without touching the detection or correlation algorithms. Every provider
//! takes an explicit seed at construction and is read-only afterwards.

use cev_common::{DateRange, EvolutionaryEvent, EvolutionaryEventKind};
use chrono::{Datelike, NaiveDate};

pub mod divergence;
pub mod fossil;
pub mod geomagnetic;
pub mod tidal;

pub use divergence::DivergenceClock;
pub use fossil::FossilRecord;
pub use geomagnetic::GeomagneticArchive;
pub use tidal::TidalForceModel;

/// An ordered scalar series sampled over a date range.
pub trait SeriesProvider {
    /// Samples covered by `range`, in ascending date order. A range
    /// outside the provider's coverage yields an empty vector.
    fn sample(&self, range: &DateRange) -> Vec<(NaiveDate, f64)>;
}

/// A source of discrete dated evolutionary events.
pub trait EventProvider {
    /// Events with timestamps inside `range`, optionally restricted to an
    /// exact kind. Retrieval never regenerates the underlying data.
    fn events_in(
        &self,
        range: &DateRange,
        kind: Option<EvolutionaryEventKind>,
    ) -> Vec<EvolutionaryEvent>;
}

/// Month-end dates between `start` and `end` inclusive.
///
/// The synthetic archives are monthly series anchored on the last day of
/// each month.
pub fn month_ends(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut year = start.year();
    let mut month = start.month();
    loop {
        let date = month_end(year, month);
        if date > end {
            break;
        }
        if date >= start {
            dates.push(date);
        }
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    dates
}

/// Last day of the given month.
fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("valid first of month")
        .pred_opt()
        .expect("month end exists")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_ends_cover_the_window() {
        let dates = month_ends(date(1900, 1, 1), date(1900, 12, 31));
        assert_eq!(dates.len(), 12);
        assert_eq!(dates[0], date(1900, 1, 31));
        assert_eq!(dates[1], date(1900, 2, 28));
        assert_eq!(dates[11], date(1900, 12, 31));
    }

    #[test]
    fn month_ends_respect_partial_boundaries() {
        // 2100-01-31 falls past the window end, so the last entry is
        // December of the previous year.
        let dates = month_ends(date(2099, 11, 1), date(2100, 1, 1));
        assert_eq!(dates, vec![date(2099, 11, 30), date(2099, 12, 31)]);
    }

    #[test]
    fn month_ends_handle_leap_february() {
        let dates = month_ends(date(2000, 2, 1), date(2000, 2, 29));
        assert_eq!(dates, vec![date(2000, 2, 29)]);
    }

    #[test]
    fn month_ends_empty_for_inverted_window() {
        assert!(month_ends(date(2020, 1, 1), date(2019, 1, 1)).is_empty());
    }
}
