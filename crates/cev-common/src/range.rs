//! Date-range parsing and iteration.
//!
//! Requests carry ISO-8601 date or datetime strings. Omitted boundaries
//! default to 2000-01-01 for the start and the current day for the end.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Default analysis start when the caller omits one.
pub const DEFAULT_START: &str = "2000-01-01";

/// An inclusive date range at daily resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting inverted boundaries.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidDateRange {
                input: format!("{}..{}", start, end),
                reason: "end precedes start".into(),
            });
        }
        Ok(DateRange { start, end })
    }

    /// Parse optional boundary strings, applying the documented defaults.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start = match start {
            Some(s) => parse_date(s)?,
            None => parse_date(DEFAULT_START)?,
        };
        let end = match end {
            Some(s) => parse_date(s)?,
            None => Utc::now().date_naive(),
        };
        DateRange::new(start, end)
    }

    /// Whether a date lies within the range (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days spanned, inclusive of both endpoints.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate every day in the range, start through end inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take(self.len_days() as usize)
    }
}

/// Parse an ISO-8601 date or datetime string to a date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    Err(Error::InvalidDateRange {
        input: input.to_string(),
        reason: "expected an ISO-8601 date or datetime".into(),
    })
}
