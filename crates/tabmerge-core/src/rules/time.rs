use chrono::{NaiveDate, NaiveDateTime};

use crate::rules::Matcher;

/// Parse `value` with `format`, first as a date-time then as a bare date
/// (taken at midnight).
pub fn parse_time(value: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, format).ok().or_else(|| {
        NaiveDate::parse_from_str(value, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

/// Field, read as a timestamp, falls on one side of a fixed bound.
///
/// Values that do not parse with the configured format never match.
pub struct TimeBoundary {
    format: String,
    bound: NaiveDateTime,
    after: bool,
    inclusive: bool,
}

impl TimeBoundary {
    /// Returns `None` when `bound` does not parse with `format`.
    pub fn new(format: String, bound: &str, after: bool, inclusive: bool) -> Option<Self> {
        let bound = parse_time(bound, &format)?;
        Some(Self {
            format,
            bound,
            after,
            inclusive,
        })
    }
}

impl Matcher for TimeBoundary {
    fn name(&self) -> &'static str {
        if self.after {
            "After"
        } else {
            "Before"
        }
    }

    fn is_match(&self, value: &str) -> bool {
        let Some(ts) = parse_time(value, &self.format) else {
            return false;
        };
        match (self.after, self.inclusive) {
            (true, true) => ts >= self.bound,
            (true, false) => ts > self.bound,
            (false, true) => ts <= self.bound,
            (false, false) => ts < self.bound,
        }
    }
}
