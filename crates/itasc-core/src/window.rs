//! Query windows for complaint fetches.
//!
//! A [`TimeRange`] is the user-facing name (`day`, `week`, `all`); a
//! [`TimeWindow`] is the concrete `[start, end]` pair sent to the API.

use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::ConfigError;

/// Timestamp layout the FTC API expects for `created_date_from`/`created_date_to`
/// and uses for `created-date`/`violation-date` in responses.
pub const QUERY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Named lookback period selecting which complaints to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    /// The 24 hours before invocation.
    #[default]
    Day,
    /// The 7 days before invocation.
    Week,
    /// Everything since [`TimeRange::history_start`].
    All,
}

impl TimeRange {
    /// Earliest creation date ever requested: 2015-01-01 00:00:00 UTC.
    #[must_use]
    pub fn history_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::Day => write!(f, "day"),
            TimeRange::Week => write!(f, "week"),
            TimeRange::All => write!(f, "all"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "all" => Ok(TimeRange::All),
            other => Err(ConfigError::InvalidRange(other.to_string())),
        }
    }
}

/// Inclusive creation-date window for one fetch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Builds the window for `range` ending at `now`.
    #[must_use]
    pub fn ending_at(range: TimeRange, now: DateTime<Utc>) -> Self {
        let start = match range {
            TimeRange::Day => now - Duration::hours(24),
            TimeRange::Week => now - Duration::days(7),
            TimeRange::All => TimeRange::history_start(),
        };
        Self { start, end: now }
    }

    /// Builds the window for `range` ending at the current UTC time.
    #[must_use]
    pub fn until_now(range: TimeRange) -> Self {
        Self::ending_at(range, Utc::now())
    }

    /// Lower bound formatted for the `created_date_from` query parameter.
    #[must_use]
    pub fn start_param(&self) -> String {
        self.start.format(QUERY_TIMESTAMP_FORMAT).to_string()
    }

    /// Upper bound formatted for the `created_date_to` query parameter.
    #[must_use]
    pub fn end_param(&self) -> String {
        self.end.format(QUERY_TIMESTAMP_FORMAT).to_string()
    }
}
