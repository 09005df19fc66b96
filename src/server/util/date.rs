use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::server::error::AppError;

/// Display format for post and comment timestamps.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn format_display(timestamp: DateTime<Utc>) -> String {
    timestamp.format(DISPLAY_FORMAT).to_string()
}

/// Half-open date range covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    /// First day of the month.
    pub start: NaiveDate,
    /// First day of the following month, excluded.
    pub end: NaiveDate,
}

impl MonthRange {
    /// Parses a `YYYY-MM` string.
    pub fn parse(year_month: &str) -> Result<Self, AppError> {
        let invalid = || AppError::validation("yearMonth must be formatted as YYYY-MM");

        let start = NaiveDate::parse_from_str(&format!("{year_month}-01"), "%Y-%m-%d")
            .map_err(|_| invalid())?;

        let end = if start.month() == 12 {
            NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
        }
        .ok_or_else(invalid)?;

        Ok(Self { start, end })
    }
}
