use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single magazine issue shown in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    pub title: String,
    /// Publication date as written in the source data (ISO-like)
    pub date: String,
    /// File path relative to the configured path prefix
    pub path: String,
}

impl Magazine {
    pub fn new(title: impl Into<String>, date: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            path: path.into(),
        }
    }

    /// Parsed publication date, if the raw date is understood
    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Publication (year, 1-based month)
    pub fn year_month(&self) -> Option<(i32, u32)> {
        self.published_on().map(|d| (d.year(), d.month()))
    }

    /// Link target for this issue under `prefix`
    pub fn href(&self, prefix: &str) -> String {
        format!("{}/{}", prefix, self.path)
    }
}

/// Parse the date formats seen in magazine data.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM`, `YYYY`, RFC 3339 timestamps
/// and naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` timestamps.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    // Year only: pin to January 1st
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    // Year-month only: pin to the first of the month
    NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d").ok()
}
