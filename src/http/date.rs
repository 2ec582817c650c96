//! HTTP date formatting and comparison for conditional GETs.
//!
//! Dates use one fixed pattern, `Mon, 05 Oct 2026 14:03:09 GMT`, rendered in
//! UTC with whole-second precision.

use std::time::SystemTime;

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

#[derive(Debug, Error)]
#[error("invalid HTTP date {input:?}")]
pub struct DateError {
    pub input: String,
    #[source]
    source: chrono::ParseError,
}

/// Formats `timestamp`, or the current time when `None`.
pub fn format_http_date(timestamp: Option<SystemTime>) -> String {
    let time = timestamp
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(Utc::now);
    time.format(HTTP_DATE_FORMAT).to_string()
}

pub fn parse_http_date(input: &str) -> Result<NaiveDateTime, DateError> {
    NaiveDateTime::parse_from_str(input, HTTP_DATE_FORMAT).map_err(|source| DateError {
        input: input.to_string(),
        source,
    })
}

/// Whether `a` is strictly later than `b`.
///
/// Fails if either side does not match [`HTTP_DATE_FORMAT`].
pub fn is_greater_than(a: &str, b: &str) -> Result<bool, DateError> {
    Ok(parse_http_date(a)? > parse_http_date(b)?)
}
