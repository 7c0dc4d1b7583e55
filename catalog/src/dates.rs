//! Display helpers for the ISO dates carried by catalog items.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const LONG_DATE: &[BorrowedFormatItem<'_>] = format_description!("[month repr:long] [day padding:none], [year]");

#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("invalid ISO date: {0}")]
    Parse(#[from] time::error::Parse),
    #[error("failed to format date: {0}")]
    Format(#[from] time::error::Format),
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`DateError::Parse`] when `raw` is not an ISO calendar date.
pub fn parse_date(raw: &str) -> Result<Date, DateError> {
    Ok(Date::parse(raw.trim(), ISO_DATE)?)
}

/// Render `2024-07-23` as `July 23, 2024`.
///
/// # Errors
///
/// Returns [`DateError`] when `raw` cannot be parsed.
pub fn format_date(raw: &str) -> Result<String, DateError> {
    Ok(parse_date(raw)?.format(LONG_DATE)?)
}

/// Whole days between `raw` and `today`, regardless of direction.
///
/// # Errors
///
/// Returns [`DateError::Parse`] when `raw` cannot be parsed.
pub fn days_since(raw: &str, today: Date) -> Result<i64, DateError> {
    let date = parse_date(raw)?;
    Ok((today - date).whole_days().abs())
}
