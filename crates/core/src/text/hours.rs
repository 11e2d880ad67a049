//! Formatting and parsing of minute counts as hours.
//!
//! A total of 61 minutes renders as `01:01`; negative totals carry a
//! leading `-`. From 1000 hours up, the hour field is grouped with dots
//! (`1.000:00`). Parsing accepts the same shapes plus a bare hour count.

use chrono::Duration;

use tally_shared::{CommonsError, CommonsResult};

const MINUTES_PER_HOUR: u32 = 60;

const EXPECTED_FORMAT: &str = "some value in the format hh:mm or hh";

/// Formats a total number of minutes as hours and minutes.
///
/// # Example
///
/// ```
/// use tally_core::text::format_minutes;
///
/// assert_eq!(format_minutes(61), "01:01");
/// assert_eq!(format_minutes(-61), "-01:01");
/// assert_eq!(format_minutes(60_000), "1.000:00");
/// ```
#[must_use]
pub fn format_minutes(total_minutes: i64) -> String {
    let sign = if total_minutes < 0 { "-" } else { "" };
    // unsigned_abs keeps i64::MIN representable.
    let total = total_minutes.unsigned_abs();

    let hours = total / u64::from(MINUTES_PER_HOUR);
    let minutes = total % u64::from(MINUTES_PER_HOUR);

    if hours < 1000 {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{}:{minutes:02}", group_thousands(hours))
    }
}

/// Formats a duration as hours and minutes, truncating sub-minute parts.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    format_minutes(duration.num_minutes())
}

/// Parses an `hh:mm` or bare `hh` string into a total number of minutes.
///
/// Grouping dots in the hour field and a leading `-` are accepted. A bare
/// hour count is taken as whole hours.
///
/// # Example
///
/// ```
/// use tally_core::text::parse_minutes;
///
/// assert_eq!(parse_minutes("01:01").unwrap(), 61);
/// assert_eq!(parse_minutes("2").unwrap(), 120);
/// ```
pub fn parse_minutes(source: &str) -> CommonsResult<i64> {
    let parse_error = || CommonsError::parse(source, EXPECTED_FORMAT);

    let trimmed = source.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    // Grouping dots carry no information.
    let unsigned = unsigned.replace('.', "");

    let total = match unsigned.split_once(':') {
        Some((hours, minutes)) => {
            let hours: i64 = hours.parse().map_err(|_| parse_error())?;
            let minutes: i64 = minutes.parse().map_err(|_| parse_error())?;
            hours * i64::from(MINUTES_PER_HOUR) + minutes
        }
        None => {
            let hours: i64 = unsigned.parse().map_err(|_| parse_error())?;
            hours * i64::from(MINUTES_PER_HOUR)
        }
    };

    Ok(if negative { -total } else { total })
}

/// Groups the digits of a number with dots (`1000` becomes `1.000`).
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped
}
