use crate::error::CoreError;
use chrono::{NaiveDate, Weekday};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static MONTH_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})$").unwrap());
static WEEK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})-W(\d{1,2})$").unwrap());
static DAY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());

/// A user-requested reporting granularity together with its coordinates.
///
/// Exactly one variant is produced per slot value; a `Period` is immutable
/// once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// A single calendar day.
    Day(NaiveDate),
    /// An ISO 8601 week of a year.
    Week { year: i32, week: u32 },
    /// A calendar month of a year.
    Month { year: i32, month: u32 },
}

impl FromStr for Period {
    type Err = CoreError;

    /// Parses a raw slot value into a `Period`.
    ///
    /// The three shapes are tried in a fixed order (month, then week, then
    /// day), and the first match wins. A shape that matches but does not name
    /// a real calendar value (month 13, week 54, February 30th) is rejected
    /// the same way as an unrecognized shape.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if let Some(caps) = MONTH_REGEX.captures(raw) {
            let year = parse_number(&caps[1], raw)?;
            let month = parse_number(&caps[2], raw)?;
            // Probe the first day of the month to reject impossible months.
            NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| invalid(raw))?;
            return Ok(Period::Month { year, month });
        }

        if let Some(caps) = WEEK_REGEX.captures(raw) {
            let year = parse_number(&caps[1], raw)?;
            let week = parse_number(&caps[2], raw)?;
            NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(|| invalid(raw))?;
            return Ok(Period::Week { year, week });
        }

        if let Some(caps) = DAY_REGEX.captures(raw) {
            let year = parse_number(&caps[1], raw)?;
            let month = parse_number(&caps[2], raw)?;
            let day = parse_number(&caps[3], raw)?;
            let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid(raw))?;
            return Ok(Period::Day(date));
        }

        Err(invalid(raw))
    }
}

fn parse_number<T: FromStr>(digits: &str, raw: &str) -> Result<T, CoreError> {
    digits.parse::<T>().map_err(|_| invalid(raw))
}

fn invalid(raw: &str) -> CoreError {
    CoreError::InvalidPeriodFormat(raw.to_string())
}

/// A half-open date range `[from, to)`.
///
/// Only the range calculator produces these; `from` is always strictly before
/// `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}
