//! span.rs
//!
//! Elapsed time between a clean date and "now", both as a whole number of
//! days and as a calendar breakdown:
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff, so the
//! calendar-aware borrowing rules are implemented here:
//!   • day underflow borrows the length of the start month
//!   • month underflow borrows from years
//!   • leap years and varying month lengths are respected

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ParseError;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A `(year, month, day)` triple as picked by the user.
///
/// No validation happens at construction; an impossible date (e.g. February
/// 30th) simply yields an empty span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateInput {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Midnight at the start of the given day, or `None` if the triple is not
    /// a real calendar date.
    pub fn start_of_day(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateInput {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`. Only the shape and numeric ranges are checked,
    /// not whether the day exists in that month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split('-').collect();
        let &[year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidDateFormat(trimmed.to_owned()));
        };

        let number = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| ParseError::InvalidDateFormat(trimmed.to_owned()))
        };

        let year = i32::try_from(number(year)?)
            .map_err(|_| ParseError::InvalidDateFormat(trimmed.to_owned()))?;
        let month = number(month)?;
        let day = number(day)?;

        if !(1..=12).contains(&month) {
            return Err(ParseError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(ParseError::InvalidDay(day));
        }

        Ok(Self::new(year, month, day))
    }
}

/// Result of one cleantime calculation.
///
/// The all-zero value doubles as the "no valid date" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateSpan {
    pub total_days: i64,
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl DateSpan {
    pub const ZERO: Self = Self {
        total_days: 0,
        years: 0,
        months: 0,
        days: 0,
    };

    /// `years * 12 + months`, the month count the keytag table works on.
    pub fn total_months(&self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Computes the span from `from` to `now`.
///
/// Returns [`DateSpan::ZERO`] unless `now` is strictly after `from`.
pub fn compute_date_span(from: NaiveDateTime, now: NaiveDateTime) -> DateSpan {
    if now <= from {
        return DateSpan::ZERO;
    }

    let total_days = (now - from).num_milliseconds().div_euclid(MILLIS_PER_DAY);

    let mut years = now.year() - from.year();
    let mut months = now.month() as i32 - from.month() as i32;
    let mut days = now.day() as i32 - from.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Borrow the length of the start month (28–31 depending on month & leap year)
        days += days_in_month(from.year(), from.month()) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let span = DateSpan {
        total_days,
        years,
        months,
        days,
    };
    trace!(%from, %now, ?span, "computed date span");
    span
}

/// Span from the start of `input`'s day to `now`; impossible dates give the
/// zero span.
pub fn span_since(input: DateInput, now: NaiveDateTime) -> DateSpan {
    match input.start_of_day() {
        Some(from) => compute_date_span(from, now),
        None => {
            trace!(%input, "not a calendar date");
            DateSpan::ZERO
        }
    }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
