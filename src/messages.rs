//! messages.rs
//!
//! Localized text for the calculator. A [`Locale`] resolves once to a
//! [`Messages`] bundle of `printf`-style templates; the blurb functions pick
//! the right template for a [`DateSpan`] and expand it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{FormatError, ParseError};
use crate::format::{Arg, sprintf};
use crate::span::DateSpan;

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
}

impl Locale {
    /// Language key, also used as the image directory name.
    pub fn key(self) -> &'static str {
        match self {
            Locale::En => "en",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
        }
    }
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            other => Err(ParseError::UnknownLocale(other.to_owned())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Every string the calculator shows, for one language.
#[derive(Debug)]
pub struct Messages {
    pub section_title: &'static str,
    pub prompt: &'static str,
    /// January first.
    pub months: [&'static str; 12],

    pub result_invalid: &'static str,
    pub result_1_day: &'static str,
    pub result_days_format: &'static str,

    pub result_months_format: &'static str,
    pub result_months_and_1_day_format: &'static str,
    pub result_months_and_days_format: &'static str,
    pub result_1_month_and_1_day: &'static str,
    pub result_1_month_days_format: &'static str,
    pub result_1_year: &'static str,
    pub result_1_year_and_1_day: &'static str,
    pub result_1_year_and_1_month: &'static str,
    pub result_1_year_1_month_and_1_day: &'static str,
    pub result_1_year_days_format: &'static str,
    pub result_years_format: &'static str,
    pub result_years_months_format: &'static str,
    pub result_years_months_and_1_day_format: &'static str,
    pub result_years_and_1_month_format: &'static str,
    pub result_years_and_1_day_format: &'static str,
    pub result_years_and_days_format: &'static str,
    pub result_years_1_month_and_days_format: &'static str,
    pub result_years_months_and_days_format: &'static str,
}

pub static EN: Messages = Messages {
    section_title: "NA Cleantime Calculator",
    prompt: "Please enter your Clean Date",
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],

    result_invalid: "Please select a valid cleandate!",
    result_1_day: "You have been clean for 1 day!",
    result_days_format: "You have been clean for %d days!",

    result_months_format: "This is %d months.",
    result_months_and_1_day_format: "This is %d months and 1 day.",
    result_months_and_days_format: "This is %d months and %d days.",
    result_1_month_and_1_day: "This is 1 month and 1 day.",
    result_1_month_days_format: "This is 1 month and %d days.",
    result_1_year: "This is 1 year.",
    result_1_year_and_1_day: "This is 1 year and 1 day.",
    result_1_year_and_1_month: "This is 1 year and 1 month.",
    result_1_year_1_month_and_1_day: "This is 1 year, 1 month and 1 day.",
    result_1_year_days_format: "This is 1 year and %d days.",
    result_years_format: "This is %d years.",
    result_years_months_format: "This is %d years and %d months.",
    result_years_months_and_1_day_format: "This is %d years, %d months and 1 day.",
    result_years_and_1_month_format: "This is %d years and 1 month.",
    result_years_and_1_day_format: "This is %d years and 1 day.",
    result_years_and_days_format: "This is %d years and %d days.",
    result_years_1_month_and_days_format: "This is %d years, 1 month and %d days.",
    result_years_months_and_days_format: "This is %d years, %d months and %d days.",
};

impl Messages {
    /// Month name for a 1-based month number.
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.months.get(index).copied()
    }

    /// The first line of a result: total days, or the invalid-date prompt.
    pub fn days_blurb(&self, span: &DateSpan) -> Result<String, FormatError> {
        match span.total_days {
            n if n < 1 => Ok(self.result_invalid.to_owned()),
            1 => Ok(self.result_1_day.to_owned()),
            n => sprintf(self.result_days_format, &[Arg::Int(n)]),
        }
    }

    /// The second line: years, months and days. Only shown past 90 days;
    /// `None` when there is nothing to add.
    pub fn main_blurb(&self, span: &DateSpan) -> Result<Option<String>, FormatError> {
        if span.total_days <= 90 {
            return Ok(None);
        }

        let (y, m, d) = (span.years, span.months, span.days);
        let (template, args): (&str, Vec<Arg<'_>>) = if y > 0 {
            match (y, m, d) {
                (1, 0, 0) => (self.result_1_year, vec![]),
                (1, 1, 0) => (self.result_1_year_and_1_month, vec![]),
                (1, 1, 1) => (self.result_1_year_1_month_and_1_day, vec![]),
                (1, 0, 1) => (self.result_1_year_and_1_day, vec![]),
                (1, 0, d) if d > 1 => (self.result_1_year_days_format, vec![d.into()]),
                (y, 0, 0) => (self.result_years_format, vec![y.into()]),
                (y, 1, 0) => (self.result_years_and_1_month_format, vec![y.into()]),
                (y, 0, 1) => (self.result_years_and_1_day_format, vec![y.into()]),
                (y, 1, d) => (self.result_years_1_month_and_days_format, vec![y.into(), d.into()]),
                (y, m, 1) => (self.result_years_months_and_1_day_format, vec![y.into(), m.into()]),
                (y, m, 0) => (self.result_years_months_format, vec![y.into(), m.into()]),
                (y, 0, d) => (self.result_years_and_days_format, vec![y.into(), d.into()]),
                (y, m, d) => (
                    self.result_years_months_and_days_format,
                    vec![y.into(), m.into(), d.into()],
                ),
            }
        } else {
            match (m, d) {
                (1, 1) => (self.result_1_month_and_1_day, vec![]),
                (1, d) if d > 1 => (self.result_1_month_days_format, vec![d.into()]),
                (m, d) if m > 1 && d > 1 => {
                    (self.result_months_and_days_format, vec![m.into(), d.into()])
                }
                (m, 1) if m > 1 => (self.result_months_and_1_day_format, vec![m.into()]),
                (m, 0) if m > 1 => (self.result_months_format, vec![m.into()]),
                _ => return Ok(None),
            }
        };

        sprintf(template, &args).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(total_days: i64, years: i32, months: i32, days: i32) -> DateSpan {
        DateSpan {
            total_days,
            years,
            months,
            days,
        }
    }

    #[test]
    fn days_line() {
        let m = Locale::En.messages();
        assert_eq!(
            m.days_blurb(&DateSpan::ZERO).unwrap(),
            "Please select a valid cleandate!"
        );
        assert_eq!(
            m.days_blurb(&span(1, 0, 0, 1)).unwrap(),
            "You have been clean for 1 day!"
        );
        assert_eq!(
            m.days_blurb(&span(45, 0, 1, 14)).unwrap(),
            "You have been clean for 45 days!"
        );
    }

    #[test]
    fn no_main_line_until_ninety_one_days() {
        let m = Locale::En.messages();
        assert_eq!(m.main_blurb(&span(90, 0, 2, 29)).unwrap(), None);
        assert_eq!(
            m.main_blurb(&span(91, 0, 3, 0)).unwrap().as_deref(),
            Some("This is 3 months.")
        );
    }

    #[test]
    fn under_a_year() {
        let m = Locale::En.messages();
        let text = |s| m.main_blurb(&s).unwrap();
        assert_eq!(
            text(span(120, 0, 3, 1)).as_deref(),
            Some("This is 3 months and 1 day.")
        );
        assert_eq!(
            text(span(150, 0, 4, 28)).as_deref(),
            Some("This is 4 months and 28 days.")
        );
    }

    #[test]
    fn one_year_variants() {
        let m = Locale::En.messages();
        let text = |y, mo, d| m.main_blurb(&span(400, y, mo, d)).unwrap().unwrap();
        assert_eq!(text(1, 0, 0), "This is 1 year.");
        assert_eq!(text(1, 1, 0), "This is 1 year and 1 month.");
        assert_eq!(text(1, 1, 1), "This is 1 year, 1 month and 1 day.");
        assert_eq!(text(1, 0, 1), "This is 1 year and 1 day.");
        assert_eq!(text(1, 0, 12), "This is 1 year and 12 days.");
        assert_eq!(text(1, 5, 3), "This is 1 years, 5 months and 3 days.");
    }

    #[test]
    fn several_years() {
        let m = Locale::En.messages();
        let text = |y, mo, d| m.main_blurb(&span(5000, y, mo, d)).unwrap().unwrap();
        assert_eq!(text(13, 0, 0), "This is 13 years.");
        assert_eq!(text(13, 1, 0), "This is 13 years and 1 month.");
        assert_eq!(text(13, 0, 1), "This is 13 years and 1 day.");
        assert_eq!(text(13, 1, 9), "This is 13 years, 1 month and 9 days.");
        assert_eq!(text(13, 7, 1), "This is 13 years, 7 months and 1 day.");
        assert_eq!(text(13, 7, 0), "This is 13 years and 7 months.");
        assert_eq!(text(13, 0, 9), "This is 13 years and 9 days.");
        assert_eq!(text(13, 7, 9), "This is 13 years, 7 months and 9 days.");
    }

    #[test]
    fn locale_lookup() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!(matches!(
            "xx".parse::<Locale>(),
            Err(ParseError::UnknownLocale(_))
        ));
        assert_eq!(Locale::En.messages().month_name(2), Some("February"));
        assert_eq!(Locale::En.messages().month_name(0), None);
        assert_eq!(Locale::En.messages().month_name(13), None);
    }
}
