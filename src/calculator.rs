//! The per-instance calculator state and the report it produces.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::FormatError;
use crate::keytag::{Keytag, select_milestones};
use crate::layout::Layout;
use crate::messages::{Locale, Messages};
use crate::span::{DateInput, DateSpan, span_since};

/// Display options fixed when a calculator is set up.
#[derive(Debug, Clone, Default)]
pub struct CalculatorOptions {
    pub locale: Locale,
    pub layout: Layout,
    /// Show the decade, 25-year, 30-year and 10,000-day tags.
    pub special_tags: bool,
    /// Directory the `images/` tree lives under.
    pub image_root: Option<String>,
}

/// A configured calculator. Build once, then call [`Calculator::calculate`]
/// for each date the user picks.
#[derive(Debug)]
pub struct Calculator {
    options: CalculatorOptions,
    messages: &'static Messages,
}

/// Everything needed to present one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub clean_date: DateInput,
    pub valid: bool,
    pub span: DateSpan,
    pub total_months: i64,
    pub days_blurb: String,
    pub main_blurb: Option<String>,
    pub keytags: Vec<Keytag>,
}

impl Calculator {
    pub fn new(options: CalculatorOptions) -> Self {
        let messages = options.locale.messages();
        Self { options, messages }
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    /// Runs the calculation for `clean_date` as of `now`.
    ///
    /// Impossible or future dates produce an invalid report carrying the
    /// "select a valid date" text and no keytags.
    pub fn calculate(
        &self,
        clean_date: DateInput,
        now: NaiveDateTime,
    ) -> Result<Report, FormatError> {
        let span = span_since(clean_date, now);
        let valid = span.total_days > 0;
        let total_months = span.total_months();

        let keytags = if valid {
            select_milestones(span.total_days, total_months, self.options.special_tags)
        } else {
            debug!(%clean_date, %now, "no cleantime for date");
            Vec::new()
        };

        let report = Report {
            clean_date,
            valid,
            span,
            total_months,
            days_blurb: self.messages.days_blurb(&span)?,
            main_blurb: self.messages.main_blurb(&span)?,
            keytags,
        };

        info!(
            %clean_date,
            total_days = span.total_days,
            keytags = report.keytags.len(),
            "calculated cleantime"
        );
        Ok(report)
    }

    /// Image paths for the report's keytags, in display order.
    pub fn keytag_images(&self, report: &Report) -> Vec<String> {
        let face = self.options.layout.shows_face();
        report
            .keytags
            .iter()
            .map(|tag| {
                tag.image_path(
                    self.options.image_root.as_deref(),
                    self.options.locale.key(),
                    face,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn valid_report() {
        let calc = Calculator::new(CalculatorOptions::default());
        let report = calc.calculate(DateInput::new(2023, 1, 15), now()).unwrap();

        assert!(report.valid);
        assert_eq!(report.span.years, 1);
        assert_eq!(report.span.months, 4);
        assert_eq!(report.span.days, 17);
        assert_eq!(report.total_months, 16);
        assert_eq!(report.days_blurb, "You have been clean for 503 days!");
        assert_eq!(
            report.main_blurb.as_deref(),
            Some("This is 1 years, 4 months and 17 days.")
        );
        assert_eq!(report.keytags.len(), 7);
    }

    #[test]
    fn future_date_is_invalid() {
        let calc = Calculator::new(CalculatorOptions::default());
        let report = calc.calculate(DateInput::new(2025, 1, 1), now()).unwrap();

        assert!(!report.valid);
        assert_eq!(report.span, DateSpan::ZERO);
        assert_eq!(report.days_blurb, "Please select a valid cleandate!");
        assert_eq!(report.main_blurb, None);
        assert!(report.keytags.is_empty());
    }

    #[test]
    fn impossible_date_is_invalid() {
        let calc = Calculator::new(CalculatorOptions::default());
        let report = calc.calculate(DateInput::new(2023, 2, 30), now()).unwrap();
        assert!(!report.valid);
        assert!(report.keytags.is_empty());
    }

    #[test]
    fn same_day_is_invalid() {
        let calc = Calculator::new(CalculatorOptions::default());
        let report = calc.calculate(DateInput::new(2024, 6, 1), now()).unwrap();
        assert!(!report.valid);
    }

    #[test]
    fn special_tags_option() {
        let date = DateInput::new(1990, 1, 1);
        let plain = Calculator::new(CalculatorOptions::default());
        let special = Calculator::new(CalculatorOptions {
            special_tags: true,
            ..CalculatorOptions::default()
        });

        let plain = plain.calculate(date, now()).unwrap();
        let special = special.calculate(date, now()).unwrap();
        assert!(!plain.keytags.contains(&Keytag::Decade));
        assert!(special.keytags.contains(&Keytag::Decade));
        assert!(special.keytags.contains(&Keytag::TwentyFiveYear));
        assert!(special.keytags.contains(&Keytag::TenThousandDay));
    }

    #[test]
    fn image_paths_follow_layout() {
        let calc = Calculator::new(CalculatorOptions {
            layout: Layout::Tabular,
            image_root: Some("static".into()),
            ..CalculatorOptions::default()
        });
        let report = calc.calculate(DateInput::new(2024, 4, 1), now()).unwrap();
        assert_eq!(
            calc.keytag_images(&report),
            vec![
                "static/images/en/01_Front.png",
                "static/images/en/02_Front.png",
                "static/images/en/03_Front.png",
            ]
        );
    }

    #[test]
    fn report_serializes() {
        let calc = Calculator::new(CalculatorOptions::default());
        let report = calc.calculate(DateInput::new(2024, 5, 1), now()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["span"]["totalDays"], 31);
        assert_eq!(json["keytags"], serde_json::json!(["white", "orange"]));
        assert_eq!(json["cleanDate"]["year"], 2024);
    }
}
