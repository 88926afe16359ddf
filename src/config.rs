use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::Parser;
use clap::builder::FalseyValueParser;

use cleantime::{CalculatorOptions, DateInput, Layout, Locale, Theme};

/// Computes cleantime since a clean date and the keytags earned so far.
#[derive(Debug, Parser)]
#[command(name = "cleantime", version, about)]
pub struct Cli {
    /// Clean date, as YYYY-MM-DD
    #[arg(env = "CLEANTIME_DATE")]
    pub date: DateInput,

    /// Compute as of this date instead of now, as YYYY-MM-DD
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Message language
    #[arg(long, env = "CLEANTIME_LANG", default_value = "en")]
    pub lang: Locale,

    /// Keytag layout: linear or tabular
    #[arg(long, env = "CLEANTIME_LAYOUT", default_value = "linear")]
    pub layout: Layout,

    /// Include decade, 25-year, 30-year and 10,000-day keytags
    #[arg(
        long,
        env = "CLEANTIME_SPECIAL_TAGS",
        value_parser = FalseyValueParser::new()
    )]
    pub special_tags: bool,

    /// SVG colour theme: dark or light
    #[arg(long, env = "CLEANTIME_THEME", default_value = "dark")]
    pub theme: Theme,

    /// Directory containing the images/ tree referenced by keytags
    #[arg(long, env = "CLEANTIME_IMAGE_ROOT")]
    pub image_root: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write an SVG rendering to this path
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn calculator_options(&self) -> CalculatorOptions {
        CalculatorOptions {
            locale: self.lang,
            layout: self.layout,
            special_tags: self.special_tags,
            image_root: self.image_root.clone(),
        }
    }

    /// Reference instant: noon of `--today` if given, otherwise the local
    /// wall clock.
    pub fn now(&self) -> NaiveDateTime {
        self.today
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap_or_else(|| Local::now().naive_local())
    }
}
