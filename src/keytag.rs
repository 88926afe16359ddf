//! keytag.rs
//!
//! Milestone keytags and the table that decides which ones a given span
//! has earned. Tags accumulate: a year of cleantime carries every tag
//! awarded before it, in the order they are handed out.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::layout::Layout;

/// One milestone keytag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keytag {
    /// Just for today.
    White,
    Orange,
    Green,
    Red,
    SixMonth,
    NineMonth,
    OneYear,
    EighteenMonth,
    TwoYear,
    /// Generic multi-year tag, carrying the year it stands for.
    Years(u32),
    Decade,
    TwentyFiveYear,
    ThirtyYearMultiple,
    TenThousandDay,
}

impl Keytag {
    /// Stable identifier used in text and JSON output.
    pub fn token(&self) -> Cow<'static, str> {
        match self {
            Self::White => "white".into(),
            Self::Orange => "orange".into(),
            Self::Green => "green".into(),
            Self::Red => "red".into(),
            Self::SixMonth => "6-month".into(),
            Self::NineMonth => "9-month".into(),
            Self::OneYear => "1-year".into(),
            Self::EighteenMonth => "18-month".into(),
            Self::TwoYear => "2-year".into(),
            Self::Years(n) => format!("year-{n}").into(),
            Self::Decade => "decade".into(),
            Self::TwentyFiveYear => "25-year".into(),
            Self::ThirtyYearMultiple => "30-year-multiple".into(),
            Self::TenThousandDay => "10000-day".into(),
        }
    }

    /// Caption printed on the tag.
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            Self::White => "Welcome".into(),
            Self::Orange => "30 Days".into(),
            Self::Green => "60 Days".into(),
            Self::Red => "90 Days".into(),
            Self::SixMonth => "6 Months".into(),
            Self::NineMonth => "9 Months".into(),
            Self::OneYear => "1 Year".into(),
            Self::EighteenMonth => "18 Months".into(),
            Self::TwoYear => "2 Years".into(),
            Self::Years(n) => format!("{n} Years").into(),
            Self::Decade => "Decade".into(),
            Self::TwentyFiveYear => "25 Years".into(),
            Self::ThirtyYearMultiple => "30+ Years".into(),
            Self::TenThousandDay => "10,000 Days".into(),
        }
    }

    /// Fill colour used when drawing the tag.
    pub fn colour(&self) -> &'static str {
        match self {
            Self::White => "#f5f5f5",
            Self::Orange => "#f28c28",
            Self::Green => "#2e8b57",
            Self::Red => "#c62828",
            Self::SixMonth => "#1e63b5",
            Self::NineMonth => "#f2c200",
            Self::OneYear => "#c8f7b0",
            Self::EighteenMonth => "#8c8c8c",
            Self::TwoYear | Self::Years(_) => "#1a1a1a",
            Self::Decade => "#6b6b73",
            Self::TwentyFiveYear => "#c0c0c0",
            Self::TenThousandDay => "#d4af37",
            Self::ThirtyYearMultiple => "#7b3fa0",
        }
    }

    /// Number used in the tag's image file name.
    pub fn image_code(&self) -> &'static str {
        match self {
            Self::White => "01",
            Self::Orange => "02",
            Self::Green => "03",
            Self::Red => "04",
            Self::SixMonth => "05",
            Self::NineMonth => "06",
            Self::OneYear => "07",
            Self::EighteenMonth => "08",
            Self::TwoYear | Self::Years(_) => "09",
            Self::Decade => "10",
            Self::TwentyFiveYear => "12",
            Self::TenThousandDay => "13",
            Self::ThirtyYearMultiple => "14",
        }
    }

    /// Relative path of the tag image, e.g. `images/en/02_Front.png`.
    ///
    /// `face` selects the logo side of the tag.
    pub fn image_path(&self, root: Option<&str>, lang: &str, face: bool) -> String {
        let prefix = match root.map(|r| r.trim_end_matches('/')) {
            Some(r) if !r.is_empty() => format!("{r}/"),
            _ => String::new(),
        };
        let suffix = if face { "_Front" } else { "" };
        format!("{prefix}images/{lang}/{}{suffix}.png", self.image_code())
    }

    /// Whether the top of the ring is drawn closed. The white tag always is.
    pub fn closed_ring(&self, layout: Layout) -> bool {
        matches!(self, Self::White) || layout == Layout::Tabular
    }
}

impl fmt::Display for Keytag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl Serialize for Keytag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.token())
    }
}

/// Picks every keytag earned by `total_days` / `total_months`, in the order
/// they are awarded.
///
/// `include_extended` enables the decade, 25-year, 30-year and 10,000-day
/// tags. Negative or zero counts produce an empty list.
pub fn select_milestones(
    total_days: i64,
    total_months: i64,
    include_extended: bool,
) -> Vec<Keytag> {
    let mut tags = Vec::new();

    if total_days > 0 {
        tags.push(Keytag::White);
    }
    if total_days > 29 {
        tags.push(Keytag::Orange);
    }
    if total_days > 59 {
        tags.push(Keytag::Green);
    }
    if total_days > 89 {
        tags.push(Keytag::Red);
    }

    // Months only start counting past 90 days.
    if total_days > 90 {
        if total_months > 5 {
            tags.push(Keytag::SixMonth);
        }
        if total_months > 8 {
            tags.push(Keytag::NineMonth);
        }
        if total_months > 11 {
            tags.push(Keytag::OneYear);
        }
        if total_months > 17 {
            tags.push(Keytag::EighteenMonth);
        }
        if total_months > 23 {
            tags.push(Keytag::TwoYear);
        }

        let remaining = total_months.saturating_sub(12);
        let mut step = 24;
        while step <= remaining {
            tags.push(yearly_tag(step, include_extended));

            if include_extended && step == 324 && total_days > 9999 {
                tags.push(Keytag::TenThousandDay);
            }

            step += 12;
        }
    }

    debug!(
        total_days,
        total_months,
        include_extended,
        count = tags.len(),
        "selected keytags"
    );
    tags
}

/// The tag handed out at one step of the yearly loop. Each step of 12 past
/// the 24 mark is one more year beyond the second.
fn yearly_tag(step: i64, include_extended: bool) -> Keytag {
    if include_extended {
        if step == 120 {
            return Keytag::Decade;
        }
        if step == 300 {
            return Keytag::TwentyFiveYear;
        }
        if step % 360 == 0 {
            return Keytag::ThirtyYearMultiple;
        }
    }
    let year = u32::try_from(step / 12 + 1).unwrap_or(u32::MAX);
    Keytag::Years(year)
}
