//! Cleantime calculator: elapsed time since a clean date, in days and in
//! calendar years/months/days, plus the milestone keytags earned so far.

pub mod calculator;
pub mod error;
pub mod format;
pub mod keytag;
pub mod layout;
pub mod messages;
pub mod span;
pub mod svg;

pub use calculator::{Calculator, CalculatorOptions, Report};
pub use error::{FormatError, ParseError};
pub use keytag::{Keytag, select_milestones};
pub use layout::Layout;
pub use messages::{Locale, Messages};
pub use span::{DateInput, DateSpan, compute_date_span, span_since};
pub use svg::{Theme, generate_svg};
