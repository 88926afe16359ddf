use thiserror::Error;

/// Errors from turning user-supplied text into calculator inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty date string")]
    EmptyInput,
    #[error("invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),
    #[error("invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),
    #[error("invalid day: {0} (must be 1-31)")]
    InvalidDay(u32),
    #[error("unknown language: {0}")]
    UnknownLocale(String),
    #[error("unknown keytag layout: {0} (expected linear or tabular)")]
    UnknownLayout(String),
    #[error("unknown theme: {0} (expected dark or light)")]
    UnknownTheme(String),
}

/// Errors from expanding a message template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("too few arguments for template directive {0}")]
    TooFewArguments(usize),
    #[error("directive %{directive} expects a number")]
    ExpectedNumber { directive: char },
    #[error("unsupported directive in template: {0}")]
    UnsupportedDirective(String),
}
