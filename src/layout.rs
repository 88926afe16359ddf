use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

/// How the keytag strip is arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One row of tags hanging off a shared ring, back side showing.
    #[default]
    Linear,
    /// A grid of separate tags, logo side showing.
    Tabular,
}

impl Layout {
    /// Tabular layouts show the logo side of each tag.
    pub fn shows_face(self) -> bool {
        self == Layout::Tabular
    }
}

impl FromStr for Layout {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Layout::Linear),
            "tabular" => Ok(Layout::Tabular),
            other => Err(ParseError::UnknownLayout(other.to_owned())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Linear => f.write_str("linear"),
            Layout::Tabular => f.write_str("tabular"),
        }
    }
}
