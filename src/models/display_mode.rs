//! Display mode controlling the default rendering of a contact.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How a [`Contact`](crate::Contact) renders itself by default.
///
/// Only the exact string `"masked"` selects [`DisplayMode::Masked`]; every
/// other string, including `"Masked"` and the empty string, means
/// [`DisplayMode::Show`]. Parsing therefore never fails.
///
/// The original string is not kept: `"reveal"` parses to `Show` and
/// serializes back as `"show"`. Rendering is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Render only the obfuscated name and last name.
    #[default]
    Masked,

    /// Render all four fields in clear text.
    Show,
}

impl DisplayMode {
    /// Interpret a free-form display mode string.
    pub fn parse_lenient(mode: &str) -> Self {
        if mode == "masked" {
            Self::Masked
        } else {
            Self::Show
        }
    }

    /// The canonical string for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Masked => "masked",
            Self::Show => "show",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl From<&str> for DisplayMode {
    fn from(mode: &str) -> Self {
        Self::parse_lenient(mode)
    }
}

impl From<String> for DisplayMode {
    fn from(mode: String) -> Self {
        Self::parse_lenient(&mode)
    }
}

// Serde support - serialize as the canonical string
impl Serialize for DisplayMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - any string is accepted
impl<'de> Deserialize<'de> for DisplayMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&s))
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
