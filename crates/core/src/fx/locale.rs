//! Number locales and digit grouping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::fx_errors::FxError;

/// Locales the price formatter knows how to group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NumberLocale {
    /// Indian numbering: the last three integer digits, then groups of two
    /// (`1,00,00,000`).
    #[default]
    EnIn,
    EnUs,
    EnGb,
}

impl NumberLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberLocale::EnIn => "en-IN",
            NumberLocale::EnUs => "en-US",
            NumberLocale::EnGb => "en-GB",
        }
    }

    pub fn group_separator(&self) -> char {
        ','
    }

    pub fn decimal_separator(&self) -> char {
        '.'
    }

    /// Inserts group separators into a run of ASCII integer digits.
    pub fn group_digits(&self, digits: &str) -> String {
        let (head_size, rest_size) = match self {
            NumberLocale::EnIn => (3, 2),
            NumberLocale::EnUs | NumberLocale::EnGb => (3, 3),
        };

        if digits.len() <= head_size {
            return digits.to_string();
        }

        let (leading, tail) = digits.split_at(digits.len() - head_size);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = leading.len();
        while end > 0 {
            let start = end.saturating_sub(rest_size);
            groups.push(&leading[start..end]);
            end = start;
        }
        groups.reverse();
        groups.push(tail);

        let separator = self.group_separator().to_string();
        groups.join(&separator)
    }
}

impl FromStr for NumberLocale {
    type Err = FxError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-in" => Ok(NumberLocale::EnIn),
            "en-us" | "en" => Ok(NumberLocale::EnUs),
            "en-gb" => Ok(NumberLocale::EnGb),
            _ => Err(FxError::UnsupportedLocale(tag.to_string())),
        }
    }
}

impl fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for NumberLocale {
    type Error = FxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NumberLocale> for String {
    fn from(locale: NumberLocale) -> Self {
        locale.as_str().to_string()
    }
}
