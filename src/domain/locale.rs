use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Language variant used for headers, phrases, labels and placeholder tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Traditional Chinese
    Zh,
}

impl Locale {
    /// All supported locales in menu order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// Short code used in file names and configuration.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Parse a locale from a code or a common alias.
    pub fn from_code(value: &str) -> Option<Locale> {
        match value.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Some(Locale::En),
            "zh" | "zh-tw" | "zh-hant" | "chinese" | "中文" => Some(Locale::Zh),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| AppError::UnsupportedLocale(s.to_string()))
    }
}

impl TryFrom<String> for Locale {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
