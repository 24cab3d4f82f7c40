use serde::{Deserialize, Serialize};

/// Display language, which also decides the decimal separator shown to the
/// user. Input accepts both separators regardless of locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Self::En => '.',
            Self::Fr => ',',
        }
    }
}
