//! Display language and localized strings

use serde::{Deserialize, Serialize};

/// Display language of the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    /// French is what visitors see first
    #[default]
    Fr,
}

impl Locale {
    /// The other language
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Fr,
            Locale::Fr => Locale::En,
        }
    }

    /// Flag shown on the toggle, pointing at the language you switch to
    pub fn toggle_flag(self) -> &'static str {
        match self {
            Locale::En => "FR",
            Locale::Fr => "EN",
        }
    }
}

/// A string available in both languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub fr: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, fr: &'static str) -> Self {
        Self { en, fr }
    }

    /// Same text in both languages
    pub const fn same(text: &'static str) -> Self {
        Self { en: text, fr: text }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Fr => self.fr,
        }
    }
}
