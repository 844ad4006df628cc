//! Display languages for the bilingual board.

use serde::{Deserialize, Serialize};

/// The two languages every card and label carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    /// ISO 639-1 code used on the translation wire.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    /// The other language, for a single-button toggle.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Vi,
            Language::Vi => Language::En,
        }
    }
}
