//! Card records and the fixed category set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lang::Language;

/// The fixed set of board categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    People,
    Actions,
    Food,
    Place,
    Things,
    Animals,
    Wants,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::People,
        Category::Actions,
        Category::Food,
        Category::Place,
        Category::Things,
        Category::Animals,
        Category::Wants,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Actions => "actions",
            Category::Food => "food",
            Category::Place => "place",
            Category::Things => "things",
            Category::Animals => "animals",
            Category::Wants => "wants",
        }
    }

    /// Display label for category tiles and titles.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Category::People, Language::En) => "People",
            (Category::People, Language::Vi) => "Người",
            (Category::Actions, Language::En) => "Actions",
            (Category::Actions, Language::Vi) => "Hành động",
            (Category::Food, Language::En) => "Food",
            (Category::Food, Language::Vi) => "Thức ăn",
            (Category::Place, Language::En) => "Place",
            (Category::Place, Language::Vi) => "Nơi chốn",
            (Category::Things, Language::En) => "Things",
            (Category::Things, Language::Vi) => "Đồ vật",
            (Category::Animals, Language::En) => "Animals",
            (Category::Animals, Language::Vi) => "Động vật",
            (Category::Wants, Language::En) => "Wants",
            (Category::Wants, Language::Vi) => "Muốn",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a card's picture lives.
///
/// User-created cards embed the PNG produced by the crop engine; default
/// cards reference a filename resolved against the external image directory.
/// The two are mutually exclusive by construction, so a default card can
/// never carry a stale embedded buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardImage {
    Embedded(Vec<u8>),
    File(String),
}

/// A single picture + bilingual-text communication unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub category: Category,
    pub image: CardImage,
    pub text_en: String,
    pub text_vi: String,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Create a new user card.
    ///
    /// An empty Vietnamese label falls back to the English one so both
    /// labels are always non-empty after creation.
    pub fn new(
        id: String,
        category: Category,
        image: CardImage,
        text_en: &str,
        text_vi: &str,
    ) -> Self {
        let text_en = text_en.trim().to_string();
        let text_vi = match text_vi.trim() {
            "" => text_en.clone(),
            vi => vi.to_string(),
        };
        Self {
            id,
            category,
            image,
            text_en,
            text_vi,
            is_default: false,
            created_at: Utc::now(),
        }
    }

    /// Label in the requested display language.
    pub fn text(&self, language: Language) -> &str {
        match language {
            Language::En => &self.text_en,
            Language::Vi => &self.text_vi,
        }
    }
}
