use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, saved ordered list of card references.
///
/// The fixed leading "I want" slot is not stored; it is re-derived when the
/// preset is loaded into the sentence strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentencePreset {
    pub id: String,
    pub name: String,
    pub cards: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl SentencePreset {
    pub fn new(id: String, name: String, cards: Vec<String>) -> Self {
        Self {
            id,
            name,
            cards,
            created_at: Utc::now(),
        }
    }
}
