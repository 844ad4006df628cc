//! Default-card identity resolution.
//!
//! The manifest's id scheme evolved; cards bootstrapped under the old scheme
//! must keep matching. Resolution is an explicit ordered list of candidate
//! ids evaluated in priority order, canonical first.

use chrono::Utc;

use crate::models::{Card, CardImage, Category};

/// Canonical default-card ids paired with the id an earlier manifest
/// revision used for the same card.
const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("default-wants-iwant", "default-iwant"),
    ("default-wants-idontwant", "default-idontwant"),
];

/// Ids that may refer to the leading "I want" card, in lookup order.
pub const I_WANT_CHAIN: &[&str] = &["default-wants-iwant", "default-iwant"];

/// All ids under which a manifest entry may already exist in the
/// collection: the id itself, then any legacy alias recorded for it.
pub fn id_candidates(id: &str) -> Vec<&str> {
    let mut candidates = vec![id];
    for (canonical, legacy) in LEGACY_ALIASES {
        if *canonical == id {
            candidates.push(legacy);
        }
    }
    candidates
}

/// Synthesized "I want" card used when no bootstrapped card exists.
///
/// Guarantees the sentence strip always has a leading element, even before
/// the first successful bootstrap.
pub fn fallback_i_want_card() -> Card {
    Card {
        id: "default-wants-iwant".to_string(),
        category: Category::Wants,
        image: CardImage::File("i_want.png".to_string()),
        text_en: "I want".to_string(),
        text_vi: "Tôi muốn".to_string(),
        is_default: true,
        created_at: Utc::now(),
    }
}
