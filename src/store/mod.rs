//! Card and sentence-preset store.
//!
//! Single source of truth for the durable collections. The store owns the
//! in-memory card and preset lists plus the database handle; every mutation
//! validates, applies, and persists the whole collection synchronously. One
//! instance per session, passed explicitly to whoever needs it.

use chrono::Utc;

use crate::assets::ResolveImage;
use crate::db::{self, Database};
use crate::error::AppError;
use crate::models::{Card, CardImage, Category, DefaultCardManifest, SentencePreset};

/// Explicit ordered id-resolution strategies for default cards.
pub mod identity;

#[cfg(test)]
mod tests;

/// The board's card and preset collections.
pub struct BoardStore {
    db: Database,
    cards: Vec<Card>,
    presets: Vec<SentencePreset>,
}

impl BoardStore {
    /// Load both collections from the database.
    ///
    /// Absent or corrupt entries load as empty collections; opening a fresh
    /// database yields an empty board, not an error.
    pub fn open(db: Database) -> Result<Self, AppError> {
        let cards = db.read_collection(db::CARDS_KEY)?;
        let presets = db.read_collection(db::PRESETS_KEY)?;
        Ok(Self { db, cards, presets })
    }

    /// All cards, in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// All saved presets, in insertion order.
    pub fn presets(&self) -> &[SentencePreset] {
        &self.presets
    }

    /// Point lookup by card id.
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Cards in one category, preserving insertion order. Empty is a valid
    /// result.
    pub fn cards_by_category(&self, category: Category) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|card| card.category == category)
            .collect()
    }

    /// Create a user card from a cropped PNG and bilingual labels.
    ///
    /// # Errors
    /// `Validation` when the English label or the image is missing; storage
    /// errors from persisting.
    pub fn create_card(
        &mut self,
        category: Category,
        png_bytes: Vec<u8>,
        text_en: &str,
        text_vi: &str,
    ) -> Result<Card, AppError> {
        if text_en.trim().is_empty() {
            return Err(AppError::Validation("card text is required".to_string()));
        }
        if png_bytes.is_empty() {
            return Err(AppError::Validation("card image is required".to_string()));
        }

        let id = fresh_id(|id| self.cards.iter().any(|card| card.id == id));
        let card = Card::new(id, category, CardImage::Embedded(png_bytes), text_en, text_vi);
        self.cards.push(card.clone());
        self.persist_cards()?;

        tracing::debug!("created card {} in {}", card.id, card.category);
        Ok(card)
    }

    /// Update a user card's labels and, when new bytes are supplied, its
    /// image.
    ///
    /// # Errors
    /// `PermissionDenied` for default cards (collection untouched),
    /// `NotFound` for unknown ids, `Validation` for an empty English label.
    pub fn update_card(
        &mut self,
        id: &str,
        text_en: &str,
        text_vi: &str,
        png_bytes: Option<Vec<u8>>,
    ) -> Result<Card, AppError> {
        let index = self
            .cards
            .iter()
            .position(|card| card.id == id)
            .ok_or(AppError::NotFound)?;

        if self.cards[index].is_default {
            return Err(AppError::PermissionDenied(
                "default cards cannot be edited".to_string(),
            ));
        }
        if text_en.trim().is_empty() {
            return Err(AppError::Validation("card text is required".to_string()));
        }

        let card = &mut self.cards[index];
        card.text_en = text_en.trim().to_string();
        card.text_vi = match text_vi.trim() {
            "" => card.text_en.clone(),
            vi => vi.to_string(),
        };
        if let Some(bytes) = png_bytes {
            card.image = CardImage::Embedded(bytes);
        }

        let updated = card.clone();
        self.persist_cards()?;
        Ok(updated)
    }

    /// Merge default cards from the manifest into the collection.
    ///
    /// Entries already present (under their canonical id or a legacy alias)
    /// are skipped. Entries whose image does not resolve are skipped softly
    /// and retried on the next bootstrap. The merged collection is persisted
    /// only when something was added, so repeated calls with the same inputs
    /// settle to a no-op.
    ///
    /// # Returns
    /// The number of cards added.
    pub fn bootstrap_defaults(
        &mut self,
        manifest: &DefaultCardManifest,
        resolver: &dyn ResolveImage,
    ) -> Result<usize, AppError> {
        let mut added = 0usize;
        let mut skipped = 0usize;

        for entry in &manifest.cards {
            let exists = identity::id_candidates(&entry.id)
                .into_iter()
                .any(|candidate| self.card(candidate).is_some());
            if exists {
                continue;
            }

            match resolver.resolve(&entry.image_filename) {
                Ok(_) => {
                    self.cards.push(Card {
                        id: entry.id.clone(),
                        category: entry.category,
                        image: CardImage::File(entry.image_filename.clone()),
                        text_en: entry.text_en.clone(),
                        text_vi: entry.text_vi.clone(),
                        is_default: true,
                        created_at: Utc::now(),
                    });
                    added += 1;
                }
                Err(err) => {
                    // Not a permanent failure: the image may appear later.
                    tracing::debug!("default card {} skipped: {err}", entry.id);
                    skipped += 1;
                }
            }
        }

        if added > 0 {
            self.persist_cards()?;
            tracing::info!("bootstrapped {added} default cards ({skipped} skipped)");
        }
        Ok(added)
    }

    /// The card shown in the fixed leading sentence slot.
    ///
    /// Tries the canonical id, then the legacy id, then synthesizes the
    /// hard-coded fallback so the strip always has a leading element.
    pub fn i_want_card(&self) -> Card {
        for id in identity::I_WANT_CHAIN {
            if let Some(card) = self.card(id) {
                return card.clone();
            }
        }
        identity::fallback_i_want_card()
    }

    /// Save the current sentence arrangement under a name.
    ///
    /// The fixed leading slot is not part of `card_ids`.
    ///
    /// # Errors
    /// `Validation` when the name or the arrangement is empty.
    pub fn save_preset(
        &mut self,
        name: &str,
        card_ids: Vec<String>,
    ) -> Result<SentencePreset, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("preset name is required".to_string()));
        }
        if card_ids.is_empty() {
            return Err(AppError::Validation(
                "a sentence needs at least one card".to_string(),
            ));
        }

        let id = fresh_id(|id| self.presets.iter().any(|preset| preset.id == id));
        let preset = SentencePreset::new(id, name.trim().to_string(), card_ids);
        self.presets.push(preset.clone());
        self.persist_presets()?;
        Ok(preset)
    }

    /// Resolve a preset's card references against the current collection.
    ///
    /// Ids that no longer resolve are dropped silently; a stale reference is
    /// graceful degradation, not an error.
    pub fn resolve_preset(&self, preset: &SentencePreset) -> Vec<&Card> {
        preset
            .cards
            .iter()
            .filter_map(|id| {
                let card = self.card(id);
                if card.is_none() {
                    tracing::debug!("preset {}: dropping stale card id {id}", preset.id);
                }
                card
            })
            .collect()
    }

    /// Default name offered when saving a sentence.
    pub fn suggested_preset_name(&self) -> String {
        format!("Sentence {}", self.presets.len() + 1)
    }

    fn persist_cards(&self) -> Result<(), AppError> {
        self.db.write_collection(db::CARDS_KEY, &self.cards)
    }

    fn persist_presets(&self) -> Result<(), AppError> {
        self.db.write_collection(db::PRESETS_KEY, &self.presets)
    }
}

/// Fresh timestamp-derived id, nudged forward past any id already in use so
/// same-millisecond creations stay unique.
fn fresh_id(taken: impl Fn(&str) -> bool) -> String {
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let candidate = millis.to_string();
        if !taken(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}
