//! Translation collaborator and local fallback.
//!
//! Card labels are translated through a LibreTranslate-shaped service; any
//! failure falls back to a fixed word-substitution table, then to echoing
//! the input. Translation failure is never a hard error and nothing is
//! persisted until the caller explicitly saves.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::lang::Language;

/// A translation collaborator.
pub trait Translate {
    /// # Errors
    /// `ResourceUnavailable` on network failure or a non-OK response.
    fn translate(&self, text: &str, source: Language, target: Language)
        -> Result<String, AppError>;
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: Option<String>,
}

/// Client for a LibreTranslate endpoint.
pub struct LibreTranslate {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl LibreTranslate {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Translate for LibreTranslate {
    fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(String::new());
        }
        if source == target {
            return Ok(text.to_string());
        }

        let request = TranslateRequest {
            q: text,
            source: source.code(),
            target: target.code(),
            format: "text",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|err| {
                AppError::ResourceUnavailable(format!("translation request failed: {err}"))
            })?;

        if !response.status().is_success() {
            return Err(AppError::ResourceUnavailable(format!(
                "translation service returned {}",
                response.status()
            )));
        }

        let body: TranslateResponse = response.json().map_err(|err| {
            AppError::ResourceUnavailable(format!("translation response unreadable: {err}"))
        })?;

        Ok(body.translated_text.unwrap_or_else(|| text.to_string()))
    }
}

/// Fixed substitutions for common board words, used when the service is
/// unreachable.
const WORD_TABLE: &[(&str, &str)] = &[
    ("Papa", "Bố"),
    ("Mama", "Mẹ"),
    ("Teacher", "Giáo viên"),
    ("Teacher Assistant", "Trợ giảng"),
    ("Drink", "Uống"),
    ("Eat", "Ăn"),
    ("Open", "Mở"),
    ("Watch", "Xem"),
    ("Help", "Giúp"),
    ("Door", "Cửa"),
    ("Window", "Cửa sổ"),
    ("Light", "Đèn"),
    ("I want", "CON MUỐN"),
    ("I don't want", "Tôi không muốn"),
];

/// Translate via the local table; unknown words pass through unchanged.
pub fn fallback_translate(text: &str, target: Language) -> String {
    if target == Language::En {
        return text.to_string();
    }
    WORD_TABLE
        .iter()
        .find(|(en, _)| *en == text)
        .map(|(_, vi)| (*vi).to_string())
        .unwrap_or_else(|| text.to_string())
}

/// Translate through the collaborator, degrading to the local table on any
/// failure or empty result.
pub fn translate_or_fallback(
    translator: &dyn Translate,
    text: &str,
    source: Language,
    target: Language,
) -> String {
    match translator.translate(text, source, target) {
        Ok(translated) if !translated.trim().is_empty() => translated,
        Ok(_) => fallback_translate(text, target),
        Err(err) => {
            tracing::warn!("translation failed, using local table: {err}");
            fallback_translate(text, target)
        }
    }
}
