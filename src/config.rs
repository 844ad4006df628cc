use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub db_path: String,
    pub assets_dir: String,
    pub manifest_path: String,
    pub translate_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("DB_PATH").unwrap_or_else(|_| "./data/picboard.db".to_string()),
            assets_dir: env::var("ASSETS_DIR").unwrap_or_else(|_| "./images".to_string()),
            manifest_path: env::var("MANIFEST_PATH")
                .unwrap_or_else(|_| "./default-cards.json".to_string()),
            translate_url: env::var("TRANSLATE_URL")
                .unwrap_or_else(|_| "https://libretranslate.de/translate".to_string()),
        }
    }
}
