//! Translation catalog: per-language content bundles.
//!
//! The catalog is built once at startup and then only read. Lookups never
//! fail: a language without a bundle gets the default language's bundle.

use crate::i18n::{Language, TranslationContent};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

const EMBEDDED_EN: &str = include_str!("../../locales/en/content.json");
const EMBEDDED_RU: &str = include_str!("../../locales/ru/content.json");
const EMBEDDED_RO: &str = include_str!("../../locales/ro/content.json");

/// One parsed bundle plus the document it was parsed from.
#[derive(Debug)]
pub struct Bundle {
    language: Language,
    raw: String,
    content: TranslationContent,
}

impl Bundle {
    pub fn parse(language: Language, raw: String) -> Result<Self> {
        let content = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid translation bundle for '{}'", language))?;
        Ok(Self {
            language,
            raw,
            content,
        })
    }

    /// Language this bundle was written for. For a fallback lookup this is
    /// the default language, not the one that was asked for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The JSON document exactly as loaded.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn content(&self) -> &TranslationContent {
        &self.content
    }
}

#[derive(Debug)]
pub struct TranslationCatalog {
    bundles: HashMap<Language, Bundle>,
    default: Language,
}

impl TranslationCatalog {
    /// Build a catalog from `(language, json)` pairs.
    ///
    /// A pair that fails to parse is dropped with a warning, except for the
    /// default language, whose bundle is required.
    pub fn from_sources<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Language, String)>,
    {
        let default = Language::default_language();
        let mut bundles = HashMap::new();

        for (language, raw) in sources {
            match Bundle::parse(language, raw) {
                Ok(bundle) => {
                    bundles.insert(language, bundle);
                }
                Err(e) if language == default => return Err(e),
                Err(e) => warn!("Skipping '{}' bundle, default will be used: {:#}", language, e),
            }
        }

        anyhow::ensure!(
            bundles.contains_key(&default),
            "No bundle for default language '{}'",
            default
        );

        Ok(Self { bundles, default })
    }

    /// Catalog of the bundles compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_sources([
            (Language::ENGLISH, EMBEDDED_EN.to_string()),
            (Language::RUSSIAN, EMBEDDED_RU.to_string()),
            (Language::ROMANIAN, EMBEDDED_RO.to_string()),
        ])
    }

    /// Catalog read from `<dir>/<code>/content.json`.
    ///
    /// Unreadable files are treated like missing ones. If the default bundle
    /// cannot be read or parsed, the embedded default is used instead.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let default = Language::default_language();
        let mut sources = Vec::new();

        for language in Language::all() {
            let path = dir.join(language.code()).join("content.json");
            match std::fs::read_to_string(&path) {
                Ok(raw) => {
                    debug!("Read bundle {}", path.display());
                    if language == default && Bundle::parse(language, raw.clone()).is_err() {
                        warn!("Default bundle {} is invalid, using embedded copy", path.display());
                        sources.push((language, EMBEDDED_EN.to_string()));
                    } else {
                        sources.push((language, raw));
                    }
                }
                Err(e) if language == default => {
                    warn!("Cannot read {} ({}), using embedded copy", path.display(), e);
                    sources.push((language, EMBEDDED_EN.to_string()));
                }
                Err(e) => warn!("Cannot read {}: {}", path.display(), e),
            }
        }

        let catalog = Self::from_sources(sources)?;
        info!(
            "Loaded {} translation bundle(s) from {}",
            catalog.bundles.len(),
            dir.display()
        );
        Ok(catalog)
    }

    /// Bundle for `language`, or the default bundle if it has none.
    pub fn get(&self, language: Language) -> &Bundle {
        self.bundles
            .get(&language)
            .or_else(|| self.bundles.get(&self.default))
            .expect("default bundle is checked at construction")
    }

    /// Bundle for a raw code; unsupported codes get the default bundle.
    pub fn get_by_code(&self, code: &str) -> &Bundle {
        match Language::from_code(code) {
            Ok(language) => self.get(language),
            Err(_) => self.get(self.default),
        }
    }

    pub fn has_bundle(&self, language: Language) -> bool {
        self.bundles.contains_key(&language)
    }
}
