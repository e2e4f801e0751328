//! Language type: a code validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A supported language.
///
/// Only codes present in the registry can be turned into a `Language`, so any
/// value of this type is safe to use as a path segment or catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const RUSSIAN: Language = Language { code: "ru" };
    pub const ROMANIAN: Language = Language { code: "ro" };

    /// Create a Language from a code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the registry
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unsupported language code: '{}'", code),
        }
    }

    /// The language used whenever nothing better is known.
    pub fn default_language() -> Language {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }

    /// Every supported language, in registry order.
    pub fn all() -> impl Iterator<Item = Language> {
        LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|config| Language { code: config.code })
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// # Panics
    /// Never, as long as the value came from `from_code`, a constant, or `all`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
