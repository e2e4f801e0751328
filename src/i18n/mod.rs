//! Internationalization: supported languages, locale negotiation and the
//! translation catalog.
//!
//! # Architecture
//!
//! - `registry`: the closed set of supported languages and their metadata
//! - `language`: `Language`, a code validated against the registry
//! - `negotiate`: picks a language from the request path or `Accept-Language`
//! - `content`: the typed shape of a translation bundle
//! - `catalog`: read-only lookup from language to bundle, with default fallback
//!
//! # Example
//!
//! ```rust,ignore
//! use wedding_invitations::i18n::{resolve_locale, TranslationCatalog};
//!
//! let catalog = TranslationCatalog::embedded()?;
//! let language = resolve_locale("/", Some("ru-RU,en;q=0.8"));
//! let content = catalog.get(language).content();
//! ```

mod catalog;
mod content;
mod language;
mod negotiate;
mod registry;

pub use catalog::{Bundle, TranslationCatalog};
pub use content::*;
pub use language::Language;
pub use negotiate::{
    locale_from_accept_language, locale_from_path, localized_path, prefixed_path, resolve_locale,
};
pub use registry::{LanguageConfig, LanguageRegistry};
