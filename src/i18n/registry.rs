//! Language registry: the closed set of languages the site is published in.
//!
//! The table is a `static`, built at compile time. Nothing here is mutable and
//! nothing needs lazy initialization.

/// Metadata for one supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code, also used as the first path segment (e.g. "ru")
    pub code: &'static str,

    /// English name of the language (e.g. "Russian")
    pub name: &'static str,

    /// Name shown in the language switcher (e.g. "Русский")
    pub native_name: &'static str,

    /// Value for the `<html lang>` attribute and `Content-Language`
    pub html_lang: &'static str,

    /// Whether this is the fallback language (exactly one must be true)
    pub is_default: bool,
}

/// Registry of every language the site is published in.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: &'static [LanguageConfig],
}

static REGISTRY: LanguageRegistry = LanguageRegistry {
    languages: &[
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            html_lang: "en",
            is_default: true,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            html_lang: "ru",
            is_default: false,
        },
        LanguageConfig {
            code: "ro",
            name: "Romanian",
            native_name: "Română",
            html_lang: "ro",
            is_default: false,
        },
    ],
};

impl LanguageRegistry {
    /// The site-wide registry.
    pub fn get() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// Look a language up by its code. Matching is exact: "EN" is not "en".
    pub fn get_by_code(&self, code: &str) -> Option<&'static LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages, in the order the switcher shows them.
    pub fn list_all(&self) -> &'static [LanguageConfig] {
        self.languages
    }

    /// The fallback language.
    ///
    /// # Panics
    /// Panics if the table above does not have exactly one default entry.
    pub fn default_language(&self) -> &'static LanguageConfig {
        let defaults: Vec<_> = self.languages.iter().filter(|l| l.is_default).collect();

        match defaults.as_slice() {
            [only] => only,
            [] => panic!("No default language in registry"),
            _ => panic!("Multiple default languages in registry"),
        }
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_is_stable() {
        assert!(std::ptr::eq(LanguageRegistry::get(), LanguageRegistry::get()));
    }

    #[test]
    fn test_get_by_code_each_language() {
        let registry = LanguageRegistry::get();

        let en = registry.get_by_code("en").unwrap();
        assert_eq!(en.native_name, "English");
        assert!(en.is_default);

        let ru = registry.get_by_code("ru").unwrap();
        assert_eq!(ru.name, "Russian");
        assert_eq!(ru.native_name, "Русский");
        assert!(!ru.is_default);

        let ro = registry.get_by_code("ro").unwrap();
        assert_eq!(ro.name, "Romanian");
        assert_eq!(ro.native_name, "Română");
        assert!(!ro.is_default);
    }

    #[test]
    fn test_get_by_code_is_case_sensitive() {
        assert!(LanguageRegistry::get().get_by_code("EN").is_none());
    }

    #[test]
    fn test_get_by_code_unknown() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("de").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_list_all_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|l| l.code)
            .collect();
        assert_eq!(codes, vec!["en", "ru", "ro"]);
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(LanguageRegistry::get().default_language().code, "en");
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("ro"));
        assert!(!registry.is_supported("fr"));
    }
}
