//! Locale resolution for incoming requests.
//!
//! The language of a page is decided by, in order:
//! 1. the first path segment, if it is a supported code (`/ru/...`)
//! 2. the first `Accept-Language` tag whose primary subtag is supported
//! 3. the default language
//!
//! Resolution never fails.

use crate::i18n::Language;

/// Language named by the first segment of `path`, if any.
pub fn locale_from_path(path: &str) -> Option<Language> {
    let first_segment = path.split('/').nth(1)?;
    Language::from_code(first_segment).ok()
}

/// First supported language in an `Accept-Language` header.
///
/// Tags are taken in the order they appear; `q` weights are ignored. Only the
/// first two characters of a tag are compared, so `ru-RU` selects `ru`.
pub fn locale_from_accept_language(header: &str) -> Option<Language> {
    header
        .split(',')
        .map(|tag| tag.split(';').next().unwrap_or_default().trim())
        .filter(|tag| !tag.is_empty())
        .find_map(|tag| {
            let primary = tag.get(..2).unwrap_or(tag).to_ascii_lowercase();
            Language::from_code(&primary).ok()
        })
}

/// Resolve the language for a request.
pub fn resolve_locale(path: &str, accept_language: Option<&str>) -> Language {
    locale_from_path(path)
        .or_else(|| accept_language.and_then(locale_from_accept_language))
        .unwrap_or_default()
}

/// The same page in another language.
///
/// Replaces the leading language segment of `path` with `target` and keeps the
/// rest of the path and the query string, so a personalized link stays
/// personalized after switching languages.
pub fn localized_path(path: &str, query: Option<&str>, target: Language) -> String {
    let rest = path
        .split('/')
        .skip(2)
        .collect::<Vec<_>>()
        .join("/");

    let mut out = format!("/{}", target.code());
    if !rest.is_empty() {
        out.push('/');
        out.push_str(&rest);
    }
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        out.push('?');
        out.push_str(q);
    }
    out
}

/// `path` moved under a language prefix: `/admin` becomes `/ru/admin` and
/// `/` becomes `/ru`. The query string is kept.
pub fn prefixed_path(path: &str, query: Option<&str>, target: Language) -> String {
    let mut out = format!("/{}", target.code());
    if path != "/" {
        out.push_str(path);
    }
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        out.push('?');
        out.push_str(q);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Path Tests ====================

    #[test]
    fn test_path_segment_wins_over_header() {
        assert_eq!(resolve_locale("/ro", Some("ru-RU,ru")), Language::ROMANIAN);
    }

    #[test]
    fn test_path_with_tail() {
        assert_eq!(locale_from_path("/ru/admin"), Some(Language::RUSSIAN));
    }

    #[test]
    fn test_path_unsupported_segment() {
        assert_eq!(locale_from_path("/de"), None);
        assert_eq!(locale_from_path("/"), None);
        assert_eq!(locale_from_path(""), None);
    }

    // ==================== Header Tests ====================

    #[test]
    fn test_header_region_tag() {
        assert_eq!(resolve_locale("/", Some("ru-RU,en;q=0.8")), Language::RUSSIAN);
    }

    #[test]
    fn test_header_unsupported_falls_back_to_default() {
        assert_eq!(resolve_locale("/", Some("de-DE")), Language::ENGLISH);
    }

    #[test]
    fn test_header_skips_unsupported_tags() {
        assert_eq!(
            resolve_locale("/", Some("de-DE, fr;q=0.9, ro;q=0.5")),
            Language::ROMANIAN
        );
    }

    #[test]
    fn test_header_order_beats_weights() {
        assert_eq!(
            locale_from_accept_language("en;q=0.1,ru;q=0.9"),
            Some(Language::ENGLISH)
        );
    }

    #[test]
    fn test_header_uppercase_tag() {
        assert_eq!(locale_from_accept_language("RO-md"), Some(Language::ROMANIAN));
    }

    #[test]
    fn test_header_garbage() {
        assert_eq!(locale_from_accept_language(""), None);
        assert_eq!(locale_from_accept_language(",,;"), None);
        assert_eq!(locale_from_accept_language("*"), None);
        assert_eq!(locale_from_accept_language("р"), None);
    }

    #[test]
    fn test_no_header_no_path() {
        assert_eq!(resolve_locale("/", None), Language::ENGLISH);
    }

    // ==================== localized_path Tests ====================

    #[test]
    fn test_localized_path_root() {
        assert_eq!(localized_path("/en", None, Language::RUSSIAN), "/ru");
    }

    #[test]
    fn test_localized_path_keeps_tail_and_query() {
        assert_eq!(
            localized_path("/en/admin", Some("guests=Ana+Maria"), Language::ROMANIAN),
            "/ro/admin?guests=Ana+Maria"
        );
    }

    #[test]
    fn test_localized_path_empty_query() {
        assert_eq!(localized_path("/ro", Some(""), Language::ENGLISH), "/en");
    }

    #[test]
    fn test_prefixed_path_root() {
        assert_eq!(prefixed_path("/", None, Language::RUSSIAN), "/ru");
        assert_eq!(prefixed_path("/", Some("guests=Ana"), Language::ENGLISH), "/en?guests=Ana");
    }

    #[test]
    fn test_prefixed_path_keeps_whole_path() {
        assert_eq!(prefixed_path("/admin", Some("x=1"), Language::RUSSIAN), "/ru/admin?x=1");
        assert_eq!(prefixed_path("/de", None, Language::ENGLISH), "/en/de");
    }

    // ==================== Properties ====================

    proptest! {
        #[test]
        fn prop_path_code_is_idempotent(
            idx in 0usize..3,
            tail in "[a-z/]{0,12}",
            header in ".{0,24}",
        ) {
            let language = Language::all().nth(idx).unwrap();
            let path = format!("/{}/{}", language.code(), tail);
            prop_assert_eq!(resolve_locale(&path, Some(&header)), language);
            prop_assert_eq!(resolve_locale(&path, None), language);
        }

        #[test]
        fn prop_resolution_is_total(path in ".{0,32}", header in proptest::option::of(".{0,32}")) {
            let language = resolve_locale(&path, header.as_deref());
            prop_assert!(Language::from_code(language.code()).is_ok());
        }
    }
}
