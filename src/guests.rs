//! Guest names carried in the `guests` query parameter.
//!
//! A link may name one guest (`/en?guests=Ana`) or a whole group by repeating
//! the parameter (`/en?guests=Ana&guests=Mihai`). Values are plain text: no
//! dedup, no validation, no normalization beyond URL decoding.

use url::form_urlencoded;

pub const GUESTS_PARAM: &str = "guests";

/// Append every name in `guests` to `base_path` as a `guests` parameter.
///
/// Names are form-encoded (a space becomes `+`). Empty names are skipped, so
/// `guest_url("/en", &[""])` is just `/en`.
pub fn guest_url<S: AsRef<str>>(base_path: &str, guests: &[S]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for guest in guests.iter().map(AsRef::as_ref).filter(|g| !g.is_empty()) {
        serializer.append_pair(GUESTS_PARAM, guest);
    }
    let query = serializer.finish();

    if query.is_empty() {
        return base_path.to_string();
    }

    let separator = match base_path.split_once('?') {
        Some((_, existing)) if !existing.is_empty() => "&",
        Some(_) => "",
        None => "?",
    };
    format!("{}{}{}", base_path, separator, query)
}

/// Every `guests` value in a raw query string, in order.
pub fn guest_values(query: Option<&str>) -> Vec<String> {
    let Some(query) = query else {
        return Vec::new();
    };

    form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == GUESTS_PARAM)
        .map(|(_, value)| value.into_owned())
        .collect()
}

/// The names to greet, or `None` when the visit is not personalized.
///
/// A single value is returned verbatim; several are joined with `", "`. The
/// join is only meant for display in a greeting sentence.
pub fn guest_names(query: Option<&str>) -> Option<String> {
    let mut values = guest_values(query);

    match values.len() {
        0 => None,
        1 => values.pop().filter(|name| !name.is_empty()),
        _ => Some(values.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn query_of(url: &str) -> Option<&str> {
        url.split_once('?').map(|(_, q)| q)
    }

    // ==================== Encode Tests ====================

    #[test]
    fn test_single_guest() {
        assert_eq!(guest_url("/en", &["John Smith"]), "/en?guests=John+Smith");
    }

    #[test]
    fn test_multiple_guests_repeat_param() {
        assert_eq!(
            guest_url("/ro", &["Ana", "Mihai"]),
            "/ro?guests=Ana&guests=Mihai"
        );
    }

    #[test]
    fn test_special_characters_are_encoded() {
        assert_eq!(
            guest_url("/en", &["Tom & Jerry"]),
            "/en?guests=Tom+%26+Jerry"
        );
    }

    #[test]
    fn test_no_guests() {
        let none: [&str; 0] = [];
        assert_eq!(guest_url("/en", &none), "/en");
        assert_eq!(guest_url("/en", &[""]), "/en");
    }

    #[test]
    fn test_base_with_existing_query() {
        assert_eq!(guest_url("/en?a=1", &["Ana"]), "/en?a=1&guests=Ana");
        assert_eq!(guest_url("/en?", &["Ana"]), "/en?guests=Ana");
    }

    // ==================== Decode Tests ====================

    #[test]
    fn test_absent_param() {
        assert_eq!(guest_names(None), None);
        assert_eq!(guest_names(Some("")), None);
        assert_eq!(guest_names(Some("lang=en")), None);
    }

    #[test]
    fn test_single_value_verbatim() {
        assert_eq!(
            guest_names(Some("guests=%20Ana%20")),
            Some(" Ana ".to_string())
        );
    }

    #[test]
    fn test_single_empty_value() {
        assert_eq!(guest_names(Some("guests=")), None);
    }

    #[test]
    fn test_multiple_values_joined_in_order() {
        assert_eq!(
            guest_names(Some("guests=Mihai&x=1&guests=Ana&guests=Mihai")),
            Some("Mihai, Ana, Mihai".to_string())
        );
    }

    #[test]
    fn test_cyrillic_names() {
        let url = guest_url("/ru", &["Иван Петров"]);
        assert_eq!(guest_names(query_of(&url)), Some("Иван Петров".to_string()));
    }

    #[test]
    fn test_round_trip_two_names() {
        let url = guest_url("/en", &["John Smith", "Jane Doe"]);
        assert_eq!(
            guest_names(query_of(&url)),
            Some("John Smith, Jane Doe".to_string())
        );
    }

    // ==================== Properties ====================

    proptest! {
        #[test]
        fn prop_values_survive_encoding(names in proptest::collection::vec(".{1,16}", 1..5)) {
            let url = guest_url("/en", &names);
            prop_assert_eq!(guest_values(query_of(&url)), names);
        }
    }
}
