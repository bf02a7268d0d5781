//! Mapping OSM `brand` / `name` tags to the chains we carry prices for.

/// Lowercase key to canonical chain name, checked in order.
///
/// `albert heijn` precedes `ah` so a name containing both resolves through
/// the full key.
const BRAND_KEYS: &[(&str, &str)] = &[
    ("albert heijn", "Albert Heijn"),
    ("ah", "Albert Heijn"),
    ("dirk", "Dirk"),
    ("vomar", "Vomar"),
    ("jumbo", "Jumbo"),
    ("plus", "Plus"),
    ("aldi", "Aldi"),
    ("hoogvliet", "Hoogvliet"),
    ("dekamarkt", "Dekamarkt"),
];

/// Keys this short only match a whole word ("AH to go", not "Shah Market").
const WHOLE_WORD_MAX_LEN: usize = 2;

fn key_matches(haystack: &str, key: &str) -> bool {
    if key.len() <= WHOLE_WORD_MAX_LEN {
        haystack
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == key)
    } else {
        haystack.contains(key)
    }
}

fn lookup(tag: &str) -> Option<&'static str> {
    let tag = tag.to_lowercase();
    BRAND_KEYS
        .iter()
        .find(|(key, _)| key_matches(&tag, key))
        .map(|(_, brand)| *brand)
}

/// Resolves the chain for an OSM element, preferring its `brand` tag over its
/// `name` tag. Returns `None` for chains outside [`BRAND_KEYS`].
#[must_use]
pub fn match_brand(brand_tag: Option<&str>, name_tag: Option<&str>) -> Option<&'static str> {
    brand_tag
        .and_then(lookup)
        .or_else(|| name_tag.and_then(lookup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_tag_is_matched_case_insensitively() {
        assert_eq!(match_brand(Some("JUMBO"), None), Some("Jumbo"));
        assert_eq!(match_brand(Some("Albert Heijn"), None), Some("Albert Heijn"));
    }

    #[test]
    fn brand_tag_wins_over_name() {
        assert_eq!(
            match_brand(Some("Dirk"), Some("Jumbo Foodmarkt")),
            Some("Dirk")
        );
    }

    #[test]
    fn unknown_brand_tag_falls_back_to_name() {
        assert_eq!(
            match_brand(Some("Spar"), Some("PLUS Van der Linden")),
            Some("Plus")
        );
    }

    #[test]
    fn short_key_needs_a_whole_word() {
        assert_eq!(match_brand(None, Some("AH to go")), Some("Albert Heijn"));
        assert_eq!(match_brand(None, Some("Shah Market")), None);
    }

    #[test]
    fn full_name_matches_albert_heijn() {
        assert_eq!(
            match_brand(None, Some("Albert Heijn XL")),
            Some("Albert Heijn")
        );
    }

    #[test]
    fn unrecognised_chain_is_none() {
        assert_eq!(match_brand(Some("Lidl"), Some("Lidl")), None);
        assert_eq!(match_brand(None, None), None);
    }

    #[test]
    fn substring_keys_match_inside_longer_tags() {
        assert_eq!(match_brand(Some("Vomar Voordeelmarkt"), None), Some("Vomar"));
        assert_eq!(match_brand(None, Some("DekaMarkt Zaandam")), Some("Dekamarkt"));
    }
}
