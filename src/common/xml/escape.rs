use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

const SPECIAL: [&str; 5] = ["&", "<", ">", "\"", "'"];
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

// Patterns are fixed literals, so building the automaton cannot fail.
static XML_ESCAPER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(SPECIAL).expect("static XML escape patterns"));

static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(ENTITIES)
        .expect("static XML entity patterns")
});

/// Escape the five XML special characters for use in text or attribute values.
///
/// ```
/// use turnero_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("Insert → Video"), "Insert → Video");
/// assert_eq!(escape_xml("'Ver' & <llamar>"), "&apos;Ver&apos; &amp; &lt;llamar&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &ENTITIES)
}

/// Replace the five predefined entities; anything else is left untouched.
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &SPECIAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unknown_entities_survive() {
        assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
        assert_eq!(unescape_xml("&nbsp;"), "&nbsp;");
    }

    proptest! {
        #[test]
        fn escaped_text_has_no_markup(s in "\\PC*") {
            let escaped = escape_xml(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('"'));
            prop_assert_eq!(unescape_xml(&escaped), s);
        }
    }
}
