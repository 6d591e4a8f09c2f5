//! Display name sanitizing
//!
//! Leaderboard names may contain decorative symbols that break fixed-width
//! columns. Negative squared capitals are mapped back to plain letters,
//! emoji and symbol blocks are dropped.

use super::constants::{DROPPED_SYMBOL_BLOCKS, NEGATIVE_SQUARED_LETTERS, ZERO_WIDTH_JOINER};

/// Display name for a member, or a placeholder embedding its id.
pub fn display_name(name: Option<&str>, id: u64) -> String {
    match name {
        Some(name) => clean_name(name),
        None => format!("(anonymous #{})", id),
    }
}

/// Strip decorative code points and surrounding whitespace.
pub fn clean_name(raw: &str) -> String {
    let cleaned: String = raw.chars().filter_map(clean_char).collect();
    cleaned.trim().to_string()
}

fn clean_char(c: char) -> Option<char> {
    let code = c as u32;
    if NEGATIVE_SQUARED_LETTERS.contains(&code) {
        let offset = code - NEGATIVE_SQUARED_LETTERS.start();
        return char::from_u32('A' as u32 + offset);
    }
    if code == ZERO_WIDTH_JOINER || DROPPED_SYMBOL_BLOCKS.iter().any(|b| b.contains(&code)) {
        return None;
    }
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_letters_become_ascii() {
        assert_eq!(clean_name("\u{1F170}"), "A");
        assert_eq!(clean_name("\u{1F189}"), "Z");
        assert_eq!(clean_name("\u{1F171}\u{1F170}\u{1F181}"), "BAR");
    }

    #[test]
    fn test_anonymous_placeholder() {
        assert_eq!(display_name(None, 42), "(anonymous #42)");
    }

    #[test]
    fn test_named_member_is_cleaned() {
        assert_eq!(display_name(Some("  Ada  "), 42), "Ada");
    }

    #[test]
    fn test_emoji_and_zwj_dropped() {
        // Family emoji: man ZWJ woman ZWJ girl
        assert_eq!(clean_name("Bob \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}"), "Bob");
        assert_eq!(clean_name("\u{1F680}rocket"), "rocket");
        assert_eq!(clean_name("star\u{2605}"), "star");
        assert_eq!(clean_name("\u{2192}arrow"), "arrow");
        assert_eq!(clean_name("\u{3010}tag\u{3011}"), "tag");
    }

    #[test]
    fn test_other_unicode_kept() {
        assert_eq!(clean_name("Zoë Łukasz 山田"), "Zoë Łukasz 山田");
    }

    #[test]
    fn test_trims_after_dropping() {
        assert_eq!(clean_name("\u{2600} sunny \u{2600}"), "sunny");
        assert_eq!(clean_name("\u{1F600}"), "");
    }
}
