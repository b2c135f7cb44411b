//! Keyword-rule openers used when the language model is unavailable.
//!
//! Rules are checked in order and the first group with any keyword present
//! in the caption wins. Matching is a case-sensitive substring test.

pub const PEOPLE_OPENER: &str =
    "What a lovely moment with people in it! Who is in this photo, and what were you all up to?";
pub const FOOD_OPENER: &str =
    "That looks delicious! What's the story behind this meal?";
pub const PET_OPENER: &str =
    "What an adorable companion! Tell me about your furry friend.";
pub const LANDSCAPE_OPENER: &str =
    "What a beautiful view! Where was this taken, and what brought you there?";
pub const GENERIC_OPENER: &str =
    "What a great photo! What makes this moment special to you?";

const KEYWORD_RULES: &[(&[&str], &str)] = &[
    (&["person", "people"], PEOPLE_OPENER),
    (&["food", "meal"], FOOD_OPENER),
    (&["pet", "cat", "dog"], PET_OPENER),
    (&["landscape", "beach", "mountain"], LANDSCAPE_OPENER),
];

/// Pick the canned opener for `caption`.
pub fn keyword_opener(caption: &str) -> &'static str {
    KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| caption.contains(k)))
        .map(|(_, opener)| *opener)
        .unwrap_or(GENERIC_OPENER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_group_matches() {
        assert_eq!(keyword_opener("a person riding a bike"), PEOPLE_OPENER);
        assert_eq!(keyword_opener("people at a concert"), PEOPLE_OPENER);
        assert_eq!(keyword_opener("a plate of food"), FOOD_OPENER);
        assert_eq!(keyword_opener("a cat on a sofa"), PET_OPENER);
        assert_eq!(keyword_opener("snowy mountain peaks"), LANDSCAPE_OPENER);
    }

    #[test]
    fn earlier_group_wins() {
        assert_eq!(keyword_opener("a dog sitting on a beach"), PET_OPENER);
        assert_eq!(keyword_opener("people sharing a meal"), PEOPLE_OPENER);
        assert_eq!(keyword_opener("a meal for my pet"), FOOD_OPENER);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(keyword_opener("Dog"), GENERIC_OPENER);
        assert_eq!(keyword_opener("BEACH sunset"), GENERIC_OPENER);
    }

    #[test]
    fn substring_matches_count() {
        // "carpet" contains "pet"
        assert_eq!(keyword_opener("a red carpet"), PET_OPENER);
    }

    #[test]
    fn date_captions_are_generic() {
        assert_eq!(
            keyword_opener("An image captured on 10/18/2026 at 3:04:05 PM"),
            GENERIC_OPENER
        );
        assert_eq!(keyword_opener("A photo in your gallery"), GENERIC_OPENER);
        assert_eq!(keyword_opener("A photo you selected"), GENERIC_OPENER);
    }
}
