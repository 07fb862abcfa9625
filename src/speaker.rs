//! Best-effort speaker extraction from event titles.
//!
//! Titles such as "An Evening with Margaret Atwood" name the speaker in a
//! predictable phrase. Ambiguous or multi-clause titles can yield a partial or
//! wrong name; callers treat the result as a hint, not a fact.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tried in order; the first match wins.
static SPEAKER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)An Evening with (.+)",
        r"(?i)In conversation with (.+)",
        r"(?i)In conversation (?:with )?(.+)",
        r"(?i)(.+): A Conversation",
        r"(?i)Conversation with (.+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("speaker pattern must compile"))
    .collect()
});

const SUBTITLE_SEPARATOR: &str = " – ";

pub fn guess_speaker(title: &str) -> Option<String> {
    let captures = SPEAKER_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(title))?;

    let candidate = captures.get(1)?.as_str().trim().trim_end_matches('.');
    let candidate = match candidate.find(SUBTITLE_SEPARATOR) {
        Some(idx) => &candidate[..idx],
        None => candidate,
    };
    Some(candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evening_with() {
        assert_eq!(
            guess_speaker("An Evening with Margaret Atwood"),
            Some("Margaret Atwood".to_string())
        );
        assert_eq!(
            guess_speaker("An evening with  Zadie Smith. "),
            Some("Zadie Smith".to_string())
        );
    }

    #[test]
    fn test_subtitle_is_stripped() {
        assert_eq!(
            guess_speaker("In conversation with Jane Doe – Book Launch"),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_conversation_without_with() {
        assert_eq!(
            guess_speaker("In Conversation Mary Beard"),
            Some("Mary Beard".to_string())
        );
    }

    #[test]
    fn test_name_before_colon() {
        assert_eq!(
            guess_speaker("Salman Rushdie: A Conversation"),
            Some("Salman Rushdie".to_string())
        );
    }

    #[test]
    fn test_plain_conversation_with() {
        assert_eq!(
            guess_speaker("A Conversation with Hilary Mantel"),
            Some("Hilary Mantel".to_string())
        );
    }

    #[test]
    fn test_earlier_pattern_wins() {
        // Pattern 1 matches before pattern 5 gets a chance.
        assert_eq!(
            guess_speaker("An Evening with Conversation with Bob"),
            Some("Conversation with Bob".to_string())
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(guess_speaker("Coldplay: Music of the Spheres Tour"), None);
        assert_eq!(guess_speaker(""), None);
    }
}
