//! Text normalization
//!
//! Store keys and match inputs are compared in normalized form: lowercased,
//! punctuation stripped, surrounding whitespace removed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that is neither a Unicode word character nor whitespace.
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"));

/// Normalize text for store lookup: lowercase, strip punctuation, trim.
///
/// Total over any input; an empty string normalizes to an empty string.
/// Word characters from non-Latin scripts survive, punctuation from any
/// script is removed. Interior whitespace is left as-is.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    PUNCTUATION.replace_all(&lowered, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("What is your NAME?"), "what is your name");
        assert_eq!(normalize("  Hello, world!  "), "hello world");
    }

    #[test]
    fn test_keeps_non_latin_word_characters() {
        assert_eq!(normalize("आप कैसे हैं?"), "आप कैसे हैं");
        // Devanagari danda is punctuation and gets stripped
        assert_eq!(normalize("नमस्ते।"), "नमस्ते");
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        assert_eq!(normalize("a  b"), "a  b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!."), "");
    }

    #[test]
    fn test_idempotent() {
        for input in ["What's up?", "  mixed CASE  ", "तारीख क्या है?", ""] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
