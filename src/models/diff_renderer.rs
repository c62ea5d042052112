//! Plain-text rendering of comparisons, using the exam sheet's notation:
//!
//! - correct: `word`
//! - wrong: `typed{expected}`
//! - skipped: `[word]`
//! - extra: `~word~`

use crate::models::{ClassifiedWord, OriginalWordFlag, WordStatus};

pub fn render_typed_comparison(typed_comparison: &[ClassifiedWord]) -> String {
    typed_comparison
        .iter()
        .map(|classified_word| match classified_word.status {
            WordStatus::Correct => classified_word.word.clone(),
            WordStatus::Wrong => format!(
                "{}{{{}}}",
                classified_word.word,
                classified_word.expected_word.as_deref().unwrap_or_default()
            ),
            WordStatus::Skipped => format!("[{}]", classified_word.word),
            WordStatus::Extra => format!("~{}~", classified_word.word),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the reference passage, bracketing the words that were skipped.
pub fn render_original_comparison(original_comparison: &[OriginalWordFlag]) -> String {
    original_comparison
        .iter()
        .map(|flag| {
            if flag.is_skipped {
                format!("[{}]", flag.word)
            } else {
                flag.word.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
