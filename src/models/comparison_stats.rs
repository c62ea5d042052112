use crate::models::{ClassifiedWord, WordStatus};
use crate::types::AccuracyPercentage;
use crate::utils::rounded_percentage;

/// Word counts derived from a typed comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonStats {
    /// Number of words in the reference passage.
    pub total_words: usize,
    pub correct_words: usize,
    pub wrong_words: usize,
    pub skipped_words: usize,
    pub extra_words: usize,
    /// `wrong_words + skipped_words + extra_words`
    pub total_errors: usize,
    /// Correct words as a rounded percentage of `total_words`; `0` for an empty passage.
    pub accuracy: AccuracyPercentage,
}

impl ComparisonStats {
    pub fn aggregate(total_words: usize, typed_comparison: &[ClassifiedWord]) -> Self {
        let (correct_words, wrong_words, skipped_words, extra_words) = typed_comparison.iter().fold(
            (0, 0, 0, 0),
            |(correct, wrong, skipped, extra), classified_word| match classified_word.status {
                WordStatus::Correct => (correct + 1, wrong, skipped, extra),
                WordStatus::Wrong => (correct, wrong + 1, skipped, extra),
                WordStatus::Skipped => (correct, wrong, skipped + 1, extra),
                WordStatus::Extra => (correct, wrong, skipped, extra + 1),
            },
        );

        ComparisonStats {
            total_words,
            correct_words,
            wrong_words,
            skipped_words,
            extra_words,
            total_errors: wrong_words + skipped_words + extra_words,
            accuracy: rounded_percentage(correct_words, total_words),
        }
    }

    /// Words the user actually typed, i.e. every entry of the comparison except skipped
    /// reference words.
    pub fn typed_word_count(&self) -> usize {
        self.correct_words + self.wrong_words + self.extra_words
    }
}
