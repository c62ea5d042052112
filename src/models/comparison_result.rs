use crate::models::{ClassifiedWord, ComparisonStats, OriginalWordFlag, WordStatus};
use crate::types::Word;

/// Everything produced by comparing one typed submission against its reference passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    /// The tokenized reference passage.
    pub original_words: Vec<Word>,
    /// Classified words in reading order, as rendered in the colored diff.
    pub typed_comparison: Vec<ClassifiedWord>,
    /// The reference passage with each word flagged if it was skipped.
    pub original_comparison: Vec<OriginalWordFlag>,
    pub stats: ComparisonStats,
}

impl ComparisonResult {
    pub fn words_with_status(&self, status: WordStatus) -> impl Iterator<Item = &ClassifiedWord> {
        self.typed_comparison
            .iter()
            .filter(move |classified_word| classified_word.status == status)
    }

    pub fn is_perfect(&self) -> bool {
        self.stats.total_errors == 0 && self.stats.correct_words == self.stats.total_words
    }
}
