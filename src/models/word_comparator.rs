use log::debug;

use crate::models::{
    align, classify, ComparisonResult, ComparisonStats, MatchMaps, Tokenizer,
};

/// Runs the full comparison pipeline: tokenize, align, classify, aggregate.
///
/// Each call is independent; nothing is retained between submissions.
#[derive(Debug, Clone, Copy)]
pub struct WordComparator {
    pub reference_tokenizer: Tokenizer,
    pub typed_tokenizer: Tokenizer,
}

impl Default for WordComparator {
    fn default() -> Self {
        WordComparator {
            reference_tokenizer: Tokenizer::reference_parser(),
            typed_tokenizer: Tokenizer::typed_input_parser(),
        }
    }
}

impl WordComparator {
    pub fn new(reference_tokenizer: Tokenizer, typed_tokenizer: Tokenizer) -> Self {
        WordComparator {
            reference_tokenizer,
            typed_tokenizer,
        }
    }

    pub fn compare(&self, original_text: &str, typed_text: &str) -> ComparisonResult {
        debug!("Tokenizing...");
        let original_words = self.reference_tokenizer.tokenize(original_text);
        let typed_words = self.typed_tokenizer.tokenize(typed_text);

        debug!(
            "Aligning {} reference words with {} typed words...",
            original_words.len(),
            typed_words.len()
        );
        let alignment_ops = align(&original_words, &typed_words);
        let match_maps =
            MatchMaps::from_ops(original_words.len(), typed_words.len(), &alignment_ops);

        debug!("Classifying words ({} matched)...", match_maps.len());
        let (typed_comparison, original_comparison) =
            classify(&original_words, &typed_words, &match_maps);

        debug!("Aggregating stats...");
        let stats = ComparisonStats::aggregate(original_words.len(), &typed_comparison);

        ComparisonResult {
            original_words,
            typed_comparison,
            original_comparison,
            stats,
        }
    }
}
