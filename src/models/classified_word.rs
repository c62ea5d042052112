use std::fmt;

use crate::types::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordStatus {
    Correct,
    /// Substitution; the reference word is kept in `ClassifiedWord::expected_word`.
    Wrong,
    /// Omission of a reference word.
    Skipped,
    /// Insertion of a word not in the reference.
    Extra,
}

impl WordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordStatus::Correct => "correct",
            WordStatus::Wrong => "wrong",
            WordStatus::Skipped => "skipped",
            WordStatus::Extra => "extra",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, WordStatus::Correct)
    }
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A word of the typed comparison, in reading order.
///
/// For `Skipped` entries `word` is the omitted reference word; for every other status it is
/// the word the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedWord {
    pub word: Word,
    pub status: WordStatus,
    pub expected_word: Option<Word>,
}

impl ClassifiedWord {
    pub fn correct(word: &str) -> Self {
        Self::new(word, WordStatus::Correct)
    }

    pub fn wrong(word: &str, expected_word: &str) -> Self {
        ClassifiedWord {
            word: word.to_string(),
            status: WordStatus::Wrong,
            expected_word: Some(expected_word.to_string()),
        }
    }

    pub fn skipped(word: &str) -> Self {
        Self::new(word, WordStatus::Skipped)
    }

    pub fn extra(word: &str) -> Self {
        Self::new(word, WordStatus::Extra)
    }

    fn new(word: &str, status: WordStatus) -> Self {
        ClassifiedWord {
            word: word.to_string(),
            status,
            expected_word: None,
        }
    }
}

/// A reference word flagged with whether it had no correct counterpart typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalWordFlag {
    pub word: Word,
    pub is_skipped: bool,
}
