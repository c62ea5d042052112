// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a word token as an owned `String`. Words are the basic units compared between
/// the reference passage and the typed submission.
pub type Word = String;

/// Position of a word within the tokenized reference passage.
pub type OriginalWordIndex = usize;

/// Position of a word within the tokenized typed submission.
pub type TypedWordIndex = usize;

/// Length of a longest common subsequence, as stored in an `LcsTable` cell.
pub type LcsLength = u32;

/// Accuracy expressed as a whole percentage (`0..=100`).
pub type AccuracyPercentage = u32;

/// Words per minute.
pub type WordsPerMinute = f64;
