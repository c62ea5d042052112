use crate::types::Word;

/// Splits passages and typed submissions into word tokens.
///
/// Words are delimited by the ASCII space character, matching how passages are
/// space-joined throughout the system. Empty fragments (from leading, trailing or
/// repeated spaces) are always discarded.
///
/// Note: This explicitly does not modify the case or punctuation of the text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tokenizer {
    pub trim_surrounding_whitespace: bool,
}

impl Tokenizer {
    /// Configuration for the reference passage.
    pub fn reference_parser() -> Self {
        Self {
            trim_surrounding_whitespace: false,
        }
    }

    /// Configuration for the raw input buffer submitted by the user.
    ///
    /// Trailing newlines or tabs left over from the input box are removed before
    /// splitting, so they never end up glued to the final word.
    pub fn typed_input_parser() -> Self {
        Self {
            trim_surrounding_whitespace: true,
        }
    }

    pub fn tokenize(self, text: &str) -> Vec<Word> {
        let text = if self.trim_surrounding_whitespace {
            text.trim()
        } else {
            text
        };

        text.split(' ')
            .filter(|word| !word.is_empty())
            .map(|word| word.to_string())
            .collect()
    }
}
