use typescribe::Tokenizer;

#[cfg(test)]
mod reference_tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_with_single_spaces() {
        let tokenizer = Tokenizer::reference_parser();

        let text = "Practice makes perfect, so keep typing.";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(
            tokens,
            vec!["Practice", "makes", "perfect,", "so", "keep", "typing."]
        );
    }

    #[test]
    fn test_tokenize_with_multiple_spaces() {
        let tokenizer = Tokenizer::reference_parser();

        let text = "This    is   a    test   string";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["This", "is", "a", "test", "string"]);
    }

    #[test]
    fn test_tokenize_keeps_tabs_inside_words() {
        let tokenizer = Tokenizer::reference_parser();

        let text = "This\tis a\ttest";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["This\tis", "a\ttest"]);
    }

    #[test]
    fn test_tokenize_never_yields_empty_tokens() {
        let tokenizer = Tokenizer::reference_parser();

        let tokens = tokenizer.tokenize("   a  b   ");
        assert!(tokens.iter().all(|token| !token.is_empty()));
        assert_eq!(tokens.len(), 2);
    }
}

#[cfg(test)]
mod typed_input_tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_with_trailing_line_break() {
        let tokenizer = Tokenizer::typed_input_parser();

        let text = "the quick fox\n";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["the", "quick", "fox"]);
    }

    #[test]
    fn test_tokenize_with_leading_whitespace() {
        let tokenizer = Tokenizer::typed_input_parser();

        let text = "\t  the quick fox";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["the", "quick", "fox"]);
    }

    #[test]
    fn test_tokenize_is_case_sensitive() {
        let tokenizer = Tokenizer::typed_input_parser();

        let tokens = tokenizer.tokenize("The THE the");
        assert_eq!(tokens, vec!["The", "THE", "the"]);
    }
}
