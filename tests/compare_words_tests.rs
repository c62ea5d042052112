use typescribe::{compare_words, ClassifiedWord, WordStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let text = "Typography and font design often use this phrase to display fonts";
        let result = compare_words(text, text);

        assert!(result
            .typed_comparison
            .iter()
            .all(|classified_word| classified_word.status == WordStatus::Correct));
        assert_eq!(result.stats.accuracy, 100);
        assert_eq!(result.stats.total_errors, 0);
        assert!(result.is_perfect());
    }

    #[test]
    fn test_total_omission() {
        let result = compare_words("a b c", "");

        assert_eq!(
            result.typed_comparison,
            vec![
                ClassifiedWord::skipped("a"),
                ClassifiedWord::skipped("b"),
                ClassifiedWord::skipped("c"),
            ]
        );
        assert_eq!(result.stats.total_words, 3);
        assert_eq!(result.stats.correct_words, 0);
        assert_eq!(result.stats.skipped_words, 3);
        assert_eq!(result.stats.accuracy, 0);
        assert!(result
            .original_comparison
            .iter()
            .all(|flag| flag.is_skipped));
    }

    #[test]
    fn test_total_insertion() {
        let result = compare_words("", "x y");

        assert_eq!(
            result.typed_comparison,
            vec![ClassifiedWord::extra("x"), ClassifiedWord::extra("y")]
        );
        assert_eq!(result.stats.total_words, 0);
        assert_eq!(result.stats.accuracy, 0);
        assert!(result.original_words.is_empty());
        assert!(result.original_comparison.is_empty());
    }

    #[test]
    fn test_both_empty() {
        let result = compare_words("", "");

        assert!(result.typed_comparison.is_empty());
        assert_eq!(result.stats.accuracy, 0);
        assert_eq!(result.stats.total_errors, 0);
    }

    #[test]
    fn test_single_substitution() {
        let result = compare_words("the quick fox", "the slow fox");

        assert_eq!(
            result.typed_comparison,
            vec![
                ClassifiedWord::correct("the"),
                ClassifiedWord::wrong("slow", "quick"),
                ClassifiedWord::correct("fox"),
            ]
        );
        assert_eq!(result.stats.wrong_words, 1);
        assert_eq!(result.stats.skipped_words, 0);
        assert_eq!(result.stats.extra_words, 0);
    }

    #[test]
    fn test_single_omission_mid_sequence() {
        let result = compare_words("a b c d", "a c d");

        assert_eq!(
            result.typed_comparison,
            vec![
                ClassifiedWord::correct("a"),
                ClassifiedWord::skipped("b"),
                ClassifiedWord::correct("c"),
                ClassifiedWord::correct("d"),
            ]
        );
        assert_eq!(result.stats.skipped_words, 1);
        assert_eq!(result.stats.wrong_words, 0);
    }

    #[test]
    fn test_single_insertion_mid_sequence() {
        let result = compare_words("a b c", "a x b c");

        assert_eq!(
            result.typed_comparison,
            vec![
                ClassifiedWord::correct("a"),
                ClassifiedWord::extra("x"),
                ClassifiedWord::correct("b"),
                ClassifiedWord::correct("c"),
            ]
        );
        assert_eq!(result.stats.extra_words, 1);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let original = "a b a b c a";
        let typed = "b a c b a a";

        let first = compare_words(original, typed);
        for _ in 0..10 {
            assert_eq!(compare_words(original, typed), first);
        }
    }

    #[test]
    fn test_stats_invariants() {
        let pairs = [
            ("the quick brown fox", "the quikc brown fox jumps"),
            ("a b c d e f", "f e d c b a"),
            ("one two three four", "one three"),
            ("x", "y z w"),
        ];

        for (original, typed) in pairs {
            let stats = compare_words(original, typed).stats;

            assert_eq!(
                stats.total_errors,
                stats.wrong_words + stats.skipped_words + stats.extra_words
            );
            assert_eq!(
                stats.accuracy,
                ((stats.correct_words as f64 / stats.total_words as f64) * 100.0).round() as u32
            );
        }
    }

    #[test]
    fn test_every_reference_word_is_accounted_for() {
        let result = compare_words(
            "It is commonly used for testing typewriters and computer keyboards.",
            "It is used for for testing type writers and computer keyboards",
        );
        let stats = result.stats;

        // Each reference word is consumed exactly once as correct, wrong or skipped.
        assert_eq!(
            stats.correct_words + stats.wrong_words + stats.skipped_words,
            stats.total_words
        );
        assert_eq!(result.original_comparison.len(), stats.total_words);
    }

    #[test]
    fn test_long_passages_complete() {
        let original: Vec<String> = (0..10_000).map(|i| format!("w{}", i % 113)).collect();
        let mut typed = original.clone();
        typed.truncate(2_000);
        typed.insert(500, "extra".to_string());
        typed.remove(1_000);

        let result = compare_words(&original.join(" "), &typed.join(" "));

        assert_eq!(result.stats.total_words, 10_000);
        assert!(result.stats.skipped_words >= 8_000);
    }
}
