use log::trace;

use crate::models::LcsTable;
use crate::types::{OriginalWordIndex, TypedWordIndex, Word};

/// One step of the alignment between the reference passage and the typed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentOp {
    /// The words at these positions are equal.
    Match {
        original_idx: OriginalWordIndex,
        typed_idx: TypedWordIndex,
    },
    /// A reference-only position with no match at this alignment point.
    Skip { original_idx: OriginalWordIndex },
    /// A typed-only position with no match at this alignment point.
    Extra { typed_idx: TypedWordIndex },
}

/// Computes the LCS alignment of two word sequences.
///
/// Backtracking walks from `(m, n)` to `(0, 0)` in a loop rather than recursively so that
/// long passages cannot exhaust the stack. When attributing a divergence to either an extra
/// typed word or a skipped reference word scores the same, the typed word is consumed first
/// (`Extra` wins). Qualification results depend on this tie-break; do not change it.
///
/// Operations are returned in forward order.
pub fn align(original: &[Word], typed: &[Word]) -> Vec<AlignmentOp> {
    let table = LcsTable::build(original, typed);

    trace!(
        "Built {}x{} LCS table (lcs length: {})",
        table.rows(),
        table.cols(),
        table.lcs_length()
    );

    let mut ops = Vec::with_capacity(original.len() + typed.len());
    let mut i = original.len();
    let mut j = typed.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1] == typed[j - 1] {
            ops.push(AlignmentOp::Match {
                original_idx: i - 1,
                typed_idx: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            ops.push(AlignmentOp::Extra { typed_idx: j - 1 });
            j -= 1;
        } else {
            ops.push(AlignmentOp::Skip { original_idx: i - 1 });
            i -= 1;
        }
    }

    // Collected back-to-front
    ops.reverse();

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use AlignmentOp::*;

    fn words(text: &str) -> Vec<Word> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_identical_sequences_are_all_matches() {
        let ops = align(&words("a b c"), &words("a b c"));
        assert_eq!(
            ops,
            vec![
                Match { original_idx: 0, typed_idx: 0 },
                Match { original_idx: 1, typed_idx: 1 },
                Match { original_idx: 2, typed_idx: 2 },
            ]
        );
    }

    #[test]
    fn test_empty_typed_is_all_skips() {
        let ops = align(&words("a b"), &[]);
        assert_eq!(
            ops,
            vec![Skip { original_idx: 0 }, Skip { original_idx: 1 }]
        );
    }

    #[test]
    fn test_empty_original_is_all_extras() {
        let ops = align(&[], &words("x y"));
        assert_eq!(ops, vec![Extra { typed_idx: 0 }, Extra { typed_idx: 1 }]);
    }

    #[test]
    fn test_both_empty() {
        assert!(align(&[], &[]).is_empty());
    }

    #[test]
    fn test_substitution_prefers_extra_before_skip() {
        // Equal scores at (2, 2): the typed word is consumed first, so in forward
        // order the skip precedes the extra.
        let ops = align(&words("the quick fox"), &words("the slow fox"));
        assert_eq!(
            ops,
            vec![
                Match { original_idx: 0, typed_idx: 0 },
                Skip { original_idx: 1 },
                Extra { typed_idx: 1 },
                Match { original_idx: 2, typed_idx: 2 },
            ]
        );
    }

    #[test]
    fn test_tie_break_on_transposed_words() {
        let ops = align(&words("a b"), &words("b a"));
        assert_eq!(
            ops,
            vec![
                Skip { original_idx: 0 },
                Match { original_idx: 1, typed_idx: 0 },
                Extra { typed_idx: 1 },
            ]
        );
    }

    #[test]
    fn test_every_position_is_covered_exactly_once() {
        let original = words("a b a c b a d");
        let typed = words("b a x c a a d e");
        let ops = align(&original, &typed);

        let mut seen_original = vec![0; original.len()];
        let mut seen_typed = vec![0; typed.len()];

        for op in &ops {
            match *op {
                Match { original_idx, typed_idx } => {
                    assert_eq!(original[original_idx], typed[typed_idx]);
                    seen_original[original_idx] += 1;
                    seen_typed[typed_idx] += 1;
                }
                Skip { original_idx } => seen_original[original_idx] += 1,
                Extra { typed_idx } => seen_typed[typed_idx] += 1,
            }
        }

        assert!(seen_original.iter().all(|&count| count == 1));
        assert!(seen_typed.iter().all(|&count| count == 1));

        let matches = ops.iter().filter(|op| matches!(op, Match { .. })).count();
        assert_eq!(matches as u32, LcsTable::build(&original, &typed).lcs_length());
    }

    #[test]
    fn test_long_sequences_do_not_overflow_the_stack() {
        let original: Vec<Word> = (0..10_000).map(|i| format!("w{}", i % 97)).collect();
        let typed: Vec<Word> = (0..1_000).map(|i| format!("w{}", i % 89)).collect();

        let ops = align(&original, &typed);
        assert!(ops.len() >= 10_000);
    }
}
