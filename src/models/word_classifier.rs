use crate::models::{ClassifiedWord, MatchMaps, OriginalWordFlag};
use crate::types::Word;

/// Walks the reference and typed sequences in lockstep and classifies every word.
///
/// Where both pointers sit on differing words, the match maps decide between a
/// substitution (`wrong`), an insertion (`extra`) and an omission (`skipped`):
///
/// | reference word matched later | typed word matched later | result |
/// |---|---|---|
/// | yes | yes | wrong, advance both |
/// | yes | no | extra, advance typed |
/// | no | yes | skipped, advance reference |
/// | no | no | wrong, advance both |
///
/// The last row pairs the two words as a substitution even when they are unrelated (for
/// example around repeated common words). Existing results were scored this way, so it is
/// kept as-is.
pub fn classify(
    original: &[Word],
    typed: &[Word],
    match_maps: &MatchMaps,
) -> (Vec<ClassifiedWord>, Vec<OriginalWordFlag>) {
    let mut typed_comparison = Vec::with_capacity(original.len().max(typed.len()));
    let mut is_skipped = vec![false; original.len()];

    let mut original_ptr = 0;
    let mut typed_ptr = 0;

    while original_ptr < original.len() || typed_ptr < typed.len() {
        if typed_ptr >= typed.len() {
            // Never attempted
            typed_comparison.push(ClassifiedWord::skipped(&original[original_ptr]));
            is_skipped[original_ptr] = true;
            original_ptr += 1;
        } else if original_ptr >= original.len() {
            typed_comparison.push(ClassifiedWord::extra(&typed[typed_ptr]));
            typed_ptr += 1;
        } else if original[original_ptr] == typed[typed_ptr] {
            typed_comparison.push(ClassifiedWord::correct(&typed[typed_ptr]));
            original_ptr += 1;
            typed_ptr += 1;
        } else {
            let original_matched_later =
                match_maps.is_original_matched_after(original_ptr, typed_ptr);
            let typed_matched_later = match_maps.is_typed_matched_after(typed_ptr, original_ptr);

            match (original_matched_later, typed_matched_later) {
                (true, false) => {
                    typed_comparison.push(ClassifiedWord::extra(&typed[typed_ptr]));
                    typed_ptr += 1;
                }
                (false, true) => {
                    typed_comparison.push(ClassifiedWord::skipped(&original[original_ptr]));
                    is_skipped[original_ptr] = true;
                    original_ptr += 1;
                }
                (true, true) | (false, false) => {
                    typed_comparison.push(ClassifiedWord::wrong(
                        &typed[typed_ptr],
                        &original[original_ptr],
                    ));
                    original_ptr += 1;
                    typed_ptr += 1;
                }
            }
        }
    }

    let original_comparison = original
        .iter()
        .zip(is_skipped)
        .map(|(word, is_skipped)| OriginalWordFlag {
            word: word.clone(),
            is_skipped,
        })
        .collect();

    (typed_comparison, original_comparison)
}
