use crate::models::AlignmentOp;
use crate::types::{OriginalWordIndex, TypedWordIndex};

/// Lookups recording which reference positions were matched to which typed positions
/// (and back) by the LCS alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchMaps {
    original_to_typed: Vec<Option<TypedWordIndex>>,
    typed_to_original: Vec<Option<OriginalWordIndex>>,
}

impl MatchMaps {
    pub fn from_ops(
        original_len: usize,
        typed_len: usize,
        alignment_ops: &[AlignmentOp],
    ) -> Self {
        let mut original_to_typed = vec![None; original_len];
        let mut typed_to_original = vec![None; typed_len];

        for op in alignment_ops {
            if let AlignmentOp::Match {
                original_idx,
                typed_idx,
            } = *op
            {
                original_to_typed[original_idx] = Some(typed_idx);
                typed_to_original[typed_idx] = Some(original_idx);
            }
        }

        MatchMaps {
            original_to_typed,
            typed_to_original,
        }
    }

    pub fn typed_index_for(&self, original_idx: OriginalWordIndex) -> Option<TypedWordIndex> {
        self.original_to_typed.get(original_idx).copied().flatten()
    }

    pub fn original_index_for(&self, typed_idx: TypedWordIndex) -> Option<OriginalWordIndex> {
        self.typed_to_original.get(typed_idx).copied().flatten()
    }

    /// Whether the reference word at `original_idx` is matched to a typed word strictly after
    /// `typed_idx`.
    pub fn is_original_matched_after(
        &self,
        original_idx: OriginalWordIndex,
        typed_idx: TypedWordIndex,
    ) -> bool {
        self.typed_index_for(original_idx)
            .is_some_and(|matched_typed_idx| matched_typed_idx > typed_idx)
    }

    /// Whether the typed word at `typed_idx` is matched to a reference word strictly after
    /// `original_idx`.
    pub fn is_typed_matched_after(
        &self,
        typed_idx: TypedWordIndex,
        original_idx: OriginalWordIndex,
    ) -> bool {
        self.original_index_for(typed_idx)
            .is_some_and(|matched_original_idx| matched_original_idx > original_idx)
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.original_to_typed.iter().filter(|idx| idx.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
