pub mod error;
pub use error::Error;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod lcs_table;
pub use lcs_table::LcsTable;

pub mod alignment_op;
pub use alignment_op::{align, AlignmentOp};

pub mod match_maps;
pub use match_maps::MatchMaps;

pub mod classified_word;
pub use classified_word::{ClassifiedWord, OriginalWordFlag, WordStatus};

pub mod word_classifier;
pub use word_classifier::classify;

pub mod comparison_stats;
pub use comparison_stats::ComparisonStats;

pub mod comparison_result;
pub use comparison_result::ComparisonResult;

pub mod word_comparator;
pub use word_comparator::WordComparator;

pub mod language;
pub use language::Language;

pub mod speed_metrics;
pub use speed_metrics::SpeedMetrics;

pub mod qualification;
pub use qualification::{QualificationConfig, QualificationFailure, QualificationVerdict};

pub mod performance_level;
pub use performance_level::PerformanceLevel;

pub mod submission;
pub use submission::{Assessment, Submission};

pub mod diff_renderer;
pub use diff_renderer::{render_original_comparison, render_typed_comparison};

pub mod passage_catalog;
pub use passage_catalog::{Passage, PassageCatalog};

pub mod batch;
pub use batch::score_csv;
