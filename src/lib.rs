mod config;
pub use config::DEFAULT_QUALIFICATION_CONFIG;
mod constants;
pub use constants::KEYSTROKES_PER_WORD;
pub mod models;
pub use models::{
    align, classify, render_original_comparison, render_typed_comparison, score_csv,
    AlignmentOp, Assessment, ClassifiedWord, ComparisonResult, ComparisonStats, Error, Language,
    LcsTable, MatchMaps, OriginalWordFlag, Passage, PassageCatalog, PerformanceLevel,
    QualificationConfig, QualificationFailure, QualificationVerdict, SpeedMetrics, Submission,
    Tokenizer, WordComparator, WordStatus,
};
pub mod types;
mod utils;
pub use types::{
    AccuracyPercentage, LcsLength, OriginalWordIndex, TypedWordIndex, Word, WordsPerMinute,
};
pub use utils::rounded_percentage;

use log::info;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Compares the words a user typed against the reference passage.
///
/// Never fails: empty passages and empty submissions are scored as data (all `extra` or all
/// `skipped`, accuracy `0`).
///
/// ```rust
/// use typescribe::{compare_words, ClassifiedWord};
///
/// let result = compare_words("the quick fox", "the slow fox");
///
/// assert_eq!(result.typed_comparison[1], ClassifiedWord::wrong("slow", "quick"));
/// assert_eq!(result.stats.wrong_words, 1);
/// assert_eq!(result.stats.accuracy, 67);
/// ```
pub fn compare_words(original_text: &str, typed_text: &str) -> ComparisonResult {
    WordComparator::default().compare(original_text, typed_text)
}

/// Scores a submission and decides qualification under the default exam rules.
pub fn assess_submission(submission: &Submission) -> Result<Assessment, Error> {
    assess_submission_with_custom_config(DEFAULT_QUALIFICATION_CONFIG, submission)
}

pub fn assess_submission_with_custom_config(
    qualification_config: &QualificationConfig,
    submission: &Submission,
) -> Result<Assessment, Error> {
    let comparison = compare_words(&submission.original_text, &submission.typed_text);

    let speed = SpeedMetrics::from_keystrokes(
        submission.typed_keystrokes,
        comparison.stats.total_errors,
        submission.duration_secs,
    )?;

    let verdict = QualificationVerdict::evaluate(
        qualification_config,
        submission.language,
        &comparison.stats,
        &speed,
    );

    let performance_level = PerformanceLevel::from_wpm(speed.net_wpm);

    info!(
        "Assessed {} submission: accuracy {}%, gross {:.2} WPM, {}",
        submission.language, comparison.stats.accuracy, speed.gross_wpm, verdict
    );

    Ok(Assessment {
        comparison,
        speed,
        verdict,
        performance_level,
    })
}
