use std::fmt;

use crate::models::{ComparisonStats, Language, SpeedMetrics};
use crate::types::{AccuracyPercentage, WordsPerMinute};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualificationConfig {
    pub min_accuracy: AccuracyPercentage,
    pub min_gross_wpm_english: WordsPerMinute,
    pub min_gross_wpm_hindi: WordsPerMinute,
}

impl QualificationConfig {
    pub fn min_gross_wpm(&self, language: Language) -> WordsPerMinute {
        match language {
            Language::English => self.min_gross_wpm_english,
            Language::Hindi => self.min_gross_wpm_hindi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QualificationFailure {
    InsufficientAccuracy {
        accuracy: AccuracyPercentage,
        required: AccuracyPercentage,
    },
    InsufficientSpeed {
        gross_wpm: WordsPerMinute,
        required: WordsPerMinute,
    },
}

impl fmt::Display for QualificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualificationFailure::InsufficientAccuracy { accuracy, required } => {
                write!(f, "accuracy {}% is below the required {}%", accuracy, required)
            }
            QualificationFailure::InsufficientSpeed {
                gross_wpm,
                required,
            } => write!(
                f,
                "gross speed {:.2} WPM is below the required {:.2} WPM",
                gross_wpm, required
            ),
        }
    }
}

/// Pass/fail decision for an exam-mode submission.
#[derive(Debug, Clone, PartialEq)]
pub struct QualificationVerdict {
    pub language: Language,
    pub accuracy: AccuracyPercentage,
    pub gross_wpm: WordsPerMinute,
    pub required_accuracy: AccuracyPercentage,
    pub required_gross_wpm: WordsPerMinute,
    /// Empty when the submission qualifies.
    pub failures: Vec<QualificationFailure>,
}

impl QualificationVerdict {
    pub fn evaluate(
        config: &QualificationConfig,
        language: Language,
        stats: &ComparisonStats,
        speed: &SpeedMetrics,
    ) -> Self {
        let required_gross_wpm = config.min_gross_wpm(language);
        let mut failures = Vec::new();

        if stats.accuracy < config.min_accuracy {
            failures.push(QualificationFailure::InsufficientAccuracy {
                accuracy: stats.accuracy,
                required: config.min_accuracy,
            });
        }

        if speed.gross_wpm < required_gross_wpm {
            failures.push(QualificationFailure::InsufficientSpeed {
                gross_wpm: speed.gross_wpm,
                required: required_gross_wpm,
            });
        }

        QualificationVerdict {
            language,
            accuracy: stats.accuracy,
            gross_wpm: speed.gross_wpm,
            required_accuracy: config.min_accuracy,
            required_gross_wpm,
            failures,
        }
    }

    pub fn is_qualified(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for QualificationVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_qualified() {
            write!(f, "Qualified")
        } else {
            write!(f, "Not Qualified")
        }
    }
}
