use crate::models::{
    ComparisonResult, Language, PerformanceLevel, QualificationVerdict, SpeedMetrics,
};

/// A completed exam-mode test attempt, as handed over by the typing UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub original_text: String,
    pub typed_text: String,
    pub language: Language,
    /// Keystrokes that produced text (used for "5 keys = 1 word" speed).
    pub typed_keystrokes: usize,
    pub duration_secs: f64,
}

/// The scored outcome of a `Submission`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub comparison: ComparisonResult,
    pub speed: SpeedMetrics,
    pub verdict: QualificationVerdict,
    /// Banded from net speed.
    pub performance_level: PerformanceLevel,
}
