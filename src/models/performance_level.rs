use std::fmt;

use crate::types::WordsPerMinute;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PerformanceLevel {
    Novice,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl PerformanceLevel {
    pub fn from_wpm(wpm: WordsPerMinute) -> Self {
        if wpm >= 80.0 {
            PerformanceLevel::Expert
        } else if wpm >= 60.0 {
            PerformanceLevel::Advanced
        } else if wpm >= 40.0 {
            PerformanceLevel::Intermediate
        } else if wpm >= 20.0 {
            PerformanceLevel::Beginner
        } else {
            PerformanceLevel::Novice
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PerformanceLevel::Novice => "Novice",
            PerformanceLevel::Beginner => "Beginner",
            PerformanceLevel::Intermediate => "Intermediate",
            PerformanceLevel::Advanced => "Advanced",
            PerformanceLevel::Expert => "Expert",
        };

        write!(f, "{}", label)
    }
}
