use crate::constants::{KEYSTROKES_PER_WORD, SECONDS_PER_MINUTE};
use crate::models::Error;
use crate::types::WordsPerMinute;

/// Keystroke-based typing speed, counting five keystrokes as one word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedMetrics {
    pub gross_wpm: WordsPerMinute,
    /// Gross words less one word per error, floored at zero.
    pub net_wpm: WordsPerMinute,
    pub duration_secs: f64,
}

impl SpeedMetrics {
    pub fn from_keystrokes(
        typed_keystrokes: usize,
        total_errors: usize,
        duration_secs: f64,
    ) -> Result<Self, Error> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "test duration must be a positive number of seconds, got {}",
                duration_secs
            )));
        }

        if typed_keystrokes == 0 {
            return Ok(SpeedMetrics {
                gross_wpm: 0.0,
                net_wpm: 0.0,
                duration_secs,
            });
        }

        let minutes = duration_secs / SECONDS_PER_MINUTE;
        let gross_words = typed_keystrokes as f64 / KEYSTROKES_PER_WORD;

        Ok(SpeedMetrics {
            gross_wpm: gross_words / minutes,
            net_wpm: (gross_words - total_errors as f64).max(0.0) / minutes,
            duration_secs,
        })
    }
}
