use std::fmt;

/// Passage language, which decides the minimum speed required to qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Case-insensitive. Any name other than `hindi` is treated as English, as on the exam
    /// result screen.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("hindi") {
            Language::Hindi
        } else {
            Language::English
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Hindi => write!(f, "Hindi"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Language::from_name("hindi"), Language::Hindi);
        assert_eq!(Language::from_name(" Hindi "), Language::Hindi);
        assert_eq!(Language::from_name("english"), Language::English);
        assert_eq!(Language::from_name("marathi"), Language::English);
        assert_eq!(Language::from_name(""), Language::English);
    }

    #[test]
    fn test_as_str_round_trips_through_from_name() {
        for language in [Language::English, Language::Hindi] {
            assert_eq!(Language::from_name(language.as_str()), language);
        }
    }
}
