use crate::models::QualificationConfig;

/// UP Police typing exam rules: 85% accuracy, and a minimum gross speed of 30 WPM for
/// English or 25 WPM for Hindi.
pub const DEFAULT_QUALIFICATION_CONFIG: &QualificationConfig = &QualificationConfig {
    min_accuracy: 85,
    min_gross_wpm_english: 30.0,
    min_gross_wpm_hindi: 25.0,
};
