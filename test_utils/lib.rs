pub mod constants;
pub mod models;

use csv::Reader;
use models::EvaluationResult;
use std::error::Error;
use std::{fs, path::Path};
use typescribe::{compare_words, AccuracyPercentage, ClassifiedWord, ComparisonStats};

/// One row of a comparison case table.
#[derive(Debug, Clone)]
pub struct ComparisonCase {
    pub reference: String,
    pub typed: String,
    pub expected_stats: ComparisonStats,
}

/// Utility to load comparison cases from a CSV file.
///
/// Columns: `reference,typed,total_words,correct_words,wrong_words,skipped_words,extra_words,accuracy`
pub fn load_comparison_cases_from_file(
    file_path: &str,
) -> Result<Vec<ComparisonCase>, Box<dyn Error>> {
    let mut cases = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() != 8 {
            eprintln!("Skipping invalid row: {:?}", record);
            continue;
        }

        let count = |idx: usize| -> Result<usize, Box<dyn Error>> {
            Ok(record.get(idx).unwrap_or_default().trim().parse()?)
        };

        let wrong_words = count(4)?;
        let skipped_words = count(5)?;
        let extra_words = count(6)?;

        cases.push(ComparisonCase {
            reference: record.get(0).unwrap_or_default().to_string(),
            typed: record.get(1).unwrap_or_default().to_string(),
            expected_stats: ComparisonStats {
                total_words: count(2)?,
                correct_words: count(3)?,
                wrong_words,
                skipped_words,
                extra_words,
                total_errors: wrong_words + skipped_words + extra_words,
                accuracy: count(7)? as AccuracyPercentage,
            },
        });
    }

    Ok(cases)
}

fn get_prefixed_lines(file_path: &Path, prefix: &str) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            line.trim_start()
                .strip_prefix(prefix)
                .map(|rest| rest.trim().to_string())
        })
        .collect()
}

// Helper function to get the reference passage from the text file
pub fn get_reference_text(file_path: &Path) -> String {
    get_prefixed_lines(file_path, "REFERENCE:").join(" ")
}

// Helper function to get the typed submission from the text file
pub fn get_typed_text(file_path: &Path) -> String {
    get_prefixed_lines(file_path, "TYPED:").join(" ")
}

/// Parses `EXPECTED: <status> <word> [<expected word>]` lines.
pub fn get_expected_words(file_path: &Path) -> Vec<ClassifiedWord> {
    get_prefixed_lines(file_path, "EXPECTED:")
        .iter()
        .map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();

            match parts.as_slice() {
                ["correct", word] => ClassifiedWord::correct(word),
                ["wrong", word, expected_word] => ClassifiedWord::wrong(word, expected_word),
                ["skipped", word] => ClassifiedWord::skipped(word),
                ["extra", word] => ClassifiedWord::extra(word),
                _ => panic!(
                    "{} - Malformed EXPECTED line: {:?}",
                    file_path.display(),
                    line
                ),
            }
        })
        .collect()
}

// Helper function to check if the file has an EXPECTED_ACCURACY line
pub fn get_expected_accuracy(file_path: &Path) -> Option<AccuracyPercentage> {
    get_prefixed_lines(file_path, "EXPECTED_ACCURACY:")
        .first()
        .map(|value| value.parse().expect("Invalid EXPECTED_ACCURACY value"))
}

// Helper function to run the test for each file in the directory
pub fn run_test_for_file(test_file_path: &str, use_assertions: bool) -> EvaluationResult {
    let path = Path::new(test_file_path);

    let reference_text = get_reference_text(path);
    let typed_text = get_typed_text(path);
    let expected_words = get_expected_words(path);
    let expected_accuracy = get_expected_accuracy(path);

    eprintln!("Testing file: {}", test_file_path);

    let comparison = compare_words(&reference_text, &typed_text);
    let evaluation_result = EvaluationResult::new(&expected_words, &comparison.typed_comparison);

    if use_assertions {
        assert!(
            evaluation_result.is_match(),
            "{} - Expected: {:?}, but got: {:?} (mismatched positions: {:?})",
            test_file_path,
            evaluation_result.expected,
            evaluation_result.actual,
            evaluation_result.mismatched_positions
        );

        if let Some(expected_accuracy) = expected_accuracy {
            assert_eq!(
                comparison.stats.accuracy, expected_accuracy,
                "{} - Accuracy mismatch",
                test_file_path
            );
        }
    }

    evaluation_result
}
