pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const COMPARISON_CASES_CSV_PATH: &str = "tests/test_data_files/comparison_cases.csv";
