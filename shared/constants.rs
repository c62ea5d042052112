#![allow(unused)] // Ignore due to all constants not being utilized across all environemnts

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static SAMPLE_PASSAGES_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "sample_passages.csv"));

pub static COMPRESSED_SAMPLE_PASSAGES_FILE_NAME: &str = "sample_passages.csv.gz";
