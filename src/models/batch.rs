use std::io::{Read, Write};

use log::info;

use crate::models::{Error, WordComparator};

const OUTPUT_HEADER: [&str; 7] = [
    "total_words",
    "correct_words",
    "wrong_words",
    "skipped_words",
    "extra_words",
    "total_errors",
    "accuracy",
];

/// Scores `reference,typed` CSV rows (with a header row), writing one stats row per input
/// row. Returns the number of rows scored.
pub fn score_csv<R: Read, W: Write>(reader: R, writer: W) -> Result<usize, Error> {
    let comparator = WordComparator::default();
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(OUTPUT_HEADER)?;

    let mut total_rows = 0;

    for (row_idx, record) in csv_reader.records().enumerate() {
        let record = record?;

        let (original_text, typed_text) = match (record.get(0), record.get(1)) {
            (Some(original_text), Some(typed_text)) => (original_text, typed_text),
            _ => {
                return Err(Error::ParserError(format!(
                    "submission row {} has {} fields, expected 2",
                    row_idx + 1,
                    record.len()
                )))
            }
        };

        let stats = comparator.compare(original_text, typed_text).stats;

        csv_writer.write_record(&[
            stats.total_words.to_string(),
            stats.correct_words.to_string(),
            stats.wrong_words.to_string(),
            stats.skipped_words.to_string(),
            stats.extra_words.to_string(),
            stats.total_errors.to_string(),
            stats.accuracy.to_string(),
        ])?;

        total_rows += 1;
    }

    csv_writer.flush()?;

    info!("Scored {} submissions", total_rows);

    Ok(total_rows)
}
