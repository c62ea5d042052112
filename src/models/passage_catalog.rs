use std::io::Read;

use flate2::read::GzDecoder;
use log::debug;

use crate::constants::COMPRESSED_SAMPLE_PASSAGES_BYTES;
use crate::models::{Error, Language};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub language: Language,
    pub title: String,
    pub content: String,
}

/// Practice passages, one or more per language.
#[derive(Debug, Clone, Default)]
pub struct PassageCatalog {
    passages: Vec<Passage>,
}

impl PassageCatalog {
    /// Loads the sample passages compressed into the binary at build time.
    pub fn load_embedded() -> Result<Self, Error> {
        let decoder = GzDecoder::new(COMPRESSED_SAMPLE_PASSAGES_BYTES);

        Self::from_csv_reader(decoder)
    }

    /// Reads `language,title,content` rows (with a header row).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut passages = Vec::new();

        for (row_idx, record) in csv_reader.records().enumerate() {
            let record = record?;

            match (record.get(0), record.get(1), record.get(2)) {
                (Some(language), Some(title), Some(content)) => passages.push(Passage {
                    language: Language::from_name(language),
                    title: title.to_string(),
                    content: content.to_string(),
                }),
                _ => {
                    return Err(Error::ParserError(format!(
                        "passage row {} has {} fields, expected 3",
                        row_idx + 1,
                        record.len()
                    )))
                }
            }
        }

        debug!("Loaded {} passages", passages.len());

        Ok(PassageCatalog { passages })
    }

    /// First passage for the given language.
    pub fn get(&self, language: Language) -> Option<&Passage> {
        self.passages
            .iter()
            .find(|passage| passage.language == language)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Passage> {
        self.passages.iter()
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }
}
