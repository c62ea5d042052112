/// Keystrokes counted as one word when deriving speed ("5 keys = 1 word").
pub const KEYSTROKES_PER_WORD: f64 = 5.0;

pub const SECONDS_PER_MINUTE: f64 = 60.0;

// Written by `build.rs`; the file name must match `COMPRESSED_SAMPLE_PASSAGES_FILE_NAME`
pub const COMPRESSED_SAMPLE_PASSAGES_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/sample_passages.csv.gz"));
