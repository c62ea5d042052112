#[path = "shared/constants.rs"]
mod constants;
use constants::{COMPRESSED_SAMPLE_PASSAGES_FILE_NAME, SAMPLE_PASSAGES_CSV_FILE_PATH};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io::{self};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!(
        "cargo:rerun-if-changed={}",
        SAMPLE_PASSAGES_CSV_FILE_PATH.display()
    );

    let output_path = PathBuf::from(env::var("OUT_DIR")?).join(COMPRESSED_SAMPLE_PASSAGES_FILE_NAME);

    let mut input_file = File::open(&*SAMPLE_PASSAGES_CSV_FILE_PATH)?;
    let output_file = File::create(&output_path)?;

    // Compress the passages straight into OUT_DIR
    let mut encoder = GzEncoder::new(output_file, Compression::default());
    io::copy(&mut input_file, &mut encoder)?;
    encoder.finish()?;

    Ok(())
}
