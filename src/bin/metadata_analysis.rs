//! metadata_analysis - Inspect a single file for forensic indicators.
//!
//! This tool collects file-type and embedded metadata for one file using
//! `file` and `exiftool`, normalizes it into a fixed-shape JSON record,
//! and appends forensic notes (hidden file, timestamp anomaly, missing
//! camera/GPS provenance).
//!
//! # Usage
//!
//! ```bash
//! metadata_analysis [OPTIONS] <PATH>
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Analyze a file, printing the result and writing metadata_analysis_result.json
//! metadata_analysis aurora.png
//!
//! # Write the result somewhere else
//! metadata_analysis -o /tmp/aurora.json aurora.png
//!
//! # Print only, compact JSON, with debug logging on stderr
//! metadata_analysis --no-output-file --compact --debug aurora.png
//! ```
//!
//! # Output
//!
//! The record is printed to stdout and written to the output file. If the
//! input does not exist, an error line is printed and no file is written.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use exif_forensics::writer::{ResultWriter, WriterConfig, DEFAULT_OUTPUT_FILE};
use exif_forensics::{inspect, CollectorConfig, Error, ToolCollector};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Inspect a single file for forensic indicators.
#[derive(Parser, Debug)]
#[command(name = "metadata_analysis")]
#[command(version = VERSION)]
#[command(about = "Inspect a single file's metadata for forensic indicators")]
#[command(
    long_about = "Collects file-type and embedded metadata for one file using `file` and \
    `exiftool`, prints a normalized JSON record with forensic notes, and writes the same \
    record to an output file."
)]
struct Args {
    /// File to analyze
    path: PathBuf,

    /// Where to write the result
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Print the result without writing the output file
    #[arg(long)]
    no_output_file: bool,

    /// Output compact JSON (no indentation)
    #[arg(long)]
    compact: bool,

    /// File-type identification command
    #[arg(long, value_name = "CMD", default_value = "file")]
    file_command: String,

    /// Metadata extraction command
    #[arg(long, value_name = "CMD", default_value = "exiftool")]
    exiftool_command: String,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let collector = ToolCollector::with_config(
        CollectorConfig::new()
            .with_file_command(&args.file_command)
            .with_exiftool_command(&args.exiftool_command),
    );

    let result = match inspect(&args.path, &collector) {
        Ok(result) => result,
        Err(Error::FileNotFound(filename)) => {
            println!("Error: File '{}' not found.", filename);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let config = if args.compact {
        WriterConfig::compact()
    } else {
        WriterConfig::default()
    };
    let writer = ResultWriter::with_config(config);

    println!("{}", writer.write_to_string(&result)?);

    if !args.no_output_file {
        writer.write_to_file(&result, &args.output)?;
        tracing::debug!(output = %args.output.display(), "result written");
    }

    Ok(())
}
