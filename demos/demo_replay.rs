//! demo_replay - Analyze previously saved `exiftool -j` output.
//!
//! Runs the forensic heuristics against metadata captured earlier, without
//! invoking any external tool. Handy when the evidence file itself is no
//! longer at hand.
//!
//! # Usage
//!
//! ```bash
//! exiftool -j photo.jpg > photo.json
//! file photo.jpg > photo.type
//! cargo run --example demo_replay photo.jpg photo.json [photo.type]
//! ```
//!
//! # Output
//!
//! One forensic note per line, or `no findings`.

use std::env;
use std::fs;
use std::path::Path;

use exif_forensics::{analyze, Collector, StaticCollector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        let program = args.first().map(String::as_str).unwrap_or("demo_replay");
        eprintln!("Usage: {} <filename> <exiftool.json> [file-type.txt]", program);
        std::process::exit(1);
    }

    let filename = &args[1];
    let raw_type = match args.get(3) {
        Some(path) => fs::read_to_string(path)?,
        None => String::new(),
    };
    let collector =
        StaticCollector::from_exiftool_output(raw_type, &fs::read_to_string(&args[2])?);

    let path = Path::new(filename);
    let result = analyze(
        filename,
        &collector.file_type_description(path),
        &collector.metadata(path),
    );

    println!("{} ({})", result.filename, result.file_type);
    if result.forensic_notes.is_empty() {
        println!("  no findings");
    }
    for note in &result.forensic_notes {
        println!("  - {}", note);
    }

    Ok(())
}
