//! Single-file metadata extraction and forensic heuristics for Rust.
//!
//! This crate inspects one file at a time: it collects file-system and
//! embedded image metadata through external tools, normalizes it into a
//! fixed-shape record, and flags simple forensic indicators.
//!
//! # Features
//!
//! - **Normalization**: Heterogeneous extractor output becomes an
//!   [`AnalysisResult`] where every field is present, using `"Unknown"`
//!   for values that could not be determined.
//! - **Heuristics**: Hidden-file detection, inode-change/modification time
//!   comparison, and absence of camera or GPS provenance.
//! - **Collectors**: A [`Collector`] trait with a `file`/`exiftool` backed
//!   implementation and an in-memory one for replaying saved output.
//! - **JSON I/O**: Readers for `exiftool -j` output and writers for result
//!   records.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use exif_forensics::{inspect, ToolCollector};
//! use exif_forensics::writer::ResultWriter;
//!
//! let result = inspect("aurora.png", &ToolCollector::new()).unwrap();
//! println!("{}", ResultWriter::new().write_to_string(&result).unwrap());
//! ```
//!
//! # Analyzing Saved Output
//!
//! The analyzer itself is pure and can be fed synthetic input:
//!
//! ```rust
//! use exif_forensics::analyze;
//! use exif_forensics::reader::parse_exiftool_json;
//!
//! let meta = parse_exiftool_json(r#"[{"Make": "Canon", "ImageWidth": 4000}]"#).unwrap();
//! let result = analyze("IMG_0001.JPG", "IMG_0001.JPG: JPEG image data", &meta);
//! assert!(result.forensic_notes.is_empty());
//! ```
//!
//! # Module Structure
//!
//! - [`objects`] - Metadata values, raw metadata and result records
//! - [`analyzer`] - Normalization and forensic heuristics
//! - [`collector`] - External tool collectors
//! - [`reader`] - JSON parsers
//! - [`writer`] - JSON serialization of results
//! - [`error`] - Error types
//!
//! # Optional Features
//!
//! - `cli` - Build the `metadata_analysis` command-line tool

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod analyzer;
pub mod collector;
pub mod error;
pub mod objects;
pub mod reader;
pub mod writer;

// Re-export commonly used types at the crate root
pub use analyzer::{analyze, inspect};
pub use collector::{Collector, CollectorConfig, StaticCollector, ToolCollector};
pub use error::{Error, Result};
pub use objects::{AnalysisResult, FieldValue, ForensicNote, MetadataValue, RawMetadata};
pub use writer::{ResultWriter, WriterConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
