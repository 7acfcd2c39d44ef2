//! Result writer for serializing analysis records to JSON.
//!
//! # Example
//!
//! ```rust
//! use exif_forensics::objects::AnalysisResult;
//! use exif_forensics::writer::ResultWriter;
//!
//! let result = AnalysisResult::with_filename("aurora.png");
//! let json = ResultWriter::new().write_to_string(&result).unwrap();
//! assert!(json.starts_with("{\n  \"filename\": \"aurora.png\""));
//! ```

use crate::error::Result;
use crate::objects::AnalysisResult;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Default name of the result file.
pub const DEFAULT_OUTPUT_FILE: &str = "metadata_analysis_result.json";

/// Configuration options for the result writer.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Whether to indent the output for readability
    pub indent: bool,
    /// Indentation string (default: two spaces)
    pub indent_string: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: true,
            indent_string: "  ".to_string(),
        }
    }
}

impl WriterConfig {
    /// Creates a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compact configuration (no indentation).
    pub fn compact() -> Self {
        Self {
            indent: false,
            indent_string: String::new(),
        }
    }

    /// Sets whether to indent the output.
    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the indentation string.
    pub fn with_indent_string(mut self, s: impl Into<String>) -> Self {
        self.indent_string = s.into();
        self
    }
}

/// JSON writer for [`AnalysisResult`] records.
#[derive(Debug, Clone, Default)]
pub struct ResultWriter {
    config: WriterConfig,
}

impl ResultWriter {
    /// Creates a new writer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new writer with the specified configuration.
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Writes a result to a string.
    pub fn write_to_string(&self, result: &AnalysisResult) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(result, &mut buffer)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Writes a result to any Write implementation.
    ///
    /// No trailing newline is written.
    pub fn write<W: Write>(&self, result: &AnalysisResult, writer: W) -> Result<()> {
        if self.config.indent {
            let formatter = PrettyFormatter::with_indent(self.config.indent_string.as_bytes());
            let mut ser = Serializer::with_formatter(writer, formatter);
            result.serialize(&mut ser)?;
        } else {
            let mut ser = Serializer::with_formatter(writer, CompactFormatter);
            result.serialize(&mut ser)?;
        }
        Ok(())
    }

    /// Writes a result to a file, creating or truncating it.
    pub fn write_to_file(&self, result: &AnalysisResult, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "writing analysis result");

        let mut out = BufWriter::new(File::create(path)?);
        self.write(result, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Convenience function to write a result to an indented JSON string.
pub fn to_string(result: &AnalysisResult) -> Result<String> {
    ResultWriter::new().write_to_string(result)
}

/// Convenience function to write a result to a compact JSON string.
pub fn to_string_compact(result: &AnalysisResult) -> Result<String> {
    ResultWriter::with_config(WriterConfig::compact()).write_to_string(result)
}
