//! JSON readers.
//!
//! Parses the structured output of `exiftool -j` into [`RawMetadata`], and
//! parses serialized [`AnalysisResult`] records back into memory.
//!
//! # Example
//!
//! ```rust
//! use exif_forensics::reader::parse_exiftool_json;
//!
//! let output = r#"[{"SourceFile": "a.png", "ImageWidth": 640, "ColorSpace": "sRGB"}]"#;
//! let meta = parse_exiftool_json(output).unwrap();
//! assert!(meta.contains_key("ImageWidth"));
//! ```

use crate::error::{Error, Result};
use crate::objects::{AnalysisResult, RawMetadata};
use serde_json::Value;
use std::io::Read;
use tracing::debug;

/// Parses `exiftool -j` output and returns its first record.
///
/// The output must be a JSON array whose first element is an object.
/// Further records are ignored.
pub fn parse_exiftool_json(output: &str) -> Result<RawMetadata> {
    let value: Value = serde_json::from_str(output)?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(Error::UnexpectedRecord(format!(
                "expected an array of records, found {}",
                json_kind(&other)
            )))
        }
    };

    debug!(records = records.len(), "parsed extractor output");

    match records.into_iter().next() {
        Some(Value::Object(record)) => Ok(RawMetadata::from_json_object(record)),
        Some(other) => Err(Error::UnexpectedRecord(format!(
            "expected an object, found {}",
            json_kind(&other)
        ))),
        None => Err(Error::EmptyMetadata),
    }
}

/// Parses a serialized analysis result from a reader.
pub fn parse_result<R: Read>(reader: R) -> Result<AnalysisResult> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parses a serialized analysis result from a string.
pub fn parse_result_str(s: &str) -> Result<AnalysisResult> {
    Ok(serde_json::from_str(s)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{FieldValue, MetadataValue};

    const EXIFTOOL_OUTPUT: &str = r#"[{
  "SourceFile": "aurora.png",
  "ExifToolVersion": 12.76,
  "FileName": "aurora.png",
  "FileSize": "1894 kB",
  "FileModifyDate": "2024:05:01 12:00:00+09:00",
  "FileAccessDate": "2024:05:02 08:15:00+09:00",
  "FileInodeChangeDate": "2024:05:01 12:00:07+09:00",
  "ImageWidth": 1920,
  "ImageHeight": 1080,
  "BitDepth": 8,
  "ColorType": "RGB with Alpha",
  "Warning": null
}]"#;

    #[test]
    fn test_parse_exiftool_json() {
        let meta = parse_exiftool_json(EXIFTOOL_OUTPUT).unwrap();

        assert_eq!(meta.get("ImageWidth"), Some(&MetadataValue::from(1920u64)));
        assert_eq!(
            meta.get("FileSize").and_then(|v| v.as_str()),
            Some("1894 kB")
        );
        assert_eq!(meta.get("ExifToolVersion").unwrap().to_string(), "12.76");
        assert!(!meta.contains_key("Warning"));
        assert!(!meta.contains_key("Make"));
    }

    #[test]
    fn test_only_first_record_used() {
        let meta =
            parse_exiftool_json(r#"[{"SourceFile": "a"}, {"SourceFile": "b", "Make": "x"}]"#)
                .unwrap();
        assert!(!meta.contains_key("Make"));
    }

    #[test]
    fn test_malformed_output() {
        assert!(matches!(
            parse_exiftool_json("Error: File not found - x.png"),
            Err(Error::Json(_))
        ));
        assert!(matches!(parse_exiftool_json(""), Err(Error::Json(_))));
        assert!(matches!(
            parse_exiftool_json("[]"),
            Err(Error::EmptyMetadata)
        ));
        assert!(matches!(
            parse_exiftool_json(r#"{"Make": "Canon"}"#),
            Err(Error::UnexpectedRecord(_))
        ));
        assert!(matches!(
            parse_exiftool_json("[42]"),
            Err(Error::UnexpectedRecord(_))
        ));
    }

    #[test]
    fn test_parse_result() {
        let json = r#"{
  "filename": "a.png",
  "file_type": "PNG image data",
  "file_size": "12 kB",
  "modification_time": "Unknown",
  "access_time": "Unknown",
  "inode_change_time": "Unknown",
  "image_width": 64,
  "image_height": 64,
  "color_space": "Unknown",
  "bit_depth": 8,
  "forensic_notes": []
}"#;
        let result = parse_result(json.as_bytes()).unwrap();
        assert_eq!(result.filename, "a.png");
        assert!(result.modification_time.is_unknown());
        assert_eq!(result.image_width, FieldValue::Number(64u64.into()));

        assert!(parse_result_str(r#"{"filename": "a.png"}"#).is_err());
    }
}
