//! AnalysisResult - the normalized record produced for one inspected file.
//!
//! The record has a fixed shape: every field is always serialized, using
//! the `"Unknown"` sentinel when a value could not be determined.

use crate::objects::common::{FieldValue, UNKNOWN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A forensic observation about the inspected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForensicNote {
    /// The file name starts with `.`
    HiddenFile,
    /// The inode change time trails the modification time by this many
    /// seconds of day
    InodeChangedAfterModification(i64),
    /// One of the file timestamps could not be parsed
    UnparseableTime,
    /// Neither a camera make nor a GPS position was found
    NoProvenance,
}

impl fmt::Display for ForensicNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForensicNote::HiddenFile => write!(f, "File is hidden (starts with '.')"),
            ForensicNote::InodeChangedAfterModification(secs) => write!(
                f,
                "Inode change time is {} seconds after modification time",
                secs
            ),
            ForensicNote::UnparseableTime => write!(f, "Unable to parse time information"),
            ForensicNote::NoProvenance => write!(
                f,
                "No camera or GPS data found. Possibly edited or from another source"
            ),
        }
    }
}

/// The result of analyzing a single file.
///
/// Field order matches the serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The input path, unmodified
    pub filename: String,
    /// File type description, or `"Unknown"`
    pub file_type: String,
    /// File size as reported by the extractor
    pub file_size: FieldValue,
    /// Content modification time
    pub modification_time: FieldValue,
    /// Last access time
    pub access_time: FieldValue,
    /// Inode (metadata) change time
    pub inode_change_time: FieldValue,
    /// Image width in pixels
    pub image_width: FieldValue,
    /// Image height in pixels
    pub image_height: FieldValue,
    /// Color space
    pub color_space: FieldValue,
    /// Bits per sample
    pub bit_depth: FieldValue,
    /// Observations in evaluation order
    pub forensic_notes: Vec<String>,
}

impl AnalysisResult {
    /// Creates a record for `filename` with every other field unknown.
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            file_type: UNKNOWN.to_string(),
            file_size: FieldValue::Unknown,
            modification_time: FieldValue::Unknown,
            access_time: FieldValue::Unknown,
            inode_change_time: FieldValue::Unknown,
            image_width: FieldValue::Unknown,
            image_height: FieldValue::Unknown,
            color_space: FieldValue::Unknown,
            bit_depth: FieldValue::Unknown,
            forensic_notes: Vec::new(),
        }
    }

    /// Returns true if the given note was recorded.
    pub fn has_note(&self, note: ForensicNote) -> bool {
        let rendered = note.to_string();
        self.forensic_notes.iter().any(|n| *n == rendered)
    }
}
