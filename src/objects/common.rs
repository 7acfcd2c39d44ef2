//! Common types shared across metadata objects.
//!
//! This module contains the value model used throughout the crate:
//! - [`MetadataValue`] - A primitive value reported by a metadata extractor
//! - [`FieldValue`] - A normalized result field, with an explicit
//!   [`FieldValue::Unknown`] sentinel for absent keys

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

// ============================================================================
// Sentinels and Canonical Keys
// ============================================================================

/// Sentinel written for any field that could not be determined.
pub const UNKNOWN: &str = "Unknown";

/// Canonical extractor key for the file size
pub const KEY_FILE_SIZE: &str = "FileSize";

/// Canonical extractor key for the content modification time
pub const KEY_FILE_MODIFY_DATE: &str = "FileModifyDate";

/// Canonical extractor key for the last access time
pub const KEY_FILE_ACCESS_DATE: &str = "FileAccessDate";

/// Canonical extractor key for the inode change time
pub const KEY_FILE_INODE_CHANGE_DATE: &str = "FileInodeChangeDate";

/// Canonical extractor key for the image width
pub const KEY_IMAGE_WIDTH: &str = "ImageWidth";

/// Canonical extractor key for the image height
pub const KEY_IMAGE_HEIGHT: &str = "ImageHeight";

/// Canonical extractor key for the color space
pub const KEY_COLOR_SPACE: &str = "ColorSpace";

/// Canonical extractor key for the bit depth
pub const KEY_BIT_DEPTH: &str = "BitDepth";

/// Extractor key holding a GPS position
pub const KEY_GPS_POSITION: &str = "GPSPosition";

/// Extractor key holding the camera manufacturer
pub const KEY_MAKE: &str = "Make";

// ============================================================================
// Metadata Values
// ============================================================================

/// A single primitive value reported by a metadata extractor.
///
/// Numbers keep their exact integer or floating point form so they are
/// written back out the way the extractor reported them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Numeric value
    Number(Number),
    /// Textual value
    Text(String),
}

impl MetadataValue {
    /// Converts a JSON value into a metadata value.
    ///
    /// `null` yields `None`. Booleans, arrays and objects are kept as
    /// their compact JSON rendering.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(MetadataValue::Text(s)),
            Value::Number(n) => Some(MetadataValue::Number(n)),
            other => Some(MetadataValue::Text(other.to_string())),
        }
    }

    /// Returns the text content, if this is a textual value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            MetadataValue::Number(_) => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Text(s)
    }
}

impl From<i64> for MetadataValue {
    fn from(n: i64) -> Self {
        MetadataValue::Number(n.into())
    }
}

impl From<u64> for MetadataValue {
    fn from(n: u64) -> Self {
        MetadataValue::Number(n.into())
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Number(n) => write!(f, "{}", n),
            MetadataValue::Text(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// Field Values
// ============================================================================

/// A normalized field of an analysis result.
///
/// Serializes as the literal string `"Unknown"` when the source key was
/// absent, otherwise as the value's native JSON type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "MetadataValue", into = "MetadataValue")]
pub enum FieldValue {
    /// The source key was absent
    #[default]
    Unknown,
    /// Textual value
    Text(String),
    /// Numeric value
    Number(Number),
}

impl FieldValue {
    /// Returns true if this is the [`FieldValue::Unknown`] sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, FieldValue::Unknown)
    }

    /// Returns the text content, if this is a textual value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Option<&MetadataValue>> for FieldValue {
    fn from(value: Option<&MetadataValue>) -> Self {
        match value {
            Some(v) => v.clone().into(),
            None => FieldValue::Unknown,
        }
    }
}

impl From<MetadataValue> for FieldValue {
    fn from(value: MetadataValue) -> Self {
        match value {
            MetadataValue::Text(s) if s == UNKNOWN => FieldValue::Unknown,
            MetadataValue::Text(s) => FieldValue::Text(s),
            MetadataValue::Number(n) => FieldValue::Number(n),
        }
    }
}

impl From<FieldValue> for MetadataValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Unknown => MetadataValue::Text(UNKNOWN.to_string()),
            FieldValue::Text(s) => MetadataValue::Text(s),
            FieldValue::Number(n) => MetadataValue::Number(n),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Unknown => write!(f, "{}", UNKNOWN),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}
