//! Metadata object types.
//!
//! This module contains the core data structures:
//!
//! - [`RawMetadata`] - Key/value metadata reported by an extractor
//! - [`AnalysisResult`] - The fixed-shape record produced for one file
//! - [`ForensicNote`] - A typed forensic observation
//!
//! Also provides common types:
//! - [`MetadataValue`] and [`FieldValue`] - Primitive and normalized values
//! - Canonical extractor key names and the [`UNKNOWN`] sentinel

mod common;
mod metadata;
mod result;

pub use common::{
    FieldValue, MetadataValue, KEY_BIT_DEPTH, KEY_COLOR_SPACE, KEY_FILE_ACCESS_DATE,
    KEY_FILE_INODE_CHANGE_DATE, KEY_FILE_MODIFY_DATE, KEY_FILE_SIZE, KEY_GPS_POSITION,
    KEY_IMAGE_HEIGHT, KEY_IMAGE_WIDTH, KEY_MAKE, UNKNOWN,
};
pub use metadata::RawMetadata;
pub use result::{AnalysisResult, ForensicNote};
