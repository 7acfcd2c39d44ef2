//! Forensic analyzer.
//!
//! Normalizes raw collector output into an [`AnalysisResult`] and applies
//! the forensic heuristics. The analyzer never touches the file system or
//! spawns processes itself; [`inspect`] is the only entry point that does,
//! and only through a [`Collector`].
//!
//! # Example
//!
//! ```rust
//! use exif_forensics::analyzer::analyze;
//! use exif_forensics::objects::RawMetadata;
//!
//! let mut meta = RawMetadata::new();
//! meta.insert("FileModifyDate", "2024:01:01 10:00:00+0000");
//! meta.insert("FileInodeChangeDate", "2024:01:01 10:00:05+0000");
//!
//! let result = analyze(".hidden.png", ".hidden.png: PNG image data", &meta);
//! assert_eq!(result.file_type, "PNG image data");
//! assert_eq!(result.forensic_notes.len(), 3);
//! ```

use crate::collector::Collector;
use crate::error::{Error, Result};
use crate::objects::{
    AnalysisResult, FieldValue, ForensicNote, RawMetadata, KEY_BIT_DEPTH, KEY_COLOR_SPACE,
    KEY_FILE_ACCESS_DATE, KEY_FILE_INODE_CHANGE_DATE, KEY_FILE_MODIFY_DATE, KEY_FILE_SIZE,
    KEY_GPS_POSITION, KEY_IMAGE_HEIGHT, KEY_IMAGE_WIDTH, KEY_MAKE, UNKNOWN,
};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use std::path::Path;
use tracing::debug;

const SECONDS_PER_DAY: i64 = 86_400;

/// Analyzes the raw collector output for `path`.
///
/// `raw_type` is the description line from a file-type identification
/// tool (`"<path>: <description>"`), and `metadata` the first record of a
/// metadata extractor. Missing values become `"Unknown"`.
pub fn analyze(path: &str, raw_type: &str, metadata: &RawMetadata) -> AnalysisResult {
    let field = |key: &str| FieldValue::from(metadata.get(key));

    let mut result = AnalysisResult {
        filename: path.to_string(),
        file_type: file_type_from_description(raw_type),
        file_size: field(KEY_FILE_SIZE),
        modification_time: field(KEY_FILE_MODIFY_DATE),
        access_time: field(KEY_FILE_ACCESS_DATE),
        inode_change_time: field(KEY_FILE_INODE_CHANGE_DATE),
        image_width: field(KEY_IMAGE_WIDTH),
        image_height: field(KEY_IMAGE_HEIGHT),
        color_space: field(KEY_COLOR_SPACE),
        bit_depth: field(KEY_BIT_DEPTH),
        forensic_notes: Vec::new(),
    };

    let notes = [
        is_hidden(path).then_some(ForensicNote::HiddenFile),
        timestamp_note(&result.modification_time, &result.inode_change_time),
        lacks_provenance(metadata).then_some(ForensicNote::NoProvenance),
    ];
    result.forensic_notes = notes.iter().flatten().map(|n| n.to_string()).collect();

    debug!(
        filename = path,
        notes = result.forensic_notes.len(),
        "analysis complete"
    );
    result
}

/// Checks that `path` exists, collects its metadata, and analyzes it.
///
/// Returns [`Error::FileNotFound`] without consulting the collector when
/// the path does not exist.
pub fn inspect<C: Collector + ?Sized>(
    path: impl AsRef<Path>,
    collector: &C,
) -> Result<AnalysisResult> {
    let path = path.as_ref();
    let filename = path.to_string_lossy().into_owned();

    if !path.exists() {
        return Err(Error::FileNotFound(filename));
    }

    debug!(filename = %filename, "collecting metadata");
    let raw_type = collector.file_type_description(path);
    let metadata = collector.metadata(path);

    Ok(analyze(&filename, &raw_type, &metadata))
}

/// Extracts the description after the first `:` of a `file(1)` line.
///
/// Returns `"Unknown"` when there is no delimiter.
pub fn file_type_from_description(raw_type: &str) -> String {
    match raw_type.split_once(':') {
        Some((_, description)) => description.trim().to_string(),
        None => UNKNOWN.to_string(),
    }
}

/// Returns true if the file name component of `path` starts with `.`.
///
/// Only the basename is checked: `dir/.a.png` is hidden, `./a.png` is not.
pub fn is_hidden(path: &str) -> bool {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .starts_with('.')
}

/// Returns true if neither a GPS position nor a camera make is present.
pub fn lacks_provenance(metadata: &RawMetadata) -> bool {
    !metadata.contains_key(KEY_GPS_POSITION) && !metadata.contains_key(KEY_MAKE)
}

/// Parses an extractor timestamp such as `2024:01:15 10:30:00+0900`.
///
/// The offset may also be written `+09:00` or `Z`, and must follow the
/// seconds field directly.
pub fn parse_exif_timestamp(s: &str) -> Result<DateTime<FixedOffset>> {
    if !offset_follows_seconds(s) {
        return Err(Error::InvalidTimestamp(format!(
            "Offset must follow seconds: {}",
            s
        )));
    }

    let formats = ["%Y:%m:%d %H:%M:%S%z", "%Y:%m:%d %H:%M:%S%:z"];

    for fmt in formats {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%SZ") {
        return Ok(Utc.from_utc_datetime(&naive).fixed_offset());
    }

    Err(Error::InvalidTimestamp(format!("Cannot parse timestamp: {}", s)))
}

// chrono's %z skips leading whitespace; the extractor format has none.
fn offset_follows_seconds(s: &str) -> bool {
    let Some((_, time)) = s.split_once(' ') else {
        return false;
    };
    let seconds = time.splitn(3, ':').nth(2).unwrap_or("");
    matches!(
        seconds
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .chars()
            .next(),
        Some('+' | '-' | 'Z')
    )
}

/// Seconds-of-day component of `later - earlier`.
///
/// This is the seconds part of a (days, seconds) duration with seconds in
/// `0..86400`: spans of a day or more lose their whole days, and negative
/// spans wrap around to a positive value. Likely a latent defect in the
/// heuristic, kept for output compatibility.
pub fn seconds_of_day_delta(
    earlier: DateTime<FixedOffset>,
    later: DateTime<FixedOffset>,
) -> i64 {
    (later - earlier).num_seconds().rem_euclid(SECONDS_PER_DAY)
}

fn timestamp_note(modified: &FieldValue, inode_changed: &FieldValue) -> Option<ForensicNote> {
    if modified.is_unknown() || inode_changed.is_unknown() {
        return None;
    }

    let parse = |value: &FieldValue| match value.as_str() {
        Some(s) => parse_exif_timestamp(s),
        None => Err(Error::InvalidTimestamp(value.to_string())),
    };

    match (parse(modified), parse(inode_changed)) {
        (Ok(mtime), Ok(ctime)) => {
            let secs = seconds_of_day_delta(mtime, ctime);
            (secs > 0).then_some(ForensicNote::InodeChangedAfterModification(secs))
        }
        (Err(e), _) | (_, Err(e)) => {
            debug!(error = %e, "timestamp comparison skipped");
            Some(ForensicNote::UnparseableTime)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::StaticCollector;
    use crate::objects::MetadataValue;

    fn timestamps(mtime: &str, ctime: &str) -> RawMetadata {
        let mut meta = RawMetadata::new();
        meta.insert(KEY_FILE_MODIFY_DATE, mtime);
        meta.insert(KEY_FILE_INODE_CHANGE_DATE, ctime);
        meta.insert(KEY_MAKE, "Canon");
        meta
    }

    #[test]
    fn test_file_type_after_first_colon() {
        assert_eq!(
            file_type_from_description("ASCII text: UTF-8 Unicode"),
            "UTF-8 Unicode"
        );
        assert_eq!(
            file_type_from_description("aurora.png: PNG image data, 800 x 600\n"),
            "PNG image data, 800 x 600"
        );
        assert_eq!(file_type_from_description("a: b: c"), "b: c");
        assert_eq!(file_type_from_description("no delimiter here"), "Unknown");
        assert_eq!(file_type_from_description(""), "Unknown");
    }

    #[test]
    fn test_hidden_file() {
        assert!(is_hidden(".aurora.png"));
        assert!(is_hidden("photos/.aurora.png"));
        assert!(!is_hidden("aurora.png"));
        assert!(!is_hidden("./aurora.png"));
        assert!(!is_hidden(".config/aurora.png"));
    }

    #[test]
    fn test_hidden_note() {
        let meta = RawMetadata::new();
        let hidden = analyze(".secret.jpg", "", &meta);
        let visible = analyze("secret.jpg", "", &meta);

        assert_eq!(hidden.forensic_notes[0], "File is hidden (starts with '.')");
        assert!(!visible.has_note(ForensicNote::HiddenFile));
    }

    #[test]
    fn test_missing_keys_are_unknown() {
        let result = analyze("a.png", "a.png: PNG image data", &RawMetadata::new());

        assert_eq!(result.file_type, "PNG image data");
        for field in [
            &result.file_size,
            &result.modification_time,
            &result.access_time,
            &result.inode_change_time,
            &result.image_width,
            &result.image_height,
            &result.color_space,
            &result.bit_depth,
        ] {
            assert!(field.is_unknown());
        }
        assert_eq!(
            result.forensic_notes,
            vec!["No camera or GPS data found. Possibly edited or from another source"]
        );
    }

    #[test]
    fn test_native_types_preserved() {
        let mut meta = RawMetadata::new();
        meta.insert(KEY_IMAGE_WIDTH, 800u64);
        meta.insert(KEY_COLOR_SPACE, "sRGB");
        meta.insert(KEY_FILE_SIZE, "12 kB");

        let result = analyze("a.png", "", &meta);
        assert_eq!(result.image_width, FieldValue::Number(800u64.into()));
        assert_eq!(result.color_space, FieldValue::Text("sRGB".to_string()));
        assert_eq!(result.file_size, FieldValue::Text("12 kB".to_string()));
        assert!(result.image_height.is_unknown());
    }

    #[test]
    fn test_inode_change_after_modification() {
        let meta = timestamps("2024:01:01 10:00:00+0000", "2024:01:01 10:00:05+0000");
        let result = analyze("a.png", "", &meta);

        assert_eq!(
            result.forensic_notes,
            vec!["Inode change time is 5 seconds after modification time"]
        );
    }

    #[test]
    fn test_equal_timestamps_produce_no_note() {
        let meta = timestamps("2024:01:01 10:00:00+0000", "2024:01:01 10:00:00+0000");
        assert!(analyze("a.png", "", &meta).forensic_notes.is_empty());
    }

    #[test]
    fn test_colon_offsets_and_mixed_zones() {
        let meta = timestamps("2024:01:01 19:00:00+09:00", "2024:01:01 10:00:10+00:00");
        let result = analyze("a.png", "", &meta);
        assert!(result.has_note(ForensicNote::InodeChangedAfterModification(10)));
    }

    #[test]
    fn test_negative_delta_wraps() {
        let meta = timestamps("2024:01:01 10:00:01+0000", "2024:01:01 10:00:00+0000");
        let result = analyze("a.png", "", &meta);
        assert!(result.has_note(ForensicNote::InodeChangedAfterModification(86_399)));
    }

    #[test]
    fn test_whole_days_are_dropped() {
        let meta = timestamps("2024:01:01 10:00:00+0000", "2024:01:03 10:00:00+0000");
        assert!(analyze("a.png", "", &meta).forensic_notes.is_empty());

        let meta = timestamps("2024:01:01 10:00:00+0000", "2024:01:02 10:00:30+0000");
        let result = analyze("a.png", "", &meta);
        assert!(result.has_note(ForensicNote::InodeChangedAfterModification(30)));
    }

    #[test]
    fn test_unparseable_timestamp() {
        let meta = timestamps("2024-01-01T10:00:00Z", "2024:01:01 10:00:05+0000");
        let result = analyze("a.png", "", &meta);
        assert_eq!(result.forensic_notes, vec!["Unable to parse time information"]);

        let mut meta = timestamps("2024:01:01 10:00:00+0000", "ignored");
        meta.insert(KEY_FILE_INODE_CHANGE_DATE, MetadataValue::from(1_704_103_205i64));
        let result = analyze("a.png", "", &meta);
        assert!(result.has_note(ForensicNote::UnparseableTime));
    }

    #[test]
    fn test_unknown_timestamp_skips_check() {
        let mut meta = RawMetadata::new();
        meta.insert(KEY_FILE_MODIFY_DATE, "garbage");
        meta.insert(KEY_GPS_POSITION, "37 deg 33' 59.00\" N, 126 deg 58' 41.00\" E");

        let result = analyze("a.png", "", &meta);
        assert!(result.inode_change_time.is_unknown());
        assert!(result.forensic_notes.is_empty());
    }

    #[test]
    fn test_provenance_keys() {
        let mut meta = RawMetadata::new();
        assert!(lacks_provenance(&meta));

        meta.insert(KEY_MAKE, "");
        assert!(!lacks_provenance(&meta));

        let meta: RawMetadata = [(KEY_GPS_POSITION, "0, 0")].into_iter().collect();
        assert!(!lacks_provenance(&meta));
    }

    #[test]
    fn test_null_gps_position_counts_as_absent() {
        let meta = crate::reader::parse_exiftool_json(r#"[{"GPSPosition": null}]"#).unwrap();
        let result = analyze("a.png", "", &meta);
        assert!(result.has_note(ForensicNote::NoProvenance));
    }

    #[test]
    fn test_note_order() {
        let meta: RawMetadata = [
            (KEY_FILE_MODIFY_DATE, "2024:01:01 10:00:00+0000"),
            (KEY_FILE_INODE_CHANGE_DATE, "not a time"),
        ]
        .into_iter()
        .collect();

        let result = analyze(".a.png", "", &meta);
        assert_eq!(
            result.forensic_notes,
            vec![
                "File is hidden (starts with '.')",
                "Unable to parse time information",
                "No camera or GPS data found. Possibly edited or from another source",
            ]
        );
    }

    #[test]
    fn test_parse_exif_timestamp() {
        let ts = parse_exif_timestamp("2024:01:15 10:30:00+0000").unwrap();
        assert_eq!(ts.timestamp(), 1705314600);

        let ts = parse_exif_timestamp("2024:01:15 19:30:00+09:00").unwrap();
        assert_eq!(ts.timestamp(), 1705314600);

        let ts = parse_exif_timestamp("2024:01:15 10:30:00Z").unwrap();
        assert_eq!(ts.timestamp(), 1705314600);

        assert!(parse_exif_timestamp("2024:01:15 10:30:00").is_err());
        assert!(parse_exif_timestamp("Unknown").is_err());
    }

    #[test]
    fn test_space_before_offset_is_unparseable() {
        assert!(matches!(
            parse_exif_timestamp("2024:01:01 10:00:00 +0000"),
            Err(Error::InvalidTimestamp(_))
        ));
        assert!(parse_exif_timestamp("2024:01:01 10:00:00\t+09:00").is_err());

        let meta = timestamps("2024:01:01 10:00:00 +0000", "2024:01:01 10:00:05+0000");
        let result = analyze("a.png", "", &meta);
        assert!(result.has_note(ForensicNote::UnparseableTime));
        assert_eq!(result.forensic_notes.len(), 1);
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.png");
        let collector = StaticCollector::new("ignored: data", RawMetadata::new());

        match inspect(&missing, &collector) {
            Err(Error::FileNotFound(name)) => {
                assert_eq!(name, missing.to_string_lossy());
            }
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_inspect_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".aurora.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let mut meta = RawMetadata::new();
        meta.insert(KEY_IMAGE_WIDTH, 1920u64);
        let collector = StaticCollector::new(".aurora.png: PNG image data", meta);

        let result = inspect(&path, &collector).unwrap();
        assert_eq!(result.filename, path.to_string_lossy());
        assert_eq!(result.file_type, "PNG image data");
        assert_eq!(result.image_width, FieldValue::Number(1920u64.into()));
        assert!(result.has_note(ForensicNote::HiddenFile));
        assert!(result.has_note(ForensicNote::NoProvenance));
    }
}
