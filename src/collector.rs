//! Metadata collectors.
//!
//! A [`Collector`] supplies the two raw inputs the analyzer needs: a
//! file-type description line and a [`RawMetadata`] mapping. The default
//! [`ToolCollector`] shells out to `file` and `exiftool -j`; the
//! [`StaticCollector`] replays fixed values.
//!
//! Collectors never fail: an unavailable tool or malformed output is
//! logged and degrades to an empty description or an empty mapping.

use crate::error::{Error, Result};
use crate::objects::RawMetadata;
use crate::reader::parse_exiftool_json;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Source of raw file-type and metadata information for a path.
pub trait Collector {
    /// Returns the file-type description line, e.g. `"a.png: PNG image data"`.
    fn file_type_description(&self, path: &Path) -> String;

    /// Returns the first metadata record for the path, or an empty mapping.
    fn metadata(&self, path: &Path) -> RawMetadata;
}

/// Configuration for [`ToolCollector`].
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// File-type identification command (default: `file`)
    pub file_command: String,
    /// Metadata extraction command (default: `exiftool`)
    pub exiftool_command: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            file_command: "file".to_string(),
            exiftool_command: "exiftool".to_string(),
        }
    }
}

impl CollectorConfig {
    /// Creates a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file-type identification command.
    pub fn with_file_command(mut self, cmd: impl Into<String>) -> Self {
        self.file_command = cmd.into();
        self
    }

    /// Sets the metadata extraction command.
    pub fn with_exiftool_command(mut self, cmd: impl Into<String>) -> Self {
        self.exiftool_command = cmd.into();
        self
    }
}

/// Collector backed by the external `file` and `exiftool` utilities.
#[derive(Debug, Clone, Default)]
pub struct ToolCollector {
    config: CollectorConfig,
}

impl ToolCollector {
    /// Creates a collector with default tool names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collector with the specified configuration.
    pub fn with_config(config: CollectorConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }
}

impl Collector for ToolCollector {
    fn file_type_description(&self, path: &Path) -> String {
        let mut cmd = Command::new(&self.config.file_command);
        cmd.arg(path);
        run_tool(cmd, &self.config.file_command).unwrap_or_else(|e| {
            warn!("{}", e);
            String::new()
        })
    }

    fn metadata(&self, path: &Path) -> RawMetadata {
        let mut cmd = Command::new(&self.config.exiftool_command);
        cmd.arg("-j").arg(path);

        let output = match run_tool(cmd, &self.config.exiftool_command) {
            Ok(output) => output,
            Err(e) => {
                warn!("{}", e);
                return RawMetadata::new();
            }
        };

        match parse_exiftool_json(&output) {
            Ok(meta) => meta,
            Err(e) => {
                warn!("Unable to parse exiftool output as JSON: {}", e);
                warn!("exiftool output: {}", output);
                RawMetadata::new()
            }
        }
    }
}

/// Runs a command and returns its stdout as (lossy) UTF-8.
///
/// The exit status is not inspected; tools such as `exiftool` report
/// per-file problems inside their regular output.
fn run_tool(mut cmd: Command, tool: &str) -> Result<String> {
    debug!(tool, "running {:?}", cmd);
    let output = cmd.output().map_err(|source| Error::ToolLaunch {
        tool: tool.to_string(),
        source,
    })?;

    if !output.status.success() {
        debug!(tool, status = %output.status, "tool exited unsuccessfully");
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Collector that returns fixed values regardless of path.
///
/// Useful for replaying saved tool output and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCollector {
    description: String,
    metadata: RawMetadata,
}

impl StaticCollector {
    /// Creates a collector returning `description` and `metadata`.
    pub fn new(description: impl Into<String>, metadata: RawMetadata) -> Self {
        Self {
            description: description.into(),
            metadata,
        }
    }

    /// Creates a collector from saved `exiftool -j` output.
    ///
    /// Malformed output yields an empty mapping, as with [`ToolCollector`].
    pub fn from_exiftool_output(description: impl Into<String>, output: &str) -> Self {
        let metadata = parse_exiftool_json(output).unwrap_or_else(|e| {
            warn!("Unable to parse exiftool output as JSON: {}", e);
            RawMetadata::new()
        });
        Self::new(description, metadata)
    }
}

impl Collector for StaticCollector {
    fn file_type_description(&self, _path: &Path) -> String {
        self.description.clone()
    }

    fn metadata(&self, _path: &Path) -> RawMetadata {
        self.metadata.clone()
    }
}
