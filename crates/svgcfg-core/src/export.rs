//! Exporter: merged `CanvasConfig` → portable JSON blob.
//!
//! The blob is the JSON encoding of the group array, meant to be written
//! to a `config.json` file. Decoding the output reproduces an equal
//! `CanvasConfig` value.

use crate::model::CanvasConfig;

/// Default file name for the exported configuration.
pub const DEFAULT_EXPORT_NAME: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Nothing has been uploaded yet — surfaced to the user as a
    /// blocking warning, not a fault.
    #[error("nothing to export: the canvas configuration is empty")]
    EmptyConfig,
    #[error("canvas configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a merged configuration. Fails on an empty configuration.
pub fn export_config(config: &CanvasConfig) -> Result<String, ExportError> {
    if config.is_empty() {
        return Err(ExportError::EmptyConfig);
    }
    Ok(serde_json::to_string(config)?)
}

/// Decode a previously exported configuration. Tolerates the legacy
/// `nanoid` identifier field name.
pub fn import_config(text: &str) -> Result<CanvasConfig, ExportError> {
    Ok(serde_json::from_str(text)?)
}
