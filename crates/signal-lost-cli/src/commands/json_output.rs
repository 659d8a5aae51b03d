//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag so that build scripts can parse what
//! was written and verify file hashes.

use serde::Serialize;

use signal_lost_textures::{MapFile, MaterialReport};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Input photograph could not be decoded
    pub const DECODE: &str = "CLI_001";
    /// Generation error (wraps library errors)
    pub const GENERATION_ERROR: &str = "CLI_002";
    /// Derived maps could not be written
    pub const WRITE_ERROR: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Output of a material generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    pub success: bool,
    pub size: u32,
    pub seed: u32,
    pub materials: Vec<MaterialReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
    pub duration_ms: u64,
}

/// Output of a `--from-albedo` run.
#[derive(Debug, Clone, Serialize)]
pub struct DeriveOutput {
    pub success: bool,
    pub input: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<MapFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}
