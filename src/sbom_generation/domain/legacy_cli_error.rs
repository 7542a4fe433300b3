use serde::Deserialize;
use thiserror::Error;

/// JSON error envelope printed by the legacy CLI when it exits non-zero.
///
/// `error` is mandatory; `ok` and `path` default when missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Error)]
#[error("{error_msg}")]
pub struct LegacyCliError {
    #[serde(default)]
    pub ok: bool,
    #[serde(rename = "error")]
    pub error_msg: String,
    #[serde(default)]
    pub path: String,
}

impl LegacyCliError {
    /// Decodes the envelope, `None` when `output` does not have its shape
    pub fn decode(output: &[u8]) -> Option<Self> {
        serde_json::from_slice(output).ok()
    }
}
