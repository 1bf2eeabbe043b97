//! Parsing of scanned donor QR payloads.
//!
//! Current badges encode a JSON object with the donor's uid and optional
//! contact details; older badges carried the uid as a bare string. The
//! legacy fallback accepts any raw payload of at least 36 characters, the
//! length of a canonical UUID, without further syntax checks, and passes
//! the payload through untouched.

use serde::Deserialize;
use serde::Serialize;

/// Minimum length for the legacy bare-uid fallback.
pub const LEGACY_UID_MIN_LEN: usize = 36;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanPayload {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognized scan payload ({len} bytes)")]
    Unrecognized { len: usize },
}

/// Parse a scanned payload: JSON first, legacy bare-uid fallback second.
pub fn parse_payload(raw: &str) -> Result<ScanPayload, ParseError> {
    if let Ok(payload) = serde_json::from_str::<ScanPayload>(raw) {
        return Ok(payload);
    }
    if raw.len() >= LEGACY_UID_MIN_LEN {
        return Ok(ScanPayload {
            uid: raw.to_string(),
            name: None,
            email: None,
            timestamp: None,
        });
    }
    Err(ParseError::Unrecognized { len: raw.len() })
}
