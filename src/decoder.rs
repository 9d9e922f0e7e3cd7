use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{KeyIdError, MalformedKeypair};
use crate::key::Keypair;

pub const KEYPAIR_LEN: usize = 64;

/// Check a parsed JSON value is an array of bytes and return its first 64.
/// Every element is range-checked, including any past index 63.
pub fn keypair_bytes(v: &Value) -> Result<[u8; KEYPAIR_LEN], MalformedKeypair> {
    let arr = v.as_array().ok_or(MalformedKeypair::NotAnArray)?;

    let mut bytes = Vec::with_capacity(arr.len());
    for (index, el) in arr.iter().enumerate() {
        let b = el
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| MalformedKeypair::NotAByte {
                index,
                value: el.to_string(),
            })?;
        bytes.push(b);
    }

    if bytes.len() < KEYPAIR_LEN {
        return Err(MalformedKeypair::TooShort { len: bytes.len() });
    }

    let mut out = [0u8; KEYPAIR_LEN];
    out.copy_from_slice(&bytes[..KEYPAIR_LEN]);
    Ok(out)
}

/// Parse keypair JSON (raw file bytes; invalid UTF-8 is a parse error).
/// `path` is only used for diagnostics.
pub fn parse_keypair(raw: &[u8], path: &Path) -> Result<Keypair, KeyIdError> {
    let v: Value = serde_json::from_slice(raw).map_err(|source| KeyIdError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = keypair_bytes(&v).map_err(|reason| KeyIdError::MalformedKeypair {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(Keypair::from_bytes(&bytes))
}

/// Read and parse a keypair file (JSON array of 64 integers, 0-255).
pub fn load_keypair(path: &Path) -> Result<Keypair, KeyIdError> {
    let raw = fs::read(path).map_err(|source| KeyIdError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "read keypair file");
    parse_keypair(&raw, path)
}
