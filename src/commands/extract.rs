use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::decoder::load_keypair;
use crate::error::KeyIdError;

/// Load the keypair at `keypair_path` and return its base58 program id.
pub fn program_id(keypair_path: &Path) -> Result<String, KeyIdError> {
    let keypair = load_keypair(keypair_path)?;
    let public = keypair.public();
    debug!(pubkey_hex = %hex::encode(public.as_bytes()), "extracted public key");
    Ok(public.to_base58())
}

/// Write the id verbatim (no newline), truncating any existing file.
/// The parent directory must already exist.
pub fn write_program_id(out: &Path, id: &str) -> Result<(), KeyIdError> {
    fs::write(out, id).map_err(|source| KeyIdError::OutputError {
        path: out.to_path_buf(),
        source,
    })?;
    info!(path = %out.display(), "wrote program id");
    Ok(())
}

/// Full flow: load → encode → print `id\n` to `stdout` → save to `out` (unless `None`).
/// Nothing is written to `out` unless the id was derived successfully.
pub fn run<W: Write>(
    keypair_path: &Path,
    out: Option<&Path>,
    stdout: &mut W,
) -> anyhow::Result<String> {
    let id = program_id(keypair_path)?;

    writeln!(stdout, "{}", id)?;

    if let Some(p) = out {
        write_program_id(p, &id)?;
    }
    Ok(id)
}
