use anyhow::{anyhow, Result};

/// Base58 (Bitcoin/Solana alphabet) of raw bytes. Leading zero bytes become leading '1's.
pub fn to_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode base58 text that must hold exactly 32 bytes.
pub fn from_base58_32(s: &str) -> Result<[u8; 32]> {
    let v = bs58::decode(s.trim()).into_vec()?;
    let len = v.len();
    v.try_into()
        .map_err(|_| anyhow!("base58 key must decode to 32 bytes, got {}", len))
}
