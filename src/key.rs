use std::fmt;
use std::str::FromStr;

use zeroize::Zeroize;

use crate::encoding::{from_base58_32, to_base58};

/// 32-byte public key; displays as its base58 program id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        to_base58(&self.0)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for PublicKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(from_base58_32(s)?))
    }
}

/// 64-byte keypair: secret (bytes 0..32) || public (bytes 32..64).
pub struct Keypair {
    secret: [u8; 32], // zeroized on drop
    public: PublicKey,
}

impl Keypair {
    /// Split a validated 64-byte record into its halves.
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        let mut secret = [0u8; 32];
        let mut public = [0u8; 32];
        secret.copy_from_slice(&bytes[..32]);
        public.copy_from_slice(&bytes[32..64]);
        Self {
            secret,
            public: PublicKey(public),
        }
    }

    pub fn public(&self) -> PublicKey {
        self.public
    }
}

// Never print the secret half
impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public.to_base58())
            .finish_non_exhaustive()
    }
}

impl Drop for Keypair {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}
