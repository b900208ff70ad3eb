//! HMAC-SHA256 commitment published before the player moves.

pub mod scheme;

pub use scheme::CommitmentScheme;

use crate::key::RoundKey;
use crate::{FairplayError, Result};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Digest size of the commitment in bytes
pub const COMMITMENT_SIZE: usize = 32;

/// Commitment = HMAC-SHA256(key, move name)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; COMMITMENT_SIZE]);

impl Commitment {
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_SIZE] {
        &self.0
    }

    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str.trim())?;
        let bytes: [u8; COMMITMENT_SIZE] = bytes.try_into().map_err(|b: Vec<u8>| {
            FairplayError::encoding(format!(
                "expected {} bytes, got {}",
                COMMITMENT_SIZE,
                b.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Lowercase hex, `2 * COMMITMENT_SIZE` characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Verify that the revealed key and move produce this commitment
    pub fn verify(&self, key: &RoundKey, move_name: &str) -> bool {
        HmacSha256Scheme::verify(self, key.as_bytes(), move_name.as_bytes())
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Commitment {
    type Err = FairplayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// The one MAC construction used for commitments
pub struct HmacSha256Scheme;

impl HmacSha256Scheme {
    fn mac(key: &[u8], message: &[u8]) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
        mac.update(message);
        mac
    }
}

impl CommitmentScheme for HmacSha256Scheme {
    type Key = [u8];
    type Commitment = Commitment;

    fn commit(key: &[u8], message: &[u8]) -> Commitment {
        Commitment(Self::mac(key, message).finalize().into_bytes().into())
    }

    fn verify(commitment: &Commitment, key: &[u8], message: &[u8]) -> bool {
        // constant-time comparison
        Self::mac(key, message).verify_slice(commitment.as_bytes()).is_ok()
    }
}

/// Commit to a move name under a round key (UTF-8 bytes of the name)
pub fn commit(key: &RoundKey, move_name: &str) -> Commitment {
    HmacSha256Scheme::commit(key.as_bytes(), move_name.as_bytes())
}
