//! Per-round MAC keys and the secure random source behind them.

use crate::moves::{MoveIndex, MoveSet};
use crate::{FairplayError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key length used when no configuration overrides it
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Secret MAC key for exactly one round. Wiped from memory on drop.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKey(Vec<u8>);

impl RoundKey {
    /// Wrap existing key material, e.g. a key revealed by the other party
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str.trim())?;
        if bytes.is_empty() {
            return Err(FairplayError::encoding("key is empty"));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex, no separators
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for RoundKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundKey(<{} bytes redacted>)", self.0.len())
    }
}

/// Draws round keys and the computer's move from a cryptographically secure source.
pub struct KeyGenerator<R = OsRng> {
    rng: R,
}

impl KeyGenerator<OsRng> {
    /// Generator backed by the operating system's CSPRNG
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for KeyGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> KeyGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Fill a fresh key of `length` bytes.
    ///
    /// A source that cannot be read yields `EntropyUnavailable`; no partial
    /// key is ever returned.
    pub fn generate(&mut self, length: usize) -> Result<RoundKey> {
        if length == 0 {
            return Err(FairplayError::config("key length must be non-zero"));
        }

        let mut key = RoundKey(vec![0u8; length]);
        self.rng.try_fill_bytes(&mut key.0)?;
        Ok(key)
    }

    /// Uniform pick over the move set.
    ///
    /// Draws go through `try_fill_bytes` like key material, so an unreadable
    /// source is `EntropyUnavailable` here too. Draws above the last whole
    /// multiple of the move count are rejected to keep the pick unbiased.
    pub fn pick_move(&mut self, moves: &MoveSet) -> Result<MoveIndex> {
        let n = moves.len() as u64;
        if n == 0 {
            return Err(FairplayError::config("cannot pick from an empty move set"));
        }

        let zone = u64::MAX - (u64::MAX % n);
        loop {
            let mut buf = [0u8; 8];
            self.rng.try_fill_bytes(&mut buf)?;
            let draw = u64::from_le_bytes(buf);
            if draw < zone {
                return moves.index((draw % n) as usize).ok_or_else(|| {
                    FairplayError::unknown_move(format!("index {} out of range", draw % n))
                });
            }
        }
    }
}
