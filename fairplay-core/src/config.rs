use crate::error::{FairplayError, Result};
use crate::key::DEFAULT_KEY_LENGTH;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Round key length in bytes
    pub key_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
        }
    }
}

impl SessionConfig {
    /// Shortest key accepted; matches the HMAC-SHA256 output size
    pub const MIN_KEY_LENGTH: usize = 32;
    /// SHA-256 block size; HMAC pre-hashes anything longer
    pub const MAX_KEY_LENGTH: usize = 64;

    pub fn new(key_length: usize) -> Result<Self> {
        let config = Self { key_length };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.key_length < Self::MIN_KEY_LENGTH {
            return Err(FairplayError::config(format!(
                "key length must be at least {} bytes, got {}",
                Self::MIN_KEY_LENGTH,
                self.key_length
            )));
        }

        if self.key_length > Self::MAX_KEY_LENGTH {
            return Err(FairplayError::config(format!(
                "key length must be at most {} bytes, got {}",
                Self::MAX_KEY_LENGTH,
                self.key_length
            )));
        }

        Ok(())
    }
}
