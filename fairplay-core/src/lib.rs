//! Provably fair rock-paper-scissors for any odd number of moves.
//!
//! The computer commits to its move with HMAC-SHA256 under a fresh random
//! key before the player chooses, then reveals the key so the player can
//! recompute the commitment. Outcomes follow a circular rule where each
//! move beats the `N / 2` moves before it and loses to the `N / 2` after it.

pub mod commitment;
pub mod config;
pub mod error;
pub mod key;
pub mod moves;
pub mod rules;
pub mod session;

pub use commitment::{commit, Commitment, CommitmentScheme, HmacSha256Scheme};
pub use config::SessionConfig;
pub use error::{FairplayError, Result};
pub use key::{KeyGenerator, RoundKey, DEFAULT_KEY_LENGTH};
pub use moves::{MoveIndex, MoveSet};
pub use rules::{decide, Outcome, OutcomeTable, RuleEngine};
pub use session::{parse_choice, GameSession, MenuChoice, RoundReveal, SessionState, Step};
