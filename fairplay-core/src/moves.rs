//! Move names supplied at startup and their positions on the rule circle.

use crate::{FairplayError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Position of a move inside its [`MoveSet`], always in `[0, N)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MoveIndex(usize);

impl MoveIndex {
    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, odd-sized set of distinct move names.
///
/// The order defines circular adjacency: each move loses to the `half` moves
/// that follow it (wrapping around) and beats the `half` moves before it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    pub const MIN_MOVES: usize = 3;

    /// Validate and build a move set from startup arguments.
    ///
    /// Count and parity are checked before distinctness. Names are compared
    /// case-sensitively.
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.len() < Self::MIN_MOVES || names.len() % 2 == 0 {
            return Err(FairplayError::usage(format!("got {}", names.len())));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(FairplayError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of moves each move beats (and loses to).
    pub fn half(&self) -> usize {
        self.names.len() / 2
    }

    pub fn name(&self, index: MoveIndex) -> &str {
        &self.names[index.0]
    }

    pub fn index_of(&self, name: &str) -> Option<MoveIndex> {
        self.names.iter().position(|n| n == name).map(MoveIndex)
    }

    /// Index at `i`, if in range.
    pub fn index(&self, i: usize) -> Option<MoveIndex> {
        (i < self.names.len()).then_some(MoveIndex(i))
    }

    /// Resolve a 1-based menu position.
    pub fn from_position(&self, position: usize) -> Option<MoveIndex> {
        position.checked_sub(1).and_then(|i| self.index(i))
    }

    pub fn indices(&self) -> impl Iterator<Item = MoveIndex> + '_ {
        (0..self.names.len()).map(MoveIndex)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = FairplayError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::new(names)
    }
}

impl<'de> Deserialize<'de> for MoveSet {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(d)?;
        MoveSet::new(names).map_err(serde::de::Error::custom)
    }
}
