//! Circular win/lose rule for an odd number of moves.

use crate::moves::{MoveIndex, MoveSet};
use crate::{FairplayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round outcome from the player's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// The same pairing seen from the other side
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decides rounds over a fixed [`MoveSet`].
///
/// Arranged on a circle, a move loses to the `half` moves right after it
/// and beats the `half` moves right before it.
#[derive(Clone, Debug)]
pub struct RuleEngine {
    moves: MoveSet,
}

impl RuleEngine {
    pub fn new(moves: MoveSet) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Decide by move name. Both names must belong to the set.
    pub fn decide(&self, player_move: &str, computer_move: &str) -> Result<Outcome> {
        let player = self
            .moves
            .index_of(player_move)
            .ok_or_else(|| FairplayError::unknown_move(player_move))?;
        let computer = self
            .moves
            .index_of(computer_move)
            .ok_or_else(|| FairplayError::unknown_move(computer_move))?;

        Ok(self.decide_index(player, computer))
    }

    pub fn decide_index(&self, player: MoveIndex, computer: MoveIndex) -> Outcome {
        if player == computer {
            return Outcome::Draw;
        }

        let n = self.moves.len();
        let distance = (computer.get() + n - player.get()) % n;

        if distance <= self.moves.half() {
            Outcome::Lose
        } else {
            Outcome::Win
        }
    }

    /// Full N×N matrix, row = player, column = computer.
    pub fn table(&self) -> OutcomeTable {
        let cells = self
            .moves
            .indices()
            .map(|p| {
                self.moves
                    .indices()
                    .map(|c| self.decide_index(p, c))
                    .collect()
            })
            .collect();

        OutcomeTable {
            moves: self.moves.clone(),
            cells,
        }
    }
}

/// Decide a single pairing without keeping an engine around.
pub fn decide(moves: &MoveSet, player_move: &str, computer_move: &str) -> Result<Outcome> {
    RuleEngine::new(moves.clone()).decide(player_move, computer_move)
}

/// Read-only outcome matrix for the help screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutcomeTable {
    moves: MoveSet,
    cells: Vec<Vec<Outcome>>,
}

impl OutcomeTable {
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn row(&self, player: MoveIndex) -> &[Outcome] {
        &self.cells[player.get()]
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> {
        self.moves
            .iter()
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}
