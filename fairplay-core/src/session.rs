use crate::commitment::{commit, Commitment};
use crate::key::{KeyGenerator, RoundKey};
use crate::moves::{MoveIndex, MoveSet};
use crate::rules::{Outcome, OutcomeTable, RuleEngine};
use crate::{FairplayError, Result, SessionConfig};
use rand::{CryptoRng, RngCore};
use serde::Serialize;
use uuid::Uuid;

/// Round state machine.
///
/// `Idle → Committed → AwaitingInput → Resolved`, with `AwaitingInput →
/// HelpDisplayed → AwaitingInput` looping on help, and `Exited` reachable
/// from any state after the commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Idle,
    Committed,
    AwaitingInput,
    HelpDisplayed,
    Resolved,
    Exited,
}

/// A parsed menu line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Help,
    Move(MoveIndex),
}

/// Parse one line of player input: `0`, `?`, or a 1-based move position.
pub fn parse_choice(input: &str, moves: &MoveSet) -> Result<MenuChoice> {
    match input.trim() {
        "0" => Ok(MenuChoice::Exit),
        "?" => Ok(MenuChoice::Help),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|position| moves.from_position(position))
            .map(MenuChoice::Move)
            .ok_or_else(|| {
                FairplayError::invalid_input(format!(
                    "expected 0, ? or a number from 1 to {}, got '{}'",
                    moves.len(),
                    other
                ))
            }),
    }
}

/// What the caller should show after feeding one line of input
#[derive(Debug)]
pub enum Step {
    Help(OutcomeTable),
    Invalid(FairplayError),
    Exited,
    Resolved(RoundReveal),
}

/// Everything the player needs to check the round after it ends
#[derive(Debug)]
pub struct RoundReveal {
    pub round_id: Uuid,
    pub player_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    pub key: RoundKey,
    pub commitment: Commitment,
}

impl RoundReveal {
    /// Recompute the MAC from the revealed key and move
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.key, &self.computer_move)
    }
}

/// One commit-then-reveal round against the computer.
///
/// The computer's move and key are fixed by [`commit`](Self::commit) and
/// leave the session only through the [`RoundReveal`].
#[derive(Debug)]
pub struct GameSession {
    id: Uuid,
    config: SessionConfig,
    rules: RuleEngine,
    state: SessionState,
    computer_move: Option<MoveIndex>,
    key: Option<RoundKey>,
    commitment: Option<Commitment>,
}

impl GameSession {
    pub fn new(moves: MoveSet, config: SessionConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            config,
            rules: RuleEngine::new(moves),
            state: SessionState::Idle,
            computer_move: None,
            key: None,
            commitment: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn moves(&self) -> &MoveSet {
        self.rules.moves()
    }

    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    /// Published commitment, once committed
    pub fn commitment(&self) -> Option<&Commitment> {
        self.commitment.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Resolved | SessionState::Exited)
    }

    /// Draw a key and a computer move, then commit to the move.
    pub fn commit<R: RngCore + CryptoRng>(
        &mut self,
        keygen: &mut KeyGenerator<R>,
    ) -> Result<Commitment> {
        self.ensure_idle()?;

        let key = keygen.generate(self.config.key_length)?;
        let computer_move = keygen.pick_move(self.rules.moves())?;

        self.commit_with(computer_move, key)
    }

    /// Commit to a chosen move under a chosen key.
    pub fn commit_with(&mut self, computer_move: MoveIndex, key: RoundKey) -> Result<Commitment> {
        self.ensure_idle()?;

        if self.moves().index(computer_move.get()) != Some(computer_move) {
            return Err(FairplayError::unknown_move(format!(
                "index {} outside a set of {}",
                computer_move,
                self.moves().len()
            )));
        }

        let commitment = commit(&key, self.moves().name(computer_move));

        self.computer_move = Some(computer_move);
        self.key = Some(key);
        self.commitment = Some(commitment);
        self.state = SessionState::Committed;

        tracing::info!("Round {} committed: {}", self.id, commitment);
        Ok(commitment)
    }

    /// Enter (or return to) the menu prompt
    pub fn await_input(&mut self) -> Result<()> {
        match self.state {
            SessionState::Committed
            | SessionState::HelpDisplayed
            | SessionState::AwaitingInput => {
                self.state = SessionState::AwaitingInput;
                Ok(())
            }
            state => Err(FairplayError::invalid_state(format!(
                "cannot prompt for input in state {:?}",
                state
            ))),
        }
    }

    /// Feed one line of player input.
    ///
    /// Malformed input is reported as [`Step::Invalid`] and leaves the
    /// session waiting for the next line.
    pub fn handle_input(&mut self, line: &str) -> Result<Step> {
        if self.state != SessionState::AwaitingInput {
            return Err(FairplayError::invalid_state(format!(
                "not awaiting input (state {:?})",
                self.state
            )));
        }

        match parse_choice(line, self.moves()) {
            Ok(MenuChoice::Exit) => {
                self.exit()?;
                Ok(Step::Exited)
            }
            Ok(MenuChoice::Help) => {
                self.state = SessionState::HelpDisplayed;
                tracing::debug!("Round {} showing help", self.id);
                Ok(Step::Help(self.rules.table()))
            }
            Ok(MenuChoice::Move(player_move)) => self.resolve(player_move).map(Step::Resolved),
            Err(e) if e.is_recoverable() => {
                tracing::debug!("Round {} rejected input: {}", self.id, e);
                Ok(Step::Invalid(e))
            }
            Err(e) => Err(e),
        }
    }

    /// Leave without revealing. The key is dropped (and wiped) here.
    pub fn exit(&mut self) -> Result<()> {
        if matches!(self.state, SessionState::Idle) || self.is_finished() {
            return Err(FairplayError::invalid_state(format!(
                "cannot exit from state {:?}",
                self.state
            )));
        }

        self.key = None;
        self.state = SessionState::Exited;

        tracing::info!("Round {} exited without reveal", self.id);
        Ok(())
    }

    fn resolve(&mut self, player_move: MoveIndex) -> Result<RoundReveal> {
        let (computer_move, commitment) = match (self.computer_move, self.commitment) {
            (Some(m), Some(c)) => (m, c),
            _ => return Err(FairplayError::invalid_state("round has no commitment")),
        };
        let key = self
            .key
            .take()
            .ok_or_else(|| FairplayError::invalid_state("round key already revealed"))?;

        let outcome = self.rules.decide_index(player_move, computer_move);
        self.state = SessionState::Resolved;

        tracing::info!("Round {} resolved: player {}", self.id, outcome);

        Ok(RoundReveal {
            round_id: self.id,
            player_move: self.moves().name(player_move).to_string(),
            computer_move: self.moves().name(computer_move).to_string(),
            outcome,
            key,
            commitment,
        })
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.state != SessionState::Idle {
            return Err(FairplayError::invalid_state(format!(
                "round already committed (state {:?})",
                self.state
            )));
        }
        Ok(())
    }
}
