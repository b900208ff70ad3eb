use thiserror::Error;

pub type Result<T> = std::result::Result<T, FairplayError>;

#[derive(Error, Debug)]
pub enum FairplayError {
    #[error("You must pass an odd number ≥ 3 of non-repeating moves ({0})")]
    Usage(String),

    #[error("Moves must be non-repeating: '{0}' appears more than once")]
    DuplicateMove(String),

    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid session state: {0}")]
    InvalidState(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FairplayError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn entropy(msg: impl Into<String>) -> Self {
        Self::EntropyUnavailable(msg.into())
    }

    pub fn unknown_move(name: impl Into<String>) -> Self {
        Self::UnknownMove(name.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::InvalidEncoding(msg.into())
    }

    /// Bad argument sets, reported together with a usage example.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::DuplicateMove(_))
    }

    /// Only a malformed menu choice is handled by re-prompting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<rand::Error> for FairplayError {
    fn from(err: rand::Error) -> Self {
        FairplayError::EntropyUnavailable(err.to_string())
    }
}

impl From<hex::FromHexError> for FairplayError {
    fn from(err: hex::FromHexError) -> Self {
        FairplayError::InvalidEncoding(err.to_string())
    }
}
