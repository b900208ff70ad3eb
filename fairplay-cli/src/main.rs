mod commands;

use clap::Parser;
use fairplay_core::{
    FairplayError, GameSession, KeyGenerator, MoveSet, SessionConfig, DEFAULT_KEY_LENGTH,
};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Options go before the moves; from the first move on every token is a
/// move name, including ones that start with `-`.
#[derive(Parser)]
#[command(name = "fairplay")]
#[command(about = "Provably fair rock-paper-scissors with any odd number of moves")]
#[command(version)]
struct Cli {
    /// Move names in circular order (odd count, at least 3, no repeats)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    moves: Vec<String>,

    /// Round key length in bytes
    #[arg(long, default_value_t = DEFAULT_KEY_LENGTH)]
    key_length: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            eprint!("{}", e);
            eprintln!("Example: {} Rock Paper Scissors", program_name());
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Initialize logging; stdout is reserved for the game protocol
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "fairplay={},fairplay_core={}",
            log_level, log_level
        ))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        match e {
            e if e.is_usage() => {
                eprintln!("Error: {}", e);
                eprintln!("Example: {} Rock Paper Scissors", program_name());
            }
            FairplayError::EntropyUnavailable(reason) => {
                eprintln!(
                    "Error: cannot start a fair round, secure randomness unavailable ({})",
                    reason
                );
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> fairplay_core::Result<()> {
    let moves = MoveSet::new(cli.moves)?;
    let config = SessionConfig::new(cli.key_length)?;
    let mut session = GameSession::new(moves, config)?;

    tracing::debug!(
        "Round {} starting with {} moves",
        session.id(),
        session.moves().len()
    );

    let mut keygen = KeyGenerator::new();
    session.commit(&mut keygen)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    commands::play_round(&mut session, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "fairplay".to_string())
}
