//! Recompute a published commitment from a revealed key and move.

use anyhow::Context;
use clap::Parser;
use fairplay_core::{commit, Commitment, RoundKey};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "fairplay-verify")]
#[command(about = "Check a fairplay round: HMAC-SHA256(key, move) must equal the published HMAC")]
#[command(version)]
struct Cli {
    /// Computer's move as revealed at the end of the round
    #[arg(value_name = "MOVE")]
    move_name: String,

    /// HMAC printed before the round (hex)
    #[arg(long)]
    hmac: String,

    /// HMAC key revealed after the round (hex)
    #[arg(long)]
    key: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    #[serde(rename = "move")]
    move_name: String,
    hmac: String,
    expected: String,
    verified: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "fairplay_verify={},fairplay_core={}",
            log_level, log_level
        ))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let published = Commitment::from_hex(&cli.hmac).context("Invalid --hmac value")?;
    let key = RoundKey::from_hex(&cli.key).context("Invalid --key value")?;

    let report = build_report(&published, &key, &cli.move_name);
    tracing::debug!("Verification report: {:?}", report);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.verified {
        println!("OK: HMAC matches move '{}'", report.move_name);
    } else {
        println!("MISMATCH: HMAC does not match move '{}'", report.move_name);
        println!("  published: {}", report.hmac);
        println!("  expected:  {}", report.expected);
    }

    Ok(report.verified)
}

fn build_report(published: &Commitment, key: &RoundKey, move_name: &str) -> Report {
    Report {
        move_name: move_name.to_string(),
        hmac: published.to_hex(),
        expected: commit(key, move_name).to_hex(),
        verified: published.verify(key, move_name),
    }
}
