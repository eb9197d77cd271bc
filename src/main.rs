mod fingerprint;
mod keystore;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

const LOG_LEVEL_ENV_VAR: &str = "KEYSTORE_SHA1_LOG";
const DEFAULT_LOG_LEVEL: &str = "error";

/// Print the SHA1 certificate fingerprint of the Android debug keystore
/// found at `~/.android/debug.keystore`
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV_VAR, DEFAULT_LOG_LEVEL))
        .init();

    let Args {} = Args::parse();

    fingerprint::command()
}
