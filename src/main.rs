//! edgedict - bulk Edge_Security dictionary updater
//!
//! Reads service IDs from a text or CSV file and sets the `Enabled` item in
//! each service's `Edge_Security` dictionary to the given value.

use clap::Parser;
use edgedict::{FastlyClient, FastlyConfig, input, report, updater};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "edgedict")]
#[command(version)]
#[command(
    about = "Update the 'Enabled' item in the 'Edge_Security' dictionary for multiple Fastly services"
)]
struct Args {
    /// Path to a text or CSV file with service IDs (one per line or column)
    file: PathBuf,

    /// Value to set for the 'Enabled' item (e.g. 0, 100, or any number in between)
    #[arg(long)]
    value: i64,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize logging system
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    // Credential check happens before any file or network activity.
    let config = FastlyConfig::default();
    config.validate()?;

    let service_ids = input::load_service_ids(&args.file)?;
    let client = FastlyClient::new(&config)?;

    let results = updater::run(&client, &service_ids, args.value).await;

    println!("Results:");
    print!("{}", report::render(&results));

    Ok(())
}
