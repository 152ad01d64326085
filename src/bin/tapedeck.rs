mod commands;

use clap::Parser;
use commands::{execute_command, Commands};

/// Tapedeck playlist metadata autofiller
#[derive(Parser)]
#[command(
    name = "tapedeck",
    about = "Enrich Tapedeck playlist files with album metadata and cover art",
    long_about = None
)]
struct Cli {
    /// Show detailed debug information
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .init();

    if let Err(e) = execute_command(args.command).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
