pub mod autofill;
pub mod print;

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Print a playlist's metadata and numbered track list
    ///
    /// Usage examples:
    /// # Show the contents of a playlist file
    /// tapedeck print mixtape.json
    Print {
        /// Path to the playlist JSON file
        path: PathBuf,
    },

    /// Interactively fill in missing album metadata and cover art
    ///
    /// Walks the playlist one track at a time. Tracks that already carry an
    /// album are skipped, so re-running after an interrupted session picks
    /// up where it left off. The file is rewritten after every enriched
    /// track.
    ///
    /// Usage examples:
    /// # Enrich a playlist, writing cover art next to it
    /// tapedeck autofill mixtape.json
    ///
    /// # Put downloaded covers somewhere else
    /// tapedeck autofill mixtape.json --art-dir covers
    Autofill {
        /// Path to the playlist JSON file
        path: PathBuf,

        /// Directory where downloaded cover art is written
        #[arg(long, default_value = ".")]
        art_dir: PathBuf,
    },
}

/// Execute the parsed subcommand.
pub async fn execute_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Print { path } => print::handle_print_command(&path),
        Commands::Autofill { path, art_dir } => {
            autofill::handle_autofill_command(&path, &art_dir).await
        }
    }
}
