// src/cli/commands.rs
use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze the strength of a password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Generate a candidate wordlist from personal facts
    Wordlist {
        /// Name
        #[arg(long)]
        name: Option<String>,

        /// Pet or nickname
        #[arg(long)]
        pet: Option<String>,

        /// Birth year
        #[arg(long)]
        year: Option<String>,

        /// Favorite place
        #[arg(long)]
        place: Option<String>,

        /// Favorite number
        #[arg(long)]
        number: Option<String>,

        /// Write the wordlist to this file, one candidate per line
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
