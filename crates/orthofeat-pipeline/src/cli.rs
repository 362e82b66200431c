use super::commands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select ortholog groups and write one feature row per protein.
    Run {
        /// SQLite database holding the blast_results table.
        #[arg(long)]
        db: PathBuf,
        /// FASTA file with every query and target protein sequence.
        #[arg(long)]
        fasta: PathBuf,
        /// IUPred executable used for disorder scoring.
        #[arg(long, env = "IUPRED_PATH")]
        iupred: PathBuf,
        /// Output TSV path; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Run {
                db,
                fasta,
                iupred,
                output,
            } => commands::run::execute(db, fasta, iupred, output),
        }
    }
}
