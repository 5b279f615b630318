//! CLI de simulation de conversion génique sur un chromosome

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

mod commands;
mod display;

use commands::{defaults, run};

#[derive(Parser)]
#[command(name = "chrom-gc")]
#[command(about = "Mutation, cassures double brin et conversion génique sur un chromosome", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Simule jusqu'à un nombre donné de cassures
    Run(run::RunArgs),

    /// Affiche la configuration par défaut en JSON
    Defaults,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepairArg {
    Minimal,
    Tract,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorArg {
    Chacha,
    Ranmar,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gc_core::init_logging(gc_core::level_for_verbosity(cli.verbose));

    match cli.command {
        Commands::Run(args) => run::run(args)?,
        Commands::Defaults => defaults::run()?,
    }

    Ok(())
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb
}
