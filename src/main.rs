//! Mythgard deck tool - Main Binary
//!
//! Import, validate, export, and resolve deck text files from the command line

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use mythgard_deck_rs::{
    catalog::{resolve_deck, DeckSubmission, InMemoryCatalog},
    config::{Config, OutputFormat},
    core::DeckInProgress,
    loader::{export_deck_file, ImportLoader},
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

/// Verbosity level for log output (parses both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(LevelFilter);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(LevelFilter::OFF)),
            "minimal" | "1" => Ok(VerbosityArg(LevelFilter::WARN)),
            "normal" | "2" => Ok(VerbosityArg(LevelFilter::INFO)),
            "verbose" | "3" => Ok(VerbosityArg(LevelFilter::DEBUG)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "deck")]
#[command(about = "Mythgard deck import/export tool", long_about = None)]
struct Cli {
    /// Log verbosity (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, short = 'v', global = true)]
    verbosity: Option<VerbosityArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a deck file and show the result
    Import {
        /// Deck text file (main block, optionally followed by a [sideboard] section)
        #[arg(value_name = "DECK_FILE")]
        deck: PathBuf,

        /// Separate sideboard file; DECK_FILE is then read as the main block only
        #[arg(long, value_name = "SIDEBOARD_FILE")]
        sideboard: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(long, short = 'f')]
        format: Option<OutputFormat>,
    },

    /// Import a deck file and print it back in canonical import format
    Export {
        #[arg(value_name = "DECK_FILE")]
        deck: PathBuf,

        #[arg(long, value_name = "SIDEBOARD_FILE")]
        sideboard: Option<PathBuf>,
    },

    /// Validate many deck files in parallel
    Check {
        #[arg(value_name = "DECK_FILES", required = true)]
        decks: Vec<PathBuf>,
    },

    /// Resolve card names against a catalog and print the deck submission
    Resolve {
        #[arg(value_name = "DECK_FILE")]
        deck: PathBuf,

        #[arg(long, value_name = "SIDEBOARD_FILE")]
        sideboard: Option<PathBuf>,

        /// Catalog JSON file: [{"id": 1, "name": "..."}]
        #[arg(long, value_name = "CATALOG_FILE")]
        catalog: Option<PathBuf>,

        /// Deck name (defaults to the deck's `name:` line)
        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(Path::new(".")).context("loading deck.config.json")?;

    let verbosity = match (cli.verbosity, config.verbosity.as_deref()) {
        (Some(arg), _) => arg,
        (None, Some(level)) => level.parse().map_err(anyhow::Error::msg)?,
        (None, None) => VerbosityArg(LevelFilter::INFO),
    };
    tracing_subscriber::fmt()
        .with_max_level(verbosity.0)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Import {
            deck,
            sideboard,
            format,
        } => {
            let format = format.unwrap_or(config.format);
            run_import(&deck, sideboard.as_deref(), format).await?
        }
        Commands::Export { deck, sideboard } => run_export(&deck, sideboard.as_deref()).await?,
        Commands::Check { decks } => run_check(decks)?,
        Commands::Resolve {
            deck,
            sideboard,
            catalog,
            name,
        } => {
            let catalog = catalog
                .or(config.catalog_path)
                .context("no catalog given (use --catalog or catalogPath in deck.config.json)")?;
            run_resolve(&deck, sideboard.as_deref(), &catalog, name.as_deref()).await?
        }
    }

    Ok(())
}

async fn load_deck(deck: &Path, sideboard: Option<&Path>) -> anyhow::Result<DeckInProgress> {
    info!("Loading deck file: {}", deck.display());
    ImportLoader::load_from_files(deck, sideboard)
        .await
        .with_context(|| format!("reading {}", deck.display()))
}

fn print_errors(deck: &DeckInProgress) {
    for message in deck.error_messages() {
        println!("  - {message}");
    }
}

async fn run_import(deck_path: &Path, sideboard: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let deck = load_deck(deck_path, sideboard).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&deck)?),
        OutputFormat::Text if deck.is_valid() => {
            println!("=== {} ===", if deck.deck_name.is_empty() { "Unnamed Deck" } else { deck.deck_name.as_str() });
            if !deck.deck_path.is_empty() {
                println!("  Path: {}", deck.deck_path);
            }
            if !deck.deck_power.is_empty() {
                println!("  Power: {}", deck.deck_power);
            }
            if !deck.deck_cover_art.is_empty() {
                println!("  Cover art: {}", deck.deck_cover_art);
            }
            println!("\nMain deck ({} cards):", deck.total_cards());
            for entry in deck.main_deck.values() {
                println!("  {entry}");
            }
            if !deck.sideboard.is_empty() {
                println!("\nSideboard ({} cards):", deck.sideboard_size());
                for entry in deck.sideboard.values() {
                    println!("  {entry}");
                }
            }
        }
        OutputFormat::Text => {
            println!("Import failed:");
            print_errors(&deck);
        }
    }

    if !deck.is_valid() {
        bail!("{} has import errors", deck_path.display());
    }
    Ok(())
}

async fn run_export(deck_path: &Path, sideboard: Option<&Path>) -> anyhow::Result<()> {
    let deck = load_deck(deck_path, sideboard).await?;
    if !deck.is_valid() {
        println!("Import failed:");
        print_errors(&deck);
        bail!("{} has import errors", deck_path.display());
    }
    println!("{}", export_deck_file(&deck));
    Ok(())
}

fn run_check(decks: Vec<PathBuf>) -> anyhow::Result<()> {
    // Use rayon to check files in parallel, keeping input order for output
    let results: Vec<_> = decks
        .par_iter()
        .map(|path| (path, ImportLoader::load_from_file(path)))
        .collect();

    let mut failed = 0;
    for (path, result) in results {
        match result {
            Ok(deck) if deck.is_valid() => {
                println!("ok     {} ({} cards)", path.display(), deck.total_cards());
            }
            Ok(deck) => {
                failed += 1;
                println!("error  {}: {}", path.display(), deck.error_messages().join("; "));
            }
            Err(e) => {
                failed += 1;
                println!("error  {}: {e}", path.display());
            }
        }
    }
    debug!(checked = decks.len(), failed, "check finished");

    if failed > 0 {
        bail!("{failed} of {} deck files failed", decks.len());
    }
    Ok(())
}

async fn run_resolve(
    deck_path: &Path,
    sideboard: Option<&Path>,
    catalog_path: &Path,
    name: Option<&str>,
) -> anyhow::Result<()> {
    let (deck, catalog) = tokio::try_join!(load_deck(deck_path, sideboard), async {
        InMemoryCatalog::load_from_file(catalog_path)
            .await
            .with_context(|| format!("loading catalog {}", catalog_path.display()))
    })?;
    info!("Catalog: {} cards", catalog.len());

    let resolved = resolve_deck(&deck, &catalog)?;
    let submission = DeckSubmission::from_resolved(&resolved, name)?;
    println!("{}", serde_json::to_string_pretty(&submission)?);
    Ok(())
}
