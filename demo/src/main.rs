//! REMEDIA: Medication Consultation CLI
//!
//! Resolves free-text medication names against a catalog, the same way the
//! ANVISA consultation widget does, and runs the reference walkthroughs.
//!
//! Usage:
//!   cargo run -p demo -- consult dipirona
//!   cargo run -p demo -- consult "losartan forte" --json
//!   cargo run -p demo -- consult omeprazol --catalog my-catalog.toml
//!   cargo run -p demo -- list
//!   cargo run -p demo -- score dipirona500 "DIPIRONA 500MG"
//!   cargo run -p demo -- run-all

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use remedia_catalog::TomlCatalog;
use remedia_contracts::{error::RemediaResult, settings::ScorerKind};
use remedia_core::{similarity::scorer_for, traits::MedicationCatalog};
use remedia_ref_anvisa::{
    report,
    sample_data::sample_catalog,
    scenarios::{known_medication, substring_search, typo_suggestions},
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// REMEDIA: medication consultation over an ANVISA-style catalog.
#[derive(Parser)]
#[command(
    name = "remedia",
    about = "Medication consultation matcher",
    long_about = "Resolves free-text medication names against a catalog by name or active\n\
                  substance, and suggests close names when nothing matches."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a medication name or active substance.
    Consult {
        /// Free-text query (case-insensitive).
        query: String,
        /// TOML catalog to search instead of the embedded sample.
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List every record in the catalog.
    List {
        /// TOML catalog to list instead of the embedded sample.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print the similarity score between two strings.
    Score {
        a: String,
        b: String,
        #[arg(long, value_enum, default_value_t = ScorerArg::Heuristic)]
        scorer: ScorerArg,
    },
    /// Run all three walkthroughs in sequence.
    RunAll,
    /// Scenario 1: Known Medication (exact/substring resolution).
    KnownMedication,
    /// Scenario 2: Substring Search (partial names, loose token phase).
    SubstringSearch,
    /// Scenario 3: Typo Suggestions ("did you mean").
    TypoSuggestions,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScorerArg {
    Heuristic,
    Levenshtein,
}

impl From<ScorerArg> for ScorerKind {
    fn from(arg: ScorerArg) -> Self {
        match arg {
            ScorerArg::Heuristic => ScorerKind::Heuristic,
            ScorerArg::Levenshtein => ScorerKind::Levenshtein,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Consult { query, catalog, json } => consult(&query, catalog, json),
        Command::List { catalog } => list(catalog),
        Command::Score { a, b, scorer } => {
            score(&a, &b, scorer.into());
            Ok(())
        }
        Command::RunAll => run_all(),
        Command::KnownMedication => known_medication::run_scenario(),
        Command::SubstringSearch => substring_search::run_scenario(),
        Command::TypoSuggestions => typo_suggestions::run_scenario(),
    };

    if let Err(e) = result {
        eprintln!("remedia error: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn load_catalog(path: Option<PathBuf>) -> RemediaResult<TomlCatalog> {
    match path {
        Some(path) => TomlCatalog::from_file(&path),
        None => {
            debug!("no catalog path given, using embedded sample");
            sample_catalog()
        }
    }
}

fn consult(query: &str, catalog: Option<PathBuf>, json: bool) -> RemediaResult<()> {
    let matcher = load_catalog(catalog)?.into_matcher();
    let result = matcher.consult(query);

    if json {
        println!("{}", report::to_json(&result)?);
    } else {
        println!("{}", report::to_text(query, &result));
    }
    Ok(())
}

fn list(catalog: Option<PathBuf>) -> RemediaResult<()> {
    let catalog = load_catalog(catalog)?;
    for record in catalog.records() {
        println!(
            "{:<28} {:<26} {:<18} valid until {}",
            record.name, record.active_substance, record.category, record.expiry_date
        );
    }
    println!();
    println!("{} medication(s)", catalog.len());
    Ok(())
}

fn score(a: &str, b: &str, kind: ScorerKind) {
    let scorer = scorer_for(kind);
    println!("{} similarity({:?}, {:?}) = {:.4}", scorer.name(), a, b, scorer.score(a, b));
}

fn run_all() -> RemediaResult<()> {
    known_medication::run_scenario()?;
    substring_search::run_scenario()?;
    typo_suggestions::run_scenario()?;
    println!("All scenarios completed successfully.");
    Ok(())
}
