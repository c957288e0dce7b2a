//! Word Finder - CLI
//!
//! Builds a word catalog from plain-text lists and searches it by length,
//! letter positions, and included/excluded letters.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use word_finder::{
    catalog::WordCatalog,
    commands::{
        SearchRequest, catalog_info, expand_sources, ingest_sources, open_catalog,
        run_interactive, run_search,
    },
    config::FinderConfig,
    logging,
    matcher::MatchEngine,
    output::{print_catalog_info, print_ingest_reports, print_search_outcome},
};

#[derive(Parser)]
#[command(
    name = "word_finder",
    about = "Find words by length, letter positions, and included/excluded letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog file (overrides the config file)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Config file
    #[arg(long, global = true, default_value = "word_finder.toml")]
    config: PathBuf,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive query mode (default)
    Interactive,

    /// Add words from text files or directories of *.txt files, then save
    Ingest {
        /// Files or directories to read
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Skip words with three identical letters in a row
        #[arg(long)]
        reject_triple_runs: bool,

        /// Hide the progress bars
        #[arg(short, long)]
        quiet: bool,
    },

    /// Search the catalog
    Search {
        /// Word length (default: pattern length, then the configured length)
        #[arg(short, long)]
        length: Option<usize>,

        /// Letters by position, '*' or '?' for any letter (e.g. "c?a**")
        #[arg(short, long)]
        pattern: Option<String>,

        /// Letters that must appear somewhere
        #[arg(short, long)]
        include: Option<String>,

        /// Letters that must not appear
        #[arg(short = 'x', long)]
        exclude: Option<String>,

        /// Print at most this many words
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show catalog statistics
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = FinderConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to read config file {}", cli.config.display()))?;
    if let Some(path) = cli.catalog {
        config = config.with_catalog_path(path);
    }
    debug!(?config, "Configuration");

    let catalog = open_catalog(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => run_interactive_command(&catalog, &config),
        Commands::Ingest {
            paths,
            reject_triple_runs,
            quiet,
        } => {
            if reject_triple_runs {
                config.reject_triple_runs = true;
            }
            run_ingest_command(catalog, &config, &paths, !quiet)
        }
        Commands::Search {
            length,
            pattern,
            include,
            exclude,
            limit,
        } => {
            let request = SearchRequest {
                length,
                pattern,
                include,
                exclude,
            };
            run_search_command(&catalog, &config, &request, limit.or(config.result_limit))
        }
        Commands::Info => {
            print_catalog_info(&catalog_info(&catalog, &config.catalog_path));
            Ok(())
        }
    }
}

fn run_ingest_command(
    mut catalog: WordCatalog,
    config: &FinderConfig,
    paths: &[PathBuf],
    show_progress: bool,
) -> Result<()> {
    let sources = expand_sources(paths).context("Failed to resolve word list paths")?;

    match ingest_sources(&mut catalog, &sources, config.ingest_policy(), show_progress) {
        Ok(reports) => {
            print_ingest_reports(&reports);
            save_catalog(&mut catalog, &config.catalog_path)
        }
        Err(e) => {
            // Keep what was read before the failure
            save_catalog(&mut catalog, &config.catalog_path)?;
            Err(e).context("Failed to read word list")
        }
    }
}

fn save_catalog(catalog: &mut WordCatalog, path: &Path) -> Result<()> {
    catalog
        .save(path)
        .with_context(|| format!("Failed to save catalog {}", path.display()))?;
    info!(path = %path.display(), words = catalog.len(), "Saved catalog");
    Ok(())
}

fn run_search_command(
    catalog: &WordCatalog,
    config: &FinderConfig,
    request: &SearchRequest,
    limit: Option<usize>,
) -> Result<()> {
    let constraints = request
        .to_constraints(config.default_target_length)
        .context("Invalid search")?;

    let mut engine = MatchEngine::new();
    let outcome = run_search(&mut engine, catalog, &constraints).context("Invalid search")?;

    print_search_outcome(&outcome, limit);
    Ok(())
}

fn run_interactive_command(catalog: &WordCatalog, config: &FinderConfig) -> Result<()> {
    if catalog.is_empty() {
        println!(
            "The catalog {} is empty. Add words with `word_finder ingest <files>` first.",
            config.catalog_path.display()
        );
        return Ok(());
    }

    run_interactive(catalog, config.default_target_length, config.result_limit)
        .context("Interactive session failed")
}
