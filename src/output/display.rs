//! Display functions for command results

use super::formatters::thousands;
use crate::catalog::WordCatalog;
use crate::commands::{CatalogInfo, SearchOutcome, SourceReport};
use colored::Colorize;

/// Words per row in result listings
const COLUMNS: usize = 8;

/// Print one status line per ingested source
pub fn print_ingest_reports(reports: &[SourceReport]) {
    for report in reports {
        let line = report.status();
        if report.report.cancelled {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.green());
        }
    }
}

/// Print search results, at most `limit` words when given
pub fn print_search_outcome(outcome: &SearchOutcome, limit: Option<usize>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Query: {}  {} {}  {} {}",
        outcome.constraints.to_string().bright_yellow().bold(),
        "+".green(),
        letters_or_dash(&outcome.constraints.included.to_string()),
        "-".red(),
        letters_or_dash(&outcome.constraints.excluded.to_string()),
    );
    println!("{}", "─".repeat(60).cyan());

    let words = &outcome.result.words;
    let shown = limit.map_or(words.len(), |n| n.min(words.len()));

    for row in words[..shown].chunks(COLUMNS) {
        let line: Vec<String> = row.iter().map(|w| w.text().to_uppercase()).collect();
        println!("  {}", line.join("  "));
    }

    if shown < words.len() {
        println!(
            "  {}",
            format!("... and {} more", thousands(words.len() - shown)).dimmed()
        );
    }

    println!("\n{}", outcome.status().bold());
}

fn letters_or_dash(letters: &str) -> String {
    if letters.is_empty() {
        "-".to_string()
    } else {
        letters.to_string()
    }
}

/// Print a catalog summary
pub fn print_catalog_info(info: &CatalogInfo) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "WORD CATALOG".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("  File:          {}", info.path.display());
    println!("  Words:         {}", thousands(info.word_count).bright_yellow());
    println!("  Longest word:  {}", info.max_word_length);
    println!(
        "  Last updated:  {}",
        info.last_updated.as_deref().unwrap_or("never")
    );

    if info.possible_lengths.is_empty() {
        println!("  Lengths:       {}", "none (catalog has no words of 3+ letters)".dimmed());
    } else {
        let lengths: Vec<String> = info.possible_lengths.iter().map(ToString::to_string).collect();
        println!("  Lengths:       {}", lengths.join(", "));
    }
    println!();
}

/// Banner for interactive mode
pub fn print_interactive_banner(catalog: &WordCatalog) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Finder - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Searching {} words. Type {} for commands, {} to leave.\n",
        thousands(catalog.len()).bright_yellow(),
        "help".bold(),
        "quit".bold()
    );
}
