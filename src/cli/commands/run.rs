//! Run command implementation.
//!
//! Walks the root directory once and processes every entry sequentially.
//! Per-entry failures are logged and counted; only an unreadable root
//! aborts the run.

use crate::core::pipeline::{self, EntryOutcome};
use crate::models::config::Config;
use crate::services::opensubtitles::OpenSubtitlesClient;
use crate::utils::fs as fsutil;
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Counters accumulated over one scan.
#[derive(Debug, Default)]
struct RunSummary {
    subtitled: usize,
    reconciled: usize,
    no_subtitle: usize,
    unresolved: usize,
    skipped: usize,
    failed: usize,
}

/// Scan the root directory and pair every movie with subtitles.
pub async fn run(config: &Config) -> Result<()> {
    fsutil::ensure_directory(&config.root_dir)?;

    let mut entries: Vec<PathBuf> = std::fs::read_dir(&config.root_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    entries.sort();

    if entries.is_empty() {
        println!("Nothing to process in {}", config.root_dir.display());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Processing {} entries in {}",
            entries.len(),
            config.root_dir.display()
        )
        .bold()
    );
    println!();

    let client = OpenSubtitlesClient::new(config);

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );

    let mut summary = RunSummary::default();
    for entry in entries {
        let name = entry
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        pb.set_message(name.clone());

        match pipeline::process_entry(config, &client, &entry).await {
            Ok(EntryOutcome::Subtitled { metadata, uploader }) => {
                summary.subtitled += 1;
                pb.println(format!(
                    "{} {} (subtitles by {})",
                    "[OK]".green(),
                    metadata,
                    uploader
                ));
            }
            Ok(EntryOutcome::Reconciled) => summary.reconciled += 1,
            Ok(EntryOutcome::NoSubtitle) => summary.no_subtitle += 1,
            Ok(EntryOutcome::Unresolved) => summary.unresolved += 1,
            Ok(EntryOutcome::Skipped { .. }) => summary.skipped += 1,
            Err(e) => {
                summary.failed += 1;
                tracing::error!("Failed to process {}: {}", entry.display(), e);
                pb.println(format!("{} {}: {}", "[FAIL]".red(), name, e));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_summary(&summary);

    // Per-entry failures never change the exit code; the scan completed.
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("{}", "Run complete".bold());
    println!("  {} subtitled", summary.subtitled.to_string().green());
    println!("  {} reconciled (subtitle already present)", summary.reconciled);
    println!("  {} without acceptable subtitles", summary.no_subtitle);
    println!("  {} unidentified", summary.unresolved);
    println!("  {} skipped", summary.skipped);
    if summary.failed > 0 {
        println!("  {} failed", summary.failed.to_string().red());
    }
}
