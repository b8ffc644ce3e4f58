//! Per-entry processing pipeline.
//!
//! One directory entry runs top-to-bottom: classify, resolve metadata,
//! select a subtitle, fetch and unpack the archive, rename. Each failure
//! is recoverable for that entry only; the scan continues.

use crate::core::{classifier, namer};
use crate::models::config::Config;
use crate::models::media::{EntryAction, MovieMetadata, MovieTarget};
use crate::services::opensubtitles::OpenSubtitlesClient;
use crate::services::tools;
use crate::Result;
use std::path::Path;

/// How one directory entry ended up.
#[derive(Debug)]
pub enum EntryOutcome {
    /// Subtitles downloaded, extracted and paired with the movie file.
    Subtitled {
        metadata: MovieMetadata,
        uploader: String,
    },
    /// An existing subtitle was kept; names were reconciled.
    Reconciled,
    /// Metadata resolved but no acceptable subtitle was listed.
    NoSubtitle,
    /// The movie could not be identified by either lookup path.
    Unresolved,
    /// Nothing to do for this entry.
    Skipped { reason: String },
}

/// Process one entry under the root directory.
pub async fn process_entry(
    config: &Config,
    client: &OpenSubtitlesClient,
    path: &Path,
) -> Result<EntryOutcome> {
    match classifier::classify_entry(config, path)? {
        EntryAction::Skip { reason } => {
            tracing::info!("Skipping {}: {}", path.display(), reason);
            Ok(EntryOutcome::Skipped { reason })
        }
        EntryAction::Reconcile {
            target,
            subtitle_base,
        } => reconcile(client, &target, &subtitle_base).await,
        EntryAction::Process(target) => process(config, client, &target).await,
    }
}

/// A subtitle is already present: match its name to the movie file and
/// normalize the folder name. No download happens.
async fn reconcile(
    client: &OpenSubtitlesClient,
    target: &MovieTarget,
    subtitle_base: &str,
) -> Result<EntryOutcome> {
    if subtitle_base != target.movie_base {
        namer::rename_subtitle(&target.folder, &target.movie_base)?;
        tracing::info!("Renamed existing subtitle to match '{}'", target.movie_base);
    }

    if !folder_is_normalized(&target.folder) {
        match client.resolve(&target.movie_base).await? {
            Some(metadata) => {
                namer::rename_folder(&target.folder, &metadata.title, &metadata.year)?;
                tracing::info!("Renamed folder to '{}'", metadata.folder_name());
            }
            None => tracing::warn!(
                "Unable to identify '{}'; keeping the folder name",
                target.movie_base
            ),
        }
    }

    Ok(EntryOutcome::Reconciled)
}

/// Full subtitle processing for a movie without one.
async fn process(
    config: &Config,
    client: &OpenSubtitlesClient,
    target: &MovieTarget,
) -> Result<EntryOutcome> {
    let metadata = match client.resolve(&target.movie_base).await? {
        Some(metadata) => metadata,
        None => {
            tracing::warn!(
                "Unable to identify '{}'. Check the filename",
                target.movie_base
            );
            return Ok(EntryOutcome::Unresolved);
        }
    };
    tracing::info!("Detected movie: {} (id {})", metadata, metadata.id);

    let candidate = match client.select_subtitle(&metadata.id).await? {
        Some(candidate) => candidate,
        None => {
            tracing::info!("No suitable subtitles found for '{}'", metadata.title);
            rename_folder_if_needed(target, &metadata)?;
            return Ok(EntryOutcome::NoSubtitle);
        }
    };
    tracing::info!("Downloading subtitles uploaded by {}", candidate.uploader);

    std::fs::create_dir_all(&config.temp_dir)?;
    let archive = config.temp_dir.join(format!("{}.zip", target.movie_base));
    tools::download(&candidate.download_url, &archive)?;

    // The archive is removed whether or not extraction succeeds.
    let extracted = tools::extract(&archive, &target.folder);
    if let Err(e) = std::fs::remove_file(&archive) {
        tracing::debug!("Could not remove archive {}: {}", archive.display(), e);
    }
    extracted?;

    namer::rename_subtitle(&target.folder, &target.movie_base)?;
    rename_folder_if_needed(target, &metadata)?;

    Ok(EntryOutcome::Subtitled {
        metadata,
        uploader: candidate.uploader,
    })
}

fn folder_is_normalized(folder: &Path) -> bool {
    folder
        .file_name()
        .map(|n| namer::is_normalized(&n.to_string_lossy()))
        .unwrap_or(false)
}

fn rename_folder_if_needed(target: &MovieTarget, metadata: &MovieMetadata) -> Result<()> {
    if folder_is_normalized(&target.folder) {
        return Ok(());
    }
    namer::rename_folder(&target.folder, &metadata.title, &metadata.year)?;
    tracing::info!("Renamed folder to '{}'", metadata.folder_name());
    Ok(())
}
