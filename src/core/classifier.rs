//! Entity classifier.
//!
//! Decides for one root directory entry whether it is a loose movie file
//! (enclose it in a same-named folder) or a folder possibly already holding
//! a movie file and/or subtitle file.

use crate::models::config::Config;
use crate::models::media::{EntryAction, MovieTarget};
use crate::utils::fs as fsutil;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Classify one entry under the root directory.
pub fn classify_entry(config: &Config, path: &Path) -> Result<EntryAction> {
    if path.is_file() {
        classify_file(config, path)
    } else if path.is_dir() {
        classify_folder(config, path)
    } else {
        Ok(EntryAction::Skip {
            reason: "neither a file nor a directory".to_string(),
        })
    }
}

/// A loose video file gets enclosed in a folder of the same base name.
fn classify_file(config: &Config, path: &Path) -> Result<EntryAction> {
    if !fsutil::is_video_file(path, &config.video_extensions) {
        return Ok(EntryAction::Skip {
            reason: "not a video file".to_string(),
        });
    }

    let movie_base = fsutil::file_base_name(path)
        .ok_or_else(|| Error::other(format!("no file name in {}", path.display())))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::other(format!("no file name in {}", path.display())))?
        .to_os_string();

    tracing::info!("'{}' is a movie file, enclosing it in a folder", movie_base);

    let folder = config.root_dir.join(&movie_base);
    std::fs::create_dir(&folder)?;
    fsutil::move_file(path, &folder.join(file_name))?;

    Ok(EntryAction::Process(MovieTarget { folder, movie_base }))
}

/// Scan a folder's immediate children for a movie file and an existing
/// subtitle. Sample-sized videos are ignored; more than one qualifying
/// movie file is an error.
fn classify_folder(config: &Config, folder: &Path) -> Result<EntryAction> {
    let mut movie_base: Option<String> = None;
    let mut subtitle_base: Option<String> = None;

    let mut children: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    children.sort();

    for child in children {
        if !child.is_file() {
            continue;
        }

        if fsutil::is_subtitle_file(&child) {
            if config.overwrite_existing {
                tracing::info!("Overwriting existing subtitle: {}", child.display());
                std::fs::remove_file(&child)?;
            } else {
                subtitle_base = fsutil::file_base_name(&child);
            }
            continue;
        }

        if fsutil::is_video_file(&child, &config.video_extensions) {
            let size = std::fs::metadata(&child)?.len();
            if size <= config.min_movie_bytes {
                tracing::debug!("Ignoring sample-sized video: {}", child.display());
                continue;
            }
            if movie_base.is_some() {
                return Err(Error::AmbiguousFolder(folder.display().to_string()));
            }
            movie_base = fsutil::file_base_name(&child);
        }
    }

    let movie_base = match movie_base {
        Some(base) => base,
        None => {
            return Ok(EntryAction::Skip {
                reason: "no movie file found".to_string(),
            })
        }
    };

    let target = MovieTarget {
        folder: folder.to_path_buf(),
        movie_base,
    };

    match subtitle_base {
        Some(subtitle_base) => Ok(EntryAction::Reconcile {
            target,
            subtitle_base,
        }),
        None => Ok(EntryAction::Process(target)),
    }
}
