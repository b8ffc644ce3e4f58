//! Media-related data models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolved identity of a movie on the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieMetadata {
    /// Site-specific movie identifier.
    pub id: String,
    /// Movie title.
    pub title: String,
    /// Release year.
    pub year: String,
}

impl MovieMetadata {
    /// The normalized folder name for this movie.
    pub fn folder_name(&self) -> String {
        format!("{} [{}]", self.title, self.year)
    }
}

impl std::fmt::Display for MovieMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.title, self.year)
    }
}

/// One subtitle entry selected from a listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtitleCandidate {
    /// Host-prefixed download link.
    pub download_url: String,
    /// Uploader name from the row's last column.
    pub uploader: String,
}

/// A movie folder ready for processing.
#[derive(Debug, Clone)]
pub struct MovieTarget {
    /// The folder containing the movie file.
    pub folder: PathBuf,
    /// Movie filename without extension.
    pub movie_base: String,
}

/// What the classifier decided to do with one root entry.
#[derive(Debug, Clone)]
pub enum EntryAction {
    /// Run the full subtitle pipeline for this movie.
    Process(MovieTarget),
    /// A subtitle is already present; only reconcile names, no download.
    Reconcile {
        target: MovieTarget,
        /// Base name of the existing subtitle file.
        subtitle_base: String,
    },
    /// Nothing to do for this entry.
    Skip {
        reason: String,
    },
}
