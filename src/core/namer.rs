//! Rename operations.
//!
//! Pairs the extracted subtitle with the movie's base filename and
//! normalizes folder names to the `Title [Year]` convention.

use crate::utils::fs as fsutil;
use crate::{Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// True when a folder name already carries a bracketed year tag.
pub fn is_normalized(folder_name: &str) -> bool {
    Regex::new(r".+\[\d+\]")
        .map(|re| re.is_match(folder_name))
        .unwrap_or(false)
}

/// Rename the first subtitle file in the folder to `<movie_base>.srt`.
///
/// Callers must only invoke this after a subtitle was extracted or found
/// pre-existing; a folder without one is an error.
pub fn rename_subtitle(folder: &Path, movie_base: &str) -> Result<PathBuf> {
    let mut subtitles: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && fsutil::is_subtitle_file(p))
        .collect();
    subtitles.sort();

    let source = subtitles
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoSubtitleFile(folder.display().to_string()))?;

    let target = folder.join(format!("{}.srt", movie_base));
    if source == target {
        return Ok(target);
    }
    std::fs::rename(&source, &target)?;
    Ok(target)
}

/// Rename the folder in place to `<title> [<year>]`.
///
/// Fails loudly when the target name is already taken by another entry;
/// renaming to the current name is a no-op.
pub fn rename_folder(folder: &Path, title: &str, year: &str) -> Result<PathBuf> {
    let parent = folder
        .parent()
        .ok_or_else(|| Error::other(format!("no parent directory for {}", folder.display())))?;

    let target = parent.join(format!("{} [{}]", title, year));
    if target == folder {
        return Ok(target);
    }
    if target.exists() {
        return Err(Error::FileAlreadyExists(target.display().to_string()));
    }
    std::fs::rename(folder, &target)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_normalized() {
        assert!(is_normalized("Inception [2010]"));
        assert!(is_normalized("Bar [1999]"));
        assert!(!is_normalized("Inception.2010"));
        assert!(!is_normalized("[2010]"));
        assert!(!is_normalized("Inception (2010)"));
    }
}
