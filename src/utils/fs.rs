//! File system utilities.

use crate::Result;
use std::path::Path;

/// Subtitle extensions recognized inside movie folders.
pub const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "sub"];

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Move a file from one location to another.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    // Try rename first (fast, same filesystem)
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }

    // Fall back to copy + delete (cross filesystem)
    std::fs::copy(from, to)?;
    std::fs::remove_file(from)?;
    Ok(())
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Get the filename without its extension.
pub fn file_base_name(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().to_string())
}

/// Check if a file is a video file based on the configured extensions.
pub fn is_video_file(path: &Path, extensions: &[String]) -> bool {
    get_extension(path)
        .map(|ext| extensions.iter().any(|e| e == &ext))
        .unwrap_or(false)
}

/// Check if a file is a subtitle file.
pub fn is_subtitle_file(path: &Path) -> bool {
    get_extension(path)
        .map(|ext| SUBTITLE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn exts() -> Vec<String> {
        vec!["mkv".to_string(), "mp4".to_string(), "avi".to_string()]
    }

    #[test]
    fn test_is_video_file() {
        assert!(is_video_file(&PathBuf::from("movie.mkv"), &exts()));
        assert!(is_video_file(&PathBuf::from("movie.MP4"), &exts()));
        assert!(!is_video_file(&PathBuf::from("movie.txt"), &exts()));
        assert!(!is_video_file(&PathBuf::from("movie.srt"), &exts()));
    }

    #[test]
    fn test_is_subtitle_file() {
        assert!(is_subtitle_file(&PathBuf::from("movie.srt")));
        assert!(is_subtitle_file(&PathBuf::from("movie.SUB")));
        assert!(!is_subtitle_file(&PathBuf::from("movie.mkv")));
    }

    #[test]
    fn test_file_base_name() {
        assert_eq!(
            file_base_name(&PathBuf::from("/x/Inception.2010.mkv")),
            Some("Inception.2010".to_string())
        );
    }
}
