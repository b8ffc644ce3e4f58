//! Configuration model.
//!
//! All settings are fixed before a run: defaults, then an optional TOML
//! file, then command-line overrides. The resulting `Config` is immutable
//! and passed explicitly into every component.

use serde::Deserialize;
use std::path::PathBuf;

/// Default remote host.
pub const DEFAULT_HOST: &str = "https://www.opensubtitles.org";

/// Default minimum movie file size in MiB (filters out sample clips).
pub const DEFAULT_MIN_MOVIE_MIB: u64 = 100;

/// Default recognized video extensions.
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4", "avi"];

/// Application configuration, immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing loose movie files and/or movie folders.
    pub root_dir: PathBuf,
    /// Where subtitle archives are downloaded before extraction.
    pub temp_dir: PathBuf,
    /// Remote host base URL.
    pub host: String,
    /// Sublanguage id used on listing URLs (e.g. "eng", "all").
    pub language: String,
    /// Only accept subtitles from trusted uploaders.
    pub trusted_only: bool,
    /// Only accept hearing-impaired subtitles.
    pub hearing_impaired_only: bool,
    /// Delete existing subtitles and download fresh ones.
    pub overwrite_existing: bool,
    /// Recognized video extensions (lowercase, no dot).
    pub video_extensions: Vec<String>,
    /// Minimum movie file size in bytes inside folders.
    pub min_movie_bytes: u64,
}

/// Settings read from the optional config file; every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub root_dir: Option<PathBuf>,
    pub temp_dir: Option<PathBuf>,
    pub host: Option<String>,
    pub language: Option<String>,
    pub trusted_only: Option<bool>,
    pub hearing_impaired_only: Option<bool>,
    pub overwrite_existing: Option<bool>,
    pub video_extensions: Option<Vec<String>>,
    pub min_movie_mib: Option<u64>,
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie-subtitler")
}

/// Load file configuration, falling back to empty on any problem.
pub fn load_file_config() -> FileConfig {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
    }

    FileConfig::default()
}

/// Map a human language name to the sublanguage id used in listing URLs.
///
/// Unrecognized input is assumed to already be a sublanguage id.
pub fn language_id(name: &str) -> String {
    match name.to_lowercase().as_str() {
        "all" => "all",
        "english" => "eng",
        "french" => "fre",
        "german" => "ger",
        "spanish" => "spa",
        "italian" => "ita",
        "dutch" => "dut",
        other => other,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_id_names() {
        assert_eq!(language_id("English"), "eng");
        assert_eq!(language_id("all"), "all");
        assert_eq!(language_id("German"), "ger");
    }

    #[test]
    fn test_language_id_passthrough() {
        assert_eq!(language_id("eng"), "eng");
        assert_eq!(language_id("pob"), "pob");
    }
}
