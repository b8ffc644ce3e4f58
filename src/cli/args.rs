//! Command line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Movie Subtitler - pair movie folders with subtitles from opensubtitles.org
#[derive(Parser, Debug)]
#[command(name = "movie-subtitler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory containing movie files and folders
    #[arg(value_name = "ROOT_DIR")]
    pub root_dir: Option<PathBuf>,

    /// Directory for temporary subtitle archives
    #[arg(long, value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Remote host base URL
    #[arg(long, value_name = "URL")]
    pub host: Option<String>,

    /// Subtitle language (name like "English" or a sublanguage id like "eng")
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Only download subtitles from trusted uploaders
    #[arg(long)]
    pub trusted_only: bool,

    /// Only download hearing-impaired subtitles
    #[arg(long)]
    pub hearing_impaired: bool,

    /// Overwrite existing subtitles with freshly downloaded ones
    #[arg(long)]
    pub overwrite: bool,

    /// Minimum movie file size in MiB (filters out sample clips)
    #[arg(long, value_name = "MIB")]
    pub min_movie_size_mib: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long)]
    pub skip_preflight: bool,
}
