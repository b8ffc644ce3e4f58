//! Movie Subtitler CLI
//!
//! Scans a directory of movies and pairs each one with the best available
//! subtitles from opensubtitles.org.

use clap::Parser;
use movie_subtitler::cli::args::Cli;
use movie_subtitler::cli::commands::run;
use movie_subtitler::models::config::{self, Config};
use movie_subtitler::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run preflight checks unless skipped
    if !cli.skip_preflight {
        run_preflight_checks()?;
    }

    // Build the immutable run configuration and scan
    let config = build_config(cli)?;
    run::run(&config).await?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("movie_subtitler=debug")
    } else {
        EnvFilter::new("movie_subtitler=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
fn run_preflight_checks() -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks();
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}

/// Assemble the run configuration: defaults, then the optional config
/// file, then command-line overrides.
fn build_config(cli: Cli) -> anyhow::Result<Config> {
    let file = config::load_file_config();

    let root_dir = cli.root_dir.or(file.root_dir).ok_or_else(|| {
        anyhow::anyhow!("No root directory given. Pass it as an argument or set root_dir in config.toml")
    })?;

    Ok(Config {
        root_dir,
        temp_dir: cli
            .temp_dir
            .or(file.temp_dir)
            .unwrap_or_else(std::env::temp_dir),
        host: cli
            .host
            .or(file.host)
            .unwrap_or_else(|| config::DEFAULT_HOST.to_string()),
        language: config::language_id(
            &cli.language
                .or(file.language)
                .unwrap_or_else(|| "English".to_string()),
        ),
        trusted_only: cli.trusted_only || file.trusted_only.unwrap_or(false),
        hearing_impaired_only: cli.hearing_impaired || file.hearing_impaired_only.unwrap_or(false),
        overwrite_existing: cli.overwrite || file.overwrite_existing.unwrap_or(false),
        video_extensions: file.video_extensions.unwrap_or_else(|| {
            config::DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect()
        }),
        min_movie_bytes: cli
            .min_movie_size_mib
            .or(file.min_movie_mib)
            .unwrap_or(config::DEFAULT_MIN_MOVIE_MIB)
            * 1024
            * 1024,
    })
}
