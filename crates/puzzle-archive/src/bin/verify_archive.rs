//! Load puzzle archive files and check every record can be solved by replaying
//! its main line.
//!
//! Usage: verify-archive [PATH...]   (defaults to PUZZLE_ARCHIVE_PATH)

use std::path::PathBuf;

use anyhow::bail;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use puzzle_archive::{replay_all, ArchiveConfig, PuzzleArchiveIndex};

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ArchiveConfig::from_env();

    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    let paths = if args.is_empty() { config.archive_paths.clone() } else { args };
    if paths.is_empty() {
        bail!("No archive files given (pass paths or set PUZZLE_ARCHIVE_PATH)");
    }

    let mut index = PuzzleArchiveIndex::default().with_navigator(config.navigator());
    for path in &paths {
        let month = PuzzleArchiveIndex::load(path)?;
        info!(
            path = %path.display(),
            records = month.len(),
            rejected = month.rejected().len(),
            "Loaded archive file"
        );
        index.extend(month);
    }

    for rejected in index.rejected() {
        warn!(id = rejected.id, date = %rejected.date, error = %rejected.error, "Rejected entry");
    }

    let report = replay_all(&index);
    info!(
        records = index.len(),
        rejected = index.rejected().len(),
        solved = report.solved,
        failed = report.failures.len(),
        "Verification finished"
    );

    if !report.is_clean() {
        bail!("{} puzzles failed to replay", report.failures.len());
    }
    Ok(())
}
