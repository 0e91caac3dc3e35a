//! Download pipeline: load archive, pre-flight the destination, then run every
//! entry through [`process_entry`] in order.
//!
//! Entries are independent. A failed entry is logged and counted; only archive
//! and destination problems abort the run.

mod entry;
mod outcome;

pub use entry::process_entry;
pub use outcome::{Outcome, Report};

use std::io;
use std::path::{Path, PathBuf};

use crate::archive::{load_archive, Archive};
use crate::config::TikdlConfig;
use crate::error::{DestinationError, RunError};
use crate::fetch::{CurlFetcher, Fetch};

/// Default destination when none is given.
pub const DEFAULT_DEST: &str = "./videos";

/// Everything a run needs, passed explicitly.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Existing directory receiving `<identifier>.mp4` files.
    pub dest: PathBuf,
    pub config: TikdlConfig,
}

impl RunOptions {
    pub fn new(dest: impl Into<PathBuf>) -> Self {
        Self {
            dest: dest.into(),
            config: TikdlConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TikdlConfig) -> Self {
        self.config = config;
        self
    }
}

/// Fails unless `dest` is an existing directory. Never creates it.
pub fn check_destination(dest: &Path) -> Result<(), DestinationError> {
    match std::fs::metadata(dest) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(DestinationError::NotADirectory(dest.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(DestinationError::Missing(dest.to_path_buf()))
        }
        Err(source) => Err(DestinationError::Unreadable {
            path: dest.to_path_buf(),
            source,
        }),
    }
}

/// Processes every entry of `archive` sequentially and returns the totals.
pub fn run<F: Fetch + ?Sized>(archive: &Archive, dest: &Path, fetcher: &mut F) -> Report {
    let mut report = Report::default();
    for (index, value) in archive.entries().iter().enumerate() {
        let outcome = process_entry(value, dest, fetcher);
        if let Outcome::Failed(e) = &outcome {
            tracing::warn!(index, "entry {} failed: {}", index, e);
        }
        report.record(&outcome);
    }
    report.log_summary();
    report
}

/// Loads the archive at `archive_path`, checks the destination, and downloads
/// with a libcurl client that lives only for this call.
pub fn run_path(archive_path: &Path, options: &RunOptions) -> Result<Report, RunError> {
    let archive = load_archive(archive_path)?;
    tracing::debug!(
        "loaded {} video entries from {}",
        archive.len(),
        archive_path.display()
    );
    check_destination(&options.dest)?;

    let mut fetcher = CurlFetcher::new(&options.config).map_err(RunError::Client)?;
    Ok(run(&archive, &options.dest, &mut fetcher))
}
