//! Error taxonomy.
//!
//! [`ArchiveError`] and [`DestinationError`] abort a run before any download.
//! [`EntryError`] is scoped to one video entry and never stops the batch.

use std::path::PathBuf;
use thiserror::Error;

/// The archive could not be read, parsed, or does not have the expected shape.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("cannot read archive {}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("archive {} is not valid JSON", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("archive {} has no Video.Videos.VideoList list", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Destination directory failed the pre-flight check.
#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("destination directory {} does not exist", .0.display())]
    Missing(PathBuf),
    #[error("destination {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot inspect destination {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Network failure for a single GET.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, DNS, ...).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// Why a single entry could not be downloaded.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("entry has no string Link field")]
    MissingLink,
    #[error("invalid link {link:?}: {source}")]
    InvalidLink {
        link: String,
        #[source]
        source: url::ParseError,
    },
    #[error("download failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("write failed: {0:#}")]
    Storage(anyhow::Error),
}

/// Anything that aborts a whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error(transparent)]
    Destination(#[from] DestinationError),
    #[error("failed to set up HTTP client: {0}")]
    Client(#[source] FetchError),
}
