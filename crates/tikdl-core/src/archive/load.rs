//! Read and validate an archive file.

use serde_json::Value;
use std::path::Path;

use crate::error::ArchiveError;

use super::parse::ArchiveRoot;

/// Parsed archive: the ordered `VideoList` items.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    entries: Vec<Value>,
}

impl Archive {
    /// Raw list items, in file order.
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loads the archive at `path`.
///
/// The three failure stages are reported separately: the file cannot be read
/// ([`ArchiveError::Input`]), it is not JSON ([`ArchiveError::Parse`]), or the
/// `Video.Videos.VideoList` array is missing or mistyped ([`ArchiveError::Schema`]).
pub fn load_archive(path: &Path) -> Result<Archive, ArchiveError> {
    let bytes = std::fs::read(path).map_err(|source| ArchiveError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|source| ArchiveError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    archive_from_value(path, value)
}

/// Validates an already-parsed JSON document. `path` is only used in errors.
pub fn archive_from_value(path: &Path, value: Value) -> Result<Archive, ArchiveError> {
    let root: ArchiveRoot =
        serde_json::from_value(value).map_err(|source| ArchiveError::Schema {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Archive {
        entries: root.video.videos.video_list,
    })
}
