//! Temp-file writer that deletes its file unless finalized.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Open `.part` file plus its path. Dropping an unfinalized writer deletes the
/// file, so a failed entry never leaves a partial download behind.
pub struct StorageWriter {
    file: Option<File>,
    temp_path: PathBuf,
}

impl StorageWriter {
    /// Create (or truncate a leftover) temp file at `temp_path`.
    pub fn create(temp_path: &Path) -> Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(StorageWriter {
            file: Some(file),
            temp_path: temp_path.to_path_buf(),
        })
    }

    fn file(&mut self) -> Result<&mut File> {
        self.file
            .as_mut()
            .context("storage writer already finalized")
    }

    /// Append all of `data`.
    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.file()?
            .write_all(data)
            .with_context(|| format!("write to {} failed", self.temp_path.display()))?;
        Ok(())
    }

    /// Sync file data to disk. Call before `finalize` for durability.
    pub fn sync(&mut self) -> Result<()> {
        self.file()?.sync_all().context("storage sync failed")?;
        Ok(())
    }

    /// Close the file and rename it onto `final_path`, replacing any file there.
    /// On failure the temp file is removed as well.
    pub fn finalize(mut self, final_path: &Path) -> Result<()> {
        drop(self.file.take());

        if let Err(e) = std::fs::rename(&self.temp_path, final_path) {
            remove_temp(&self.temp_path);
            return Err(e).with_context(|| {
                format!(
                    "failed to rename {} to {}",
                    self.temp_path.display(),
                    final_path.display()
                )
            });
        }
        Ok(())
    }
}

impl Drop for StorageWriter {
    fn drop(&mut self) {
        if self.file.take().is_some() {
            remove_temp(&self.temp_path);
        }
    }
}

fn remove_temp(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        tracing::debug!("could not remove temp file {}: {}", path.display(), e);
    }
}
