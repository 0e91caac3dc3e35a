//! Disk I/O and file lifecycle.
//!
//! Bodies are written to `<final>.part`, synced, then renamed onto the final
//! name, so the destination either has the complete file or nothing.

mod writer;

pub use writer::StorageWriter;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `1.mp4` → `1.mp4.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Persist `body` at `final_path` via temp file + rename. Overwrites an existing file.
pub fn write_file(final_path: &Path, body: &[u8]) -> Result<()> {
    let mut writer = StorageWriter::create(&temp_path(final_path))?;
    writer.write_all(body)?;
    writer.sync()?;
    writer.finalize(final_path)
}
