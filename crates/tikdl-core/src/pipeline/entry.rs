//! Video entry processor: one archive item through
//! exists-check → mime filter → fetch → write.

use serde_json::Value;
use std::path::Path;

use crate::archive::VideoEntry;
use crate::error::EntryError;
use crate::fetch::Fetch;
use crate::link::ParsedLink;
use crate::storage;

use super::outcome::Outcome;

/// Processes a single `VideoList` item against `dest`.
///
/// The existence check comes before the mime filter, so an already present
/// file is reported as skipped whatever its link declares. No request is
/// made for skipped or dropped entries.
pub fn process_entry<F: Fetch + ?Sized>(value: &Value, dest: &Path, fetcher: &mut F) -> Outcome {
    match try_process_entry(value, dest, fetcher) {
        Ok(outcome) => outcome,
        Err(e) => Outcome::Failed(e),
    }
}

fn try_process_entry<F: Fetch + ?Sized>(
    value: &Value,
    dest: &Path,
    fetcher: &mut F,
) -> Result<Outcome, EntryError> {
    let entry = VideoEntry::from_value(value)?;
    let link = ParsedLink::parse(entry.link)?;
    let full_path = link.destination(dest);

    if full_path.is_file() {
        tracing::debug!("video {} already downloaded, skipping", link.identifier());
        return Ok(Outcome::Skipped);
    }

    if !link.is_downloadable() {
        tracing::debug!(
            mime_type = link.mime_type().unwrap_or(""),
            "dropping {}: not a video link",
            link.identifier()
        );
        return Ok(Outcome::Dropped);
    }

    tracing::debug!(
        "downloading {} from {}://{}{}",
        link.identifier(),
        link.scheme(),
        link.host().unwrap_or(""),
        link.path()
    );
    let body = fetcher.fetch(link.url().as_str())?;

    tracing::debug!("writing {} bytes to {}", body.len(), full_path.display());
    storage::write_file(&full_path, &body).map_err(EntryError::Storage)?;
    Ok(Outcome::Downloaded)
}
