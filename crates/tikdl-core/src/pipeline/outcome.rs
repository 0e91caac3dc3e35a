//! Per-entry outcome and run totals.

use crate::error::EntryError;

/// Terminal state of one video entry.
#[derive(Debug)]
pub enum Outcome {
    /// Destination file already present; no request made.
    Skipped,
    /// Link does not declare `mime_type=video_mp4`.
    Dropped,
    Downloaded,
    Failed(EntryError),
}

/// Totals for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub downloaded: usize,
    pub skipped: usize,
    pub dropped: usize,
    pub failed: usize,
}

impl Report {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::Dropped => self.dropped += 1,
            Outcome::Downloaded => self.downloaded += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn log_summary(&self) {
        tracing::info!("parsed archive successfully");
        tracing::info!("downloaded {} file(s)", self.downloaded);
        tracing::info!("skipped {} file(s)", self.skipped);
        tracing::info!("dropped {} non-video link(s)", self.dropped);
        if self.failed > 0 {
            tracing::warn!("failed {} file(s)", self.failed);
        } else {
            tracing::info!("failed 0 file(s)");
        }
    }
}
