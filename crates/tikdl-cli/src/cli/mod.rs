//! CLI for tikdl.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tikdl_core::config;
use tikdl_core::pipeline::{self, RunOptions, DEFAULT_DEST};

/// Download the videos referenced by a TikTok data export.
#[derive(Debug, Parser)]
#[command(name = "tikdl")]
#[command(about = "Parses TikTok JSON data and downloads the referenced videos", long_about = None)]
pub struct Cli {
    /// Path to the exported JSON archive (e.g. user_data.json).
    pub filename: PathBuf,

    /// Existing directory to write `<id>.mp4` files into.
    #[arg(short, long, default_value = DEFAULT_DEST, value_name = "DIR")]
    pub dest: PathBuf,

    /// Log per-video debug lines.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let options = RunOptions::new(self.dest).with_config(cfg);
        pipeline::run_path(&self.filename, &options)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
