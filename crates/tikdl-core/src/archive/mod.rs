//! Archive loader: reads a TikTok data export (JSON) and exposes its video list.
//!
//! Expected shape:
//! `{ "Video": { "Videos": { "VideoList": [ { "Link": "<url>", ... } ] } } }`

mod load;
mod parse;

pub use load::{archive_from_value, load_archive, Archive};
pub use parse::VideoEntry;
