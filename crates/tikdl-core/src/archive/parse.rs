//! Minimal shape of the TikTok data export needed to reach the video list.
//!
//! Only `Video.Videos.VideoList` is modelled; every other section is ignored.
//! List items stay raw JSON so that one bad item does not fail the whole file.

use serde::Deserialize;
use serde_json::Value;

use crate::error::EntryError;

/// Root of the export (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct ArchiveRoot {
    #[serde(rename = "Video")]
    pub video: VideoSection,
}

#[derive(Debug, Deserialize)]
pub struct VideoSection {
    #[serde(rename = "Videos")]
    pub videos: VideoListSection,
}

#[derive(Debug, Deserialize)]
pub struct VideoListSection {
    #[serde(rename = "VideoList")]
    pub video_list: Vec<Value>,
}

/// One item of `VideoList`, borrowed from the loaded archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoEntry<'a> {
    pub link: &'a str,
}

impl<'a> VideoEntry<'a> {
    /// Extract the `Link` field; absent or non-string is [`EntryError::MissingLink`].
    pub fn from_value(value: &'a Value) -> Result<Self, EntryError> {
        let link = value
            .get("Link")
            .and_then(Value::as_str)
            .ok_or(EntryError::MissingLink)?;
        Ok(VideoEntry { link })
    }
}
