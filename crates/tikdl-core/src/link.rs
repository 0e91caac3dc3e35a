//! Video link decomposition: identifier, declared mime type, local path.

use std::path::{Path, PathBuf};
use url::Url;

use crate::error::EntryError;

/// Query value that marks a link as a directly downloadable MP4.
pub const MP4_MIME_TYPE: &str = "video_mp4";

/// Extension appended to every identifier when building the local file name.
pub const FILE_EXTENSION: &str = "mp4";

const MIME_TYPE_PARAM: &str = "mime_type";

/// Scheme assumed for links without one, matching curl's guess.
const DEFAULT_SCHEME: &str = "http";

/// A `Link` split into the parts the pipeline needs.
#[derive(Debug, Clone)]
pub struct ParsedLink {
    url: Url,
    identifier: String,
    mime_type: Option<String>,
}

impl ParsedLink {
    /// Validates `link` as a URL and extracts the identifier and declared type.
    ///
    /// Identifier and query come from the link as written, not from the
    /// normalized URL, so `a b.mp4` stays `a b.mp4` and a trailing `..` stays `..`.
    pub fn parse(link: &str) -> Result<Self, EntryError> {
        let url = match Url::parse(link) {
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse(&format!("{}://{}", DEFAULT_SCHEME, link))
            }
            parsed => parsed,
        }
        .map_err(|source| EntryError::InvalidLink {
            link: link.to_string(),
            source,
        })?;

        let (path, query) = split_raw(link);
        // Last segment even when empty: "https://host/a/" gives "".
        let identifier = path.rsplit('/').next().unwrap_or("").to_string();

        // Blank values are ignored, so "mime_type=&mime_type=video_mp4" declares video_mp4.
        let mime_type = url::form_urlencoded::parse(query.as_bytes())
            .filter(|(k, v)| k == MIME_TYPE_PARAM && !v.is_empty())
            .map(|(_, v)| v.into_owned())
            .next();

        Ok(ParsedLink {
            url,
            identifier,
            mime_type,
        })
    }

    /// Normalized URL to request. Schemeless links get `http://`.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Final `/`-delimited segment of the raw path, used as the base file name.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// First non-empty `mime_type` query value, if any.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn is_downloadable(&self) -> bool {
        self.mime_type() == Some(MP4_MIME_TYPE)
    }

    /// `<dest>/<identifier>.mp4`. Identifiers that already end in `.mp4` keep
    /// the doubled extension so earlier downloads are still recognised.
    pub fn destination(&self, dest: &Path) -> PathBuf {
        dest.join(format!("{}.{}", self.identifier, FILE_EXTENSION))
    }
}

/// Raw (path, query) of a link, without any decoding or normalization.
///
/// `scheme:` is dropped when present, then `//authority`. A link without
/// `//` is all path, so `cdn.example.com/obj/abc` has path `cdn.example.com/obj/abc`.
fn split_raw(link: &str) -> (&str, &str) {
    let (before_fragment, _) = link.split_once('#').unwrap_or((link, ""));
    let (rest, query) = before_fragment
        .split_once('?')
        .unwrap_or((before_fragment, ""));

    let rest = match rest.split_once(':') {
        Some((scheme, after)) if is_scheme(scheme) => after,
        _ => rest,
    };
    let path = match rest.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find('/')
            .map_or("", |i| &authority_and_path[i..]),
        None => rest,
    };
    (path, query)
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
