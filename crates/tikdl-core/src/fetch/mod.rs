//! HTTP retrieval of video bodies.
//!
//! The pipeline only depends on [`Fetch`]; [`CurlFetcher`] is the libcurl
//! implementation used by the CLI.

mod curl_fetcher;

pub use curl_fetcher::CurlFetcher;

use crate::error::FetchError;

/// Something that can GET a URL and hand back the full response body.
pub trait Fetch {
    /// Performs a GET (following redirects) and returns the complete body.
    /// Non-2xx responses are errors.
    fn fetch(&mut self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &mut F {
    fn fetch(&mut self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}
