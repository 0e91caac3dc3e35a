//! Single-stream GET over one reusable libcurl easy handle.

use crate::config::TikdlConfig;
use crate::error::FetchError;

use super::Fetch;

/// libcurl fetcher. Keeps one easy handle for the lifetime of a run so that
/// consecutive requests to the same CDN reuse the connection; dropping the
/// fetcher closes it.
pub struct CurlFetcher {
    easy: curl::easy::Easy,
}

impl CurlFetcher {
    pub fn new(cfg: &TikdlConfig) -> Result<Self, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.follow_location(true)?;
        easy.max_redirections(cfg.max_redirections)?;
        easy.connect_timeout(cfg.connect_timeout())?;
        easy.low_speed_limit(cfg.low_speed_limit_bytes)?;
        easy.low_speed_time(cfg.low_speed_time())?;
        if let Some(timeout) = cfg.timeout() {
            easy.timeout(timeout)?;
        }
        if let Some(ua) = cfg.user_agent.as_deref() {
            easy.useragent(ua)?;
        }
        Ok(CurlFetcher { easy })
    }
}

impl Fetch for CurlFetcher {
    fn fetch(&mut self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();
        self.easy.url(url)?;
        self.easy.get(true)?;
        {
            let mut transfer = self.easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = self.easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        Ok(body)
    }
}
