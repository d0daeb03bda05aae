use crate::adapters::outbound::archive;
use crate::ports::outbound::IndexSource;
use crate::shared::error::ApkvizError;
use crate::shared::Result;
use std::time::Duration;

/// Request timeout for one index download.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HttpIndexSource adapter for fetching APKINDEX archives from a mirror
///
/// Implements the IndexSource port with a blocking reqwest client. Each
/// load is a single GET with a request timeout; there is no retry policy,
/// a failed source is simply skipped by the caller.
pub struct HttpIndexSource {
    client: reqwest::blocking::Client,
}

impl HttpIndexSource {
    /// Creates a new index source with default client configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("apkviz/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApkvizError::IndexFetch {
                url: url.to_string(),
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ApkvizError::IndexFetch {
                url: url.to_string(),
                details: format!("mirror returned status code {}", response.status()),
            }
            .into());
        }

        let bytes = response.bytes().map_err(|e| ApkvizError::IndexFetch {
            url: url.to_string(),
            details: e.to_string(),
        })?;

        Ok(bytes.to_vec())
    }
}

// Note: no Default implementation; client creation can fail, so callers
// must go through new() and handle the Result.

impl IndexSource for HttpIndexSource {
    fn load(&self, url: &str) -> Result<String> {
        let bytes = self.download(url)?;
        archive::extract_index(&bytes)
    }
}
