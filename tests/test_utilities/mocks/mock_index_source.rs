use apkviz::prelude::*;
use std::collections::HashMap;

/// Mock IndexSource serving canned APKINDEX text per URL
///
/// Any URL without a canned response fails, standing in for an
/// unreachable mirror.
pub struct MockIndexSource {
    responses: HashMap<String, String>,
}

impl MockIndexSource {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    pub fn with_index(mut self, url: &str, raw: &str) -> Self {
        self.responses.insert(url.to_string(), raw.to_string());
        self
    }
}

impl IndexSource for MockIndexSource {
    fn load(&self, url: &str) -> Result<String> {
        match self.responses.get(url) {
            Some(raw) => Ok(raw.clone()),
            None => anyhow::bail!("Mock index source failure for {}", url),
        }
    }
}
