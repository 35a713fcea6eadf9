//! Blocking HTTP retrieval

use std::time::Duration;

use tracing::debug;

use super::ContentSource;
use crate::error::{Result, artifact::fetch_failed};

const TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches files from `{base_url}/{artifact}/{file}`; no retries
pub struct HttpSource {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let agent = ureq::AgentBuilder::new()
            .timeout(TIMEOUT)
            .user_agent(&format!("ownui/{}", env!("CARGO_PKG_VERSION")))
            .build();
        Self { base_url, agent }
    }

    pub fn file_url(&self, artifact: &str, file: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            artifact.trim_matches('/'),
            file.trim_start_matches('/')
        )
    }
}

impl ContentSource for HttpSource {
    fn fetch(&self, artifact: &str, file: &str) -> Result<String> {
        let url = self.file_url(artifact, file);
        debug!(%url, "fetching");

        match self.agent.get(&url).call() {
            Ok(response) => response
                .into_string()
                .map_err(|e| fetch_failed(artifact, file, format!("reading response: {e}"))),
            Err(ureq::Error::Status(code, _)) => {
                Err(fetch_failed(artifact, file, format!("HTTP {code} from {url}")))
            }
            Err(e) => Err(fetch_failed(artifact, file, e.to_string())),
        }
    }

    fn location(&self) -> String {
        self.base_url.clone()
    }
}
