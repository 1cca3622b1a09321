//! Network boundary for the delete and edit-link endpoints.
//!
//! Controllers are generic over [`HttpClient`] so tests can substitute a
//! recording fake. The real implementation wraps a `reqwest::Client`.

use std::time::Duration;

use serde::Serialize;

use crate::error::Result;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("linkstash/", env!("CARGO_PKG_VERSION"));

/// Async HTTP operations the interaction flows need.
///
/// A completed response counts as success regardless of its status code,
/// matching browser `fetch` semantics the page contract was written
/// against; only transport failures surface as errors. No retry and no
/// cancellation of in-flight requests.
pub trait HttpClient {
    /// Issue a DELETE to `url`. The response body is discarded.
    fn delete(&self, url: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    /// POST `body` as JSON to `url`, returning the raw response body.
    fn post_json<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Configuration for [`ReqwestHttpClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientOptions {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Production [`HttpClient`] backed by `reqwest`.
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent)
            .build()?;
        Ok(ReqwestHttpClient { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn delete(&self, url: &str) -> Result<()> {
        let response = self.client.delete(url).send().await?;
        tracing::debug!("DELETE {} -> {}", url, response.status());
        Ok(())
    }

    async fn post_json<B: Serialize + Sync>(&self, url: &str, body: &B) -> Result<String> {
        let response = self.client.post(url).json(body).send().await?;
        tracing::debug!("POST {} -> {}", url, response.status());
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ClientOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert!(options.user_agent.starts_with("linkstash/"));
    }

    #[test]
    fn test_options_builder() {
        let options = ClientOptions::default()
            .timeout(Duration::from_secs(5))
            .user_agent("test-agent");
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.user_agent, "test-agent");
    }

    #[test]
    fn test_client_builds_with_defaults() {
        assert!(ReqwestHttpClient::new(ClientOptions::default()).is_ok());
    }
}
