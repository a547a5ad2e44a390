use crate::ports::outbound::RemoteCatalogFetcher;
use crate::shared::error::ExplorerError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default location of the central archetype catalog
pub const DEFAULT_REMOTE_CATALOG_URL: &str =
    "https://repo.maven.apache.org/maven2/archetype-catalog.xml";

/// HttpCatalogClient adapter downloading archetype catalogs over HTTP(S)
///
/// Every request is bounded by the configured timeout. Transient failures
/// are retried a couple of times before the source is given up.
pub struct HttpCatalogClient {
    client: reqwest::Client,
    max_retries: u32,
}

impl HttpCatalogClient {
    /// Creates a client whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("mvn-explorer/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_retries: 2,
        })
    }

    /// Only plain http(s) URLs are fetched
    fn validate_url(url: &str) -> Result<reqwest::Url> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| anyhow::anyhow!("Invalid catalog URL '{}': {}", url, e))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => anyhow::bail!("Unsupported catalog URL scheme '{}' in {}", scheme, url),
        }
    }

    async fn fetch_once(&self, url: reqwest::Url) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Catalog server returned status code {}", response.status());
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl RemoteCatalogFetcher for HttpCatalogClient {
    async fn fetch_catalog(&self, url: &str) -> Result<String> {
        let parsed = Self::validate_url(url)?;
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once(parsed.clone()).await {
                Ok(body) => {
                    tracing::debug!(url, bytes = body.len(), "remote catalog downloaded");
                    return Ok(body);
                }
                Err(e) => {
                    tracing::debug!(url, attempt, "catalog download failed: {}", e);
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(200 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(ExplorerError::CatalogFetchError {
            source_name: url.to_string(),
            details: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no attempt was made".to_string()),
        }
        .into())
    }
}
