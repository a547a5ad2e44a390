use async_trait::async_trait;
use mvn_explorer::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock RemoteCatalogFetcher serving a fixed body or failing
#[derive(Clone, Default)]
pub struct MockRemoteCatalogFetcher {
    body: Option<String>,
    requests: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockRemoteCatalogFetcher {
    pub fn serving(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            ..Default::default()
        }
    }

    pub fn offline() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteCatalogFetcher for MockRemoteCatalogFetcher {
    async fn fetch_catalog(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        match &self.body {
            Some(body) => Ok(body.clone()),
            None => anyhow::bail!("connection refused"),
        }
    }
}
