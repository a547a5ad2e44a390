use async_trait::async_trait;
use mvn_explorer::prelude::*;
use std::sync::{Arc, Mutex};

/// In-memory CatalogStore
#[derive(Clone, Default)]
pub struct MockCatalogStore {
    provided: Option<String>,
    local: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provided(mut self, content: &str) -> Self {
        self.provided = Some(content.to_string());
        self
    }

    pub fn with_local(self, content: &str) -> Self {
        *self.local.lock().unwrap() = Some(content.to_string());
        self
    }

    pub fn local(&self) -> Option<String> {
        self.local.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogStore for MockCatalogStore {
    async fn read_provided(&self) -> Result<Option<String>> {
        Ok(self.provided.clone())
    }

    async fn read_local(&self) -> Result<Option<String>> {
        Ok(self.local())
    }

    async fn write_local(&self, content: &str) -> Result<()> {
        *self.local.lock().unwrap() = Some(content.to_string());
        Ok(())
    }
}
