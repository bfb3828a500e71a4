use reqwest::Client;

use crate::error::ServiceError;

/// Single-shot HTML download. No caching and no retries.
#[derive(Clone)]
pub struct DocumentFetcher {
    client: Client,
}

impl DocumentFetcher {
    pub fn new(client: Client) -> Self {
        DocumentFetcher { client }
    }

    pub async fn fetch(&self, url: &str) -> Result<String, ServiceError> {
        log::info!("Fetching document: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| ServiceError::fetch(url, e))?;

        response
            .text()
            .await
            .map_err(|e| ServiceError::fetch(url, e))
    }
}
