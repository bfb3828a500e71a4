use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::{domain::CompetitorCitation, error::ServiceError};

const TARGET: &str = "custom search";

/// Programmable web search bound to one search engine id.
pub struct CustomSearchClient {
    client: Client,
    base_url: Url,
    api_key: String,
    engine_id: String,
}

#[derive(Deserialize)]
struct CustomSearchResponse {
    items: Option<Vec<CompetitorCitation>>,
}

impl CustomSearchClient {
    pub fn new(client: Client, base_url: Url, api_key: String, engine_id: String) -> Self {
        CustomSearchClient {
            client,
            base_url,
            api_key,
            engine_id,
        }
    }

    /// Returns at most `num` hits in the engine's ranking order.
    pub async fn search(
        &self,
        query: &str,
        num: u8,
    ) -> Result<Vec<CompetitorCitation>, ServiceError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("cx", &self.engine_id)
            .append_pair("q", query)
            .append_pair("key", &self.api_key)
            .append_pair("num", &num.to_string());

        log::info!("Custom search for: {}", query);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| ServiceError::fetch(TARGET, e))?
            .json::<CustomSearchResponse>()
            .await
            .map_err(|e| ServiceError::fetch(TARGET, e))?;

        response
            .items
            .ok_or(ServiceError::MissingData("No search results found"))
    }
}
