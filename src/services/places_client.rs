use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::{domain::SearchResult, error::ServiceError};

const TARGET: &str = "places search";

pub struct PlacesClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

#[derive(Deserialize)]
struct PlacesResponse {
    results: Option<Vec<SearchResult>>,
    status: Option<String>,
}

pub fn build_places_query(sector: &str, city: &str, state: &str) -> String {
    format!("{} in {}, {}", sector, city, state)
}

impl PlacesClient {
    pub fn new(client: Client, base_url: Url, api_key: String) -> Self {
        PlacesClient {
            client,
            base_url,
            api_key,
        }
    }

    /// Free-text places search. A response without a `results` list is
    /// reported as missing data rather than an empty list.
    pub async fn text_search(&self, query: &str) -> Result<Vec<SearchResult>, ServiceError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("key", &self.api_key);

        log::info!("Searching places for: {}", query);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ServiceError::fetch(TARGET, e))?
            .json::<PlacesResponse>()
            .await
            .map_err(|e| ServiceError::fetch(TARGET, e))?;

        match response.results {
            Some(results) => {
                log::info!("Places search returned {} results", results.len());
                Ok(results)
            }
            None => {
                log::warn!(
                    "Results not found in places response, status: {:?}",
                    response.status
                );
                Err(ServiceError::MissingData("No results found"))
            }
        }
    }
}
