use std::future::Future;

use log::debug;
use url::Url;

use crate::error::{BotError, Result};

use super::models::SearchResponse;

/// Number of results requested per search.
pub const RESULT_LIMIT: u32 = 5;

const SEARCH_PATH: &str = "v1/gifs/search";

/// Something that can turn an encoded query into search results.
pub trait ImageSearch {
    /// Search for `query`, which must already be URL encoded.
    fn search(&self, query: &str) -> impl Future<Output = Result<SearchResponse>> + Send;
}

pub struct GiphyClient {
    api_key: String,
    base_url: Url,
    client: reqwest::Client,
}

impl GiphyClient {
    pub fn new(api_key: String, base_url: Url) -> Self {
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Build the search URL. The query is appended as-is so `%20` sequences
    /// reach the API unchanged.
    fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.base_url.join(SEARCH_PATH)?;
        url.set_query(Some(&format!(
            "api_key={}&q={}&limit={}",
            self.api_key, query, RESULT_LIMIT
        )));
        Ok(url)
    }
}

impl ImageSearch for GiphyClient {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = self.search_url(query)?;
        debug!("Searching GIPHY for '{}'", query);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));
            return Err(BotError::GiphyApi { status, message });
        }

        let body = response.bytes().await?;
        let search_response: SearchResponse = serde_json::from_slice(&body)?;

        debug!(
            "GIPHY returned {} results ({} total)",
            search_response.data.len(),
            search_response.pagination.total_count
        );

        Ok(search_response)
    }
}
