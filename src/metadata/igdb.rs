use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use super::{Attributes, LookupError, MetadataLookup};

const DEFAULT_FIELDS: &str = "name,summary,first_release_date,rating,genres,platforms";
const DEFAULT_LIMIT: u32 = 10;

/// Connection settings for the IGDB games endpoint.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub url: String,
    pub client_id: String,
    pub access_token: String,
    pub timeout: Duration,
}

/// Searches the IGDB `games` endpoint by title.
pub struct IgdbLookup {
    http_client: reqwest::Client,
    config: LookupConfig,
}

impl IgdbLookup {
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self { http_client, config })
    }

    /// Apicalypse query body for a title search.
    fn query_body(title: &str) -> String {
        let escaped = title.replace('\\', "\\\\").replace('"', "\\\"");
        format!("search \"{escaped}\"; fields {DEFAULT_FIELDS}; limit {DEFAULT_LIMIT};")
    }
}

#[async_trait]
impl MetadataLookup for IgdbLookup {
    #[instrument(skip(self))]
    async fn search_by_title(&self, title: &str) -> Result<Vec<Attributes>, LookupError> {
        debug!(url = %self.config.url, "Querying metadata provider");

        let response = self
            .http_client
            .post(&self.config.url)
            .header("Client-ID", &self.config.client_id)
            .bearer_auth(&self.config.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .body(Self::query_body(title))
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Metadata provider rejected request");
            return Err(LookupError::Status(status.as_u16()));
        }

        let games: Vec<Attributes> = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        if games.is_empty() {
            return Err(LookupError::NoMatch(title.to_string()));
        }

        debug!(matches = games.len(), "Metadata found");
        Ok(games)
    }
}
