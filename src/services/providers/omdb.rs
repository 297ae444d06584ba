/// OMDb API provider
///
/// Resolves titles through OMDb's `?t=` lookup, which returns the single best
/// match for a free-text title. Episode lookups add `Season` and `Episode`
/// parameters to the same call.
use crate::{
    error::{AppError, AppResult},
    models::{EpisodeRecord, EpisodeRef, MovieRecord, OmdbMovie},
    services::providers::{decode_payload, LookupOutcome, MetadataProvider},
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    /// Creates a provider whose every call is bounded by `lookup_timeout`
    pub fn new(api_key: String, api_url: String, lookup_timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(lookup_timeout)
            .build()
            .map_err(|e| AppError::ExternalApi(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    /// Issues one lookup; no retries
    async fn lookup<T: DeserializeOwned>(
        &self,
        title: &str,
        episode: Option<EpisodeRef>,
    ) -> LookupOutcome<T> {
        let mut params = vec![
            ("apikey", self.api_key.clone()),
            ("t", title.to_string()),
        ];
        if let Some(episode) = episode {
            params.push(("Season", episode.season.to_string()));
            params.push(("Episode", episode.episode.to_string()));
        }

        let response = match self.http_client.get(&self.api_url).query(&params).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(title = %title, error = %e, "OMDb request failed");
                return LookupOutcome::TransportError(format!("Failed to reach OMDb API: {}", e));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return LookupOutcome::TransportError(format!(
                    "Failed to read OMDb response: {}",
                    e
                ))
            }
        };

        let outcome = decode_payload::<T>(&body);

        // OMDb reports misses (and bad keys) with an error envelope on 4xx too
        if !status.is_success() && !matches!(outcome, LookupOutcome::NotFound(_)) {
            return LookupOutcome::TransportError(format!("OMDb API returned status {}", status));
        }

        tracing::debug!(
            title = %title,
            outcome = outcome.kind(),
            provider = "omdb",
            "Lookup completed"
        );

        outcome
    }
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbProvider {
    async fn lookup_title(&self, title: &str) -> LookupOutcome<MovieRecord> {
        self.lookup::<OmdbMovie>(title, None)
            .await
            .map(MovieRecord::from)
    }

    async fn lookup_episode(
        &self,
        series_title: &str,
        episode: EpisodeRef,
    ) -> LookupOutcome<EpisodeRecord> {
        self.lookup::<EpisodeRecord>(series_title, Some(episode)).await
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
