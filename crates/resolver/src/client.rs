//! HTTP client for the external title search endpoint.

use std::time::Duration;

use tracing::debug;

use titlefind_core::ResolveError;

use crate::ResolverConfig;

/// Referrer tag the search endpoint expects on exact-title lookups.
const REF_TAG: &str = "fn_tt_ex";

pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl SearchClient {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        }
    }

    /// Fetch the search result page for an already-built query.
    ///
    /// Query text is URL-encoded here via the query-pair encoder, so the
    /// caller hands over plain text. Transport failures and non-success
    /// statuses both surface as `ResolveError`; the pipeline collapses
    /// either to "no candidates".
    pub async fn fetch(&self, query: &str) -> Result<String, ResolveError> {
        let url = format!("{}/find/", self.base_url);
        debug!(url = %url, query, "search request");

        let resp = self
            .client
            .get(&url)
            .query(&[("q", query), ("s", "tt"), ("exact", "true"), ("ref_", REF_TAG)])
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        let status = resp.status();
        debug!(status = %status, query, "search response");

        if !status.is_success() {
            return Err(ResolveError::Status(status.as_u16()));
        }

        resp.text()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))
    }
}
