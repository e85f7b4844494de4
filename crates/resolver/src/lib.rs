//! Title resolution engine: free-text media titles to canonical title
//! keys in the external title database.
//!
//! Pipeline: build a search query from noisy title/year input, fetch the
//! search result page, extract (display text, identifier) candidates
//! across several possible page layouts, then rank them by similarity to
//! the input title. Every failure mode collapses to an empty list at the
//! `resolve` boundary — "no match" is a business outcome here, not an
//! error.

pub mod batch;
pub mod client;
pub mod extract;
pub mod query;
pub mod rank;

use std::time::Duration;

use tracing::debug;

pub use titlefind_core::{Candidate, ResolveError, TitleRow};

use crate::client::SearchClient;

/// Browser-identifying header; the search source rejects obvious bots.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const DEFAULT_BASE_URL: &str = "https://www.imdb.com";

/// Engine configuration. Everything is per-instance; there is no
/// process-wide state.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Search site root, overridable so tests can point at a fixture
    /// endpoint.
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Cap on candidates taken from a result page.
    pub max_results: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
            max_results: 5,
        }
    }
}

/// Stateless title resolver; cheap to share across calls and tasks (the
/// underlying HTTP client pools connections internally).
pub struct Resolver {
    config: ResolverConfig,
    client: SearchClient,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        let client = SearchClient::new(&config);
        Self { config, client }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a title (plus optional raw year cell) to ranked
    /// candidates.
    ///
    /// Returns an empty list for blank titles (no request is issued), for
    /// transport failures, for non-success statuses, and for pages no
    /// layout strategy recognizes. Identical input against an unchanged
    /// remote page yields identical ordered output.
    pub async fn resolve(&self, title: &str, year: Option<&str>) -> Vec<Candidate> {
        let Some(search_query) = query::build_query(title, year) else {
            debug!("blank title, skipping search");
            return Vec::new();
        };
        debug!(query = %search_query, "resolving title");

        let html = match self.client.fetch(&search_query).await {
            Ok(body) => body,
            Err(e) => {
                debug!(query = %search_query, error = %e, "search failed");
                return Vec::new();
            }
        };

        let candidates = extract::extract_candidates(&html, self.config.max_results);
        rank::rank(title, candidates)
    }
}
