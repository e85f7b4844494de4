use thiserror::Error;

/// Faults between the search client and the resolve pipeline.
///
/// These never cross the public boundary: `resolve` collapses every
/// variant to an empty candidate list and the caller treats "no match"
/// as a business outcome, not an exception.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("network error: {0}")]
    Network(String),

    #[error("search returned status {0}")]
    Status(u16),
}
