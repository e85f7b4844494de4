use serde::{Deserialize, Serialize};

/// A single search hit: the result page's display text and the opaque
/// title key parsed from its link.
///
/// `display` may carry a trailing descriptor (year, "Video", "TV Series")
/// when the result card exposes one. `id` is never interpreted beyond
/// extraction; it is whatever sits in the `/title/` path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub display: String,
    pub id: String,
}

impl Candidate {
    pub fn new(display: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            id: id.into(),
        }
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display, self.id)
    }
}

/// One row of bulk tabular input.
///
/// `year` stays raw text: source cells are noisy ("2010", "2010.0",
/// "N/A", blank) and an unusable year must be dropped, not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRow {
    pub title: String,
    pub year: Option<String>,
}

impl TitleRow {
    pub fn new(title: impl Into<String>, year: Option<impl Into<String>>) -> Self {
        Self {
            title: title.into(),
            year: year.map(Into::into),
        }
    }
}
