//! Candidate extraction from search result HTML.
//!
//! The search site has shipped several result-page layouts over time, so
//! extraction is an ordered list of interchangeable strategies: the first
//! one that yields any candidate wins. Absence of an expected node is
//! always "skip this element", never a fault — an unrecognizable page
//! produces an empty list.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use titlefind_core::Candidate;

static CARD_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li.ipc-metadata-list-summary-item").unwrap());
static CARD_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.ipc-metadata-list-summary-item__t").unwrap());
static CARD_DESCRIPTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".ipc-metadata-list-summary-item__tl").unwrap());
static LEGACY_ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".findResult").unwrap());
static ANY_ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static TITLE_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href*="/title/tt"]"#).unwrap());

/// One way of locating result candidates in a particular page layout.
trait ExtractStrategy: Sync {
    fn name(&self) -> &'static str;

    /// Scan the document, collecting at most `max_results` candidates.
    fn extract(&self, doc: &Html, max_results: usize) -> Vec<Candidate>;
}

/// Layouts in priority order: current card markup, the older results
/// table, then a whole-document anchor sweep as the last resort.
static STRATEGIES: &[&dyn ExtractStrategy] = &[&CardLayout, &LegacyLayout, &AnchorSweep];

/// Try each layout strategy in turn; the first non-empty yield wins.
pub fn extract_candidates(html: &str, max_results: usize) -> Vec<Candidate> {
    let doc = Html::parse_document(html);
    for strategy in STRATEGIES {
        let found = strategy.extract(&doc, max_results);
        if !found.is_empty() {
            debug!(
                strategy = strategy.name(),
                count = found.len(),
                "extracted candidates"
            );
            for c in &found {
                debug!(display = %c.display, id = %c.id, "candidate");
            }
            return found;
        }
    }
    debug!("no candidates in any layout");
    Vec::new()
}

/// Current layout: result cards as `li` summary items, title link plus an
/// optional descriptor span (year, "TV Series", ...).
struct CardLayout;

impl ExtractStrategy for CardLayout {
    fn name(&self) -> &'static str {
        "card"
    }

    fn extract(&self, doc: &Html, max_results: usize) -> Vec<Candidate> {
        let mut out = Vec::new();
        for item in doc.select(&CARD_ITEM).take(max_results) {
            let Some(link) = item.select(&CARD_LINK).next() else {
                continue;
            };
            let Some(id) = title_id(&link) else {
                continue;
            };
            let mut display = text_of(&link);
            if let Some(descriptor) = item.select(&CARD_DESCRIPTOR).next() {
                let tail = text_of(&descriptor);
                if !tail.is_empty() {
                    display.push(' ');
                    display.push_str(&tail);
                }
            }
            out.push(Candidate { display, id });
        }
        out
    }
}

/// Older layout: `.findResult` rows whose first anchor links to the
/// title; display text is the whole row.
struct LegacyLayout;

impl ExtractStrategy for LegacyLayout {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn extract(&self, doc: &Html, max_results: usize) -> Vec<Candidate> {
        let mut out = Vec::new();
        for row in doc.select(&LEGACY_ROW).take(max_results) {
            let Some(link) = row.select(&ANY_ANCHOR).next() else {
                continue;
            };
            let Some(id) = title_id(&link) else {
                continue;
            };
            out.push(Candidate {
                display: text_of(&row),
                id,
            });
        }
        out
    }
}

/// Last resort: any anchor in the document whose href carries a
/// canonical-looking title key. Anchors without visible text (poster
/// images, icon links) are skipped.
struct AnchorSweep;

impl ExtractStrategy for AnchorSweep {
    fn name(&self) -> &'static str {
        "anchor-sweep"
    }

    fn extract(&self, doc: &Html, max_results: usize) -> Vec<Candidate> {
        let mut out = Vec::new();
        for link in doc.select(&TITLE_ANCHOR).take(max_results) {
            let Some(id) = title_id(&link) else {
                continue;
            };
            let display = text_of(&link);
            if display.is_empty() {
                continue;
            }
            out.push(Candidate { display, id });
        }
        out
    }
}

/// Identifier = the path segment after `/title/`: split the href on `/`
/// and take zero-based index 2. The fixed index is kept as-is for
/// compatibility with the upstream relative-URL shape; hrefs lacking the
/// marker are not candidates.
fn title_id(link: &ElementRef) -> Option<String> {
    let href = link.value().attr("href")?;
    if !href.contains("/title/") {
        return None;
    }
    href.split('/').nth(2).map(str::to_string)
}

/// Concatenated text of an element with each text node trimmed, matching
/// the stripped-text shape the rest of the pipeline ranks against.
fn text_of(el: &ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
