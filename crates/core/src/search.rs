//! Cross-collection free-text search.
//!
//! Lives in `core` so it can run wherever the three searchable collections are
//! available: inside the API against the live store, or in any consumer that
//! has fetched the collections itself. Performs no I/O.

use serde::Serialize;

use crate::types::DbId;

/// Maximum number of hits returned by [`search`].
pub const MAX_SEARCH_RESULTS: usize = 10;

// ---------------------------------------------------------------------------
// Hit types
// ---------------------------------------------------------------------------

/// Which collection a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Cultural,
    Event,
    Gallery,
}

/// A single search result with provenance and a derived deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: DbId,
    pub title: String,
    pub kind: SearchKind,
    pub category: String,
    pub destination_url: String,
}

/// An entity that can take part in [`search`].
pub trait Searchable {
    /// Text fields matched against the query.
    fn search_fields(&self) -> Vec<&str>;

    /// Build the hit recorded when this entity matches.
    fn to_hit(&self) -> SearchHit;

    /// Whether any search field contains the already-lowercased needle.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

// ---------------------------------------------------------------------------
// Query handling
// ---------------------------------------------------------------------------

/// Turn raw user input into the lowercase needle used for substring matching.
///
/// Returns `None` for empty or whitespace-only input. Surrounding whitespace
/// of a non-blank query is kept, so `" holi"` only matches text containing a
/// space before `holi`.
pub fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Search content items, then events, then media items.
///
/// Hits keep collection order within each kind and the combined list is cut
/// at [`MAX_SEARCH_RESULTS`]. Collections are borrowed, so callers can pass
/// slices or iterators over live storage; one that has not been loaded is
/// passed as an empty slice. Iteration stops once the cap is reached.
pub fn search<'a, C, E, M>(
    query: &str,
    content: impl IntoIterator<Item = &'a C>,
    events: impl IntoIterator<Item = &'a E>,
    media: impl IntoIterator<Item = &'a M>,
) -> Vec<SearchHit>
where
    C: Searchable + 'a,
    E: Searchable + 'a,
    M: Searchable + 'a,
{
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let content_hits = content
        .into_iter()
        .filter(|item| item.matches(&needle))
        .map(Searchable::to_hit);
    let event_hits = events
        .into_iter()
        .filter(|item| item.matches(&needle))
        .map(Searchable::to_hit);
    let media_hits = media
        .into_iter()
        .filter(|item| item.matches(&needle))
        .map(Searchable::to_hit);

    content_hits
        .chain(event_hits)
        .chain(media_hits)
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
