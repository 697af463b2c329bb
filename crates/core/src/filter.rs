//! Category filtering and list pagination helpers.
//!
//! Category routes accept the literal `all` as a passthrough that returns the
//! whole collection. Every other value is matched against the stored field
//! with the case policy chosen by the caller.

/// Sentinel category meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Default page size when a caller supplies an offset but no limit.
pub const DEFAULT_PAGE_LIMIT: i64 = 6;

/// Upper bound on a single page.
pub const MAX_PAGE_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Case policy
// ---------------------------------------------------------------------------

/// How a filter value is compared with the stored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCase {
    /// Exact byte-for-byte string equality.
    Sensitive,
    /// Both sides lowercased before comparing.
    Insensitive,
}

impl MatchCase {
    /// Compare a stored field value against a filter value.
    pub fn matches(self, stored: &str, wanted: &str) -> bool {
        match self {
            MatchCase::Sensitive => stored == wanted,
            MatchCase::Insensitive => stored.to_lowercase() == wanted.to_lowercase(),
        }
    }
}

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

/// A parsed category path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Exact(String),
}

impl CategoryFilter {
    /// Parse a raw category value. Only the exact lowercase `all` is the
    /// passthrough; `All` or `ALL` are treated as ordinary categories.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(raw.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Slice a list by optional `limit`/`offset`.
///
/// With neither set the list is returned untouched, so unpaginated callers
/// see the full collection in its original order.
pub fn paginate<T>(items: Vec<T>, limit: Option<i64>, offset: Option<i64>) -> Vec<T> {
    if limit.is_none() && offset.is_none() {
        return items;
    }

    let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT) as usize;
    let offset = clamp_offset(offset) as usize;

    items.into_iter().skip(offset).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitive_match_requires_identical_case() {
        assert!(MatchCase::Sensitive.matches("art", "art"));
        assert!(!MatchCase::Sensitive.matches("art", "Art"));
    }

    #[test]
    fn insensitive_match_lowercases_both_sides() {
        assert!(MatchCase::Insensitive.matches("April", "april"));
        assert!(MatchCase::Insensitive.matches("April", "APRIL"));
        assert!(!MatchCase::Insensitive.matches("April", "May"));
    }

    #[test]
    fn all_sentinel_is_case_sensitive() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("All"),
            CategoryFilter::Exact("All".to_string())
        );
        assert_eq!(
            CategoryFilter::parse("dance"),
            CategoryFilter::Exact("dance".to_string())
        );
    }

    #[test]
    fn clamp_limit_bounds() {
        assert_eq!(clamp_limit(None, 6, 100), 6);
        assert_eq!(clamp_limit(Some(0), 6, 100), 1);
        assert_eq!(clamp_limit(Some(-3), 6, 100), 1);
        assert_eq!(clamp_limit(Some(500), 6, 100), 100);
    }

    #[test]
    fn clamp_offset_is_non_negative() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-5)), 0);
        assert_eq!(clamp_offset(Some(7)), 7);
    }

    #[test]
    fn paginate_without_params_returns_everything() {
        let items: Vec<i32> = (1..=20).collect();
        assert_eq!(paginate(items.clone(), None, None), items);
    }

    #[test]
    fn paginate_slices_by_offset_and_limit() {
        let items: Vec<i32> = (1..=20).collect();
        assert_eq!(paginate(items.clone(), Some(3), Some(5)), vec![6, 7, 8]);
        assert_eq!(paginate(items.clone(), None, Some(18)), vec![19, 20]);
        assert!(paginate(items, Some(5), Some(40)).is_empty());
    }
}
