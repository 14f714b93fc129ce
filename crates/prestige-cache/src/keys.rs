//! Standard TTL presets and cache key builders.
//!
//! Keys are namespaced by a prefix (`search:`, `rankings:`) so a whole
//! family can be dropped with [`crate::TtlCache::invalidate_pattern`].

use std::time::Duration;

/// TTL presets.
pub struct CacheTtl;

impl CacheTtl {
    /// 30 seconds
    pub const SHORT: Duration = Duration::from_secs(30);
    /// 5 minutes
    pub const MEDIUM: Duration = Duration::from_secs(5 * 60);
    /// 30 minutes
    pub const LONG: Duration = Duration::from_secs(30 * 60);
    /// 1 hour
    pub const HOUR: Duration = Duration::from_secs(60 * 60);
}

/// Cache key builders.
pub struct CacheKeys;

impl CacheKeys {
    /// Pattern matching every search result key.
    pub const SEARCH_PATTERN: &'static str = "^search:";

    /// Key for a search.
    ///
    /// Absent filters render as empty segments, so `search:john::::true`
    /// is a query for "john" with no filters and fuzzy on. Segments are
    /// trimmed, lowercased, and have `\` and `:` backslash-escaped.
    pub fn search_key(
        query: &str,
        country: Option<&str>,
        role: Option<&str>,
        category: Option<&str>,
        fuzzy: bool,
    ) -> String {
        format!(
            "search:{}:{}:{}:{}:{}",
            segment(query),
            segment(country.unwrap_or_default()),
            segment(role.unwrap_or_default()),
            segment(category.unwrap_or_default()),
            fuzzy
        )
    }

    /// Key prefix for the full ranking table.
    pub fn rankings() -> String {
        "rankings:all".to_string()
    }
}

fn segment(value: &str) -> String {
    let value = value.trim().to_lowercase();
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == ':' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_key_normalizes_case_and_whitespace() {
        let a = CacheKeys::search_key("  John Smith ", Some("USA"), None, Some("Cardiology"), true);
        let b = CacheKeys::search_key("john smith", Some("usa"), None, Some("cardiology"), true);
        assert_eq!(a, b);
        assert_eq!(a, "search:john smith:usa::cardiology:true");
    }

    #[test]
    fn test_search_key_distinguishes_fuzzy() {
        let fuzzy = CacheKeys::search_key("john", None, None, None, true);
        let exact = CacheKeys::search_key("john", None, None, None, false);
        assert_ne!(fuzzy, exact);
        assert_eq!(exact, "search:john::::false");
    }

    #[test]
    fn test_search_key_colons_stay_inside_segment() {
        let in_query = CacheKeys::search_key("x:usa", None, None, None, true);
        let as_country = CacheKeys::search_key("x", Some("usa"), None, None, true);
        assert_ne!(in_query, as_country);
        assert_eq!(in_query, r"search:x\:usa::::true");

        let colon_category = CacheKeys::search_key("x", None, None, Some(":"), true);
        let colon_role = CacheKeys::search_key("x", None, Some(":"), None, true);
        assert_ne!(colon_category, colon_role);

        let backslash = CacheKeys::search_key(r"a\", Some("b"), None, None, true);
        let escaped_colon = CacheKeys::search_key(r"a\:b", None, None, None, true);
        assert_ne!(backslash, escaped_colon);
    }

    #[test]
    fn test_search_pattern_matches_search_keys_only() {
        let regex = regex::Regex::new(CacheKeys::SEARCH_PATTERN).unwrap();
        assert!(regex.is_match(&CacheKeys::search_key("x", None, None, None, true)));
        assert!(regex.is_match(&CacheKeys::search_key(":", Some(":"), None, None, false)));
        assert!(!regex.is_match(&CacheKeys::rankings()));
    }

    #[test]
    fn test_ttl_presets() {
        assert_eq!(CacheTtl::SHORT.as_secs(), 30);
        assert_eq!(CacheTtl::MEDIUM.as_secs(), 300);
        assert_eq!(CacheTtl::LONG.as_secs(), 1800);
        assert_eq!(CacheTtl::HOUR.as_secs(), 3600);
    }
}
