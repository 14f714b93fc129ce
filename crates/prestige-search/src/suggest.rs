//! Query suggestions from recent and popular searches.

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Suggest completions for `query`.
///
/// A blank query returns the first recent searches. Otherwise recent
/// searches starting with the query come first, then popular searches
/// containing it, both case-insensitive and without duplicates.
pub fn search_suggestions(query: &str, recent: &[String], popular: &[String]) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return recent.iter().take(MAX_SUGGESTIONS).cloned().collect();
    }

    let query = query.to_lowercase();
    let recent_hits = recent
        .iter()
        .filter(|r| r.to_lowercase().starts_with(&query));
    let popular_hits = popular.iter().filter(|p| p.to_lowercase().contains(&query));

    let mut suggestions: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);
    for candidate in recent_hits.chain(popular_hits) {
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
        if !suggestions.contains(candidate) {
            suggestions.push(candidate.clone());
        }
    }
    suggestions
}
