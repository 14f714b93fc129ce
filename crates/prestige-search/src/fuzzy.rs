//! Typo-tolerant single-field matching.
//!
//! [`fuzzy_match`] runs a ladder of strategies and returns on the first
//! success. Scores are ordered so a stricter strategy always outranks a
//! looser one:
//!
//! | Strategy | Condition | Score |
//! |---|---|---|
//! | Exact | case-insensitive equality | 100 |
//! | Prefix | text starts with query | 95 |
//! | Substring | query found at char index `i` | `max(80 - 2i, 50)` |
//! | Initials | query chars consumed by word starts, query ≥ 2 chars | 70 |
//! | Word distance | some word within `⌊len/3⌋` edits, query ≥ 3 chars | `max(60 - 15d, 30)` |
//! | Window distance | some `len`-char window within `⌊len/4⌋` edits, `d > 0` | `max(50 - 10d, 25)` |
//!
//! All comparisons are over lowercased chars. Spans are reported from the
//! original text so callers can highlight with the original casing.

use std::ops::Range;

use serde::Serialize;

use crate::levenshtein::levenshtein_chars;

/// Score for case-insensitive equality.
pub const EXACT_SCORE: f64 = 100.0;
/// Score when the text starts with the query.
pub const PREFIX_SCORE: f64 = 95.0;
/// Substring score at index 0 (unreachable in practice, prefix wins).
pub const SUBSTRING_BASE_SCORE: f64 = 80.0;
/// Substring penalty per char of match offset.
pub const SUBSTRING_OFFSET_PENALTY: f64 = 2.0;
/// Substring score floor.
pub const SUBSTRING_MIN_SCORE: f64 = 50.0;
/// Score for a word-initials match.
pub const INITIALS_SCORE: f64 = 70.0;
/// Shortest query tried against word initials.
pub const INITIALS_MIN_QUERY_LEN: usize = 2;
/// Shortest query tried with edit distance.
pub const EDIT_DISTANCE_MIN_QUERY_LEN: usize = 3;
/// Shortest text word compared by edit distance.
pub const EDIT_DISTANCE_MIN_WORD_LEN: usize = 2;
/// Query chars per allowed edit in word matching.
pub const WORD_CHARS_PER_EDIT: usize = 3;
/// Word-distance score at distance 0.
pub const WORD_BASE_SCORE: f64 = 60.0;
/// Word-distance penalty per edit.
pub const WORD_EDIT_PENALTY: f64 = 15.0;
/// Word-distance score floor.
pub const WORD_MIN_SCORE: f64 = 30.0;
/// Query chars per allowed edit in window matching.
pub const WINDOW_CHARS_PER_EDIT: usize = 4;
/// Window-distance score at distance 0.
pub const WINDOW_BASE_SCORE: f64 = 50.0;
/// Window-distance penalty per edit.
pub const WINDOW_EDIT_PENALTY: f64 = 10.0;
/// Window-distance score floor.
pub const WINDOW_MIN_SCORE: f64 = 25.0;

/// Which rung of the ladder produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Case-insensitive equality
    Exact,
    /// Text starts with query
    Prefix,
    /// Query found verbatim inside text
    Substring,
    /// Query spelled by word initials
    Initials,
    /// One word within the edit budget
    WordDistance,
    /// One text window within the edit budget
    WindowDistance,
    /// Every query token matched on its own
    Tokens,
}

/// Outcome of matching one field against one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyMatch {
    /// Whether any strategy succeeded
    pub matches: bool,
    /// 0-100
    pub score: f64,
    /// Matched portion of the original text
    pub matched_span: String,
    /// Strategy that succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<MatchStrategy>,
}

impl FuzzyMatch {
    /// The no-match result.
    pub fn none() -> Self {
        Self {
            matches: false,
            score: 0.0,
            matched_span: String::new(),
            strategy: None,
        }
    }

    fn hit(strategy: MatchStrategy, score: f64, matched_span: String) -> Self {
        Self {
            matches: true,
            score,
            matched_span,
            strategy: Some(strategy),
        }
    }
}

/// Lowercase one char, keeping it unchanged when its lowercase form is
/// more than one char. Keeps char positions aligned with the original text.
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn fold(s: &str) -> Vec<char> {
    s.chars().map(fold_char).collect()
}

/// Char ranges of whitespace-separated words.
fn word_ranges(chars: &[char]) -> Vec<Range<usize>> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in chars.iter().enumerate() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(s..i);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(s..chars.len());
    }
    words
}

fn find_chars(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn span(original: &[char], range: Range<usize>) -> String {
    original[range].iter().collect()
}

/// Match `query` against `text`.
///
/// An empty query never matches.
pub fn fuzzy_match(text: &str, query: &str) -> FuzzyMatch {
    let original: Vec<char> = text.chars().collect();
    let text_lower = fold(text);
    let query_lower = fold(query);
    let qlen = query_lower.len();

    if qlen == 0 {
        return FuzzyMatch::none();
    }

    if text_lower == query_lower {
        return FuzzyMatch::hit(MatchStrategy::Exact, EXACT_SCORE, text.to_string());
    }

    if text_lower.starts_with(&query_lower) {
        return FuzzyMatch::hit(
            MatchStrategy::Prefix,
            PREFIX_SCORE,
            span(&original, 0..qlen),
        );
    }

    if let Some(index) = find_chars(&text_lower, &query_lower) {
        let score = (SUBSTRING_BASE_SCORE - index as f64 * SUBSTRING_OFFSET_PENALTY)
            .max(SUBSTRING_MIN_SCORE);
        return FuzzyMatch::hit(
            MatchStrategy::Substring,
            score,
            span(&original, index..index + qlen),
        );
    }

    let words = word_ranges(&text_lower);

    if qlen >= INITIALS_MIN_QUERY_LEN {
        let mut consumed = 0;
        let mut initials = String::new();
        for word in &words {
            if consumed < qlen && text_lower[word.start] == query_lower[consumed] {
                initials.push(original[word.start]);
                consumed += 1;
            }
        }
        if consumed == qlen {
            return FuzzyMatch::hit(MatchStrategy::Initials, INITIALS_SCORE, initials);
        }
    }

    if qlen >= EDIT_DISTANCE_MIN_QUERY_LEN {
        let max_word_distance = qlen / WORD_CHARS_PER_EDIT;
        for word in &words {
            if word.len() < EDIT_DISTANCE_MIN_WORD_LEN {
                continue;
            }
            let distance = levenshtein_chars(&text_lower[word.clone()], &query_lower);
            if distance <= max_word_distance {
                let score =
                    (WORD_BASE_SCORE - distance as f64 * WORD_EDIT_PENALTY).max(WORD_MIN_SCORE);
                return FuzzyMatch::hit(
                    MatchStrategy::WordDistance,
                    score,
                    span(&original, word.clone()),
                );
            }
        }

        let max_window_distance = qlen / WINDOW_CHARS_PER_EDIT;
        if text_lower.len() >= qlen {
            for start in 0..=text_lower.len() - qlen {
                let window = &text_lower[start..start + qlen];
                let distance = levenshtein_chars(window, &query_lower);
                if distance > 0 && distance <= max_window_distance {
                    let score = (WINDOW_BASE_SCORE - distance as f64 * WINDOW_EDIT_PENALTY)
                        .max(WINDOW_MIN_SCORE);
                    return FuzzyMatch::hit(
                        MatchStrategy::WindowDistance,
                        score,
                        span(&original, start..start + qlen),
                    );
                }
            }
        }
    }

    FuzzyMatch::none()
}

/// Match the whole query, falling back to matching each query token on its
/// own.
///
/// The fallback applies only to queries of two or more whitespace-separated
/// tokens. Every token must match; the score is the mean of the token
/// scores and the span lists the token spans separated by spaces.
pub fn fuzzy_match_tokens(text: &str, query: &str) -> FuzzyMatch {
    let whole = fuzzy_match(text, query);
    if whole.matches {
        return whole;
    }

    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.len() < 2 {
        return whole;
    }

    let mut total = 0.0;
    let mut spans = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let m = fuzzy_match(text, token);
        if !m.matches {
            return FuzzyMatch::none();
        }
        total += m.score;
        spans.push(m.matched_span);
    }

    FuzzyMatch::hit(
        MatchStrategy::Tokens,
        total / tokens.len() as f64,
        spans.join(" "),
    )
}

/// Byte ranges of `text` to highlight for `query`.
///
/// The first verbatim (case-insensitive) occurrence if there is one,
/// otherwise one single-char range per word initial spelling the query.
/// Empty when the query is shorter than 2 chars or neither applies.
pub fn highlight_spans(text: &str, query: &str) -> Vec<Range<usize>> {
    let query_lower = fold(query);
    if query_lower.len() < INITIALS_MIN_QUERY_LEN {
        return Vec::new();
    }

    // Byte offset of each char, plus the end of the text.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let text_lower = fold(text);

    if let Some(index) = find_chars(&text_lower, &query_lower) {
        return vec![offsets[index]..offsets[index + query_lower.len()]];
    }

    let mut ranges = Vec::new();
    let mut consumed = 0;
    for (i, c) in text_lower.iter().enumerate() {
        if consumed == query_lower.len() {
            break;
        }
        let word_start = i == 0 || text_lower[i - 1].is_whitespace();
        if word_start && *c == query_lower[consumed] {
            ranges.push(offsets[i]..offsets[i + 1]);
            consumed += 1;
        }
    }

    if consumed == query_lower.len() {
        ranges
    } else {
        Vec::new()
    }
}
