//! Fuzzy search over list rows using nucleo-matcher.

use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use tabula::{Column, TableRow};

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Fuzzy-match `query` against `items`.
///
/// Returns matches in input order. Empty (or blank) query matches every
/// item with score 0.
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    if query.trim().is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect()
}

/// The text a row is searched by: its column cells joined by spaces.
pub fn search_text<T: TableRow>(row: &T, columns: &[Column]) -> String {
    columns
        .iter()
        .filter_map(|c| row.field(&c.key))
        .filter(|v| !v.is_null())
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rows matching `query` on any column, in their original order.
pub fn filter_rows<T: TableRow>(rows: &[Arc<T>], columns: &[Column], query: &str) -> Vec<Arc<T>> {
    let haystacks: Vec<String> = rows.iter().map(|r| search_text(r.as_ref(), columns)).collect();
    fuzzy_filter(query, &haystacks)
        .into_iter()
        .map(|m| Arc::clone(&rows[m.index]))
        .collect()
}
