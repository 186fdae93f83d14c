//! Tracked-keyword selection and timeline file naming

use chronicle_graph::InvertedIndex;

/// A keyword that passed the tracking filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedKeyword {
    /// The keyword
    pub keyword: String,

    /// Documents listing the keyword
    pub count: usize,
}

/// Select the keywords that get their own timeline file.
///
/// Filters: document count at or above the floor, length at or above the
/// minimum, no "redaction" substring, and no bare 4-digit year token in
/// 1900-2099 (those are dates, not topics). Sorted by count descending,
/// then keyword ascending, so file numbering is deterministic.
pub fn select_tracked_keywords(
    index: &InvertedIndex,
    min_occurrences: usize,
    min_length: usize,
) -> Vec<TrackedKeyword> {
    let mut tracked: Vec<TrackedKeyword> = index
        .iter()
        .filter(|(keyword, postings)| {
            postings.len() >= min_occurrences
                && keyword.chars().count() >= min_length
                && !keyword.contains("redaction")
                && !is_year_token(keyword)
        })
        .map(|(keyword, postings)| TrackedKeyword {
            keyword: keyword.to_string(),
            count: postings.len(),
        })
        .collect();

    tracked.sort_by(|a, b| b.count.cmp(&a.count).then(a.keyword.cmp(&b.keyword)));
    tracked
}

/// Bare 4-digit year in 1900-2099
fn is_year_token(keyword: &str) -> bool {
    let trimmed = keyword.trim();
    if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let year: u32 = trimmed.parse().unwrap_or(0);
    (1900..=2099).contains(&year)
}

/// Convert a keyword to a safe timeline file name component: every
/// non-alphanumeric character becomes `_`, truncated to 50 characters.
pub fn sanitize_filename(keyword: &str) -> String {
    let safe: String = keyword
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    safe.chars().take(50).collect()
}

/// Timeline file name for the n-th tracked keyword (1-based)
pub fn timeline_file_name(position: usize, keyword: &str) -> String {
    format!("keyword_{:03}_{}.json", position, sanitize_filename(keyword))
}
