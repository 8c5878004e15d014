/// List operations: filtering, sorting, search, counts

use crate::config::BADGE_COLOR;
use crate::reading_list::{Badge, ListCounts, ListFilter, ReadingListEntry};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Project the entries matching `filter`, keeping their order
pub fn apply_filter(entries: &[ReadingListEntry], filter: ListFilter) -> Vec<ReadingListEntry> {
    entries.iter().filter(|entry| filter.matches(entry)).cloned().collect()
}

/// Newest first. Entries without a creation time count as 0 and sink to the
/// bottom; ties keep their input order.
pub fn sort_by_saved_time_desc(entries: &[ReadingListEntry]) -> Vec<ReadingListEntry> {
    let mut sorted = entries.to_vec();
    // Vec::sort_by is stable
    sorted.sort_by(|a, b| {
        let a_time = a.creation_time.unwrap_or(0.0);
        let b_time = b.creation_time.unwrap_or(0.0);
        b_time.partial_cmp(&a_time).unwrap_or(Ordering::Equal)
    });
    sorted
}

/// Case-insensitive title search; an empty query matches everything
pub fn apply_search(entries: &[ReadingListEntry], query: &str) -> Vec<ReadingListEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Single-pass totals
pub fn counts(entries: &[ReadingListEntry]) -> ListCounts {
    entries.iter().fold(ListCounts::default(), |mut counts, entry| {
        counts.total += 1;
        if entry.has_been_read {
            counts.read += 1;
        } else {
            counts.unread += 1;
        }
        counts
    })
}

/// Badge for the extension action: total entry count, or cleared when empty
pub fn compute_badge(entries: &[ReadingListEntry]) -> Badge {
    let text = if entries.is_empty() {
        String::new()
    } else {
        entries.len().to_string()
    };

    Badge { text, color: BADGE_COLOR }
}

/// Make entries unique by URL (keep first occurrence)
pub fn dedupe_by_url(entries: Vec<ReadingListEntry>) -> Vec<ReadingListEntry> {
    let mut seen_urls = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen_urls.insert(entry.url.clone()))
        .collect()
}
