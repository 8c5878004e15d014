/// Data structures for the reading list
use serde::{Deserialize, Serialize};

/// One saved item from the browser's reading list, keyed by URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingListEntry {
    pub url: String,
    pub title: String,
    pub has_been_read: bool,
    /// Epoch milliseconds; legacy entries have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<f64>,
}

impl ReadingListEntry {
    pub fn new(url: &str, title: &str, has_been_read: bool, creation_time: Option<f64>) -> ReadingListEntry {
        ReadingListEntry {
            url: url.to_string(),
            title: title.to_string(),
            has_been_read,
            creation_time,
        }
    }
}

/// Which slice of the list a surface is showing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListFilter {
    All,
    #[default]
    Unread,
    Read,
}

impl ListFilter {
    /// Tab order used by the filter bar
    pub const TABS: [ListFilter; 3] = [ListFilter::Unread, ListFilter::All, ListFilter::Read];

    pub fn label(&self) -> &'static str {
        match self {
            ListFilter::All => "All",
            ListFilter::Unread => "Unread",
            ListFilter::Read => "Read",
        }
    }

    pub fn matches(&self, entry: &ReadingListEntry) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Unread => !entry.has_been_read,
            ListFilter::Read => entry.has_been_read,
        }
    }
}

/// Totals shown next to the filter tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCounts {
    pub total: usize,
    pub unread: usize,
    pub read: usize,
}

impl ListCounts {
    pub fn for_filter(&self, filter: ListFilter) -> usize {
        match filter {
            ListFilter::All => self.total,
            ListFilter::Unread => self.unread,
            ListFilter::Read => self.read,
        }
    }
}

/// Extension action badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub color: &'static str,
}
