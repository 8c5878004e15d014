/// Surface-local view state and its reducer

use crate::operations::{apply_filter, apply_search, counts, dedupe_by_url, sort_by_saved_time_desc};
use crate::reading_list::{ListCounts, ListFilter, ReadingListEntry};
use std::rc::Rc;
use yew::functional::Reducible;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Error(String),
}

/// Everything one open surface knows about the reading list.
/// Discarded with the surface; never shared between surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub entries: Vec<ReadingListEntry>,
    pub filter: ListFilter,
    pub search_query: String,
    pub load_status: LoadStatus,
}

/// Transitions applied to [`ViewState`]. Store mutations only arrive here
/// after the store has confirmed them.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    LoadStarted,
    Loaded(Vec<ReadingListEntry>),
    LoadFailed(String),
    ReadStateConfirmed { url: String, read: bool },
    RemovalConfirmed(String),
    FilterChanged(ListFilter),
    SearchChanged(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyMessage {
    pub title: &'static str,
    pub description: &'static str,
}

impl ViewState {
    pub fn new(filter: ListFilter) -> Self {
        ViewState {
            entries: Vec::new(),
            filter,
            search_query: String::new(),
            load_status: LoadStatus::Loading,
        }
    }

    /// Pure reducer
    pub fn apply(mut self, action: ViewAction) -> Self {
        match action {
            ViewAction::LoadStarted => {
                self.load_status = LoadStatus::Loading;
            }
            ViewAction::Loaded(entries) => {
                // Whole snapshot replaces whatever was there
                self.entries = sort_by_saved_time_desc(&dedupe_by_url(entries));
                self.load_status = LoadStatus::Ready;
            }
            ViewAction::LoadFailed(message) => {
                self.load_status = LoadStatus::Error(message);
            }
            ViewAction::ReadStateConfirmed { url, read } => {
                if let Some(entry) = self.entries.iter_mut().find(|e| e.url == url) {
                    entry.has_been_read = read;
                }
            }
            ViewAction::RemovalConfirmed(url) => {
                self.entries.retain(|e| e.url != url);
            }
            ViewAction::FilterChanged(filter) => {
                self.filter = filter;
            }
            ViewAction::SearchChanged(query) => {
                self.search_query = query;
            }
        }
        self
    }

    pub fn counts(&self) -> ListCounts {
        counts(&self.entries)
    }

    /// Entries after filter, then search
    pub fn visible_entries(&self) -> Vec<ReadingListEntry> {
        apply_search(&apply_filter(&self.entries, self.filter), &self.search_query)
    }

    pub fn find(&self, url: &str) -> Option<&ReadingListEntry> {
        self.entries.iter().find(|e| e.url == url)
    }

    /// What to show when nothing is visible; `None` if something is
    pub fn empty_message(&self) -> Option<EmptyMessage> {
        let visible = self.visible_entries();
        if !visible.is_empty() {
            return None;
        }

        if !self.search_query.is_empty() && !self.entries.is_empty() {
            return Some(EmptyMessage {
                title: "No matches found",
                description: "No saved titles contain your search.",
            });
        }

        Some(match self.filter {
            ListFilter::Read => EmptyMessage {
                title: "No read articles",
                description: "You have no read articles at the moment.",
            },
            ListFilter::Unread => EmptyMessage {
                title: "No unread articles",
                description: "You have no unread articles at the moment.",
            },
            ListFilter::All => EmptyMessage {
                title: "No articles yet",
                description: "Add articles to Chrome's reading list to see them here. Click the bookmark icon or use Cmd+D on articles you want to read later.",
            },
        })
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}
