/// Port for the host-owned reading list
use crate::error::StoreError;
use crate::reading_list::ReadingListEntry;
use async_trait::async_trait;

/// CRUD surface of the browser's reading list. Every call may fail.
#[async_trait(?Send)]
pub trait ReadingListStore {
    /// Full snapshot of every entry
    async fn query(&self) -> Result<Vec<ReadingListEntry>, StoreError>;

    async fn update_entry(&self, url: &str, has_been_read: bool) -> Result<(), StoreError>;

    async fn remove_entry(&self, url: &str) -> Result<(), StoreError>;
}

/// Source of "something in the reading list changed" notifications.
/// Listening stops when the returned subscription is dropped.
pub trait ChangeFeed {
    type Subscription;

    fn subscribe(&self, on_change: Box<dyn FnMut()>) -> Self::Subscription;
}
