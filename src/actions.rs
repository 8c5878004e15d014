/// Store-backed transitions. Each action talks to the store first and only
/// hands back a [`ViewAction`] once the store has confirmed the change.

use crate::error::StoreError;
use crate::host::{HostShell, OpenTarget};
use crate::operations::compute_badge;
use crate::reading_list::{Badge, ReadingListEntry};
use crate::store::ReadingListStore;
use crate::view_state::ViewAction;

/// Fetch a fresh snapshot
pub async fn load<S: ReadingListStore + ?Sized>(store: &S) -> ViewAction {
    match store.query().await {
        Ok(entries) => {
            log::debug!("Loaded {} reading list entries", entries.len());
            ViewAction::Loaded(entries)
        }
        Err(e) => {
            log::error!("Failed to load reading list: {}", e);
            ViewAction::LoadFailed(format!("Failed to load reading list: {}", e))
        }
    }
}

pub async fn set_read_state<S: ReadingListStore + ?Sized>(
    store: &S,
    url: &str,
    read: bool,
) -> Result<ViewAction, StoreError> {
    store.update_entry(url, read).await.map_err(|e| {
        log::error!("Failed to mark {} as {}: {}", url, if read { "read" } else { "unread" }, e);
        e
    })?;

    Ok(ViewAction::ReadStateConfirmed {
        url: url.to_string(),
        read,
    })
}

pub async fn mark_read<S: ReadingListStore + ?Sized>(store: &S, url: &str) -> Result<ViewAction, StoreError> {
    set_read_state(store, url, true).await
}

pub async fn mark_unread<S: ReadingListStore + ?Sized>(store: &S, url: &str) -> Result<ViewAction, StoreError> {
    set_read_state(store, url, false).await
}

pub async fn remove<S: ReadingListStore + ?Sized>(store: &S, url: &str) -> Result<ViewAction, StoreError> {
    store.remove_entry(url).await.map_err(|e| {
        log::error!("Failed to remove {}: {}", url, e);
        e
    })?;

    Ok(ViewAction::RemovalConfirmed(url.to_string()))
}

/// Open an entry and, if it was unread, mark it read
///
/// The read mark follows the open action, not navigation success: a failed
/// navigation is logged and the mark still happens. Already-read entries
/// cause no store call at all, so `Ok(None)` means nothing changed.
pub async fn open_and_mark_read<S, H>(
    store: &S,
    host: &H,
    entry: &ReadingListEntry,
    target: OpenTarget,
) -> Result<Option<ViewAction>, StoreError>
where
    S: ReadingListStore + ?Sized,
    H: HostShell + ?Sized,
{
    if let Err(e) = host.open_url(&entry.url, target).await {
        log::error!("Failed to open {}: {}", entry.url, e);
    }

    if entry.has_been_read {
        return Ok(None);
    }

    mark_read(store, &entry.url).await.map(Some)
}

/// Recompute the action badge from the store
pub async fn refresh_badge<S, H>(store: &S, host: &H) -> Result<Badge, StoreError>
where
    S: ReadingListStore + ?Sized,
    H: HostShell + ?Sized,
{
    let entries = store.query().await?;
    let badge = compute_badge(&entries);
    host.set_badge(&badge).await?;
    Ok(badge)
}
