/// Store change notifications wired to snapshot reloads and badge refreshes

use crate::actions::{load, refresh_badge};
use crate::host::HostShell;
use crate::store::{ChangeFeed, ReadingListStore};
use crate::view_state::ViewAction;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Work handed to the page's executor (`spawn_local` in the browser)
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Reload the full snapshot every time the store reports a change
pub fn reload_on_change<F, S>(
    feed: &F,
    store: Rc<S>,
    spawn: impl Fn(LocalTask) + 'static,
    on_loaded: impl Fn(ViewAction) + 'static,
) -> F::Subscription
where
    F: ChangeFeed + ?Sized,
    S: ReadingListStore + ?Sized + 'static,
{
    let on_loaded = Rc::new(on_loaded);
    feed.subscribe(Box::new(move || {
        let store = store.clone();
        let on_loaded = on_loaded.clone();
        spawn(Box::pin(async move { on_loaded(load(&*store).await) }));
    }))
}

/// Recompute the badge from scratch on every store event
pub fn refresh_badge_on_change<F, S, H>(
    feed: &F,
    store: Rc<S>,
    host: Rc<H>,
    spawn: impl Fn(LocalTask) + 'static,
) -> F::Subscription
where
    F: ChangeFeed + ?Sized,
    S: ReadingListStore + ?Sized + 'static,
    H: HostShell + ?Sized + 'static,
{
    feed.subscribe(Box::new(move || {
        let store = store.clone();
        let host = host.clone();
        spawn(Box::pin(async move { update_badge(&*store, &*host).await }));
    }))
}

/// [`refresh_badge`] with the outcome logged
pub async fn update_badge<S, H>(store: &S, host: &H)
where
    S: ReadingListStore + ?Sized,
    H: HostShell + ?Sized,
{
    match refresh_badge(store, host).await {
        Ok(badge) => log::debug!("Badge set to {:?}", badge.text),
        Err(e) => log::error!("Failed to update badge: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::host::OpenTarget;
    use crate::reading_list::{Badge, ReadingListEntry};
    use async_trait::async_trait;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::{Cell, RefCell};

    type Listeners = Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>;

    /// In-memory change feed; `fire` plays the role of a chrome event
    #[derive(Default)]
    struct FakeFeed {
        listeners: Listeners,
    }

    struct FakeSubscription {
        listeners: Listeners,
        slot: usize,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.listeners.borrow_mut()[self.slot] = None;
        }
    }

    impl ChangeFeed for FakeFeed {
        type Subscription = FakeSubscription;

        fn subscribe(&self, on_change: Box<dyn FnMut()>) -> FakeSubscription {
            let mut listeners = self.listeners.borrow_mut();
            listeners.push(Some(on_change));
            FakeSubscription {
                listeners: self.listeners.clone(),
                slot: listeners.len() - 1,
            }
        }
    }

    impl FakeFeed {
        fn fire(&self) {
            for listener in self.listeners.borrow_mut().iter_mut().flatten() {
                listener();
            }
        }

        fn live(&self) -> usize {
            self.listeners.borrow().iter().flatten().count()
        }
    }

    #[derive(Default)]
    struct FakeStore {
        entries: RefCell<Vec<ReadingListEntry>>,
        fail_query: Cell<bool>,
        queries: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl ReadingListStore for FakeStore {
        async fn query(&self) -> Result<Vec<ReadingListEntry>, StoreError> {
            self.queries.set(self.queries.get() + 1);
            if self.fail_query.get() {
                return Err(StoreError::Load("permission denied".to_string()));
            }
            Ok(self.entries.borrow().clone())
        }

        async fn update_entry(&self, _url: &str, _has_been_read: bool) -> Result<(), StoreError> {
            Ok(())
        }

        async fn remove_entry(&self, _url: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeHost {
        badges: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl HostShell for FakeHost {
        async fn set_badge(&self, badge: &Badge) -> Result<(), StoreError> {
            self.badges.borrow_mut().push(badge.text.clone());
            Ok(())
        }

        async fn open_url(&self, _url: &str, _target: OpenTarget) -> Result<(), StoreError> {
            Ok(())
        }

        async fn set_panel_behavior(&self, _open_on_action_click: bool) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn store_with(entries: Vec<ReadingListEntry>) -> Rc<FakeStore> {
        Rc::new(FakeStore {
            entries: RefCell::new(entries),
            ..FakeStore::default()
        })
    }

    fn spawner(pool: &LocalPool) -> impl Fn(LocalTask) + 'static {
        let spawner = pool.spawner();
        move |task: LocalTask| spawner.spawn_local(task).unwrap()
    }

    fn recorder() -> (Rc<RefCell<Vec<ViewAction>>>, impl Fn(ViewAction) + 'static) {
        let actions = Rc::new(RefCell::new(Vec::new()));
        let sink = actions.clone();
        (actions, move |action: ViewAction| sink.borrow_mut().push(action))
    }

    #[test]
    fn test_every_change_reloads_full_snapshot() {
        let mut pool = LocalPool::new();
        let feed = FakeFeed::default();
        let store = store_with(vec![ReadingListEntry::new("a", "A", false, Some(1.0))]);
        let (actions, on_loaded) = recorder();

        let _subscription = reload_on_change(&feed, store.clone(), spawner(&pool), on_loaded);
        assert_eq!(store.queries.get(), 0);

        feed.fire();
        pool.run_until_stalled();
        store.entries.borrow_mut().push(ReadingListEntry::new("b", "B", true, Some(2.0)));
        feed.fire();
        pool.run_until_stalled();

        assert_eq!(store.queries.get(), 2);
        let actions = actions.borrow();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1], ViewAction::Loaded(store.entries.borrow().clone()));
    }

    #[test]
    fn test_reload_failure_is_reported() {
        let mut pool = LocalPool::new();
        let feed = FakeFeed::default();
        let store = store_with(vec![]);
        store.fail_query.set(true);
        let (actions, on_loaded) = recorder();

        let _subscription = reload_on_change(&feed, store, spawner(&pool), on_loaded);
        feed.fire();
        pool.run_until_stalled();

        assert_eq!(
            *actions.borrow(),
            vec![ViewAction::LoadFailed("Failed to load reading list: permission denied".to_string())]
        );
    }

    #[test]
    fn test_dropped_subscription_stops_reloads() {
        let mut pool = LocalPool::new();
        let feed = FakeFeed::default();
        let store = store_with(vec![]);
        let (actions, on_loaded) = recorder();

        let subscription = reload_on_change(&feed, store.clone(), spawner(&pool), on_loaded);
        assert_eq!(feed.live(), 1);

        drop(subscription);
        feed.fire();
        pool.run_until_stalled();

        assert_eq!(feed.live(), 0);
        assert_eq!(store.queries.get(), 0);
        assert!(actions.borrow().is_empty());
    }

    #[test]
    fn test_badge_recomputed_on_every_event() {
        let mut pool = LocalPool::new();
        let feed = FakeFeed::default();
        let store = store_with(vec![ReadingListEntry::new("a", "A", false, None)]);
        let host = Rc::new(FakeHost::default());

        let _subscription = refresh_badge_on_change(&feed, store.clone(), host.clone(), spawner(&pool));

        feed.fire();
        pool.run_until_stalled();
        store.entries.borrow_mut().push(ReadingListEntry::new("b", "B", false, None));
        feed.fire();
        pool.run_until_stalled();
        store.entries.borrow_mut().clear();
        feed.fire();
        pool.run_until_stalled();

        assert_eq!(*host.badges.borrow(), vec!["1", "2", ""]);
    }

    #[test]
    fn test_badge_left_alone_when_query_fails() {
        let mut pool = LocalPool::new();
        let feed = FakeFeed::default();
        let store = store_with(vec![]);
        store.fail_query.set(true);
        let host = Rc::new(FakeHost::default());

        let _subscription = refresh_badge_on_change(&feed, store.clone(), host.clone(), spawner(&pool));
        feed.fire();
        pool.run_until_stalled();

        assert_eq!(store.queries.get(), 1);
        assert!(host.badges.borrow().is_empty());
    }
}
