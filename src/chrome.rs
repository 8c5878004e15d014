/// Chrome-backed implementations of the store and host ports

use crate::error::StoreError;
use crate::host::{HostShell, OpenTarget};
use crate::reading_list::{Badge, ReadingListEntry};
use crate::store::{ChangeFeed, ReadingListStore};
use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryReadingList() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateReadingListEntry(url: &str, has_been_read: bool) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeReadingListEntry(url: &str) -> Result<(), JsValue>;

    fn subscribeReadingList(callback: &Closure<dyn FnMut()>) -> js_sys::Function;

    #[wasm_bindgen(catch)]
    async fn setBadge(text: &str, color: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn openInNewTab(url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn openInCurrentTab(url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn setPanelBehavior(open_panel_on_action_click: bool) -> Result<(), JsValue>;
}

/// Readable text for a rejected promise
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    match serde_wasm_bindgen::from_value::<serde_json::Value>(value.clone()) {
        Ok(payload) => rejection_text(&payload),
        Err(_) => format!("{:?}", value),
    }
}

/// Plain strings as-is, anything else as compact JSON
fn rejection_text(payload: &serde_json::Value) -> String {
    match payload {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// `chrome.readingList`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChromeReadingList;

#[async_trait(?Send)]
impl ReadingListStore for ChromeReadingList {
    async fn query(&self) -> Result<Vec<ReadingListEntry>, StoreError> {
        let entries_js = queryReadingList()
            .await
            .map_err(|e| StoreError::Load(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(entries_js).map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn update_entry(&self, url: &str, has_been_read: bool) -> Result<(), StoreError> {
        updateReadingListEntry(url, has_been_read)
            .await
            .map_err(|e| StoreError::mutation(url, js_error_message(&e)))
    }

    async fn remove_entry(&self, url: &str) -> Result<(), StoreError> {
        removeReadingListEntry(url)
            .await
            .map_err(|e| StoreError::mutation(url, js_error_message(&e)))
    }
}

impl ChangeFeed for ChromeReadingList {
    type Subscription = ChangeSubscription;

    fn subscribe(&self, on_change: Box<dyn FnMut()>) -> ChangeSubscription {
        ChangeSubscription::new(on_change)
    }
}

/// `chrome.action`, `chrome.tabs` and `chrome.sidePanel`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChromeHost;

#[async_trait(?Send)]
impl HostShell for ChromeHost {
    async fn set_badge(&self, badge: &Badge) -> Result<(), StoreError> {
        setBadge(&badge.text, badge.color)
            .await
            .map_err(|e| StoreError::Host(js_error_message(&e)))
    }

    async fn open_url(&self, url: &str, target: OpenTarget) -> Result<(), StoreError> {
        let opened = match target {
            OpenTarget::NewTab => openInNewTab(url).await,
            OpenTarget::CurrentTab => openInCurrentTab(url).await,
        };
        opened.map_err(|e| StoreError::Host(js_error_message(&e)))
    }

    async fn set_panel_behavior(&self, open_on_action_click: bool) -> Result<(), StoreError> {
        setPanelBehavior(open_on_action_click)
            .await
            .map_err(|e| StoreError::Host(js_error_message(&e)))
    }
}

/// Live listener on reading list added/removed/updated events.
/// Dropping it detaches the listener.
pub struct ChangeSubscription {
    _callback: Closure<dyn FnMut()>,
    unsubscribe: js_sys::Function,
}

impl ChangeSubscription {
    pub fn new(on_change: impl FnMut() + 'static) -> Self {
        let callback = Closure::wrap(Box::new(on_change) as Box<dyn FnMut()>);
        let unsubscribe = subscribeReadingList(&callback);
        ChangeSubscription {
            _callback: callback,
            unsubscribe,
        }
    }

    /// Keep listening for the lifetime of the page
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

impl Drop for ChangeSubscription {
    fn drop(&mut self) {
        if let Err(e) = self.unsubscribe.call0(&JsValue::NULL) {
            log::warn!("Failed to detach reading list listener: {}", js_error_message(&e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejection_text() {
        assert_eq!(rejection_text(&json!("quota exceeded")), "quota exceeded");
        assert_eq!(rejection_text(&json!({ "code": 5 })), r#"{"code":5}"#);
        assert_eq!(rejection_text(&json!(null)), "null");
    }
}
