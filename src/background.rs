/// Background service worker: action badge and click behaviour

use crate::chrome::{ChromeHost, ChromeReadingList};
use crate::host::HostShell;
use crate::watch::{refresh_badge_on_change, update_badge, LocalTask};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Badge is recomputed from scratch on startup and on every store event
pub fn start() {
    spawn_local(async {
        if let Err(e) = ChromeHost.set_panel_behavior(true).await {
            log::error!("Failed to set side panel behavior: {}", e);
        }
    });

    spawn_local(async { update_badge(&ChromeReadingList, &ChromeHost).await });

    refresh_badge_on_change(
        &ChromeReadingList,
        Rc::new(ChromeReadingList),
        Rc::new(ChromeHost),
        spawn_local::<LocalTask>,
    )
    .keep_alive();
}
