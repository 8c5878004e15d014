/// Snack Cards - Chrome Extension for the Reading List
/// Built with Rust + WASM + Yew

pub mod actions;
pub mod background;
pub mod chrome;
pub mod config;
pub mod error;
pub mod format;
pub mod host;
pub mod operations;
pub mod reading_list;
pub mod store;
pub mod ui;
pub mod video;
pub mod view_state;
pub mod watch;

use config::{Surface, SurfaceConfig, SurfaceOverrides};
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the pure helpers for JavaScript access
#[wasm_bindgen]
pub fn classify_url(url: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&video::classify(url))?)
}

#[wasm_bindgen]
pub fn domain_of(url: &str) -> String {
    format::domain_of(url)
}

#[wasm_bindgen]
pub fn favicon_url(url: &str) -> String {
    format::favicon_url(url)
}

#[wasm_bindgen]
pub fn relative_age(timestamp: Option<f64>) -> String {
    format::relative_age(timestamp)
}

// Start the Yew app on the new tab page
#[wasm_bindgen]
pub fn start_newtab(overrides: JsValue) -> Result<(), JsValue> {
    mount_surface(Surface::NewTab, overrides)
}

// Start the Yew app on the dedicated reading list page
#[wasm_bindgen]
pub fn start_reading_list(overrides: JsValue) -> Result<(), JsValue> {
    mount_surface(Surface::ReadingList, overrides)
}

// Start the Yew app in the side panel
#[wasm_bindgen]
pub fn start_sidepanel(overrides: JsValue) -> Result<(), JsValue> {
    mount_surface(Surface::SidePanel, overrides)
}

// Badge + action click behaviour, from the service worker
#[wasm_bindgen]
pub fn start_background() {
    background::start();
}

fn mount_surface(surface: Surface, overrides: JsValue) -> Result<(), JsValue> {
    let overrides: SurfaceOverrides = if overrides.is_undefined() || overrides.is_null() {
        SurfaceOverrides::default()
    } else {
        serde_wasm_bindgen::from_value(overrides)?
    };

    let config = SurfaceConfig::for_surface(surface).with_overrides(overrides);
    log::info!("Mounting {:?} surface", config.surface);

    yew::Renderer::<ui::app::ReadingListApp>::with_props(ui::app::ReadingListAppProps { config }).render();
    Ok(())
}
