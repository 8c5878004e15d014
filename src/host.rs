/// Port for the host browser chrome: badge, tabs, action behaviour
use crate::error::StoreError;
use crate::reading_list::Badge;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Where an opened entry should land
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OpenTarget {
    NewTab,
    CurrentTab,
}

#[async_trait(?Send)]
pub trait HostShell {
    async fn set_badge(&self, badge: &Badge) -> Result<(), StoreError>;

    async fn open_url(&self, url: &str, target: OpenTarget) -> Result<(), StoreError>;

    /// `true` opens the side panel on action click instead of a page
    async fn set_panel_behavior(&self, open_on_action_click: bool) -> Result<(), StoreError>;
}
