/// Per-surface configuration and shared constants
use crate::host::OpenTarget;
use crate::reading_list::ListFilter;
use serde::{Deserialize, Serialize};

/// Background color of the action badge
pub const BADGE_COLOR: &str = "#57534e";

/// The three places the reading list is rendered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    NewTab,
    ReadingList,
    SidePanel,
}

impl Surface {
    pub fn slug(&self) -> &'static str {
        match self {
            Surface::NewTab => "new-tab",
            Surface::ReadingList => "reading-list",
            Surface::SidePanel => "side-panel",
        }
    }
}

/// Presentation switches for one surface. Data rules are identical everywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceConfig {
    pub surface: Surface,
    pub title: String,
    pub subtitle: Option<String>,
    pub default_filter: ListFilter,
    pub open_target: OpenTarget,
    pub show_filter_tabs: bool,
    pub show_search: bool,
    pub show_progress: bool,
    pub embed_videos: bool,
}

/// Host-supplied tweaks; anything left out keeps the surface default
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurfaceOverrides {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub default_filter: Option<ListFilter>,
    pub open_target: Option<OpenTarget>,
    pub show_filter_tabs: Option<bool>,
    pub show_search: Option<bool>,
    pub show_progress: Option<bool>,
    pub embed_videos: Option<bool>,
}

impl SurfaceConfig {
    pub fn for_surface(surface: Surface) -> Self {
        match surface {
            Surface::NewTab => SurfaceConfig {
                surface,
                title: "Reading List".to_string(),
                subtitle: Some("Your curated articles and saved reads".to_string()),
                default_filter: ListFilter::Unread,
                open_target: OpenTarget::NewTab,
                show_filter_tabs: true,
                show_search: false,
                show_progress: false,
                embed_videos: false,
            },
            Surface::ReadingList => SurfaceConfig {
                surface,
                title: "Reading List".to_string(),
                subtitle: Some("Your curated articles and saved reads".to_string()),
                default_filter: ListFilter::Unread,
                open_target: OpenTarget::NewTab,
                show_filter_tabs: true,
                show_search: false,
                show_progress: true,
                embed_videos: true,
            },
            Surface::SidePanel => SurfaceConfig {
                surface,
                title: "Snack Cards".to_string(),
                subtitle: None,
                default_filter: ListFilter::All,
                open_target: OpenTarget::CurrentTab,
                show_filter_tabs: false,
                show_search: true,
                show_progress: false,
                embed_videos: false,
            },
        }
    }

    pub fn with_overrides(mut self, overrides: SurfaceOverrides) -> Self {
        if let Some(title) = overrides.title {
            self.title = title;
        }
        if overrides.subtitle.is_some() {
            self.subtitle = overrides.subtitle;
        }
        self.default_filter = overrides.default_filter.unwrap_or(self.default_filter);
        self.open_target = overrides.open_target.unwrap_or(self.open_target);
        self.show_filter_tabs = overrides.show_filter_tabs.unwrap_or(self.show_filter_tabs);
        self.show_search = overrides.show_search.unwrap_or(self.show_search);
        self.show_progress = overrides.show_progress.unwrap_or(self.show_progress);
        self.embed_videos = overrides.embed_videos.unwrap_or(self.embed_videos);
        self
    }
}
