/// Entry cards: plain articles and recognized videos

use crate::format::{domain_of, favicon_url, relative_age};
use crate::reading_list::ReadingListEntry;
use crate::video::{thumbnail_url, watch_url, VideoReference};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub entry: ReadingListEntry,
    pub on_open: Callback<ReadingListEntry>,
    /// (url, read)
    pub on_set_read: Callback<(String, bool)>,
    pub on_remove: Callback<String>,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let favicon_failed = use_state(|| false);
    let entry = &props.entry;

    let on_favicon_error = {
        let favicon_failed = favicon_failed.clone();
        Callback::from(move |_: Event| favicon_failed.set(true))
    };

    let title_class = if entry.has_been_read { "entry-title entry-title-read" } else { "entry-title" };

    html! {
        <li class="entry-card" onclick={open_callback(entry, &props.on_open)}>
            <div class="entry-favicon">
                if !*favicon_failed {
                    <img src={favicon_url(&entry.url)} alt="" onerror={on_favicon_error} />
                }
            </div>

            <div class="entry-content">
                <h3 class={title_class}>{&entry.title}</h3>
                <div class="entry-meta">
                    <span class="domain-pill">{domain_of(&entry.url)}</span>
                    <span class="entry-age">{relative_age(entry.creation_time)}</span>
                    if entry.has_been_read {
                        <span class="read-pill">{"✓ Read"}</span>
                    }
                </div>
            </div>

            <EntryActions
                url={entry.url.clone()}
                read={entry.has_been_read}
                on_set_read={props.on_set_read.clone()}
                on_remove={props.on_remove.clone()}
            />
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub entry: ReadingListEntry,
    pub video: VideoReference,
    /// Inline player instead of a thumbnail
    #[prop_or(false)]
    pub embed: bool,
    pub on_open: Callback<ReadingListEntry>,
    pub on_set_read: Callback<(String, bool)>,
    pub on_remove: Callback<String>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let embed_failed = use_state(|| false);
    let entry = &props.entry;
    let video = &props.video;
    let thumbnail = thumbnail_url(video);
    let platform = video.platform.map(|p| p.as_str()).unwrap_or("video");
    let service = video.platform.map(|p| p.display_name()).unwrap_or("a new tab");

    let on_embed_error = {
        let embed_failed = embed_failed.clone();
        Callback::from(move |_: Event| embed_failed.set(true))
    };

    html! {
        <li class={classes!("entry-card", "video-card", platform)}>
            if props.embed && *embed_failed {
                <div class="video-embed video-embed-failed">
                    <div class="video-error">{"⚠️ Video failed to load"}</div>
                    <a href={watch_url(video, &entry.url)} target="_blank" rel="noopener noreferrer">
                        {format!("Open in {}", service)}
                    </a>
                </div>
            } else if props.embed {
                <div class="video-embed">
                    <iframe
                        src={video.embed_url.clone()}
                        title={entry.title.clone()}
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; picture-in-picture; fullscreen"
                        onerror={on_embed_error}
                    />
                </div>
            } else {
                <div class="video-thumbnail" onclick={open_callback(entry, &props.on_open)}>
                    if thumbnail.is_empty() {
                        <div class="video-placeholder">{format!("▶ {}", platform)}</div>
                    } else {
                        <img src={thumbnail} alt={entry.title.clone()} />
                    }
                </div>
            }

            <div class="entry-content" onclick={open_callback(entry, &props.on_open)}>
                <h3 class="entry-title">{&entry.title}</h3>
                <div class="entry-meta">
                    <span class="domain-pill">{domain_of(&entry.url)}</span>
                    <span class="entry-age">{relative_age(entry.creation_time)}</span>
                </div>
            </div>

            <EntryActions
                url={entry.url.clone()}
                read={entry.has_been_read}
                on_set_read={props.on_set_read.clone()}
                on_remove={props.on_remove.clone()}
            />
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct EntryActionsProps {
    url: String,
    read: bool,
    on_set_read: Callback<(String, bool)>,
    on_remove: Callback<String>,
}

#[function_component(EntryActions)]
fn entry_actions(props: &EntryActionsProps) -> Html {
    // Buttons sit inside the clickable card, so clicks must not bubble up to "open"
    let on_toggle = {
        let url = props.url.clone();
        let read = props.read;
        let on_set_read = props.on_set_read.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_set_read.emit((url.clone(), !read));
        })
    };

    let on_remove = {
        let url = props.url.clone();
        let on_remove = props.on_remove.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_remove.emit(url.clone());
        })
    };

    html! {
        <div class="entry-actions">
            <Button onclick={on_toggle} variant={ButtonVariant::Secondary} size={ButtonSize::Small}>
                {if props.read { "Mark unread" } else { "Mark read" }}
            </Button>
            <Button onclick={on_remove} variant={ButtonVariant::Danger} size={ButtonSize::Small}>
                {"Remove"}
            </Button>
        </div>
    }
}

fn open_callback(entry: &ReadingListEntry, on_open: &Callback<ReadingListEntry>) -> Callback<MouseEvent> {
    let entry = entry.clone();
    on_open.reform(move |_: MouseEvent| entry.clone())
}
