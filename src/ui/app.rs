/// Reading list app shared by the new tab page, the reading list page and
/// the side panel. Surfaces only differ by [`SurfaceConfig`].

use crate::actions;
use crate::chrome::{ChromeHost, ChromeReadingList};
use crate::config::SurfaceConfig;
use crate::reading_list::{ListFilter, ReadingListEntry};
use crate::ui::cards::{ArticleCard, VideoCard};
use crate::ui::components::{EmptyState, FilterTabs, LoadError, SearchBox, SurfaceHeader};
use crate::video::classify;
use crate::view_state::{LoadStatus, ViewAction, ViewState};
use crate::watch::{reload_on_change, LocalTask};
use patternfly_yew::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReadingListAppProps {
    pub config: SurfaceConfig,
}

#[function_component(ReadingListApp)]
pub fn reading_list_app(props: &ReadingListAppProps) -> Html {
    let config = &props.config;
    let default_filter = config.default_filter;
    let state = use_reducer(move || ViewState::new(default_filter));

    // Full snapshot reload; `true` shows the spinner while it runs
    let reload = {
        let state = state.clone();
        Callback::from(move |show_spinner: bool| {
            if show_spinner {
                state.dispatch(ViewAction::LoadStarted);
            }
            let state = state.clone();
            spawn_local(async move {
                state.dispatch(actions::load(&ChromeReadingList).await);
            });
        })
    };

    // Load on mount, then reload on every store change until unmount
    {
        let reload = reload.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            reload.emit(true);
            let subscription = reload_on_change(
                &ChromeReadingList,
                Rc::new(ChromeReadingList),
                spawn_local::<LocalTask>,
                move |action| state.dispatch(action),
            );
            move || drop(subscription)
        });
    }

    let on_retry = reload.reform(|_: MouseEvent| true);

    let on_open = {
        let state = state.clone();
        let target = config.open_target;
        Callback::from(move |entry: ReadingListEntry| {
            let state = state.clone();
            spawn_local(async move {
                match actions::open_and_mark_read(&ChromeReadingList, &ChromeHost, &entry, target).await {
                    Ok(Some(action)) => state.dispatch(action),
                    // Already read, or the failure was logged
                    Ok(None) | Err(_) => {}
                }
            });
        })
    };

    let on_set_read = {
        let state = state.clone();
        Callback::from(move |(url, read): (String, bool)| {
            let state = state.clone();
            spawn_local(async move {
                if let Ok(action) = actions::set_read_state(&ChromeReadingList, &url, read).await {
                    state.dispatch(action);
                }
            });
        })
    };

    let on_remove = {
        let state = state.clone();
        Callback::from(move |url: String| {
            let state = state.clone();
            spawn_local(async move {
                if let Ok(action) = actions::remove(&ChromeReadingList, &url).await {
                    state.dispatch(action);
                }
            });
        })
    };

    let on_filter = {
        let state = state.clone();
        Callback::from(move |filter: ListFilter| state.dispatch(ViewAction::FilterChanged(filter)))
    };

    let on_search = {
        let state = state.clone();
        Callback::from(move |query: String| state.dispatch(ViewAction::SearchChanged(query)))
    };

    let surface_class = classes!("reading-list", config.surface.slug());

    match &state.load_status {
        LoadStatus::Loading => html! {
            <div class={surface_class}>
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{"Loading reading list..."}</p>
                </div>
            </div>
        },
        LoadStatus::Error(message) => html! {
            <div class={surface_class}>
                <LoadError message={message.clone()} on_retry={on_retry} />
            </div>
        },
        LoadStatus::Ready => {
            let counts = state.counts();
            let visible = state.visible_entries();

            html! {
                <div class={surface_class}>
                    <SurfaceHeader
                        title={config.title.clone()}
                        subtitle={config.subtitle.clone()}
                        counts={counts}
                        shown={visible.len()}
                        show_progress={config.show_progress}
                    />

                    if config.show_filter_tabs {
                        <FilterTabs active={state.filter} counts={counts} on_change={on_filter} />
                    }

                    if config.show_search && counts.total > 0 {
                        <SearchBox query={state.search_query.clone()} on_change={on_search} />
                    }

                    if let Some(message) = state.empty_message() {
                        <EmptyState message={message} />
                    } else {
                        <ul class="entry-list">
                            {for visible.into_iter().map(|entry| {
                                let key = entry.url.clone();
                                let video = classify(&entry.url);
                                if video.is_video() {
                                    html! {
                                        <VideoCard
                                            key={key}
                                            entry={entry}
                                            video={video}
                                            embed={config.embed_videos}
                                            on_open={on_open.clone()}
                                            on_set_read={on_set_read.clone()}
                                            on_remove={on_remove.clone()}
                                        />
                                    }
                                } else {
                                    html! {
                                        <ArticleCard
                                            key={key}
                                            entry={entry}
                                            on_open={on_open.clone()}
                                            on_set_read={on_set_read.clone()}
                                            on_remove={on_remove.clone()}
                                        />
                                    }
                                }
                            })}
                        </ul>
                    }
                </div>
            }
        }
    }
}
