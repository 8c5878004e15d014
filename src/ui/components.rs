/// Reusable UI components

use crate::format::progress_percent;
use crate::reading_list::{ListCounts, ListFilter};
use crate::view_state::EmptyMessage;
use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SurfaceHeaderProps {
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
    pub counts: ListCounts,
    /// Entries currently on screen
    pub shown: usize,
    #[prop_or(false)]
    pub show_progress: bool,
}

#[function_component(SurfaceHeader)]
pub fn surface_header(props: &SurfaceHeaderProps) -> Html {
    let counts = props.counts;
    let progress = progress_percent(&counts);

    html! {
        <header class="surface-header">
            <div>
                <h1 class="surface-title">{&props.title}</h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="surface-subtitle">{subtitle}</p>
                }
            </div>

            if props.show_progress {
                <div class="progress-summary">
                    <div class="progress-label">{format!("Progress: {}%", progress)}</div>
                    <Progress value={progress as f64} />
                    <span class="progress-fraction">{format!("{}/{}", counts.read, counts.total)}</span>
                </div>
            } else if counts.total > 0 {
                <span class="count-pill">{props.shown}</span>
            }
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterTabsProps {
    pub active: ListFilter,
    pub counts: ListCounts,
    pub on_change: Callback<ListFilter>,
}

#[function_component(FilterTabs)]
pub fn filter_tabs(props: &FilterTabsProps) -> Html {
    html! {
        <div class="pf-v5-c-tabs tabs-nav">
            <ul class="pf-v5-c-tabs__list">
                {for ListFilter::TABS.iter().map(|filter| {
                    let filter = *filter;
                    let class = if props.active == filter {
                        "pf-v5-c-tabs__item pf-m-current"
                    } else {
                        "pf-v5-c-tabs__item"
                    };

                    html! {
                        <li key={filter.label()} class={class}>
                            <button
                                class="pf-v5-c-tabs__link"
                                onclick={props.on_change.reform(move |_: MouseEvent| filter)}
                            >
                                <span class="pf-v5-c-tabs__item-text">{filter.label()}</span>
                                <span class="filter-count">{props.counts.for_filter(filter)}</span>
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub query: String,
    pub on_change: Callback<String>,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    let on_clear = props.on_change.reform(|_: MouseEvent| String::new());

    html! {
        <div class="search-container">
            <input
                type="text"
                placeholder="Search by title..."
                value={props.query.clone()}
                oninput={on_input}
                class="search-input"
            />
            if !props.query.is_empty() {
                <button class="search-clear" onclick={on_clear}>{"✗"}</button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: EmptyMessage,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            <div class="empty-state-icon">{"📚"}</div>
            <h3 class="empty-state-title">{props.message.title}</h3>
            <p class="empty-state-hint">{props.message.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadErrorProps {
    pub message: String,
    pub on_retry: Callback<MouseEvent>,
}

#[function_component(LoadError)]
pub fn load_error(props: &LoadErrorProps) -> Html {
    html! {
        <div class="message-top-margin">
            <Alert r#type={AlertType::Danger} title={"Failed to load reading list"} inline={true}>
                {props.message.clone()}
            </Alert>
            <Button onclick={props.on_retry.clone()} variant={ButtonVariant::Primary}>
                {"Try again"}
            </Button>
        </div>
    }
}
