use leptos::*;

use super::{Landing, StockView};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Ticker;
use crate::global_state::current_path;
use crate::infrastructure::browser::{current_pathname, push_history};
use crate::routing::AppRoute;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Landing,
    Stock,
    NotFound,
}

impl From<&AppRoute> for Page {
    fn from(route: &AppRoute) -> Self {
        match route {
            AppRoute::Landing => Page::Landing,
            AppRoute::Stock(_) => Page::Stock,
            AppRoute::NotFound => Page::NotFound,
        }
    }
}

/// Client-side navigation: push a history entry and re-route.
pub fn navigate(path: &str) {
    if let Err(err) = push_history(path) {
        crate::log_warn!(LogComponent::Presentation("Router"), "history push failed: {:?}", err);
    }
    current_path().set(path.to_string());
}

/// Outlet for the current location.
///
/// Switching between two tickers keeps the same [`StockView`] mounted; only the
/// ticker signal it reads changes.
#[component]
pub fn Router(route: Memo<AppRoute>) -> impl IntoView {
    let popstate = window_event_listener(ev::popstate, move |_| current_path().set(current_pathname()));
    on_cleanup(move || popstate.remove());

    let page = create_memo(move |_| route.with(|r| Page::from(r)));
    let ticker = create_memo(move |_| match route.get() {
        AppRoute::Stock(ticker) => Some(ticker),
        _ => None::<Ticker>,
    });

    move || match page.get() {
        Page::Landing => view! { <Landing /> }.into_view(),
        Page::Stock => view! { <StockView ticker=ticker /> }.into_view(),
        Page::NotFound => view! { <NotFound /> }.into_view(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Not Found"</h1>
            <HomeLink />
        </div>
    }
}

#[component]
pub fn HomeLink() -> impl IntoView {
    view! {
        <a
            href="/"
            class="home-link"
            on:click=move |ev| {
                ev.prevent_default();
                navigate(&AppRoute::Landing.path());
            }
        >
            "← Home"
        </a>
    }
}
