use leptos::*;

use crate::config::AppConfig;
use crate::global_state::current_path;
use crate::presentation::{PageTitle, Router};
use crate::routing::AppRoute;

/// 🦀 Root component: config context, document title and the route outlet
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::from_environment());

    // globals are created here so they are owned by the root, not by a memo
    let path = current_path();
    let route = create_memo(move |_| AppRoute::resolve(&path.get()));
    let title = Signal::derive(move || route.with(AppRoute::title));

    view! {
        <style>
            {r#"
            .stonks-app {
                font-family: Roboto, -apple-system, BlinkMacSystemFont, sans-serif;
                padding: 20px;
                color: #222;
            }

            .home-link {
                display: inline-block;
                margin-bottom: 12px;
                color: #2a5298;
                text-decoration: none;
            }

            .ticker-form {
                display: flex;
                gap: 8px;
                margin-top: 16px;
            }

            .form-error, .error {
                color: #c0392b;
            }

            .stock-chart {
                position: relative;
                display: inline-block;
            }

            .stock-chart .candlestick {
                cursor: crosshair;
            }

            .tooltip {
                position: absolute;
                width: 160px;
                padding: 6px 8px;
                background: rgba(255, 255, 255, 0.95);
                border: 1px solid #808080;
                border-radius: 4px;
                font-size: 12px;
                pointer-events: none;
                transition: opacity 0.2s;
            }

            .tooltip-key {
                font-weight: 600;
            }

            .raw-data {
                max-height: 400px;
                overflow: auto;
                background: #f6f8fa;
                padding: 12px;
            }
            "#}
        </style>
        <PageTitle title=title />
        <div class="stonks-app">
            <Router route=route />
        </div>
    }
}
