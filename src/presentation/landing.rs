use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use super::navigate;
use crate::application::{StateSink, ViewController, load_message};
use crate::config::AppConfig;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Ticker;
use crate::infrastructure::http::StockApiClient;
use crate::routing::AppRoute;
use crate::view_state::{LandingState, LoadState};

/// 🏠 Home page: server greeting plus a ticker lookup
#[component]
pub fn Landing() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let state = create_rw_signal(LandingState::Loading);
    let controller = ViewController::new("Landing", Rc::new(state) as Rc<dyn StateSink<String>>);

    spawn_local(load_message(&controller, StockApiClient::new(config)));
    on_cleanup(move || controller.close());

    view! {
        <div class="landing">
            <div class="message">
                {move || match state.get() {
                    LoadState::Loading => "Loading...".to_string(),
                    LoadState::Error(message) | LoadState::Ready(message) => message,
                }}
            </div>
            <TickerForm />
        </div>
    }
}

#[component]
fn TickerForm() -> impl IntoView {
    let input = create_rw_signal(String::new());
    let invalid = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match Ticker::new(&input.get_untracked()) {
            Ok(ticker) => {
                invalid.set(false);
                navigate(&AppRoute::Stock(ticker).path());
            }
            Err(err) => {
                crate::log_debug!(LogComponent::Presentation("Landing"), "rejected ticker: {}", err);
                invalid.set(true);
            }
        }
    };

    view! {
        <form class="ticker-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Ticker, e.g. AAPL"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button type="submit">"View"</button>
            <Show when=move || invalid.get()>
                <span class="form-error">"Enter a ticker symbol"</span>
            </Show>
        </form>
    }
}
