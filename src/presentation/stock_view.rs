use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use super::StockChart;
use super::router::HomeLink;
use crate::application::{StateSink, ViewController, load_series};
use crate::config::AppConfig;
use crate::domain::market_data::{StockData, Ticker};
use crate::infrastructure::http::StockApiClient;
use crate::view_state::{LoadState, ViewState};

/// 📊 Per-ticker page: reads the series, then shows chart and raw data
#[component]
pub fn StockView(#[prop(into)] ticker: Signal<Option<Ticker>>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = StockApiClient::new(config);

    let state = create_rw_signal(ViewState::Loading);
    let controller = ViewController::new("StockView", Rc::new(state) as Rc<dyn StateSink<StockData>>);

    {
        let controller = controller.clone();
        create_effect(move |_| {
            if let Some(ticker) = ticker.get() {
                spawn_local(load_series(&controller, client.clone(), ticker));
            }
        });
    }
    on_cleanup(move || controller.close());

    let series = Signal::derive(move || state.with(|s| s.ready().map(|d| d.series.clone()).unwrap_or_default()));
    let heading = move || ticker.get().map(|t| t.value().to_string()).unwrap_or_default();

    view! {
        <div class="stock-view">
            <HomeLink />
            {move || match state.get() {
                LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_view(),
                LoadState::Error(message) => view! { <div class="error">{message}</div> }.into_view(),
                LoadState::Ready(data) => view! {
                    <div>
                        <h1>"Stock Data for " {heading}</h1>
                        <StockChart series=series />
                        <pre class="raw-data">{data.to_pretty_json()}</pre>
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}
