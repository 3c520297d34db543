use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::Abortable;

use super::fetch_slot::FetchSlot;
use crate::domain::{
    errors::NetworkResult,
    logging::LogComponent,
    market_data::{MessageSource, SeriesSource, StockData, Ticker},
};
use crate::view_state::LoadState;

/// Receives view state transitions. Leptos signals in the browser, recorders in tests.
pub trait StateSink<T> {
    fn publish(&self, state: LoadState<T>);
}

/// Drives one view's read lifecycle through a [`FetchSlot`].
pub struct ViewController<T> {
    slot: Rc<RefCell<FetchSlot>>,
    sink: Rc<dyn StateSink<T>>,
    name: &'static str,
}

impl<T> Clone for ViewController<T> {
    fn clone(&self) -> Self {
        Self { slot: Rc::clone(&self.slot), sink: Rc::clone(&self.sink), name: self.name }
    }
}

impl<T: 'static> ViewController<T> {
    pub fn new(name: &'static str, sink: Rc<dyn StateSink<T>>) -> Self {
        Self { slot: Rc::new(RefCell::new(FetchSlot::new())), sink, name }
    }

    /// Publishes `Loading` right away and returns the future that settles the read.
    /// The caller spawns it.
    pub fn start<F>(&self, read: F) -> impl Future<Output = ()> + 'static + use<T, F>
    where
        F: Future<Output = NetworkResult<T>> + 'static,
    {
        let (token, registration) = self.slot.borrow_mut().begin();
        self.sink.publish(LoadState::Loading);

        let slot = Rc::clone(&self.slot);
        let sink = Rc::clone(&self.sink);
        let name = self.name;
        async move {
            let Ok(result) = Abortable::new(read, registration).await else {
                crate::log_debug!(
                    LogComponent::Application(name),
                    "read #{} aborted",
                    token.generation()
                );
                return;
            };

            let applied = slot.borrow_mut().finish(token);
            if applied {
                sink.publish(LoadState::from_result(result));
            } else {
                crate::log_warn!(
                    LogComponent::Application(name),
                    "dropping stale result of read #{}",
                    token.generation()
                );
            }
        }
    }

    /// Stop accepting results, e.g. on unmount.
    pub fn close(&self) {
        self.slot.borrow_mut().close();
    }
}

/// Series read for the per-ticker view
pub fn load_series<S>(
    controller: &ViewController<StockData>,
    source: S,
    ticker: Ticker,
) -> impl Future<Output = ()> + 'static + use<S>
where
    S: SeriesSource + 'static,
{
    crate::log_info!(LogComponent::Application("StockView"), "📡 loading {}", ticker);
    controller.start(async move { source.fetch_series(&ticker).await })
}

/// Greeting read for the landing view
pub fn load_message<S>(
    controller: &ViewController<String>,
    source: S,
) -> impl Future<Output = ()> + 'static + use<S>
where
    S: MessageSource + 'static,
{
    controller.start(async move { source.fetch_message().await })
}
