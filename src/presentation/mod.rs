pub mod landing;
pub mod page_title;
pub mod router;
pub mod stock_chart;
pub mod stock_view;

use leptos::*;

use crate::application::StateSink;
use crate::view_state::LoadState;

pub use landing::Landing;
pub use page_title::PageTitle;
pub use router::{Router, navigate};
pub use stock_chart::StockChart;
pub use stock_view::StockView;

/// View state lands in a signal; a disposed signal (unmounted view) swallows it.
impl<T: 'static> StateSink<T> for RwSignal<LoadState<T>> {
    fn publish(&self, state: LoadState<T>) {
        let _ = self.try_set(state);
    }
}
