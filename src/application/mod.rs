pub mod fetch_slot;
pub mod view_controller;

pub use fetch_slot::{FetchSlot, RequestToken};
pub use view_controller::{StateSink, ViewController, load_message, load_series};
