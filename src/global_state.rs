use leptos::*;
use once_cell::sync::OnceCell;

use crate::infrastructure::browser::current_pathname;

/// App-wide signals shared by the router and every view
pub struct Globals {
    pub current_path: RwSignal<String>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals { current_path: create_rw_signal(current_pathname()) })
}

crate::global_signals! {
    pub current_path => current_path: String,
}
