use wasm_bindgen::JsValue;

use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::surface::TitleSurface;

/// `document.title` of the current window
#[derive(Clone, Copy, Default)]
pub struct DocumentTitle;

impl TitleSurface for DocumentTitle {
    fn set_title(&self, title: &str) {
        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document.set_title(title),
            None => get_logger().warn(
                LogComponent::Infrastructure("Browser"),
                "Document not available, title not set"
            ),
        }
    }
}

/// `window.location.pathname`, `/` outside a browser
pub fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a history entry without reloading
pub fn push_history(path: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Window not available"))?;
    window.history()?.push_state_with_url(&JsValue::NULL, "", Some(path))
}
