#![cfg(target_arch = "wasm32")]
use stonks_chart_wasm::domain::surface::{TITLE_PREFIX, TitleUpdater};
use stonks_chart_wasm::infrastructure::browser::DocumentTitle;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn writes_document_title() {
    let mut updater = TitleUpdater::new(DocumentTitle, TITLE_PREFIX);
    assert!(updater.update(Some("AAPL")));
    let document = web_sys::window().unwrap().document().unwrap();
    assert_eq!(document.title(), "Stonks | AAPL");
    assert!(!updater.update(Some("AAPL")));
}
