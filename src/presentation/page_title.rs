use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::domain::surface::TitleUpdater;
use crate::infrastructure::browser::DocumentTitle;

/// Keeps `document.title` at `"{prefix} | {title}"`. Renders nothing.
#[component]
pub fn PageTitle(#[prop(into)] title: Signal<Option<String>>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let updater = Rc::new(RefCell::new(TitleUpdater::new(DocumentTitle, config.title_prefix)));

    create_effect(move |_| {
        let title = title.get();
        updater.borrow_mut().update(title.as_deref());
    });
}
