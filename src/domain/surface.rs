/// Default page title and the prefix of every other one
pub const TITLE_PREFIX: &str = "Stonks";

/// Where the document title lives. Browser code writes `document.title`,
/// tests record the calls.
pub trait TitleSurface {
    fn set_title(&self, title: &str);
}

/// `"Stonks | {title}"`, or `"Stonks | Stonks"` when no title is given.
pub fn compose_title(prefix: &str, title: Option<&str>) -> String {
    let title = title.map(str::trim).filter(|t| !t.is_empty()).unwrap_or(prefix);
    format!("{} | {}", prefix, title)
}

/// Sets the composed title, skipping the write when nothing changed.
pub struct TitleUpdater<S: TitleSurface> {
    surface: S,
    prefix: String,
    last: Option<String>,
}

impl<S: TitleSurface> TitleUpdater<S> {
    pub fn new(surface: S, prefix: impl Into<String>) -> Self {
        Self { surface, prefix: prefix.into(), last: None }
    }

    /// Returns whether the surface was written.
    pub fn update(&mut self, title: Option<&str>) -> bool {
        let composed = compose_title(&self.prefix, title);
        if self.last.as_deref() == Some(composed.as_str()) {
            return false;
        }
        self.surface.set_title(&composed);
        self.last = Some(composed);
        true
    }
}
