/// Plain-text editor used when the visual editor cannot be loaded.
///
/// Holds the markup and stylesheet as editable strings. Reseeding replaces
/// the markup with fresh render output and keeps the stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackEditor {
    html: String,
    css: String,
}

impl FallbackEditor {
    /// Editor showing `html` with an empty stylesheet.
    #[must_use]
    pub fn seeded(html: String) -> Self {
        Self {
            html,
            css: String::new(),
        }
    }

    /// Replace the markup with `html`.
    pub fn reseed(&mut self, html: String) {
        self.html = html;
    }

    /// Current markup.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Current stylesheet.
    #[must_use]
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Overwrite the markup.
    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    /// Overwrite the stylesheet.
    pub fn set_css(&mut self, css: impl Into<String>) {
        self.css = css.into();
    }
}
