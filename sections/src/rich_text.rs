//! Rich-text fields and the filter applied before they are rendered.
//!
//! Editors author rich text as HTML in the external authoring tool and it
//! is injected into the page as markup. Before rendering, every rich-text
//! field of a [`Page`](crate::types::Page) goes through a
//! [`RichTextFilter`]; plug a real sanitizer in there when the content is
//! not trusted.

use serde::{Deserialize, Serialize};

/// HTML authored outside the site, rendered as markup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub String);

impl RichText {
    /// The raw markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Replace the markup with `filter`'s output.
    pub fn apply(&mut self, filter: &dyn RichTextFilter) {
        self.0 = filter.filter(&self.0);
    }
}

impl From<&str> for RichText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RichText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Transformation applied to every rich-text field before rendering.
pub trait RichTextFilter {
    /// Return the markup that should reach the page.
    fn filter(&self, html: &str) -> String;
}

/// Keep markup as authored.
#[derive(Clone, Copy, Debug, Default)]
pub struct Verbatim;

impl RichTextFilter for Verbatim {
    fn filter(&self, html: &str) -> String {
        html.to_string()
    }
}

/// Render markup as literal text.
#[derive(Clone, Copy, Debug, Default)]
pub struct EscapeMarkup;

impl RichTextFilter for EscapeMarkup {
    fn filter(&self, html: &str) -> String {
        escape_html(html)
    }
}

/// Named filter, selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RichTextMode {
    /// [`Verbatim`]
    #[default]
    Verbatim,
    /// [`EscapeMarkup`]
    Escape,
}

impl RichTextMode {
    /// The filter this mode stands for.
    pub fn filter(self) -> &'static dyn RichTextFilter {
        match self {
            Self::Verbatim => &Verbatim,
            Self::Escape => &EscapeMarkup,
        }
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_keeps_markup() {
        let mut text = RichText::from("<p>Olá <strong>mundo</strong></p>");
        text.apply(&Verbatim);
        assert_eq!(text.as_str(), "<p>Olá <strong>mundo</strong></p>");
    }

    #[test]
    fn escape_turns_markup_into_text() {
        let mut text = RichText::from("<script>alert('x')</script> & co");
        text.apply(RichTextMode::Escape.filter());
        assert_eq!(
            text.as_str(),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; co"
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert!(RichText::from("  \n").is_empty());
        assert!(!RichText::from("<p></p>").is_empty());
    }
}
