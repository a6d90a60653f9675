//! HTML rendering.
//!
//! Controllers mutate plain document structs; the functions in this module
//! turn those into markup. Every piece of provider or user text goes through
//! [`escape_html`] on its way into a template, nowhere else.

pub mod page;
pub mod repos;
pub mod weather;

pub use page::render_page;
pub use repos::{RenderMode, RepoCardView, ResultNode, SearchDocument};
pub use weather::{WeatherDocument, WeatherPanel};

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Compact count: `1530` becomes `1.5k`, anything under a thousand stays as is.
pub fn format_number(value: u64) -> String {
    if value >= 1000 {
        format!("{:.1}k", value as f64 / 1000.0)
    } else {
        value.to_string()
    }
}

/// The single error banner shown above a panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    messages: Vec<String>,
}

impl ErrorBanner {
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Replaces whatever the banner currently shows.
    pub fn show(&mut self, message: impl Into<String>) {
        self.messages = vec![message.into()];
    }

    /// Adds a line without hiding earlier ones.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn render(&self) -> String {
        if self.messages.is_empty() {
            return String::new();
        }
        let lines: Vec<String> = self
            .messages
            .iter()
            .map(|m| format!("<p>{}</p>", escape_html(m)))
            .collect();
        format!(r#"<div class="error" role="alert">{}</div>"#, lines.join(""))
    }
}
