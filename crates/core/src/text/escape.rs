//! Escaping helpers for HTML output.

/// Replaces line breaks with `<br>` tags so multi-line text renders in
/// HTML contexts.
#[must_use]
pub fn escape_html_line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}
