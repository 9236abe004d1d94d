//! Escaping untrusted text for HTML output

/// Escape raw text so it can be inserted into HTML as literal text.
///
/// AI output and user input are untrusted; after escaping they can't open
/// tags, entities or break out of quoted attributes.
pub fn escape_for_display(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
