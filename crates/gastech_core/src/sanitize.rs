//! Markup sanitizer for formula-bearing text.
//!
//! Everything is escaped first; only `<sub>`/`</sub>` is restored, since
//! formula rendering is the one markup the reference data relies on.

use crate::format::escape_html;

/// Escapes `html`, then restores subscript tags.
pub fn sanitize(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    escape_html(html)
        .replace("&lt;sub&gt;", "<sub>")
        .replace("&lt;/sub&gt;", "</sub>")
}

/// Escapes all markup in `text`.
pub fn sanitize_text(text: &str) -> String {
    escape_html(text)
}

#[cfg(test)]
mod tests {
    use super::{sanitize, sanitize_text};

    #[test]
    fn keeps_subscripts_and_escapes_everything_else() {
        assert_eq!(
            sanitize("CH<sub>4</sub><script>alert(1)</script>"),
            "CH<sub>4</sub>&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn sanitize_text_strips_subscripts_too() {
        assert_eq!(sanitize_text("<sub>4</sub>"), "&lt;sub&gt;4&lt;/sub&gt;");
    }
}
