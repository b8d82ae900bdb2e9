//! Text formatting for rendered markup.
//!
//! # Responsibility
//! - Convert the fixed set of Unicode-subscript formulas to `<sub>` markup.
//! - Escape text placed into markup.
//!
//! # Invariants
//! - Only formulas listed in `FORMULA_MARKUP` are rewritten.
//! - Escaping never touches subscript characters, so escaping before
//!   formula conversion is safe.

use once_cell::sync::Lazy;
use regex::Regex;

/// Formula spellings and their markup, checked in this order.
const FORMULA_MARKUP: &[(&str, &str)] = &[
    ("CₓHₙ", "C<sub>x</sub>H<sub>n</sub>"),
    ("CH₄", "CH<sub>4</sub>"),
    ("C₃H₈", "C<sub>3</sub>H<sub>8</sub>"),
    ("C₄H₁₀", "C<sub>4</sub>H<sub>10</sub>"),
    ("C₂H₅SH", "C<sub>2</sub>H<sub>5</sub>SH"),
    ("C₂H₆+", "C<sub>2</sub>H<sub>6</sub>+"),
    ("H₂O", "H<sub>2</sub>O"),
    ("CO₂", "CO<sub>2</sub>"),
    ("O₂", "O<sub>2</sub>"),
    ("N₂", "N<sub>2</sub>"),
    ("P₁V₁", "P<sub>1</sub>V<sub>1</sub>"),
    ("P₂V₂", "P<sub>2</sub>V<sub>2</sub>"),
    ("T₁", "T<sub>1</sub>"),
    ("T₂", "T<sub>2</sub>"),
    ("V₁", "V<sub>1</sub>"),
    ("V₂", "V<sub>2</sub>"),
];

static FORMULA_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = FORMULA_MARKUP
        .iter()
        .map(|(formula, _)| regex::escape(formula))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("valid formula regex")
});

/// Rewrites known subscript formulas as `<sub>` markup.
pub fn format_formulas(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    FORMULA_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let matched = &caps[0];
            FORMULA_MARKUP
                .iter()
                .find(|(formula, _)| *formula == matched)
                .map(|(_, markup)| (*markup).to_string())
                .unwrap_or_else(|| matched.to_string())
        })
        .into_owned()
}

/// Escapes `& < > " '` for safe inclusion in markup text or attributes.
pub fn escape_html(text: &str) -> String {
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

/// Escapes a data field, then renders its formulas.
pub fn render_field(text: &str) -> String {
    format_formulas(&escape_html(text))
}

#[cfg(test)]
mod tests {
    use super::{escape_html, format_formulas, render_field};

    #[test]
    fn converts_known_formulas() {
        assert_eq!(
            format_formulas("Natural Gas (CH₄)"),
            "Natural Gas (CH<sub>4</sub>)"
        );
        assert_eq!(
            format_formulas("(P₁V₁)/T₁ = (P₂V₂)/T₂"),
            "(P<sub>1</sub>V<sub>1</sub>)/T<sub>1</sub> = (P<sub>2</sub>V<sub>2</sub>)/T<sub>2</sub>"
        );
    }

    #[test]
    fn longer_formula_wins_over_embedded_one() {
        assert_eq!(format_formulas("CO₂"), "CO<sub>2</sub>");
        assert_eq!(format_formulas("N₂, CO₂"), "N<sub>2</sub>, CO<sub>2</sub>");
        assert_eq!(format_formulas("C₂H₆+"), "C<sub>2</sub>H<sub>6</sub>+");
    }

    #[test]
    fn leaves_unknown_text_alone() {
        assert_eq!(format_formulas(""), "");
        assert_eq!(format_formulas("H₃PO₄"), "H₃PO₄");
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn render_field_escapes_before_formatting() {
        assert_eq!(
            render_field("1 PSI ≈ 27.7\" W.C. <CH₄>"),
            "1 PSI ≈ 27.7&quot; W.C. &lt;CH<sub>4</sub>&gt;"
        );
    }
}
