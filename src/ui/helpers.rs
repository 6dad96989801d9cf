//! Shared markup helpers used across components.

/// Escapes text for use inside HTML content or a double-quoted attribute.
///
/// # Example
///
/// ```
/// use databook_viewer::ui::helpers::html_escape;
///
/// assert_eq!(html_escape(r#"<b>"A&B"</b>"#), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
/// ```
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Upper-cases the first character of `key`, leaving the rest untouched.
///
/// Used for column headers and preview labels.
#[must_use]
pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("name"), "Name");
        assert_eq!(capitalize("mW_g/mol"), "MW_g/mol");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("état"), "État");
    }

    #[test]
    fn escape_leaves_plain_text() {
        assert_eq!(html_escape("C2H5OH"), "C2H5OH");
        assert_eq!(html_escape("a < b"), "a &lt; b");
    }
}
