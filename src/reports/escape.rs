//! Escaping utilities for Markdown reports.
//!
//! Insight and gate text come from the fixed library, but file paths and
//! report titles come from the caller. Escape anything caller-controlled
//! before embedding it in a table or heading.

/// Escape a string for safe inclusion in a Markdown table cell.
///
/// Handles pipe characters (which would break table structure), newlines,
/// and backticks that could break formatting.
///
/// # Examples
///
/// ```
/// use maturity_pulse::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// assert_eq!(escape_markdown_table("`code`"), "\\`code\\`");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for safe inclusion in Markdown inline content.
///
/// ```
/// use maturity_pulse::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("q3_pulse*.json"), "q3\\_pulse\\*.json");
/// ```
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '!' => result.push_str("\\!"),
            '~' => result.push_str("\\~"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape an optional value for a table cell, returning "-" for None.
pub fn escape_md_opt(s: Option<&str>) -> String {
    match s {
        Some(v) => escape_markdown_table(v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_escaping() {
        assert_eq!(escape_markdown_table("Risk | Talent"), "Risk \\| Talent");
        assert_eq!(escape_markdown_table("a\r\nb"), "a b");
        assert_eq!(escape_markdown_table("[x]"), "\\[x\\]");
    }

    #[test]
    fn test_inline_escaping() {
        assert_eq!(escape_markdown_inline("# title"), "\\# title");
        assert_eq!(escape_markdown_inline("<b>"), "\\<b\\>");
        assert_eq!(escape_markdown_inline("plain text"), "plain text");
    }

    #[test]
    fn test_optional() {
        assert_eq!(escape_md_opt(None), "-");
        assert_eq!(escape_md_opt(Some("a|b")), "a\\|b");
    }
}
