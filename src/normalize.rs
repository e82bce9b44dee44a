//! Whitespace normalization.
//!
//! Model output arrives with stray newlines, tabs and double spaces. Every
//! later stage assumes single-space-separated text with no padding at either
//! end, so normalization runs first and again on the final result.

/// Collapse every run of whitespace to a single space and trim both ends.
///
/// Accepts `&str` or `Option<&str>`; `None` and blank input yield an empty
/// string. Normalizing twice is the same as normalizing once.
///
/// ```rust
/// use lathe::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Закат \n\t над   морем.  "), "Закат над морем.");
/// assert_eq!(normalize_whitespace(None), "");
/// ```
pub fn normalize_whitespace<'a>(text: impl Into<Option<&'a str>>) -> String {
    let Some(text) = text.into() else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
