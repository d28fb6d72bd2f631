//! # Text Helpers

use crate::ELLIPSIS;

/// Shortens `text` to at most `max` characters followed by `"..."`.
///
/// `None` and empty input give `None`. Counting and slicing are by
/// character, not by word.
///
/// ```rust
/// use storefront_core::text::truncate;
///
/// assert_eq!(truncate(Some("Hello World"), 5).as_deref(), Some("Hello..."));
/// assert_eq!(truncate(Some("Hi"), 5).as_deref(), Some("Hi"));
/// assert_eq!(truncate(None, 5), None);
/// ```
pub fn truncate(text: Option<&str>, max: usize) -> Option<String> {
    let text = text.filter(|t| !t.is_empty())?;

    if text.chars().count() <= max {
        return Some(text.to_string());
    }

    let mut out: String = text.chars().take(max).collect();
    out.push_str(ELLIPSIS);
    Some(out)
}
