//! ui::wrap
//!
//! Greedy text re-flow to a caller-supplied width.

/// Reflow text to the given width.
///
/// Paragraph breaks (`\n`) are preserved. Words are never truncated: a word
/// longer than the width stands alone on its own line.
///
/// # Example
///
/// ```
/// use tiller::ui::wrap;
///
/// let lines = wrap("the quick brown fox jumps over the lazy dog", 15);
/// assert_eq!(lines, vec!["the quick brown", "fox jumps over", "the lazy dog"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
