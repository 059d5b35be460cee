/// Turns a discussion title into a directory name by dropping ASCII punctuation.
///
/// Only ASCII punctuation is removed. Whitespace, non-ASCII symbols and reserved names
/// such as `CON` pass through unchanged.
pub fn sanitize_title(title: &str) -> String {
    title.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}
