use crate::util::collapse_whitespace;

/// Removes the first occurrence of the amount token and tidies whitespace.
/// An empty return means nothing but the amount was typed.
pub fn clean_description(text: &str, matched: Option<&str>) -> String {
    match matched {
        Some(token) if !token.is_empty() => collapse_whitespace(&text.replacen(token, "", 1)),
        _ => collapse_whitespace(text),
    }
}
