//! Text formatting helpers.

/// Convert a name to start case: words are split on any non-alphanumeric
/// character, each word gets an upper-case first letter, and words are
/// joined with a single space (`"tower-http"` becomes `"Tower Http"`).
pub fn start_case(value: &str) -> String {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
