//! Filename sanitization for exported drawings.

/// Sanitize a plan title into a safe filename stem.
///
/// Lowercases, then replaces every character outside `[a-z0-9_.-]` with an
/// underscore. An empty title yields the stem `plan`.
pub fn sanitize_filename(name: &str) -> String {
    if name.is_empty() {
        return "plan".to_string();
    }
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
