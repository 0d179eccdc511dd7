/// Verbs offered while typing, in display order. `language` is left out
/// on purpose: it is an alias of `lang`.
pub const COMPLETION_VERBS: [&str; 18] = [
    "help",
    "about",
    "skills",
    "projects",
    "experience",
    "education",
    "contact",
    "ls",
    "cd",
    "cat",
    "clear",
    "pwd",
    "whoami",
    "date",
    "tree",
    "lang",
    "nico",
    "blog",
];

pub const MAX_SUGGESTIONS: usize = 5;

/// Verbs starting with `input`, case-insensitive, at most five.
pub fn suggestions(input: &str) -> Vec<&'static str> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    COMPLETION_VERBS
        .iter()
        .copied()
        .filter(|verb| verb.starts_with(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// What Tab does: the first suggestion, if any.
pub fn complete(input: &str) -> Option<&'static str> {
    suggestions(input).first().copied()
}
