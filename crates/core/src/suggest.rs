/// Filters `options` down to those starting with `to_complete`.
///
/// Matching is case-sensitive and keeps the original order. An empty
/// `to_complete` returns every option.
pub fn suggest<'a>(options: &[&'a str], to_complete: &str) -> Vec<&'a str> {
    options
        .iter()
        .copied()
        .filter(|option| option.starts_with(to_complete))
        .collect()
}

/// Returns the first option that strictly extends `typed`, if any.
pub fn first_extension<'a>(options: &[&'a str], typed: &str) -> Option<&'a str> {
    if typed.is_empty() {
        return None;
    }

    suggest(options, typed)
        .into_iter()
        .find(|option| option.len() > typed.len())
}
