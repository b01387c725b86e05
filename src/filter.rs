use std::collections::HashSet;

/// Dependency names matching the plugin naming convention, in declaration
/// order. A name declared in more than one dependency table yields one
/// candidate.
pub fn plugin_candidates<'a>(
    names: impl IntoIterator<Item = &'a str>,
    prefix: &str,
) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| name.starts_with(prefix) && seen.insert(*name))
        .map(String::from)
        .collect()
}
