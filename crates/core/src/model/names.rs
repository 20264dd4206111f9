#![forbid(unsafe_code)]

const NAME_SEPARATOR: char = ',';

/// Serializes an identifier list into its stored form.
///
/// An empty list becomes an empty string.
pub fn join_names(names: &[String]) -> String {
    let mut out = String::new();
    for (index, name) in names.iter().enumerate() {
        if index > 0 {
            out.push(NAME_SEPARATOR);
        }
        out.push_str(name);
    }
    out
}

/// Parses a stored identifier list.
///
/// Blank input yields an empty list, never a list holding one empty name.
/// Empty segments left behind by stray separators are dropped.
pub fn split_names(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<String> = Vec::new();
    for segment in raw.split(NAME_SEPARATOR) {
        if segment.is_empty() || out.iter().any(|existing| existing == segment) {
            continue;
        }
        out.push(segment.to_string());
    }
    out
}

/// Whether a name survives a `join_names` / `split_names` round trip.
pub fn is_storable_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(NAME_SEPARATOR)
}

/// The list `split_names(&join_names(names))` would produce.
pub fn normalize_names(names: &[String]) -> Vec<String> {
    split_names(&join_names(names))
}
