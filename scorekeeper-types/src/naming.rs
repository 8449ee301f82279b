//! Translation between internal (`snake_case`) field names and the
//! external (`camelCase`) names used on the wire.

/// Convert an internal field name to its external name.
///
/// Splits on `_`, lowercases the first word and capitalizes the first letter
/// of every later word. An empty segment is kept as a literal `_`.
pub fn to_camel(name: &str) -> String {
    let mut parts = name.split('_');
    let mut out = parts.next().unwrap_or_default().to_lowercase();
    for part in parts {
        let mut chars = part.chars();
        match chars.next() {
            Some(first) => {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
            None => out.push('_'),
        }
    }
    out
}

/// Join a parent path and an external field name.
pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
