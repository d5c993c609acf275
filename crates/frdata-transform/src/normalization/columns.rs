//! Column-name normalization.

/// Trims a header (including a stray byte-order mark) and collapses internal
/// whitespace runs to a single space.
///
/// # Examples
///
/// ```
/// use frdata_transform::normalization::normalize_column_name;
///
/// assert_eq!(normalize_column_name("  Date   Décès "), "Date Décès");
/// assert_eq!(normalize_column_name("Nom\tActuel\nRégion"), "Nom Actuel Région");
/// ```
pub fn normalize_column_name(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::with_capacity(trimmed.len());
    for part in trimmed.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(part);
    }
    normalized
}

/// Normalizes every header, preserving order.
pub fn normalize_column_names(headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|header| normalize_column_name(header))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_normal_names_are_unchanged() {
        assert_eq!(normalize_column_name("Département"), "Département");
        assert_eq!(normalize_column_name("OSM Point"), "OSM Point");
    }

    #[test]
    fn bom_and_blank_names() {
        assert_eq!(normalize_column_name("\u{feff}Nom"), "Nom");
        assert_eq!(normalize_column_name("   "), "");
    }
}
