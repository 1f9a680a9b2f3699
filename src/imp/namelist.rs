//! Splits a delimiter-joined name list into individual file names.

/// Splits `value` on `delimiter` into an ordered list of file names.
///
/// All whitespace (LF, CR, HT and spaces) is stripped first, then one
/// leading and one trailing delimiter is tolerated, so `";a.js;b.js;"`
/// yields `["a.js", "b.js"]`.  An input that reduces to nothing yields an
/// empty list; callers treat that as "nothing to load", not as an error.
pub fn split_names(value: &str, delimiter: char) -> Vec<String> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t' | ' '))
        .collect();

    let cleaned = cleaned.strip_prefix(delimiter).unwrap_or(&cleaned);
    let cleaned = cleaned.strip_suffix(delimiter).unwrap_or(cleaned);

    if cleaned.is_empty() {
        return Vec::new();
    }

    cleaned
        .split(delimiter)
        .filter(|name| !name.is_empty())
        .map(Into::into)
        .collect()
}
