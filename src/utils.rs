/// Removes the literal `prefix` from the front of `value` once, or leaves
/// `value` untouched when it does not start with `prefix`.
pub fn remove_prefix<'a>(value: &'a str, prefix: &str) -> &'a str {
    value.strip_prefix(prefix).unwrap_or(value)
}

/// Removes the literal `suffix` from the rear of `value` once, or leaves
/// `value` untouched when it does not end with `suffix`.
pub fn remove_suffix<'a>(value: &'a str, suffix: &str) -> &'a str {
    value.strip_suffix(suffix).unwrap_or(value)
}

/// Whether `value` starts with `prefix` and ends with `suffix`.
///
/// The two checks are independent, so overlapping ranges still count.
pub fn is_wrapped_in(value: &str, prefix: &str, suffix: &str) -> bool {
    value.starts_with(prefix) && value.ends_with(suffix)
}

/// Trims `n` characters from both the start and end of `value`
/// simultaneously.
///
/// Returns the empty string whenever `value` is shorter than `2n` characters.
pub fn unwrap(value: &str, n: usize) -> &str {
    let mut chars = value.chars();

    for _ in 0..n {
        if chars.next().is_none() || chars.next_back().is_none() {
            return "";
        }
    }

    chars.as_str()
}

/// Reverses the character order of `value`.
pub fn reverse(value: &str) -> String {
    value.chars().rev().collect()
}

/// The maximal run of characters from the front of `value` that are all
/// contained in `charset`.
pub fn extract_prefix<'a>(value: &'a str, charset: &str) -> &'a str {
    let end = value
        .char_indices()
        .find(|(_, c)| !charset.contains(*c))
        .map_or(value.len(), |(at, _)| at);

    &value[..end]
}

/// The maximal run of characters from the back of `value` that are all
/// contained in `charset`.
///
/// Behaves as `reverse(extract_prefix(reverse(value), charset))` without the
/// intermediate allocations.
pub fn extract_suffix<'a>(value: &'a str, charset: &str) -> &'a str {
    let start = value
        .char_indices()
        .rev()
        .take_while(|(_, c)| charset.contains(*c))
        .last()
        .map_or(value.len(), |(at, _)| at);

    &value[start..]
}
