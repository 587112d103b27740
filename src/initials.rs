//! Initials extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::mailbox::{extract_display_name, is_bare_address, is_wrapped_address};

/// Delimiters separating the segments of a plain name.
static NAME_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s|-|_|\.|\b").expect("valid delimiter pattern"));

/// Grabs up to two capitalized initials from a string holding a name or a
/// mailbox reference.
///
/// A wrapped address contributes the initials of its display name; a bare
/// address contributes the initials of its local-part, with any
/// plus-addressing tag suppressed. A plain name contributes the first letter
/// of each segment, keeping only the first and last when there are more than
/// two.
///
/// # Examples
///
/// ```
/// use mailref_types::initials::initials;
///
/// assert_eq!(vec!['J'], initials("John"));
/// assert_eq!(vec!['J', 'D'], initials("John Doe"));
/// assert_eq!(vec!['J', 'D'], initials("john-doe+nospam@lostfound.com"));
/// ```
pub fn initials(input: &str) -> Vec<char> {
    if is_wrapped_address(input) {
        // Safety: `unwrap` can't panic because `is_wrapped_address` only
        // returns true when dissection succeeds.
        let display_name = extract_display_name(input).unwrap();

        return initials(display_name);
    }

    if is_bare_address(input) {
        // Safety: the bare-address grammar guarantees an `@`.
        let local_part = &input[..input.find('@').unwrap()];

        let local_part = match local_part.find('+') {
            Some(at) => &local_part[..at],
            None => local_part,
        };

        return initials(local_part);
    }

    let mut letters: Vec<char> = NAME_DELIMITERS
        .split(input)
        .filter_map(|segment| segment.chars().next())
        .filter_map(|c| c.to_uppercase().next())
        .collect();

    if letters.len() > 2 {
        letters = vec![letters[0], letters[letters.len() - 1]];
    }

    letters
}
