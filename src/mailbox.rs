//! Mailbox reference types.
//!
//! A mailbox reference is either a bare address, such as
//! `user@domain.tld`, or an address wrapped with a quoted human-readable
//! display name, such as `"Display Name" <user@domain.tld>`.
//! The wrapped form uses exactly one space between the closing quote and the
//! opening angle bracket.

use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
};

use bounded_static_derive::ToStatic;
use once_cell::sync::Lazy;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::InvalidMailboxReference,
    utils::{remove_prefix, remove_suffix},
};

/// The pattern used to test whether a string is a valid bare address.
///
/// Anchored and case-insensitive. This is the single source of truth for the
/// bare-address grammar; every other predicate in this module is built from
/// it.
static ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid address pattern")
});

/// Whether `value` represents a bare address, e.g., `user@domain.tld`.
pub fn is_bare_address(value: &str) -> bool {
    ADDRESS_PATTERN.is_match(value)
}

/// Whether `value` represents an address wrapped with a genuine display name.
///
/// A wrapped string whose display name equals its address does not count.
pub fn is_wrapped_address(value: &str) -> bool {
    match dissect(value) {
        Ok((display_name, address)) => display_name != address,
        Err(_) => false,
    }
}

/// Whether `value` represents a mailbox reference in either form.
pub fn is_mailbox_reference(value: &str) -> bool {
    is_bare_address(value) || is_wrapped_address(value)
}

/// Splits `value` into its display name and its bare address.
///
/// The split point is the *last* space in `value`, so display names with
/// internal spaces are handled. When `value` contains no space (or only a
/// leading one), the whole string doubles as both display name and address;
/// no grammar check happens on this branch, use [`is_bare_address`] to judge
/// the result. One leading/trailing quote is trimmed from the left part and
/// one pair of angle brackets from the right part, without balanced-pair
/// validation; a string missing one bracket degrades into a failed
/// bare-address check.
pub fn dissect(value: &str) -> Result<(&str, &str), InvalidMailboxReference> {
    let space = match value.rfind(' ') {
        Some(at) if at > 0 => at,
        _ => return Ok((value, value)),
    };

    let (left, right) = (&value[..space], &value[space + 1..]);
    let display_name = remove_suffix(remove_prefix(left, "\""), "\"");
    let address = remove_suffix(remove_prefix(right, "<"), ">");

    if is_bare_address(address) {
        Ok((display_name, address))
    } else {
        Err(InvalidMailboxReference::new(value))
    }
}

/// The display name part of `value`.
pub fn extract_display_name(value: &str) -> Result<&str, InvalidMailboxReference> {
    dissect(value).map(|(display_name, _)| display_name)
}

/// The bare address part of `value`.
pub fn extract_address(value: &str) -> Result<&str, InvalidMailboxReference> {
    dissect(value).map(|(_, address)| address)
}

/// A validated mailbox reference.
///
/// Exposes an address together with its display name. When the source string
/// carried no display name, the display name defaults to the address itself;
/// the two fields never hold surrounding quotes or angle brackets.
///
/// Instances can only be created through the checked conversions and are
/// immutable afterwards.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, ToStatic)]
pub struct MailboxReference<'a> {
    display_name: Cow<'a, str>,
    address: Cow<'a, str>,
}

impl<'a> MailboxReference<'a> {
    /// The acceptance test run by the checked conversions.
    pub fn validate(value: impl AsRef<str>) -> Result<(), InvalidMailboxReference> {
        let value = value.as_ref();

        if is_mailbox_reference(value) {
            Ok(())
        } else {
            Err(InvalidMailboxReference::new(value))
        }
    }

    /// Whether `value` could be used to create a [`MailboxReference`].
    pub fn is_mailbox_reference(value: &str) -> bool {
        is_mailbox_reference(value)
    }

    /// Whether `value` represents an address with a genuine display name.
    pub fn has_display_name(value: &str) -> bool {
        is_wrapped_address(value)
    }

    /// The display name, or the address itself when none was supplied.
    pub fn display_name(&self) -> &str {
        self.display_name.as_ref()
    }

    /// The bare, validated address.
    pub fn address(&self) -> &str {
        self.address.as_ref()
    }
}

impl<'a> TryFrom<&'a str> for MailboxReference<'a> {
    type Error = InvalidMailboxReference;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Self::validate(value)?;

        // Safety: `unwrap` can't panic due to `validate`.
        let (display_name, address) = dissect(value).unwrap();

        Ok(Self {
            display_name: Cow::Borrowed(display_name),
            address: Cow::Borrowed(address),
        })
    }
}

impl<'a> TryFrom<String> for MailboxReference<'a> {
    type Error = InvalidMailboxReference;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;

        // Safety: `unwrap` can't panic due to `validate`.
        let (display_name, address) = dissect(&value).unwrap();

        Ok(Self {
            display_name: Cow::Owned(display_name.to_owned()),
            address: Cow::Owned(address.to_owned()),
        })
    }
}

impl Display for MailboxReference<'_> {
    /// The canonical projection.
    ///
    /// Re-wraps when a genuine display name is present, otherwise prints the
    /// bare address. Parsing the output yields this reference again.
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.display_name != self.address {
            write!(f, "\"{}\" <{}>", self.display_name, self.address)
        } else {
            write!(f, "{}", self.address)
        }
    }
}

impl From<MailboxReference<'_>> for String {
    fn from(value: MailboxReference<'_>) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_BARE: &[&str] = &[
        "john.doe@lostfound.com",
        "someone@somewhere.com",
        "info+urgent@work.com",
    ];

    const VALID_WRAPPED: &[&str] = &[
        "\"John Doe\" <john.doe@lostfound.com>",
        "\"John Doe\" <john@example.com>",
        "\"Someone special\" <someone@somewhere.com>",
        "\"Company\" <info+urgent@work.com>",
    ];

    const INVALID: &[&str] = &["", "this is not an email", "Fr@cking toaster"];

    #[test]
    fn test_dissect() {
        let (display_name, address) = dissect("\"John Doe\" <john-doe@lostfound.com>").unwrap();

        assert_eq!("John Doe", display_name);
        assert_eq!("john-doe@lostfound.com", address);
    }

    #[test]
    fn test_dissect_treats_spaceless_input_as_bare() {
        let tests = ["john@lostfound.com", "", "no-address-at-all"];

        for test in tests {
            assert_eq!((test, test), dissect(test).unwrap());
        }

        // A space at index 0 counts as no space at all.
        assert_eq!((" x", " x"), dissect(" x").unwrap());
    }

    #[test]
    fn test_dissect_uses_the_last_space() {
        let (display_name, address) = dissect("\"John Middle Doe\" <john@example.com>").unwrap();

        assert_eq!("John Middle Doe", display_name);
        assert_eq!("john@example.com", address);
    }

    #[test]
    fn test_classifiers() {
        for &value in VALID_BARE {
            assert!(is_bare_address(value), "{value}");
            assert!(!is_wrapped_address(value), "{value}");
            assert!(is_mailbox_reference(value), "{value}");
        }

        for &value in VALID_WRAPPED {
            assert!(!is_bare_address(value), "{value}");
            assert!(is_wrapped_address(value), "{value}");
            assert!(is_mailbox_reference(value), "{value}");
        }

        for &value in INVALID {
            assert!(!is_mailbox_reference(value), "{value}");
        }
    }

    #[test]
    fn test_classifier_consistency() {
        let tests = [VALID_BARE, VALID_WRAPPED, INVALID].concat();

        for value in tests {
            assert_eq!(
                is_mailbox_reference(value),
                is_bare_address(value) || is_wrapped_address(value),
                "{value}"
            );
        }
    }

    #[test]
    fn test_address_grammar_is_case_insensitive() {
        assert!(is_bare_address("John.Doe@LostFound.COM"));
    }

    #[test]
    fn test_wrapped_without_genuine_display_name_is_rejected() {
        // Syntactically wrapped, but the display name equals the address.
        let value = "\"john@example.com\" <john@example.com>";

        assert!(!is_wrapped_address(value));
        assert!(MailboxReference::try_from(value).is_err());
    }

    #[test]
    fn test_extraction() {
        assert_eq!(
            "Display Name",
            extract_display_name("\"Display Name\" <someone@somewhere.com>").unwrap()
        );
        assert_eq!(
            "someone@somewhere.com",
            extract_address("\"Display Name\" <someone@somewhere.com>").unwrap()
        );
    }

    #[test]
    fn test_conversion() {
        for value in VALID_BARE {
            let reference = MailboxReference::try_from(*value).unwrap();

            assert_eq!(*value, reference.display_name());
            assert_eq!(*value, reference.address());

            let reference = MailboxReference::try_from(String::from(*value)).unwrap();

            assert_eq!(*value, reference.address());
        }

        let reference = MailboxReference::try_from("\"John Doe\" <john@example.com>").unwrap();

        assert_eq!("John Doe", reference.display_name());
        assert_eq!("john@example.com", reference.address());
    }

    #[test]
    fn test_conversion_failing() {
        for value in INVALID {
            let err = MailboxReference::try_from(*value).unwrap_err();
            assert_eq!(*value, err.value());

            assert!(MailboxReference::try_from(String::from(*value)).is_err());
        }
    }

    #[test]
    fn test_round_trip() {
        for value in VALID_WRAPPED {
            let reference = MailboxReference::try_from(*value).unwrap();

            assert_eq!(*value, reference.to_string());
        }

        for value in VALID_BARE {
            let reference = MailboxReference::try_from(*value).unwrap();

            assert_eq!(*value, reference.to_string());
        }
    }

    #[test]
    fn test_predicates() {
        assert!(MailboxReference::is_mailbox_reference("john@example.com"));
        assert!(MailboxReference::has_display_name(
            "\"John Doe\" <john@example.com>"
        ));
        assert!(!MailboxReference::has_display_name("john@example.com"));
    }

    // The last-space heuristic means a stray trailing space splits at the
    // wrong point. This behavior is relied upon, not accidental; these tests
    // flag it.
    #[test]
    fn test_trailing_space_misparses() {
        assert!(dissect("\"John Doe\" <john@example.com> ").is_err());
        assert!(!is_mailbox_reference("john@example.com "));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let reference = MailboxReference::try_from("\"John Doe\" <john@example.com>").unwrap();

        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(r#""\"John Doe\" <john@example.com>""#, json);

        let parsed: MailboxReference = serde_json::from_str(&json).unwrap();
        assert_eq!(reference, parsed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_input() {
        assert!(serde_json::from_str::<MailboxReference>(r#""this is not an email""#).is_err());
    }
}
