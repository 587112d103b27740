//! Error-related types.

use thiserror::Error;

/// Error signaling an attempt to use a string that is not a valid mailbox
/// reference.
///
/// This error is returned by the validating constructors of
/// [`MailboxReference`](crate::mailbox::MailboxReference) and by
/// [`dissect`](crate::mailbox::dissect) when the part right of the last space
/// fails the bare-address grammar.
#[derive(Clone, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
#[error("The given string {value:?} is not a mailbox reference")]
pub struct InvalidMailboxReference {
    value: String,
}

impl InvalidMailboxReference {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}
