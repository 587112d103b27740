//! # Misuse-resistant mailbox reference types
//!
//! The most prominent type in mailref-types is
//! [`MailboxReference`](mailbox::MailboxReference): an address paired with a
//! display name, such as `"John Doe" <john@example.com>`, or the bare address
//! alone. Although mailbox references are just strings, they have additional
//! rules, such as that the address part must satisfy the bare-address
//! grammar. Thus, mailref-types encapsulates them in a struct to ensure that
//! invalid ones can't be created.
//!
//! ## Construction
//!
//! mailref-types relies on the standard conversion traits, i.e., [`From`],
//! [`TryFrom`], [`Into`], and [`TryInto`]. Make good use of them. A failed
//! conversion returns an
//! [`InvalidMailboxReference`](error::InvalidMailboxReference) carrying the
//! offending input; there is no partially-constructed state.
//!
//! ```
//! use mailref_types::mailbox::MailboxReference;
//!
//! let reference = MailboxReference::try_from("\"John Doe\" <john@example.com>").unwrap();
//!
//! assert_eq!(reference.display_name(), "John Doe");
//! assert_eq!(reference.address(), "john@example.com");
//!
//! // The canonical projection round-trips.
//! assert_eq!(reference.to_string(), "\"John Doe\" <john@example.com>");
//! ```
//!
//! Callers that only need a shape check can use the free classifiers in
//! [`mailbox`] without constructing anything.
//!
//! ## Display helpers
//!
//! [`initials`](initials::initials) turns a name or mailbox string into the
//! up-to-two capital letters a UI badge shows for it.
//!
//! # Features
//!
//! | Feature | Description                                                    | Enabled by default |
//! |---------|----------------------------------------------------------------|--------------------|
//! | serde   | Derive `serde`s `Serialize` and `Deserialize` implementations. | No                 |
//!
//! When the `serde` feature is used, [`MailboxReference`](mailbox::MailboxReference)
//! serializes to its canonical string form and deserializes through the
//! validating constructor.

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]

// Test examples from mailref-types' README.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub mod codec;
pub mod error;
pub mod identity;
pub mod initials;
pub mod mailbox;
pub mod style;
pub mod utils;
