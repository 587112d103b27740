//! Membership-related types.

use std::borrow::Cow;

use bounded_static_derive::ToStatic;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::mailbox::MailboxReference;

/// A member of the system, identified by username and mailbox reference.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, ToStatic)]
pub struct Member<'a> {
    pub username: Cow<'a, str>,
    pub email: MailboxReference<'a>,
    pub roles: Vec<Cow<'a, str>>,
}

impl Member<'_> {
    /// Whether this member holds `role`.
    ///
    /// Exact membership test, no case folding.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|have| have.as_ref() == role)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    fn member() -> Member<'static> {
        Member {
            username: Cow::Borrowed("jdoe"),
            email: MailboxReference::try_from("\"John Doe\" <john.doe@lostfound.com>").unwrap(),
            roles: vec![Cow::Borrowed("admin"), Cow::Borrowed("editor")],
        }
    }

    #[test]
    fn test_has_role() {
        let member = member();

        assert!(member.has_role("admin"));
        assert!(member.has_role("editor"));
        assert!(!member.has_role("owner"));
    }

    #[test]
    fn test_has_role_is_exact() {
        let member = member();

        assert!(!member.has_role("Admin"));
        assert!(!member.has_role("admi"));
        assert!(!member.has_role(""));
    }

    #[test]
    fn test_member_exposes_a_validated_reference() {
        let member = member();

        assert_eq!("John Doe", member.email.display_name());
        assert_eq!("john.doe@lostfound.com", member.email.address());
    }
}
