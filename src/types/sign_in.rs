//! Sign-in alias and verification settings.

use serde::{Deserialize, Serialize};

/// Which identifiers a user may present at sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SignInAliases {
    pub username: bool,
    pub email: bool,
}

impl SignInAliases {
    /// Attribute names the directory accepts as aliases alongside the
    /// username.
    pub fn alias_attributes(&self) -> Vec<&'static str> {
        let mut attrs = Vec::new();
        if self.email {
            attrs.push("email");
        }
        attrs
    }
}

/// Attributes the directory verifies automatically at sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct AutoVerifiedAttrs {
    pub email: bool,
}

impl AutoVerifiedAttrs {
    pub fn attribute_names(&self) -> Vec<&'static str> {
        let mut attrs = Vec::new();
        if self.email {
            attrs.push("email");
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_attributes_with_email() {
        let aliases = SignInAliases {
            username: true,
            email: true,
        };
        assert_eq!(aliases.alias_attributes(), vec!["email"]);
    }

    #[test]
    fn test_alias_attributes_username_only() {
        let aliases = SignInAliases {
            username: true,
            email: false,
        };
        assert!(aliases.alias_attributes().is_empty());
    }

    #[test]
    fn test_auto_verified_attribute_names() {
        assert_eq!(AutoVerifiedAttrs { email: true }.attribute_names(), vec!["email"]);
        assert!(AutoVerifiedAttrs { email: false }.attribute_names().is_empty());
    }
}
