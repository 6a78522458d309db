//! Canonical provider resource type identifiers.
//!
//! Centralized so the type strings appear exactly once in the codebase.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Resource types this library can declare.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
pub enum ResourceType {
    /// The managed user directory.
    #[strum(serialize = "AWS::Cognito::UserPool")]
    UserPool,
    /// An application client registered with a user pool.
    #[strum(serialize = "AWS::Cognito::UserPoolClient")]
    UserPoolClient,
    /// A hosted sign-in domain attached to a user pool.
    #[strum(serialize = "AWS::Cognito::UserPoolDomain")]
    UserPoolDomain,
}
