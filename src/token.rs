//! Deferred value expressions.
//!
//! A [`Token`] stands in for a value that only exists after the deployment
//! engine has executed the descriptor, such as the generated identifier of a
//! user pool. Tokens are serialized into the descriptor verbatim and are
//! never resolved by this library.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A deferred expression, rendered in the provider's intrinsic-function shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Token {
    /// Resolves to the published identifier of the named declaration.
    #[serde(rename = "Ref")]
    Ref(String),

    /// Resolves to a named attribute of the target declaration.
    #[serde(rename = "Fn::GetAtt")]
    GetAtt(String, String),
}

impl Token {
    /// The logical id this token points at.
    pub fn target(&self) -> &str {
        match self {
            Token::Ref(id) => id,
            Token::GetAtt(id, _) => id,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Token::Ref(id) => write!(f, "!Ref {id}"),
            Token::GetAtt(id, attr) => write!(f, "!GetAtt {id}.{attr}"),
        }
    }
}
