//! Named outputs published on a scope.

use crate::error::SynthError;
use crate::scope::Scope;
use crate::token::Token;

/// A named, deferred value published by a scope for downstream consumers.
///
/// The value stays unresolved in the descriptor; the deployment engine
/// substitutes the real identifier after deployment. Names are unique within
/// their scope, and a name registered on the root scope appears verbatim as
/// the descriptor key.
#[derive(Debug)]
pub struct Output {
    logical_id: String,
    name: String,
}

impl Output {
    /// Publish `value` under `name` on `scope`.
    pub fn new(scope: &Scope, name: &str, value: Token) -> Result<Self, SynthError> {
        let logical_id = scope.register_output(name, value)?;
        Ok(Output {
            logical_id,
            name: name.to_string(),
        })
    }

    /// The logical name the output was requested under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The descriptor key the output landed on (scope-prefixed).
    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }
}
