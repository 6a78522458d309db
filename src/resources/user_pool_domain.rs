//! Hosted sign-in domain attached to a user pool.

use serde::Serialize;

use crate::error::SynthError;
use crate::naming;
use crate::scope::Scope;
use crate::token::Token;
use crate::traits::CloudResource;
use crate::types::ResourceType;

use super::user_pool::UserPool;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DomainProperties {
    domain: String,
    user_pool_id: Token,
}

/// A hosted domain serving the directory's built-in sign-in pages.
#[derive(Debug)]
pub struct UserPoolDomain {
    logical_id: String,
    prefix: String,
}

impl UserPoolDomain {
    pub(crate) fn new(
        scope: &Scope,
        id: &str,
        pool: &UserPool,
        prefix: &str,
    ) -> Result<Self, SynthError> {
        naming::validate_domain_prefix(prefix)?;

        let properties = DomainProperties {
            domain: prefix.to_string(),
            user_pool_id: pool.pool_id(),
        };
        let value = serde_json::to_value(&properties).map_err(|e| {
            SynthError::Framework(format!("failed to serialize domain properties: {e}"))
        })?;

        let logical_id =
            scope.register_resource(id, ResourceType::UserPoolDomain.as_ref(), value)?;
        Ok(UserPoolDomain {
            logical_id,
            prefix: prefix.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl CloudResource for UserPoolDomain {
    fn resource_type() -> ResourceType {
        ResourceType::UserPoolDomain
    }

    fn logical_id(&self) -> &str {
        &self.logical_id
    }
}
