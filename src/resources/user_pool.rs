//! The managed user directory declaration.

use serde::Serialize;

use crate::error::SynthError;
use crate::naming;
use crate::scope::Scope;
use crate::token::Token;
use crate::traits::CloudResource;
use crate::types::{PasswordPolicy, PolicyProfile, RecoveryMechanism, ResourceType};

use super::user_pool_client::{ClientOptions, UserPoolClient};
use super::user_pool_domain::UserPoolDomain;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct UserPoolProperties<'a> {
    user_pool_name: &'a str,
    policies: PoliciesProperty,
    admin_create_user_config: AdminCreateUserConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    alias_attributes: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    auto_verified_attributes: Vec<&'static str>,
    mfa_configuration: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    enabled_mfas: Vec<&'static str>,
    account_recovery_setting: AccountRecoverySetting,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PoliciesProperty {
    password_policy: PasswordPolicy,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct AdminCreateUserConfig {
    allow_admin_create_user_only: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct AccountRecoverySetting {
    recovery_mechanisms: Vec<RecoveryMechanism>,
}

/// A declared user pool.
///
/// The declaration is registered before the constructor returns and is
/// visible to the enclosing stack from then on. The handle itself carries no
/// mutable state; it exists to spawn attached declarations and hand out the
/// deferred pool identifier.
#[derive(Debug)]
pub struct UserPool {
    scope: Scope,
    logical_id: String,
}

impl UserPool {
    /// Declare a user pool named `name` under `scope`, carrying `profile`.
    pub fn new(
        scope: &Scope,
        id: &str,
        name: &str,
        profile: &PolicyProfile,
    ) -> Result<Self, SynthError> {
        naming::validate_pool_name(name)?;

        let properties = UserPoolProperties {
            user_pool_name: name,
            policies: PoliciesProperty {
                password_policy: profile.password_policy,
            },
            admin_create_user_config: AdminCreateUserConfig {
                allow_admin_create_user_only: !profile.self_sign_up_enabled,
            },
            alias_attributes: profile.sign_in_aliases.alias_attributes(),
            auto_verified_attributes: profile.auto_verify.attribute_names(),
            mfa_configuration: profile.mfa.as_ref(),
            enabled_mfas: profile.mfa_factors.enabled_mfas(),
            account_recovery_setting: AccountRecoverySetting {
                recovery_mechanisms: profile.account_recovery.mechanisms(),
            },
        };
        let value = serde_json::to_value(&properties).map_err(|e| {
            SynthError::Framework(format!("failed to serialize user pool properties: {e}"))
        })?;

        let logical_id = scope.register_resource(id, ResourceType::UserPool.as_ref(), value)?;
        Ok(UserPool {
            scope: scope.clone(),
            logical_id,
        })
    }

    /// Attach an application client, leaving every setting at the framework
    /// default.
    pub fn add_client(&self, id: &str) -> Result<UserPoolClient, SynthError> {
        UserPoolClient::new(&self.scope, id, self, ClientOptions::default())
    }

    /// Attach an application client with explicit options.
    pub fn add_client_with_options(
        &self,
        id: &str,
        options: ClientOptions,
    ) -> Result<UserPoolClient, SynthError> {
        UserPoolClient::new(&self.scope, id, self, options)
    }

    /// Attach a hosted sign-in domain under the given prefix.
    pub fn add_domain(&self, id: &str, prefix: &str) -> Result<UserPoolDomain, SynthError> {
        UserPoolDomain::new(&self.scope, id, self, prefix)
    }

    /// Deferred pool identifier, resolved after deployment.
    pub fn pool_id(&self) -> Token {
        self.reference()
    }

    /// Deferred pool ARN, resolved after deployment.
    pub fn pool_arn(&self) -> Token {
        Token::GetAtt(self.logical_id.clone(), "Arn".to_string())
    }
}

impl CloudResource for UserPool {
    fn resource_type() -> ResourceType {
        ResourceType::UserPool
    }

    fn logical_id(&self) -> &str {
        &self.logical_id
    }
}
