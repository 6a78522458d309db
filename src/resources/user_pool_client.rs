//! Application client declarations attached to a user pool.

use itertools::Itertools;
use serde::Serialize;

use crate::error::SynthError;
use crate::scope::Scope;
use crate::token::Token;
use crate::traits::CloudResource;
use crate::types::ResourceType;

use super::user_pool::UserPool;

/// Authentication flows the client may initiate explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthFlows {
    pub user_password: bool,
    pub user_srp: bool,
}

impl AuthFlows {
    /// Provider identifiers for the enabled flows. Refresh-token auth rides
    /// along whenever any explicit flow is enabled.
    fn explicit_flows(&self) -> Vec<&'static str> {
        let mut flows = Vec::new();
        if self.user_password {
            flows.push("ALLOW_USER_PASSWORD_AUTH");
        }
        if self.user_srp {
            flows.push("ALLOW_USER_SRP_AUTH");
        }
        if !flows.is_empty() {
            flows.push("ALLOW_REFRESH_TOKEN_AUTH");
        }
        flows
    }
}

/// Optional client configuration. The default leaves every setting to the
/// framework, which is what [`UserPool::add_client`] uses.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub callback_urls: Vec<String>,
    pub logout_urls: Vec<String>,
    pub auth_flows: AuthFlows,
    pub generate_secret: Option<bool>,
}

impl ClientOptions {
    fn validate(&self) -> Result<(), SynthError> {
        if let Some(url) = self.callback_urls.iter().duplicates().next() {
            return Err(SynthError::InvalidArgument(format!(
                "duplicate callback URL '{url}'"
            )));
        }
        if let Some(url) = self.logout_urls.iter().duplicates().next() {
            return Err(SynthError::InvalidArgument(format!(
                "duplicate logout URL '{url}'"
            )));
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ClientProperties {
    user_pool_id: Token,
    #[serde(rename = "CallbackURLs", skip_serializing_if = "Vec::is_empty")]
    callback_urls: Vec<String>,
    #[serde(rename = "LogoutURLs", skip_serializing_if = "Vec::is_empty")]
    logout_urls: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    explicit_auth_flows: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generate_secret: Option<bool>,
}

/// A declared application client. Always back-linked to the pool that
/// spawned it.
#[derive(Debug)]
pub struct UserPoolClient {
    logical_id: String,
    pool_logical_id: String,
}

impl UserPoolClient {
    pub(crate) fn new(
        scope: &Scope,
        id: &str,
        pool: &UserPool,
        options: ClientOptions,
    ) -> Result<Self, SynthError> {
        options.validate()?;
        let ClientOptions {
            callback_urls,
            logout_urls,
            auth_flows,
            generate_secret,
        } = options;

        let properties = ClientProperties {
            user_pool_id: pool.pool_id(),
            callback_urls,
            logout_urls,
            explicit_auth_flows: auth_flows.explicit_flows(),
            generate_secret,
        };
        let value = serde_json::to_value(&properties).map_err(|e| {
            SynthError::Framework(format!("failed to serialize client properties: {e}"))
        })?;

        let logical_id =
            scope.register_resource(id, ResourceType::UserPoolClient.as_ref(), value)?;
        Ok(UserPoolClient {
            logical_id,
            pool_logical_id: pool.logical_id().to_string(),
        })
    }

    /// Deferred client identifier, resolved after deployment.
    pub fn client_id(&self) -> Token {
        self.reference()
    }

    /// Reference to the pool this client authenticates against.
    pub fn pool_reference(&self) -> Token {
        Token::Ref(self.pool_logical_id.clone())
    }
}

impl CloudResource for UserPoolClient {
    fn resource_type() -> ResourceType {
        ResourceType::UserPoolClient
    }

    fn logical_id(&self) -> &str {
        &self.logical_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::Stack;
    use crate::types::PolicyProfile;
    use serde_json::json;

    fn pool_under(stack: &Stack) -> UserPool {
        let scope = stack.root().child("Auth").unwrap();
        UserPool::new(&scope, "UserPool", "prod-users", &PolicyProfile::standard()).unwrap()
    }

    #[test]
    fn test_default_client_carries_only_the_pool_link() {
        let stack = Stack::new();
        let pool = pool_under(&stack);
        let client = pool.add_client("AppClient").unwrap();
        assert_eq!(client.logical_id(), "AuthAppClient");

        let template = stack.synth().unwrap();
        let entry = template.resource("AuthAppClient").unwrap();
        assert_eq!(entry.kind(), "AWS::Cognito::UserPoolClient");
        assert_eq!(
            entry.properties(),
            &json!({"UserPoolId": {"Ref": "AuthUserPool"}})
        );
    }

    #[test]
    fn test_client_options_serialize() {
        let stack = Stack::new();
        let pool = pool_under(&stack);
        let options = ClientOptions {
            callback_urls: vec!["https://visit.example.com/callback".to_string()],
            logout_urls: vec!["https://visit.example.com/signout".to_string()],
            auth_flows: AuthFlows {
                user_password: true,
                user_srp: true,
            },
            generate_secret: Some(false),
        };
        pool.add_client_with_options("AppClient", options).unwrap();

        let template = stack.synth().unwrap();
        assert_eq!(
            template.resource("AuthAppClient").unwrap().properties(),
            &json!({
                "UserPoolId": {"Ref": "AuthUserPool"},
                "CallbackURLs": ["https://visit.example.com/callback"],
                "LogoutURLs": ["https://visit.example.com/signout"],
                "ExplicitAuthFlows": [
                    "ALLOW_USER_PASSWORD_AUTH",
                    "ALLOW_USER_SRP_AUTH",
                    "ALLOW_REFRESH_TOKEN_AUTH"
                ],
                "GenerateSecret": false
            })
        );
    }

    #[test]
    fn test_duplicate_callback_url_is_rejected() {
        let stack = Stack::new();
        let pool = pool_under(&stack);
        let options = ClientOptions {
            callback_urls: vec![
                "https://a.example.com".to_string(),
                "https://a.example.com".to_string(),
            ],
            ..ClientOptions::default()
        };
        let err = pool.add_client_with_options("AppClient", options).unwrap_err();
        assert!(matches!(err, SynthError::InvalidArgument(_)));
    }

    #[test]
    fn test_pool_reference_resolves_to_sibling_pool() {
        let stack = Stack::new();
        let pool = pool_under(&stack);
        let client = pool.add_client("AppClient").unwrap();
        assert_eq!(client.pool_reference(), pool.pool_id());
    }

    #[test]
    fn test_srp_only_flows() {
        let flows = AuthFlows {
            user_password: false,
            user_srp: true,
        };
        assert_eq!(
            flows.explicit_flows(),
            vec!["ALLOW_USER_SRP_AUTH", "ALLOW_REFRESH_TOKEN_AUTH"]
        );
        assert!(AuthFlows::default().explicit_flows().is_empty());
    }
}
