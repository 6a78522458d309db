//! The identity directory construct.

use tracing::info;

use crate::error::SynthError;
use crate::output::Output;
use crate::resources::{UserPool, UserPoolClient};
use crate::scope::Scope;
use crate::types::PolicyProfile;

/// Logical name of the published pool identifier.
pub const OUTPUT_POOL_ID: &str = "UserPoolId";

/// Logical name of the published client identifier.
pub const OUTPUT_CLIENT_ID: &str = "UserPoolClientId";

/// A managed user directory with a fixed security posture, one application
/// client, and two published identifiers.
///
/// Instantiation is a single pass: the constructor registers a child scope
/// named `id` under `parent`, declares the user pool (always carrying
/// [`PolicyProfile::standard`] — there are no overrides) and its client
/// below that scope, and publishes [`OUTPUT_POOL_ID`] and
/// [`OUTPUT_CLIENT_ID`] on `parent`. Everything is attached before the
/// constructor returns.
///
/// Because the outputs land on the parent scope, two directories under the
/// same parent collide on output names and the second construction fails.
/// Give each instance its own parent scope when more than one is needed.
#[derive(Debug)]
pub struct IdentityDirectory {
    scope: Scope,
    user_pool: UserPool,
    user_pool_client: UserPoolClient,
}

impl IdentityDirectory {
    /// Build the construct under `parent`.
    ///
    /// Fails with [`SynthError::InvalidArgument`] for an empty or malformed
    /// `id` or `pool_name`, checked before anything is attached, so a failed
    /// call leaves `parent` untouched. Fails with [`SynthError::Framework`]
    /// when the graph refuses a registration (sibling id or output name
    /// already taken); the caller is expected to abort synthesis then.
    pub fn new(parent: &Scope, id: &str, pool_name: &str) -> Result<Self, SynthError> {
        naming_precheck(id, pool_name)?;

        let scope = parent.child(id)?;
        let user_pool = UserPool::new(&scope, "UserPool", pool_name, &PolicyProfile::standard())?;
        let user_pool_client = user_pool.add_client("AppClient")?;

        Output::new(parent, OUTPUT_POOL_ID, user_pool.pool_id())?;
        Output::new(parent, OUTPUT_CLIENT_ID, user_pool_client.client_id())?;

        info!(
            event = "Construct",
            phase = "Attached",
            path = scope.path_string(),
            pool_name
        );
        Ok(IdentityDirectory {
            scope,
            user_pool,
            user_pool_client,
        })
    }

    /// The pool declaration this construct owns.
    pub fn user_pool(&self) -> &UserPool {
        &self.user_pool
    }

    /// The client declaration this construct owns.
    pub fn user_pool_client(&self) -> &UserPoolClient {
        &self.user_pool_client
    }

    /// Path of the construct's own scope.
    pub fn path(&self) -> String {
        self.scope.path_string()
    }
}

fn naming_precheck(id: &str, pool_name: &str) -> Result<(), SynthError> {
    crate::naming::validate_logical_id(id)?;
    crate::naming::validate_pool_name(pool_name)
}
