// src/lib.rs
pub use directory::{IdentityDirectory, OUTPUT_CLIENT_ID, OUTPUT_POOL_ID};
pub use error::SynthError;
pub use output::Output;
pub use resources::{AuthFlows, ClientOptions, UserPool, UserPoolClient, UserPoolDomain};
pub use scope::Scope;
pub use stack::Stack;
pub use template::{OutputEntry, ResourceEntry, Template, TEMPLATE_FORMAT_VERSION};
pub use token::Token;
pub use traits::CloudResource;
pub use types::{
    AccountRecovery, AutoVerifiedAttrs, MfaFactors, MfaMode, PasswordPolicy, PolicyProfile,
    RecoveryMechanism, ResourceType, SignInAliases,
};

pub mod metrics;

mod directory;
mod error;
mod naming;
mod output;
mod resources;
mod scope;
mod stack;
mod template;
mod token;
mod traits;
mod types;
