//! Typed resource declarations.
//!
//! Each declaration registers itself into the graph when constructed; the
//! returned handle is what the owning construct keeps.

mod user_pool;
mod user_pool_client;
mod user_pool_domain;

pub use user_pool::UserPool;
pub use user_pool_client::{AuthFlows, ClientOptions, UserPoolClient};
pub use user_pool_domain::UserPoolDomain;
