use crate::token::Token;
use crate::types::ResourceType;

/// Anything that contributes a provider resource declaration to the graph,
/// e.g. a user pool or an application client.
pub trait CloudResource {
    /// The provider's canonical type identifier for this declaration.
    fn resource_type() -> ResourceType
    where
        Self: Sized;

    /// Logical id the declaration was registered under.
    fn logical_id(&self) -> &str;

    /// Deferred reference to the declaration's published identifier,
    /// resolved by the deployment engine after deployment.
    fn reference(&self) -> Token {
        Token::Ref(self.logical_id().to_string())
    }
}
