//! Identifier validation.
//!
//! Logical identifiers travel verbatim into the synthesized descriptor, so
//! the accepted charsets are the provider's, checked up front with compiled
//! patterns.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SynthError;

/// Logical identifiers: construct ids, resource local ids, output names.
static LOGICAL_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Pool names as the managed directory service accepts them.
static POOL_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w\s+=,.@-]+$").unwrap());

/// Hosted domain prefixes: a single lowercase DNS label.
static DOMAIN_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$").unwrap());

const POOL_NAME_MAX: usize = 128;
const DOMAIN_PREFIX_MAX: usize = 63;

pub(crate) fn validate_logical_id(id: &str) -> Result<(), SynthError> {
    if id.is_empty() {
        return Err(SynthError::InvalidArgument(
            "identifier must not be empty".to_string(),
        ));
    }
    if !LOGICAL_ID.is_match(id) {
        return Err(SynthError::InvalidArgument(format!(
            "identifier '{id}' must be ASCII alphanumeric"
        )));
    }
    Ok(())
}

pub(crate) fn validate_pool_name(name: &str) -> Result<(), SynthError> {
    if name.is_empty() {
        return Err(SynthError::InvalidArgument(
            "pool name must not be empty".to_string(),
        ));
    }
    if name.len() > POOL_NAME_MAX {
        return Err(SynthError::InvalidArgument(format!(
            "pool name exceeds {POOL_NAME_MAX} characters"
        )));
    }
    if !POOL_NAME.is_match(name) {
        return Err(SynthError::InvalidArgument(format!(
            "pool name '{name}' contains unsupported characters"
        )));
    }
    Ok(())
}

pub(crate) fn validate_domain_prefix(prefix: &str) -> Result<(), SynthError> {
    if prefix.is_empty() {
        return Err(SynthError::InvalidArgument(
            "domain prefix must not be empty".to_string(),
        ));
    }
    if prefix.len() > DOMAIN_PREFIX_MAX {
        return Err(SynthError::InvalidArgument(format!(
            "domain prefix exceeds {DOMAIN_PREFIX_MAX} characters"
        )));
    }
    if !DOMAIN_PREFIX.is_match(prefix) {
        return Err(SynthError::InvalidArgument(format!(
            "domain prefix '{prefix}' must be a lowercase DNS label"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        plain = { "Auth" },
        with_digits = { "Auth2" },
        single_char = { "A" },
        all_digits = { "01" },
    )]
    fn test_valid_logical_ids(id: &str) {
        assert!(validate_logical_id(id).is_ok());
    }

    #[parameterized(
        empty = { "" },
        slash = { "Auth/Pool" },
        space = { "Auth Pool" },
        underscore = { "Auth_Pool" },
        unicode = { "Authé" },
    )]
    fn test_invalid_logical_ids(id: &str) {
        assert!(matches!(
            validate_logical_id(id),
            Err(SynthError::InvalidArgument(_))
        ));
    }

    #[parameterized(
        plain = { "prod-users" },
        spaced = { "prod users" },
        punctuated = { "prod.users@2,x=y+z" },
        underscored = { "prod_users" },
    )]
    fn test_valid_pool_names(name: &str) {
        assert!(validate_pool_name(name).is_ok());
    }

    #[parameterized(
        empty = { "" },
        pipe = { "prod|users" },
        slash = { "prod/users" },
    )]
    fn test_invalid_pool_names(name: &str) {
        assert!(matches!(
            validate_pool_name(name),
            Err(SynthError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pool_name_length_bounds() {
        assert!(validate_pool_name(&"a".repeat(128)).is_ok());
        assert!(matches!(
            validate_pool_name(&"a".repeat(129)),
            Err(SynthError::InvalidArgument(_))
        ));
    }

    #[parameterized(
        plain = { "prod-auth" },
        single = { "a" },
        digits = { "auth0" },
    )]
    fn test_valid_domain_prefixes(prefix: &str) {
        assert!(validate_domain_prefix(prefix).is_ok());
    }

    #[parameterized(
        empty = { "" },
        uppercase = { "ProdAuth" },
        underscore = { "prod_auth" },
        leading_hyphen = { "-prod" },
        trailing_hyphen = { "prod-" },
    )]
    fn test_invalid_domain_prefixes(prefix: &str) {
        assert!(matches!(
            validate_domain_prefix(prefix),
            Err(SynthError::InvalidArgument(_))
        ));
    }
}
