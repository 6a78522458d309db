//! Password complexity rules.

use serde::{Deserialize, Serialize};

/// Password rules applied to the user directory.
///
/// Serializes directly into the provider's `PasswordPolicy` property shape;
/// the five fields here are exactly the five keys that end up in the
/// descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PasswordPolicy {
    pub minimum_length: u32,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    #[serde(rename = "RequireNumbers")]
    pub require_digits: bool,
    pub require_symbols: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn standard() -> PasswordPolicy {
        PasswordPolicy {
            minimum_length: 8,
            require_lowercase: true,
            require_uppercase: true,
            require_digits: true,
            require_symbols: false,
        }
    }

    #[test]
    fn test_serializes_to_provider_shape() {
        assert_eq!(
            serde_json::to_value(standard()).unwrap(),
            json!({
                "MinimumLength": 8,
                "RequireLowercase": true,
                "RequireUppercase": true,
                "RequireNumbers": true,
                "RequireSymbols": false
            })
        );
    }

    #[test]
    fn test_serialized_key_set_is_exactly_five() {
        let value = serde_json::to_value(standard()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "MinimumLength",
                "RequireLowercase",
                "RequireNumbers",
                "RequireSymbols",
                "RequireUppercase",
            ]
        );
    }

    #[test]
    fn test_round_trips_through_serde() {
        let policy = standard();
        let value = serde_json::to_value(policy).unwrap();
        let back: PasswordPolicy = serde_json::from_value(value).unwrap();
        assert_eq!(policy, back);
    }
}
