//! Account recovery channel configuration.

use serde::{Deserialize, Serialize};

/// How a user regains access to their account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountRecovery {
    EmailOnly,
    PhoneOnly,
    EmailAndPhone,
}

/// One entry of the recovery mechanism list. Lower priority wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecoveryMechanism {
    pub name: String,
    pub priority: u32,
}

impl RecoveryMechanism {
    fn new(name: &str, priority: u32) -> Self {
        Self {
            name: name.to_string(),
            priority,
        }
    }
}

impl AccountRecovery {
    /// Recovery mechanisms in priority order, as the provider expects them.
    pub fn mechanisms(&self) -> Vec<RecoveryMechanism> {
        match self {
            AccountRecovery::EmailOnly => vec![RecoveryMechanism::new("verified_email", 1)],
            AccountRecovery::PhoneOnly => {
                vec![RecoveryMechanism::new("verified_phone_number", 1)]
            }
            AccountRecovery::EmailAndPhone => vec![
                RecoveryMechanism::new("verified_email", 1),
                RecoveryMechanism::new("verified_phone_number", 2),
            ],
        }
    }
}
