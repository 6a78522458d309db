//! Multi-factor authentication settings.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Whether the directory enforces a second factor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum MfaMode {
    Off,
    Optional,
    On,
}

/// Second factors the directory permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MfaFactors {
    pub sms: bool,
    pub otp: bool,
}

impl MfaFactors {
    /// Provider identifiers for the enabled factors.
    pub fn enabled_mfas(&self) -> Vec<&'static str> {
        let mut factors = Vec::new();
        if self.sms {
            factors.push("SMS_MFA");
        }
        if self.otp {
            factors.push("SOFTWARE_TOKEN_MFA");
        }
        factors
    }
}
