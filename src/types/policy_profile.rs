//! The security posture applied to a user directory declaration.

use serde::{Deserialize, Serialize};

use super::mfa::{MfaFactors, MfaMode};
use super::password_policy::PasswordPolicy;
use super::recovery::AccountRecovery;
use super::sign_in::{AutoVerifiedAttrs, SignInAliases};

/// The full posture bundle for a user directory: password rules, sign-in
/// aliases, verification, self-signup, MFA, and recovery channel.
///
/// [`IdentityDirectory`](crate::IdentityDirectory) always applies
/// [`PolicyProfile::standard`] and takes no overrides; the record type exists
/// so the pool factory stays usable with other postures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyProfile {
    pub password_policy: PasswordPolicy,
    pub sign_in_aliases: SignInAliases,
    pub auto_verify: AutoVerifiedAttrs,
    pub self_sign_up_enabled: bool,
    pub mfa: MfaMode,
    pub mfa_factors: MfaFactors,
    pub account_recovery: AccountRecovery,
}

impl PolicyProfile {
    /// The fixed posture: 8+ character passwords with mixed case and digits,
    /// sign-in by username or email with auto-verified email, admin-only user
    /// creation, optional MFA over SMS or TOTP, recovery via email.
    pub fn standard() -> Self {
        PolicyProfile {
            password_policy: PasswordPolicy {
                minimum_length: 8,
                require_lowercase: true,
                require_uppercase: true,
                require_digits: true,
                require_symbols: false,
            },
            sign_in_aliases: SignInAliases {
                username: true,
                email: true,
            },
            auto_verify: AutoVerifiedAttrs { email: true },
            self_sign_up_enabled: false,
            mfa: MfaMode::Optional,
            mfa_factors: MfaFactors {
                sms: true,
                otp: true,
            },
            account_recovery: AccountRecovery::EmailOnly,
        }
    }
}

impl Default for PolicyProfile {
    fn default() -> Self {
        Self::standard()
    }
}
