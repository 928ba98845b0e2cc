//! BYOK eligibility gate.
//!
//! Government-cloud/enterprise accounts are always denied. Every other
//! account is granted under the default policy. Flags come from the session
//! collaborator and are evaluated fresh on every request.

use serde::{Deserialize, Serialize};

/// Account tier flags supplied by the identity/session collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountTierFlags {
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub is_individual: bool,
    #[serde(default)]
    pub is_government_cloud_enterprise: bool,
}

/// Why access was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DenialReason {
    /// Government-cloud/enterprise-restricted account.
    GovernmentCloudEnterprise,
    /// The active policy requires a tier this account does not have.
    TierNotEligible,
}

/// Outcome of an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eligibility {
    Granted,
    Denied(DenialReason),
}

impl Eligibility {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Which accounts may use BYOK.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityPolicy {
    /// Everyone except government-cloud/enterprise accounts.
    #[default]
    NonEnterprise,
    /// Internal or individual accounts only, still excluding enterprise.
    InternalOrIndividual,
}

impl EligibilityPolicy {
    pub fn evaluate(self, flags: &AccountTierFlags) -> Eligibility {
        if flags.is_government_cloud_enterprise {
            return Eligibility::Denied(DenialReason::GovernmentCloudEnterprise);
        }
        match self {
            Self::NonEnterprise => Eligibility::Granted,
            Self::InternalOrIndividual if flags.is_internal || flags.is_individual => {
                Eligibility::Granted
            }
            Self::InternalOrIndividual => Eligibility::Denied(DenialReason::TierNotEligible),
        }
    }

    pub fn is_enabled(self, flags: &AccountTierFlags) -> bool {
        self.evaluate(flags).is_granted()
    }
}

/// Default-policy check used by the model picker.
pub fn is_enabled(flags: &AccountTierFlags) -> bool {
    EligibilityPolicy::default().is_enabled(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flag_combinations() -> impl Iterator<Item = AccountTierFlags> {
        (0u8..8).map(|bits| AccountTierFlags {
            is_internal: bits & 1 != 0,
            is_individual: bits & 2 != 0,
            is_government_cloud_enterprise: bits & 4 != 0,
        })
    }

    #[test]
    fn default_policy_denies_exactly_enterprise_accounts() {
        for flags in all_flag_combinations() {
            assert_eq!(is_enabled(&flags), !flags.is_government_cloud_enterprise, "{flags:?}");
        }
    }

    #[test]
    fn enterprise_denial_wins_under_every_policy() {
        let flags = AccountTierFlags {
            is_internal: true,
            is_individual: true,
            is_government_cloud_enterprise: true,
        };
        for policy in [EligibilityPolicy::NonEnterprise, EligibilityPolicy::InternalOrIndividual] {
            assert_eq!(
                policy.evaluate(&flags),
                Eligibility::Denied(DenialReason::GovernmentCloudEnterprise)
            );
        }
    }

    #[test]
    fn legacy_policy_excludes_accounts_without_a_tier() {
        let policy = EligibilityPolicy::InternalOrIndividual;
        assert_eq!(
            policy.evaluate(&AccountTierFlags::default()),
            Eligibility::Denied(DenialReason::TierNotEligible)
        );
        let internal = AccountTierFlags {
            is_internal: true,
            ..Default::default()
        };
        assert!(policy.is_enabled(&internal));
    }

    #[test]
    fn flags_deserialize_with_missing_fields() {
        let flags: AccountTierFlags =
            serde_json::from_str(r#"{"is_government_cloud_enterprise":true}"#).unwrap();
        assert!(!is_enabled(&flags));
    }
}
