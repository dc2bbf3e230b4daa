//! Dynamic quota configs.
//!
//! These settings never appear in properties files. They only exist as
//! dynamic overrides attached to a client id or a user, and the schemas built
//! here describe what such an override may contain.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config_def::{ConfigDef, ConfigType, ConfigValue, Importance};
use crate::error::Result;
use crate::mechanisms::{MechanismProvider, ScramMechanisms};

pub const PRODUCER_BYTE_RATE_OVERRIDE_CONFIG: &str = "producer_byte_rate";
pub const CONSUMER_BYTE_RATE_OVERRIDE_CONFIG: &str = "consumer_byte_rate";
pub const REQUEST_PERCENTAGE_OVERRIDE_CONFIG: &str = "request_percentage";
pub const CONTROLLER_MUTATION_RATE_OVERRIDE_CONFIG: &str = "controller_mutation_rate";

pub const PRODUCER_BYTE_RATE_DOC: &str =
    "A rate representing the upper bound (bytes/sec) for producer traffic.";
pub const CONSUMER_BYTE_RATE_DOC: &str =
    "A rate representing the upper bound (bytes/sec) for consumer traffic.";
pub const REQUEST_PERCENTAGE_DOC: &str =
    "A percentage representing the upper bound of time spent for processing requests.";
pub const CONTROLLER_MUTATION_RATE_DOC: &str = "The rate at which mutations are accepted for the create \
    topics request, the create partitions request and the delete topics request. The rate is accumulated by \
    the number of partitions created or deleted.";

/// Default for byte-rate quotas: no bound
pub const DEFAULT_BYTE_RATE: i64 = i64::MAX;

/// Default for percentage and mutation-rate quotas: `i32::MAX` widened to a double
pub const DEFAULT_RATE: f64 = i32::MAX as f64;

/// Names of every quota setting, fixed for the process lifetime
pub static QUOTA_CONFIG_NAMES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        PRODUCER_BYTE_RATE_OVERRIDE_CONFIG,
        CONSUMER_BYTE_RATE_OVERRIDE_CONFIG,
        REQUEST_PERCENTAGE_OVERRIDE_CONFIG,
        CONTROLLER_MUTATION_RATE_OVERRIDE_CONFIG,
    ])
});

/// Check whether `name` is one of the quota settings (case-sensitive)
pub fn is_quota_config(name: &str) -> bool {
    QUOTA_CONFIG_NAMES.contains(name)
}

/// Documentation attached to a mechanism's credential entry
pub fn credential_doc(mechanism: &str) -> String {
    format!("User credentials for SCRAM mechanism {}", mechanism)
}

fn build_quota_config_def(def: &mut ConfigDef) -> Result<()> {
    def.define(
        PRODUCER_BYTE_RATE_OVERRIDE_CONFIG,
        ConfigType::Long,
        Some(ConfigValue::Long(DEFAULT_BYTE_RATE)),
        Importance::Medium,
        PRODUCER_BYTE_RATE_DOC,
    )?
    .define(
        CONSUMER_BYTE_RATE_OVERRIDE_CONFIG,
        ConfigType::Long,
        Some(ConfigValue::Long(DEFAULT_BYTE_RATE)),
        Importance::Medium,
        CONSUMER_BYTE_RATE_DOC,
    )?
    .define(
        REQUEST_PERCENTAGE_OVERRIDE_CONFIG,
        ConfigType::Double,
        Some(ConfigValue::Double(DEFAULT_RATE)),
        Importance::Medium,
        REQUEST_PERCENTAGE_DOC,
    )?
    .define(
        CONTROLLER_MUTATION_RATE_OVERRIDE_CONFIG,
        ConfigType::Double,
        Some(ConfigValue::Double(DEFAULT_RATE)),
        Importance::Medium,
        CONTROLLER_MUTATION_RATE_DOC,
    )?;
    Ok(())
}

/// Schema for client-id quota overrides
pub fn client_configs() -> Result<ConfigDef> {
    let mut def = ConfigDef::new();
    build_quota_config_def(&mut def)?;
    tracing::debug!(entries = def.len(), "built client quota schema");
    Ok(def)
}

/// Schema for user overrides, with credential slots for every SCRAM mechanism
pub fn user_configs() -> Result<ConfigDef> {
    user_configs_with(&ScramMechanisms::new())
}

/// Schema for user overrides, with credential slots for `provider`'s mechanisms
///
/// A provider failure is returned as-is so callers never see a schema missing
/// credential entries. A mechanism named like a quota setting is dropped and
/// the quota definition is kept.
pub fn user_configs_with(provider: &dyn MechanismProvider) -> Result<ConfigDef> {
    let mechanisms = provider.mechanism_names()?;
    let mut def = ConfigDef::new();

    for mechanism in &mechanisms {
        if is_quota_config(mechanism) {
            tracing::warn!(
                provider = provider.name(),
                mechanism = %mechanism,
                "mechanism name collides with a quota config, keeping the quota definition"
            );
            continue;
        }
        def.define(
            mechanism.as_str(),
            ConfigType::String,
            None,
            Importance::Medium,
            credential_doc(mechanism),
        )?;
    }

    build_quota_config_def(&mut def)?;
    tracing::debug!(
        provider = provider.name(),
        mechanisms = mechanisms.len(),
        entries = def.len(),
        "built user quota schema"
    );
    Ok(def)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quota_config() {
        assert!(is_quota_config("producer_byte_rate"));
        assert!(is_quota_config("consumer_byte_rate"));
        assert!(is_quota_config("request_percentage"));
        assert!(is_quota_config("controller_mutation_rate"));

        assert!(!is_quota_config("PRODUCER_BYTE_RATE"));
        assert!(!is_quota_config("producer_byte"));
        assert!(!is_quota_config(" producer_byte_rate"));
        assert!(!is_quota_config(""));
        assert!(!is_quota_config("unknown_setting"));
        assert!(!is_quota_config("SCRAM-SHA-256"));
    }

    #[test]
    fn test_defaults_saturate() {
        assert_eq!(DEFAULT_BYTE_RATE, 9_223_372_036_854_775_807);
        assert_eq!(DEFAULT_RATE, 2_147_483_647.0);
    }

    #[test]
    fn test_credential_doc() {
        assert_eq!(
            credential_doc("SCRAM-SHA-256"),
            "User credentials for SCRAM mechanism SCRAM-SHA-256"
        );
    }

    #[test]
    fn test_client_configs_order() {
        let def = client_configs().unwrap();
        assert_eq!(
            def.names().collect::<Vec<_>>(),
            vec![
                "producer_byte_rate",
                "consumer_byte_rate",
                "request_percentage",
                "controller_mutation_rate",
            ]
        );
    }

    #[test]
    fn test_user_configs_defines_mechanisms_first() {
        let def = user_configs().unwrap();
        let names: Vec<_> = def.names().collect();
        assert_eq!(&names[..2], &["SCRAM-SHA-256", "SCRAM-SHA-512"]);
        assert_eq!(def.len(), 6);
    }
}
