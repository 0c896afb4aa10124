//! RHEL config loader — decodes a raw extension, fills missing
//! subscription manager credentials from the environment, and encodes the
//! result back.
//!
//! # Loading rules
//! 1. Empty payload → `Config::default()`, no environment lookup
//! 2. Non-empty payload → JSON decode (unknown keys ignored)
//! 3. Empty credentials → `RHEL_SUBSCRIPTION_MANAGER_USER` /
//!    `RHEL_SUBSCRIPTION_MANAGER_PASSWORD`, required

use tracing::debug;

use super::schema::Config;
use crate::env::{EnvSource, ProcessEnv};
use crate::error::ConfigError;
use crate::raw::RawExtension;

/// Fallback source for the subscription manager username.
pub const SUBSCRIPTION_MANAGER_USER_ENV: &str = "RHEL_SUBSCRIPTION_MANAGER_USER";

/// Fallback source for the subscription manager password.
pub const SUBSCRIPTION_MANAGER_PASSWORD_ENV: &str = "RHEL_SUBSCRIPTION_MANAGER_PASSWORD";

/// Load the RHEL config from a raw extension.
///
/// An empty payload yields defaults and skips the credential fallback
/// entirely. Otherwise both credentials must end up non-empty, either from
/// the payload or from `env`.
pub fn load_config(raw: &RawExtension, env: &dyn EnvSource) -> Result<Config, ConfigError> {
    if raw.is_empty() {
        debug!("Empty RHEL payload, using defaults");
        return Ok(Config::default());
    }

    // A literal `null` payload decodes like an empty object
    let mut config = serde_json::from_slice::<Option<Config>>(raw.as_bytes())
        .map_err(ConfigError::Deserialize)?
        .unwrap_or_default();

    fill_credential(
        &mut config.subscription_manager_user,
        SUBSCRIPTION_MANAGER_USER_ENV,
        env,
    )?;
    fill_credential(
        &mut config.subscription_manager_password,
        SUBSCRIPTION_MANAGER_PASSWORD_ENV,
        env,
    )?;

    Ok(config)
}

/// Load the RHEL config, falling back to the process environment.
pub fn load_config_from_process_env(raw: &RawExtension) -> Result<Config, ConfigError> {
    load_config(raw, &ProcessEnv)
}

/// Encode the config as a raw extension (compact JSON).
pub fn spec(config: &Config) -> Result<RawExtension, ConfigError> {
    serde_json::to_vec(config)
        .map(RawExtension::new)
        .map_err(ConfigError::Serialize)
}

impl Config {
    /// See [`load_config`].
    pub fn load(raw: &RawExtension, env: &dyn EnvSource) -> Result<Self, ConfigError> {
        load_config(raw, env)
    }

    /// See [`spec`].
    pub fn spec(&self) -> Result<RawExtension, ConfigError> {
        spec(self)
    }
}

/// Fill an empty credential from `var`. Unset and empty values both count
/// as missing.
fn fill_credential(
    field: &mut String,
    var: &'static str,
    env: &dyn EnvSource,
) -> Result<(), ConfigError> {
    if !field.is_empty() {
        return Ok(());
    }

    match env.lookup(var) {
        Some(value) if !value.is_empty() => {
            debug!(var, "Credential taken from environment");
            *field = value;
            Ok(())
        }
        _ => Err(ConfigError::MissingCredential { var }),
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use std::collections::HashMap;

    fn env_with(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    fn full_env() -> HashMap<String, String> {
        env_with(&[
            (SUBSCRIPTION_MANAGER_USER_ENV, "alice"),
            (SUBSCRIPTION_MANAGER_PASSWORD_ENV, "s3cret"),
        ])
    }

    fn raw_json(value: serde_json::Value) -> RawExtension {
        RawExtension::new(serde_json::to_vec(&value).unwrap())
    }

    #[test]
    fn test_load_payload_with_credentials() {
        let raw = raw_json(json!({
            "distUpgradeOnBoot": true,
            "rhelSubscriptionManagerUser": "bob",
            "rhelSubscriptionManagerPassword": "hunter2"
        }));

        // Payload values win over the environment
        let cfg = load_config(&raw, &full_env()).unwrap();
        assert!(cfg.dist_upgrade_on_boot);
        assert_eq!(cfg.subscription_manager_user, "bob");
        assert_eq!(cfg.subscription_manager_password, "hunter2");
    }

    #[test]
    fn test_load_upgrade_flag_defaults_to_false() {
        let raw = raw_json(json!({
            "rhelSubscriptionManagerUser": "bob",
            "rhelSubscriptionManagerPassword": "hunter2"
        }));
        let cfg = load_config(&raw, &no_env()).unwrap();
        assert!(!cfg.dist_upgrade_on_boot);
    }

    #[test]
    fn test_load_empty_payload_skips_env() {
        let cfg = load_config(&RawExtension::default(), &full_env()).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(cfg.subscription_manager_user.is_empty());
        assert!(cfg.subscription_manager_password.is_empty());
    }

    #[test]
    fn test_load_credentials_from_env() {
        let cfg = load_config(&RawExtension::from("{}"), &full_env()).unwrap();
        assert!(!cfg.dist_upgrade_on_boot);
        assert_eq!(cfg.subscription_manager_user, "alice");
        assert_eq!(cfg.subscription_manager_password, "s3cret");
    }

    #[test]
    fn test_load_mixed_sources() {
        let raw = raw_json(json!({ "rhelSubscriptionManagerUser": "bob" }));
        let cfg = load_config(&raw, &full_env()).unwrap();
        assert_eq!(cfg.subscription_manager_user, "bob");
        assert_eq!(cfg.subscription_manager_password, "s3cret");
    }

    #[test]
    fn test_load_missing_user() {
        let env = env_with(&[(SUBSCRIPTION_MANAGER_PASSWORD_ENV, "s3cret")]);
        let err = load_config(&RawExtension::from(r#"{"distUpgradeOnBoot":true}"#), &env)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCredential);
        assert_eq!(err.missing_var(), Some(SUBSCRIPTION_MANAGER_USER_ENV));
        assert!(err.to_string().contains("RHEL_SUBSCRIPTION_MANAGER_USER"));
    }

    #[test]
    fn test_load_missing_password() {
        let raw = raw_json(json!({ "rhelSubscriptionManagerUser": "bob" }));
        let err = load_config(&raw, &no_env()).unwrap_err();
        assert_eq!(err.missing_var(), Some(SUBSCRIPTION_MANAGER_PASSWORD_ENV));
    }

    #[test]
    fn test_load_user_checked_before_password() {
        let err = load_config(&RawExtension::from("{}"), &no_env()).unwrap_err();
        assert_eq!(err.missing_var(), Some(SUBSCRIPTION_MANAGER_USER_ENV));
    }

    #[test]
    fn test_load_empty_env_value_is_missing() {
        let env = env_with(&[
            (SUBSCRIPTION_MANAGER_USER_ENV, ""),
            (SUBSCRIPTION_MANAGER_PASSWORD_ENV, "s3cret"),
        ]);
        let err = load_config(&RawExtension::from("{}"), &env).unwrap_err();
        assert_eq!(err.missing_var(), Some(SUBSCRIPTION_MANAGER_USER_ENV));
    }

    #[test]
    fn test_load_null_payload() {
        let cfg = load_config(&RawExtension::from("null"), &full_env()).unwrap();
        assert!(!cfg.dist_upgrade_on_boot);
        assert_eq!(cfg.subscription_manager_user, "alice");
    }

    #[test]
    fn test_load_mixed_case_keys() {
        let raw = RawExtension::from(r#"{"DistUpgradeOnBoot":true,"RHELSubscriptionManagerUser":"bob"}"#);
        let cfg = load_config(&raw, &full_env()).unwrap();
        assert!(cfg.dist_upgrade_on_boot);
        // Payload user is honored; only the password comes from the environment
        assert_eq!(cfg.subscription_manager_user, "bob");
        assert_eq!(cfg.subscription_manager_password, "s3cret");
    }

    #[test]
    fn test_load_duplicate_key_last_wins() {
        let raw = RawExtension::from(r#"{"distUpgradeOnBoot":true,"distUpgradeOnBoot":false}"#);
        let cfg = load_config(&raw, &full_env()).unwrap();
        assert!(!cfg.dist_upgrade_on_boot);
    }

    #[test]
    fn test_load_malformed_payload() {
        let err = load_config(&RawExtension::from("not valid json {{{"), &full_env())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialization);
    }

    #[test]
    fn test_load_type_mismatch() {
        let raw = raw_json(json!({ "distUpgradeOnBoot": "yes" }));
        let err = load_config(&raw, &full_env()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialization);

        let raw = raw_json(json!(["not", "an", "object"]));
        let err = load_config(&raw, &full_env()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialization);
    }

    #[test]
    fn test_load_whitespace_payload_is_malformed() {
        let err = load_config(&RawExtension::from("   "), &full_env()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialization);
    }

    #[test]
    fn test_spec_output() {
        let cfg = Config {
            dist_upgrade_on_boot: true,
            subscription_manager_user: "alice".to_string(),
            subscription_manager_password: "s3cret".to_string(),
        };
        let raw = cfg.spec().unwrap();
        let value: serde_json::Value = serde_json::from_slice(raw.as_bytes()).unwrap();
        assert_eq!(
            value,
            json!({
                "distUpgradeOnBoot": true,
                "rhelSubscriptionManagerUser": "alice",
                "rhelSubscriptionManagerPassword": "s3cret"
            })
        );
    }

    #[test]
    fn test_spec_default_config() {
        let raw = spec(&Config::default()).unwrap();
        assert_eq!(raw.as_bytes(), br#"{"distUpgradeOnBoot":false}"#);
    }

    #[test]
    fn test_spec_then_load_round_trip() {
        let loaded = load_config(
            &raw_json(json!({ "distUpgradeOnBoot": true })),
            &full_env(),
        )
        .unwrap();

        // Reload with an empty environment: everything must come from the encoded payload
        let reloaded = Config::load(&loaded.spec().unwrap(), &no_env()).unwrap();
        assert_eq!(reloaded, loaded);
    }

    #[test]
    fn test_load_from_process_env() {
        std::env::set_var(SUBSCRIPTION_MANAGER_USER_ENV, "proc-user");
        std::env::set_var(SUBSCRIPTION_MANAGER_PASSWORD_ENV, "proc-pass");
        let result = load_config_from_process_env(&RawExtension::from("{}"));
        std::env::remove_var(SUBSCRIPTION_MANAGER_USER_ENV);
        std::env::remove_var(SUBSCRIPTION_MANAGER_PASSWORD_ENV);

        let cfg = result.unwrap();
        assert_eq!(cfg.subscription_manager_user, "proc-user");
        assert_eq!(cfg.subscription_manager_password, "proc-pass");
    }
}
