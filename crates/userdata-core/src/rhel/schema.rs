//! RHEL config schema.
//!
//! JSON uses camelCase keys, and the credential keys carry an `rhel` prefix
//! that the Rust field names drop. Empty credentials are left out of the
//! encoded form; the upgrade flag is always written.
//!
//! Decoding is lenient:
//! - an exact key match wins, otherwise keys match case-insensitively
//! - a repeated key overwrites the earlier value
//! - a `null` value leaves the field untouched
//! - unknown keys are ignored

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

const DIST_UPGRADE_ON_BOOT_KEY: &str = "distUpgradeOnBoot";
const SUBSCRIPTION_MANAGER_USER_KEY: &str = "rhelSubscriptionManagerUser";
const SUBSCRIPTION_MANAGER_PASSWORD_KEY: &str = "rhelSubscriptionManagerPassword";

/// RHEL-specific provisioning settings for one node.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Run a full distribution upgrade on first boot.
    pub dist_upgrade_on_boot: bool,
    /// Subscription manager username.
    #[serde(
        rename = "rhelSubscriptionManagerUser",
        skip_serializing_if = "String::is_empty"
    )]
    pub subscription_manager_user: String,
    /// Subscription manager password.
    #[serde(
        rename = "rhelSubscriptionManagerPassword",
        skip_serializing_if = "String::is_empty"
    )]
    pub subscription_manager_password: String,
}

// Keeps the password out of logs and panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.subscription_manager_password.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("Config")
            .field("dist_upgrade_on_boot", &self.dist_upgrade_on_boot)
            .field("subscription_manager_user", &self.subscription_manager_user)
            .field("subscription_manager_password", &password)
            .finish()
    }
}

// ─────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────

enum Field {
    DistUpgradeOnBoot,
    SubscriptionManagerUser,
    SubscriptionManagerPassword,
    Unknown,
}

impl Field {
    const ALL: [(&'static str, Field); 3] = [
        (DIST_UPGRADE_ON_BOOT_KEY, Field::DistUpgradeOnBoot),
        (SUBSCRIPTION_MANAGER_USER_KEY, Field::SubscriptionManagerUser),
        (SUBSCRIPTION_MANAGER_PASSWORD_KEY, Field::SubscriptionManagerPassword),
    ];

    fn from_key(key: &str) -> Field {
        Self::ALL
            .into_iter()
            .find(|(name, _)| *name == key)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(key))
            })
            .map_or(Field::Unknown, |(_, field)| field)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ConfigVisitor)
    }
}

struct ConfigVisitor;

impl<'de> Visitor<'de> for ConfigVisitor {
    type Value = Config;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a RHEL config object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Config, A::Error> {
        let mut config = Config::default();

        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Field::DistUpgradeOnBoot => {
                    assign(&mut config.dist_upgrade_on_boot, map.next_value()?)
                }
                Field::SubscriptionManagerUser => {
                    assign(&mut config.subscription_manager_user, map.next_value()?)
                }
                Field::SubscriptionManagerPassword => {
                    assign(&mut config.subscription_manager_password, map.next_value()?)
                }
                Field::Unknown => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(config)
    }
}

/// Overwrite `field` unless the value was `null`.
fn assign<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}
