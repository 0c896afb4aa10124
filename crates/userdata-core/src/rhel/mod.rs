//! RHEL userdata config — schema, loading with environment fallback, and
//! re-encoding to a raw extension.
//!
//! # Usage
//! ```no_run
//! use std::collections::HashMap;
//! use userdata_core::raw::RawExtension;
//! use userdata_core::rhel;
//!
//! let env = HashMap::from([
//!     ("RHEL_SUBSCRIPTION_MANAGER_USER".to_string(), "alice".to_string()),
//!     ("RHEL_SUBSCRIPTION_MANAGER_PASSWORD".to_string(), "s3cret".to_string()),
//! ]);
//! let cfg = rhel::load_config(&RawExtension::from("{}"), &env)?;
//! assert_eq!(cfg.subscription_manager_user, "alice");
//! # Ok::<(), userdata_core::error::ConfigError>(())
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, load_config_from_process_env, SUBSCRIPTION_MANAGER_PASSWORD_ENV,
    SUBSCRIPTION_MANAGER_USER_ENV,
};
pub use schema::Config;
