//! Userdata core — raw extension payloads, environment lookup, and the
//! per-operating-system configs embedded in machine provisioning specs.
//!
//! # Usage
//! ```no_run
//! use userdata_core::raw::RawExtension;
//! use userdata_core::rhel;
//!
//! let raw = RawExtension::from(r#"{"distUpgradeOnBoot": true}"#);
//! let cfg = rhel::load_config_from_process_env(&raw)?;
//! let spec = cfg.spec()?;
//! # Ok::<(), userdata_core::error::ConfigError>(())
//! ```

pub mod env;
pub mod error;
pub mod raw;
pub mod rhel;

pub use env::{EnvSource, ProcessEnv};
pub use error::{ConfigError, ErrorKind};
pub use raw::RawExtension;
