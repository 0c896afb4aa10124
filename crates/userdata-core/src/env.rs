//! Environment lookup — the capability config loaders use to resolve
//! fallback values, injected so tests never touch process state.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only source of environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` if it is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The real process environment.
///
/// Variables whose value is not valid UTF-8 are reported as unset.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
