//! Raw extension — an opaque JSON payload carried inside a larger
//! provisioning document, decoded later by whichever OS config owns it.
//!
//! On the wire the extension is the embedded JSON value itself (not a byte
//! array). An empty extension is written as `null`, and `null` reads back as
//! an empty extension.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque byte payload holding plugin-specific configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawExtension {
    raw: Vec<u8>,
}

impl RawExtension {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }
}

impl From<Vec<u8>> for RawExtension {
    fn from(raw: Vec<u8>) -> Self {
        Self::new(raw)
    }
}

impl From<&[u8]> for RawExtension {
    fn from(raw: &[u8]) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for RawExtension {
    fn from(raw: &str) -> Self {
        Self::new(raw.as_bytes())
    }
}

impl From<String> for RawExtension {
    fn from(raw: String) -> Self {
        Self::new(raw.into_bytes())
    }
}

impl Serialize for RawExtension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.raw.is_empty() {
            return serializer.serialize_unit();
        }
        let value: serde_json::Value =
            serde_json::from_slice(&self.raw).map_err(S::Error::custom)?;
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawExtension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::to_vec(&value)
            .map(Self::new)
            .map_err(D::Error::custom)
    }
}
