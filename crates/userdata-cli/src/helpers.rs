//! Shared CLI helpers — payload reading.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use userdata_core::raw::RawExtension;

/// Read a payload from a file, or from stdin when `source` is `-`.
///
/// `None` yields an empty payload.
pub fn read_payload(source: Option<&str>) -> Result<RawExtension> {
    let bytes = match source {
        None => Vec::new(),
        Some("-") => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read payload from stdin")?;
            buf
        }
        Some(path) => read_payload_file(Path::new(path))?,
    };

    debug!(bytes = bytes.len(), "Payload read");
    Ok(RawExtension::new(bytes))
}

fn read_payload_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read payload: {}", path.display()))
}

/// Render a raw extension as JSON text, optionally pretty-printed.
pub fn render_spec(raw: &RawExtension, pretty: bool) -> Result<String> {
    if !pretty {
        return String::from_utf8(raw.as_bytes().to_vec()).context("spec is not valid UTF-8");
    }
    let value: serde_json::Value =
        serde_json::from_slice(raw.as_bytes()).context("spec is not valid JSON")?;
    serde_json::to_string_pretty(&value).context("failed to format spec")
}
