//! Parameter types for host telemetry tools

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DiskUsageParams {
    #[schemars(description = "Filesystem path to check (default: / or C:)")]
    #[serde(default = "default_disk_path", deserialize_with = "path_or_default")]
    pub path: String,
}

/// Platform default disk path, chosen once when the tool schema is built:
/// `/` on POSIX-like hosts, `C:` on Windows.
pub fn default_disk_path() -> String {
    disk_path_for(std::env::consts::OS).to_string()
}

fn disk_path_for(os: &str) -> &'static str {
    if os == "windows" {
        "C:"
    } else {
        "/"
    }
}

/// Lenient field extraction: a missing, empty, or non-string `path` degrades
/// to the platform default instead of failing the request.
fn path_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => s,
        _ => default_disk_path(),
    })
}
