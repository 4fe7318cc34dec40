use anyhow::{Context, Result, bail};
use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::{SAVE_VERSION, SaveData};

pub fn save_to_json_string(save_data: &SaveData) -> Result<String> {
    serde_json::to_string(save_data).context("failed to serialize save data to JSON")
}

/// Parses a save, checking the version before the shape so that saves from
/// another format report the mismatch rather than a missing field.
pub fn load_from_json_string(json: &str) -> Result<SaveData> {
    let value: serde_json::Value = serde_json::from_str(json).context("failed to parse save JSON")?;
    let Some(version) = value.get("version").and_then(serde_json::Value::as_u64) else {
        bail!("save JSON has no numeric `version` field");
    };
    if version != u64::from(SAVE_VERSION) {
        bail!("unsupported save version {version}, expected {SAVE_VERSION}");
    }
    serde_json::from_value(value).context("save JSON does not match the expected shape")
}

pub fn export_to_base64(save_data: &SaveData) -> Result<String> {
    let json = save_to_json_string(save_data)?;
    Ok(STANDARD.encode(json.as_bytes()))
}

pub fn import_from_base64(encoded: &str) -> Result<SaveData> {
    let raw = STANDARD
        .decode(encoded.trim())
        .context("failed to decode base64 save payload")?;
    let json = String::from_utf8(raw).context("decoded base64 payload is not UTF-8")?;
    load_from_json_string(&json)
}
