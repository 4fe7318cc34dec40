use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::EconomyCatalog;

pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<EconomyCatalog> {
    let catalog: EconomyCatalog = read_json(path.as_ref(), "economy catalog")?;
    catalog
        .build_engine()
        .with_context(|| format!("invalid economy catalog: {}", path.as_ref().display()))?;
    Ok(catalog)
}

fn read_json<T>(path: &Path, label: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {label} file: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing {label} file as JSON: {}", path.display()))
}
