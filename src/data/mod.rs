mod catalog;
mod loader;

pub(crate) use catalog::validate_effect;
pub use catalog::{EconomyCatalog, TechDefinition, UpgradeDefinition};
pub use loader::load_catalog_from_path;

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{EconomyCatalog, load_catalog_from_path};

    #[test]
    fn default_catalog_survives_json() {
        let json = serde_json::to_string_pretty(&EconomyCatalog::default()).expect("serialize");
        let parsed: EconomyCatalog = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, EconomyCatalog::default());
    }

    #[test]
    fn catalog_file_is_validated_on_load() {
        let dir = std::env::temp_dir().join(format!("idle_miner_catalog_{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("economy.json");

        let mut catalog = EconomyCatalog::default();
        catalog.upgrades[1].base_cost = 75.0;
        fs::write(&path, serde_json::to_string(&catalog).expect("serialize catalog"))
            .expect("write catalog");
        let loaded = load_catalog_from_path(&path).expect("valid catalog loads");
        assert_eq!(loaded.upgrades[1].base_cost, 75.0);

        catalog.techs.clear();
        fs::write(&path, serde_json::to_string(&catalog).expect("serialize catalog"))
            .expect("write catalog");
        assert!(load_catalog_from_path(&path).is_err());

        let _ = fs::remove_dir_all(&dir);
    }
}
