pub mod core;
pub mod data;
pub mod model;
pub mod save;

pub use crate::core::{
    COST_GROWTH, DARK_MATTER_SCALE, EconomyEngine, EconomyError, TickDeltas, Wallet,
    dark_matter_gain_for, format_amount,
};
pub use crate::data::{
    EconomyCatalog, TechDefinition, UpgradeDefinition, load_catalog_from_path,
};
pub use crate::model::{Tech, TechKind, TechTree, Upgrade, UpgradeKind, UpgradeTable};
pub use crate::save::{
    BlobStore, FileBlobStore, LoadOutcome, MemoryBlobStore, REJECTED_SAVE_KEY, SAVE_KEY,
    SAVE_VERSION, SaveData, SaveTech, SaveUpgrade, TRANSFER_KEY, apply_save_data, export_game,
    export_to_base64, import_from_base64, import_game, load_from_json_string, load_game,
    preserve_rejected_save, save_data_from_engine, save_game, save_to_json_string,
};
