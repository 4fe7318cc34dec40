mod bridge;
mod codec;
mod model;
mod store;

pub use bridge::{apply_save_data, save_data_from_engine};
pub use codec::{export_to_base64, import_from_base64, load_from_json_string, save_to_json_string};
pub use model::{SAVE_VERSION, SaveData, SaveTech, SaveUpgrade};
pub use store::{
    BlobStore, FileBlobStore, LoadOutcome, MemoryBlobStore, REJECTED_SAVE_KEY, SAVE_KEY,
    TRANSFER_KEY, export_game, import_game, load_game, preserve_rejected_save, save_game,
};
