mod engine;
mod error;
mod format;
mod wallet;

pub use engine::{
    BASE_CLICK_POWER, BASE_ENERGY_CAPACITY, COST_GROWTH, DARK_MATTER_SCALE, EconomyEngine,
    dark_matter_gain_for,
};
pub use error::EconomyError;
pub use format::format_amount;
pub use wallet::{TickDeltas, Wallet};
