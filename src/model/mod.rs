mod tech;
mod upgrade;

pub use tech::{Tech, TechKind, TechTree};
pub use upgrade::{Upgrade, UpgradeKind, UpgradeTable};
