use thiserror::Error;

use crate::model::{TechKind, UpgradeKind};

/// Why an economy action was refused. A refused action never changes state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EconomyError {
    #[error("{} costs {cost} minerals, only {available} available", .kind.label())]
    InsufficientMinerals {
        kind: UpgradeKind,
        cost: f64,
        available: f64,
    },
    #[error("{} costs {cost} dark matter, only {available} available", .kind.label())]
    InsufficientDarkMatter {
        kind: TechKind,
        cost: f64,
        available: f64,
    },
    #[error("{} is already unlocked", .0.label())]
    AlreadyUnlocked(TechKind),
    #[error("rebirth would not yield any dark matter")]
    NoDarkMatterGain,
}
