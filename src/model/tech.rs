use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TechKind {
    ImprovedMining,
    EfficientEnergy,
    AdvancedDrilling,
}

impl TechKind {
    pub const COUNT: usize = 3;

    /// All techs in display order.
    pub const ALL: [TechKind; Self::COUNT] = [
        TechKind::ImprovedMining,
        TechKind::EfficientEnergy,
        TechKind::AdvancedDrilling,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::ImprovedMining => "improved_mining",
            Self::EfficientEnergy => "efficient_energy",
            Self::AdvancedDrilling => "advanced_drilling",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.canonical_name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ImprovedMining => "Improved Mining",
            Self::EfficientEnergy => "Efficient Energy",
            Self::AdvancedDrilling => "Advanced Drilling",
        }
    }

    /// Dark matter price.
    pub fn base_cost(self) -> f64 {
        match self {
            Self::ImprovedMining => 1.0,
            Self::EfficientEnergy => 2.0,
            Self::AdvancedDrilling => 3.0,
        }
    }

    pub fn base_effect(self) -> f64 {
        match self {
            Self::ImprovedMining => 2.0,
            Self::EfficientEnergy => 2.0,
            Self::AdvancedDrilling => 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tech {
    pub unlocked: bool,
    pub cost: f64,
    pub effect: f64,
}

impl Tech {
    pub fn new(cost: f64, effect: f64) -> Self {
        Self {
            unlocked: false,
            cost,
            effect,
        }
    }

    /// The effect while unlocked, identity otherwise.
    pub fn multiplier(&self) -> f64 {
        if self.unlocked { self.effect } else { 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TechTree {
    entries: [Tech; TechKind::COUNT],
}

impl Default for TechTree {
    fn default() -> Self {
        Self {
            entries: TechKind::ALL.map(|kind| Tech::new(kind.base_cost(), kind.base_effect())),
        }
    }
}

impl TechTree {
    pub fn from_entries(entries: [Tech; TechKind::COUNT]) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TechKind, &Tech)> {
        TechKind::ALL.into_iter().zip(self.entries.iter())
    }

    pub fn is_unlocked(&self, kind: TechKind) -> bool {
        self[kind].unlocked
    }
}

impl Index<TechKind> for TechTree {
    type Output = Tech;

    fn index(&self, kind: TechKind) -> &Self::Output {
        &self.entries[kind.index()]
    }
}

impl IndexMut<TechKind> for TechTree {
    fn index_mut(&mut self, kind: TechKind) -> &mut Self::Output {
        &mut self.entries[kind.index()]
    }
}
