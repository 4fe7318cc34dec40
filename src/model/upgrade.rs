use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UpgradeKind {
    AutoMiner,
    Drill,
    MineralRefinery,
    SolarPanel,
    FusionReactor,
    EnergyStorage,
}

impl UpgradeKind {
    pub const COUNT: usize = 6;

    /// All upgrade kinds in display order.
    pub const ALL: [UpgradeKind; Self::COUNT] = [
        UpgradeKind::AutoMiner,
        UpgradeKind::Drill,
        UpgradeKind::MineralRefinery,
        UpgradeKind::SolarPanel,
        UpgradeKind::FusionReactor,
        UpgradeKind::EnergyStorage,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::AutoMiner => "auto_miner",
            Self::Drill => "drill",
            Self::MineralRefinery => "mineral_refinery",
            Self::SolarPanel => "solar_panel",
            Self::FusionReactor => "fusion_reactor",
            Self::EnergyStorage => "energy_storage",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.canonical_name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AutoMiner => "Auto Miner",
            Self::Drill => "Drill",
            Self::MineralRefinery => "Mineral Refinery",
            Self::SolarPanel => "Solar Panel",
            Self::FusionReactor => "Fusion Reactor",
            Self::EnergyStorage => "Energy Storage",
        }
    }

    /// Cost of the first unit.
    pub fn base_cost(self) -> f64 {
        match self {
            Self::AutoMiner => 10.0,
            Self::Drill => 50.0,
            Self::MineralRefinery => 500.0,
            Self::SolarPanel => 25.0,
            Self::FusionReactor => 2_000.0,
            Self::EnergyStorage => 100.0,
        }
    }

    /// Output per unit: minerals/s for miners, energy/s for generators,
    /// capacity for storage. Drills add click power instead.
    pub fn base_power(self) -> f64 {
        match self {
            Self::AutoMiner => 1.0,
            Self::Drill => 1.0,
            Self::MineralRefinery => 10.0,
            Self::SolarPanel => 1.0,
            Self::FusionReactor => 25.0,
            Self::EnergyStorage => 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Upgrade {
    pub count: u32,
    pub cost: f64,
    pub power: f64,
}

impl Upgrade {
    pub fn new(cost: f64, power: f64) -> Self {
        Self {
            count: 0,
            cost,
            power,
        }
    }

    pub fn output(&self) -> f64 {
        f64::from(self.count) * self.power
    }
}

/// Upgrade records keyed by [`UpgradeKind`], iterated in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeTable {
    entries: [Upgrade; UpgradeKind::COUNT],
}

impl Default for UpgradeTable {
    fn default() -> Self {
        Self {
            entries: UpgradeKind::ALL.map(|kind| Upgrade::new(kind.base_cost(), kind.base_power())),
        }
    }
}

impl UpgradeTable {
    pub fn from_entries(entries: [Upgrade; UpgradeKind::COUNT]) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (UpgradeKind, &Upgrade)> {
        UpgradeKind::ALL.into_iter().zip(self.entries.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (UpgradeKind, &mut Upgrade)> {
        UpgradeKind::ALL.into_iter().zip(self.entries.iter_mut())
    }
}

impl Index<UpgradeKind> for UpgradeTable {
    type Output = Upgrade;

    fn index(&self, kind: UpgradeKind) -> &Self::Output {
        &self.entries[kind.index()]
    }
}

impl IndexMut<UpgradeKind> for UpgradeTable {
    fn index_mut(&mut self, kind: UpgradeKind) -> &mut Self::Output {
        &mut self.entries[kind.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::{UpgradeKind, UpgradeTable};

    #[test]
    fn names_round_trip_through_from_name() {
        for kind in UpgradeKind::ALL {
            assert_eq!(UpgradeKind::from_name(kind.canonical_name()), Some(kind));
        }
        assert_eq!(UpgradeKind::from_name("autoClicker"), None);
    }

    #[test]
    fn table_iterates_in_display_order() {
        let table = UpgradeTable::default();
        let order: Vec<_> = table.iter().map(|(kind, _)| kind).collect();
        assert_eq!(order, UpgradeKind::ALL.to_vec());
        assert!(table.iter().all(|(_, upgrade)| upgrade.count == 0));
        assert_eq!(table[UpgradeKind::EnergyStorage].power, 100.0);
    }
}
