use tracing::{debug, info};

use crate::model::{TechKind, TechTree, Upgrade, UpgradeKind, UpgradeTable};

use super::error::EconomyError;
use super::wallet::Wallet;

/// Multiplicative price step applied on every purchase of an upgrade.
pub const COST_GROWTH: f64 = 1.15;
/// Minerals per squared unit of dark matter gained at rebirth.
pub const DARK_MATTER_SCALE: f64 = 1_000_000.0;
pub const BASE_ENERGY_CAPACITY: f64 = 100.0;
pub const BASE_CLICK_POWER: u64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct EconomyEngine {
    pub wallet: Wallet,
    pub click_power: u64,
    pub upgrades: UpgradeTable,
    pub techs: TechTree,
    pub tick_index: u64,
    pub base_click_power: u64,
    pub base_energy_capacity: f64,
}

impl Default for EconomyEngine {
    fn default() -> Self {
        Self::with_tables(
            UpgradeTable::default(),
            TechTree::default(),
            BASE_CLICK_POWER,
            BASE_ENERGY_CAPACITY,
        )
    }
}

impl EconomyEngine {
    pub fn with_tables(
        upgrades: UpgradeTable,
        techs: TechTree,
        base_click_power: u64,
        base_energy_capacity: f64,
    ) -> Self {
        Self {
            wallet: Wallet::default(),
            click_power: base_click_power,
            upgrades,
            techs,
            tick_index: 0,
            base_click_power,
            base_energy_capacity,
        }
    }

    pub fn upgrade(&self, kind: UpgradeKind) -> &Upgrade {
        &self.upgrades[kind]
    }

    pub fn click(&mut self) {
        self.wallet.add_minerals(self.click_power as f64);
    }

    pub fn tick(&mut self) {
        self.wallet.begin_tick();
        self.tick_index += 1;

        self.wallet.add_minerals(self.auto_miner_production());
        let capacity = self.energy_capacity();
        self.wallet.add_energy(self.energy_production(), capacity);
    }

    /// Runs `ticks` consecutive ticks, for timers that fell behind.
    pub fn tick_many(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.tick();
        }
        if ticks > 1 {
            debug!(ticks, tick_index = self.tick_index, "caught up on ticks");
        }
    }

    pub fn auto_miner_production(&self) -> f64 {
        let base = self.upgrades[UpgradeKind::AutoMiner].output()
            + self.upgrades[UpgradeKind::MineralRefinery].output();
        base * self.techs[TechKind::ImprovedMining].multiplier()
    }

    pub fn energy_production(&self) -> f64 {
        let base = self.upgrades[UpgradeKind::SolarPanel].output()
            + self.upgrades[UpgradeKind::FusionReactor].output();
        base * self.techs[TechKind::EfficientEnergy].multiplier()
    }

    pub fn energy_capacity(&self) -> f64 {
        self.base_energy_capacity + self.upgrades[UpgradeKind::EnergyStorage].output()
    }

    pub fn can_afford_upgrade(&self, kind: UpgradeKind) -> bool {
        self.wallet.minerals >= self.upgrades[kind].cost
    }

    pub fn can_unlock_tech(&self, kind: TechKind) -> bool {
        let tech = &self.techs[kind];
        !tech.unlocked && self.wallet.dark_matter >= tech.cost
    }

    pub fn buy_upgrade(&mut self, kind: UpgradeKind) -> Result<(), EconomyError> {
        let cost = self.upgrades[kind].cost;
        if !self.wallet.spend_minerals(cost) {
            return Err(EconomyError::InsufficientMinerals {
                kind,
                cost,
                available: self.wallet.minerals,
            });
        }

        let upgrade = &mut self.upgrades[kind];
        upgrade.count = upgrade.count.saturating_add(1);
        upgrade.cost = (upgrade.cost * COST_GROWTH).ceil();

        if kind == UpgradeKind::Drill {
            // Saturates at u64::MAX.
            self.click_power = self.click_power.saturating_add(1);
            let drilling = &self.techs[TechKind::AdvancedDrilling];
            if drilling.unlocked {
                // The +1 above already counts once toward the multiplier.
                let bonus = (drilling.effect - 1.0).max(0.0) as u64;
                self.click_power = self.click_power.saturating_add(bonus);
            }
        }

        debug!(
            kind = kind.canonical_name(),
            cost,
            count = self.upgrades[kind].count,
            next_cost = self.upgrades[kind].cost,
            "upgrade purchased"
        );
        Ok(())
    }

    pub fn unlock_tech(&mut self, kind: TechKind) -> Result<(), EconomyError> {
        let tech = self.techs[kind];
        if tech.unlocked {
            return Err(EconomyError::AlreadyUnlocked(kind));
        }
        if !self.wallet.spend_dark_matter(tech.cost) {
            return Err(EconomyError::InsufficientDarkMatter {
                kind,
                cost: tech.cost,
                available: self.wallet.dark_matter,
            });
        }

        self.techs[kind].unlocked = true;
        info!(kind = kind.canonical_name(), cost = tech.cost, "tech unlocked");
        Ok(())
    }

    pub fn dark_matter_gain(&self) -> f64 {
        dark_matter_gain_for(self.wallet.minerals)
    }

    /// Trades the current run for dark matter and returns the amount gained.
    ///
    /// Every upgrade loses its units and has its price stepped back once by
    /// [`COST_GROWTH`]; it does not return to the base price. Techs and dark
    /// matter carry over.
    pub fn rebirth(&mut self) -> Result<f64, EconomyError> {
        let gain = self.dark_matter_gain();
        if gain <= 0.0 {
            return Err(EconomyError::NoDarkMatterGain);
        }

        self.wallet.add_dark_matter(gain);
        self.wallet.reset_run();
        self.click_power = self.base_click_power;
        for (_, upgrade) in self.upgrades.iter_mut() {
            upgrade.count = 0;
            upgrade.cost = (upgrade.cost / COST_GROWTH).ceil();
        }

        info!(gain, dark_matter = self.wallet.dark_matter, "rebirth");
        Ok(gain)
    }
}

pub fn dark_matter_gain_for(minerals: f64) -> f64 {
    (minerals.max(0.0) / DARK_MATTER_SCALE).sqrt().floor()
}

#[cfg(test)]
mod tests {
    use super::{EconomyEngine, dark_matter_gain_for};
    use crate::core::EconomyError;
    use crate::model::{TechKind, UpgradeKind};

    #[test]
    fn click_adds_click_power() {
        let mut engine = EconomyEngine::default();
        engine.click_power = 4;

        engine.click();
        engine.click();

        assert_eq!(engine.wallet.minerals, 8.0);
    }

    #[test]
    fn tick_applies_production_and_tech_multipliers() {
        let mut engine = EconomyEngine::default();
        engine.upgrades[UpgradeKind::AutoMiner].count = 3;
        engine.upgrades[UpgradeKind::MineralRefinery].count = 1;
        engine.upgrades[UpgradeKind::SolarPanel].count = 2;
        engine.upgrades[UpgradeKind::FusionReactor].count = 1;
        engine.techs[TechKind::ImprovedMining].unlocked = true;

        engine.tick();

        assert_eq!(engine.tick_index, 1);
        assert_eq!(engine.wallet.minerals, (3.0 + 10.0) * 2.0);
        assert_eq!(engine.wallet.energy, 2.0 + 25.0);
        assert_eq!(engine.wallet.tick_deltas.minerals, 26.0);
    }

    #[test]
    fn buying_grows_cost_and_spends_minerals() {
        let mut engine = EconomyEngine::default();
        engine.wallet.minerals = 30.0;

        engine
            .buy_upgrade(UpgradeKind::AutoMiner)
            .expect("first auto miner is affordable");
        engine
            .buy_upgrade(UpgradeKind::AutoMiner)
            .expect("second auto miner is affordable");

        let miner = engine.upgrade(UpgradeKind::AutoMiner);
        assert_eq!(miner.count, 2);
        assert_eq!(miner.cost, 14.0);
        assert_eq!(engine.wallet.minerals, 30.0 - 10.0 - 12.0);
    }

    #[test]
    fn unaffordable_purchase_leaves_state_untouched() {
        let mut engine = EconomyEngine::default();
        engine.wallet.minerals = 9.0;
        let before = engine.clone();

        let result = engine.buy_upgrade(UpgradeKind::AutoMiner);

        assert!(matches!(
            result,
            Err(EconomyError::InsufficientMinerals { cost, .. }) if cost == 10.0
        ));
        assert_eq!(engine, before);
    }

    #[test]
    fn unlock_is_one_shot() {
        let mut engine = EconomyEngine::default();
        engine.wallet.dark_matter = 5.0;

        engine
            .unlock_tech(TechKind::ImprovedMining)
            .expect("unlock with enough dark matter");
        let after_first = engine.clone();
        let second = engine.unlock_tech(TechKind::ImprovedMining);

        assert_eq!(second, Err(EconomyError::AlreadyUnlocked(TechKind::ImprovedMining)));
        assert_eq!(engine, after_first);
        assert_eq!(engine.wallet.dark_matter, 4.0);
    }

    #[test]
    fn rebirth_without_gain_is_refused() {
        let mut engine = EconomyEngine::default();
        engine.wallet.minerals = 999_999.0;
        let before = engine.clone();

        assert_eq!(engine.rebirth(), Err(EconomyError::NoDarkMatterGain));
        assert_eq!(engine, before);
    }

    #[test]
    fn oversized_drilling_effect_saturates_click_power() {
        let mut engine = EconomyEngine::default();
        engine.wallet.minerals = 1_000.0;
        engine.techs[TechKind::AdvancedDrilling].unlocked = true;
        engine.techs[TechKind::AdvancedDrilling].effect = 1e20;

        engine
            .buy_upgrade(UpgradeKind::Drill)
            .expect("drill is affordable");
        assert_eq!(engine.click_power, u64::MAX);

        engine
            .buy_upgrade(UpgradeKind::Drill)
            .expect("second drill is affordable");
        assert_eq!(engine.click_power, u64::MAX);
    }

    #[test]
    fn click_power_at_limit_does_not_overflow() {
        let mut engine = EconomyEngine::default();
        engine.wallet.minerals = 100.0;
        engine.click_power = u64::MAX;

        engine
            .buy_upgrade(UpgradeKind::Drill)
            .expect("drill is affordable");
        engine.click();

        assert_eq!(engine.click_power, u64::MAX);
        assert!(engine.wallet.minerals > 0.0);
    }

    #[test]
    fn gain_is_floor_of_root() {
        assert_eq!(dark_matter_gain_for(0.0), 0.0);
        assert_eq!(dark_matter_gain_for(1_000_000.0), 1.0);
        assert_eq!(dark_matter_gain_for(3_999_999.0), 1.0);
        assert_eq!(dark_matter_gain_for(9_000_000.0), 3.0);
    }
}
