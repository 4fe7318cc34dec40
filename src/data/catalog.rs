use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::core::{BASE_CLICK_POWER, BASE_ENERGY_CAPACITY, EconomyEngine};
use crate::model::{Tech, TechKind, TechTree, Upgrade, UpgradeKind, UpgradeTable};

/// Starting values for a fresh economy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyCatalog {
    #[serde(default = "default_click_power")]
    pub base_click_power: u64,
    #[serde(default = "default_energy_capacity")]
    pub base_energy_capacity: f64,
    pub upgrades: Vec<UpgradeDefinition>,
    pub techs: Vec<TechDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDefinition {
    pub name: String,
    pub base_cost: f64,
    pub power: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechDefinition {
    pub name: String,
    pub cost: f64,
    pub effect: f64,
}

const fn default_click_power() -> u64 {
    BASE_CLICK_POWER
}

const fn default_energy_capacity() -> f64 {
    BASE_ENERGY_CAPACITY
}

impl Default for EconomyCatalog {
    fn default() -> Self {
        Self {
            base_click_power: BASE_CLICK_POWER,
            base_energy_capacity: BASE_ENERGY_CAPACITY,
            upgrades: UpgradeKind::ALL
                .into_iter()
                .map(|kind| UpgradeDefinition {
                    name: kind.canonical_name().to_string(),
                    base_cost: kind.base_cost(),
                    power: kind.base_power(),
                })
                .collect(),
            techs: TechKind::ALL
                .into_iter()
                .map(|kind| TechDefinition {
                    name: kind.canonical_name().to_string(),
                    cost: kind.base_cost(),
                    effect: kind.base_effect(),
                })
                .collect(),
        }
    }
}

impl EconomyCatalog {
    pub fn upgrade_table(&self) -> Result<UpgradeTable> {
        let mut slots: [Option<Upgrade>; UpgradeKind::COUNT] = [None; UpgradeKind::COUNT];
        for definition in &self.upgrades {
            let Some(kind) = UpgradeKind::from_name(&definition.name) else {
                bail!("unknown upgrade `{}` in catalog", definition.name);
            };
            ensure!(
                slots[kind.index()].is_none(),
                "upgrade `{}` defined more than once",
                definition.name
            );
            ensure!(
                definition.base_cost.is_finite() && definition.base_cost > 0.0,
                "upgrade `{}` must cost more than zero, got {}",
                definition.name,
                definition.base_cost
            );
            ensure!(
                definition.power.is_finite() && definition.power >= 0.0,
                "upgrade `{}` has negative power {}",
                definition.name,
                definition.power
            );
            slots[kind.index()] = Some(Upgrade::new(definition.base_cost, definition.power));
        }

        let mut entries = [Upgrade::new(1.0, 0.0); UpgradeKind::COUNT];
        for kind in UpgradeKind::ALL {
            entries[kind.index()] = slots[kind.index()]
                .with_context(|| format!("catalog is missing upgrade `{}`", kind.canonical_name()))?;
        }
        Ok(UpgradeTable::from_entries(entries))
    }

    pub fn tech_tree(&self) -> Result<TechTree> {
        let mut slots: [Option<Tech>; TechKind::COUNT] = [None; TechKind::COUNT];
        for definition in &self.techs {
            let Some(kind) = TechKind::from_name(&definition.name) else {
                bail!("unknown tech `{}` in catalog", definition.name);
            };
            ensure!(
                slots[kind.index()].is_none(),
                "tech `{}` defined more than once",
                definition.name
            );
            ensure!(
                definition.cost.is_finite() && definition.cost > 0.0,
                "tech `{}` must cost more than zero, got {}",
                definition.name,
                definition.cost
            );
            validate_effect(kind, definition.effect)?;
            slots[kind.index()] = Some(Tech::new(definition.cost, definition.effect));
        }

        let mut entries = [Tech::new(1.0, 1.0); TechKind::COUNT];
        for kind in TechKind::ALL {
            entries[kind.index()] = slots[kind.index()]
                .with_context(|| format!("catalog is missing tech `{}`", kind.canonical_name()))?;
        }
        Ok(TechTree::from_entries(entries))
    }

    pub fn build_engine(&self) -> Result<EconomyEngine> {
        ensure!(
            self.base_click_power >= 1,
            "base click power must be at least 1"
        );
        ensure!(
            self.base_energy_capacity.is_finite() && self.base_energy_capacity >= 0.0,
            "base energy capacity must be non-negative, got {}",
            self.base_energy_capacity
        );
        Ok(EconomyEngine::with_tables(
            self.upgrade_table()?,
            self.tech_tree()?,
            self.base_click_power,
            self.base_energy_capacity,
        ))
    }
}

/// Tech effects are multipliers and never shrink output. Advanced drilling
/// feeds integer click power, so its effect has to be a whole number.
pub(crate) fn validate_effect(kind: TechKind, effect: f64) -> Result<()> {
    ensure!(
        effect.is_finite() && effect >= 1.0,
        "tech `{}` effect must be at least 1, got {effect}",
        kind.canonical_name()
    );
    if kind == TechKind::AdvancedDrilling {
        ensure!(
            effect.fract() == 0.0,
            "tech `{}` effect must be a whole number, got {effect}",
            kind.canonical_name()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{EconomyCatalog, TechDefinition};
    use crate::core::EconomyEngine;

    #[test]
    fn default_catalog_builds_default_engine() {
        let engine = EconomyCatalog::default()
            .build_engine()
            .expect("default catalog is valid");
        assert_eq!(engine, EconomyEngine::default());
    }

    #[test]
    fn missing_and_duplicate_entries_are_rejected() {
        let mut missing = EconomyCatalog::default();
        missing.upgrades.pop();
        let err = missing.build_engine().expect_err("missing upgrade must fail");
        assert!(err.to_string().contains("energy_storage"), "{err}");

        let mut duplicate = EconomyCatalog::default();
        let first = duplicate.techs[0].clone();
        duplicate.techs.push(first);
        assert!(duplicate.build_engine().is_err());
    }

    #[test]
    fn fractional_drilling_effect_is_rejected() {
        let mut catalog = EconomyCatalog::default();
        catalog.techs[2] = TechDefinition {
            name: "advanced_drilling".to_string(),
            cost: 3.0,
            effect: 2.5,
        };
        let err = catalog.build_engine().expect_err("fractional effect must fail");
        assert!(err.to_string().contains("whole number"), "{err}");
    }

    #[test]
    fn non_positive_cost_is_rejected() {
        let mut catalog = EconomyCatalog::default();
        catalog.upgrades[0].base_cost = 0.0;
        assert!(catalog.build_engine().is_err());
    }
}
