use anyhow::{Context, Result, bail, ensure};

use crate::core::EconomyEngine;
use crate::data::validate_effect;
use crate::model::{Tech, TechKind, TechTree, Upgrade, UpgradeKind, UpgradeTable};

use super::{SAVE_VERSION, SaveData, SaveTech, SaveUpgrade};

pub fn save_data_from_engine(engine: &EconomyEngine) -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        minerals: engine.wallet.minerals,
        energy: engine.wallet.energy,
        dark_matter: engine.wallet.dark_matter,
        click_power: engine.click_power,
        upgrades: engine
            .upgrades
            .iter()
            .map(|(kind, upgrade)| SaveUpgrade {
                name: kind.canonical_name().to_string(),
                count: upgrade.count,
                cost: upgrade.cost,
                power: upgrade.power,
            })
            .collect(),
        tech_tree: engine
            .techs
            .iter()
            .map(|(kind, tech)| SaveTech {
                name: kind.canonical_name().to_string(),
                unlocked: tech.unlocked,
                cost: tech.cost,
                effect: tech.effect,
            })
            .collect(),
    }
}

/// Replaces the engine's persisted state with `save`.
///
/// The save is fully validated first; on error the engine is unchanged.
pub fn apply_save_data(engine: &mut EconomyEngine, save: &SaveData) -> Result<()> {
    ensure!(
        save.version == SAVE_VERSION,
        "unsupported save version {}, expected {SAVE_VERSION}",
        save.version
    );
    for (label, amount) in [
        ("minerals", save.minerals),
        ("energy", save.energy),
        ("dark_matter", save.dark_matter),
    ] {
        ensure!(
            amount.is_finite() && amount >= 0.0,
            "save has invalid {label} amount {amount}"
        );
    }
    ensure!(save.click_power >= 1, "save has click power 0");

    let upgrades = restore_upgrades(&save.upgrades)?;
    let techs = restore_techs(&save.tech_tree)?;

    let capacity =
        engine.base_energy_capacity + upgrades[UpgradeKind::EnergyStorage].output();
    ensure!(
        save.energy <= capacity,
        "save has {} energy but capacity is {capacity}",
        save.energy
    );

    engine.wallet.minerals = save.minerals;
    engine.wallet.energy = save.energy;
    engine.wallet.dark_matter = save.dark_matter;
    engine.wallet.tick_deltas.reset();
    engine.click_power = save.click_power;
    engine.upgrades = upgrades;
    engine.techs = techs;
    Ok(())
}

fn restore_upgrades(entries: &[SaveUpgrade]) -> Result<UpgradeTable> {
    let mut slots: [Option<Upgrade>; UpgradeKind::COUNT] = [None; UpgradeKind::COUNT];
    for entry in entries {
        let Some(kind) = UpgradeKind::from_name(&entry.name) else {
            bail!("save contains unknown upgrade `{}`", entry.name);
        };
        ensure!(
            slots[kind.index()].is_none(),
            "save lists upgrade `{}` twice",
            entry.name
        );
        ensure!(
            entry.cost.is_finite() && entry.cost > 0.0,
            "save has non-positive cost {} for upgrade `{}`",
            entry.cost,
            entry.name
        );
        ensure!(
            entry.power.is_finite() && entry.power >= 0.0,
            "save has negative power {} for upgrade `{}`",
            entry.power,
            entry.name
        );
        slots[kind.index()] = Some(Upgrade {
            count: entry.count,
            cost: entry.cost,
            power: entry.power,
        });
    }

    let mut restored = [Upgrade::new(1.0, 0.0); UpgradeKind::COUNT];
    for kind in UpgradeKind::ALL {
        restored[kind.index()] = slots[kind.index()]
            .with_context(|| format!("save is missing upgrade `{}`", kind.canonical_name()))?;
    }
    Ok(UpgradeTable::from_entries(restored))
}

fn restore_techs(entries: &[SaveTech]) -> Result<TechTree> {
    let mut slots: [Option<Tech>; TechKind::COUNT] = [None; TechKind::COUNT];
    for entry in entries {
        let Some(kind) = TechKind::from_name(&entry.name) else {
            bail!("save contains unknown tech `{}`", entry.name);
        };
        ensure!(
            slots[kind.index()].is_none(),
            "save lists tech `{}` twice",
            entry.name
        );
        ensure!(
            entry.cost.is_finite() && entry.cost > 0.0,
            "save has non-positive cost {} for tech `{}`",
            entry.cost,
            entry.name
        );
        validate_effect(kind, entry.effect)?;
        slots[kind.index()] = Some(Tech {
            unlocked: entry.unlocked,
            cost: entry.cost,
            effect: entry.effect,
        });
    }

    let mut restored = [Tech::new(1.0, 1.0); TechKind::COUNT];
    for kind in TechKind::ALL {
        restored[kind.index()] = slots[kind.index()]
            .with_context(|| format!("save is missing tech `{}`", kind.canonical_name()))?;
    }
    Ok(TechTree::from_entries(restored))
}
