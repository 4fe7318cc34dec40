use bevy::prelude::*;
use idle_miner::{TechKind, UpgradeKind};

use super::resources::EconomyAction;

pub const UPGRADE_KEYS: [(KeyCode, &str); UpgradeKind::COUNT] = [
    (KeyCode::Digit1, "1"),
    (KeyCode::Digit2, "2"),
    (KeyCode::Digit3, "3"),
    (KeyCode::Digit4, "4"),
    (KeyCode::Digit5, "5"),
    (KeyCode::Digit6, "6"),
];

pub const TECH_KEYS: [(KeyCode, &str); TechKind::COUNT] = [
    (KeyCode::KeyZ, "Z"),
    (KeyCode::KeyX, "X"),
    (KeyCode::KeyC, "C"),
];

pub fn handle_keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    mut actions: EventWriter<EconomyAction>,
) {
    if keys.just_pressed(KeyCode::Space) {
        actions.send(EconomyAction::Click);
    }

    for ((key, _), kind) in UPGRADE_KEYS.into_iter().zip(UpgradeKind::ALL) {
        if keys.just_pressed(key) {
            actions.send(EconomyAction::BuyUpgrade(kind));
        }
    }

    for ((key, _), kind) in TECH_KEYS.into_iter().zip(TechKind::ALL) {
        if keys.just_pressed(key) {
            actions.send(EconomyAction::UnlockTech(kind));
        }
    }

    if keys.just_pressed(KeyCode::KeyR) {
        actions.send(EconomyAction::Rebirth);
    }
    if keys.just_pressed(KeyCode::F5) {
        actions.send(EconomyAction::Save);
    }
    if keys.just_pressed(KeyCode::F6) {
        actions.send(EconomyAction::Export);
    }
    if keys.just_pressed(KeyCode::F7) {
        actions.send(EconomyAction::Import);
    }
    if keys.just_pressed(KeyCode::F9) {
        actions.send(EconomyAction::Load);
    }
}

pub fn emit_mouse_actions(
    buttons: Res<ButtonInput<MouseButton>>,
    mut actions: EventWriter<EconomyAction>,
) {
    if buttons.just_pressed(MouseButton::Left) {
        actions.send(EconomyAction::Click);
    }
}
