use std::fmt::Write as _;

use bevy::prelude::*;
use idle_miner::{EconomyEngine, format_amount};

use super::input::{TECH_KEYS, UPGRADE_KEYS};
use super::resources::{HudText, SessionState};

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("HudText"),
        HudText,
        Text::new("Initializing..."),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.94, 0.97, 0.99)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn refresh_hud(session: Res<SessionState>, mut hud_query: Query<&mut Text, With<HudText>>) {
    let Ok(mut hud) = hud_query.get_single_mut() else {
        return;
    };

    let mut body = hud_text(&session.engine);
    body.push('\n');
    body.push_str(&session.status_line);
    *hud = Text::new(body);
}

fn hud_text(engine: &EconomyEngine) -> String {
    let mut text = format!(
        "Minerals: {} (+{}/s)  Click power: {}\nEnergy: {} / {} (+{}/s)\nDark matter: {}  Rebirth gain: {}\n\nUpgrades\n",
        format_amount(engine.wallet.minerals),
        format_amount(engine.auto_miner_production()),
        engine.click_power,
        format_amount(engine.wallet.energy),
        format_amount(engine.energy_capacity()),
        format_amount(engine.energy_production()),
        format_amount(engine.wallet.dark_matter),
        format_amount(engine.dark_matter_gain()),
    );

    for ((_, key), (kind, upgrade)) in UPGRADE_KEYS.iter().zip(engine.upgrades.iter()) {
        let marker = if engine.can_afford_upgrade(kind) { '*' } else { ' ' };
        let _ = writeln!(
            text,
            "{marker}[{key}] {} x{}  cost {}",
            kind.label(),
            upgrade.count,
            format_amount(upgrade.cost),
        );
    }

    text.push_str("\nTech tree\n");
    for ((_, key), (kind, tech)) in TECH_KEYS.iter().zip(engine.techs.iter()) {
        let state = if tech.unlocked {
            "unlocked".to_string()
        } else {
            format!("{} dark matter", format_amount(tech.cost))
        };
        let marker = if engine.can_unlock_tech(kind) { '*' } else { ' ' };
        let _ = writeln!(text, "{marker}[{key}] {} x{}  {state}", kind.label(), tech.effect);
    }

    text.push_str(
        "\nSpace/click mine, 1-6 buy, Z/X/C unlock, R rebirth, F5 save, F9 load, F6 export, F7 import",
    );
    text
}
