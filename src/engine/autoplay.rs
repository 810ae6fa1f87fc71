use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::AutomationConfig;
use crate::engine::game::Game;
use crate::engine::game_data::Rarity;
use crate::engine::player::InventoryLine;

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub casts: u32,
    pub upgrades: u32,
    pub catches_by_rarity: BTreeMap<Rarity, usize>,
    pub inventory: Vec<InventoryLine>,
    pub equipment: String,
    pub unlocked_locations: Vec<String>,
    pub completed_missions: Vec<String>,
    pub remaining_missions: Vec<String>,
}

/// Plays `automation.casts` trips without a console.
///
/// Trips rotate over the unlocked locations in unlock order, so locations
/// unlocked mid-session join the rotation. Every `upgrade_every` casts the
/// least upgraded component is upgraded.
pub fn run_session(game: &mut Game, automation: &AutomationConfig) -> SessionSummary {
    let mut casts = 0;
    let mut upgrades = 0;

    for cast in 1..=automation.casts {
        let unlocked = game.player().unlocked_locations();
        let location = unlocked[(cast as usize - 1) % unlocked.len()].clone();

        match game.go_fishing(&location) {
            Ok(trip) => {
                casts += 1;
                for done in &trip.missions.completed {
                    info!("[cast {}] mission '{}' -> {:?}", cast, done.description, done.reward);
                }
            }
            Err(e) => warn!("[cast {}] {}", cast, e),
        }

        if automation.upgrade_every > 0 && cast % automation.upgrade_every == 0 {
            if let Some(kind) = game.player().equipment.weakest_upgradable() {
                if game.upgrade(kind).is_ok() {
                    upgrades += 1;
                }
            }
        }
    }

    summarize(game, casts, upgrades)
}

fn summarize(game: &Game, casts: u32, upgrades: u32) -> SessionSummary {
    let player = game.player();
    SessionSummary {
        casts,
        upgrades,
        catches_by_rarity: Rarity::ALL
            .iter()
            .map(|&r| (r, player.count_rarity(r)))
            .collect(),
        inventory: player.inventory_summary(),
        equipment: player.equipment.status(),
        unlocked_locations: player.unlocked_locations().to_vec(),
        completed_missions: player.completed_missions().to_vec(),
        remaining_missions: player.missions().iter().map(|m| m.description.clone()).collect(),
    }
}
