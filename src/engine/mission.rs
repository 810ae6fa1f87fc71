use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::engine::equipment::{ComponentKind, UpgradeOutcome};
use crate::engine::game_data::Rarity;
use crate::engine::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MissionCondition {
    /// At least `at_least` fish of `rarity` in the inventory.
    RarityCount { rarity: Rarity, at_least: usize },
    /// At least `at_least` fish in the inventory, any rarity.
    TotalCatch { at_least: usize },
    /// A fish with this exact name has been caught.
    SpeciesCaught { name: String },
}

impl MissionCondition {
    pub fn is_met(&self, player: &Player) -> bool {
        match self {
            MissionCondition::RarityCount { rarity, at_least } => player.count_rarity(*rarity) >= *at_least,
            MissionCondition::TotalCatch { at_least } => player.inventory().len() >= *at_least,
            MissionCondition::SpeciesCaught { name } => player.has_species(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MissionReward {
    UnlockLocation { name: String },
    UpgradeComponent { component: ComponentKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardOutcome {
    LocationUnlocked(String),
    LocationAlreadyUnlocked(String),
    Upgrade(UpgradeOutcome),
    /// The reward names a component this equipment layout does not have.
    NoSuchComponent(ComponentKind),
}

impl MissionReward {
    pub fn apply(&self, player: &mut Player) -> RewardOutcome {
        match self {
            MissionReward::UnlockLocation { name } => {
                if player.unlock_location(name) {
                    RewardOutcome::LocationUnlocked(name.clone())
                } else {
                    RewardOutcome::LocationAlreadyUnlocked(name.clone())
                }
            }
            MissionReward::UpgradeComponent { component } => match player.equipment.upgrade(*component) {
                Ok(outcome) => RewardOutcome::Upgrade(outcome),
                Err(e) => {
                    warn!("Mission reward skipped: {}", e);
                    RewardOutcome::NoSuchComponent(*component)
                }
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub description: String,
    pub condition: MissionCondition,
    pub reward: MissionReward,
}

pub fn default_missions() -> Vec<Mission> {
    vec![
        Mission {
            description: "Catch 3 rare fish".to_string(),
            condition: MissionCondition::RarityCount { rarity: Rarity::Rare, at_least: 3 },
            reward: MissionReward::UnlockLocation { name: "Danau".to_string() },
        },
        Mission {
            description: "Catch a legendary fish".to_string(),
            condition: MissionCondition::RarityCount { rarity: Rarity::Legendary, at_least: 1 },
            reward: MissionReward::UpgradeComponent { component: ComponentKind::Rod },
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionCompletion {
    pub description: String,
    pub reward: RewardOutcome,
}

/// Runs one evaluation pass over the player's active missions.
///
/// The pass walks a snapshot of the active set, so retiring a mission never
/// disturbs the ones after it. Each satisfied mission is retired before its
/// reward is applied, and later missions see the effects of earlier rewards.
pub fn evaluate_missions(player: &mut Player) -> Vec<MissionCompletion> {
    let snapshot: Vec<Mission> = player.missions().to_vec();
    let mut completed = Vec::new();

    for mission in snapshot {
        if !mission.condition.is_met(player) {
            continue;
        }
        if !player.retire_mission(&mission) {
            continue;
        }
        info!("Mission completed: {}", mission.description);
        let reward = mission.reward.apply(player);
        completed.push(MissionCompletion {
            description: mission.description,
            reward,
        });
    }

    completed
}
