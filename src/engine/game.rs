use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::engine::equipment::{ComponentKind, Equipment, UpgradeOutcome};
use crate::engine::error::GameError;
use crate::engine::game_data::Fish;
use crate::engine::location::LocationRegistry;
use crate::engine::mission::{evaluate_missions, MissionCompletion};
use crate::engine::player::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FishingTrip {
    pub location: String,
    pub caught: Fish,
    pub missions: MissionCheck,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MissionCheck {
    /// Descriptions of the missions that were active when the check started.
    pub active: Vec<String>,
    pub completed: Vec<MissionCompletion>,
}

/// Whole game state: location registry, player and the random source.
pub struct Game {
    config: Config,
    registry: LocationRegistry,
    player: Player,
    rng: StdRng,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let rng = match config.system.seed {
            Some(seed) => {
                info!("Seeding random source with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: Config, rng: StdRng) -> Self {
        let registry = LocationRegistry::new(&config.world.locations);
        let equipment = Equipment::new(config.equipment.layout, config.equipment.bonus_per_level());
        let player = Player::new(
            equipment,
            config.world.starting_location.clone(),
            config.world.missions.clone(),
        );
        debug!(
            "New game: {} locations, {} missions, {:?} equipment",
            registry.len(),
            player.missions().len(),
            config.equipment.layout
        );

        Self {
            config,
            registry,
            player,
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    /// One fishing trip at an unlocked location, followed by a mission check.
    pub fn go_fishing(&mut self, location: &str) -> Result<FishingTrip, GameError> {
        let loc = self
            .registry
            .get(location)
            .ok_or_else(|| GameError::UnknownLocation(location.to_string()))?;
        if !self.player.is_unlocked(location) {
            return Err(GameError::LocationLocked(location.to_string()));
        }

        let caught = loc.fish(&mut self.player, &mut self.rng)?;
        let missions = self.check_missions();

        Ok(FishingTrip {
            location: location.to_string(),
            caught,
            missions,
        })
    }

    pub fn upgrade(&mut self, component: ComponentKind) -> Result<UpgradeOutcome, GameError> {
        self.player.equipment.upgrade(component)
    }

    pub fn check_missions(&mut self) -> MissionCheck {
        let active = self
            .player
            .missions()
            .iter()
            .map(|m| m.description.clone())
            .collect();
        let completed = evaluate_missions(&mut self.player);
        MissionCheck { active, completed }
    }

    /// Registers a custom location and unlocks it. Returns the stored (trimmed) name.
    pub fn add_location(&mut self, name: &str) -> Result<String, GameError> {
        let custom = &self.config.custom_locations;
        let loc = self.registry.register_custom(
            name,
            &custom.fish_name_prefix,
            custom.default_fish_count,
            &mut self.player,
        )?;
        Ok(loc.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::equipment::EquipmentLayout;
    use crate::engine::game_data::Rarity;
    use crate::engine::mission::RewardOutcome;

    fn game(seed: u64) -> Game {
        Game::with_rng(Config::default(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn starts_with_one_unlocked_location_and_default_missions() {
        let g = game(1);
        assert_eq!(g.player().unlocked_locations(), &["Sungai".to_string()]);
        assert_eq!(g.player().missions().len(), 2);
        assert_eq!(g.player().equipment.layout(), EquipmentLayout::Multi);
    }

    #[test]
    fn locked_and_unknown_locations_are_rejected() {
        let mut g = game(1);
        assert_eq!(g.go_fishing("Laut").unwrap_err(), GameError::LocationLocked("Laut".into()));
        assert_eq!(g.go_fishing("Atlantis").unwrap_err(), GameError::UnknownLocation("Atlantis".into()));
        assert!(g.player().inventory().is_empty());
    }

    #[test]
    fn fishing_until_three_rare_unlocks_danau_once() {
        let mut g = game(2024);
        let mut unlocks = 0;
        for _ in 0..500 {
            let trip = g.go_fishing("Sungai").unwrap();
            unlocks += trip
                .missions
                .completed
                .iter()
                .filter(|c| c.reward == RewardOutcome::LocationUnlocked("Danau".into()))
                .count();
            if g.player().count_rarity(Rarity::Rare) >= 3 {
                break;
            }
        }
        assert_eq!(g.player().count_rarity(Rarity::Rare), 3);
        assert_eq!(unlocks, 1);
        assert!(g.player().is_unlocked("Danau"));
        assert!(g.go_fishing("Danau").is_ok());
    }

    #[test]
    fn check_missions_lists_active_before_evaluating() {
        let mut g = game(3);
        let check = g.check_missions();
        assert_eq!(check.active, vec!["Catch 3 rare fish", "Catch a legendary fish"]);
        assert!(check.completed.is_empty());
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let run = |seed| {
            let mut g = game(seed);
            (0..30)
                .map(|_| g.go_fishing("Sungai").unwrap().caught.name)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn add_location_uses_configured_defaults() {
        let mut g = game(5);
        assert_eq!(g.add_location(" Rawa ").unwrap(), "Rawa");
        assert!(g.player().is_unlocked("Rawa"));
        let trip = g.go_fishing("Rawa").unwrap();
        assert_eq!(trip.caught.rarity, Rarity::Common);
        assert!(trip.caught.name.starts_with("Ikan A-"));

        assert_eq!(g.add_location("").unwrap_err(), GameError::EmptyLocationName);
        assert_eq!(g.add_location("Rawa").unwrap_err(), GameError::DuplicateLocation("Rawa".into()));
        assert_eq!(g.registry().len(), 4);
    }

    #[test]
    fn fully_upgraded_gear_at_max_bonus_still_fishes() {
        let cfg = Config::from_toml_str(&format!(
            "[equipment]\nbonus_per_level = {}\n",
            crate::engine::equipment::MAX_BONUS_PER_LEVEL
        ))
        .unwrap();
        let mut g = Game::with_rng(cfg, StdRng::seed_from_u64(9));
        for kind in [ComponentKind::Rod, ComponentKind::Hook, ComponentKind::Line] {
            g.upgrade(kind).unwrap();
            g.upgrade(kind).unwrap();
        }
        assert_eq!(g.player().equipment.catch_bonus(), 6_000);
        for _ in 0..50 {
            g.go_fishing("Sungai").unwrap();
        }
        assert_eq!(g.player().inventory().len(), 50);
    }

    #[test]
    fn seed_from_config_is_used() {
        let mut cfg = Config::default();
        cfg.system.seed = Some(77);
        let mut a = Game::new(cfg.clone());
        let mut b = Game::new(cfg);
        for _ in 0..10 {
            assert_eq!(a.go_fishing("Sungai").unwrap().caught, b.go_fishing("Sungai").unwrap().caught);
        }
    }
}
