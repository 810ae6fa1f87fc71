use log::{debug, info, warn};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::engine::error::GameError;
use crate::engine::game_data::{Fish, LocationSpec, Rarity};
use crate::engine::player::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub fishes: Vec<Fish>,
}

impl Location {
    pub fn from_spec(spec: &LocationSpec) -> Self {
        Self {
            name: spec.name.clone(),
            fishes: spec
                .fishes
                .iter()
                .map(|f| Fish::new(f.name.clone(), f.rarity, spec.name.clone()))
                .collect(),
        }
    }

    /// Draw weight of every fish in catalog order for the given equipment bonus.
    pub fn catch_weights(&self, bonus: u32) -> Vec<u32> {
        self.fishes
            .iter()
            .map(|f| f.rarity.base_weight() + f.rarity.bonus_share(bonus))
            .collect()
    }

    /// Draws one fish, weighted by rarity and the player's equipment, and adds it to the inventory.
    pub fn fish<R: Rng + ?Sized>(&self, player: &mut Player, rng: &mut R) -> Result<Fish, GameError> {
        let bonus = player.equipment.catch_bonus();
        let weights = self.catch_weights(bonus);
        debug!("{}: bonus {} -> weights {:?}", self.name, bonus, weights);

        let dist = WeightedIndex::new(&weights).map_err(|source| GameError::EmptyCatalog {
            location: self.name.clone(),
            source,
        })?;

        let caught = self.fishes[dist.sample(rng)].clone();
        info!("Caught {} at {}", caught, self.name);
        player.add_fish(caught.clone());
        Ok(caught)
    }
}

/// All known locations, in registration order.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    pub fn new(specs: &[LocationSpec]) -> Self {
        Self {
            locations: specs.iter().map(Location::from_spec).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Registers a location stocked with `fish_count` placeholder common fish
    /// named `<prefix>-1`, `<prefix>-2`, ... and unlocks it for the player.
    pub fn register_custom(
        &mut self,
        raw_name: &str,
        prefix: &str,
        fish_count: usize,
        player: &mut Player,
    ) -> Result<&Location, GameError> {
        let name = raw_name.trim();
        if name.is_empty() {
            warn!("Rejected custom location: empty name");
            return Err(GameError::EmptyLocationName);
        }
        if self.contains(name) {
            warn!("Rejected custom location: '{}' already exists", name);
            return Err(GameError::DuplicateLocation(name.to_string()));
        }

        let fishes = (1..=fish_count)
            .map(|i| Fish::new(format!("{}-{}", prefix, i), Rarity::Common, name))
            .collect();
        self.locations.push(Location { name: name.to_string(), fishes });
        player.unlock_location(name);
        info!("Registered custom location '{}'", name);

        Ok(&self.locations[self.locations.len() - 1])
    }
}
