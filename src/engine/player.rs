use log::debug;
use serde::Serialize;

use crate::engine::equipment::Equipment;
use crate::engine::game_data::{Fish, Rarity};
use crate::engine::mission::Mission;

/// One grouped inventory row: `label` is the fish's display form, e.g. `Lele (common)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryLine {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub equipment: Equipment,
    inventory: Vec<Fish>,
    missions: Vec<Mission>,
    completed_missions: Vec<String>,
    unlocked_locations: Vec<String>,
}

impl Player {
    pub fn new(equipment: Equipment, starting_location: impl Into<String>, missions: Vec<Mission>) -> Self {
        Self {
            equipment,
            inventory: Vec::new(),
            missions,
            completed_missions: Vec::new(),
            unlocked_locations: vec![starting_location.into()],
        }
    }

    // --- Inventory ---

    pub fn add_fish(&mut self, fish: Fish) {
        debug!("Inventory += {}", fish);
        self.inventory.push(fish);
    }

    pub fn inventory(&self) -> &[Fish] {
        &self.inventory
    }

    pub fn count_rarity(&self, rarity: Rarity) -> usize {
        self.inventory.iter().filter(|f| f.rarity == rarity).count()
    }

    pub fn has_species(&self, name: &str) -> bool {
        self.inventory.iter().any(|f| f.name == name)
    }

    /// Groups the inventory by display label, in order of first catch.
    pub fn inventory_summary(&self) -> Vec<InventoryLine> {
        let mut lines: Vec<InventoryLine> = Vec::new();
        for fish in &self.inventory {
            let label = fish.to_string();
            match lines.iter_mut().find(|l| l.label == label) {
                Some(line) => line.count += 1,
                None => lines.push(InventoryLine { label, count: 1 }),
            }
        }
        lines
    }

    // --- Locations ---

    pub fn unlocked_locations(&self) -> &[String] {
        &self.unlocked_locations
    }

    pub fn is_unlocked(&self, name: &str) -> bool {
        self.unlocked_locations.iter().any(|l| l == name)
    }

    /// Returns false when the location was already unlocked.
    pub fn unlock_location(&mut self, name: &str) -> bool {
        if self.is_unlocked(name) {
            return false;
        }
        self.unlocked_locations.push(name.to_string());
        true
    }

    // --- Missions ---

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn completed_missions(&self) -> &[String] {
        &self.completed_missions
    }

    /// Removes one active mission equal to `mission`. Returns false if it is no longer active.
    pub(crate) fn retire_mission(&mut self, mission: &Mission) -> bool {
        match self.missions.iter().position(|m| m == mission) {
            Some(idx) => {
                let done = self.missions.remove(idx);
                self.completed_missions.push(done.description);
                true
            }
            None => false,
        }
    }
}
