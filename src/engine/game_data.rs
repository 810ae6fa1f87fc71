use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 3] = [Rarity::Common, Rarity::Rare, Rarity::Legendary];

    /// Draw weight before any equipment bonus.
    pub fn base_weight(self) -> u32 {
        match self {
            Rarity::Common => 60,
            Rarity::Rare => 30,
            Rarity::Legendary => 10,
        }
    }

    /// Share of the equipment bonus added on top of the base weight.
    /// Rare fish get the full bonus, legendary fish half of it (floored).
    pub fn bonus_share(self, bonus: u32) -> u32 {
        match self {
            Rarity::Common => 0,
            Rarity::Rare => bonus,
            Rarity::Legendary => bonus / 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Structs ---

/// A fish as it appears in a catalog and, once caught, in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fish {
    pub name: String,
    pub rarity: Rarity,
    pub location: String,
}

impl Fish {
    pub fn new(name: impl Into<String>, rarity: Rarity, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rarity,
            location: location.into(),
        }
    }
}

impl fmt::Display for Fish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rarity)
    }
}

/// Catalog entry without the location; the location is implied by the table it sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishSpec {
    pub name: String,
    pub rarity: Rarity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSpec {
    pub name: String,
    pub fishes: Vec<FishSpec>,
}

// --- Data Loading ---

lazy_static! {
    pub static ref DEFAULT_LOCATIONS: Vec<LocationSpec> = {
        let mk = |name: &str, fishes: &[(&str, Rarity)]| LocationSpec {
            name: name.to_string(),
            fishes: fishes
                .iter()
                .map(|(n, r)| FishSpec { name: n.to_string(), rarity: *r })
                .collect(),
        };

        vec![
            mk("Sungai", &[
                ("Ikan Mas", Rarity::Common),
                ("Lele", Rarity::Common),
                ("Toman", Rarity::Rare),
                ("Arwana", Rarity::Legendary),
            ]),
            mk("Danau", &[
                ("Ikan Mujair", Rarity::Common),
                ("Nila", Rarity::Common),
                ("Bawal", Rarity::Rare),
                ("Gabus", Rarity::Legendary),
            ]),
            mk("Laut", &[
                ("Kakap", Rarity::Common),
                ("Kerapu", Rarity::Common),
                ("Tuna", Rarity::Rare),
                ("Marlin", Rarity::Legendary),
            ]),
        ]
    };
}

pub const DEFAULT_STARTING_LOCATION: &str = "Sungai";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fish_display_uses_lowercase_rarity() {
        let fish = Fish::new("Lele", Rarity::Common, "Sungai");
        assert_eq!(fish.to_string(), "Lele (common)");
    }

    #[test]
    fn bonus_share_floors_for_legendary() {
        assert_eq!(Rarity::Common.bonus_share(9), 0);
        assert_eq!(Rarity::Rare.bonus_share(9), 9);
        assert_eq!(Rarity::Legendary.bonus_share(9), 4);
    }

    #[test]
    fn default_locations_are_non_empty() {
        assert_eq!(DEFAULT_LOCATIONS.len(), 3);
        assert!(DEFAULT_LOCATIONS.iter().all(|l| !l.fishes.is_empty()));
        assert!(DEFAULT_LOCATIONS.iter().any(|l| l.name == DEFAULT_STARTING_LOCATION));
    }
}
