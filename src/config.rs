use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::equipment::{EquipmentLayout, MAX_BONUS_PER_LEVEL};
use crate::engine::game_data::{LocationSpec, DEFAULT_LOCATIONS, DEFAULT_STARTING_LOCATION};
use crate::engine::mission::{default_missions, Mission, MissionReward};

pub const CONFIG_ENV_VAR: &str = "NUSANTARA_FISHING_CONFIG";
pub const MAX_CUSTOM_FISH: usize = 100;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub system: SystemConfig,
    pub equipment: EquipmentConfig,
    pub menu: MenuConfig,
    pub custom_locations: CustomLocationConfig,
    pub automation: AutomationConfig,
    pub world: WorldConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct SystemConfig {
    /// Fixed seed for the random source; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub debug: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct EquipmentConfig {
    pub layout: EquipmentLayout,
    /// Overrides the layout's default catch bonus per equipment level.
    pub bonus_per_level: Option<u32>,
}

impl EquipmentConfig {
    pub fn bonus_per_level(&self) -> u32 {
        self.bonus_per_level
            .unwrap_or_else(|| self.layout.default_bonus_per_level())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct MenuConfig {
    pub color: bool,
    pub auto_select_single_location: bool,
    pub allow_custom_locations: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            color: true,
            auto_select_single_location: false,
            allow_custom_locations: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CustomLocationConfig {
    pub default_fish_count: usize,
    pub fish_name_prefix: String,
}

impl Default for CustomLocationConfig {
    fn default() -> Self {
        Self {
            default_fish_count: 3,
            fish_name_prefix: "Ikan A".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AutomationConfig {
    pub casts: u32,
    pub upgrade_every: u32,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            casts: 50,
            upgrade_every: 10,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub starting_location: String,
    pub locations: Vec<LocationSpec>,
    pub missions: Vec<Mission>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            starting_location: DEFAULT_STARTING_LOCATION.to_string(),
            locations: DEFAULT_LOCATIONS.clone(),
            missions: default_missions(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;

        // Trim names
        config.world.starting_location = config.world.starting_location.trim().to_string();
        for loc in &mut config.world.locations {
            loc.name = loc.name.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// `--config <path>` wins over the environment variable; neither means built-in defaults.
    pub fn resolve(args: &[String], env_path: Option<String>) -> Result<Self> {
        match locate(args, env_path)? {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let world = &self.world;
        ensure!(!world.locations.is_empty(), "world.locations must not be empty");

        let bonus_per_level = self.equipment.bonus_per_level();
        ensure!(
            bonus_per_level <= MAX_BONUS_PER_LEVEL,
            "equipment.bonus_per_level must be at most {}",
            MAX_BONUS_PER_LEVEL
        );
        let max_bonus = self.equipment.layout.max_total_level() * bonus_per_level;

        let mut seen = HashSet::new();
        for loc in &world.locations {
            ensure!(!loc.name.is_empty(), "location names must not be empty");
            ensure!(seen.insert(loc.name.as_str()), "duplicate location '{}'", loc.name);
            ensure!(!loc.fishes.is_empty(), "location '{}' has no fish", loc.name);

            // WeightedIndex sums the weights in u32
            let max_weight: u64 = loc
                .fishes
                .iter()
                .map(|f| u64::from(f.rarity.base_weight()) + u64::from(f.rarity.bonus_share(max_bonus)))
                .sum();
            ensure!(
                max_weight <= u64::from(u32::MAX),
                "location '{}' has too many fish for the catch weights",
                loc.name
            );
        }

        ensure!(
            seen.contains(world.starting_location.as_str()),
            "starting location '{}' is not in world.locations",
            world.starting_location
        );

        for mission in &world.missions {
            if let MissionReward::UnlockLocation { name } = &mission.reward {
                ensure!(
                    seen.contains(name.as_str()),
                    "mission '{}' unlocks unknown location '{}'",
                    mission.description,
                    name
                );
            }
        }

        ensure!(self.automation.upgrade_every > 0, "automation.upgrade_every must be at least 1");
        ensure!(
            (1..=MAX_CUSTOM_FISH).contains(&self.custom_locations.default_fish_count),
            "custom_locations.default_fish_count must be between 1 and {}",
            MAX_CUSTOM_FISH
        );
        ensure!(
            !self.custom_locations.fish_name_prefix.trim().is_empty(),
            "custom_locations.fish_name_prefix must not be empty"
        );
        Ok(())
    }
}

fn locate(args: &[String], env_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(idx) = args.iter().position(|a| a == "--config") {
        match args.get(idx + 1) {
            Some(path) => return Ok(Some(PathBuf::from(path))),
            None => bail!("--config needs a path"),
        }
    }
    Ok(env_path.filter(|p| !p.trim().is_empty()).map(PathBuf::from))
}
