use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::error::GameError;

/// Tier labels, indexed by component level.
pub const TIER_NAMES: [&str; 3] = ["Basic", "Advanced", "Pro"];
pub const MAX_LEVEL: u32 = (TIER_NAMES.len() - 1) as u32;
/// Upper bound accepted for `equipment.bonus_per_level`.
pub const MAX_BONUS_PER_LEVEL: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Rod,
    Hook,
    Line,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Rod => f.write_str("Rod"),
            ComponentKind::Hook => f.write_str("Hook"),
            ComponentKind::Line => f.write_str("Line"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentLayout {
    /// One leveled rod.
    Single,
    /// Rod, hook and line, leveled independently.
    #[default]
    Multi,
}

impl EquipmentLayout {
    pub fn components(self) -> &'static [ComponentKind] {
        match self {
            EquipmentLayout::Single => &[ComponentKind::Rod],
            EquipmentLayout::Multi => &[ComponentKind::Rod, ComponentKind::Hook, ComponentKind::Line],
        }
    }

    /// Total level with every component at the top tier.
    pub fn max_total_level(self) -> u32 {
        self.components().len() as u32 * MAX_LEVEL
    }

    pub fn default_bonus_per_level(self) -> u32 {
        match self {
            EquipmentLayout::Single => 5,
            EquipmentLayout::Multi => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeOutcome {
    Upgraded { kind: ComponentKind, tier: &'static str },
    AlreadyMax { kind: ComponentKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    kind: ComponentKind,
    level: u32,
}

impl Component {
    pub fn new(kind: ComponentKind) -> Self {
        Self { kind, level: 0 }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tier_name(&self) -> &'static str {
        TIER_NAMES[self.level as usize]
    }

    pub fn is_maxed(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    pub fn upgrade(&mut self) -> UpgradeOutcome {
        if self.is_maxed() {
            return UpgradeOutcome::AlreadyMax { kind: self.kind };
        }
        self.level += 1;
        UpgradeOutcome::Upgraded { kind: self.kind, tier: self.tier_name() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    layout: EquipmentLayout,
    components: Vec<Component>,
    bonus_per_level: u32,
}

impl Equipment {
    pub fn new(layout: EquipmentLayout, bonus_per_level: u32) -> Self {
        Self {
            layout,
            components: layout.components().iter().copied().map(Component::new).collect(),
            bonus_per_level,
        }
    }

    pub fn layout(&self) -> EquipmentLayout {
        self.layout
    }

    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.iter().find(|c| c.kind == kind)
    }

    pub fn upgrade(&mut self, kind: ComponentKind) -> Result<UpgradeOutcome, GameError> {
        let component = self
            .components
            .iter_mut()
            .find(|c| c.kind == kind)
            .ok_or(GameError::UnknownComponent(kind))?;

        let outcome = component.upgrade();
        match &outcome {
            UpgradeOutcome::Upgraded { kind, tier } => info!("{} upgraded to {}", kind, tier),
            UpgradeOutcome::AlreadyMax { kind } => debug!("{} already at max tier", kind),
        }
        Ok(outcome)
    }

    /// Sum of all component levels.
    pub fn total_level(&self) -> u32 {
        self.components.iter().map(|c| c.level).sum()
    }

    /// Catch bonus fed into the weighted draw.
    pub fn catch_bonus(&self) -> u32 {
        self.total_level() * self.bonus_per_level
    }

    /// Least upgraded component that can still be upgraded, first in layout order on ties.
    pub fn weakest_upgradable(&self) -> Option<ComponentKind> {
        self.components
            .iter()
            .filter(|c| !c.is_maxed())
            .min_by_key(|c| c.level)
            .map(|c| c.kind)
    }

    pub fn status(&self) -> String {
        self.components
            .iter()
            .map(|c| format!("{}: {}", c.kind, c.tier_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upgrade_is_monotonic_and_capped() {
        let mut eq = Equipment::new(EquipmentLayout::Single, 5);
        let mut last = 0;
        for _ in 0..10 {
            let _ = eq.upgrade(ComponentKind::Rod).unwrap();
            let level = eq.component(ComponentKind::Rod).unwrap().level();
            assert!(level >= last);
            assert!(level <= MAX_LEVEL);
            last = level;
        }
        assert_eq!(last, MAX_LEVEL);
    }

    #[test]
    fn upgrade_at_max_is_reported_noop() {
        let mut eq = Equipment::new(EquipmentLayout::Single, 5);
        eq.upgrade(ComponentKind::Rod).unwrap();
        eq.upgrade(ComponentKind::Rod).unwrap();
        assert_eq!(
            eq.upgrade(ComponentKind::Rod).unwrap(),
            UpgradeOutcome::AlreadyMax { kind: ComponentKind::Rod }
        );
        assert_eq!(eq.component(ComponentKind::Rod).unwrap().tier_name(), "Pro");
    }

    #[test]
    fn upgrade_reports_new_tier() {
        let mut eq = Equipment::new(EquipmentLayout::Multi, 3);
        assert_eq!(
            eq.upgrade(ComponentKind::Hook).unwrap(),
            UpgradeOutcome::Upgraded { kind: ComponentKind::Hook, tier: "Advanced" }
        );
    }

    #[test]
    fn single_layout_has_no_hook() {
        let mut eq = Equipment::new(EquipmentLayout::Single, 5);
        assert_eq!(
            eq.upgrade(ComponentKind::Hook),
            Err(GameError::UnknownComponent(ComponentKind::Hook))
        );
    }

    #[test]
    fn multi_layout_sums_component_levels() {
        let mut eq = Equipment::new(EquipmentLayout::Multi, 3);
        eq.upgrade(ComponentKind::Rod).unwrap();
        eq.upgrade(ComponentKind::Line).unwrap();
        eq.upgrade(ComponentKind::Line).unwrap();
        assert_eq!(eq.total_level(), 3);
        assert_eq!(eq.catch_bonus(), 9);
        assert_eq!(eq.status(), "Rod: Advanced, Hook: Basic, Line: Pro");
    }

    #[test]
    fn max_total_level_per_layout() {
        assert_eq!(EquipmentLayout::Single.max_total_level(), 2);
        assert_eq!(EquipmentLayout::Multi.max_total_level(), 6);
    }

    #[test]
    fn weakest_upgradable_skips_maxed() {
        let mut eq = Equipment::new(EquipmentLayout::Multi, 3);
        assert_eq!(eq.weakest_upgradable(), Some(ComponentKind::Rod));
        eq.upgrade(ComponentKind::Rod).unwrap();
        assert_eq!(eq.weakest_upgradable(), Some(ComponentKind::Hook));

        let mut single = Equipment::new(EquipmentLayout::Single, 5);
        single.upgrade(ComponentKind::Rod).unwrap();
        single.upgrade(ComponentKind::Rod).unwrap();
        assert_eq!(single.weakest_upgradable(), None);
    }
}
