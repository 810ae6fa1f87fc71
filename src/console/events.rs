use crate::engine::equipment::{ComponentKind, EquipmentLayout};
use crate::engine::parser::parse_selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    GoFishing,
    ViewInventory,
    Equipment,
    CheckMissions,
    AddLocation,
    Quit,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::GoFishing => "Go fishing",
            MenuAction::ViewInventory => "View inventory",
            MenuAction::Equipment => "Check & upgrade equipment",
            MenuAction::CheckMissions => "Check missions",
            MenuAction::AddLocation => "Add a new location",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Main menu entries in display order; numbering follows this order.
pub fn main_menu(allow_custom_locations: bool) -> Vec<MenuAction> {
    let mut actions = vec![
        MenuAction::GoFishing,
        MenuAction::ViewInventory,
        MenuAction::Equipment,
        MenuAction::CheckMissions,
    ];
    if allow_custom_locations {
        actions.push(MenuAction::AddLocation);
    }
    actions.push(MenuAction::Quit);
    actions
}

pub fn parse_main_menu(input: &str, actions: &[MenuAction]) -> Option<MenuAction> {
    parse_selection(input, actions.len()).map(|idx| actions[idx])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentAction {
    Upgrade(ComponentKind),
    Back,
}

pub fn equipment_menu(layout: EquipmentLayout) -> Vec<EquipmentAction> {
    layout
        .components()
        .iter()
        .map(|&kind| EquipmentAction::Upgrade(kind))
        .chain(std::iter::once(EquipmentAction::Back))
        .collect()
}

pub fn parse_equipment_menu(input: &str, actions: &[EquipmentAction]) -> Option<EquipmentAction> {
    parse_selection(input, actions.len()).map(|idx| actions[idx])
}
