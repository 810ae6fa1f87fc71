use crossterm::style::{style, Stylize};
use std::io::{self, Write};

use crate::console::events::{EquipmentAction, MenuAction};
use crate::engine::equipment::{Equipment, UpgradeOutcome};
use crate::engine::error::GameError;
use crate::engine::game::MissionCheck;
use crate::engine::game_data::Fish;
use crate::engine::mission::RewardOutcome;
use crate::engine::player::Player;

pub const TITLE: &str = "=== Nusantara Fishing Adventure ===";

#[derive(Debug, Clone, Copy)]
enum Tone {
    Title,
    Good,
    Warn,
    Accent,
}

/// Applies ANSI colours when enabled, plain text otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Title => style(text).cyan().bold().to_string(),
            Tone::Good => style(text).green().to_string(),
            Tone::Warn => style(text).yellow().to_string(),
            Tone::Accent => style(text).magenta().to_string(),
        }
    }
}

pub fn draw_main_menu<W: Write>(out: &mut W, p: &Painter, actions: &[MenuAction]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", p.paint(TITLE, Tone::Title))?;
    for (i, action) in actions.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, action.label())?;
    }
    Ok(())
}

pub fn draw_location_prompt<W: Write>(out: &mut W, names: &[String]) -> io::Result<()> {
    writeln!(out, "Choose a location:")?;
    for (i, name) in names.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, name)?;
    }
    writeln!(out, "{}. Cancel", names.len() + 1)
}

pub fn draw_catch<W: Write>(out: &mut W, p: &Painter, fish: &Fish) -> io::Result<()> {
    writeln!(out, "{}", p.paint(&format!("Caught {}!", fish), Tone::Accent))
}

pub fn draw_inventory<W: Write>(out: &mut W, player: &Player) -> io::Result<()> {
    let summary = player.inventory_summary();
    if summary.is_empty() {
        return writeln!(out, "Inventory is empty.");
    }
    writeln!(out, "Fish inventory:")?;
    for line in summary {
        writeln!(out, " - {} x{}", line.label, line.count)?;
    }
    Ok(())
}

pub fn draw_equipment<W: Write>(out: &mut W, equipment: &Equipment, actions: &[EquipmentAction]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Current equipment:")?;
    writeln!(out, "{}", equipment.status())?;
    writeln!(out, "Choose a part to upgrade:")?;
    for (i, action) in actions.iter().enumerate() {
        match action {
            EquipmentAction::Upgrade(kind) => writeln!(out, "{}. {}", i + 1, kind)?,
            EquipmentAction::Back => writeln!(out, "{}. Back", i + 1)?,
        }
    }
    Ok(())
}

pub fn draw_upgrade<W: Write>(out: &mut W, p: &Painter, outcome: &UpgradeOutcome) -> io::Result<()> {
    match outcome {
        UpgradeOutcome::Upgraded { kind, tier } => {
            writeln!(out, "{}", p.paint(&format!("{} upgraded to {}!", kind, tier), Tone::Good))
        }
        UpgradeOutcome::AlreadyMax { kind } => writeln!(out, "{} is already at the highest tier.", kind),
    }
}

pub fn draw_mission_check<W: Write>(out: &mut W, p: &Painter, check: &MissionCheck) -> io::Result<()> {
    if check.active.is_empty() {
        return writeln!(out, "No active missions.");
    }
    writeln!(out, "Active missions:")?;
    for description in &check.active {
        writeln!(out, " - {}", description)?;
    }
    for done in &check.completed {
        writeln!(out, "{}", p.paint(&format!("Mission '{}' complete!", done.description), Tone::Good))?;
        match &done.reward {
            RewardOutcome::LocationUnlocked(name) => {
                writeln!(out, "{}", p.paint(&format!("Location '{}' unlocked!", name), Tone::Good))?
            }
            RewardOutcome::LocationAlreadyUnlocked(name) => {
                writeln!(out, "Location '{}' was already unlocked.", name)?
            }
            RewardOutcome::Upgrade(outcome) => draw_upgrade(out, p, outcome)?,
            RewardOutcome::NoSuchComponent(kind) => {
                writeln!(out, "{}", p.paint(&format!("Reward skipped: no {} to upgrade.", kind), Tone::Warn))?
            }
        }
    }
    Ok(())
}

pub fn draw_location_added<W: Write>(out: &mut W, p: &Painter, name: &str) -> io::Result<()> {
    writeln!(out, "{}", p.paint(&format!("Location '{}' added and unlocked!", name), Tone::Good))
}

pub fn draw_error<W: Write>(out: &mut W, p: &Painter, err: &GameError) -> io::Result<()> {
    writeln!(out, "{}", p.paint(&err.to_string(), Tone::Warn))
}

pub fn draw_invalid_choice<W: Write>(out: &mut W, p: &Painter) -> io::Result<()> {
    writeln!(out, "{}", p.paint("Invalid choice.", Tone::Warn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::equipment::{ComponentKind, EquipmentLayout};
    use crate::engine::game_data::Rarity;
    use crate::engine::mission::MissionCompletion;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn inventory_groups_and_counts() {
        let mut player = Player::new(Equipment::new(EquipmentLayout::Multi, 3), "Sungai", Vec::new());
        player.add_fish(Fish::new("Toman", Rarity::Rare, "Sungai"));
        player.add_fish(Fish::new("Lele", Rarity::Common, "Sungai"));
        player.add_fish(Fish::new("Lele", Rarity::Common, "Sungai"));

        let text = render(|out| draw_inventory(out, &player));
        assert!(text.contains(" - Lele (common) x2\n"));
        assert!(text.contains(" - Toman (rare) x1\n"));
    }

    #[test]
    fn empty_inventory_message() {
        let player = Player::new(Equipment::new(EquipmentLayout::Single, 5), "Sungai", Vec::new());
        assert_eq!(render(|out| draw_inventory(out, &player)), "Inventory is empty.\n");
    }

    #[test]
    fn plain_painter_emits_no_escape_codes() {
        let p = Painter::new(false);
        let text = render(|out| draw_invalid_choice(out, &p));
        assert_eq!(text, "Invalid choice.\n");
    }

    #[test]
    fn colored_painter_keeps_text() {
        let p = Painter::new(true);
        let text = render(|out| draw_invalid_choice(out, &p));
        assert!(text.contains("Invalid choice."));
    }

    #[test]
    fn mission_check_reports_completions() {
        let p = Painter::new(false);
        let check = MissionCheck {
            active: vec!["Catch 3 rare fish".into()],
            completed: vec![MissionCompletion {
                description: "Catch 3 rare fish".into(),
                reward: RewardOutcome::LocationUnlocked("Danau".into()),
            }],
        };
        let text = render(|out| draw_mission_check(out, &p, &check));
        assert_eq!(
            text,
            "Active missions:\n - Catch 3 rare fish\nMission 'Catch 3 rare fish' complete!\nLocation 'Danau' unlocked!\n"
        );
        let none = render(|out| draw_mission_check(out, &p, &MissionCheck::default()));
        assert_eq!(none, "No active missions.\n");
    }

    #[test]
    fn upgrade_messages() {
        let p = Painter::new(false);
        let up = UpgradeOutcome::Upgraded { kind: ComponentKind::Line, tier: "Pro" };
        let max = UpgradeOutcome::AlreadyMax { kind: ComponentKind::Rod };
        assert_eq!(render(|out| draw_upgrade(out, &p, &up)), "Line upgraded to Pro!\n");
        assert_eq!(render(|out| draw_upgrade(out, &p, &max)), "Rod is already at the highest tier.\n");
    }
}
