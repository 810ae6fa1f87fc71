use anyhow::Result;
use log::debug;
use std::io::{BufRead, Write};

use crate::console::events::{self, EquipmentAction, MenuAction};
use crate::console::ui::{self, Painter};
use crate::engine::game::Game;
use crate::engine::parser::parse_selection;

/// Line-driven menu loop around a [`Game`].
pub struct App<R, W> {
    game: Game,
    input: R,
    out: W,
    painter: Painter,
    menu: Vec<MenuAction>,
    pub should_quit: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(game: Game, input: R, out: W) -> Self {
        let menu_cfg = &game.config().menu;
        let painter = Painter::new(menu_cfg.color);
        let menu = events::main_menu(menu_cfg.allow_custom_locations);
        Self {
            game,
            input,
            out,
            painter,
            menu,
            should_quit: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until the player quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            self.tick()?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// One main-menu iteration.
    pub fn tick(&mut self) -> Result<()> {
        ui::draw_main_menu(&mut self.out, &self.painter, &self.menu)?;
        let line = match self.prompt("Choose an action: ")? {
            Some(line) => line,
            None => {
                debug!("Input closed, quitting");
                self.quit()?;
                return Ok(());
            }
        };

        match events::parse_main_menu(&line, &self.menu) {
            Some(MenuAction::GoFishing) => self.go_fishing()?,
            Some(MenuAction::ViewInventory) => ui::draw_inventory(&mut self.out, self.game.player())?,
            Some(MenuAction::Equipment) => self.equipment_menu()?,
            Some(MenuAction::CheckMissions) => {
                let check = self.game.check_missions();
                ui::draw_mission_check(&mut self.out, &self.painter, &check)?;
            }
            Some(MenuAction::AddLocation) => self.add_location()?,
            Some(MenuAction::Quit) => self.quit()?,
            None => ui::draw_invalid_choice(&mut self.out, &self.painter)?,
        }
        Ok(())
    }

    fn quit(&mut self) -> Result<()> {
        writeln!(self.out, "Thanks for playing!")?;
        self.should_quit = true;
        Ok(())
    }

    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn choose_location(&mut self) -> Result<Option<String>> {
        let unlocked = self.game.player().unlocked_locations().to_vec();
        if unlocked.len() == 1 && self.game.config().menu.auto_select_single_location {
            return Ok(unlocked.into_iter().next());
        }

        ui::draw_location_prompt(&mut self.out, &unlocked)?;
        let choice = self.prompt("> ")?;
        // anything but a listed location (including Cancel) is a silent cancel
        Ok(choice
            .and_then(|line| parse_selection(&line, unlocked.len()))
            .map(|idx| unlocked[idx].clone()))
    }

    fn go_fishing(&mut self) -> Result<()> {
        let Some(location) = self.choose_location()? else {
            return Ok(());
        };
        match self.game.go_fishing(&location) {
            Ok(trip) => {
                ui::draw_catch(&mut self.out, &self.painter, &trip.caught)?;
                ui::draw_mission_check(&mut self.out, &self.painter, &trip.missions)?;
            }
            Err(e) => ui::draw_error(&mut self.out, &self.painter, &e)?,
        }
        Ok(())
    }

    fn equipment_menu(&mut self) -> Result<()> {
        let actions = events::equipment_menu(self.game.player().equipment.layout());
        ui::draw_equipment(&mut self.out, &self.game.player().equipment, &actions)?;
        let Some(line) = self.prompt("> ")? else {
            return Ok(());
        };

        match events::parse_equipment_menu(&line, &actions) {
            Some(EquipmentAction::Upgrade(kind)) => match self.game.upgrade(kind) {
                Ok(outcome) => ui::draw_upgrade(&mut self.out, &self.painter, &outcome)?,
                Err(e) => ui::draw_error(&mut self.out, &self.painter, &e)?,
            },
            Some(EquipmentAction::Back) => {}
            None => ui::draw_invalid_choice(&mut self.out, &self.painter)?,
        }
        Ok(())
    }

    fn add_location(&mut self) -> Result<()> {
        writeln!(self.out, "Enter the new location name:")?;
        let Some(name) = self.prompt("> ")? else {
            return Ok(());
        };
        match self.game.add_location(&name) {
            Ok(added) => ui::draw_location_added(&mut self.out, &self.painter, &added)?,
            Err(e) => ui::draw_error(&mut self.out, &self.painter, &e)?,
        }
        Ok(())
    }
}
