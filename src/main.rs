use anyhow::Result;
use std::io;

use nusantara_fishing_rs::config::{Config, CONFIG_ENV_VAR};
use nusantara_fishing_rs::console::app::App;
use nusantara_fishing_rs::engine::game::Game;
use nusantara_fishing_rs::logging;

fn main() -> Result<()> {
    // Load config
    let args: Vec<String> = std::env::args().collect();
    let config = Config::resolve(&args, std::env::var(CONFIG_ENV_VAR).ok())?;

    // Logs go to stderr; keep them quiet so they don't interleave with the menu
    logging::init(&config.system, "warn");

    let game = Game::new(config);
    let stdin = io::stdin();
    let mut app = App::new(game, stdin.lock(), io::stdout());
    app.run()
}
