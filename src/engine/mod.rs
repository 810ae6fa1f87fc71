pub mod autoplay;
pub mod equipment;
pub mod error;
pub mod game;
pub mod game_data;
pub mod location;
pub mod mission;
pub mod parser;
pub mod player;
