#![warn(missing_docs)]

//! Core of Inversion, a gravity-flipping tile platformer on Macroquad.
//!
//! Level decoding, collision and the player/game state machines only use
//! Macroquad's math types, so they run without a window. `assets`, `input`
//! and `render` are the thin layer that talks to the window.

mod error;
mod ir_level;
mod loader {
    pub mod json_loader;
}
mod tile_id;

pub mod assets;
pub mod collision;
pub mod config;
pub mod fireworks;
pub mod game;
pub mod input;
pub mod mapping;
pub mod menu;
pub mod player;
pub mod registry;
pub mod render;

pub use config::Config;
pub use error::LevelError;
pub use game::{Game, GameInput, GameState};
pub use ir_level::{IrAtlas, IrLevel, IrTileLayer};
pub use loader::json_loader::{decode_level_file_to_ir, decode_level_str_to_ir};
pub use mapping::TileMapping;
pub use player::{FrameInput, Player, PlayerEvent};
pub use registry::{LevelRegistry, LevelRegistryBuilder};
pub use tile_id::TileId;
