//! Top-level screen switching: title, menus, play and the end screen.

use crate::config::Config;
use crate::fireworks::Fireworks;
use crate::menu::{level_select, main_menu, BallAnimation, MainMenuAction, Menu};
use crate::player::{FrameInput, Player, PlayerEvent};
use crate::registry::LevelRegistry;
use macroquad::prelude::*;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Screen currently shown.
pub enum GameState {
    /// Splash screen waiting for a key.
    Title,
    /// Main menu.
    Menu,
    /// Grid of level boxes.
    LevelSelect,
    /// A level is being played.
    Playing,
    /// Fireworks after the last level.
    End,
}

/// Everything the game reads from the input devices in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameInput {
    /// Movement keys, forwarded to the player.
    pub player: FrameInput,
    /// Escape went down this frame.
    pub escape_pressed: bool,
    /// Q went down this frame.
    pub quit_pressed: bool,
    /// Any key at all went down this frame, escape included.
    pub any_key_pressed: bool,
    /// Cursor position in window pixels.
    pub mouse: Vec2,
    /// Left button went down this frame.
    pub mouse_clicked: bool,
}

/// The whole game: levels, player, menus and the current screen.
pub struct Game {
    state: GameState,
    levels: LevelRegistry,
    player: Player,
    main_menu: Menu<MainMenuAction>,
    level_select: Menu<usize>,
    balls: BallAnimation,
    fireworks: Fireworks,
    spawn: Vec2,
    quit: bool,
}

impl Game {
    /// Starts on the title screen with level 0 active and the player at the
    /// configured spawn.
    pub fn new(config: &Config, mut levels: LevelRegistry) -> Self {
        let mut player = Player::new(config.physics);
        player.set_rect(config.spawn.position, config.spawn.size);
        levels.activate(0);
        let level_count = levels.len();

        Self {
            state: GameState::Title,
            levels,
            player,
            main_menu: main_menu(),
            level_select: level_select(level_count),
            balls: BallAnimation::default(),
            fireworks: Fireworks::new(),
            spawn: config.spawn.position,
            quit: false,
        }
    }

    /// Runs one frame of game logic and returns the sounds it asks for.
    pub fn update(&mut self, input: &GameInput) -> Vec<PlayerEvent> {
        let mut events = Vec::new();

        match self.state {
            GameState::Title => {
                if input.escape_pressed {
                    self.switch(GameState::Menu);
                } else if input.any_key_pressed {
                    self.switch(GameState::Playing);
                }
            }
            GameState::Playing => {
                if input.escape_pressed {
                    self.switch(GameState::Menu);
                }
                events = self.player.update(&input.player, &mut self.levels);
                if self.levels.finished() {
                    self.switch(GameState::End);
                }
            }
            GameState::Menu => {
                self.balls.update(input.player.dt);
                match self.main_menu.update(input.mouse, input.mouse_clicked) {
                    Some(MainMenuAction::Resume) => self.switch(GameState::Playing),
                    Some(MainMenuAction::SelectLevel) => self.switch(GameState::LevelSelect),
                    Some(MainMenuAction::Exit) => {
                        info!("quit_requested");
                        self.quit = true;
                    }
                    None => {}
                }
            }
            GameState::LevelSelect => {
                if input.escape_pressed {
                    self.switch(GameState::Menu);
                } else if let Some(level_id) =
                    self.level_select.update(input.mouse, input.mouse_clicked)
                {
                    self.levels.activate(level_id);
                    self.player.set_position(self.spawn);
                    self.switch(GameState::Playing);
                }
            }
            GameState::End => {
                self.fireworks.update();
                if input.escape_pressed || input.quit_pressed {
                    info!("quit_requested");
                    self.quit = true;
                }
            }
        }

        events
    }

    fn switch(&mut self, to: GameState) {
        info!(from = ?self.state, to = ?to, "game_state_changed");
        self.state = to;
    }

    /// Screen currently shown.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Set once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// All levels and the active one.
    pub fn levels(&self) -> &LevelRegistry {
        &self.levels
    }

    /// The player actor.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Main menu boxes with hover state.
    pub fn main_menu(&self) -> &Menu<MainMenuAction> {
        &self.main_menu
    }

    /// Level picker boxes with hover state.
    pub fn level_select(&self) -> &Menu<usize> {
        &self.level_select
    }

    /// Main menu decoration.
    pub fn balls(&self) -> &BallAnimation {
        &self.balls
    }

    /// End screen animation.
    pub fn fireworks(&self) -> &Fireworks {
        &self.fireworks
    }
}
