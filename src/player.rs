//! The player actor: movement state machine, gravity flipping, respawns and
//! level exits.

use crate::collision;
use crate::config::{PhysicsConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::registry::LevelRegistry;
use macroquad::prelude::*;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Movement phase of the player.
pub enum MovementState {
    /// Standing on the floor.
    Idle,
    /// Moving along the floor.
    Run,
    /// Lasts exactly one frame after take-off.
    JumpStart,
    /// Rising after take-off.
    JumpUp,
    /// In the air, heading toward the floor.
    Fall,
}

/// Face shown on top of the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    /// Shown while standing.
    Happy,
    /// Sad face; no movement phase selects it.
    Sad,
    /// Falling.
    Fear,
}

/// Input sampled once at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// -1 left, 0 none, +1 right.
    pub direction: i8,
    /// Jump key is down.
    pub jump_held: bool,
    /// True only on the frame the flip key went down.
    pub flip_pressed: bool,
    /// Seconds since the previous frame.
    pub dt: f32,
}

/// Side effects of a player update, for the audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerEvent {
    /// Left the floor.
    Jump,
    /// Gravity was inverted.
    Flip,
    /// Reached the goal.
    Win,
}

/// Area above the goal flag that ends the level, bounds inclusive.
pub fn goal_trigger(goal: Vec2) -> Rect {
    Rect::new(goal.x - 10.0, goal.y - 80.0, 20.0, 20.0)
}

#[derive(Debug, Clone)]
/// The player actor: hitbox, motion and state machine.
pub struct Player {
    rect: Rect,
    start_position: Vec2,
    velocity: Vec2,
    flipped: bool,
    gravity: f32,
    movement_state: MovementState,
    emotion: Emotion,
    on_ground: bool,
    physics: PhysicsConfig,
}

impl Player {
    /// A player at the origin with an empty hitbox; place it with
    /// [`Player::set_rect`].
    pub fn new(physics: PhysicsConfig) -> Self {
        Self {
            rect: Rect::default(),
            start_position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            flipped: false,
            gravity: physics.gravity.abs(),
            movement_state: MovementState::Idle,
            emotion: Emotion::Happy,
            on_ground: false,
            physics,
        }
    }

    /// Places the player and makes `position` its respawn point.
    pub fn set_rect(&mut self, position: Vec2, size: Vec2) {
        self.rect = Rect::new(position.x, position.y, size.x, size.y);
        self.start_position = position;
        self.emotion = Emotion::Happy;
    }

    /// Moves the player and its respawn point, keeping its size.
    pub fn set_position(&mut self, position: Vec2) {
        self.rect.x = position.x;
        self.rect.y = position.y;
        self.start_position = position;
    }

    /// Top-left of the hitbox.
    pub fn position(&self) -> Vec2 {
        self.rect.point()
    }

    /// Hitbox.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Respawn point.
    pub fn start_position(&self) -> Vec2 {
        self.start_position
    }

    /// Velocity in px/s.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Gravity points toward negative y.
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// Signed gravity; negative when flipped.
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Current movement phase.
    pub fn movement_state(&self) -> MovementState {
        self.movement_state
    }

    /// Face to draw.
    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    /// Ground contact as of the end of the last update.
    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Advances the player by one frame against the active level.
    pub fn update(&mut self, input: &FrameInput, levels: &mut LevelRegistry) -> Vec<PlayerEvent> {
        let dt = input.dt;
        let mut events = Vec::new();

        if self.out_of_bounds() {
            self.rect.x = self.start_position.x;
            self.rect.y = self.start_position.y;
            self.flipped = false;
            self.velocity = Vec2::ZERO;
            self.gravity = self.gravity.abs();
            debug!(x = self.rect.x, y = self.rect.y, "player_out_of_bounds");
        }

        // Both collision passes work on the same candidate, computed from the
        // velocity the frame started with.
        let mut candidate = self.rect;
        candidate.x += self.velocity.x * dt;
        candidate.y += self.velocity.y * dt;

        let obstacles = &levels.active().collision_rects;
        let mut on_ground =
            collision::resolve(&mut candidate, &mut self.velocity, obstacles, self.flipped);

        if input.flip_pressed
            && matches!(self.movement_state, MovementState::Idle | MovementState::Run)
            && on_ground
        {
            self.flipped = !self.flipped;
            self.gravity = -self.gravity;
            self.velocity.x = 0.0;
            events.push(PlayerEvent::Flip);
            debug!(flipped = self.flipped, "gravity_flipped");
        }

        let direction = f32::from(input.direction.signum());
        match self.movement_state {
            MovementState::Idle => {
                self.emotion = Emotion::Happy;
                if input.jump_held && on_ground {
                    self.movement_state = MovementState::JumpStart;
                    self.velocity.y = self.launch_velocity();
                } else if direction != 0.0 {
                    self.movement_state = MovementState::Run;
                    self.velocity.x = direction * self.physics.move_speed;
                } else {
                    self.velocity.x = 0.0;
                }
            }
            MovementState::Run => {
                if input.jump_held && on_ground {
                    self.movement_state = MovementState::JumpStart;
                    self.velocity.y = self.launch_velocity();
                    self.velocity.x *= self.physics.jump_boost;
                } else if direction == 0.0 {
                    self.movement_state = MovementState::Idle;
                    self.velocity.x = 0.0;
                } else {
                    self.velocity.x = direction * self.physics.move_speed;
                }
            }
            MovementState::JumpStart => {
                events.push(PlayerEvent::Jump);
                self.movement_state = if self.rising_speed() >= 0.0 {
                    MovementState::JumpUp
                } else {
                    MovementState::Fall
                };
            }
            MovementState::JumpUp => {
                self.velocity.y += self.down() * self.physics.jump_up_acceleration * dt;
                if self.rising_speed() <= 0.0 {
                    self.movement_state = MovementState::Fall;
                }
            }
            MovementState::Fall => {
                self.emotion = Emotion::Fear;
                self.velocity.y += self.gravity * dt;
            }
        }

        self.velocity.y += self.gravity * dt;

        let obstacles = &levels.active().collision_rects;
        on_ground |= collision::resolve(&mut candidate, &mut self.velocity, obstacles, self.flipped);

        let goal = goal_trigger(levels.active().goal_position);
        if contains_inclusive(&goal, self.position()) {
            self.rect.x = self.start_position.x;
            self.rect.y = self.start_position.y;
            candidate.x = self.start_position.x;
            candidate.y = self.start_position.y;
            info!(level_id = levels.active_id(), "goal_reached");
            levels.advance();
            events.push(PlayerEvent::Win);
        }

        if on_ground {
            if matches!(
                self.movement_state,
                MovementState::Fall | MovementState::JumpUp
            ) {
                self.movement_state = MovementState::Idle;
            }
        } else if self.movement_state == MovementState::Idle {
            self.movement_state = MovementState::Fall;
        }

        self.rect.x = candidate.x;
        self.rect.y = candidate.y;
        self.on_ground = on_ground;

        events
    }

    fn out_of_bounds(&self) -> bool {
        self.rect.x <= -self.rect.w
            || self.rect.x >= SCREEN_WIDTH
            || self.rect.y < 0.0
            || self.rect.y >= SCREEN_HEIGHT
    }

    /// +1 when gravity pulls toward +y, -1 when flipped.
    fn down(&self) -> f32 {
        if self.flipped {
            -1.0
        } else {
            1.0
        }
    }

    fn launch_velocity(&self) -> f32 {
        self.down() * self.physics.jump_velocity
    }

    /// Speed away from the floor; negative once the actor heads back down.
    fn rising_speed(&self) -> f32 {
        -self.down() * self.velocity.y
    }
}

fn contains_inclusive(rect: &Rect, p: Vec2) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.w && p.y >= rect.y && p.y <= rect.y + rect.h
}
