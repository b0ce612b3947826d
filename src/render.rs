//! Draw calls for every screen. Nothing here mutates game state.

use crate::assets::Assets;
use crate::game::{Game, GameState};
use crate::mapping::{DrawTile, TileMapping};
use crate::menu::{BallAnimation, Menu};
use crate::player::{Emotion, Player};
use macroquad::prelude::*;

const CURVE_SEGMENTS: usize = 24;

/// Text of the title screen: line, top-left corner, font size.
const TITLE_LINES: &[(&str, Vec2, u16)] = &[
    ("INVERSION", Vec2::new(220.0, 300.0), 200),
    ("by Johannes Elsing", Vec2::new(1170.0, 500.0), 30),
    ("PRESS ANY BUTTON", Vec2::new(800.0, 1000.0), 30),
];

/// Draws the screen for the game's current state.
pub fn draw_game(game: &Game, assets: &Assets) -> anyhow::Result<()> {
    match game.state() {
        GameState::Title => {
            clear_background(BLACK);
            let font = assets.font("dejavu")?;
            for &(text, top_left, size) in TITLE_LINES {
                draw_label(text, top_left, size, WHITE, font);
            }
        }
        GameState::Menu => {
            clear_background(BLACK);
            let font = assets.font("menu")?;
            draw_label("MENU", vec2(200.0, 200.0), 200, WHITE, font);
            draw_menu(game.main_menu(), font, 70, |_| vec2(10.0, 20.0));
            draw_balls(game.balls());
        }
        GameState::LevelSelect => {
            clear_background(BLACK);
            draw_menu(game.level_select(), assets.font("level")?, 30, |label| {
                // two-digit labels sit a little further left to stay centred
                if label.len() >= 2 {
                    vec2(38.0, 35.0)
                } else {
                    vec2(45.0, 35.0)
                }
            });
        }
        GameState::Playing => {
            clear_background(BLACK);
            draw_level(game.levels().active(), assets)?;
            draw_player(game.player(), assets)?;
        }
        GameState::End => {
            clear_background(BLUE);
            if let Some(sprite) = game.fireworks().sprite() {
                let tex = assets.texture(&format!("firework_{sprite}"))?;
                draw_texture(tex, 600.0, 200.0, WHITE);
                draw_texture(tex, 1100.0, 200.0, WHITE);
            }
            draw_text("The end. Thanks for playing!", 690.0, 540.0, 40.0, BLACK);
        }
    }
    Ok(())
}

/// Draws every occupied tile of `level` and its goal flag.
pub fn draw_level(level: &TileMapping, assets: &Assets) -> anyhow::Result<()> {
    let tileset = assets.texture("tileset")?;
    for tile in level.tiles() {
        draw_tile(tileset, &tile);
    }

    let goal = level.goal_position;
    draw_texture_ex(
        assets.texture("flag")?,
        goal.x,
        goal.y,
        WHITE,
        DrawTextureParams {
            source: Some(Rect::new(0.0, 0.0, 16.0, 16.0)),
            dest_size: Some(vec2(64.0, 64.0)),
            ..Default::default()
        },
    );
    Ok(())
}

/// Mirroring is carried by the sign of the source extent; rotation pivots
/// on the destination's top-left corner.
fn draw_tile(tileset: &Texture2D, tile: &DrawTile) {
    let src = tile.source;
    draw_texture_ex(
        tileset,
        tile.dest.x,
        tile.dest.y,
        WHITE,
        DrawTextureParams {
            source: Some(Rect::new(src.x, src.y, src.w.abs(), src.h.abs())),
            dest_size: Some(tile.dest.size()),
            rotation: tile.rotation.to_radians(),
            flip_x: src.w < 0.0,
            flip_y: src.h < 0.0,
            pivot: Some(tile.dest.point()),
        },
    );
}

/// Draws the armour and face, turned upside down under flipped gravity.
pub fn draw_player(player: &Player, assets: &Assets) -> anyhow::Result<()> {
    let armor = assets.texture("armor")?;
    let face = assets.texture(emotion_texture(player.emotion()))?;
    let r = player.rect();
    let armor_src = Some(Rect::new(0.0, 0.0, 390.0, 590.0));

    if !player.flipped() {
        draw_texture_ex(
            armor,
            r.x - 18.0,
            r.y + 30.0,
            WHITE,
            DrawTextureParams {
                source: armor_src,
                dest_size: Some(vec2(78.0, 118.0)),
                ..Default::default()
            },
        );
        draw_texture(face, r.x - 10.0, r.y - 8.0, WHITE);
    } else {
        // upside down, turned about the sprite's own top-left corner
        let armor_pos = vec2(r.x + 55.0, r.y + r.h - 30.0);
        draw_texture_ex(
            armor,
            armor_pos.x,
            armor_pos.y,
            WHITE,
            DrawTextureParams {
                source: armor_src,
                dest_size: Some(vec2(78.0, 118.0)),
                rotation: std::f32::consts::PI,
                pivot: Some(armor_pos),
                ..Default::default()
            },
        );
        let face_pos = vec2(r.x + 50.0, r.y + r.h + 10.0);
        draw_texture_ex(
            face,
            face_pos.x,
            face_pos.y,
            WHITE,
            DrawTextureParams {
                source: Some(Rect::new(0.0, 0.0, 64.0, 64.0)),
                dest_size: Some(vec2(64.0, 64.0)),
                rotation: std::f32::consts::PI,
                pivot: Some(face_pos),
                ..Default::default()
            },
        );
    }
    Ok(())
}

fn emotion_texture(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "happy",
        Emotion::Sad => "sad",
        Emotion::Fear => "fear",
    }
}

fn draw_menu<A: Copy>(
    menu: &Menu<A>,
    font: &Font,
    font_size: u16,
    label_offset: impl Fn(&str) -> Vec2,
) {
    for item in menu.items() {
        let r = item.rect;
        let color = if item.hovered { GRAY } else { WHITE };
        draw_rectangle(r.x, r.y, r.w, r.h, color);
        let at = r.point() + label_offset(&item.label);
        draw_label(&item.label, at, font_size, BLACK, font);
    }
}

/// Text positioned by its top-left corner rather than its baseline.
fn draw_label(text: &str, top_left: Vec2, font_size: u16, color: Color, font: &Font) {
    draw_text_ex(
        text,
        top_left.x,
        top_left.y + f32::from(font_size),
        TextParams {
            font: Some(font),
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn draw_balls(balls: &BallAnimation) {
    let points = ease_curve(balls.first, balls.second, CURVE_SEGMENTS);
    for pair in points.windows(2) {
        draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, 2.0, WHITE);
    }
    draw_circle(balls.first.x, balls.first.y, balls.radius, RED);
    draw_circle(balls.second.x, balls.second.y, balls.radius, BLUE);
    draw_circle(balls.third.x, balls.third.y, balls.radius - 15.0, GREEN);
}

/// Points along a curve from `start` to `end` that moves linearly in x and
/// eases in and out (cubic) in y.
pub fn ease_curve(start: Vec2, end: Vec2, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let eased = if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            };
            vec2(
                start.x + (end.x - start.x) * t,
                start.y + (end.y - start.y) * eased,
            )
        })
        .collect()
}
