// tests/level_tests.rs

use inversion::config::PhysicsConfig;
use inversion::player::MovementState;
use inversion::registry::level_path;
use inversion::{FrameInput, LevelError, LevelRegistry, Player, PlayerEvent};
use macroquad::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;

const DT: f32 = 1.0 / 60.0;
const START: Vec2 = Vec2::new(200.0, 820.0);

/// Writes a 30x17 Tiled level with a solid floor along row 15.
fn write_level(dir: &Path, id: usize) -> anyhow::Result<()> {
    let (width, height) = (30usize, 17usize);
    let mut data = vec![0u32; width * height];
    for cell in &mut data[15 * width..16 * width] {
        *cell = 16;
    }
    let level = json!({
        "width": width,
        "height": height,
        "tilewidth": 16,
        "tileheight": 16,
        "layers": [{
            "name": "ground",
            "type": "tilelayer",
            "width": width,
            "height": height,
            "data": data,
        }],
        "tilesets": [{ "image": "tiles.png", "imagewidth": 192 }],
    });
    fs::write(level_path(dir, id), serde_json::to_string(&level)?)?;
    Ok(())
}

fn idle() -> FrameInput {
    FrameInput {
        dt: DT,
        ..Default::default()
    }
}

#[test]
fn loads_a_directory_of_levels() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    for id in 0..3 {
        write_level(dir.path(), id)?;
    }

    let levels = LevelRegistry::load_dir(dir.path(), 3)?;

    assert_eq!(levels.len(), 3);
    assert_eq!(levels.active_id(), 0);
    assert!(!levels.finished());
    assert_eq!(levels.active().len(), 30 * 17);
    assert_eq!(levels.active().collision_rects.len(), 30);
    Ok(())
}

#[test]
fn missing_level_file_reports_its_path() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_level(dir.path(), 0)?;

    let err = LevelRegistry::load_dir(dir.path(), 2).unwrap_err();
    match err {
        LevelError::Io { path, .. } => assert_eq!(path, level_path(dir.path(), 1)),
        other => panic!("expected Io, got {other:?}"),
    }
    Ok(())
}

#[test]
fn player_walks_levels_to_the_end() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    for id in 0..2 {
        write_level(dir.path(), id)?;
    }
    let mut levels = LevelRegistry::load_dir(dir.path(), 2)?;
    let mut player = Player::new(PhysicsConfig::default());
    player.set_rect(START, vec2(40.0, 140.0));

    for _ in 0..5 {
        player.update(&idle(), &mut levels);
    }
    assert!(player.on_ground());
    assert_eq!(player.movement_state(), MovementState::Idle);
    assert_eq!(player.position(), START);

    // Standing in the flag's trigger sends the player to the next level.
    player.set_rect(vec2(1780.0, 310.0), vec2(40.0, 140.0));
    let events = player.update(&idle(), &mut levels);
    assert!(events.contains(&PlayerEvent::Win));
    assert_eq!(levels.active_id(), 1);
    assert!(!levels.finished());

    player.set_rect(vec2(1780.0, 310.0), vec2(40.0, 140.0));
    let events = player.update(&idle(), &mut levels);
    assert!(events.contains(&PlayerEvent::Win));
    assert_eq!(levels.active_id(), 1);
    assert!(levels.finished());
    Ok(())
}

#[test]
fn builder_takes_the_last_load_for_an_id() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_level(dir.path(), 0)?;

    let empty = dir.path().join("empty.json");
    fs::write(
        &empty,
        json!({
            "tilewidth": 16,
            "tileheight": 16,
            "layers": [{ "name": "ground", "width": 2, "height": 1, "data": [0, 0] }],
            "tilesets": [{ "imagewidth": 192 }],
        })
        .to_string(),
    )?;

    let mut builder = LevelRegistry::builder();
    builder.load(0, level_path(dir.path(), 0))?.load(0, &empty)?;
    let levels = builder.build()?;

    assert_eq!(levels.len(), 1);
    assert_eq!(levels.active().len(), 2);
    assert!(levels.active().collision_rects.is_empty());
    Ok(())
}
