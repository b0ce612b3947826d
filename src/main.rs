use anyhow::Context;
use inversion::assets::Assets;
use inversion::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use inversion::{input, render, Config, Game, LevelRegistry, PlayerEvent};
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: Config::default().title,
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: true,
        sample_count: 4,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    info!("=== Inversion Startup ===");

    if let Err(err) = run().await {
        error!(error = %format!("{err:#}"), "startup_failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env();

    let level_dir = config.level_dir();
    let levels = LevelRegistry::load_dir(&level_dir, config.level_count)
        .with_context(|| format!("Loading levels from {}", level_dir.display()))?;
    let assets = Assets::load(&config.assets_dir).await?;

    let mut game = Game::new(&config, levels);
    assets.start_music()?;

    loop {
        let frame_input = input::sample();
        for event in game.update(&frame_input) {
            assets.play(sound_for(event))?;
        }
        if game.should_quit() {
            info!("shutdown");
            break;
        }

        render::draw_game(&game, &assets)?;
        next_frame().await;
    }
    Ok(())
}

fn sound_for(event: PlayerEvent) -> &'static str {
    match event {
        PlayerEvent::Jump => "jump",
        PlayerEvent::Flip => "flip",
        PlayerEvent::Win => "win",
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
