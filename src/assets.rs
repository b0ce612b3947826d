//! Named textures, fonts and sounds, loaded once before the first frame.

use anyhow::{anyhow, Context};
use macroquad::audio::{load_sound, play_sound, play_sound_once, PlaySoundParams, Sound};
use macroquad::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

const TEXTURES: &[(&str, &str)] = &[
    ("tileset", "Sprites/Tiles-and-Enemies.png"),
    ("flag", "Sprites/flag.png"),
    ("armor", "Sprites/Armorstand.png"),
    ("happy", "Sprites/free-emojis-pixelart/emojis-x2-64x64/E17.png"),
    ("sad", "Sprites/free-emojis-pixelart/emojis-x2-64x64/E5.png"),
    ("fear", "Sprites/free-emojis-pixelart/emojis-x2-64x64/E4.png"),
    ("firework_1", "Sprites/yellow/1.png"),
    ("firework_2", "Sprites/yellow/2.png"),
    ("firework_3", "Sprites/yellow/3.png"),
    ("firework_4", "Sprites/yellow/4.png"),
    ("firework_5", "Sprites/yellow/5.png"),
    ("firework_6", "Sprites/yellow/6.png"),
    ("firework_7", "Sprites/yellow/7.png"),
];

const FONTS: &[(&str, &str)] = &[
    ("menu", "Fonts/jupiter_crash.ttf"),
    ("level", "Fonts/Ticketing.ttf"),
    ("dejavu", "Fonts/dejavu.ttf"),
];

const SOUNDS: &[(&str, &str)] = &[
    ("jump", "Sound/jump.wav"),
    ("flip", "Sound/switch1.wav"),
    ("win", "Sound/win_sound.wav"),
    ("music", "Music/music.ogg"),
];

const MUSIC_VOLUME: f32 = 0.5;

/// Handles for everything the game draws or plays, keyed by short names.
pub struct Assets {
    textures: HashMap<&'static str, Texture2D>,
    fonts: HashMap<&'static str, Font>,
    sounds: HashMap<&'static str, Sound>,
}

impl Assets {
    /// Loads every asset under `base_dir`. Any missing file is an error.
    pub async fn load(base_dir: &Path) -> anyhow::Result<Self> {
        let mut textures = HashMap::with_capacity(TEXTURES.len());
        for &(name, rel) in TEXTURES {
            let path = base_dir.join(rel);
            let tex = load_texture(&path.to_string_lossy())
                .await
                .with_context(|| format!("Loading texture {}", path.display()))?;
            tex.set_filter(FilterMode::Nearest);
            debug!(name, path = %path.display(), "texture_loaded");
            textures.insert(name, tex);
        }

        let mut fonts = HashMap::with_capacity(FONTS.len());
        for &(name, rel) in FONTS {
            let path = base_dir.join(rel);
            let font = load_ttf_font(&path.to_string_lossy())
                .await
                .with_context(|| format!("Loading font {}", path.display()))?;
            debug!(name, path = %path.display(), "font_loaded");
            fonts.insert(name, font);
        }

        let mut sounds = HashMap::with_capacity(SOUNDS.len());
        for &(name, rel) in SOUNDS {
            let path = base_dir.join(rel);
            let sound = load_sound(&path.to_string_lossy())
                .await
                .with_context(|| format!("Loading sound {}", path.display()))?;
            debug!(name, path = %path.display(), "sound_loaded");
            sounds.insert(name, sound);
        }

        info!(
            textures = textures.len(),
            fonts = fonts.len(),
            sounds = sounds.len(),
            "assets_loaded"
        );
        Ok(Self {
            textures,
            fonts,
            sounds,
        })
    }

    /// Texture registered as `name`.
    pub fn texture(&self, name: &str) -> anyhow::Result<&Texture2D> {
        self.textures
            .get(name)
            .ok_or_else(|| anyhow!("unknown texture '{name}'"))
    }

    /// Font registered as `name`.
    pub fn font(&self, name: &str) -> anyhow::Result<&Font> {
        self.fonts
            .get(name)
            .ok_or_else(|| anyhow!("unknown font '{name}'"))
    }

    /// Sound registered as `name`.
    pub fn sound(&self, name: &str) -> anyhow::Result<&Sound> {
        self.sounds
            .get(name)
            .ok_or_else(|| anyhow!("unknown sound '{name}'"))
    }

    /// Plays sound `name` once.
    pub fn play(&self, name: &str) -> anyhow::Result<()> {
        play_sound_once(self.sound(name)?);
        Ok(())
    }

    /// Starts the background track, looping.
    pub fn start_music(&self) -> anyhow::Result<()> {
        play_sound(
            self.sound("music")?,
            PlaySoundParams {
                looped: true,
                volume: MUSIC_VOLUME,
            },
        );
        Ok(())
    }
}
