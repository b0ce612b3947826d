// src/loader/json_loader.rs
use crate::error::LevelError;
use crate::ir_level::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct JsonLayer {
    #[serde(default)]
    data: Vec<u32>,
    #[serde(default)]
    width: usize,
    #[serde(default)]
    height: usize,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: Option<String>, // "tilelayer" expected here
}

#[derive(Deserialize)]
struct JsonTileset {
    imagewidth: u32,
}

#[derive(Deserialize)]
struct JsonLevel {
    tilewidth: u32,
    tileheight: u32,
    layers: Vec<JsonLayer>,
    tilesets: Vec<JsonTileset>,
}

/// Reads a Tiled JSON level (`.json` or `.tmj`) from disk.
pub fn decode_level_file_to_ir(path: impl AsRef<Path>) -> Result<IrLevel, LevelError> {
    let p = path.as_ref();
    match p.extension().and_then(|e| e.to_str()) {
        Some("json") | Some("tmj") => {}
        _ => {
            return Err(LevelError::InvalidLevel(format!(
                "Level file must be a Tiled JSON file: {}",
                p.display()
            )))
        }
    }

    let txt = std::fs::read_to_string(p).map_err(|source| LevelError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    let j: JsonLevel = serde_json::from_str(&txt).map_err(|source| LevelError::Json {
        path: p.to_path_buf(),
        source,
    })?;

    level_to_ir(j)
}

/// Decodes a Tiled JSON document already held in memory.
pub fn decode_level_str_to_ir(txt: &str) -> Result<IrLevel, LevelError> {
    let j: JsonLevel = serde_json::from_str(txt).map_err(|source| LevelError::Json {
        path: "<memory>".into(),
        source,
    })?;
    level_to_ir(j)
}

fn level_to_ir(j: JsonLevel) -> Result<IrLevel, LevelError> {
    if j.tilewidth == 0 || j.tileheight == 0 {
        return Err(LevelError::InvalidLevel(format!(
            "tile size must be non-zero, got {}x{}",
            j.tilewidth, j.tileheight
        )));
    }

    // Only the first tileset and the first layer take part in play.
    let tileset = j
        .tilesets
        .into_iter()
        .next()
        .ok_or_else(|| LevelError::InvalidLevel("no tileset found".into()))?;
    let columns = tileset.imagewidth / j.tilewidth;
    if columns == 0 {
        return Err(LevelError::InvalidLevel(format!(
            "tileset image ({} px) is narrower than one tile ({} px)",
            tileset.imagewidth, j.tilewidth
        )));
    }

    let layer = j
        .layers
        .into_iter()
        .next()
        .ok_or_else(|| LevelError::InvalidLevel("no layer found".into()))?;
    if let Some(kind) = layer.kind.as_deref() {
        if kind != "tilelayer" {
            return Err(LevelError::InvalidLevel(format!(
                "first layer '{}' must be a tile layer, got '{kind}'",
                layer.name
            )));
        }
    }
    let expected = layer.width * layer.height;
    if layer.data.len() != expected {
        return Err(LevelError::LayerSizeMismatch {
            expected,
            actual: layer.data.len(),
        });
    }

    Ok(IrLevel {
        tile_w: j.tilewidth,
        tile_h: j.tileheight,
        atlas: IrAtlas { columns },
        layer: IrTileLayer {
            width: layer.width,
            height: layer.height,
            data: layer.data,
        },
    })
}
