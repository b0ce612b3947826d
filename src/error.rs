use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading and decoding level files.
///
/// Every variant is fatal at startup: a level that cannot be decoded leaves
/// the game without geometry to play on.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The level file could not be read.
    #[error("failed to read level file {path}: {source}")]
    Io {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The level file is not valid Tiled JSON.
    #[error("failed to parse level file {path}: {source}")]
    Json {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// The document parsed but does not describe a usable level.
    #[error("invalid level: {0}")]
    InvalidLevel(String),
    /// The tile layer's data length does not match `width * height`.
    #[error("tile layer has {actual} cells, expected {expected}")]
    LayerSizeMismatch {
        /// `width * height` of the layer.
        expected: usize,
        /// Length of the layer's `data` array.
        actual: usize,
    },
}
