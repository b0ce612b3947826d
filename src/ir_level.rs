// src/ir_level.rs

/// Canonical, format-agnostic level: one tile layer over one atlas.
#[derive(Debug, Clone, PartialEq)]
pub struct IrLevel {
    /// Tile width in atlas pixels.
    pub tile_w: u32,
    /// Tile height in atlas pixels.
    pub tile_h: u32,
    /// Atlas the layer's ids index into.
    pub atlas: IrAtlas,
    /// The playable tile layer.
    pub layer: IrTileLayer,
}

/// One image atlas with a regular grid, no spacing or margin.
#[derive(Debug, Clone, PartialEq)]
pub struct IrAtlas {
    /// Tiles per atlas row.
    pub columns: u32,
}

/// Grid of packed tile ids.
#[derive(Debug, Clone, PartialEq)]
pub struct IrTileLayer {
    /// Width in cells.
    pub width: usize,
    /// Height in cells.
    pub height: usize,
    /// Raw packed ids, row-major, flip flags included.
    pub data: Vec<u32>,
}

impl IrTileLayer {
    /// `width * height`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
