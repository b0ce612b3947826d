//! Tile layer decoding into draw and collision geometry.

use crate::ir_level::IrLevel;
use crate::tile_id::TileId;
use macroquad::prelude::*;

/// Tiles are drawn at four times their atlas size.
pub const DISPLAY_SCALE: f32 = 4.0;

/// Local atlas indices that block the player.
///
/// Collision is keyed on tile identity; levels carry no separate collision layer.
pub const SOLID_TILES: [u32; 23] = [
    15, 41, 55, 66, 68, 132, 131, 148, 146, 144, 159, 257, 84, 70, 283, 133, 417, 418, 392, 391,
    247, 274, 223,
];

/// Where the exit flag stands in every level.
pub const GOAL_POSITION: Vec2 = Vec2::new(1780.0, 380.0);

/// Decoded geometry of one level. The per-cell sequences are index-aligned
/// and in row-major scan order.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMapping {
    /// Screen rectangle per cell, shifted right by one tile when rotated.
    pub draw_rects: Vec<Rect>,
    /// Top-left of each cell's atlas region.
    pub source_coords: Vec<Vec2>,
    /// Signed atlas width; negative mirrors horizontally.
    pub draw_width: Vec<f32>,
    /// Signed atlas height; negative mirrors vertically.
    pub draw_height: Vec<f32>,
    /// Degrees, 0 or 90.
    pub rotation: Vec<f32>,
    /// Packed id of each cell.
    pub gids: Vec<TileId>,
    /// Screen rectangles of the solid cells, in scan order.
    pub collision_rects: Vec<Rect>,
    /// Where the exit flag is drawn.
    pub goal_position: Vec2,
}

/// One cell's draw parameters, borrowed out of a [`TileMapping`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawTile {
    /// Packed id of the cell.
    pub gid: TileId,
    /// Atlas region; a negative extent mirrors the tile on that axis.
    pub source: Rect,
    /// Screen rectangle, already scaled.
    pub dest: Rect,
    /// Degrees, clockwise about the top-left of `dest`.
    pub rotation: f32,
}

impl TileMapping {
    /// Decodes `ir` against the built-in solid tile list.
    pub fn from_ir(ir: &IrLevel) -> Self {
        Self::from_ir_with_solids(ir, &SOLID_TILES)
    }

    /// Decodes `ir`, treating the local atlas indices in `solids` as solid.
    pub fn from_ir_with_solids(ir: &IrLevel, solids: &[u32]) -> Self {
        let cells = ir.layer.cell_count();
        let mut level = TileMapping {
            draw_rects: Vec::with_capacity(cells),
            source_coords: Vec::with_capacity(cells),
            draw_width: Vec::with_capacity(cells),
            draw_height: Vec::with_capacity(cells),
            rotation: Vec::with_capacity(cells),
            gids: Vec::with_capacity(cells),
            collision_rects: Vec::new(),
            goal_position: GOAL_POSITION,
        };

        let tile_w = ir.tile_w as f32;
        let tile_h = ir.tile_h as f32;
        let screen_tile_w = DISPLAY_SCALE * tile_w;
        let screen_tile_h = DISPLAY_SCALE * tile_h;
        let columns = ir.atlas.columns.max(1);

        for row in 0..ir.layer.height {
            for col in 0..ir.layer.width {
                // cells past the end of a short data array decode as empty
                let raw = ir.layer.data.get(row * ir.layer.width + col);
                let gid = TileId(raw.copied().unwrap_or(0));
                let i = gid.local();

                // Source offsets use unsigned 32-bit arithmetic so empty cells
                // land where the packing puts them.
                let sx = (i % columns).wrapping_mul(ir.tile_w) as f32;
                let sy = (i / columns).wrapping_mul(ir.tile_h) as f32;

                let dest_x = col as f32 * screen_tile_w;
                let dest_y = row as f32 * screen_tile_h;

                let mut width = tile_w;
                let mut height = tile_h;
                if gid.flip_h() {
                    width = -width;
                }
                if gid.flip_v() {
                    height = -height;
                }

                let mut rotation = 0.0;
                let mut draw_x = dest_x;
                if gid.flip_d() {
                    rotation = 90.0;
                    width = -width;
                    draw_x += screen_tile_w;
                }

                level
                    .draw_rects
                    .push(Rect::new(draw_x, dest_y, screen_tile_w, screen_tile_h));
                level.source_coords.push(vec2(sx, sy));
                level.draw_width.push(width);
                level.draw_height.push(height);
                level.rotation.push(rotation);
                level.gids.push(gid);

                if !gid.is_empty() && solids.contains(&i) {
                    level
                        .collision_rects
                        .push(Rect::new(dest_x, dest_y, screen_tile_w, screen_tile_h));
                }
            }
        }

        level
    }

    /// Number of decoded cells, empty ones included.
    pub fn len(&self) -> usize {
        self.draw_rects.len()
    }

    /// True for a level without cells.
    pub fn is_empty(&self) -> bool {
        self.draw_rects.is_empty()
    }

    /// Draw parameters of cell `idx`, empty or not.
    pub fn tile(&self, idx: usize) -> Option<DrawTile> {
        let dest = *self.draw_rects.get(idx)?;
        let coords = self.source_coords[idx];
        Some(DrawTile {
            gid: self.gids[idx],
            source: Rect::new(
                coords.x,
                coords.y,
                self.draw_width[idx],
                self.draw_height[idx],
            ),
            dest,
            rotation: self.rotation[idx],
        })
    }

    /// Occupied cells in draw order.
    pub fn tiles(&self) -> impl Iterator<Item = DrawTile> + '_ {
        (0..self.len())
            .filter_map(move |idx| self.tile(idx))
            .filter(|t| !t.gid.is_empty())
    }
}
