//! Packed Tiled global ids.

/// Horizontal flip, bit 31.
pub const FLIP_H: u32 = 0x8000_0000;
/// Vertical flip, bit 30.
pub const FLIP_V: u32 = 0x4000_0000;
/// Diagonal flip, bit 29.
pub const FLIP_D: u32 = 0x2000_0000;
/// Keeps the index, drops the top four bits.
pub const GID_MASK: u32 = 0x0FFF_FFFF;

/// A 32-bit tile id as stored in a Tiled layer: a 1-based atlas index with
/// flip flags packed into the high bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileId(pub u32);

impl TileId {
    /// Packed value, flags included.
    #[inline] pub fn raw(self) -> u32 { self.0 }
    /// 1-based index without flags; 0 is an empty cell.
    #[inline] pub fn clean(self) -> u32 { self.0 & GID_MASK }
    /// Mirrored left to right.
    #[inline] pub fn flip_h(self) -> bool { (self.0 & FLIP_H) != 0 }
    /// Mirrored top to bottom.
    #[inline] pub fn flip_v(self) -> bool { (self.0 & FLIP_V) != 0 }
    /// Flipped across the diagonal.
    #[inline] pub fn flip_d(self) -> bool { (self.0 & FLIP_D) != 0 }
    /// No tile in this cell.
    #[inline] pub fn is_empty(self) -> bool { self.clean() == 0 }

    /// Zero-based atlas index. Empty cells wrap around to `u32::MAX`.
    #[inline]
    pub fn local(self) -> u32 {
        self.clean().wrapping_sub(1)
    }
}
