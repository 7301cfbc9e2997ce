//! Tile grid layout
//!
//! A [`TileGrid`] describes how a source sheet is cut into tiles and where
//! each tile lands in the extruded sheet. Tile `(c, r)` keeps its pixels
//! at source `(c*tw, r*th)`; in the destination it is framed by one pixel
//! on every side, so its `(tw+2) x (th+2)` cell starts at
//! `(c*(tw+2), r*(th+2))` and its interior at one pixel further in.
//!
//! Destination cells tile the extruded sheet exactly, and every cell is
//! covered by the nine [`TileRegion`]s of its tile.

use crate::error::{ExtrusionError, ExtrusionResult};
use extruder_core::{Box, Pix};

/// Check a signed tile size and convert it for use as a divisor.
///
/// # Errors
///
/// Returns [`ExtrusionError::InvalidTileDimension`] if either value is not
/// a positive `u32`.
pub fn validate_tile_size(tile_width: i64, tile_height: i64) -> ExtrusionResult<(u32, u32)> {
    let positive = |v: i64| u32::try_from(v).ok().filter(|&v| v > 0);
    match (positive(tile_width), positive(tile_height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(ExtrusionError::InvalidTileDimension {
            tile_width,
            tile_height,
        }),
    }
}

/// Layout of a tile sheet before and after extrusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    tile_width: u32,
    tile_height: u32,
    columns: u32,
    rows: u32,
    dst_width: u32,
    dst_height: u32,
}

impl TileGrid {
    /// Derive the grid for a `width` x `height` sheet.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`ExtrusionError::InvalidTileDimension`] if a tile size is zero
    /// - [`ExtrusionError::NonDivisibleWidth`]
    /// - [`ExtrusionError::NonDivisibleHeight`]
    /// - [`ExtrusionError::DimensionOverflow`] if the extruded size does not
    ///   fit in `u32`
    pub fn new(width: u32, height: u32, tile_width: u32, tile_height: u32) -> ExtrusionResult<Self> {
        if tile_width == 0 || tile_height == 0 {
            return Err(ExtrusionError::InvalidTileDimension {
                tile_width: tile_width.into(),
                tile_height: tile_height.into(),
            });
        }
        if width % tile_width != 0 {
            return Err(ExtrusionError::NonDivisibleWidth { width, tile_width });
        }
        if height % tile_height != 0 {
            return Err(ExtrusionError::NonDivisibleHeight {
                height,
                tile_height,
            });
        }

        let columns = width / tile_width;
        let rows = height / tile_height;
        let extruded = |len: u32, count: u32| count.checked_mul(2).and_then(|g| len.checked_add(g));
        let (Some(dst_width), Some(dst_height)) = (extruded(width, columns), extruded(height, rows))
        else {
            return Err(ExtrusionError::DimensionOverflow {
                width,
                height,
                columns,
                rows,
            });
        };

        Ok(TileGrid {
            tile_width,
            tile_height,
            columns,
            rows,
            dst_width,
            dst_height,
        })
    }

    /// Derive the grid for an image.
    pub fn for_image(pix: &Pix, tile_width: u32, tile_height: u32) -> ExtrusionResult<Self> {
        Self::new(pix.width(), pix.height(), tile_width, tile_height)
    }

    /// Tile width in pixels.
    #[inline]
    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Tile height in pixels.
    #[inline]
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Number of tile columns.
    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of tiles.
    pub fn tile_count(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    /// Size of the source sheet.
    pub fn source_size(&self) -> (u32, u32) {
        (
            self.columns * self.tile_width,
            self.rows * self.tile_height,
        )
    }

    /// Size of the extruded sheet: two extra pixels per tile in each axis.
    pub fn destination_size(&self) -> (u32, u32) {
        (self.dst_width, self.dst_height)
    }

    /// Get the tile at grid position (`column`, `row`).
    ///
    /// Returns `None` outside the grid.
    pub fn tile(&self, column: u32, row: u32) -> Option<Tile> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        let tw = self.tile_width;
        let th = self.tile_height;
        Some(Tile {
            column,
            row,
            src: Box::new_unchecked(column * tw, row * th, tw, th),
            dst: Box::new_unchecked(1 + column * (tw + 2), 1 + row * (th + 2), tw, th),
        })
    }

    /// Iterate over all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).filter_map(move |column| self.tile(column, row))
        })
    }
}

/// One tile of a [`TileGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Grid column
    pub column: u32,
    /// Grid row
    pub row: u32,
    /// Tile pixels in the source sheet
    pub src: Box,
    /// Tile interior in the extruded sheet
    pub dst: Box,
}

/// Which part of the extruded frame a region fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

/// A block copy: `dst` in the extruded sheet receives the equally sized
/// block at (`sx`, `sy`) of the source sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    pub kind: RegionKind,
    pub dst: Box,
    pub sx: u32,
    pub sy: u32,
}

impl Tile {
    /// The tile's whole cell in the extruded sheet, border included.
    pub fn frame(&self) -> Box {
        Box::new_unchecked(self.dst.x - 1, self.dst.y - 1, self.dst.w + 2, self.dst.h + 2)
    }

    /// The nine block copies that build this tile's cell.
    ///
    /// Corners are 1x1, edges are one pixel thick and span the tile, and
    /// the center is the tile itself. The destination boxes are pairwise
    /// disjoint and together cover [`Tile::frame`].
    pub fn regions(&self) -> [TileRegion; 9] {
        let Box { x: sx, y: sy, w, h } = self.src;
        let (dx, dy) = (self.dst.x, self.dst.y);
        let (last_x, last_y) = (sx + w - 1, sy + h - 1);
        let region = |kind, x, y, w, h, sx, sy| TileRegion {
            kind,
            dst: Box::new_unchecked(x, y, w, h),
            sx,
            sy,
        };

        [
            region(RegionKind::TopLeft, dx - 1, dy - 1, 1, 1, sx, sy),
            region(RegionKind::TopRight, dx + w, dy - 1, 1, 1, last_x, sy),
            region(RegionKind::BottomLeft, dx - 1, dy + h, 1, 1, sx, last_y),
            region(RegionKind::BottomRight, dx + w, dy + h, 1, 1, last_x, last_y),
            region(RegionKind::Top, dx, dy - 1, w, 1, sx, sy),
            region(RegionKind::Bottom, dx, dy + h, w, 1, sx, last_y),
            region(RegionKind::Left, dx - 1, dy, 1, h, sx, sy),
            region(RegionKind::Right, dx + w, dy, 1, h, last_x, sy),
            region(RegionKind::Center, dx, dy, w, h, sx, sy),
        ]
    }
}
