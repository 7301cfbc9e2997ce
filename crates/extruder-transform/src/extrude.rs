//! Border extrusion
//!
//! Builds the extruded sheet by copying the nine regions of every tile
//! into a transparent destination. Copies are straight block transfers;
//! no pixel is blended or resampled, so the center of each destination
//! cell is bit-identical to its source tile.

use crate::error::ExtrusionResult;
use crate::grid::TileGrid;
use extruder_core::{Pix, PixMut};

/// Extrude a 1-pixel border around every tile of a tile sheet.
///
/// # Arguments
///
/// * `pixs` - Source tile sheet; never modified
/// * `tile_width` - Width of one tile, must divide the sheet width
/// * `tile_height` - Height of one tile, must divide the sheet height
///
/// # Returns
///
/// A new image of `(w + 2*columns) x (h + 2*rows)` pixels. Each tile sits
/// inside its own frame of replicated edge and corner pixels.
///
/// # Errors
///
/// Returns the [`TileGrid::new`] errors. Nothing is allocated when a
/// precondition fails.
///
/// # Examples
///
/// ```
/// use extruder_core::{Pix, PixMut};
/// use extruder_transform::extrude;
///
/// let mut pm = PixMut::new(2, 2).unwrap();
/// pm.set_all_arbitrary(0x336699ff);
/// let sheet: Pix = pm.into();
///
/// let out = extrude(&sheet, 1, 1).unwrap();
/// assert_eq!((out.width(), out.height()), (6, 6));
/// assert!(out.data().iter().all(|&p| p == 0x336699ff));
/// ```
pub fn extrude(pixs: &Pix, tile_width: u32, tile_height: u32) -> ExtrusionResult<Pix> {
    let grid = TileGrid::for_image(pixs, tile_width, tile_height)?;
    let (width, height) = grid.destination_size();

    let mut pixd = PixMut::new(width, height)?;
    pixd.set_informat(pixs.informat());

    for tile in grid.tiles() {
        for region in tile.regions() {
            pixd.rasterop(region.dst, pixs, region.sx, region.sy)?;
        }
    }

    Ok(pixd.into())
}
