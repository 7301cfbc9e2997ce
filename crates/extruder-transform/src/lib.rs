//! extruder-transform - Tile border extrusion
//!
//! Splits a tile sheet into a uniform grid and rebuilds it with a 1-pixel
//! border around every tile. The border replicates the tile's own edge
//! and corner pixels, so bilinear sampling or mipmapping near a tile edge
//! never picks up a neighbouring tile.
//!
//! - [`TileGrid`] - the grid layout of source and destination
//! - [`extrude`] - the transform itself

mod error;
pub mod extrude;
pub mod grid;

pub use error::{ExtrusionError, ExtrusionResult};
pub use extrude::extrude;
pub use grid::{RegionKind, Tile, TileGrid, TileRegion, validate_tile_size};
