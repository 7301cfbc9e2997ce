//! Error types for extruder-transform

use thiserror::Error;

/// Errors that can occur while extruding a tile sheet
///
/// Every precondition failure is reported before the destination image
/// is allocated.
#[derive(Debug, Error)]
pub enum ExtrusionError {
    /// Tile width or height is zero or negative
    #[error("invalid tile dimension: {tile_width}x{tile_height} (both must be positive)")]
    InvalidTileDimension { tile_width: i64, tile_height: i64 },

    /// Image width is not a multiple of the tile width
    #[error("image with width {width} is not evenly divided by tile width {tile_width}")]
    NonDivisibleWidth { width: u32, tile_width: u32 },

    /// Image height is not a multiple of the tile height
    #[error("image with height {height} is not evenly divided by tile height {tile_height}")]
    NonDivisibleHeight { height: u32, tile_height: u32 },

    /// Destination image would be too large to address
    #[error("extruded size of {width}x{height} image with {columns}x{rows} tiles overflows")]
    DimensionOverflow {
        width: u32,
        height: u32,
        columns: u32,
        rows: u32,
    },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] extruder_core::Error),
}

/// Result type for extrusion operations
pub type ExtrusionResult<T> = Result<T, ExtrusionError>;
