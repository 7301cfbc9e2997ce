//! extruder-test - Regression test framework for the extruder workspace
//!
//! This crate provides a regression test framework supporting two modes:
//!
//! - **Compare**: Run every check and collect failures
//! - **Display**: Same checks, plus image details for failed comparisons
//!
//! It also builds synthetic tile sheets so tests never depend on image
//! files checked into the repository.
//!
//! # Usage
//!
//! ```ignore
//! use extruder_test::{RegParams, tile_sheet};
//!
//! let mut rp = RegParams::new("extrude");
//! let sheet = tile_sheet(4, 2, 8, 8).unwrap();
//! rp.compare_values(32.0, sheet.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use extruder_core::{Pix, PixMut, color};

/// Build an opaque tile sheet of `columns` x `rows` tiles.
///
/// Pixel (x, y) gets red = x, green = y and blue = tile index, so every
/// pixel of sheets up to 256 pixels on a side has a distinct color and a
/// misplaced copy is always visible.
pub fn tile_sheet(columns: u32, rows: u32, tile_width: u32, tile_height: u32) -> TestResult<Pix> {
    let width = columns * tile_width;
    let height = rows * tile_height;
    let mut pix_mut = PixMut::new(width, height)?;

    for y in 0..height {
        for x in 0..width {
            let tile = (y / tile_height) * columns + x / tile_width;
            let pixel = color::compose_rgb(x as u8, y as u8, tile as u8);
            pix_mut.set_pixel_unchecked(x, y, pixel);
        }
    }
    Ok(pix_mut.into())
}

/// Build an image filled with a single pixel value.
pub fn solid(width: u32, height: u32, pixel: u32) -> TestResult<Pix> {
    let mut pix_mut = PixMut::new(width, height)?;
    pix_mut.set_all_arbitrary(pixel);
    Ok(pix_mut.into())
}

/// Load an image from a path through the regular decoder.
pub fn load_image(path: &str) -> TestResult<Pix> {
    extruder_io::read_image(path).map_err(|e| TestError::ImageLoad {
        path: path.to_string(),
        message: e.to_string(),
    })
}
