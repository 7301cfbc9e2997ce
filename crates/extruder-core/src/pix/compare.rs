//! Image comparison operations
//!
//! - Pixel equality checks
//! - Pixel difference counting

use super::Pix;
use crate::error::{Error, Result};

/// Result of counting pixel differences between two images
#[derive(Debug, Clone, PartialEq)]
pub struct PixelDiffResult {
    /// Number of pixels that differ
    pub n_diff: u64,
    /// Fraction of pixels that differ (0.0 to 1.0)
    pub fract_diff: f64,
    /// Position of the first differing pixel in raster order, if any
    pub first_diff: Option<(u32, u32)>,
}

impl Pix {
    /// Count the number of pixels that differ between two images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the images have different
    /// sizes.
    pub fn count_pixel_diffs(&self, other: &Pix) -> Result<PixelDiffResult> {
        if !self.sizes_equal(other) {
            return Err(Error::InvalidParameter(format!(
                "incompatible image sizes: {}x{} vs {}x{}",
                self.width(),
                self.height(),
                other.width(),
                other.height()
            )));
        }

        let width = self.width() as usize;
        let mut n_diff = 0u64;
        let mut first_diff = None;
        for (i, (a, b)) in self.data().iter().zip(other.data()).enumerate() {
            if a != b {
                n_diff += 1;
                if first_diff.is_none() {
                    first_diff = Some(((i % width) as u32, (i / width) as u32));
                }
            }
        }

        Ok(PixelDiffResult {
            n_diff,
            fract_diff: n_diff as f64 / self.data().len() as f64,
            first_diff,
        })
    }

    /// Check if two images are exactly equal.
    ///
    /// Images of different sizes are never equal.
    pub fn equals(&self, other: &Pix) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }
}
