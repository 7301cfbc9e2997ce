//! Raster operations (ROP)
//!
//! Block transfer of pixels from a source image into a destination image.
//! The transfer is a straight copy: no blending, no resampling, and the
//! destination region is overwritten including its alpha channel.

use super::{Pix, PixMut};
use crate::box_::Box;
use crate::error::{Error, Result};

fn check_region(region: &Box, width: u32, height: u32) -> Result<()> {
    if region.fits_within(width, height) {
        Ok(())
    } else {
        Err(Error::RegionOutOfBounds {
            x: region.x,
            y: region.y,
            w: region.w,
            h: region.h,
            width,
            height,
        })
    }
}

impl PixMut {
    /// Copy a block of pixels from `src` into this image.
    ///
    /// # Arguments
    ///
    /// * `dst` - Destination region in this image
    /// * `src` - Source image
    /// * `sx` - Left edge of the source block
    /// * `sy` - Top edge of the source block
    ///
    /// The source block has the same size as `dst`. An empty region is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if either block does not fit
    /// inside its image. Nothing is written in that case.
    pub fn rasterop(&mut self, dst: Box, src: &Pix, sx: u32, sy: u32) -> Result<()> {
        check_region(&dst, self.width(), self.height())?;
        let src_region = Box::new_unchecked(sx, sy, dst.w, dst.h);
        check_region(&src_region, src.width(), src.height())?;

        if dst.is_empty() {
            return Ok(());
        }

        let x0 = dst.x as usize;
        let x1 = dst.right() as usize;
        let sx0 = sx as usize;
        let sx1 = sx0 + dst.w as usize;
        for row in 0..dst.h {
            let line = &src.row_data(sy + row)[sx0..sx1];
            self.row_data_mut(dst.y + row)[x0..x1].copy_from_slice(line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> Pix {
        let mut pm = PixMut::new(width, height).unwrap();
        for (i, p) in pm.data_mut().iter_mut().enumerate() {
            *p = i as u32 + 1;
        }
        pm.into()
    }

    #[test]
    fn test_rasterop_copies_block() {
        let src = numbered(4, 4);
        let mut dst = PixMut::new(6, 6).unwrap();
        dst.rasterop(Box::new_unchecked(2, 3, 2, 2), &src, 1, 1).unwrap();

        assert_eq!(dst.get_pixel(2, 3), src.get_pixel(1, 1));
        assert_eq!(dst.get_pixel(3, 3), src.get_pixel(2, 1));
        assert_eq!(dst.get_pixel(2, 4), src.get_pixel(1, 2));
        assert_eq!(dst.get_pixel(3, 4), src.get_pixel(2, 2));
        // Untouched neighbours stay transparent
        assert_eq!(dst.get_pixel(1, 3), Some(0));
        assert_eq!(dst.get_pixel(4, 4), Some(0));
        assert_eq!(dst.get_pixel(2, 5), Some(0));
    }

    #[test]
    fn test_rasterop_overwrites_alpha() {
        let mut src = PixMut::new(1, 1).unwrap();
        src.set_pixel(0, 0, 0x10203000).unwrap();
        let src: Pix = src.into();

        let mut dst = PixMut::new(1, 1).unwrap();
        dst.set_all_arbitrary(0xffffffff);
        dst.rasterop(Box::new_unchecked(0, 0, 1, 1), &src, 0, 0).unwrap();
        assert_eq!(dst.get_pixel(0, 0), Some(0x10203000));
    }

    #[test]
    fn test_rasterop_out_of_bounds() {
        let src = numbered(2, 2);
        let mut dst = PixMut::new(3, 3).unwrap();
        assert!(matches!(
            dst.rasterop(Box::new_unchecked(2, 2, 2, 2), &src, 0, 0),
            Err(Error::RegionOutOfBounds { .. })
        ));
        assert!(dst.rasterop(Box::new_unchecked(0, 0, 2, 2), &src, 1, 0).is_err());
        assert!(dst.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_rasterop_empty_region() {
        let src = numbered(2, 2);
        let mut dst = PixMut::new(2, 2).unwrap();
        dst.rasterop(Box::new_unchecked(1, 1, 0, 1), &src, 0, 0).unwrap();
        assert!(dst.data().iter().all(|&p| p == 0));
    }
}
