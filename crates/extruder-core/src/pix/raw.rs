//! Conversion between `Pix` and interleaved 8-bit RGBA bytes
//!
//! Codecs hand over pixels as `[r, g, b, a, r, g, b, a, ...]` rows;
//! these helpers move them in and out of the packed word layout.

use super::{Pix, PixMut};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Build an image from tightly packed RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferSizeMismatch`] if `bytes.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Pix> {
        let mut pix_mut = PixMut::new(width, height)?;
        let expected = pix_mut.data().len() * 4;
        if bytes.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        for (word, px) in pix_mut.data_mut().iter_mut().zip(bytes.chunks_exact(4)) {
            *word = color::compose_rgba(px[0], px[1], px[2], px[3]);
        }
        Ok(pix_mut.into())
    }

    /// Copy the image out as tightly packed RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data().len() * 4);
        for &pixel in self.data() {
            let (r, g, b, a) = color::extract_rgba(pixel);
            bytes.extend_from_slice(&[r, g, b, a]);
        }
        bytes
    }
}
