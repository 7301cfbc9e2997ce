//! PIX - The RGBA image container
//!
//! The `Pix` structure is the pixel buffer every stage of the extruder
//! passes around.
//!
//! # Pixel layout
//!
//! - One 32-bit word per pixel, rows stored top to bottom
//! - Color order is RGBA (red in MSB, alpha in LSB), see [`crate::color`]
//! - A freshly created image is fully transparent (all words zero)
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
pub mod compare;
mod raw;
pub mod rop;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Image file format
///
/// Identifies the encoding an image was read from or should be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
    /// BMP format
    Bmp,
    /// GIF format
    Gif,
    /// TIFF format
    Tiff,
    /// WebP format
    WebP,
    /// PNM format
    Pnm,
}

impl ImageFormat {
    /// Get the canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
            Self::Tiff => "tif",
            Self::WebP => "webp",
            Self::Pnm => "pnm",
        }
    }

    /// Map a file extension (without the dot, any case) to a format.
    ///
    /// Unrecognized extensions map to [`ImageFormat::Unknown`].
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" | "jfif" => Self::Jpeg,
            "bmp" => Self::Bmp,
            "gif" => Self::Gif,
            "tif" | "tiff" => Self::Tiff,
            "webp" => Self::WebP,
            "pnm" | "pbm" | "pgm" | "ppm" => Self::Pnm,
            _ => Self::Unknown,
        }
    }
}

/// Internal PIX data
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel in the source encoding (3 for RGB, 4 for RGBA)
    spp: u32,
    /// Input file format
    informat: ImageFormat,
    /// The image data, one RGBA word per pixel
    data: Vec<u32>,
}

impl PixData {
    fn duplicate(&self) -> Self {
        PixData {
            width: self.width,
            height: self.height,
            spp: self.spp,
            informat: self.informat,
            data: self.data.clone(),
        }
    }
}

/// PIX - RGBA image container
///
/// `Pix` uses reference counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use extruder_core::Pix;
///
/// let pix = Pix::new(64, 32).unwrap();
/// assert_eq!(pix.width(), 64);
/// assert_eq!(pix.height(), 32);
/// assert_eq!(pix.get_pixel(0, 0), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new, fully transparent PIX.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or if
    /// the pixel count does not fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let data_size = Self::pixel_count(width, height)?;
        let inner = PixData {
            width,
            height,
            spp: 4,
            informat: ImageFormat::Unknown,
            data: vec![crate::color::TRANSPARENT; data_size],
        };

        Ok(Pix {
            inner: Arc::new(inner),
        })
    }

    /// Number of pixels in a `width` x `height` image.
    fn pixel_count(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|_| Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the samples per pixel of the source encoding.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixels of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = y as usize * self.inner.width as usize;
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Check if two PIX have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Write image metadata to a writer (for debugging).
    pub fn print_info(
        &self,
        writer: &mut impl std::io::Write,
        label: Option<&str>,
    ) -> std::io::Result<()> {
        if let Some(text) = label {
            writeln!(writer, "  Pix Info for {text}:")?;
        }
        writeln!(
            writer,
            "    width = {}, height = {}, spp = {}",
            self.inner.width, self.inner.height, self.inner.spp
        )?;
        writeln!(
            writer,
            "    input format: {:?} ({})",
            self.inner.informat,
            self.inner.informat.extension()
        )
    }

    /// Create a deep copy of this PIX.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(self.inner.duplicate()),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`PixMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: self.inner.duplicate(),
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`. Exclusive access is enforced at compile time.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Create a new, fully transparent mutable PIX.
    ///
    /// # Errors
    ///
    /// Same as [`Pix::new`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let data_size = Pix::pixel_count(width, height)?;
        Ok(PixMut {
            inner: PixData {
                width,
                height,
                spp: 4,
                informat: ImageFormat::Unknown,
                data: vec![crate::color::TRANSPARENT; data_size],
            },
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Set the samples per pixel (3 or 4).
    pub fn set_spp(&mut self, spp: u32) -> Result<()> {
        if !matches!(spp, 3 | 4) {
            return Err(Error::InvalidParameter(format!(
                "spp must be 3 or 4; got {spp}"
            )));
        }
        self.inner.spp = spp;
        Ok(())
    }

    /// Set the input format.
    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable raw access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to the pixels of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.inner.width as usize;
        let end = start + self.inner.width as usize;
        &mut self.inner.data[start..end]
    }

    /// Set all pixels to one value.
    pub fn set_all_arbitrary(&mut self, val: u32) {
        self.inner.data.fill(val);
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pix_creation() {
        let pix = Pix::new(100, 200).unwrap();
        assert_eq!(pix.width(), 100);
        assert_eq!(pix.height(), 200);
        assert_eq!(pix.spp(), 4);
        assert_eq!(pix.data().len(), 20_000);
    }

    #[test]
    fn test_pix_creation_invalid() {
        assert!(Pix::new(0, 100).is_err());
        assert!(Pix::new(100, 0).is_err());
        assert!(PixMut::new(0, 0).is_err());
    }

    #[test]
    fn test_new_pix_is_transparent() {
        let pix = Pix::new(7, 3).unwrap();
        assert!(pix.data().iter().all(|&p| p == crate::color::TRANSPARENT));
    }

    #[test]
    fn test_pix_clone_shares_data() {
        let pix1 = Pix::new(10, 10).unwrap();
        let pix2 = pix1.clone();

        assert_eq!(Arc::strong_count(&pix1.inner), 2);
        assert_eq!(Arc::strong_count(&pix2.inner), 2);
        assert_eq!(pix1.data().as_ptr(), pix2.data().as_ptr());
    }

    #[test]
    fn test_pix_deep_clone() {
        let pix1 = Pix::new(10, 10).unwrap();
        let pix2 = pix1.deep_clone();

        assert_eq!(Arc::strong_count(&pix1.inner), 1);
        assert_eq!(Arc::strong_count(&pix2.inner), 1);
        assert_ne!(pix1.data().as_ptr(), pix2.data().as_ptr());
    }

    #[test]
    fn test_try_into_mut_fails_when_shared() {
        let pix1 = Pix::new(4, 4).unwrap();
        let _pix2 = pix1.clone();
        assert!(pix1.try_into_mut().is_err());
    }

    #[test]
    fn test_pix_mut_metadata() {
        let mut pm = PixMut::new(4, 4).unwrap();
        pm.set_spp(3).unwrap();
        pm.set_informat(ImageFormat::Png);
        assert!(pm.set_spp(2).is_err());

        let pix: Pix = pm.into();
        assert_eq!(pix.spp(), 3);
        assert_eq!(pix.informat(), ImageFormat::Png);
    }

    #[test]
    fn test_row_data() {
        let mut pm = PixMut::new(3, 2).unwrap();
        pm.row_data_mut(1).copy_from_slice(&[1, 2, 3]);
        let pix: Pix = pm.into();
        assert_eq!(pix.row_data(0), &[0, 0, 0]);
        assert_eq!(pix.row_data(1), &[1, 2, 3]);
    }

    #[test]
    fn test_fill() {
        let mut pm = PixMut::new(2, 2).unwrap();
        pm.set_all_arbitrary(0xdeadbeef);
        assert!(pm.data().iter().all(|&p| p == 0xdeadbeef));
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(ImageFormat::from_extension("PNG"), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("jpeg"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("tiff"), ImageFormat::Tiff);
        assert_eq!(ImageFormat::from_extension("xyz"), ImageFormat::Unknown);
        assert_eq!(ImageFormat::Png.extension(), "png");
    }

    #[test]
    fn test_print_info() {
        let pix = Pix::new(5, 6).unwrap();
        let mut out = Vec::new();
        pix.print_info(&mut out, Some("sheet")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Pix Info for sheet"));
        assert!(text.contains("width = 5, height = 6"));
    }
}
