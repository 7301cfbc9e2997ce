//! extruder-io - Image I/O for the tile-sheet extruder
//!
//! Reads encoded images into [`Pix`] and writes them back out. Only
//! formats that keep the alpha channel intact are accepted for output,
//! because extruded gutters must stay exactly as transparent as the tile
//! edges they replicate.
//!
//! # Supported formats
//!
//! | Format | Read | Write |
//! |--------|------|-------|
//! | PNG    | yes  | yes (8-bit RGBA) |
//!
//! JPEG, BMP, GIF, TIFF, WebP and PNM are recognized by their signature
//! and rejected with a message naming the format.

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use extruder_core::ImageFormat;
pub use format::{detect_format, detect_format_from_bytes, format_from_path};

use extruder_core::Pix;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// The format is detected from the file contents, not the extension.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened or read (a missing
/// file keeps its `NotFound` kind), [`IoError::UnsupportedFormat`] for
/// formats without a decoder, and [`IoError::DecodeError`] for corrupt data.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let data = std::fs::read(path)?;
    read_image_mem(&data)
}

/// Read an image from an in-memory encoded buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "{} images cannot be decoded",
            other.extension()
        ))),
    }
}

/// Check whether `format` can be written without losing transparency.
pub fn is_writable(format: ImageFormat) -> bool {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => true,
        _ => false,
    }
}

/// Write an image to a file path in the given format.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] before touching the file system
/// if the format cannot be written, [`IoError::Io`] if the file cannot be
/// created, and [`IoError::EncodeError`] if encoding fails.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    ensure_writable(format)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_to(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Write an image to any writer in the given format.
pub fn write_image_to<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        other => ensure_writable(other),
    }
}

/// Encode an image into a new byte vector.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(pix, &mut buffer, format)?;
    Ok(buffer)
}

fn ensure_writable(format: ImageFormat) -> IoResult<()> {
    if is_writable(format) {
        Ok(())
    } else {
        Err(IoError::UnsupportedFormat(format!(
            "cannot write {} output with an alpha channel",
            format.extension()
        )))
    }
}
