//! PNG image format support
//!
//! Every PNG variant is normalized to 8-bit channels on read (palettes and
//! `tRNS` chunks expanded, 16-bit samples stripped). Output is always
//! 8-bit RGBA so transparency survives a read/write cycle.

use crate::{IoError, IoResult};
use extruder_core::{ImageFormat, Pix, PixMut, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let color_type = output_info.color_type;
    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth {:?}",
            output_info.bit_depth
        )));
    }

    let (samples, spp) = match color_type {
        ColorType::Grayscale => (1, 3),
        ColorType::GrayscaleAlpha => (2, 4),
        ColorType::Rgb => (3, 3),
        ColorType::Rgba => (4, 4),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG color type {:?} was not expanded",
                other
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    if bytes_per_row < width as usize * samples {
        return Err(IoError::InvalidData(format!(
            "PNG row of {} bytes is too short for {} pixels",
            bytes_per_row, width
        )));
    }

    // Tightly packed RGBA maps straight onto the pixel words
    if color_type == ColorType::Rgba && bytes_per_row == width as usize * 4 {
        let pix = Pix::from_rgba_bytes(width, height, data)?;
        let mut pix_mut = pix.try_into_mut().unwrap_or_else(|pix| pix.to_mut());
        pix_mut.set_informat(ImageFormat::Png);
        return Ok(pix_mut.into());
    }

    let mut pix_mut = PixMut::new(width, height)?;
    pix_mut.set_spp(spp)?;
    pix_mut.set_informat(ImageFormat::Png);

    for y in 0..height {
        let row = &data[y as usize * bytes_per_row..][..width as usize * samples];
        for (x, px) in row.chunks_exact(samples).enumerate() {
            let pixel = match color_type {
                ColorType::Grayscale => color::compose_rgb(px[0], px[0], px[0]),
                ColorType::GrayscaleAlpha => color::compose_rgba(px[0], px[0], px[0], px[1]),
                ColorType::Rgb => color::compose_rgb(px[0], px[1], px[2]),
                _ => color::compose_rgba(px[0], px[1], px[2], px[3]),
            };
            pix_mut.set_pixel_unchecked(x as u32, y, pixel);
        }
    }

    Ok(pix_mut.into())
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&pix.to_rgba_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
