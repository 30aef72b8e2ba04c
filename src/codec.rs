//! Raster encoding and decoding on top of the `image` crate.
use std::io::{Cursor, Read};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageReader, RgbaImage};

use crate::error::{Error, Result};
use crate::format::ImageFormat;
use crate::render::Canvas;

/// Quality used for lossy encodes, on a 0-100 scale.
pub const ENCODE_QUALITY: u8 = 75;

/// Encodes `canvas` as `format`.
///
/// JPEG is written at [`ENCODE_QUALITY`] without alpha. WebP output is
/// lossless. ICO images are limited to 256x256 by the format and larger
/// canvases fail with [`Error::Codec`].
///
/// # Errors
///
/// * [`Error::UnsupportedFormat`] for formats that can only be inspected.
/// * [`Error::Codec`] if the encoder fails.
pub fn encode(canvas: &Canvas, format: ImageFormat) -> Result<Vec<u8>> {
    let target = format
        .to_image_format()
        .ok_or(Error::UnsupportedFormat(format))?;

    let mut bytes = Vec::new();
    match format {
        ImageFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(canvas.clone()).into_rgb8();
            let encoder = JpegEncoder::new_with_quality(&mut bytes, ENCODE_QUALITY);
            rgb.write_with_encoder(encoder)?;
        }
        _ => canvas.write_to(&mut Cursor::new(&mut bytes), target)?,
    }
    tracing::debug!(%format, len = bytes.len(), "encoded canvas");
    Ok(bytes)
}

/// Maps a decoder failure to the crate taxonomy: anything the codec could not
/// make sense of is an unrecognized image.
fn decode_error(err: ImageError) -> Error {
    match err {
        ImageError::Decoding(_) | ImageError::Unsupported(_) => Error::InvalidImage(err.to_string()),
        ImageError::IoError(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
            Error::InvalidImage(io.to_string())
        }
        other => Error::Codec(other),
    }
}

/// Decodes an encoded image of any supported format, sniffing the format
/// from the content.
///
/// # Errors
///
/// Returns [`Error::InvalidImage`] if the bytes are not a recognizable image
/// or decode to an empty bitmap.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()
        .map_err(decode_error)?;
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::InvalidImage("image has no pixels".to_string()));
    }
    Ok(image.into_rgba8())
}

/// Reads `reader` to the end and decodes the result like [`decode`].
pub fn decode_reader(mut reader: impl Read) -> Result<RgbaImage> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}

/// Reads the dimensions of the image at `path` from its header.
///
/// Only the header is parsed, so a file with truncated pixel data still
/// reports its size here. Use [`decode`] to validate the whole image.
///
/// # Errors
///
/// Returns [`Error::InvalidImage`] if the file is not a recognizable image and
/// [`Error::Io`] if it cannot be opened.
pub fn decode_dimensions(path: impl AsRef<Path>) -> Result<(u32, u32)> {
    let (width, height) = ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()
        .map_err(decode_error)?;
    if width == 0 || height == 0 {
        return Err(Error::InvalidImage("image has no pixels".to_string()));
    }
    Ok((width, height))
}
