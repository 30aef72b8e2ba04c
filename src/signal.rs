//! Luminance signals for the QR decoder.
//!
//! Pixels are laid out column by column (outer loop over x, inner over y) as
//! R, G, B triples. [`LuminanceSource`] reads that exact layout back when it
//! feeds the decoder, so the two must change together: a transposed read
//! still "works" but produces a mirrored symbol.
use image::RgbaImage;
use rqrr::PreparedImage;

use crate::error::{Error, Result};

/// Character set of decoded payloads. rqrr takes no charset hint and always
/// reads byte-mode data as UTF-8; this only labels the debug log.
pub(crate) const CHARACTER_SET: &str = "UTF-8";

/// RGB pixels of one image in column-major order, with their dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceSource {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl LuminanceSource {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw interleaved RGB buffer, `width * height * 3` bytes long.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The R, G, B triple of pixel `(x, y)`. Panics if `(x, y)` is out of
    /// range.
    pub(crate) fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (x as usize * self.height as usize + y as usize) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Green-weighted brightness of pixel `(x, y)`: `(R + 2G + B) / 4`.
    pub(crate) fn luminance(&self, x: u32, y: u32) -> u8 {
        let [r, g, b] = self.rgb(x, y);
        ((r as u32 + 2 * g as u32 + b as u32) / 4) as u8
    }
}

/// Copies the color channels of `image` into a column-major [`LuminanceSource`].
///
/// Alpha is dropped.
pub fn build_signal(image: &RgbaImage) -> LuminanceSource {
    let (width, height) = image.dimensions();
    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    let mut i = 0;
    for x in 0..width {
        for y in 0..height {
            let p = image.get_pixel(x, y);
            pixels[i..i + 3].copy_from_slice(&p.0[..3]);
            i += 3;
        }
    }
    LuminanceSource { width, height, pixels }
}

/// Runs the QR decoder over `source` and returns the first symbol's text.
///
/// Finding no symbol is not an error and yields an empty string.
///
/// # Errors
///
/// Returns [`Error::Decoder`] if a symbol was located but could not be read,
/// including payloads that are not valid UTF-8.
pub fn decode_signal(source: &LuminanceSource) -> Result<String> {
    let mut prepared = PreparedImage::prepare_from_greyscale(
        source.width as usize,
        source.height as usize,
        |x, y| source.luminance(x as u32, y as u32),
    );
    let grids = prepared.detect_grids();
    let Some(grid) = grids.first() else {
        tracing::debug!(width = source.width, height = source.height, "no qr symbol found");
        return Ok(String::new());
    };

    let (meta, text) = grid.decode().map_err(Error::Decoder)?;
    tracing::debug!(
        version = ?meta.version,
        ecc_level = meta.ecc_level,
        charset = CHARACTER_SET,
        len = text.len(),
        "decoded qr symbol"
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_signal_is_column_major() {
        let image = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 10 * x as u8 + y as u8, 7]));
        let signal = build_signal(&image);
        assert_eq!(signal.pixels().len(), 3 * 2 * 3);
        // (0,0), (0,1), (1,0), ...
        assert_eq!(&signal.pixels()[..9], &[0, 0, 0, 0, 1, 1, 1, 0, 10]);
        for x in 0..3 {
            for y in 0..2 {
                let i = (x * 2 + y) as usize * 3;
                assert_eq!(&signal.pixels()[i..i + 3], &image.get_pixel(x, y).0[..3]);
                assert_eq!(signal.rgb(x, y), [x as u8, y as u8, 10 * x as u8 + y as u8]);
            }
        }
    }

    #[test]
    fn test_luminance_weights_green() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([100, 200, 40, 255]));
        let signal = build_signal(&image);
        assert_eq!(signal.luminance(0, 0), ((100 + 400 + 40) / 4) as u8);
    }

    #[test]
    fn test_blank_image_is_a_miss() {
        let image = RgbaImage::from_pixel(64, 48, Rgba([255, 255, 255, 255]));
        assert_eq!(decode_signal(&build_signal(&image)).unwrap(), "");
    }

    #[test]
    fn test_decode_rendered_symbol() {
        let grid = crate::matrix::encode_grid("column major", 200, 120).unwrap();
        let (canvas, _) = crate::render::render(&grid, 200, 120).unwrap();
        assert_eq!(decode_signal(&build_signal(&canvas)).unwrap(), "column major");
    }
}
