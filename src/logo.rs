//! Centered logo overlays.
//!
//! A logo is shrunk to at most a sixth of the footprint in each direction,
//! keeping its aspect ratio, and alpha-blended over the middle of the symbol.
//! Covering modules costs error-correction capacity, so a symbol with a logo is
//! not guaranteed to decode.
use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::codec;
use crate::render::{Canvas, Footprint};

/// Logos are limited to `1 / LOGO_FRACTION` of the footprint per axis.
pub const LOGO_FRACTION: u32 = 6;

/// Decodes logo bytes, returning `None` for anything that is not a usable
/// bitmap.
///
/// A bad logo is cosmetic, so the reason is only logged.
pub fn decode_logo(bytes: &[u8]) -> Option<RgbaImage> {
    if bytes.is_empty() {
        return None;
    }
    match codec::decode(bytes) {
        Ok(logo) => Some(logo),
        Err(err) => {
            tracing::debug!(%err, "ignoring undecodable logo");
            None
        }
    }
}

/// Fits a `width` x `height` logo inside a sixth of `footprint`.
///
/// The width constraint is applied first and the height constraint second,
/// each scaling both sides and flooring the derived one. When both constraints
/// bind, this order matters.
///
/// # Example
///
/// ```
/// use qrlogo::logo::fit_logo;
/// use qrlogo::render::Footprint;
///
/// let footprint = Footprint { start_x: 0, start_y: 0, width: 240, height: 240 };
/// assert_eq!(fit_logo(100, 50, &footprint), (40, 20));
/// assert_eq!(fit_logo(30, 20, &footprint), (30, 20));
/// ```
pub fn fit_logo(width: u32, height: u32, footprint: &Footprint) -> (u32, u32) {
    let max_width = footprint.width / LOGO_FRACTION;
    let max_height = footprint.height / LOGO_FRACTION;
    let (mut w, mut h) = (width, height);

    if w > max_width {
        let ratio = max_width as f64 / w as f64;
        w = max_width;
        h = (h as f64 * ratio).floor() as u32;
    }
    if h > max_height {
        let ratio = max_height as f64 / h as f64;
        h = max_height;
        w = (w as f64 * ratio).floor() as u32;
    }
    (w, h)
}

/// Top-left corner that centers a `width` x `height` logo in `footprint`.
fn centered_origin(width: u32, height: u32, footprint: &Footprint) -> (i64, i64) {
    let x = footprint.start_x as i64 + (footprint.width / 2) as i64 - (width / 2) as i64;
    let y = footprint.start_y as i64 + (footprint.height / 2) as i64 - (height / 2) as i64;
    (x, y)
}

/// Draws the logo encoded in `logo_bytes` over the center of `footprint`.
///
/// Empty or undecodable bytes leave the canvas untouched, as does a footprint
/// too small to hold a one-pixel logo.
pub fn composite_logo(mut canvas: Canvas, footprint: &Footprint, logo_bytes: &[u8]) -> Canvas {
    let Some(logo) = decode_logo(logo_bytes) else {
        return canvas;
    };

    let (width, height) = fit_logo(logo.width(), logo.height(), footprint);
    if width == 0 || height == 0 {
        tracing::debug!(?footprint, "footprint too small for a logo");
        return canvas;
    }

    let scaled = if (width, height) == logo.dimensions() {
        logo
    } else {
        imageops::resize(&logo, width, height, FilterType::Triangle)
    };
    let (x, y) = centered_origin(width, height, footprint);
    tracing::debug!(width, height, x, y, "compositing logo");
    imageops::overlay(&mut canvas, &scaled, x, y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ImageFormat;
    use crate::render::WHITE;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn is_red(p: &Rgba<u8>) -> bool {
        p[0] > 200 && p[1] < 55 && p[2] < 55
    }

    fn footprint(width: u32, height: u32) -> Footprint {
        Footprint { start_x: 10, start_y: 10, width, height }
    }

    fn encoded_logo(width: u32, height: u32) -> Vec<u8> {
        let logo = RgbaImage::from_pixel(width, height, RED);
        codec::encode(&logo, ImageFormat::Png).unwrap()
    }

    #[test]
    fn test_fit_respects_bounds_and_aspect() {
        let fp = footprint(245, 245);
        for (w, h) in [(1000, 10), (10, 1000), (400, 300), (77, 77), (5, 3)] {
            let (fw, fh) = fit_logo(w, h, &fp);
            assert!(fw <= 245 / 6 && fh <= 245 / 6, "{}x{} -> {}x{}", w, h, fw, fh);
            let expected_h = fw as f64 * h as f64 / w as f64;
            assert!((fh as f64 - expected_h).abs() <= 1.0, "{}x{} -> {}x{}", w, h, fw, fh);
        }
    }

    #[test]
    fn test_fit_applies_width_before_height() {
        // Bounds are 40x10. Width first: 100x26 -> 40x10 and the height
        // check no longer binds. Height first would give 100x26 -> 38x10.
        let fp = footprint(240, 60);
        assert_eq!(fit_logo(100, 26, &fp), (40, 10));

        let height_first_width = (100.0_f64 * (10.0 / 26.0)).floor() as u32;
        assert_eq!(height_first_width, 38);
    }

    #[test]
    fn test_logo_is_centered_in_footprint() {
        let fp = footprint(240, 240);
        let canvas = Canvas::from_pixel(260, 260, WHITE);
        let canvas = composite_logo(canvas, &fp, &encoded_logo(20, 10));

        // 10 + 120 - 10 = 120, 10 + 120 - 5 = 125
        assert!(is_red(canvas.get_pixel(120, 125)));
        assert!(is_red(canvas.get_pixel(139, 134)));
        assert_eq!(*canvas.get_pixel(119, 125), WHITE);
        assert_eq!(*canvas.get_pixel(120, 124), WHITE);
        assert_eq!(*canvas.get_pixel(140, 125), WHITE);
        assert_eq!(*canvas.get_pixel(120, 135), WHITE);
    }

    #[test]
    fn test_large_logo_is_shrunk() {
        let fp = footprint(240, 240);
        let canvas = Canvas::from_pixel(260, 260, WHITE);
        let canvas = composite_logo(canvas, &fp, &encoded_logo(400, 200));

        let red: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| is_red(p))
            .map(|(x, y, _)| (x, y))
            .collect();
        let min_x = red.iter().map(|p| p.0).min().unwrap();
        let max_x = red.iter().map(|p| p.0).max().unwrap();
        let min_y = red.iter().map(|p| p.1).min().unwrap();
        let max_y = red.iter().map(|p| p.1).max().unwrap();
        assert_eq!(max_x - min_x + 1, 40);
        assert_eq!(max_y - min_y + 1, 20);
    }

    #[test]
    fn test_bad_logo_is_ignored() {
        let fp = footprint(240, 240);
        let canvas = Canvas::from_pixel(260, 260, WHITE);
        let before = canvas.clone();
        let canvas = composite_logo(canvas, &fp, b"definitely not an image");
        assert_eq!(canvas.as_raw(), before.as_raw());
        let canvas = composite_logo(canvas, &fp, &[]);
        assert_eq!(canvas.as_raw(), before.as_raw());
        assert!(decode_logo(b"GIF89a").is_none());
    }

    #[test]
    fn test_tiny_footprint_skips_logo() {
        let fp = footprint(5, 5);
        let canvas = Canvas::from_pixel(20, 20, WHITE);
        let canvas = composite_logo(canvas, &fp, &encoded_logo(8, 8));
        assert!(canvas.pixels().all(|p| *p == WHITE));
    }
}
