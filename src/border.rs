//! Whitespace control around a rendered symbol.
//!
//! The symbol's footprint is stretched (nearest neighbour, so module edges stay
//! crisp) until exactly `border` white pixels remain on every side of the
//! canvas.
use image::imageops::{self, FilterType};

use crate::error::{Error, Result};
use crate::render::{Canvas, Footprint, WHITE};

/// Computes the border that will actually be applied, or `None` when borders
/// are disabled (`requested < 0`).
///
/// The request is capped at a tenth of the footprint width (the height is not
/// consulted), then at the largest value that keeps both inner dimensions
/// positive.
///
/// # Example
///
/// ```
/// use qrlogo::border::effective_border;
/// use qrlogo::render::Footprint;
///
/// let footprint = Footprint { start_x: 20, start_y: 20, width: 280, height: 280 };
/// assert_eq!(effective_border(&footprint, 1000, 320, 320), Some(28));
/// assert_eq!(effective_border(&footprint, 5, 320, 320), Some(5));
/// assert_eq!(effective_border(&footprint, -1, 320, 320), None);
/// ```
pub fn effective_border(
    footprint: &Footprint,
    requested: i32,
    canvas_width: u32,
    canvas_height: u32,
) -> Option<u32> {
    let requested = u32::try_from(requested).ok()?;
    let cap = footprint.width / 10;
    let keep_inner = canvas_width.min(canvas_height).saturating_sub(1) / 2;
    Some(requested.min(cap).min(keep_inner))
}

/// Moves the footprint of `canvas` so that it sits exactly `requested` pixels
/// (after clamping, see [`effective_border`]) from every canvas edge.
///
/// The old canvas is consumed and a new `canvas_width` x `canvas_height` one is
/// returned with the updated footprint. A negative `requested` returns the
/// inputs unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidBorder`] if no positive inner area remains, which
/// only happens for a zero-sized canvas.
pub fn reallocate_border(
    canvas: Canvas,
    footprint: Footprint,
    requested: i32,
    canvas_width: u32,
    canvas_height: u32,
) -> Result<(Canvas, Footprint)> {
    let Some(border) = effective_border(&footprint, requested, canvas_width, canvas_height) else {
        return Ok((canvas, footprint));
    };

    let inner_width = canvas_width.saturating_sub(2 * border);
    let inner_height = canvas_height.saturating_sub(2 * border);
    if inner_width == 0 || inner_height == 0 || footprint.width == 0 || footprint.height == 0 {
        return Err(Error::InvalidBorder {
            border: requested,
            width: canvas_width,
            height: canvas_height,
        });
    }
    if border as i32 != requested {
        tracing::debug!(requested, border, "border clamped");
    }

    let symbol = imageops::crop_imm(
        &canvas,
        footprint.start_x,
        footprint.start_y,
        footprint.width,
        footprint.height,
    )
    .to_image();
    drop(canvas);

    let scaled = imageops::resize(&symbol, inner_width, inner_height, FilterType::Nearest);
    let mut target = Canvas::from_pixel(canvas_width, canvas_height, WHITE);
    imageops::replace(&mut target, &scaled, border as i64, border as i64);

    let footprint = Footprint {
        start_x: border,
        start_y: border,
        width: inner_width,
        height: inner_height,
    };
    Ok((target, footprint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::ModuleGrid;
    use crate::render::{render, BLACK};

    /// A solid square of `size` pixels at `(at, at)` on a `canvas` sized canvas.
    fn square(canvas: u32, at: u32, size: u32) -> (Canvas, Footprint) {
        let grid = ModuleGrid::from_fn(canvas, canvas, |x, y| {
            (at..at + size).contains(&x) && (at..at + size).contains(&y)
        });
        render(&grid, canvas, canvas).unwrap()
    }

    /// Distances from the dark region to the left, top, right and bottom edges.
    fn margins(canvas: &Canvas) -> (u32, u32, u32, u32) {
        let (w, h) = canvas.dimensions();
        let dark: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == BLACK)
            .map(|(x, y, _)| (x, y))
            .collect();
        let min_x = dark.iter().map(|p| p.0).min().unwrap();
        let max_x = dark.iter().map(|p| p.0).max().unwrap();
        let min_y = dark.iter().map(|p| p.1).min().unwrap();
        let max_y = dark.iter().map(|p| p.1).max().unwrap();
        (min_x, min_y, w - 1 - max_x, h - 1 - max_y)
    }

    #[test]
    fn test_border_distance_matches_request() {
        for b in [0, 1, 7, 28] {
            let (canvas, footprint) = square(320, 20, 280);
            let (canvas, footprint) = reallocate_border(canvas, footprint, b, 320, 320).unwrap();
            let b = b as u32;
            assert_eq!(footprint, Footprint { start_x: b, start_y: b, width: 320 - 2 * b, height: 320 - 2 * b });
            assert_eq!(margins(&canvas), (b, b, b, b));
        }
    }

    #[test]
    fn test_border_is_clamped_to_tenth_of_width() {
        let (canvas, footprint) = square(320, 20, 280);
        let (canvas, footprint) = reallocate_border(canvas, footprint, 1000, 320, 320).unwrap();
        assert_eq!(footprint.start_x, 28);
        assert_eq!(footprint.width, 320 - 56);
        assert_eq!(margins(&canvas), (28, 28, 28, 28));
    }

    #[test]
    fn test_cap_uses_width_only() {
        let footprint = Footprint { start_x: 0, start_y: 0, width: 200, height: 50 };
        assert_eq!(effective_border(&footprint, 100, 320, 320), Some(20));
    }

    #[test]
    fn test_cap_keeps_inner_area_positive() {
        let footprint = Footprint { start_x: 0, start_y: 0, width: 300, height: 300 };
        assert_eq!(effective_border(&footprint, 30, 40, 9), Some(4));
        let footprint = Footprint::full(3, 3);
        assert_eq!(effective_border(&footprint, 5, 3, 3), Some(0));
    }

    #[test]
    fn test_negative_border_is_identity() {
        let (canvas, footprint) = square(64, 10, 30);
        let original = canvas.clone();
        let (canvas, after) = reallocate_border(canvas, footprint, -1, 64, 64).unwrap();
        assert_eq!(after, footprint);
        assert_eq!(canvas.as_raw(), original.as_raw());
    }

    #[test]
    fn test_nearest_resampling_stays_binary() {
        let grid = ModuleGrid::from_fn(64, 64, |x, y| (10..50).contains(&x) && (10..50).contains(&y) && (x + y) % 3 == 0);
        let (canvas, footprint) = render(&grid, 64, 64).unwrap();
        let (canvas, _) = reallocate_border(canvas, footprint, 2, 64, 64).unwrap();
        assert!(canvas.pixels().all(|p| *p == BLACK || *p == WHITE));
    }

    #[test]
    fn test_zero_canvas_is_invalid_border() {
        let canvas = Canvas::new(0, 0);
        let footprint = Footprint::full(0, 0);
        assert!(matches!(
            reallocate_border(canvas, footprint, 0, 0, 0),
            Err(Error::InvalidBorder { .. })
        ));
    }
}
