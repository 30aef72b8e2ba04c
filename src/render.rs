//! Rasterization of module grids onto pixel canvases.
use image::{Rgba, RgbaImage};

use crate::error::{Error, Result};
use crate::matrix::ModuleGrid;

/// The pixel buffer every pipeline stage works on.
pub type Canvas = RgbaImage;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Bounding box of the dark pixels actually drawn on a canvas.
///
/// `width` and `height` count pixels inclusively, so the box always lies
/// inside the canvas it was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub start_x: u32,
    pub start_y: u32,
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    /// A footprint covering the whole of a `width` x `height` canvas.
    pub fn full(width: u32, height: u32) -> Self {
        Self { start_x: 0, start_y: 0, width, height }
    }
}

/// Running min/max of painted coordinates.
struct Bounds {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
}

impl Bounds {
    fn at(x: u32, y: u32) -> Self {
        Self { min_x: x, min_y: y, max_x: x, max_y: y }
    }

    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn footprint(&self) -> Footprint {
        Footprint {
            start_x: self.min_x,
            start_y: self.min_y,
            width: self.max_x - self.min_x + 1,
            height: self.max_y - self.min_y + 1,
        }
    }
}

/// Paints `grid` black-on-white onto a new `width` x `height` canvas and
/// reports where the dark pixels ended up.
///
/// One grid cell maps to one pixel. A grid with no dark cell yields a
/// footprint covering the whole canvas; that never happens for a real QR
/// symbol, so it is logged as a warning.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either dimension is zero or the grid
/// size differs from the requested canvas size.
///
/// # Example
///
/// ```
/// use qrlogo::matrix::ModuleGrid;
/// use qrlogo::render::render;
///
/// let grid = ModuleGrid::from_fn(8, 8, |x, y| (2..5).contains(&x) && (3..7).contains(&y));
/// let (canvas, footprint) = render(&grid, 8, 8).unwrap();
/// assert_eq!(canvas.dimensions(), (8, 8));
/// assert_eq!((footprint.start_x, footprint.start_y), (2, 3));
/// assert_eq!((footprint.width, footprint.height), (3, 4));
/// ```
pub fn render(grid: &ModuleGrid, width: u32, height: u32) -> Result<(Canvas, Footprint)> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidInput(format!(
            "canvas size {}x{} must be positive",
            width, height
        )));
    }
    if grid.width() != width || grid.height() != height {
        return Err(Error::InvalidInput(format!(
            "grid is {}x{} but canvas is {}x{}",
            grid.width(),
            grid.height(),
            width,
            height
        )));
    }

    let mut canvas = Canvas::from_pixel(width, height, WHITE);
    let mut bounds: Option<Bounds> = None;

    for y in 0..height {
        for x in 0..width {
            if !grid.get(x, y) {
                continue;
            }
            canvas.put_pixel(x, y, BLACK);
            bounds.get_or_insert_with(|| Bounds::at(x, y)).include(x, y);
        }
    }

    let footprint = match bounds {
        Some(b) => b.footprint(),
        None => {
            tracing::warn!(width, height, "rendered grid has no dark modules");
            Footprint::full(width, height)
        }
    };
    tracing::debug!(?footprint, "rendered canvas");

    Ok((canvas, footprint))
}
