//! Module grids produced from text.
//!
//! The QR symbol itself (segment selection, error correction, masking) comes
//! from the `qrcode` crate. This module only fixes the encoder options and
//! expands the symbol to pixel resolution, so that one grid cell corresponds to
//! one canvas pixel.
use qrcode::{Color, EcLevel, QrCode, Version};

use crate::error::{Error, Result};

/// Symbol version used for every encode.
pub const QR_VERSION: i16 = 8;

/// Error-correction level used for every encode.
pub const EC_LEVEL: EcLevel = EcLevel::Q;

/// Light modules added on each side of the symbol before scaling.
pub const QUIET_ZONE_MODULES: usize = 4;

/// An immutable grid of dark (`true`) and light (`false`) cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    width: u32,
    height: u32,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Wraps a row-major cell vector.
    ///
    /// Fails with [`Error::InvalidInput`] when `modules.len() != width * height`.
    pub fn new(width: u32, height: u32, modules: Vec<bool>) -> Result<Self> {
        if modules.len() != width as usize * height as usize {
            return Err(Error::InvalidInput(format!(
                "{} modules cannot form a {}x{} grid",
                modules.len(),
                width,
                height
            )));
        }
        Ok(Self { width, height, modules })
    }

    /// Builds a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut modules = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                modules.push(f(x, y));
            }
        }
        Self { width, height, modules }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether the cell at `(x, y)` is dark. Out-of-range cells are light.
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.modules[(y * self.width + x) as usize]
    }
}

/// Encodes `text` as a version 8, level Q symbol and expands it to a
/// `width` x `height` pixel grid.
///
/// The symbol is surrounded by a four-module quiet zone, scaled by the largest
/// integer factor that fits both dimensions, and centered. When the requested
/// size is smaller than the symbol plus its quiet zone the grid grows to that
/// minimum instead.
///
/// # Errors
///
/// * [`Error::InvalidInput`] if `width` or `height` is zero.
/// * [`Error::Encode`] if `text` does not fit in a version 8 symbol at level Q.
///
/// # Example
///
/// ```
/// use qrlogo::matrix::encode_grid;
///
/// let grid = encode_grid("hello", 320, 320).unwrap();
/// assert_eq!((grid.width(), grid.height()), (320, 320));
/// ```
pub fn encode_grid(text: &str, width: u32, height: u32) -> Result<ModuleGrid> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidInput(format!(
            "canvas size {}x{} must be positive",
            width, height
        )));
    }

    let code = QrCode::with_version(text.as_bytes(), Version::Normal(QR_VERSION), EC_LEVEL)?;
    let symbol = code.width();
    let padded = (symbol + QUIET_ZONE_MODULES * 2) as u32;

    let out_width = width.max(padded);
    let out_height = height.max(padded);
    let multiple = (out_width / padded).min(out_height / padded);
    let left = (out_width - symbol as u32 * multiple) / 2;
    let top = (out_height - symbol as u32 * multiple) / 2;
    let span = symbol as u32 * multiple;

    tracing::debug!(symbol, multiple, left, top, "expanding qr symbol to pixel grid");

    Ok(ModuleGrid::from_fn(out_width, out_height, |x, y| {
        if x < left || y < top || x >= left + span || y >= top + span {
            return false;
        }
        let mx = ((x - left) / multiple) as usize;
        let my = ((y - top) / multiple) as usize;
        code[(mx, my)] == Color::Dark
    }))
}
