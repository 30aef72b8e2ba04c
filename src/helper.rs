//! High-level entry points: text to encoded QR image and back.
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::border::reallocate_border;
use crate::codec;
use crate::error::{Error, Result};
use crate::format::ImageFormat;
use crate::logo::composite_logo;
use crate::matrix::encode_grid;
use crate::render::{render, Canvas};
use crate::signal::{build_signal, decode_signal};

/// Border value meaning "leave the encoder's margin as it is".
pub const BORDER_DISABLED: i32 = -1;

/// Options for [`encode`] and friends.
///
/// The defaults produce a 320x320 PNG with no logo and the encoder's own
/// margin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    /// Encoded logo image, drawn over the center of the symbol.
    pub logo: Option<Vec<u8>>,
    /// White pixels to keep around the symbol; negative disables the
    /// adjustment. Capped at a tenth of the symbol width.
    pub border: i32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            width: 320,
            height: 320,
            logo: None,
            border: BORDER_DISABLED,
        }
    }
}

impl EncodeOptions {
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_logo(mut self, logo: impl Into<Vec<u8>>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_border(mut self, border: i32) -> Self {
        self.border = border;
        self
    }
}

/// Runs the drawing part of the pipeline: grid, render, border, logo.
///
/// # Arguments
///
/// * `text` - The content to encode, as UTF-8.
/// * `options` - Canvas size, logo and border. The format is ignored.
///
/// # Example
///
/// ```
/// use qrlogo::helper::{render_canvas, EncodeOptions};
///
/// let canvas = render_canvas("Hello, World!", &EncodeOptions::default().with_border(8)).unwrap();
/// assert_eq!(canvas.dimensions(), (320, 320));
/// ```
pub fn render_canvas(text: &str, options: &EncodeOptions) -> Result<Canvas> {
    let grid = encode_grid(text, options.width, options.height)?;
    let (canvas, footprint) = render(&grid, options.width, options.height)?;
    let (canvas, footprint) =
        reallocate_border(canvas, footprint, options.border, options.width, options.height)?;

    let canvas = match options.logo.as_deref() {
        Some(logo) => composite_logo(canvas, &footprint, logo),
        None => canvas,
    };
    Ok(canvas)
}

/// Generates a QR code image and returns the encoded bytes.
///
/// # Arguments
///
/// * `text` - The content to encode, as UTF-8.
/// * `options` - Output format, canvas size, logo and border.
///
/// # Errors
///
/// Fails if the text does not fit a version 8 symbol at level Q, if the
/// geometry is invalid, or if the format cannot be encoded. An undecodable
/// logo is skipped rather than reported.
///
/// # Example
///
/// ```
/// use qrlogo::helper::{encode, EncodeOptions};
///
/// let png = encode("Hello, World!", &EncodeOptions::default()).unwrap();
/// assert!(png.starts_with(b"\x89PNG"));
/// ```
pub fn encode(text: &str, options: &EncodeOptions) -> Result<Vec<u8>> {
    let canvas = render_canvas(text, options)?;
    codec::encode(&canvas, options.format)
}

/// Generates a QR code image and writes it to `path`, replacing any existing
/// file.
///
/// The image is fully encoded first, then written to a temporary file next to
/// `path` and renamed over it. A failed encode or write never touches `path`.
///
/// # Example
///
/// ```no_run
/// use qrlogo::format::ImageFormat;
/// use qrlogo::helper::{encode_to_file, read_logo, EncodeOptions};
///
/// let mut options = EncodeOptions::default().with_format(ImageFormat::Jpeg).with_border(10);
/// options.logo = read_logo("logo.png").unwrap();
/// encode_to_file("https://example.com", "qr.jpg", &options).unwrap();
/// ```
pub fn encode_to_file(text: &str, path: impl AsRef<Path>, options: &EncodeOptions) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode(text, options)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(&bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;

    tracing::debug!(path = %path.display(), len = bytes.len(), "wrote qr image");
    Ok(())
}

/// Loads logo bytes from `path`, or `None` when the path is empty or missing.
pub fn read_logo(path: impl AsRef<Path>) -> Result<Option<Vec<u8>>> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() || !path.exists() {
        return Ok(None);
    }
    Ok(Some(fs::read(path)?))
}

/// Decodes the QR code contained in an encoded image.
///
/// Returns an empty string when the image holds no readable symbol.
///
/// # Errors
///
/// * [`Error::EmptyArgument`] if `bytes` is empty.
/// * [`Error::InvalidImage`] if `bytes` is not a recognizable image.
///
/// # Example
///
/// ```
/// use qrlogo::helper::{decode_bytes, encode, EncodeOptions};
///
/// let png = encode("hello", &EncodeOptions::default()).unwrap();
/// assert_eq!(decode_bytes(&png).unwrap(), "hello");
/// ```
pub fn decode_bytes(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Err(Error::EmptyArgument("bytes"));
    }
    let image = codec::decode(bytes)?;
    decode_signal(&build_signal(&image))
}

/// Decodes the QR code contained in the image file at `path`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the file does not exist, otherwise as
/// [`decode_bytes`].
pub fn decode_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let image = codec::decode_reader(fs::File::open(path)?)?;
    decode_signal(&build_signal(&image))
}

/// Decodes the QR code contained in an image read from `reader`.
pub fn decode_reader(reader: impl Read) -> Result<String> {
    let image = codec::decode_reader(reader)?;
    decode_signal(&build_signal(&image))
}
