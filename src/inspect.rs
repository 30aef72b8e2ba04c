//! File metadata for images on disk.
use std::fs;
use std::path::Path;

use crate::codec;
use crate::error::{Error, Result};
use crate::format::ImageFormat;

/// Basic facts about an image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// File length in bytes.
    pub size_bytes: u64,
    /// Format inferred from the file name, not from the content.
    pub format: ImageFormat,
}

/// Reports the dimensions, size and extension-derived format of the image at
/// `path`.
///
/// # Errors
///
/// * [`Error::EmptyArgument`] if `path` is empty.
/// * [`Error::NotFound`] if nothing exists at `path`.
/// * [`Error::InvalidImage`] if the file cannot be fully decoded, including
///   files whose header is intact but whose pixel data is cut short.
///
/// # Example
///
/// ```no_run
/// use qrlogo::inspect::inspect;
///
/// let info = inspect("photo.webp").unwrap();
/// println!("{}x{} {} bytes ({})", info.width, info.height, info.size_bytes, info.format);
/// ```
pub fn inspect(path: impl AsRef<Path>) -> Result<ImageInfo> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::EmptyArgument("path"));
    }
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let (width, height) = codec::decode(&bytes)?.dimensions();
    Ok(ImageInfo {
        width,
        height,
        size_bytes: bytes.len() as u64,
        format: ImageFormat::from_path(path),
    })
}
