//! Error taxonomy shared by every pipeline stage.
use std::path::PathBuf;

use crate::format::ImageFormat;

/// Errors produced while rendering, decoding or inspecting QR images.
///
/// A decoder that completes without finding a symbol is not an error: the
/// decode functions return an empty string in that case.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Geometry inputs are inconsistent (grid/canvas mismatch, zero dimensions).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested border leaves no drawable area inside the canvas.
    #[error("border {border} leaves no inner area on a {width}x{height} canvas")]
    InvalidBorder { border: i32, width: u32, height: u32 },

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The codec did not recognize the bytes as an image.
    #[error("unrecognized image: {0}")]
    InvalidImage(String),

    #[error("argument `{0}` is empty")]
    EmptyArgument(&'static str),

    /// The QR encoder rejected the payload (usually too long for version 8 / level Q).
    #[error("qr encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("encoding to {0:?} is not supported")]
    UnsupportedFormat(ImageFormat),

    #[error("image codec error: {0}")]
    Codec(#[from] image::ImageError),

    /// The QR decoder located a symbol but could not read it.
    #[error("qr decoding failed: {0:?}")]
    Decoder(rqrr::DeQRError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
