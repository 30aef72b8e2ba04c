//! # qrlogo
//!
//! A Rust library for rendering QR codes with controlled margins and centered
//! logos, and for reading them back.
//!
//! The QR symbol itself comes from the [`qrcode`](https://docs.rs/qrcode) crate
//! (version 8, error-correction level Q, UTF-8) and decoding is done by
//! [`rqrr`](https://docs.rs/rqrr). This crate handles everything around them:
//! placing the symbol on a canvas, finding where it was drawn, resizing the
//! white border, fitting a logo in the middle, and converting pixels for the
//! decoder.
//!
//! ## Features
//!
//! - Render text as a QR code on a canvas of any size (320x320 by default).
//! - Set the white border in pixels, capped at a tenth of the symbol width.
//! - Overlay a logo scaled to at most a sixth of the symbol, keeping its aspect ratio.
//! - Encode to PNG, JPEG, GIF, BMP, ICO or WebP (lossy formats at quality 75).
//! - Decode QR codes from bytes, files or readers.
//! - Inspect image files for dimensions, size and extension-based format.
//!
//! ## Example
//!
//! ```rust
//! use qrlogo::format::ImageFormat;
//! use qrlogo::helper::{decode_bytes, encode, EncodeOptions};
//!
//! let png = encode("https://example.com", &EncodeOptions::default()).unwrap();
//! assert_eq!(decode_bytes(&png).unwrap(), "https://example.com");
//!
//! let options = EncodeOptions::default().with_format(ImageFormat::Jpeg).with_border(10);
//! let jpeg = encode("https://example.com", &options).unwrap();
//! assert!(jpeg.starts_with(&[0xFF, 0xD8]));
//! ```
//!
//! ## Modules
//!
//! - [`helper`]: High-level encode/decode entry points.
//! - [`matrix`]: Module grids from text.
//! - [`render`]: Grid rasterization and footprint detection.
//! - [`border`]: Border reallocation.
//! - [`logo`]: Logo fitting and compositing.
//! - [`codec`]: Raster encoding and decoding.
//! - [`signal`]: Decoder input preparation.
//! - [`inspect`]: Image file metadata.
#![forbid(unsafe_code)]

pub mod border;
pub mod codec;
pub mod error;
pub mod format;
pub mod helper;
pub mod inspect;
pub mod logo;
pub mod matrix;
pub mod render;
pub mod signal;

pub use error::{Error, Result};
pub use format::ImageFormat;
pub use helper::{decode_bytes, decode_file, decode_reader, encode, encode_to_file, EncodeOptions};
pub use inspect::{inspect, ImageInfo};
