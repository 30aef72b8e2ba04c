//! Raster formats known to the crate and the filename-extension table used to
//! infer them.
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// An encoded raster format.
///
/// Only [`Png`](ImageFormat::Png), [`Jpeg`](ImageFormat::Jpeg),
/// [`Gif`](ImageFormat::Gif), [`Bmp`](ImageFormat::Bmp), [`Ico`](ImageFormat::Ico)
/// and [`Webp`](ImageFormat::Webp) can be produced by the encoder; the rest are
/// reported by [`inspect`](crate::inspect::inspect) only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Bmp,
    Gif,
    Ico,
    Jpeg,
    Png,
    Wbmp,
    Webp,
    Pkm,
    Ktx,
    Astc,
    Dng,
}

/// Extension (upper-case, without the dot) to format.
const EXTENSION_TABLE: &[(&str, ImageFormat)] = &[
    ("PNG", ImageFormat::Png),
    ("GIF", ImageFormat::Gif),
    ("BMP", ImageFormat::Bmp),
    ("ICON", ImageFormat::Ico),
    ("ICO", ImageFormat::Ico),
    ("DNG", ImageFormat::Dng),
    ("WBMP", ImageFormat::Wbmp),
    ("WEBP", ImageFormat::Webp),
    ("PKM", ImageFormat::Pkm),
    ("KTX", ImageFormat::Ktx),
    ("ASTC", ImageFormat::Astc),
];

impl ImageFormat {
    /// Looks up a filename extension, with or without its leading dot.
    ///
    /// The match is case-insensitive. Anything not in the table, including an
    /// empty extension, maps to [`ImageFormat::Jpeg`].
    ///
    /// # Example
    ///
    /// ```
    /// use qrlogo::format::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_extension(".WebP"), ImageFormat::Webp);
    /// assert_eq!(ImageFormat::from_extension("jpg"), ImageFormat::Jpeg);
    /// assert_eq!(ImageFormat::from_extension("tiff"), ImageFormat::Jpeg);
    /// ```
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        EXTENSION_TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(ext))
            .map_or(ImageFormat::Jpeg, |&(_, format)| format)
    }

    /// Infers the format of `path` from its extension alone; the file is not read.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(ImageFormat::Jpeg, Self::from_extension)
    }

    /// The matching `image` crate format, for the formats this crate can encode.
    pub(crate) fn to_image_format(self) -> Option<image::ImageFormat> {
        match self {
            ImageFormat::Png => Some(image::ImageFormat::Png),
            ImageFormat::Jpeg => Some(image::ImageFormat::Jpeg),
            ImageFormat::Gif => Some(image::ImageFormat::Gif),
            ImageFormat::Bmp => Some(image::ImageFormat::Bmp),
            ImageFormat::Ico => Some(image::ImageFormat::Ico),
            ImageFormat::Webp => Some(image::ImageFormat::WebP),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Bmp => "BMP",
            ImageFormat::Gif => "GIF",
            ImageFormat::Ico => "ICO",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Wbmp => "WBMP",
            ImageFormat::Webp => "WEBP",
            ImageFormat::Pkm => "PKM",
            ImageFormat::Ktx => "KTX",
            ImageFormat::Astc => "ASTC",
            ImageFormat::Dng => "DNG",
        };
        f.write_str(name)
    }
}

/// Parses an output format name for the CLI. Unlike [`ImageFormat::from_extension`]
/// this rejects unknown names instead of falling back to JPEG.
impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("jpeg") || s.eq_ignore_ascii_case("jpg") {
            return Ok(ImageFormat::Jpeg);
        }
        EXTENSION_TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, format)| format)
            .ok_or_else(|| format!("unknown image format: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_table_is_case_insensitive() {
        assert_eq!(ImageFormat::from_extension("png"), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("PNG"), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension(".Gif"), ImageFormat::Gif);
        assert_eq!(ImageFormat::from_extension("icon"), ImageFormat::Ico);
        assert_eq!(ImageFormat::from_extension("ico"), ImageFormat::Ico);
        assert_eq!(ImageFormat::from_extension("astc"), ImageFormat::Astc);
    }

    #[test]
    fn test_unknown_extension_defaults_to_jpeg() {
        assert_eq!(ImageFormat::from_extension(""), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("."), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("tga"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("photo"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("dir.png/photo"), ImageFormat::Jpeg);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(ImageFormat::from_path("photo.webp"), ImageFormat::Webp);
        assert_eq!(ImageFormat::from_path("/tmp/a.b/scan.WBMP"), ImageFormat::Wbmp);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!("jpg".parse::<ImageFormat>(), Ok(ImageFormat::Jpeg));
        assert_eq!("webp".parse::<ImageFormat>(), Ok(ImageFormat::Webp));
        assert!("tiff".parse::<ImageFormat>().is_err());
    }

    #[test]
    fn test_encodable_formats() {
        assert!(ImageFormat::Png.to_image_format().is_some());
        assert!(ImageFormat::Ico.to_image_format().is_some());
        assert!(ImageFormat::Dng.to_image_format().is_none());
        assert!(ImageFormat::Ktx.to_image_format().is_none());
    }
}
