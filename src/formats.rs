//! Source image format handling
//!
//! Maps the supported input extensions onto the decoders the `image` crate
//! provides. Extension matching ignores case.

use crate::error::{ResizeError, Result};
use image::ImageFormat;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Input formats accepted by the resizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    Jpeg,
    WebP,
    Bmp,
    Tga,
    /// Accepted by the extension filter but not decodable
    Heic,
}

impl SourceFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "png" => Some(SourceFormat::Png),
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            "webp" => Some(SourceFormat::WebP),
            "bmp" => Some(SourceFormat::Bmp),
            "tga" => Some(SourceFormat::Tga),
            "heic" => Some(SourceFormat::Heic),
            _ => None,
        }
    }

    /// Looks up the format from a path's extension. Paths without an
    /// extension (including dotfiles such as `.png`) yield `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// The decoder to use, or `None` when no decoder is available.
    pub fn image_format(&self) -> Option<ImageFormat> {
        match self {
            SourceFormat::Png => Some(ImageFormat::Png),
            SourceFormat::Jpeg => Some(ImageFormat::Jpeg),
            SourceFormat::WebP => Some(ImageFormat::WebP),
            SourceFormat::Bmp => Some(ImageFormat::Bmp),
            SourceFormat::Tga => Some(ImageFormat::Tga),
            SourceFormat::Heic => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFormat::Png => "PNG",
            SourceFormat::Jpeg => "JPEG",
            SourceFormat::WebP => "WebP",
            SourceFormat::Bmp => "BMP",
            SourceFormat::Tga => "TGA",
            SourceFormat::Heic => "HEIC",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SourceFormat {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s).ok_or_else(|| ResizeError::UnsupportedFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_case_insensitive() {
        assert_eq!(SourceFormat::from_extension("png"), Some(SourceFormat::Png));
        assert_eq!(SourceFormat::from_extension("PNG"), Some(SourceFormat::Png));
        assert_eq!(SourceFormat::from_extension("JpEg"), Some(SourceFormat::Jpeg));
        assert_eq!(SourceFormat::from_extension("jpg"), Some(SourceFormat::Jpeg));
        assert_eq!(SourceFormat::from_extension("Tga"), Some(SourceFormat::Tga));
        assert_eq!(SourceFormat::from_extension("txt"), None);
        assert_eq!(SourceFormat::from_extension("gif"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("sprites/photo.PNG")),
            Some(SourceFormat::Png)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("shot.heic")),
            Some(SourceFormat::Heic)
        );
        assert_eq!(SourceFormat::from_path(Path::new("README")), None);
        assert_eq!(SourceFormat::from_path(Path::new(".png")), None);
    }

    #[test]
    fn test_heic_has_no_decoder() {
        assert_eq!(SourceFormat::Heic.image_format(), None);
        assert_eq!(SourceFormat::Bmp.image_format(), Some(ImageFormat::Bmp));
    }

    #[test]
    fn test_from_str_unsupported() {
        assert!(matches!(
            SourceFormat::from_str("tiff"),
            Err(ResizeError::UnsupportedFormat(_))
        ));
        assert_eq!(SourceFormat::from_str("webp").unwrap(), SourceFormat::WebP);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SourceFormat::WebP), "WebP");
        assert_eq!(format!("{}", SourceFormat::Heic), "HEIC");
    }
}
