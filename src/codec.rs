//! Image codec adapter.
//!
//! [`ImageCodec`] is the boundary between the resizer and any concrete image
//! library: everything downstream works on a [`PixelBuffer`] and never looks
//! at file formats. [`PngCodec`] is the production implementation on top of
//! the `image` crate, with an optional lossless oxipng pass on the output.

use crate::constants::OXIPNG_PRESET;
use crate::error::{ResizeError, Result};
use crate::formats::SourceFormat;
use crate::warn;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use std::borrow::Cow;
use std::io::{Cursor, ErrorKind};
use std::path::Path;

/// Decoded pixels in whatever layout the source file used.
pub type PixelBuffer = DynamicImage;

pub trait ImageCodec {
    /// Reads and decodes the file at `path`.
    ///
    /// Fails with [`ResizeError::UnsupportedFormat`] when no decoder handles
    /// the file and [`ResizeError::CorruptImage`] when the data can't be parsed.
    fn decode(&self, path: &Path) -> Result<PixelBuffer>;

    /// Encodes a buffer to PNG bytes.
    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec {
    optimize: bool,
}

impl PngCodec {
    pub fn new(optimize: bool) -> Self {
        Self { optimize }
    }
}

impl ImageCodec for PngCodec {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        let format = SourceFormat::from_path(path).ok_or_else(|| {
            ResizeError::UnsupportedFormat(format!("{} has no supported extension", path.display()))
        })?;
        if format.image_format().is_none() {
            return Err(ResizeError::UnsupportedFormat(format!(
                "{} decoding is not available ({})",
                format,
                path.display()
            )));
        }

        // The extension picks the decoder unless the content says otherwise.
        let reader = ImageReader::open(path)?
            .with_guessed_format()
            .map_err(|e| corrupt(path, e.to_string()))?;
        let img = reader.decode().map_err(|e| classify_decode_error(path, e))?;

        if img.width() == 0 || img.height() == 0 {
            return Err(corrupt(path, "image has no pixels".to_string()));
        }

        Ok(img)
    }

    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>> {
        // PNG has no floating point samples
        let buffer = match buffer {
            DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
                Cow::Owned(DynamicImage::ImageRgba16(buffer.to_rgba16()))
            }
            other => Cow::Borrowed(other),
        };

        let mut bytes = Vec::new();
        buffer.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

        if !self.optimize {
            return Ok(bytes);
        }

        match optimize_png(&bytes) {
            Ok(optimized) => Ok(optimized),
            Err(e) => {
                warn!("{}, writing unoptimized PNG", e);
                Ok(bytes)
            }
        }
    }
}

/// Runs PNG bytes through oxipng.
pub fn optimize_png(bytes: &[u8]) -> Result<Vec<u8>> {
    let options = oxipng::Options::from_preset(OXIPNG_PRESET);
    oxipng::optimize_from_memory(bytes, &options)
        .map_err(|e| ResizeError::PngOptimization(e.to_string()))
}

fn corrupt(path: &Path, reason: String) -> ResizeError {
    ResizeError::CorruptImage {
        path: path.to_path_buf(),
        reason,
    }
}

fn classify_decode_error(path: &Path, err: ImageError) -> ResizeError {
    match err {
        ImageError::Unsupported(e) => ResizeError::UnsupportedFormat(e.to_string()),
        ImageError::Decoding(e) => corrupt(path, e.to_string()),
        ImageError::Limits(e) => corrupt(path, e.to_string()),
        ImageError::IoError(e) if e.kind() == ErrorKind::UnexpectedEof => {
            corrupt(path, "unexpected end of file".to_string())
        }
        ImageError::IoError(e) => ResizeError::Io(e),
        other => ResizeError::Image(other),
    }
}
