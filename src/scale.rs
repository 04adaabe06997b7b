//! Nearest-neighbour upscaling by an integer factor.

use crate::codec::PixelBuffer;
use crate::constants::MEMORY_CHECK_THRESHOLD_MIB;
use crate::error::{ResizeError, Result};
use image::{DynamicImage, ImageBuffer, Pixel};
use std::fmt;
use std::num::NonZeroU32;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

const MIB: u64 = 1024 * 1024;

/// A validated, strictly positive scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleFactor(NonZeroU32);

impl ScaleFactor {
    /// Rejects zero, negative and out-of-range values with
    /// [`ResizeError::InvalidScale`].
    pub fn new(value: i64) -> Result<Self> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(ResizeError::InvalidScale(value))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output dimensions for `width x height` at `scale`.
pub fn scaled_dimensions(width: u32, height: u32, scale: ScaleFactor) -> Result<(u32, u32)> {
    let factor = scale.get();
    match (width.checked_mul(factor), height.checked_mul(factor)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(ResizeError::DimensionOverflow {
            width,
            height,
            scale: factor,
        }),
    }
}

/// Scales `buffer` by `scale`, sampling source pixel `(x / scale, y / scale)`
/// for every output pixel `(x, y)`.
///
/// The pixel layout of the source is kept. A factor of 1 returns a copy.
pub fn resize(buffer: &PixelBuffer, scale: ScaleFactor) -> Result<PixelBuffer> {
    let (width, height) = scaled_dimensions(buffer.width(), buffer.height(), scale)?;
    if scale.get() == 1 {
        return Ok(buffer.clone());
    }

    let required = u64::from(width) * u64::from(height) * u64::from(buffer.color().bytes_per_pixel());
    ensure_memory_available(required)?;

    let f = scale.get();
    let scaled = match buffer {
        DynamicImage::ImageLuma8(b) => DynamicImage::ImageLuma8(sample_nearest(b, f, width, height)),
        DynamicImage::ImageLumaA8(b) => {
            DynamicImage::ImageLumaA8(sample_nearest(b, f, width, height))
        }
        DynamicImage::ImageRgb8(b) => DynamicImage::ImageRgb8(sample_nearest(b, f, width, height)),
        DynamicImage::ImageRgba8(b) => DynamicImage::ImageRgba8(sample_nearest(b, f, width, height)),
        DynamicImage::ImageLuma16(b) => {
            DynamicImage::ImageLuma16(sample_nearest(b, f, width, height))
        }
        DynamicImage::ImageLumaA16(b) => {
            DynamicImage::ImageLumaA16(sample_nearest(b, f, width, height))
        }
        DynamicImage::ImageRgb16(b) => DynamicImage::ImageRgb16(sample_nearest(b, f, width, height)),
        DynamicImage::ImageRgba16(b) => {
            DynamicImage::ImageRgba16(sample_nearest(b, f, width, height))
        }
        DynamicImage::ImageRgb32F(b) => {
            DynamicImage::ImageRgb32F(sample_nearest(b, f, width, height))
        }
        DynamicImage::ImageRgba32F(b) => {
            DynamicImage::ImageRgba32F(sample_nearest(b, f, width, height))
        }
        other => DynamicImage::ImageRgba32F(sample_nearest(&other.to_rgba32f(), f, width, height)),
    };

    Ok(scaled)
}

fn sample_nearest<P: Pixel>(
    source: &ImageBuffer<P, Vec<P::Subpixel>>,
    factor: u32,
    width: u32,
    height: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    ImageBuffer::from_fn(width, height, |x, y| *source.get_pixel(x / factor, y / factor))
}

/// Fails with [`ResizeError::InsufficientMemory`] when the host reports less
/// available memory than `required_bytes`. Hosts that report nothing pass.
fn ensure_memory_available(required_bytes: u64) -> Result<()> {
    if required_bytes < MEMORY_CHECK_THRESHOLD_MIB * MIB {
        return Ok(());
    }

    // sysinfo 0.30+ returns bytes
    let mut sys = System::new_with_specifics(RefreshKind::new().with_memory(MemoryRefreshKind::new()));
    sys.refresh_memory();
    let available = sys.available_memory();
    if available > 0 && required_bytes > available {
        return Err(ResizeError::InsufficientMemory(
            required_bytes.div_ceil(MIB),
            available / MIB,
        ));
    }

    Ok(())
}
