#![allow(dead_code)]

use assert_cmd::Command;
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::Path;

pub fn pixel_scale() -> Command {
    Command::cargo_bin("pixel-scale").unwrap()
}

/// A pattern where every pixel differs from its neighbours, so any sampling
/// mistake shows up in the output.
pub fn patterned_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 37) as u8, (y * 53) as u8, ((x + y) * 11) as u8, 255 - (x as u8)])
    })
}

pub fn write_png(path: impl AsRef<Path>, width: u32, height: u32) {
    let path = path.as_ref();
    ensure_parent(path);
    patterned_rgba(width, height)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

pub fn write_jpeg(path: impl AsRef<Path>, width: u32, height: u32) {
    let path = path.as_ref();
    ensure_parent(path);
    RgbImage::from_pixel(width, height, Rgb([200, 120, 40]))
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
}

pub fn write_bmp(path: impl AsRef<Path>, width: u32, height: u32) {
    let path = path.as_ref();
    ensure_parent(path);
    RgbImage::from_pixel(width, height, Rgb([10, 20, 30]))
        .save_with_format(path, ImageFormat::Bmp)
        .unwrap();
}

pub fn write_text(path: impl AsRef<Path>, contents: &str) {
    let path = path.as_ref();
    ensure_parent(path);
    fs::write(path, contents).unwrap();
}

pub fn dimensions(path: impl AsRef<Path>) -> (u32, u32) {
    image::image_dimensions(path.as_ref()).unwrap()
}

pub fn file_count(dir: impl AsRef<Path>) -> usize {
    fs::read_dir(dir.as_ref()).unwrap().count()
}

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
}
