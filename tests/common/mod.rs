//! Shared fixtures for integration tests.
//!
//! Builds small PNG files on disk so tests don't depend on checked-in assets.

#![allow(dead_code)]

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Write `img` to `dir/name` as PNG and return the path.
pub fn write_png(dir: &Path, name: &str, img: DynamicImage) -> PathBuf {
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Png)
        .expect("failed to write PNG fixture");
    path
}

/// Opaque RGB gradient, 8x8.
pub fn opaque_png(dir: &Path, name: &str) -> PathBuf {
    let mut img = RgbImage::new(8, 8);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([(x * 30) as u8, (y * 30) as u8, 90]);
    }
    write_png(dir, name, DynamicImage::ImageRgb8(img))
}

/// 64x64 RGBA image whose left half is fully transparent and right half opaque red.
pub fn half_transparent_png(dir: &Path, name: &str) -> PathBuf {
    let mut img = RgbaImage::new(64, 64);
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        *pixel = if x < 32 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([255, 0, 0, 255])
        };
    }
    write_png(dir, name, DynamicImage::ImageRgba8(img))
}

/// 64x64 opaque white image.
pub fn white_png(dir: &Path, name: &str) -> PathBuf {
    let img = RgbImage::from_pixel(64, 64, Rgb([255, 255, 255]));
    write_png(dir, name, DynamicImage::ImageRgb8(img))
}

/// 64x64 16-bit RGB image, solid (65535, 0, 32896) which is (255, 0, 128) in 8 bits.
pub fn rgb16_png(dir: &Path, name: &str) -> PathBuf {
    let img: ImageBuffer<Rgb<u16>, Vec<u16>> =
        ImageBuffer::from_pixel(64, 64, Rgb([65535, 0, 32896]));
    write_png(dir, name, DynamicImage::ImageRgb16(img))
}

/// Palette of the indexed fixtures: index 0 is (12, 199, 32), index 1 is (200, 30, 60).
const PALETTE: [u8; 6] = [12, 199, 32, 200, 30, 60];

/// 64x64 indexed PNG. Left half uses index 0, right half index 1. With
/// `transparent_first` a tRNS chunk makes index 0 fully transparent.
pub fn indexed_png(dir: &Path, name: &str, transparent_first: bool) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("failed to create PNG fixture");
    let mut encoder = png::Encoder::new(BufWriter::new(file), 64, 64);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(PALETTE.to_vec());
    if transparent_first {
        encoder.set_trns(vec![0u8, 255]);
    }

    let data: Vec<u8> = (0..64 * 64).map(|i| u8::from(i % 64 >= 32)).collect();
    let mut writer = encoder.write_header().expect("failed to write PNG header");
    writer
        .write_image_data(&data)
        .expect("failed to write PNG data");
    path
}

/// A file named like a PNG that holds only the first bytes of a real one.
pub fn truncated_png(dir: &Path, name: &str) -> PathBuf {
    let scratch = tempfile::tempdir().expect("failed to create scratch dir");
    let full = opaque_png(scratch.path(), "full.png");
    let bytes = std::fs::read(full).expect("failed to read PNG fixture");

    let path = dir.join(name);
    std::fs::write(&path, &bytes[..20]).expect("failed to write truncated PNG");
    path
}

/// Decode a written JPEG back to RGB.
pub fn read_jpeg(path: &Path) -> RgbImage {
    image::open(path).expect("failed to decode JPEG").to_rgb8()
}

/// Whether every channel of `pixel` is within `tolerance` of `expected`.
pub fn close_to(pixel: &Rgb<u8>, expected: [u8; 3], tolerance: u8) -> bool {
    pixel
        .0
        .iter()
        .zip(expected)
        .all(|(&got, want)| got.abs_diff(want) <= tolerance)
}
