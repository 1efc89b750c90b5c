//! Color mode normalization.
//!
//! JPEG has no alpha channel, so every decoded image is reduced to 8-bit opaque
//! RGB before encoding. Images carrying alpha are composited onto solid white,
//! everything else goes through the codec's standard RGB conversion.

use std::path::Path;

use assetforge_common::{Error, Result};
use image::{DynamicImage, Rgb, RgbImage, RgbaImage};
use tracing::debug;

/// Background that transparent pixels are flattened onto.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Reduce `img` to opaque 8-bit RGB.
///
/// `path` is only used to label errors.
pub fn flatten(img: DynamicImage, path: &Path) -> Result<RgbImage> {
    let color = img.color();
    if color.has_alpha() {
        debug!("Flattening {:?} ({:?}) onto white", path, color);
        composite_onto(&img.to_rgba8(), BACKGROUND, path)
    } else {
        match img {
            DynamicImage::ImageRgb8(rgb) => Ok(rgb),
            other => {
                debug!("Converting {:?} from {:?} to RGB8", path, color);
                Ok(other.to_rgb8())
            }
        }
    }
}

/// Blend `src` over an opaque `background` using its alpha channel as mask.
///
/// Fully transparent pixels become `background`; fully opaque pixels keep their
/// exact color.
pub fn composite_onto(src: &RgbaImage, background: Rgb<u8>, path: &Path) -> Result<RgbImage> {
    let (width, height) = src.dimensions();
    let mut buf = Vec::with_capacity(src.as_raw().len() / 4 * 3);

    for pixel in src.pixels() {
        let [r, g, b, a] = pixel.0;
        buf.push(blend(r, background[0], a));
        buf.push(blend(g, background[1], a));
        buf.push(blend(b, background[2], a));
    }

    RgbImage::from_raw(width, height, buf).ok_or_else(|| {
        Error::normalize(
            path,
            format!("composited buffer does not fit {}x{}", width, height),
        )
    })
}

/// `fg * a + bg * (255 - a)`, scaled back to 0..=255 with rounding.
#[inline]
fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    let value = u32::from(fg) * a + u32::from(bg) * (255 - a);
    ((value + 127) / 255) as u8
}
