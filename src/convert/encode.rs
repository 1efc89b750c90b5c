//! JPEG output.
//!
//! Quality and Huffman optimization are fixed. Optimized tables only change the
//! entropy coding, the decoded pixels are the same as with the standard tables.
//!
//! A channel that is flat across the whole image gets an optimized table holding
//! a single 1-bit code. The `image` crate's decoder misreads such streams (white
//! comes back green or black), so those images are re-encoded with the standard
//! tables instead.

use std::path::Path;

use assetforge_common::{Error, Result};
use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};
use tracing::debug;

/// JPEG quality on the 0-100 scale.
pub const QUALITY: u8 = 85;

/// Build per-image Huffman tables (smaller files, slower encode).
pub const OPTIMIZE_HUFFMAN_TABLES: bool = true;

/// DHT marker (define Huffman table).
const MARKER_DHT: u8 = 0xC4;
/// SOS marker (start of scan); no more tables follow.
const MARKER_SOS: u8 = 0xDA;

/// Encode `img` as JPEG in memory. `output` only labels errors.
pub fn encode_jpeg(img: &RgbImage, output: &Path) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    let width = jpeg_dimension(width, "width", output)?;
    let height = jpeg_dimension(height, "height", output)?;

    let optimized = encode_with_tables(img, width, height, OPTIMIZE_HUFFMAN_TABLES, output)?;
    if !OPTIMIZE_HUFFMAN_TABLES || !has_single_code_table(&optimized) {
        return Ok(optimized);
    }

    debug!(
        "Optimized Huffman table for {:?} has a single code, using standard tables",
        output
    );
    encode_with_tables(img, width, height, false, output)
}

fn encode_with_tables(
    img: &RgbImage,
    width: u16,
    height: u16,
    optimize: bool,
    output: &Path,
) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut encoder = Encoder::new(&mut buf, QUALITY);
    encoder.set_optimized_huffman_tables(optimize);
    encoder
        .encode(img.as_raw(), width, height, ColorType::Rgb)
        .map_err(|e| Error::encode(output, e.to_string()))?;

    Ok(buf)
}

/// Whether any DHT segment before the first scan defines a table with fewer
/// than two codes.
fn has_single_code_table(jpeg: &[u8]) -> bool {
    // Skip SOI.
    let mut pos = 2;
    while pos + 4 <= jpeg.len() {
        if jpeg[pos] != 0xFF {
            return false;
        }
        let marker = jpeg[pos + 1];
        if marker == MARKER_SOS {
            return false;
        }
        let len = usize::from(u16::from_be_bytes([jpeg[pos + 2], jpeg[pos + 3]]));
        let end = (pos + 2 + len).min(jpeg.len());
        if marker == MARKER_DHT && dht_has_single_code(&jpeg[pos + 4..end]) {
            return true;
        }
        pos += 2 + len;
    }
    false
}

/// A DHT payload is one or more of: class/id byte, 16 code-length counts, symbols.
fn dht_has_single_code(mut payload: &[u8]) -> bool {
    while payload.len() >= 17 {
        let symbols: usize = payload[1..17].iter().map(|&n| usize::from(n)).sum();
        if symbols < 2 {
            return true;
        }
        payload = payload.get(17 + symbols..).unwrap_or(&[]);
    }
    false
}

/// Encode `img` and write it to `output`, replacing any existing file.
pub fn write_jpeg(img: &RgbImage, output: &Path) -> Result<()> {
    let bytes = encode_jpeg(img, output)?;
    std::fs::write(output, bytes).map_err(|e| Error::encode(output, e.to_string()))
}

fn jpeg_dimension(value: u32, axis: &str, output: &Path) -> Result<u16> {
    u16::try_from(value).map_err(|_| {
        Error::encode(
            output,
            format!("{} {} exceeds the JPEG limit of {}", axis, value, u16::MAX),
        )
    })
}
