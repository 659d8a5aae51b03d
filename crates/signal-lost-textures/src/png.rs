//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same map always encodes to the
//! same bytes.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::maps::{GrayMap, RgbMap};

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Create config optimized for speed (faster, but larger files).
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Either kind of 8-bit map, borrowed for encoding.
#[derive(Debug, Clone, Copy)]
pub enum MapRef<'a> {
    Rgb(&'a RgbMap),
    Gray(&'a GrayMap),
}

impl MapRef<'_> {
    fn parts(&self) -> (u32, u32, ColorType, &[u8]) {
        match self {
            MapRef::Rgb(m) => (m.width, m.height, ColorType::Rgb, &m.data),
            MapRef::Gray(m) => (m.width, m.height, ColorType::Grayscale, &m.data),
        }
    }

    /// Number of channels per pixel.
    pub fn channels(&self) -> u8 {
        match self {
            MapRef::Rgb(_) => 3,
            MapRef::Gray(_) => 1,
        }
    }
}

/// Encode a map to any writer.
pub fn write_map_to_writer<W: Write>(
    map: MapRef<'_>,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let (width, height, color_type, data) = map.parts();
    let channels = map.channels() as usize;
    let expected = (width as usize) * (height as usize) * channels;
    if width == 0 || height == 0 || data.len() != expected {
        return Err(PngError::InvalidDimensions(format!(
            "expected {} bytes for {}x{} {:?}, got {}",
            expected,
            width,
            height,
            color_type,
            data.len()
        )));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate doesn't add timestamps by default
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;

    Ok(())
}

/// Encode a map into memory and return the bytes with their hash.
pub fn write_map_to_vec_with_hash(
    map: MapRef<'_>,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_map_to_writer(map, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Write a map to a PNG file and return the BLAKE3 hash of the file.
pub fn write_map(map: MapRef<'_>, path: &Path, config: &PngConfig) -> Result<String, PngError> {
    let (data, hash) = write_map_to_vec_with_hash(map, config)?;
    std::fs::write(path, data)?;
    Ok(hash)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
