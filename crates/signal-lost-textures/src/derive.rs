//! PBR maps derived from an existing albedo photograph.
//!
//! Luminance stands in for height: the normal map comes straight from it,
//! darker areas are assumed rougher, and AO is read from local contrast
//! (pixels brighter than their blurred neighbourhood are less occluded).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::filter::gaussian_blur;
use crate::generate::{write_maps, MapFile};
use crate::maps::{height_to_normal, GrayMap, GrayscaleBuffer, RgbMap};
use crate::png::{MapRef, PngConfig, PngError};

/// Errors from photograph derivation.
#[derive(Debug, Error)]
pub enum DeriveError {
    #[error("could not load image {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Png(#[from] PngError),
}

/// The four maps derived from a photograph (the photo itself is the albedo).
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMaps {
    pub normal: RgbMap,
    pub roughness: GrayMap,
    pub metallic: GrayMap,
    pub ao: GrayMap,
}

impl DerivedMaps {
    /// Maps paired with their file stems, in write order.
    pub fn maps(&self) -> [(&'static str, MapRef<'_>); 4] {
        [
            ("normal", MapRef::Rgb(&self.normal)),
            ("roughness", MapRef::Gray(&self.roughness)),
            ("metallic", MapRef::Gray(&self.metallic)),
            ("ao", MapRef::Gray(&self.ao)),
        ]
    }
}

/// Mean of the three channels, scaled to [0, 1].
pub fn luminance(photo: &RgbMap) -> GrayscaleBuffer {
    GrayscaleBuffer {
        width: photo.width,
        height: photo.height,
        data: photo
            .data
            .chunks(3)
            .map(|px| (px[0] as f64 + px[1] as f64 + px[2] as f64) / 3.0 / 255.0)
            .collect(),
    }
}

/// Derive normal, roughness, metallic and AO from an RGB photograph.
pub fn derive_maps(photo: &RgbMap, strength: f64) -> DerivedMaps {
    let gray = luminance(photo);

    let normal = height_to_normal(&gray, strength);

    let roughness = GrayscaleBuffer::weighted_sum(1.0, &[(&gray, -0.5)]).clipped(0.2, 0.9);

    let metallic = GrayMap::new(photo.width, photo.height, 0);

    // Local contrast is measured on the truncated 8-bit luminance image.
    let blur_radius = (photo.width / 32) as f64;
    let quantized = gray.to_gray_map().to_buffer();
    let blurred = gaussian_blur(&quantized, blur_radius)
        .to_gray_map_rounded()
        .to_buffer();
    let mut ao = gray.clone();
    for (v, b) in ao.data.iter_mut().zip(&blurred.data) {
        *v = (0.5 + (*v - b) * 2.0).clamp(0.3, 1.0);
    }

    DerivedMaps {
        normal,
        roughness: roughness.to_gray_map(),
        metallic,
        ao: ao.to_gray_map(),
    }
}

/// Load an RGB photograph into an [`RgbMap`].
pub fn load_photo(path: &Path) -> Result<RgbMap, DeriveError> {
    let decoded = image::open(path).map_err(|source| DeriveError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    Ok(RgbMap {
        width: rgb.width(),
        height: rgb.height(),
        data: rgb.into_raw(),
    })
}

/// Derive PBR maps from the photograph at `path` and write them to
/// `output_dir` as `normal.png`, `roughness.png`, `metallic.png`, `ao.png`.
///
/// Nothing is written when the photograph cannot be decoded.
pub fn derive_from_albedo(
    path: &Path,
    output_dir: &Path,
    strength: f64,
) -> Result<Vec<MapFile>, DeriveError> {
    log::info!("deriving PBR maps from {}", path.display());

    let photo = load_photo(path).inspect_err(|e| log::debug!("{:?}", e))?;
    let maps = derive_maps(&photo, strength);

    std::fs::create_dir_all(output_dir)?;
    let files = write_maps(&maps.maps(), output_dir, &PngConfig::default())?;
    Ok(files)
}
