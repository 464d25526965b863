mod channels;
mod normalization;
mod range;

pub use channels::{
    ChannelBuffer, ChannelPlanes, dimensions_of, extract_channels, recombine, recombine_into,
};
pub use normalization::{
    domain_fraction, lookup_table, normalize_image, normalize_planes, rescale_channel,
    scale_sample, scan_planes, shared_domain,
};
pub use range::scan_range;

use crate::error::NormalizeError;
use image::RgbImage;
use std::path::Path;

/// Decode an image file as 8-bit RGB
///
/// Gray, alpha and 16-bit inputs are converted; alpha is dropped.
///
/// # Errors
///
/// Returns [`NormalizeError::Decode`] if the file cannot be opened or decoded
pub fn load_rgb(path: &Path) -> Result<RgbImage, NormalizeError> {
    let decoded = image::open(path).map_err(|source| NormalizeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.into_rgb8())
}

/// Encode an image, the format follows the file extension
///
/// # Errors
///
/// Returns [`NormalizeError::Encode`] if the format is unknown or writing fails
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<(), NormalizeError> {
    image.save(path).map_err(|source| NormalizeError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
