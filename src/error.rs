use std::path::PathBuf;
use thiserror::Error;

use crate::types::Dimensions;

/// Failures that end a normalization run
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Input file missing, unreadable or not a decodable image
    #[error("cannot read input image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image has no pixels, so no channel range exists
    #[error("image has no pixels")]
    EmptyImage,

    /// Every channel is a single constant value; there is nothing to stretch
    #[error("degenerate image: every channel is constant, shared domain is zero")]
    DegenerateImage,

    /// Channel planes do not fit the image they are written back into
    #[error("channel planes are {planes} but the image is {image}")]
    DimensionMismatch {
        planes: Dimensions,
        image: Dimensions,
    },

    /// Output could not be encoded or written
    #[error("cannot write output image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
