//! Planar channel buffers
//!
//! This module splits an interleaved `RgbImage` into three flat row-major
//! sample planes and writes such planes back into an image.

use image::{ImageBuffer, RgbImage};

use crate::error::NormalizeError;
use crate::types::{Channel, Dimensions};

/// One channel of an image, stored row-major in a single owned buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBuffer {
    dimensions: Dimensions,
    samples: Vec<u8>,
}

impl ChannelBuffer {
    #[must_use]
    pub fn zeroed(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            samples: vec![0u8; dimensions.pixel_count()],
        }
    }

    /// Wraps existing samples; `None` if the length does not match `rows * cols`
    #[must_use]
    pub fn from_samples(dimensions: Dimensions, samples: Vec<u8>) -> Option<Self> {
        (samples.len() == dimensions.pixel_count()).then_some(Self {
            dimensions,
            samples,
        })
    }

    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    #[must_use]
    pub fn offset(&self, row: u32, col: u32) -> usize {
        row as usize * self.dimensions.cols as usize + col as usize
    }

    /// Sample at `(row, col)`, `None` when out of bounds
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if row >= self.dimensions.rows || col >= self.dimensions.cols {
            return None;
        }
        self.samples.get(self.offset(row, col)).copied()
    }

    pub fn get_mut(&mut self, row: u32, col: u32) -> Option<&mut u8> {
        if row >= self.dimensions.rows || col >= self.dimensions.cols {
            return None;
        }
        let offset = self.offset(row, col);
        self.samples.get_mut(offset)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.samples
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.samples
    }
}

/// The red, green and blue planes of one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPlanes {
    pub red: ChannelBuffer,
    pub green: ChannelBuffer,
    pub blue: ChannelBuffer,
}

impl ChannelPlanes {
    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.red.dimensions()
    }

    #[must_use]
    pub fn get(&self, channel: Channel) -> &ChannelBuffer {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}

#[inline]
#[must_use]
pub fn dimensions_of(image: &RgbImage) -> Dimensions {
    Dimensions::new(image.height(), image.width())
}

/// Deinterleave an image into three row-major planes
#[must_use]
pub fn extract_channels(image: &RgbImage) -> ChannelPlanes {
    let dimensions = dimensions_of(image);
    let pixel_count = dimensions.pixel_count();

    let mut red = Vec::with_capacity(pixel_count);
    let mut green = Vec::with_capacity(pixel_count);
    let mut blue = Vec::with_capacity(pixel_count);

    // RgbImage stores pixels row-major, so the chunk index is row * cols + col
    for pixel in image.as_raw().chunks_exact(3) {
        red.push(pixel[Channel::Red.index()]);
        green.push(pixel[Channel::Green.index()]);
        blue.push(pixel[Channel::Blue.index()]);
    }

    ChannelPlanes {
        red: ChannelBuffer { dimensions, samples: red },
        green: ChannelBuffer { dimensions, samples: green },
        blue: ChannelBuffer { dimensions, samples: blue },
    }
}

/// Overwrite every pixel of `image` with the samples of `planes`
///
/// # Errors
///
/// Returns [`NormalizeError::DimensionMismatch`] if the planes and the image
/// differ in size
pub fn recombine_into(planes: &ChannelPlanes, image: &mut RgbImage) -> Result<(), NormalizeError> {
    let image_dimensions = dimensions_of(image);
    if planes.dimensions() != image_dimensions {
        return Err(NormalizeError::DimensionMismatch {
            planes: planes.dimensions(),
            image: image_dimensions,
        });
    }

    let red = planes.red.as_slice();
    let green = planes.green.as_slice();
    let blue = planes.blue.as_slice();

    for (i, pixel) in image.chunks_exact_mut(3).enumerate() {
        pixel[Channel::Red.index()] = red[i];
        pixel[Channel::Green.index()] = green[i];
        pixel[Channel::Blue.index()] = blue[i];
    }

    Ok(())
}

/// Interleave three planes into a new image
#[must_use]
pub fn recombine(planes: &ChannelPlanes) -> RgbImage {
    let dimensions = planes.dimensions();
    let red = planes.red.as_slice();
    let green = planes.green.as_slice();
    let blue = planes.blue.as_slice();

    ImageBuffer::from_fn(dimensions.cols, dimensions.rows, |col, row| {
        let offset = planes.red.offset(row, col);
        image::Rgb([red[offset], green[offset], blue[offset]])
    })
}
