//! Joint range normalization
//!
//! All three channels are shifted by their own minimum and divided by one
//! shared domain, the widest of the three channel spans. The widest channel
//! ends up spanning 0-255 while narrower channels keep their relative
//! contrast instead of being stretched on their own.

use super::channels::{ChannelBuffer, ChannelPlanes, dimensions_of, extract_channels, recombine_into};
use super::range::scan_range;
use crate::error::NormalizeError;
use crate::types::{ChannelRange, NormalizationReport, RgbRanges, SharedDomain};
use image::RgbImage;

/// Scan the three planes; the scans run concurrently
#[must_use]
pub fn scan_planes(planes: &ChannelPlanes) -> RgbRanges {
    let (red, (green, blue)) = rayon::join(
        || scan_range(planes.red.as_slice()),
        || {
            rayon::join(
                || scan_range(planes.green.as_slice()),
                || scan_range(planes.blue.as_slice()),
            )
        },
    );
    RgbRanges::new(red, green, blue)
}

/// Widest channel span
///
/// # Errors
///
/// [`NormalizeError::EmptyImage`] if any range saw no samples,
/// [`NormalizeError::DegenerateImage`] if every channel is constant
pub fn shared_domain(ranges: &RgbRanges) -> Result<SharedDomain, NormalizeError> {
    let mut widest = 0;
    for (_, range) in ranges.iter() {
        let span = range.span().ok_or(NormalizeError::EmptyImage)?;
        widest = widest.max(span);
    }
    SharedDomain::new(widest).ok_or(NormalizeError::DegenerateImage)
}

/// Position of `offset` inside the shared domain, 0.0 to 1.0 for in-range samples
#[inline]
#[must_use]
pub fn domain_fraction(offset: i32, domain: SharedDomain) -> f64 {
    f64::from(offset) / f64::from(domain.get())
}

/// Rescale one sample: `round((sample - channel_min) / domain * 255)`, clamped to 0-255
#[inline]
#[must_use]
pub fn scale_sample(sample: u8, channel_min: i32, domain: SharedDomain) -> u8 {
    let scaled = (domain_fraction(i32::from(sample) - channel_min, domain) * 255.0_f64).round();
    // Saturating float-to-int cast after the clamp; samples below the channel
    // minimum cannot come from a scan but still land on 0
    scaled.clamp(0.0, 255.0) as u8
}

/// Output value for every possible input sample of one channel
#[must_use]
pub fn lookup_table(channel_min: i32, domain: SharedDomain) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (sample, entry) in (0..=u8::MAX).zip(table.iter_mut()) {
        *entry = scale_sample(sample, channel_min, domain);
    }
    table
}

/// Rescale every sample of `buffer` in place
pub fn rescale_channel(buffer: &mut ChannelBuffer, range: ChannelRange, domain: SharedDomain) {
    let table = lookup_table(range.min, domain);
    for sample in buffer.as_mut_slice() {
        *sample = table[usize::from(*sample)];
    }
}

/// Scan, derive the shared domain, and rescale all three planes in place
///
/// The domain is computed only after all three scans are done; the three
/// rescale passes then run concurrently.
///
/// # Errors
///
/// See [`shared_domain`]
pub fn normalize_planes(planes: &mut ChannelPlanes) -> Result<(RgbRanges, SharedDomain), NormalizeError> {
    if !planes.dimensions().is_valid() {
        return Err(NormalizeError::EmptyImage);
    }

    let ranges = scan_planes(planes);
    let domain = shared_domain(&ranges)?;

    let ChannelPlanes { red, green, blue } = planes;
    rayon::join(
        || rescale_channel(red, ranges.red, domain),
        || {
            rayon::join(
                || rescale_channel(green, ranges.green, domain),
                || rescale_channel(blue, ranges.blue, domain),
            )
        },
    );

    Ok((ranges, domain))
}

/// Normalize an image in place
///
/// On error the image is left untouched.
///
/// # Errors
///
/// [`NormalizeError::EmptyImage`] for images without pixels,
/// [`NormalizeError::DegenerateImage`] for images whose channels are all constant
pub fn normalize_image(image: &mut RgbImage) -> Result<NormalizationReport, NormalizeError> {
    let dimensions = dimensions_of(image);
    if !dimensions.is_valid() {
        return Err(NormalizeError::EmptyImage);
    }

    let mut planes = extract_channels(image);
    let (ranges, domain) = normalize_planes(&mut planes)?;
    recombine_into(&planes, image)?;

    Ok(NormalizationReport {
        dimensions,
        ranges,
        domain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimensions;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use image::{ImageBuffer, Rgb};

    fn domain(span: u32) -> SharedDomain {
        SharedDomain::new(span).expect("non-zero span")
    }

    fn image_from_pixels(width: u32, height: u32, pixels: &[[u8; 3]]) -> RgbImage {
        let raw = pixels.iter().flatten().copied().collect();
        ImageBuffer::from_raw(width, height, raw).expect("pixel count matches")
    }

    #[test]
    fn test_single_channel_scenario() {
        let range = scan_range(&[10, 20, 30]);
        assert_eq!(range, ChannelRange::new(10, 30));

        let ranges = RgbRanges::new(range, range, range);
        let domain = shared_domain(&ranges).expect("non-degenerate");
        assert_eq!(domain.get(), 20);

        assert_eq!(scale_sample(10, range.min, domain), 0);
        assert_eq!(scale_sample(20, range.min, domain), 128);
        assert_eq!(scale_sample(30, range.min, domain), 255);
    }

    #[test]
    fn test_narrow_channel_is_compressed_not_stretched() {
        let ranges = RgbRanges::new(
            ChannelRange::new(0, 100),
            ChannelRange::new(50, 60),
            ChannelRange::new(0, 10),
        );
        let domain = shared_domain(&ranges).expect("non-degenerate");
        assert_eq!(domain.get(), 100);

        assert_eq!(scale_sample(55, ranges.green.min, domain), 13);
        assert_eq!(scale_sample(60, ranges.green.min, domain), 26);
        assert_eq!(scale_sample(100, ranges.red.min, domain), 255);
    }

    #[test]
    fn test_domain_fraction() {
        assert_relative_eq!(domain_fraction(5, domain(100)), 0.05);
        assert_relative_eq!(domain_fraction(0, domain(7)), 0.0);
        assert_relative_eq!(domain_fraction(7, domain(7)), 1.0);
    }

    #[test]
    fn test_constant_channels_are_degenerate() {
        let constant = ChannelRange::new(42, 42);
        let ranges = RgbRanges::new(constant, constant, ChannelRange::new(9, 9));
        assert_matches!(shared_domain(&ranges), Err(NormalizeError::DegenerateImage));
    }

    #[test]
    fn test_empty_range_is_rejected() {
        let ranges = RgbRanges::new(
            ChannelRange::new(0, 10),
            ChannelRange::EMPTY,
            ChannelRange::new(0, 10),
        );
        assert_matches!(shared_domain(&ranges), Err(NormalizeError::EmptyImage));
    }

    #[test]
    fn test_scaling_is_monotonic() {
        for (min, span) in [(0, 255), (50, 10), (3, 200), (100, 1)] {
            let table = lookup_table(min, domain(span));
            assert!(
                table.windows(2).all(|w| w[0] <= w[1]),
                "table for min={min} span={span} is not monotonic"
            );
        }
    }

    #[test]
    fn test_out_of_range_samples_are_clamped() {
        // Samples below the channel minimum or beyond the domain never come
        // from a real scan, but the table covers all 256 inputs
        let table = lookup_table(50, domain(10));
        assert_eq!(table[0], 0);
        assert_eq!(table[49], 0);
        assert_eq!(table[50], 0);
        assert_eq!(table[60], 255);
        assert_eq!(table[255], 255);
    }

    #[test]
    fn test_normalize_image_maps_extremes() {
        let mut image = image_from_pixels(
            2,
            2,
            &[[0, 50, 0], [100, 60, 10], [50, 55, 5], [25, 50, 0]],
        );

        let report = normalize_image(&mut image).expect("normalization succeeds");

        assert_eq!(report.dimensions, Dimensions::new(2, 2));
        assert_eq!(report.ranges.red, ChannelRange::new(0, 100));
        assert_eq!(report.ranges.green, ChannelRange::new(50, 60));
        assert_eq!(report.ranges.blue, ChannelRange::new(0, 10));
        assert_eq!(report.domain.get(), 100);

        assert_eq!(image.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(1, 0), &Rgb([255, 26, 26]));
        assert_eq!(image.get_pixel(0, 1), &Rgb([128, 13, 13]));
        assert_eq!(image.get_pixel(1, 1), &Rgb([64, 0, 0]));
    }

    #[test]
    fn test_widest_channel_spans_full_range() {
        let mut image = ImageBuffer::from_fn(16, 4, |x, y| {
            Rgb([(20 + x * 3) as u8, (100 + y) as u8, 200])
        });
        normalize_image(&mut image).expect("normalization succeeds");

        let (min, max) = image
            .pixels()
            .fold((u8::MAX, u8::MIN), |(min, max), p| (min.min(p[0]), max.max(p[0])));
        assert_eq!((min, max), (0, 255));
        assert!(image.pixels().all(|p| p[2] == 0));
    }

    #[test]
    fn test_degenerate_image_is_left_untouched() {
        let mut image = ImageBuffer::from_pixel(3, 3, Rgb([12, 200, 7]));
        let original = image.clone();

        let result = normalize_image(&mut image);

        assert_matches!(result, Err(NormalizeError::DegenerateImage));
        assert_eq!(image, original);
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let mut image = RgbImage::new(0, 0);
        assert_matches!(normalize_image(&mut image), Err(NormalizeError::EmptyImage));
    }

    #[test]
    fn test_already_full_range_is_unchanged() {
        let mut image = ImageBuffer::from_fn(256, 1, |x, _| {
            let v = x as u8;
            Rgb([v, 255 - v, v / 2])
        });
        let original = image.clone();
        normalize_image(&mut image).expect("normalization succeeds");

        let unchanged = image
            .pixels()
            .zip(original.pixels())
            .all(|(a, b)| a[0] == b[0] && a[1] == b[1]);
        assert!(unchanged);
    }
}
