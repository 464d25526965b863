use crate::types::ChannelRange;

/// Find the smallest and largest sample of one channel
///
/// An empty slice yields [`ChannelRange::EMPTY`].
#[inline]
#[must_use]
pub fn scan_range(samples: &[u8]) -> ChannelRange {
    samples
        .iter()
        .fold(ChannelRange::EMPTY, |mut range, &sample| {
            let value = i32::from(sample);
            if value < range.min {
                range.min = value;
            }
            if value > range.max {
                range.max = value;
            }
            range
        })
}
