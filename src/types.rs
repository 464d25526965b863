//! Domain-specific types for channel normalization

use std::fmt;

/// Image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: u32,
    pub cols: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{cols}x{rows}", cols = self.cols, rows = self.rows)
    }
}

/// One of the three color planes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Sample position inside an `Rgb<u8>` pixel
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Red => "r",
            Channel::Green => "g",
            Channel::Blue => "b",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Smallest and largest sample observed in one channel
///
/// Kept as signed integers so that the "no samples" sentinel `(256, -1)`
/// is representable: an empty range always has `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    pub min: i32,
    pub max: i32,
}

impl ChannelRange {
    /// Result of scanning zero samples
    pub const EMPTY: ChannelRange = ChannelRange { min: 256, max: -1 };

    #[must_use]
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// `max - min`, or `None` when no samples were seen
    #[inline]
    #[must_use]
    pub fn span(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(self.max.abs_diff(self.min))
        }
    }
}

impl fmt::Display for ChannelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{min}, {max}]", min = self.min, max = self.max)
    }
}

/// Per-channel ranges of one image, in red, green, blue order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbRanges {
    pub red: ChannelRange,
    pub green: ChannelRange,
    pub blue: ChannelRange,
}

impl RgbRanges {
    #[must_use]
    pub fn new(red: ChannelRange, green: ChannelRange, blue: ChannelRange) -> Self {
        Self { red, green, blue }
    }

    #[must_use]
    pub fn get(&self, channel: Channel) -> ChannelRange {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, ChannelRange)> + '_ {
        Channel::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// Largest per-channel span, the common denominator of the rescale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SharedDomain(u32);

impl SharedDomain {
    /// Returns `None` for a zero span, which cannot be divided by
    #[must_use]
    pub fn new(span: u32) -> Option<Self> {
        (span > 0).then_some(Self(span))
    }

    #[inline]
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SharedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the normalizer saw and used for one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationReport {
    pub dimensions: Dimensions,
    pub ranges: RgbRanges,
    pub domain: SharedDomain,
}
