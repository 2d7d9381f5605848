use thiserror::Error;

use std::ops::RangeInclusive;

/// Valid range for any threshold handed to a boundary predicate.
pub const CHANNEL_RANGE: RangeInclusive<u32> = 0..=255;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A threshold lies outside of the channel value range.
    #[error("threshold {0} is outside of the channel range 0..=255")]
    ThresholdOutOfRange(u32),

    #[error("expected at most 2 thresholds, got {0}")]
    TooManyThresholds(usize),

    #[error("neither rows nor columns are selected for sorting")]
    NoAxis,

    #[error("the custom mode needs at least one threshold")]
    MissingThreshold,

    /// The lower bound of a band lies above its upper bound.
    #[error("band {low}..{high} is inverted")]
    InvertedBand { low: u32, high: u32 },

    /// A boundary returned an index past the end of the line.
    #[error("boundary returned index {index} for a line of length {len}")]
    BoundaryOutOfRange { index: usize, len: usize },

    /// An end boundary returned an index before the interval start.
    #[error("boundary returned index {index} before interval start {start}")]
    BoundaryBeforeStart { index: usize, start: usize },

    #[error("image is {image:?} but weights are {weights:?} (width, height)")]
    ShapeMismatch {
        image: (usize, usize),
        weights: (usize, usize),
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Rejects thresholds that cannot be compared against a channel value.
pub fn check_threshold(value: u32) -> Result<u32> {
    if CHANNEL_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(Error::ThresholdOutOfRange(value))
    }
}
