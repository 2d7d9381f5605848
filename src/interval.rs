use crate::boundary::Boundary;
use crate::error::{Error, Result};

use std::ops::Range;

/// The ordered, non-overlapping ranges of a single line that get sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet(Vec<Range<usize>>);

impl IntervalSet {
    /// A single interval spanning the whole line.
    pub fn new(size: usize) -> Self {
        if size == 0 {
            IntervalSet(Vec::new())
        } else {
            IntervalSet(vec![0..size])
        }
    }

    /// Walks `weights` alternating between `start` and `end` boundaries.
    ///
    /// Each interval begins where `start` matches and runs up to (excluding)
    /// the index `end` reports from there, or to the end of the line if `end`
    /// never matches. The next interval is searched for from the end of the
    /// previous one. Empty intervals are dropped and the search resumes one
    /// index further so the walk always makes progress.
    pub fn scan<S, E>(weights: &[u32], start: &S, end: &E) -> Result<Self>
    where
        S: Boundary + ?Sized,
        E: Boundary + ?Sized,
    {
        let len = weights.len();
        let mut ranges = Vec::new();
        let mut cursor = 0;
        while cursor < len {
            let x_start = match start.find(cursor, weights) {
                Some(x) => within(x, cursor, len)?,
                None => break,
            };
            if x_start == len {
                break;
            }
            let x_end = match end.find(x_start, weights) {
                Some(x) => within(x, x_start, len)?,
                None => len,
            };
            if x_end == x_start {
                cursor = x_end + 1;
                continue;
            }
            ranges.push(x_start..x_end);
            cursor = x_end;
        }
        Ok(IntervalSet(ranges))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter<'this>(&'this self) -> impl Iterator<Item = Range<usize>> + 'this {
        self.0.iter().cloned()
    }
}

fn within(index: usize, start: usize, len: usize) -> Result<usize> {
    if index > len {
        Err(Error::BoundaryOutOfRange { index, len })
    } else if index < start {
        Err(Error::BoundaryBeforeStart { index, start })
    } else {
        Ok(index)
    }
}
