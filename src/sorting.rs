use crate::boundary::Boundary;
use crate::error::Result;
use crate::grid::LineMut;
use crate::interval::IntervalSet;

/// Buffers reused across lines to prevent frequent reallocations.
#[derive(Debug)]
pub struct Scratch<P> {
    weights: Vec<u32>,
    order: Vec<usize>,
    pixels: Vec<P>,
}

impl<P> Default for Scratch<P> {
    fn default() -> Self {
        Scratch {
            weights: Vec::new(),
            order: Vec::new(),
            pixels: Vec::new(),
        }
    }
}

/// Sorts every interval `start` and `end` carve out of a line by weight.
///
/// Pixels move as a whole and equal weights keep their relative order. With
/// `sync_weights` the weight line receives the same permutation, otherwise it
/// keeps describing the unsorted line and later passes read stale weights.
///
/// Boundaries are evaluated against the weights as they were before the line
/// was touched; sorting an interval never changes the weights a later scan
/// of the same line looks at.
pub fn sort_line<P, S, E>(
    pixels: &mut LineMut<'_, P>,
    weights: &mut LineMut<'_, u32>,
    start: &S,
    end: &E,
    sync_weights: bool,
    scratch: &mut Scratch<P>,
) -> Result<IntervalSet>
where
    P: Copy,
    S: Boundary + ?Sized,
    E: Boundary + ?Sized,
{
    assert_eq!(pixels.len(), weights.len(), "pixel and weight lines differ");
    let Scratch {
        weights: line_weights,
        order,
        pixels: buffer,
    } = scratch;
    line_weights.clear();
    line_weights.extend(weights.iter().copied());

    let intervals = IntervalSet::scan(line_weights, start, end)?;
    for range in intervals.iter() {
        order.clear();
        order.extend(range.clone());
        // stable, so runs that are already in order stay put
        order.sort_by_key(|&idx| line_weights[idx]);

        buffer.clear();
        buffer.extend(order.iter().map(|&idx| *pixels.get(idx)));
        for (x, pixel) in buffer.drain(..).enumerate() {
            pixels.set(range.start + x, pixel);
        }
        if sync_weights {
            for (x, &idx) in order.iter().enumerate() {
                weights.set(range.start + x, line_weights[idx]);
            }
        }
    }
    Ok(intervals)
}
