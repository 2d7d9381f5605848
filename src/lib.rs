use image::RgbImage;
use log::{debug, trace};

pub mod boundary;
pub mod config;
pub mod error;
pub mod grid;
pub mod interval;
pub mod lines;
pub mod sorting;
pub mod weight;

use self::boundary::Boundary;
use self::config::{LineOptions, SortConfig};
use self::error::{Error, Result};
use self::grid::{Axis, Grid};
use self::lines::LineOrder;
use self::sorting::Scratch;

/// Sorts the intervals of every selected column, then of every selected row.
///
/// `image` and `weights` must have the same shape, otherwise nothing is
/// touched. Columns are completely done before the first row is visited, so
/// the row pass sees the sorted columns. Returns the number of intervals
/// sorted.
///
/// A boundary breaking its contract aborts the pass midway; the grids are
/// left partially sorted.
pub fn apply<P, S, E, O>(
    image: &mut Grid<P>,
    weights: &mut Grid<u32>,
    start: &S,
    end: &E,
    order: &mut O,
    options: &LineOptions,
) -> Result<usize>
where
    P: Copy,
    S: Boundary + ?Sized,
    E: Boundary + ?Sized,
    O: LineOrder + ?Sized,
{
    if image.dimensions() != weights.dimensions() {
        return Err(Error::ShapeMismatch {
            image: image.dimensions(),
            weights: weights.dimensions(),
        });
    }

    // allocate buffer outside to prevent frequent reallocations
    let mut scratch = Scratch::default();
    let mut sorted = 0;
    for &axis in &[Axis::Column, Axis::Row] {
        if !options.sorts(axis) {
            continue;
        }
        let mut visited = 0;
        for line in order.lines(image.line_count(axis)) {
            let intervals = sorting::sort_line(
                &mut image.line_mut(axis, line),
                &mut weights.line_mut(axis, line),
                start,
                end,
                options.sync_weights,
                &mut scratch,
            )?;
            trace!("{:?} {}: {} intervals", axis, line, intervals.len());
            sorted += intervals.len();
            visited += 1;
        }
        debug!(
            "sorted {} of {} {:?} lines",
            visited,
            image.line_count(axis),
            axis
        );
    }
    Ok(sorted)
}

/// Runs every pass of `config` over `image` in place.
///
/// The configuration is validated up front; on error the image is unchanged.
pub fn sort_image<O>(image: &mut RgbImage, config: &SortConfig, order: &mut O) -> Result<()>
where
    O: LineOrder + ?Sized,
{
    let passes = config.passes()?;
    let mut pixels = Grid::from_image(image);
    let mut weights = weight::weigh(&pixels, config.weight);
    for (idx, pass) in passes.iter().enumerate() {
        let sorted = apply(
            &mut pixels,
            &mut weights,
            &pass.start,
            &pass.end,
            &mut *order,
            &config.lines,
        )?;
        debug!("pass {} {:?}: {} intervals sorted", idx, pass, sorted);
    }
    *image = pixels.to_image();
    Ok(())
}
