//! What to sort and how, checked before any pixel moves.

use log::warn;

use crate::boundary::{Predicate, BLACK_THRESHOLD, WHITE_THRESHOLD};
use crate::error::{check_threshold, Error, Result};
use crate::grid::Axis;
use crate::weight::Weight;

use std::str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Sorts runs of black pixels.
    Black,
    /// Sorts whole lines.
    #[default]
    Brightness,
    /// Sorts runs of white pixels.
    White,
    /// Black runs first, then white runs of the result.
    Both,
    /// Sorts runs at or above one threshold, or inside a band of two.
    Custom,
}

impl str::FromStr for Mode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Mode::Black),
            "brightness" => Ok(Mode::Brightness),
            "white" => Ok(Mode::White),
            "both" => Ok(Mode::Both),
            "custom" => Ok(Mode::Custom),
            _ => Err(String::from(s)),
        }
    }
}

/// One full sweep of the grid with a start/end boundary pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pass {
    pub start: Predicate,
    pub end: Predicate,
}

impl Pass {
    pub fn new(start: Predicate, end: Predicate) -> Self {
        Pass { start, end }
    }
}

/// Which lines a pass walks and whether weights follow the pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOptions {
    pub rows: bool,
    pub columns: bool,
    /// Permute the weights along with the pixels. Turning this off makes
    /// later passes detect intervals on stale weights.
    pub sync_weights: bool,
}

impl LineOptions {
    pub fn sorts(&self, axis: Axis) -> bool {
        match axis {
            Axis::Row => self.rows,
            Axis::Column => self.columns,
        }
    }
}

impl Default for LineOptions {
    fn default() -> Self {
        LineOptions {
            rows: true,
            columns: true,
            sync_weights: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub mode: Mode,
    /// Thresholds for [`Mode::Custom`].
    pub thresholds: Vec<u32>,
    pub black: u32,
    pub white: u32,
    pub weight: Weight,
    pub lines: LineOptions,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            mode: Mode::default(),
            thresholds: Vec::new(),
            black: BLACK_THRESHOLD,
            white: WHITE_THRESHOLD,
            weight: Weight::default(),
            lines: LineOptions::default(),
        }
    }
}

impl SortConfig {
    /// Validates the configuration and returns the passes to run in order.
    pub fn passes(&self) -> Result<Vec<Pass>> {
        let black = check_threshold(self.black)?;
        let white = check_threshold(self.white)?;
        if !self.lines.rows && !self.lines.columns {
            return Err(Error::NoAxis);
        }
        if self.mode != Mode::Custom && !self.thresholds.is_empty() {
            warn!("thresholds are only used by the custom mode, ignoring them");
        }

        let black_runs = Pass::new(Predicate::Black(black), Predicate::NonBlack(black));
        let white_runs = Pass::new(Predicate::White(white), Predicate::NonWhite(white));
        let passes = match self.mode {
            Mode::Black => vec![black_runs],
            Mode::Brightness => vec![Pass::new(Predicate::Start, Predicate::End)],
            Mode::White => vec![white_runs],
            Mode::Both => vec![black_runs, white_runs],
            Mode::Custom => vec![custom(&self.thresholds)?],
        };
        Ok(passes)
    }
}

fn custom(thresholds: &[u32]) -> Result<Pass> {
    for &threshold in thresholds {
        check_threshold(threshold)?;
    }
    match *thresholds {
        [] => Err(Error::MissingThreshold),
        [value] => Ok(Pass::new(Predicate::AtLeast(value), Predicate::Below(value))),
        [low, high] if low > high => Err(Error::InvertedBand { low, high }),
        [low, high] => Ok(Pass::new(
            Predicate::Within { low, high },
            Predicate::Outside { low, high },
        )),
        _ => Err(Error::TooManyThresholds(thresholds.len())),
    }
}
