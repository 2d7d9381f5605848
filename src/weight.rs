//! Per-pixel weights that intervals are detected on and sorted by.

use image::Pixel;

use crate::grid::Grid;

use std::str;

#[inline]
pub fn lightness<P>(pixel: &P) -> u32
where
    P: Pixel<Subpixel = u8>,
{
    pixel.to_luma()[0] as u32
}

#[inline]
pub fn intensity<P>(pixel: &P) -> u32
where
    P: Pixel<Subpixel = u8>,
{
    pixel.channels().iter().map(|c| *c as u32).sum()
}

#[inline]
pub fn chan_min<P>(pixel: &P) -> u32
where
    P: Pixel<Subpixel = u8>,
{
    pixel.channels().iter().copied().min().unwrap_or(0) as u32
}

/// The largest channel value.
#[inline]
pub fn brightness<P>(pixel: &P) -> u32
where
    P: Pixel<Subpixel = u8>,
{
    pixel.channels().iter().copied().max().unwrap_or(255) as u32
}

#[inline]
pub fn darkness<P>(pixel: &P) -> u32
where
    P: Pixel<Subpixel = u8>,
{
    255 - brightness(pixel)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Brightness,
    Darkness,
    Lightness,
    Intensity,
    Minimum,
}

impl Weight {
    pub fn function<P>(self) -> fn(&P) -> u32
    where
        P: Pixel<Subpixel = u8>,
    {
        match self {
            Weight::Brightness => brightness,
            Weight::Darkness => darkness,
            Weight::Lightness => lightness,
            Weight::Intensity => intensity,
            Weight::Minimum => chan_min,
        }
    }
}

impl str::FromStr for Weight {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brightness" => Ok(Weight::Brightness),
            "darkness" => Ok(Weight::Darkness),
            "lightness" => Ok(Weight::Lightness),
            "intensity" => Ok(Weight::Intensity),
            "minimum" => Ok(Weight::Minimum),
            _ => Err(String::from(s)),
        }
    }
}

/// Builds the weight grid matching `image` cell for cell.
pub fn weigh<P>(image: &Grid<P>, weight: Weight) -> Grid<u32>
where
    P: Pixel<Subpixel = u8>,
{
    image.map(weight.function())
}
