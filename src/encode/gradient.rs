use std::fmt;
use std::io::{self, Write};

use crate::assets::decode::PixelGrid;
use crate::foundation::core::Rgba8;

/// Separator written between consecutive stops. Never written after the last one.
pub const STOP_SEPARATOR: &str = ",\n";

/// One single-pixel circular color stop.
///
/// Renders as
/// `radial-gradient(1px circle at {x}px {y}px, rgba({r},{g},{b},{a}), transparent 1px)`;
/// alpha is printed as an integer 0..=255, not as a CSS fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientStop {
    /// Column, in CSS pixels from the left edge.
    pub x: u32,
    /// Row, in CSS pixels from the top edge.
    pub y: u32,
    /// Pixel color.
    pub color: Rgba8,
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgba8 { r, g, b, a } = self.color;
        write!(
            f,
            "radial-gradient(1px circle at {}px {}px, rgba({r},{g},{b},{a}), transparent 1px)",
            self.x, self.y
        )
    }
}

/// All stops of `grid` in row-major order: every `x` of row `y` before row `y + 1`.
pub fn stops(grid: &PixelGrid) -> impl Iterator<Item = GradientStop> + '_ {
    grid.rows().zip(0u32..).flat_map(|(row, y)| {
        row.iter()
            .zip(0u32..)
            .map(move |(&color, x)| GradientStop { x, y, color })
    })
}

/// Separator-joined stop list for a grid.
struct StopList<'a>(&'a PixelGrid);

impl fmt::Display for StopList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in stops(self.0).enumerate() {
            if i > 0 {
                f.write_str(STOP_SEPARATOR)?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}

/// Stream the stop list into `out` and return how many stops were written.
pub fn write_stops<W: Write + ?Sized>(grid: &PixelGrid, out: &mut W) -> io::Result<u64> {
    write!(out, "{}", StopList(grid))?;
    Ok(grid.len() as u64)
}

/// The stop list as a string; empty for a zero-sized grid.
pub fn encode_stops(grid: &PixelGrid) -> String {
    StopList(grid).to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gradient.rs"]
mod tests;
