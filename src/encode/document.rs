use std::io::{self, Write};

use crate::assets::decode::PixelGrid;
use crate::encode::gradient::{encode_stops, write_stops};

// The template is byte-exact, including the leading newline, tab indentation and the unclosed
// `.img {` rule. Browsers close the rule at `</style>`.
const FOOTER: &str = ";\n\t\t\t</style>\n\t\t</head>\n\t\t<body>\n\t\t\t<div class=\"img\"></div>\n\t\t</body>\n\t</html>\n\t";

fn header(width: u32, height: u32) -> String {
    format!(
        "\n\t<html>\n\t\t<head>\n\t\t\t<style>\n\t\t\t\t.img {{\n\t\t\t\t\twidth:{width}px;\n\t\t\t\t\theight:{height}px;\n\t\t\t\t\tbackground-image:\n\t"
    )
}

/// Summary of a written document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Declared container width, equal to the grid width.
    pub width: u32,
    /// Declared container height, equal to the grid height.
    pub height: u32,
    /// Number of gradient stops written.
    pub stops: u64,
}

/// Write the complete HTML document for `grid` into `out`.
///
/// Nothing is flushed here; callers owning a buffered writer flush it themselves.
pub fn write_document<W: Write + ?Sized>(
    out: &mut W,
    grid: &PixelGrid,
) -> io::Result<DocumentStats> {
    let (width, height) = (grid.width(), grid.height());
    out.write_all(header(width, height).as_bytes())?;
    let stops = write_stops(grid, &mut *out)?;
    out.write_all(FOOTER.as_bytes())?;

    Ok(DocumentStats {
        width,
        height,
        stops,
    })
}

/// Render the document for `grid` into memory.
pub fn render_document(grid: &PixelGrid) -> String {
    format!(
        "{}{}{FOOTER}",
        header(grid.width(), grid.height()),
        encode_stops(grid)
    )
}

#[cfg(test)]
#[path = "../../tests/unit/encode/document.rs"]
mod tests;
