/// How color channels are reduced to 8 bits when a pixel is not fully opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlphaMode {
    /// Color channels are premultiplied by alpha at 16-bit precision before the high byte is
    /// taken. White at alpha `0x7F` is emitted as `rgba(127,127,127,127)`.
    #[default]
    Premultiplied,
    /// Color channels are emitted as decoded; only the high byte is taken.
    Straight,
}

/// One output pixel, 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Build a pixel from explicit channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Reduce a straight-alpha RGBA16 pixel to RGBA8 by keeping the high byte of each channel.
    ///
    /// With [`AlphaMode::Premultiplied`] the color channels are first scaled by
    /// `alpha / 0xFFFF`, truncating.
    pub fn from_rgba16(px: [u16; 4], mode: AlphaMode) -> Self {
        let [r, g, b, a] = px;
        let reduce = |c: u16| -> u8 {
            let c = match mode {
                AlphaMode::Premultiplied => premul_u16(c, a),
                AlphaMode::Straight => c,
            };
            (c >> 8) as u8
        };

        Self {
            r: reduce(r),
            g: reduce(g),
            b: reduce(b),
            a: (a >> 8) as u8,
        }
    }
}

fn premul_u16(c: u16, a: u16) -> u16 {
    ((u32::from(c) * u32::from(a)) / 0xFFFF) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
