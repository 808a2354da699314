use super::*;

fn widen(px: [u8; 4]) -> [u16; 4] {
    px.map(|c| u16::from(c) * 257)
}

#[test]
fn opaque_pixels_are_identical_in_both_modes() {
    let px = widen([255, 0, 0, 255]);
    assert_eq!(
        Rgba8::from_rgba16(px, AlphaMode::Premultiplied),
        Rgba8::new(255, 0, 0, 255)
    );
    assert_eq!(
        Rgba8::from_rgba16(px, AlphaMode::Straight),
        Rgba8::new(255, 0, 0, 255)
    );
}

#[test]
fn premultiplied_truncates_like_sixteen_bit_math() {
    let px = widen([100, 50, 200, 128]);
    assert_eq!(
        Rgba8::from_rgba16(px, AlphaMode::Premultiplied),
        Rgba8::new(50, 25, 100, 128)
    );
    assert_eq!(
        Rgba8::from_rgba16(widen([255, 255, 255, 127]), AlphaMode::Premultiplied),
        Rgba8::new(127, 127, 127, 127)
    );
}

#[test]
fn straight_keeps_color_channels() {
    let px = widen([100, 50, 200, 128]);
    assert_eq!(
        Rgba8::from_rgba16(px, AlphaMode::Straight),
        Rgba8::new(100, 50, 200, 128)
    );
}

#[test]
fn fully_transparent_premultiplies_to_zero() {
    let px = widen([10, 20, 30, 0]);
    assert_eq!(
        Rgba8::from_rgba16(px, AlphaMode::Premultiplied),
        Rgba8::new(0, 0, 0, 0)
    );
}

#[test]
fn sixteen_bit_channels_keep_high_byte() {
    let px = [0x12ff, 0xab00, 0x00ff, 0xffff];
    assert_eq!(
        Rgba8::from_rgba16(px, AlphaMode::Premultiplied),
        Rgba8::new(0x12, 0xab, 0x00, 0xff)
    );
}
