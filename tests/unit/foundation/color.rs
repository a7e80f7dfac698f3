use super::*;

#[test]
fn parse_full_hex() {
    assert_eq!(Rgba8::parse_hex("#ffffff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::parse_hex("#102030").unwrap(),
        Rgba8::new(0x10, 0x20, 0x30, 255)
    );
    assert_eq!(
        Rgba8::parse_hex("#10203040").unwrap(),
        Rgba8::new(0x10, 0x20, 0x30, 0x40)
    );
}

#[test]
fn parse_shorthand_doubles_digits() {
    assert_eq!(Rgba8::parse_hex("#fff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::parse_hex("#1a2b").unwrap(),
        Rgba8::new(0x11, 0xaa, 0x22, 0xbb)
    );
}

#[test]
fn parse_rejects_malformed() {
    assert!(Rgba8::parse_hex("ffffff").is_err());
    assert!(Rgba8::parse_hex("#gggggg").is_err());
    assert!(Rgba8::parse_hex("#12345").is_err());
    assert!(Rgba8::parse_hex("#").is_err());
}

#[test]
fn premultiplied_scales_color_channels() {
    let c = Rgba8::new(100, 50, 200, 128);
    assert_eq!(
        c.premultiplied(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
}

#[test]
fn alpha_scaling_clamps() {
    let c = Rgba8::WHITE;
    assert_eq!(c.with_alpha_scaled(0.5).a, 128);
    assert_eq!(c.with_alpha_scaled(2.0).a, 255);
    assert_eq!(c.with_alpha_scaled(-1.0).a, 0);
}
