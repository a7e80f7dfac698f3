use std::io::Cursor;

use super::*;

fn png_bytes(rgba: Vec<u8>, w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(w, h, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_pixels() {
    let buf = png_bytes(vec![100, 50, 200, 128], 1, 1);

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.width, 1);
    assert_eq!(decoded.height, 1);
    assert_eq!(decoded.rgba8, vec![100, 50, 200, 128]);
}

#[test]
fn decode_image_rejects_garbage() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn decode_logo_accepts_raster() {
    let buf = png_bytes(vec![10, 20, 30, 255], 1, 1);
    let decoded = decode_logo(&buf).unwrap();
    assert_eq!((decoded.width, decoded.height), (1, 1));
}

#[test]
fn decode_logo_rasterizes_svg_at_intrinsic_size() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="4">
        <rect width="8" height="4" fill="#ff0000"/>
    </svg>"##;
    let decoded = decode_logo(svg).unwrap();
    assert_eq!((decoded.width, decoded.height), (8, 4));
    // Fully covered by an opaque red rect.
    assert_eq!(&decoded.rgba8[0..4], &[255, 0, 0, 255]);
}

#[test]
fn decode_logo_rejects_malformed_svg() {
    assert!(decode_logo(b"<svg").is_err());
}

#[test]
fn premultiply_then_unpremultiply_roundtrips_opaque() {
    let mut px = vec![10u8, 128, 255, 255, 7, 8, 9, 0];
    let original = px.clone();
    premultiply_rgba8_in_place(&mut px);
    // Zero alpha collapses color channels.
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &original[0..4]);
}
