use super::*;

#[test]
fn placement_is_height_limited_for_wide_canvases() {
    // 1000x1000 canvas: band is 100 tall, 300 wide. A 200x100 logo is
    // height-limited to scale 1.0.
    let p = LogoPlacement::compute(1000, 1000, 200, 100);
    assert!((p.scale - 1.0).abs() < 1e-9);
    assert_eq!(p.rect.width(), 200.0);
    assert_eq!(p.rect.height(), 100.0);
    // Centered horizontally, 5% from the top.
    assert_eq!(p.rect.x0, 400.0);
    assert_eq!(p.rect.y0, 50.0);
}

#[test]
fn placement_is_width_limited_for_wide_logos() {
    // 600 wide logo against a 300px width budget.
    let p = LogoPlacement::compute(1000, 1000, 600, 60);
    assert!((p.scale - 0.5).abs() < 1e-9);
    assert_eq!(p.rect.width(), 300.0);
    assert_eq!(p.rect.height(), 30.0);
}

#[test]
fn small_logos_are_upscaled_into_the_band() {
    // Both budgets exceed the native size, so the min() scale goes above 1.
    let p = LogoPlacement::compute(1000, 1000, 20, 10);
    assert!(p.scale > 1.0);
    assert!((p.scale - 10.0).abs() < 1e-9);
}

#[test]
fn zero_sized_logo_collapses_to_no_placement() {
    let p = LogoPlacement::compute(1000, 1000, 0, 50);
    assert_eq!(p.scale, 0.0);
}

#[test]
fn draw_composites_into_the_band_only() {
    let w = 200u32;
    let h = 100u32;
    let white = [255u8, 255, 255, 255].repeat((w * h) as usize);
    let mut base = crate::render::surface::Surface::from_premul_rgba8(&white, w, h).unwrap();

    // Opaque blue 20x10 logo.
    let logo = crate::assets::decode::DecodedImage {
        width: 20,
        height: 10,
        rgba8: [0u8, 0, 255, 255].repeat(200),
    };
    draw(&mut base, &logo).unwrap();

    let p = LogoPlacement::compute(w, h, logo.width, logo.height);
    let cx = (p.rect.x0 + p.rect.width() / 2.0) as usize;
    let cy = (p.rect.y0 + p.rect.height() / 2.0) as usize;
    let idx = (cy * w as usize + cx) * 4;
    let px = &base.data()[idx..idx + 4];
    // Blue dominates inside the band.
    assert!(px[2] > 200 && px[0] < 80);

    // A corner far outside the band is untouched.
    let corner = ((h as usize - 1) * w as usize + (w as usize - 1)) * 4;
    assert_eq!(&base.data()[corner..corner + 4], &[255, 255, 255, 255]);
}
