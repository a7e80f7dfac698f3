use super::*;

#[test]
fn all_zero_adjust_is_identity() {
    let adjust = ColorAdjust::default();
    assert!(adjust.is_identity());

    let mut px = vec![10u8, 128, 250, 77];
    let original = px.clone();
    adjust.apply_in_place(&mut px);
    assert_eq!(px, original);
}

#[test]
fn brightness_scales_channels_and_clamps() {
    let adjust = ColorAdjust::new(100.0, 0.0, 0.0);
    let mut px = vec![100u8, 200, 0, 255];
    adjust.apply_in_place(&mut px);
    assert_eq!(px, vec![200, 255, 0, 255]);
}

#[test]
fn negative_brightness_darkens() {
    let adjust = ColorAdjust::new(-50.0, 0.0, 0.0);
    let mut px = vec![200u8, 100, 50, 255];
    adjust.apply_in_place(&mut px);
    assert_eq!(px, vec![100, 50, 25, 255]);
}

#[test]
fn contrast_pivots_around_midpoint() {
    let adjust = ColorAdjust::new(0.0, 100.0, 0.0);
    let mut px = vec![128u8, 64, 255, 255];
    adjust.apply_in_place(&mut px);
    // 128/255 is just above the 0.5 pivot, 64 falls below, 255 saturates.
    assert!(px[0] >= 128 && px[0] <= 130);
    assert!(px[1] < 64);
    assert_eq!(px[2], 255);
}

#[test]
fn full_desaturation_yields_gray() {
    let adjust = ColorAdjust::new(0.0, 0.0, -100.0);
    let mut px = vec![255u8, 0, 0, 255];
    adjust.apply_in_place(&mut px);
    // Pure red collapses to its Rec. 709 luma.
    let luma = (0.2126f32 * 255.0).round() as u8;
    assert_eq!(px[0], luma);
    assert_eq!(px[1], luma);
    assert_eq!(px[2], luma);
    assert_eq!(px[3], 255);
}

#[test]
fn alpha_is_never_touched() {
    let adjust = ColorAdjust::new(80.0, -30.0, 40.0);
    let mut px = vec![13u8, 77, 200, 42];
    adjust.apply_in_place(&mut px);
    assert_eq!(px[3], 42);
}
