use super::*;

#[test]
fn defaults_are_neutral() {
    let o = BrandingOptions::default();
    assert_eq!(o.title, "");
    assert_eq!(o.subtitle, "");
    assert_eq!(o.title_color, "#ffffff");
    assert_eq!(o.overlay_opacity, 0.9);
    assert_eq!(o.logo_url, None);
    assert_eq!(o.website_text, None);
    assert!(o.color_adjust().is_identity());
    assert_eq!(o.wrap, WrapMode::Newline);
    assert!(!o.has_text());
    o.validate().unwrap();
}

#[test]
fn json_absent_fields_fall_back_to_defaults() {
    let o: BrandingOptions = serde_json::from_str(r#"{ "title": "Hello" }"#).unwrap();
    assert_eq!(o.title, "Hello");
    assert_eq!(o.subtitle, "");
    assert_eq!(o.overlay_opacity, 0.9);
    assert_eq!(o.subtitle_color, "#ffffff");
}

#[test]
fn json_roundtrip() {
    let mut o = BrandingOptions::default();
    o.title = "A\nB".to_owned();
    o.logo_url = Some("https://example.com/logo.svg".to_owned());
    o.brightness = 10.0;
    let s = serde_json::to_string(&o).unwrap();
    let de: BrandingOptions = serde_json::from_str(&s).unwrap();
    assert_eq!(de.title, "A\nB");
    assert_eq!(de.logo_url.as_deref(), Some("https://example.com/logo.svg"));
    assert_eq!(de.brightness, 10.0);
}

#[test]
fn validate_rejects_malformed_colors() {
    let mut o = BrandingOptions::default();
    o.title_color = "white".to_owned();
    assert!(o.validate().is_err());
}

#[test]
fn validate_rejects_non_finite_numbers() {
    let mut o = BrandingOptions::default();
    o.overlay_opacity = f32::NAN;
    assert!(o.validate().is_err());

    let mut o = BrandingOptions::default();
    o.contrast = f32::INFINITY;
    assert!(o.validate().is_err());
}

#[test]
fn text_without_font_is_rejected() {
    let mut o = BrandingOptions::default();
    o.title = "Hello".to_owned();
    assert!(o.has_text());
    assert!(o.validate().is_err());

    o.font_path = Some(std::path::PathBuf::from("brand.ttf"));
    o.validate().unwrap();
}

#[test]
fn whitespace_only_website_counts_as_text() {
    let mut o = BrandingOptions::default();
    o.website_text = Some(" ".to_owned());
    assert!(o.has_text());

    o.website_text = Some(String::new());
    assert!(!o.has_text());
}

#[test]
fn out_of_range_opacity_passes_validation() {
    // Passed through verbatim; the ramp saturates at the color math instead.
    let mut o = BrandingOptions::default();
    o.overlay_opacity = 3.5;
    o.validate().unwrap();
    o.overlay_opacity = -2.0;
    o.validate().unwrap();
}
