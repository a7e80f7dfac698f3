use std::path::PathBuf;

use crate::assets::fetch::AssetRef;
use crate::foundation::color::Rgba8;
use crate::foundation::error::{AdmarkError, AdmarkResult};
use crate::layout::text::WrapMode;
use crate::render::filter::ColorAdjust;

/// One branding composition: a source photo plus the options to draw on it.
///
/// A request is constructed fresh per call and nothing is retained between
/// invocations.
#[derive(Clone, Debug)]
pub struct CompositionRequest {
    /// Locator for the base photo. Required; a failed load is fatal.
    pub source: AssetRef,
    pub options: BrandingOptions,
}

impl CompositionRequest {
    pub fn new(source: AssetRef, options: BrandingOptions) -> Self {
        Self { source, options }
    }
}

/// Branding options with engine-neutral defaults.
///
/// Unset fields fall back to the stated defaults; there is no schema beyond
/// "absent = default". Campaign content (default taglines, the default logo
/// and website) is deliberately not baked in here; callers supply it as a
/// profile at the application boundary.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BrandingOptions {
    /// Headline text; literal `\n` separates lines.
    pub title: String,
    /// Secondary line under the title; empty means no subtitle block.
    pub subtitle: String,
    /// Hex colors, white by default.
    pub title_color: String,
    pub subtitle_color: String,
    pub website_text_color: String,
    /// Peak alpha of the gradient overlay's first stop (0..1 scale).
    /// Passed through verbatim; out-of-range values saturate at the color
    /// math like they would in a CSS `rgba()`.
    pub overlay_opacity: f32,
    /// Optional logo; a failed load degrades to "no logo".
    pub logo_url: Option<String>,
    /// Optional bottom-left caption.
    pub website_text: Option<String>,
    /// Base-image color adjustments on the -100..100 editor scale.
    /// All-zero skips the filter step entirely (the headless path).
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    /// Line strategy for title/subtitle. `Newline` is the recipe default;
    /// `Greedy` reflows against 90% of the canvas width.
    pub wrap: WrapMode,
    /// Brand font file used for all text. Required whenever any text is
    /// non-empty; there is no ambient system fallback.
    pub font_path: Option<PathBuf>,
}

impl Default for BrandingOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            title_color: "#ffffff".to_owned(),
            subtitle_color: "#ffffff".to_owned(),
            website_text_color: "#ffffff".to_owned(),
            overlay_opacity: 0.9,
            logo_url: None,
            website_text: None,
            brightness: 0.0,
            contrast: 0.0,
            saturation: 0.0,
            wrap: WrapMode::Newline,
            font_path: None,
        }
    }
}

impl BrandingOptions {
    pub fn validate(&self) -> AdmarkResult<()> {
        Rgba8::parse_hex(&self.title_color)?;
        Rgba8::parse_hex(&self.subtitle_color)?;
        Rgba8::parse_hex(&self.website_text_color)?;

        if !self.overlay_opacity.is_finite() {
            return Err(AdmarkError::validation("overlay_opacity must be finite"));
        }
        for (name, v) in [
            ("brightness", self.brightness),
            ("contrast", self.contrast),
            ("saturation", self.saturation),
        ] {
            if !v.is_finite() {
                return Err(AdmarkError::validation(format!("{name} must be finite")));
            }
        }

        if self.has_text() && self.font_path.is_none() {
            return Err(AdmarkError::validation(
                "branding text requires font_path to be set",
            ));
        }
        Ok(())
    }

    /// Whether any text block would draw glyphs.
    pub fn has_text(&self) -> bool {
        !self.title.is_empty()
            || !self.subtitle.is_empty()
            || self
                .website_text
                .as_deref()
                .is_some_and(|t| !t.is_empty())
    }

    pub fn color_adjust(&self) -> ColorAdjust {
        ColorAdjust::new(self.brightness, self.contrast, self.saturation)
    }
}

/// The flattened output image.
#[derive(Clone, Debug)]
pub struct ComposedImage {
    /// Equal to the source image's native dimensions, always.
    pub width: u32,
    pub height: u32,
    /// Lossless PNG encoding of the flattened surface.
    pub png: Vec<u8>,
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
