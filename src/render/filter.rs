/// Base-image color adjustments on the interactive editor's -100..100 scale.
///
/// Semantics match the CSS filter chain `brightness(1+b/100)
/// contrast(1+c/100) saturate(1+s/100)`: each step maps channels in 0..1,
/// clamps, and feeds the next. Zero values skip their step entirely, so the
/// all-zero adjustment is a byte-exact no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorAdjust {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
}

// Rec. 709 luma weights, as used by the CSS saturate() matrix.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

impl ColorAdjust {
    pub fn new(brightness: f32, contrast: f32, saturation: f32) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.brightness == 0.0 && self.contrast == 0.0 && self.saturation == 0.0
    }

    /// Apply the adjustment chain to straight RGBA8 pixels in place.
    ///
    /// Alpha is untouched; adjustments happen before premultiplication.
    pub fn apply_in_place(&self, rgba8: &mut [u8]) {
        if self.is_identity() {
            return;
        }

        let brightness = 1.0 + self.brightness / 100.0;
        let contrast = 1.0 + self.contrast / 100.0;
        let saturation = 1.0 + self.saturation / 100.0;

        for px in rgba8.chunks_exact_mut(4) {
            let mut r = f32::from(px[0]) / 255.0;
            let mut g = f32::from(px[1]) / 255.0;
            let mut b = f32::from(px[2]) / 255.0;

            if self.brightness != 0.0 {
                r = (r * brightness).clamp(0.0, 1.0);
                g = (g * brightness).clamp(0.0, 1.0);
                b = (b * brightness).clamp(0.0, 1.0);
            }
            if self.contrast != 0.0 {
                r = ((r - 0.5) * contrast + 0.5).clamp(0.0, 1.0);
                g = ((g - 0.5) * contrast + 0.5).clamp(0.0, 1.0);
                b = ((b - 0.5) * contrast + 0.5).clamp(0.0, 1.0);
            }
            if self.saturation != 0.0 {
                let luma = LUMA_R * r + LUMA_G * g + LUMA_B * b;
                r = (luma + (r - luma) * saturation).clamp(0.0, 1.0);
                g = (luma + (g - luma) * saturation).clamp(0.0, 1.0);
                b = (luma + (b - luma) * saturation).clamp(0.0, 1.0);
            }

            px[0] = (r * 255.0).round() as u8;
            px[1] = (g * 255.0).round() as u8;
            px[2] = (b * 255.0).round() as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/filter.rs"]
mod tests;
