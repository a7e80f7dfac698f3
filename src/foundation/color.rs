use crate::foundation::error::{AdmarkError, AdmarkResult};

/// Straight-alpha RGBA8 color.
///
/// Also used as the Parley brush type for text runs, so it carries the
/// derives Parley's `Brush` bound requires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scale the alpha channel by `alpha` (clamped to 0..1).
    pub fn with_alpha_scaled(self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let a = ((f32::from(self.a) * alpha).round() as i32).clamp(0, 255) as u8;
        Self { a, ..self }
    }

    /// Convert to premultiplied RGBA8 bytes (r,g,b multiplied by a).
    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }

    /// Parse a CSS-style hex color: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// The leading `#` is required. Malformed input is a validation error
    /// rather than a silent fallback, so bad branding configs surface before
    /// any pixels are drawn.
    pub fn parse_hex(s: &str) -> AdmarkResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| AdmarkError::validation(format!("color '{s}' must start with '#'")))?;

        let digit = |i: usize| -> AdmarkResult<u8> {
            let c = hex.as_bytes()[i];
            (c as char)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| AdmarkError::validation(format!("color '{s}' has a non-hex digit")))
        };

        match hex.len() {
            // Shorthand: each digit doubles (#fff -> #ffffff).
            3 | 4 => {
                let mut ch = [255u8; 4];
                for (slot, out) in ch.iter_mut().enumerate().take(hex.len()) {
                    let d = digit(slot)?;
                    *out = d << 4 | d;
                }
                Ok(Self::new(ch[0], ch[1], ch[2], ch[3]))
            }
            6 | 8 => {
                let mut ch = [255u8; 4];
                for (slot, out) in ch.iter_mut().enumerate().take(hex.len() / 2) {
                    *out = digit(slot * 2)? << 4 | digit(slot * 2 + 1)?;
                }
                Ok(Self::new(ch[0], ch[1], ch[2], ch[3]))
            }
            _ => Err(AdmarkError::validation(format!(
                "color '{s}' must have 3, 4, 6 or 8 hex digits"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
