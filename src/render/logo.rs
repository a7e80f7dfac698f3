use std::sync::Arc;

use kurbo::{Affine, Rect};

use crate::assets::decode::{DecodedImage, premultiply_rgba8_in_place};
use crate::foundation::error::AdmarkResult;
use crate::render::surface::{Surface, affine_to_cpu};

// Logo budgets relative to the canvas: a band across the top 10% of the
// height, no wider than 30% of the width, 5% top padding.
const MAX_HEIGHT_FRAC: f64 = 0.1;
const MAX_WIDTH_FRAC: f64 = 0.3;
const TOP_PAD_FRAC: f64 = 0.05;

/// Scale and position of a logo within the canvas band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoPlacement {
    /// Uniform scale applied to the logo's native size. May exceed 1 for
    /// logos smaller than both budgets.
    pub scale: f64,
    /// Placed bounds on the canvas, horizontally centered.
    pub rect: Rect,
}

impl LogoPlacement {
    /// Fit a logo of native size `logo_w` x `logo_h` into the band of a
    /// `canvas_w` x `canvas_h` canvas, preserving aspect ratio.
    pub fn compute(canvas_w: u32, canvas_h: u32, logo_w: u32, logo_h: u32) -> Self {
        let (cw, ch) = (f64::from(canvas_w), f64::from(canvas_h));
        let (lw, lh) = (f64::from(logo_w), f64::from(logo_h));

        let max_h = ch * MAX_HEIGHT_FRAC;
        let max_w = cw * MAX_WIDTH_FRAC;
        let scale = if lw > 0.0 && lh > 0.0 {
            f64::min(max_h / lh, max_w / lw)
        } else {
            0.0
        };

        let render_w = lw * scale;
        let render_h = lh * scale;
        let x = (cw - render_w) / 2.0;
        let y = ch * TOP_PAD_FRAC;

        Self {
            scale,
            rect: Rect::new(x, y, x + render_w, y + render_h),
        }
    }
}

/// Draw the logo into its band and composite it over the base surface.
pub fn draw(base: &mut Surface, logo: &DecodedImage) -> AdmarkResult<()> {
    let placement = LogoPlacement::compute(base.width(), base.height(), logo.width, logo.height);
    if placement.scale <= 0.0 {
        return Ok(());
    }

    let mut premul = logo.rgba8.clone();
    premultiply_rgba8_in_place(&mut premul);
    let logo_layer = Surface::from_premul_rgba8(&premul, logo.width, logo.height)?;

    let paint = vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(logo_layer.into_pixmap())),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    };

    let transform =
        Affine::translate((placement.rect.x0, placement.rect.y0)) * Affine::scale(placement.scale);
    let (w, h) = (base.width(), base.height());
    let (lw, lh) = (f64::from(logo.width), f64::from(logo.height));

    let layer = Surface::render_pass(w, h, |ctx| {
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(affine_to_cpu(transform));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, lw, lh));
    })?;

    base.composite_over(&layer, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/render/logo.rs"]
mod tests;
