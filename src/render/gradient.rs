use crate::render::composite;
use crate::render::surface::Surface;

// The gradient spans the left 90% of the canvas; the final transparent stop
// extends over the remainder.
const SPAN_FRAC: f32 = 0.9;
const MID_FACTOR: f32 = 0.7;

/// Overlay alpha at column `x`: a three-stop horizontal ramp from
/// `peak` at x=0 through `peak * 0.7` at the span midpoint to fully
/// transparent at 90% of the width.
pub fn overlay_alpha(x: u32, width: u32, peak: f32) -> f32 {
    let peak = peak.clamp(0.0, 1.0);
    let span = f32::max(width as f32 * SPAN_FRAC, 1.0);
    let t = x as f32 / span;
    if t >= 1.0 {
        0.0
    } else if t <= 0.5 {
        let u = t / 0.5;
        peak + (peak * MID_FACTOR - peak) * u
    } else {
        let u = (t - 0.5) / 0.5;
        peak * MID_FACTOR * (1.0 - u)
    }
}

/// Darken the surface with the legibility gradient at the given peak
/// opacity, composited source-over across the full canvas rect.
pub fn apply(surface: &mut Surface, peak_opacity: f32) {
    let width = surface.width();
    let height = surface.height();

    // Per-column premultiplied black; the ramp only varies along x.
    let columns: Vec<composite::PremulRgba8> = (0..width)
        .map(|x| {
            let alpha = overlay_alpha(x, width, peak_opacity);
            let a8 = ((alpha * 255.0).round() as i32).clamp(0, 255) as u8;
            [0, 0, 0, a8]
        })
        .collect();

    let data = surface.data_mut();
    for y in 0..height as usize {
        let row = &mut data[y * width as usize * 4..(y + 1) * width as usize * 4];
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let src = columns[x];
            if src[3] == 0 {
                continue;
            }
            let out = composite::over([px[0], px[1], px[2], px[3]], src, 1.0);
            px.copy_from_slice(&out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
