use anyhow::Context;

use crate::foundation::error::{AdmarkError, AdmarkResult};

/// Decoded raster image in straight (non-premultiplied) RGBA8 form.
///
/// Color adjustments operate on straight alpha; rendering premultiplies at
/// the surface boundary.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major straight RGBA8.
    pub rgba8: Vec<u8>,
}

/// Decode encoded raster bytes (PNG, JPEG, ...) into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> AdmarkResult<DecodedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        width,
        height,
        rgba8: rgba.into_raw(),
    })
}

/// Decode logo bytes, accepting both raster formats and SVG.
///
/// Hosted brand logos are frequently SVG; those are rasterized at the
/// document's intrinsic pixel size so the downstream scale/placement math is
/// identical for both kinds.
pub fn decode_logo(bytes: &[u8]) -> AdmarkResult<DecodedImage> {
    if looks_like_svg(bytes) {
        rasterize_svg(bytes)
    } else {
        decode_image(bytes)
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let sample_len = bytes.len().min(1024);
    let sample = std::str::from_utf8(&bytes[..sample_len]).unwrap_or("");
    sample.contains("<svg") || sample.contains("<?xml")
}

fn rasterize_svg(bytes: &[u8]) -> AdmarkResult<DecodedImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| AdmarkError::validation("svg has a zero-sized viewport"))?;

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    // tiny-skia pixmaps are premultiplied; normalize to straight alpha.
    let mut rgba8 = pixmap.take();
    unpremultiply_rgba8_in_place(&mut rgba8);

    Ok(DecodedImage {
        width,
        height,
        rgba8,
    })
}

/// Convert straight RGBA8 to premultiplied RGBA8 in place.
pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

/// Convert premultiplied RGBA8 back to straight RGBA8 in place.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
