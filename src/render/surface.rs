use std::io::Cursor;

use crate::assets::decode::unpremultiply_rgba8_in_place;
use crate::foundation::error::{AdmarkError, AdmarkResult};
use crate::render::composite;

/// The in-memory drawing surface a composition is assembled on.
///
/// Wraps a premultiplied RGBA8 pixmap sized to the source image's native
/// dimensions. A surface is created, used and discarded within a single
/// composition; there is no pooling or cross-call reuse.
pub struct Surface {
    width: u32,
    height: u32,
    pixmap: vello_cpu::Pixmap,
}

impl Surface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> AdmarkResult<Self> {
        let (w, h) = checked_dims(width, height)?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Create a surface initialized from tightly packed premultiplied RGBA8.
    pub fn from_premul_rgba8(bytes: &[u8], width: u32, height: u32) -> AdmarkResult<Self> {
        let (w, h) = checked_dims(width, height)?;
        if bytes.len() != width as usize * height as usize * 4 {
            return Err(AdmarkError::validation("surface byte length mismatch"));
        }

        let mut may_have_opacities = false;
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for px in bytes.chunks_exact(4) {
            let a = px[3];
            may_have_opacities |= a != 255;
            pixels.push(vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a,
            });
        }

        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities),
        })
    }

    /// Run a vector drawing pass into a fresh transparent surface.
    ///
    /// The closure encodes draw calls on a `vello_cpu` context; the rendered
    /// result is returned as its own layer for source-over compositing.
    pub fn render_pass(
        width: u32,
        height: u32,
        encode: impl FnOnce(&mut vello_cpu::RenderContext),
    ) -> AdmarkResult<Self> {
        let mut layer = Self::new(width, height)?;
        let (w, h) = checked_dims(width, height)?;
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        encode(&mut ctx);
        ctx.flush();
        ctx.render_to_pixmap(&mut layer.pixmap);
        Ok(layer)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_as_u8_slice_mut()
    }

    /// Consume the surface, yielding the backing pixmap (used to build
    /// image paints for the renderer).
    pub(crate) fn into_pixmap(self) -> vello_cpu::Pixmap {
        self.pixmap
    }

    /// Source-over composite another surface of identical dimensions.
    pub fn composite_over(&mut self, src: &Surface, opacity: f32) -> AdmarkResult<()> {
        if self.width != src.width || self.height != src.height {
            return Err(AdmarkError::validation(
                "composite_over expects equal surface dimensions",
            ));
        }
        composite::over_in_place(self.data_mut(), src.data(), opacity)
    }

    /// Flatten to an encoded PNG.
    ///
    /// Pixels are unpremultiplied before encoding; an encoder failure is a
    /// serialization error, distinct from any load failure.
    pub fn to_png(&self) -> AdmarkResult<Vec<u8>> {
        let mut rgba8 = self.data().to_vec();
        unpremultiply_rgba8_in_place(&mut rgba8);

        let img = image::RgbaImage::from_raw(self.width, self.height, rgba8)
            .ok_or_else(|| AdmarkError::serialization("surface buffer has unexpected length"))?;

        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| AdmarkError::serialization(format!("png encode failed: {e}")))?;
        Ok(out.into_inner())
    }
}

/// Bridge a `kurbo` affine into the renderer's own `kurbo` vendoring.
pub(crate) fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn checked_dims(width: u32, height: u32) -> AdmarkResult<(u16, u16)> {
    if width == 0 || height == 0 {
        return Err(AdmarkError::validation("surface dimensions must be > 0"));
    }
    let w: u16 = width
        .try_into()
        .map_err(|_| AdmarkError::validation("surface width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| AdmarkError::validation("surface height exceeds u16"))?;
    Ok((w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
