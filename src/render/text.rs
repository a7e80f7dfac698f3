use std::borrow::Cow;

use kurbo::{Affine, Point};

use crate::foundation::color::Rgba8;
use crate::foundation::error::{AdmarkError, AdmarkResult};
use crate::render::blur;
use crate::render::composite;
use crate::render::surface::{Surface, affine_to_cpu};

const TITLE_MIN_PX: f32 = 28.0;
const TITLE_WIDTH_FRAC: f32 = 0.065;
const SUBTITLE_MIN_PX: f32 = 20.0;
const SUBTITLE_WIDTH_FRAC: f32 = 0.035;
const WEBSITE_MIN_PX: f32 = 16.0;
const WEBSITE_WIDTH_FRAC: f32 = 0.022;
const LINE_HEIGHT_MUL: f32 = 1.2;
const TITLE_START_Y_FRAC: f32 = 0.30;
const LEFT_PAD_FRAC: f32 = 0.05;
const WEBSITE_ANCHOR_FRAC: f32 = 0.95;
// Gap between the title block and the subtitle block, in subtitle font sizes.
const SUBTITLE_GAP_MUL: f32 = 0.5;

/// Drop shadow drawn under a text line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Rgba8,
    pub blur_radius: u32,
    pub offset: (f32, f32),
}

impl Shadow {
    /// The legibility shadow used for title and subtitle lines.
    pub fn text_default() -> Self {
        Self {
            color: Rgba8::new(0, 0, 0, 204),
            blur_radius: 8,
            offset: (2.0, 2.0),
        }
    }
}

/// Explicit per-line styling. Replaces mutable canvas-context state: every
/// draw call receives its full style, so nothing leaks between draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub color: Rgba8,
    pub shadow: Option<Shadow>,
}

/// How a placed line's position is interpreted vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Position is the top of the line box.
    Top,
    /// Position is the bottom of the line box (website caption).
    Bottom,
}

/// One line of text with its resolved position and style.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub pos: Point,
    pub anchor: TextAnchor,
    pub style: TextStyle,
}

impl PlacedLine {
    fn anchored_origin(&self, line_height: f32) -> Point {
        match self.anchor {
            TextAnchor::Top => self.pos,
            TextAnchor::Bottom => Point::new(self.pos.x, self.pos.y - f64::from(line_height)),
        }
    }
}

/// The fully resolved text layout for one composition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextPlan {
    pub lines: Vec<PlacedLine>,
}

impl TextPlan {
    /// True when no line would produce any glyphs.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.text.is_empty())
    }
}

/// Text content feeding the plan: pre-split lines plus parsed colors.
#[derive(Clone, Debug)]
pub struct TextContent<'a> {
    pub title_lines: &'a [String],
    pub subtitle_lines: &'a [String],
    pub title_color: Rgba8,
    pub subtitle_color: Rgba8,
    pub website: Option<(&'a str, Rgba8)>,
}

/// Title font size for a canvas width: 6.5% of the width, floored at 28px.
pub fn title_font_size(width: u32) -> f32 {
    f32::max(TITLE_MIN_PX, width as f32 * TITLE_WIDTH_FRAC)
}

/// Subtitle font size for a canvas width: 3.5% of the width, floored at 20px.
pub fn subtitle_font_size(width: u32) -> f32 {
    f32::max(SUBTITLE_MIN_PX, width as f32 * SUBTITLE_WIDTH_FRAC)
}

fn website_font_size(width: u32) -> f32 {
    f32::max(WEBSITE_MIN_PX, width as f32 * WEBSITE_WIDTH_FRAC)
}

/// Compute every placed line for the branding text blocks.
///
/// Pure: the same dimensions and content always yield the same plan.
///
/// Vertical rhythm: the title starts at 30% of the canvas height and each
/// line advances by 1.2x its font size. The subtitle block, when present,
/// is preceded by a gap of half the subtitle font size; an empty subtitle
/// contributes neither lines nor gap. The website caption is independent of
/// that flow, bottom-anchored at 95% of the canvas height.
pub fn plan_text(width: u32, height: u32, content: &TextContent<'_>) -> TextPlan {
    let w = width as f32;
    let h = height as f32;
    let left = f64::from(w * LEFT_PAD_FRAC);

    let title_size = title_font_size(width);
    let subtitle_size = subtitle_font_size(width);
    let website_size = website_font_size(width);
    let shadow = Some(Shadow::text_default());

    let mut lines = Vec::new();
    let mut y = f64::from(h * TITLE_START_Y_FRAC);

    for text in content.title_lines {
        lines.push(PlacedLine {
            text: text.clone(),
            pos: Point::new(left, y),
            anchor: TextAnchor::Top,
            style: TextStyle {
                size: title_size,
                bold: true,
                color: content.title_color,
                shadow,
            },
        });
        y += f64::from(title_size * LINE_HEIGHT_MUL);
    }

    if !content.subtitle_lines.is_empty() {
        y += f64::from(subtitle_size * SUBTITLE_GAP_MUL);
        for text in content.subtitle_lines {
            lines.push(PlacedLine {
                text: text.clone(),
                pos: Point::new(left, y),
                anchor: TextAnchor::Top,
                style: TextStyle {
                    size: subtitle_size,
                    bold: false,
                    color: content.subtitle_color,
                    shadow,
                },
            });
            y += f64::from(subtitle_size * LINE_HEIGHT_MUL);
        }
    }

    if let Some((text, color)) = content.website {
        if !text.is_empty() {
            lines.push(PlacedLine {
                text: text.to_owned(),
                pos: Point::new(left, f64::from(h * WEBSITE_ANCHOR_FRAC)),
                anchor: TextAnchor::Bottom,
                style: TextStyle {
                    size: website_size,
                    bold: false,
                    color,
                    shadow: None,
                },
            });
        }
    }

    TextPlan { lines }
}

/// Stateful helper for shaping text lines with Parley from brand font bytes.
pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl TextShaper {
    /// Register the brand font and keep both the Parley family and the
    /// renderer-side font handle built from the same bytes.
    pub fn from_font_bytes(font_bytes: &[u8]) -> AdmarkResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            AdmarkError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| AdmarkError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        );

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    /// Rendered width of `text` at the given size/weight, for word wrap.
    pub fn measure(&mut self, text: &str, size_px: f32, bold: bool) -> f32 {
        self.layout_line(text, size_px, bold, Rgba8::WHITE).width()
    }

    fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        bold: bool,
        brush: Rgba8,
    ) -> parley::Layout<Rgba8> {
        let family = self.family_name.clone();
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        if bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::FontWeight::BOLD,
            ));
        }
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

/// Draw a text plan onto the base surface: one blurred shadow pass under one
/// crisp glyph pass.
pub fn draw(base: &mut Surface, plan: &TextPlan, shaper: &mut TextShaper) -> AdmarkResult<()> {
    let (w, h) = (base.width(), base.height());

    // All shadowed lines in this recipe share one shadow spec; the blur is a
    // whole-pass parameter.
    let shadowed: Vec<(&PlacedLine, Shadow)> = plan
        .lines
        .iter()
        .filter(|l| !l.text.is_empty())
        .filter_map(|l| l.style.shadow.map(|s| (l, s)))
        .collect();
    if let Some(&(_, spec)) = shadowed.first() {
        let layer = Surface::render_pass(w, h, |ctx| {
            for (line, sh) in &shadowed {
                let layout =
                    shaper.layout_line(&line.text, line.style.size, line.style.bold, sh.color);
                let origin = line.anchored_origin(layout.height());
                let origin = Point::new(
                    origin.x + f64::from(sh.offset.0),
                    origin.y + f64::from(sh.offset.1),
                );
                draw_layout(ctx, &layout, &shaper.font, origin);
            }
        })?;

        let sigma = spec.blur_radius as f32 / 2.0;
        let blurred = blur::blur_rgba8_premul(layer.data(), w, h, spec.blur_radius, sigma)?;
        composite::over_in_place(base.data_mut(), &blurred, 1.0)?;
    }

    let crisp: Vec<&PlacedLine> = plan.lines.iter().filter(|l| !l.text.is_empty()).collect();
    if crisp.is_empty() {
        return Ok(());
    }
    let layer = Surface::render_pass(w, h, |ctx| {
        for line in &crisp {
            let layout =
                shaper.layout_line(&line.text, line.style.size, line.style.bold, line.style.color);
            let origin = line.anchored_origin(layout.height());
            draw_layout(ctx, &layout, &shaper.font, origin);
        }
    })?;
    base.composite_over(&layer, 1.0)
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    layout: &parley::Layout<Rgba8>,
    font: &vello_cpu::peniko::FontData,
    origin: Point,
) {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(affine_to_cpu(Affine::translate((origin.x, origin.y))));

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
