use std::time::Duration;

use anyhow::Context;
use tracing::{debug, warn};

use crate::assets::decode::premultiply_rgba8_in_place;
use crate::assets::fetch::{AssetFetcher, AssetRef};
use crate::composition::model::{ComposedImage, CompositionRequest};
use crate::foundation::color::Rgba8;
use crate::foundation::error::{AdmarkError, AdmarkResult};
use crate::layout::text::{GREEDY_MAX_WIDTH_FRAC, WrapMode, split_lines, wrap_greedy};
use crate::render::{gradient, logo, surface::Surface, text};

/// Image load timeout used when the caller does not configure one.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs branding compositions: fetch, draw, encode.
///
/// The drawing surface is exclusively owned by one in-flight `composite`
/// call; the only shared state is the HTTP client inside the fetcher.
#[derive(Clone)]
pub struct Compositor {
    fetcher: AssetFetcher,
}

impl Compositor {
    pub fn new(load_timeout: Duration) -> AdmarkResult<Self> {
        Ok(Self {
            fetcher: AssetFetcher::new(load_timeout)?,
        })
    }

    /// Produce the flattened, branded PNG for one request.
    ///
    /// Draw order is fixed: base image (with optional color adjust), gradient
    /// overlay, logo, text blocks. Only a source-image failure or a PNG
    /// encode failure aborts; a logo failure is logged and skipped, so the
    /// output is byte-identical to the logo-omitted case.
    pub async fn composite(&self, request: &CompositionRequest) -> AdmarkResult<ComposedImage> {
        let options = &request.options;
        options.validate()?;

        // Front-load all IO so the draw stages below are deterministic and
        // IO-free.
        let source = self
            .fetcher
            .load_image(&request.source)
            .await
            .map_err(AdmarkError::SourceLoad)?;
        debug!(
            source = %request.source,
            width = source.width,
            height = source.height,
            "source image loaded"
        );

        // Any logo problem, including a malformed locator, degrades to "no
        // logo" instead of aborting the composition.
        let logo_image = match options.logo_url.as_deref() {
            Some(url) => match AssetRef::parse(url) {
                Ok(asset) => match self.fetcher.load_logo(&asset).await {
                    Ok(img) => Some(img),
                    Err(err) => {
                        warn!(logo = %asset, error = %err, "logo could not be added, continuing without it");
                        None
                    }
                },
                Err(err) => {
                    warn!(logo = url, error = %err, "logo could not be added, continuing without it");
                    None
                }
            },
            None => None,
        };

        let font_bytes = match (&options.font_path, options.has_text()) {
            (Some(path), true) => Some(
                tokio::fs::read(path)
                    .await
                    .with_context(|| format!("read brand font '{}'", path.display()))?,
            ),
            _ => None,
        };

        // Base image, adjusted and premultiplied onto the surface.
        let (width, height) = (source.width, source.height);
        let mut rgba8 = source.rgba8;
        let adjust = options.color_adjust();
        if !adjust.is_identity() {
            adjust.apply_in_place(&mut rgba8);
        }
        premultiply_rgba8_in_place(&mut rgba8);
        let mut surface = Surface::from_premul_rgba8(&rgba8, width, height)?;

        gradient::apply(&mut surface, options.overlay_opacity);

        if let Some(img) = &logo_image {
            if let Err(err) = logo::draw(&mut surface, img) {
                warn!(error = %err, "logo could not be drawn, continuing without it");
            }
        }

        if let Some(font_bytes) = font_bytes {
            let mut shaper = text::TextShaper::from_font_bytes(&font_bytes)?;
            let title_lines = branded_lines(
                &options.title,
                options.wrap,
                width,
                text::title_font_size(width),
                true,
                &mut shaper,
            );
            let subtitle_lines = if options.subtitle.is_empty() {
                Vec::new()
            } else {
                branded_lines(
                    &options.subtitle,
                    options.wrap,
                    width,
                    text::subtitle_font_size(width),
                    false,
                    &mut shaper,
                )
            };

            let website_color = Rgba8::parse_hex(&options.website_text_color)?;
            let content = text::TextContent {
                title_lines: &title_lines,
                subtitle_lines: &subtitle_lines,
                title_color: Rgba8::parse_hex(&options.title_color)?,
                subtitle_color: Rgba8::parse_hex(&options.subtitle_color)?,
                website: options
                    .website_text
                    .as_deref()
                    .map(|t| (t, website_color)),
            };
            let plan = text::plan_text(width, height, &content);
            text::draw(&mut surface, &plan, &mut shaper)?;
        }

        let png = surface.to_png()?;
        Ok(ComposedImage { width, height, png })
    }
}

fn branded_lines(
    input: &str,
    wrap: WrapMode,
    canvas_width: u32,
    font_size: f32,
    bold: bool,
    shaper: &mut text::TextShaper,
) -> Vec<String> {
    match wrap {
        WrapMode::Newline => split_lines(input),
        WrapMode::Greedy => {
            let max_width = canvas_width as f32 * GREEDY_MAX_WIDTH_FRAC;
            wrap_greedy(input, max_width, |candidate| {
                shaper.measure(candidate, font_size, bold)
            })
        }
    }
}
