//! Admark is a deterministic ad-creative branding compositor.
//!
//! It takes a base photograph plus a set of branding options (taglines,
//! colors, a logo, a website caption, a dark gradient overlay, optional
//! color adjustments) and produces a single flattened PNG with the same
//! pixel dimensions as the source photo.
//!
//! # Pipeline overview
//!
//! 1. **Fetch**: resolve the source image (and logo, when configured) from an
//!    HTTP(S) URL or the local filesystem, racing a load timeout.
//! 2. **Decode**: bytes -> straight RGBA8 (`image`), SVG logos rasterized via
//!    `resvg`.
//! 3. **Plan**: pure functions compute every placement (gradient ramp, logo
//!    band, text lines) from the canvas dimensions and options.
//! 4. **Render**: sequential passes over exclusively owned surfaces
//!    (premultiplied RGBA8 end-to-end), composited source-over.
//! 5. **Encode**: the flattened surface is serialized to PNG.
//!
//! The render stages perform no IO: fetching is front-loaded so that a given
//! source image plus options always produces byte-identical output. A failed
//! logo load degrades to "no logo" (logged, not raised); a failed source load
//! or PNG encode fails the whole composition.
#![forbid(unsafe_code)]

mod assets;
mod composition;
mod foundation;
mod layout;
mod pipeline;
mod render;

pub use assets::decode::{DecodedImage, decode_image, decode_logo};
pub use assets::fetch::{AssetFetcher, AssetRef, FetchError, FetchReason};
pub use composition::model::{BrandingOptions, ComposedImage, CompositionRequest};
pub use foundation::color::Rgba8;
pub use foundation::error::{AdmarkError, AdmarkResult};
pub use layout::text::{WrapMode, split_lines, wrap_greedy};
pub use pipeline::{Compositor, DEFAULT_LOAD_TIMEOUT};
pub use render::filter::ColorAdjust;
pub use render::logo::LogoPlacement;
pub use render::surface::Surface;
pub use render::text::{
    PlacedLine, Shadow, TextAnchor, TextContent, TextPlan, TextShaper, TextStyle, plan_text,
};
