//! # Palette Core
//!
//! A named-color palette in the IPT_HQ perceptual color space. Every color
//! is a single packed `f32` carrying intensity, protan, tritan, and alpha in
//! its bit pattern, derived from a static table of `(name, RGBA8888)`
//! definitions.
//!
//! ## Quick Start
//!
//! ```rust
//! use palette_core::{lookup, ops, PackedColor, TRANSPARENT};
//!
//! // Name lookup with an explicit default for misses.
//! let ocean = lookup("Ocean Blue", TRANSPARENT);
//! assert!(!ocean.is_transparent());
//!
//! // Perceptual edits return new packed values.
//! let lighter = ops::lighten(ocean, 0.25);
//! assert!(lighter.intensity() > ocean.intensity());
//!
//! // Hex round trip through the codec.
//! let parsed = PackedColor::from_hex("#4F42B5").unwrap();
//! assert!(!parsed.as_f32().is_nan());
//! ```
//!
//! ## Core Modules
//!
//! - [`space`] - IPT_HQ ↔ sRGB analytic transform, CIELAB, ΔE94
//! - [`packed`] - the packed-float codec
//! - [`ops`] - perceptual operations over packed colors
//! - [`palette`] - the named table and its ordered views
//! - [`registry`] - sync into an external UI color registry
//! - [`config`] - probe configuration via TOML
//! - [`logging`] - JSON line-delimited operation logging

pub mod config;
pub mod error;
pub mod logging;
pub mod ops;
pub mod packed;
pub mod palette;
pub mod registry;
pub mod space;

pub use config::{ConfigError, ListOrder, ProbeConfig};
pub use error::{PaletteError, PaletteResult};
pub use packed::PackedColor;
pub use palette::{closest_name, list, lookup, named, names, names_by_hue, names_by_lightness, TRANSPARENT};
pub use registry::{append_to_known_colors, edit_known_colors, ColorRegistry, SimpleRegistry};
pub use space::{delta_e94, ipt_to_srgb, srgb_to_ipt, srgb_to_lab};
