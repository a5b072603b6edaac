//! # Huemix
//!
//! Huemix is the color-math engine behind a palette generator: it converts
//! between RGB, HSL, and hashed hexadecimal representations, adjusts whole
//! palettes with perceptual sliders, summarizes palettes into style
//! statistics, derives five-color schemes from free-form text, and grades
//! color pairs against the WCAG 2.1 contrast thresholds.
//!
//!
//! ## 1. Overview
//!
//! Huemix's main abstractions are:
//!
//!   * [`Hex`], [`Rgb`], and [`Hsl`] implement the three **color
//!     representations** used by palette tooling. [`Hex`] is the canonical,
//!     validated form; the other two are working representations with
//!     lossless ([`Rgb`]) or near-lossless ([`Hsl`], integer-rounded)
//!     conversions between all three.
//!   * The [`palette`] module defines a [`Swatch`](palette::Swatch) as a
//!     hex value with optional derived caches plus a name and a
//!     [`Role`](palette::Role), bundles swatches into
//!     [`Palette`](palette::Palette)s, and adjusts them with
//!     [`Adjustment`](palette::Adjustment) sliders for brightness,
//!     saturation, and warmth.
//!   * The [`analysis`] module reduces a slice of swatches to an
//!     [`Analysis`](analysis::Analysis) of average brightness, saturation,
//!     warmth, and hue, tagged with [`StyleTag`](analysis::StyleTag)s.
//!   * The [`contrast`] module computes WCAG relative luminance and
//!     contrast ratios and classifies pairs into
//!     [`WcagLevel`](contrast::WcagLevel)s.
//!
//! All operations are pure and synchronous. Validation happens once, when a
//! [`Hex`] is parsed; every computation past that boundary is total and
//! infallible.
//!
//!
//! ## 2. Optional Features
//!
//! Huemix supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type
//!     [`Float`] instead of `f32`. This feature is enabled by default.
//!   - **`serde`** derives `Serialize`/`Deserialize` for the public value
//!     types, with [`Hex`] serialized as its `#RRGGBB` display string. This
//!     feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod color;
mod core;

pub mod analysis;
pub mod contrast;
pub mod error;
pub mod palette;

pub use color::{Hex, Hsl, Rgb};
