//! Swatches, palettes, and palette adjustment.
//!
//! This module defines the [`Swatch`] as the unit of palette work: a
//! validated [`Hex`] value, optional cached [`Rgb`]/[`Hsl`] forms, and an
//! optional name and [`Role`]. Swatches bundle into [`Palette`]s, which can
//! be derived from free-form text with [`Palette::from_input`] and reshaped
//! with [`Adjustment`] sliders through [`adjust`].

use crate::core::{clamp_percent, wrap_hue};
use crate::{Float, Hex, Hsl, Rgb};

/// How far, in degrees or percentage points, a slider at full deflection
/// shifts a color.
const FULL_DEFLECTION: Float = 30.0;

/// The nominal magnitude of a slider at full deflection.
const SLIDER_RANGE: Float = 50.0;

/// The lightness bounds for adjusted colors. Adjustment never produces
/// fully black or fully white swatches.
const LIGHTNESS_FLOOR: Float = 5.0;
const LIGHTNESS_CEILING: Float = 95.0;

/// Clamp the given lightness percentage into the adjustable range.
#[inline]
fn clamp_lightness(value: Float) -> Float {
    value.clamp(LIGHTNESS_FLOOR, LIGHTNESS_CEILING)
}

// ====================================================================================================================
// Role
// ====================================================================================================================

/// The functional role of a swatch within a palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
}

impl Role {
    /// Get this role's lowercase name.
    pub fn name(&self) -> &'static str {
        use Role::*;

        match self {
            Primary => "primary",
            Secondary => "secondary",
            Accent => "accent",
            Success => "success",
            Warning => "warning",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
// Swatch
// ====================================================================================================================

/// A single palette entry.
///
/// A swatch always carries its validated hex value. The RGB and HSL forms
/// are optional caches: when present they are trusted as-is, when absent
/// they are derived from the hex value on demand. [`Swatch::hsl`] resolves
/// through the chain cached HSL → cached RGB → hex.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    hex: Hex,
    rgb: Option<Rgb>,
    hsl: Option<Hsl>,
    name: Option<String>,
    role: Option<Role>,
}

impl Swatch {
    /// Create a new swatch with the given hex value and no caches, name,
    /// or role.
    pub fn new(hex: Hex) -> Self {
        Self {
            hex,
            rgb: None,
            hsl: None,
            name: None,
            role: None,
        }
    }

    /// Create a new swatch from the given HSL color. The swatch's hex
    /// value is derived through RGB, and both caches are populated.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let rgb = hsl.to_rgb();
        Self {
            hex: rgb.to_hex(),
            rgb: Some(rgb),
            hsl: Some(hsl),
            name: None,
            role: None,
        }
    }

    /// Populate the RGB and HSL caches from this swatch's hex value.
    #[must_use]
    pub fn with_caches(self) -> Self {
        let rgb = self.hex.to_rgb();
        Self {
            rgb: Some(rgb),
            hsl: Some(rgb.to_hsl()),
            ..self
        }
    }

    /// Set this swatch's RGB cache. The value is trusted as-is.
    #[must_use]
    pub fn with_rgb(mut self, rgb: Rgb) -> Self {
        self.rgb = Some(rgb);
        self
    }

    /// Set this swatch's HSL cache. The value is trusted as-is.
    #[must_use]
    pub fn with_hsl(mut self, hsl: Hsl) -> Self {
        self.hsl = Some(hsl);
        self
    }

    /// Set this swatch's name.
    #[must_use]
    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set this swatch's role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Get this swatch's hex value.
    pub fn hex(&self) -> Hex {
        self.hex
    }

    /// Get this swatch's RGB form, from the cache if present and from the
    /// hex value otherwise.
    pub fn rgb(&self) -> Rgb {
        self.rgb.unwrap_or_else(|| self.hex.to_rgb())
    }

    /// Get this swatch's HSL form.
    ///
    /// Resolution prefers the cached HSL, then the cached RGB converted to
    /// HSL, then the hex value converted through RGB.
    pub fn hsl(&self) -> Hsl {
        self.hsl.unwrap_or_else(|| {
            self.rgb
                .map_or_else(|| self.hex.to_rgb().to_hsl(), Rgb::to_hsl)
        })
    }

    /// Get this swatch's name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get this swatch's role.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Apply the given adjustment to this swatch.
    ///
    /// The swatch's HSL form is shifted slider by slider, with the hue
    /// wrapped into `0..360`, saturation clamped into `0..=100`, and
    /// lightness clamped into `5..=95`. Hex, RGB, and HSL of the result
    /// are all recomputed from the shifted coordinates; name and role
    /// carry over.
    #[must_use]
    pub fn adjusted(&self, adjustment: &Adjustment) -> Self {
        let Hsl { h, s, l } = self.hsl();
        let hsl = Hsl::new(
            wrap_hue(h + adjustment.warmth / SLIDER_RANGE * FULL_DEFLECTION),
            clamp_percent(s + adjustment.saturation / SLIDER_RANGE * FULL_DEFLECTION),
            clamp_lightness(l + adjustment.brightness / SLIDER_RANGE * FULL_DEFLECTION),
        );
        let rgb = hsl.to_rgb();

        Self {
            hex: rgb.to_hex(),
            rgb: Some(rgb),
            hsl: Some(hsl),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

// ====================================================================================================================
// Adjustment
// ====================================================================================================================

/// Perceptual palette sliders.
///
/// Each slider is nominally in `-50..=50`, with zero meaning no change. A
/// slider at full deflection shifts lightness or saturation by 30
/// percentage points or the hue by 30 degrees. Values beyond the nominal
/// range are not rejected; the per-coordinate clamps bound their effect.
///
/// Adjustment operates entirely in HSL space so that the three sliders
/// stay decoupled from one another.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjustment {
    pub brightness: Float,
    pub saturation: Float,
    pub warmth: Float,
}

impl Adjustment {
    /// Create the neutral adjustment with all sliders at zero.
    pub const fn new() -> Self {
        Self {
            brightness: 0.0,
            saturation: 0.0,
            warmth: 0.0,
        }
    }

    /// Set the brightness slider.
    #[must_use]
    pub const fn with_brightness(mut self, brightness: Float) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the saturation slider.
    #[must_use]
    pub const fn with_saturation(mut self, saturation: Float) -> Self {
        self.saturation = saturation;
        self
    }

    /// Set the warmth slider.
    #[must_use]
    pub const fn with_warmth(mut self, warmth: Float) -> Self {
        self.warmth = warmth;
        self
    }
}

/// Apply the given adjustment to every swatch.
///
/// The result is a fresh vector of fresh swatches; the input is not
/// mutated. Relative relationships between the swatches are preserved
/// because every swatch receives the same shifts.
pub fn adjust(swatches: &[Swatch], adjustment: &Adjustment) -> Vec<Swatch> {
    swatches
        .iter()
        .map(|swatch| swatch.adjusted(adjustment))
        .collect()
}

// ====================================================================================================================
// Palette
// ====================================================================================================================

/// The hue offsets and fixed saturation/lightness of the five-color scheme
/// derived from keyword input.
const KEYWORD_SCHEME: [(&str, Role, Float, Float, Float); 5] = [
    ("Primary", Role::Primary, 0.0, 65.0, 55.0),
    ("Secondary", Role::Secondary, 30.0, 65.0, 55.0),
    ("Accent", Role::Accent, 300.0, 65.0, 55.0),
    ("Success", Role::Success, 120.0, 55.0, 45.0),
    ("Warning", Role::Warning, 210.0, 70.0, 50.0),
];

/// A named palette with a short description and usage guidance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    name: String,
    description: String,
    swatches: Vec<Swatch>,
    usage_guide: String,
}

impl Palette {
    /// Create a new palette from its parts.
    pub fn new<N, D, U>(name: N, description: D, swatches: Vec<Swatch>, usage_guide: U) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        U: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            swatches,
            usage_guide: usage_guide.into(),
        }
    }

    /// Derive a palette from free-form text.
    ///
    /// Input that parses as a hex color, with or without the leading `#`,
    /// yields five tonal variants of that color named Base, Light, Dark,
    /// Accent, and Muted, with the Base swatch's hex equal to the
    /// normalized input. Any other input is reduced to a base hue by
    /// summing its character codes modulo 360, from which a five-color
    /// scheme (Primary, Secondary, Accent, Success, Warning) is built at
    /// fixed hue offsets.
    ///
    /// Both paths are deterministic: the same input always produces the
    /// same palette.
    pub fn from_input(input: &str) -> Self {
        let input = input.trim();
        input
            .parse::<Hex>()
            .map_or_else(|_| Self::from_keyword(input), Self::from_hex_literal)
    }

    /// Build tonal variants of the given color.
    fn from_hex_literal(hex: Hex) -> Self {
        let Hsl { h, s, l } = hex.to_hsl();

        let mut swatches = Vec::with_capacity(5);
        swatches.push(
            Swatch::new(hex)
                .with_caches()
                .with_name("Base")
                .with_role(Role::Primary),
        );
        let variants = [
            (
                "Light",
                Role::Secondary,
                Hsl::new(h, s, clamp_lightness(l + 20.0)),
            ),
            (
                "Dark",
                Role::Accent,
                Hsl::new(h, s, clamp_lightness(l - 20.0)),
            ),
            (
                "Accent",
                Role::Success,
                Hsl::new(wrap_hue(h + 30.0), clamp_percent(s + 10.0), l),
            ),
            (
                "Muted",
                Role::Warning,
                Hsl::new(h, clamp_percent(s - 30.0), l),
            ),
        ];
        for (name, role, hsl) in variants {
            swatches.push(Swatch::from_hsl(hsl).with_name(name).with_role(role));
        }

        Self {
            name: hex.to_string(),
            description: format!("Tonal variants of {hex}"),
            swatches,
            usage_guide: String::from(
                "Base carries the identity. Light and dark provide surfaces \
                 and depth, the accent highlights, and the muted tone recedes.",
            ),
        }
    }

    /// Build a five-color scheme seeded by the given keyword.
    fn from_keyword(input: &str) -> Self {
        let base_hue = (input.chars().map(|c| c as u32).sum::<u32>() % 360) as Float;

        let swatches: Vec<Swatch> = KEYWORD_SCHEME
            .iter()
            .map(|&(name, role, offset, s, l)| {
                Swatch::from_hsl(Hsl::new(wrap_hue(base_hue + offset), s, l))
                    .with_name(name)
                    .with_role(role)
            })
            .collect();
        // The zero adjustment is a deliberate pass-through.
        let swatches = adjust(&swatches, &Adjustment::default());

        Self {
            name: input.to_owned(),
            description: format!("A five-color scheme seeded by \"{input}\""),
            swatches,
            usage_guide: String::from(
                "Primary anchors the design and secondary supports it. The \
                 accent draws attention; success and warning signal state.",
            ),
        }
    }

    /// Get this palette's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get this palette's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get this palette's swatches.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Get this palette's usage guidance.
    pub fn usage_guide(&self) -> &str {
        &self.usage_guide
    }

    /// Apply the given adjustment to every swatch of this palette.
    #[must_use]
    pub fn adjusted(&self, adjustment: &Adjustment) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            swatches: adjust(&self.swatches, adjustment),
            usage_guide: self.usage_guide.clone(),
        }
    }
}

// ====================================================================================================================
