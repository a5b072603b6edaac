//! Palette statistics and style classification.
//!
//! [`analyze`] reduces a slice of swatches to an [`Analysis`]: the average
//! lightness, saturation, and hue, the share of warm colors, and a set of
//! rule-derived [`StyleTag`]s.

use crate::palette::Swatch;
use crate::{Float, Hsl};

/// The average lightness at which a palette counts as bright.
const BRIGHT_LIGHTNESS: Float = 70.0;

/// The average saturation at which a palette counts as vibrant.
const VIBRANT_SATURATION: Float = 60.0;

/// The average-hue bands for the green, warm, and cool tags.
const GREEN_HUES: std::ops::RangeInclusive<Float> = 80.0..=160.0;
const WARM_HUES: std::ops::RangeInclusive<Float> = 20.0..=60.0;
const COOL_HUES: std::ops::RangeInclusive<Float> = 200.0..=260.0;

/// Determine whether the given hue falls into the warm arcs of the color
/// wheel, reds through yellows on one side and magentas on the other.
#[inline]
fn is_warm(h: Float) -> bool {
    h <= 60.0 || h >= 300.0
}

// ====================================================================================================================
// StyleTag
// ====================================================================================================================

/// A style classification for a palette.
///
/// Tags are cumulative: a bright, saturated green palette carries three of
/// them. [`StyleTag::Natural`] is the fallback when no other rule fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StyleTag {
    Bright,
    Vibrant,
    Green,
    Warm,
    Cool,
    Natural,
}

impl StyleTag {
    /// Get this style tag's lowercase name.
    pub fn name(&self) -> &'static str {
        use StyleTag::*;

        match self {
            Bright => "bright",
            Vibrant => "vibrant",
            Green => "green",
            Warm => "warm",
            Cool => "cool",
            Natural => "natural",
        }
    }
}

impl std::fmt::Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
// Analysis
// ====================================================================================================================

/// A palette summary.
///
/// `brightness` and `saturation` are the average lightness and saturation
/// in `0..=100`, `warmth` is the percentage of swatches with a warm hue,
/// and `avg_hue` is the arithmetic mean hue in degrees. All four are
/// rounded to the nearest integer. An empty palette summarizes to all
/// zeros with no style tags.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    pub brightness: Float,
    pub saturation: Float,
    pub warmth: Float,
    pub avg_hue: Float,
    pub style_tags: Vec<StyleTag>,
}

/// Summarize the given swatches.
///
/// Each swatch's HSL form is resolved through [`Swatch::hsl`]'s fallback
/// chain. The hue average is a plain arithmetic mean, not a circular one:
/// hues straddling the 0°/360° boundary average to the opposite side of
/// the color wheel. The warm-color share is computed per swatch and is
/// immune to that artifact.
pub fn analyze(swatches: &[Swatch]) -> Analysis {
    if swatches.is_empty() {
        return Analysis::default();
    }

    let mut hue_sum = 0.0;
    let mut saturation_sum = 0.0;
    let mut lightness_sum = 0.0;
    let mut warm_count = 0_usize;

    for swatch in swatches {
        let Hsl { h, s, l } = swatch.hsl();
        hue_sum += h;
        saturation_sum += s;
        lightness_sum += l;
        if is_warm(h) {
            warm_count += 1;
        }
    }

    let count = swatches.len() as Float;
    let brightness = (lightness_sum / count).round();
    let saturation = (saturation_sum / count).round();
    let avg_hue = (hue_sum / count).round();
    let warmth = (warm_count as Float / count * 100.0).round();

    let mut style_tags = Vec::new();
    if brightness >= BRIGHT_LIGHTNESS {
        style_tags.push(StyleTag::Bright);
    }
    if saturation >= VIBRANT_SATURATION {
        style_tags.push(StyleTag::Vibrant);
    }
    if GREEN_HUES.contains(&avg_hue) {
        style_tags.push(StyleTag::Green);
    } else if WARM_HUES.contains(&avg_hue) {
        style_tags.push(StyleTag::Warm);
    } else if COOL_HUES.contains(&avg_hue) {
        style_tags.push(StyleTag::Cool);
    }
    if style_tags.is_empty() {
        style_tags.push(StyleTag::Natural);
    }

    Analysis {
        brightness,
        saturation,
        warmth,
        avg_hue,
        style_tags,
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{analyze, Analysis, StyleTag};
    use crate::palette::Swatch;
    use crate::Hsl;

    #[test]
    fn test_empty_palette() {
        assert_eq!(analyze(&[]), Analysis::default());
        assert_eq!(analyze(&[]).style_tags, Vec::new());
    }

    #[test]
    fn test_warm_vibrant_palette() {
        let swatches = [
            Swatch::from_hsl(Hsl::new(30.0, 100.0, 50.0)),
            Swatch::from_hsl(Hsl::new(30.0, 100.0, 50.0)),
        ];

        let analysis = analyze(&swatches);
        assert_eq!(analysis.brightness, 50.0);
        assert_eq!(analysis.saturation, 100.0);
        assert_eq!(analysis.warmth, 100.0);
        assert_eq!(analysis.avg_hue, 30.0);
        assert_eq!(analysis.style_tags, [StyleTag::Vibrant, StyleTag::Warm]);
    }

    #[test]
    fn test_bright_green_palette() {
        let swatches = [
            Swatch::from_hsl(Hsl::new(110.0, 70.0, 80.0)),
            Swatch::from_hsl(Hsl::new(130.0, 70.0, 80.0)),
        ];

        let analysis = analyze(&swatches);
        assert_eq!(analysis.brightness, 80.0);
        assert_eq!(analysis.warmth, 0.0);
        assert_eq!(
            analysis.style_tags,
            [StyleTag::Bright, StyleTag::Vibrant, StyleTag::Green]
        );
    }

    #[test]
    fn test_natural_fallback() {
        let swatches = [Swatch::from_hsl(Hsl::new(180.0, 30.0, 50.0))];

        let analysis = analyze(&swatches);
        assert_eq!(analysis.style_tags, [StyleTag::Natural]);
    }

    #[test]
    fn test_hue_averaging_is_arithmetic() {
        // Hues 350 and 10 straddle the wrap boundary. A circular mean
        // would land at 0; the arithmetic mean lands at 180, and the
        // per-swatch warmth share is unaffected.
        let swatches = [
            Swatch::from_hsl(Hsl::new(350.0, 50.0, 50.0)),
            Swatch::from_hsl(Hsl::new(10.0, 50.0, 50.0)),
        ];

        let analysis = analyze(&swatches);
        assert_eq!(analysis.avg_hue, 180.0);
        assert_eq!(analysis.warmth, 100.0);
        assert_eq!(analysis.style_tags, [StyleTag::Natural]);
    }

    #[test]
    fn test_fallback_chain() {
        // Cached coordinates win over the hex value.
        let swatches = [
            Swatch::new("#FF0000".parse().expect("valid hex"))
                .with_hsl(Hsl::new(220.0, 40.0, 60.0)),
        ];

        let analysis = analyze(&swatches);
        assert_eq!(analysis.avg_hue, 220.0);
        assert_eq!(analysis.warmth, 0.0);
        assert_eq!(analysis.style_tags, [StyleTag::Cool]);
    }
}
