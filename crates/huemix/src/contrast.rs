//! WCAG 2.1 contrast evaluation.
//!
//! This module grades foreground/background pairs against the WCAG 2.1
//! success criteria: [`relative_luminance`] implements the standard
//! sRGB-to-linear transform and channel weighting, [`contrast_ratio`]
//! the `(lighter + 0.05) / (darker + 0.05)` ratio, and [`wcag_level`] the
//! classification into conformance levels, with the large-text thresholds
//! selected by font size.

use crate::core;
use crate::{Float, Hex};

/// The font size, in CSS pixels, assumed by [`wcag_level`].
pub const DEFAULT_FONT_SIZE: Float = 16.0;

/// The font size, in CSS pixels, at and above which text counts as large
/// and the relaxed thresholds apply.
const LARGE_TEXT_SIZE: Float = 24.0;

/// The AAA and AA ratio thresholds for normal text.
const NORMAL_THRESHOLDS: (Float, Float) = (7.0, 4.5);

/// The AAA and AA ratio thresholds for large text.
const LARGE_THRESHOLDS: (Float, Float) = (4.5, 3.0);

// ====================================================================================================================

/// A WCAG 2.1 conformance level for a foreground/background pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WcagLevel {
    /// The enhanced contrast criterion, 1.4.6.
    Aaa,
    /// The minimum contrast criterion, 1.4.3.
    Aa,
    /// Neither criterion is met.
    Fail,
}

impl WcagLevel {
    /// Get this level's name, `"AAA"`, `"AA"`, or `"Fail"`.
    pub fn name(&self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::Fail => "Fail",
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// Compute the WCAG 2.1 relative luminance of the given color.
///
/// The result is in unit range, 0 for black and 1 for white.
pub fn relative_luminance(color: Hex) -> Float {
    core::relative_luminance(color.as_ref())
}

/// Compute the WCAG contrast ratio between the two colors.
///
/// The ratio is symmetric in its arguments, rounded to two decimal
/// places, and ranges from 1 for identical colors to 21 for black on
/// white.
pub fn contrast_ratio(foreground: Hex, background: Hex) -> Float {
    core::contrast_ratio(relative_luminance(foreground), relative_luminance(background))
}

/// Classify the given pair at the default font size of 16 CSS pixels.
pub fn wcag_level(foreground: Hex, background: Hex) -> WcagLevel {
    wcag_level_for_size(foreground, background, DEFAULT_FONT_SIZE)
}

/// Classify the given pair for text at the given font size.
///
/// Text at 24 CSS pixels or larger counts as large and is graded against
/// the relaxed thresholds, AAA at 4.5 and AA at 3. Normal text requires
/// 7 and 4.5 respectively.
pub fn wcag_level_for_size(foreground: Hex, background: Hex, font_size_px: Float) -> WcagLevel {
    let ratio = contrast_ratio(foreground, background);
    let (aaa, aa) = if font_size_px >= LARGE_TEXT_SIZE {
        LARGE_THRESHOLDS
    } else {
        NORMAL_THRESHOLDS
    };

    if ratio >= aaa {
        WcagLevel::Aaa
    } else if ratio >= aa {
        WcagLevel::Aa
    } else {
        WcagLevel::Fail
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{contrast_ratio, relative_luminance, wcag_level, wcag_level_for_size, WcagLevel};
    use crate::{assert_close_to, Hex};

    const BLACK: Hex = Hex::new(0, 0, 0);
    const WHITE: Hex = Hex::new(255, 255, 255);

    #[test]
    fn test_relative_luminance() {
        assert_close_to!(relative_luminance(BLACK), 0.0);
        assert_close_to!(relative_luminance(WHITE), 1.0);
    }

    #[test]
    fn test_contrast_ratio() {
        assert_close_to!(contrast_ratio(BLACK, WHITE), 21.0);
        assert_close_to!(contrast_ratio(WHITE, BLACK), 21.0);
        assert_close_to!(contrast_ratio(WHITE, WHITE), 1.0);
        // Reference ratios cross-checked against common contrast checkers.
        assert_close_to!(contrast_ratio(Hex::new(118, 118, 118), WHITE), 4.54);
        assert_close_to!(contrast_ratio(Hex::new(255, 0, 0), WHITE), 4.0);
        assert_close_to!(contrast_ratio(Hex::new(30, 41, 59), WHITE), 14.63, 0.02);
    }

    #[test]
    fn test_wcag_level() {
        assert_eq!(wcag_level(BLACK, WHITE), WcagLevel::Aaa);
        assert_eq!(wcag_level(WHITE, WHITE), WcagLevel::Fail);

        // 4.54 passes AA for normal text and AAA for large text.
        let gray = Hex::new(118, 118, 118);
        assert_eq!(wcag_level(gray, WHITE), WcagLevel::Aa);
        assert_eq!(wcag_level_for_size(gray, WHITE, 24.0), WcagLevel::Aaa);

        // 4.00 fails for normal text but passes AA for large text.
        let red = Hex::new(255, 0, 0);
        assert_eq!(wcag_level(red, WHITE), WcagLevel::Fail);
        assert_eq!(wcag_level_for_size(red, WHITE, 24.0), WcagLevel::Aa);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(WcagLevel::Aaa.to_string(), "AAA");
        assert_eq!(WcagLevel::Aa.to_string(), "AA");
        assert_eq!(WcagLevel::Fail.to_string(), "Fail");
    }
}
