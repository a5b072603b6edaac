//! Color representations.
//!
//! This module offers [`Hex`] as the canonical, validated color
//! representation and [`Rgb`] and [`Hsl`] as working representations.
//! Conversions between the three are exposed as methods and as `From`
//! implementations. Conversion between hex and RGB is exact. Conversion
//! through HSL rounds to integer coordinates and hence is lossy:
//! representative palette colors round-trip within ±1 per RGB channel,
//! highly chromatic ones within ±5.

use std::str::FromStr;

use crate::core::{format_hex, hsl_to_rgb, parse_hex, rgb_to_hsl};
use crate::error::ColorFormatError;
use crate::Float;

// ====================================================================================================================
// Hex
// ====================================================================================================================

/// A validated 24-bit color in hashed hexadecimal notation.
///
/// Parsing with [`Hex as FromStr`](struct.Hex.html#impl-FromStr-for-Hex)
/// accepts 3- or 6-digit strings, with or without the leading `#` and in
/// either letter case. Displaying always produces the normalized form: six
/// uppercase digits behind a `#`, e.g. `#A1B2C3`. Malformed input fails
/// with a [`ColorFormatError`] instead of producing a degenerate value, so
/// every `Hex` in existence denotes an actual color.
///
/// ```
/// # use huemix::Hex;
/// # use huemix::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let coral: Hex = "#ff7f50".parse()?;
/// assert_eq!(coral.to_string(), "#FF7F50");
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hex([u8; 3]);

impl Hex {
    /// Create a new hex color from its three coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Convert this hex color to RGB. This conversion is exact.
    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.0[0],
            g: self.0[1],
            b: self.0[2],
        }
    }

    /// Convert this hex color to HSL, rounding to integer coordinates.
    pub fn to_hsl(self) -> Hsl {
        self.to_rgb().to_hsl()
    }
}

impl FromStr for Hex {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Hex)
    }
}

impl std::fmt::Display for Hex {
    /// Format this hex color in its canonical notation, `#` followed by
    /// six uppercase digits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hex(&self.0, f)
    }
}

impl AsRef<[u8; 3]> for Hex {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ====================================================================================================================
// Rgb
// ====================================================================================================================

/// A 24-bit RGB color with one byte per channel.
///
/// The `u8` channels carry the `0..=255` range constraint in the type, so
/// no clamping is ever necessary past construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert this RGB color to HSL.
    ///
    /// This method uses the standard max/min channel algorithm and rounds
    /// all three coordinates to the nearest integer. Converting back with
    /// [`Hsl::to_rgb`] reproduces this color within ±1 per channel for
    /// representative palette colors; the percent quantization of
    /// saturation and lightness costs up to five units on highly
    /// chromatic colors.
    pub fn to_hsl(self) -> Hsl {
        let [h, s, l] = rgb_to_hsl(self.r, self.g, self.b);
        Hsl { h, s, l }
    }

    /// Convert this RGB color to its hex form. This conversion is exact.
    pub const fn to_hex(self) -> Hex {
        Hex([self.r, self.g, self.b])
    }
}

impl std::fmt::Display for Rgb {
    /// Format this RGB color in hashed hexadecimal notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hex(&[self.r, self.g, self.b], f)
    }
}

// ====================================================================================================================
// Hsl
// ====================================================================================================================

/// An HSL color with the hue in degrees `0..360` and saturation and
/// lightness as percentages `0..=100`.
///
/// Conversion from RGB produces integer-valued coordinates. The
/// coordinates are stored as [`Float`]s nonetheless because palette
/// adjustment shifts them by fractional amounts before converting back.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

impl Hsl {
    /// Create a new HSL color from its coordinates.
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l }
    }

    /// Convert this HSL color to RGB, rounding each channel to the nearest
    /// integer.
    pub fn to_rgb(self) -> Rgb {
        let [r, g, b] = hsl_to_rgb(self.h, self.s, self.l);
        Rgb { r, g, b }
    }

    /// Convert this HSL color to its hex form by going through RGB.
    pub fn to_hex(self) -> Hex {
        self.to_rgb().to_hex()
    }
}

impl std::fmt::Display for Hsl {
    /// Format this HSL color with the CSS `hsl()` function syntax.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("hsl({} {}% {}%)", self.h, self.s, self.l))
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl From<Hsl> for Hex {
    fn from(value: Hsl) -> Self {
        value.to_hex()
    }
}

impl From<Hex> for Rgb {
    fn from(value: Hex) -> Self {
        value.to_rgb()
    }
}

impl From<Hsl> for Rgb {
    fn from(value: Hsl) -> Self {
        value.to_rgb()
    }
}

impl From<Hex> for Hsl {
    fn from(value: Hex) -> Self {
        value.to_hsl()
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        value.to_hsl()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{ColorFormatError, Hex, Hsl, Rgb};

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!("#4CAE4F".parse::<Hex>()?, Hex::new(76, 174, 79));
        assert_eq!("4cae4f".parse::<Hex>()?, Hex::new(76, 174, 79));
        assert_eq!("#1AF".parse::<Hex>()?, Hex::new(0x11, 0xAA, 0xFF));
        assert_eq!(
            "nope".parse::<Hex>(),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            "#00000g".parse::<Hex>(),
            Err(ColorFormatError::MalformedHex)
        );

        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(Hex::new(161, 178, 195).to_string(), "#A1B2C3");
        assert_eq!(Rgb::new(255, 127, 80).to_string(), "#FF7F50");
        assert_eq!(Hsl::new(122.0, 39.0, 49.0).to_string(), "hsl(122 39% 49%)");
    }

    #[test]
    fn test_hex_rgb_round_trip() {
        // Hex and RGB are the same bits, so the round-trip is exact.
        for value in [0x000000_u32, 0x4CAE4F, 0xA1B2C3, 0xFFFFFF] {
            let rgb = Rgb::new(
                (value >> 16) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            );
            assert_eq!(rgb.to_hex().to_rgb(), rgb);
        }
    }

    #[test]
    fn test_hsl_conversion() {
        assert_eq!(Rgb::new(76, 174, 79).to_hsl(), Hsl::new(122.0, 39.0, 49.0));
        assert_eq!(Hsl::new(122.0, 39.0, 49.0).to_rgb(), Rgb::new(76, 174, 79));
        assert_eq!(
            "#4CAE4F".parse::<Hex>().expect("valid hex").to_hsl(),
            Hsl::new(122.0, 39.0, 49.0)
        );
        assert_eq!(Hsl::new(122.0, 39.0, 49.0).to_hex().to_string(), "#4CAE4F");
        // Grays have no hue or saturation.
        assert_eq!(Rgb::new(128, 128, 128).to_hsl(), Hsl::new(0.0, 0.0, 50.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_hex_serde() {
        let hex = Hex::new(76, 174, 79);
        let json = serde_json::to_string(&hex).expect("hex should serialize");
        assert_eq!(json, "\"#4CAE4F\"");
        assert_eq!(
            serde_json::from_str::<Hex>(&json).expect("hex should deserialize"),
            hex
        );
        assert!(serde_json::from_str::<Hex>("\"#00000g\"").is_err());
    }
}
