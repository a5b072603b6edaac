//! Utility module with huemix's errors.

/// An erroneous color format.
///
/// Hex strings are validated once, when a [`Hex`](crate::Hex) is parsed.
/// Every operation past that boundary works on validated values and hence
/// is infallible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that is neither 3 nor 6 hexadecimal digits long, not
    /// counting the optional `#` prefix. For example, `#12345` has an
    /// unusable number of digits.
    UnknownFormat,

    /// A color format with unexpected characters. For example, `#💩00` has
    /// the correct length for a 3-digit color but contains an unsuitable
    /// character.
    UnexpectedCharacters,

    /// A color format with a malformed hexadecimal coordinate. For example,
    /// `#efgefg` has a malformed second coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => {
                f.write_str("color format should have 3 or 6 hex digits after an optional `#`")
            }
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
