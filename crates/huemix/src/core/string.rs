use crate::error::ColorFormatError;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. The leading
/// `#` is optional, letter case is ignored, and single-digit coordinates
/// are handled transparently, with `#1AF` meaning `#11AAFF`.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 3 && digits.len() != 6 {
        return Err(ColorFormatError::UnknownFormat);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Format the three coordinates in hashed hexadecimal format. The output
/// always has six digits, normalized to uppercase.
pub(crate) fn format_hex(
    coordinates: &[u8; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_fmt(format_args!(
        "#{:02X}{:02X}{:02X}",
        coordinates[0], coordinates[1], coordinates[2]
    ))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse_hex, ColorFormatError};

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("4cae4f")?, [0x4c_u8, 0xae, 0x4f]);
        assert_eq!(parse_hex("#4CAE4F")?, [0x4c_u8, 0xae, 0x4f]);
        assert_eq!(parse_hex("#ff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse_hex("#1234567"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse_hex(""), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hex("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hex("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#00000g"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }
}
