use crate::error::ColorFormatError;
use crate::theme::web_color;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let width = s.len() / 3;
        let digits = s
            .get(1 + width * index..1 + width * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(digits, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if width == 1 { 16 * n + n } else { n })
    }

    Ok([
        parse_coordinate(s, 0)?,
        parse_coordinate(s, 1)?,
        parse_coordinate(s, 2)?,
    ])
}

/// Parse a color in hashed hexadecimal format or by web color name.
pub(crate) fn parse(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.trim();

    if s.starts_with('#') {
        parse_hashed(s)
    } else if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
        web_color(s)
            .map(|color| *color.as_ref())
            .ok_or(ColorFormatError::UnknownName)
    } else {
        Err(ColorFormatError::UnknownFormat)
    }
}
