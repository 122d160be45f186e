//! Utility module with the crate's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates a field value that is out of bounds for its color
/// type. It names the offending field, the rejected value, and the legal
/// range. The ranges used by this crate include:
///
///   * `0..=255` for channels of [`RgbColor`](crate::RgbColor) created from
///     wider integers;
///   * `0..=100` for saturation, value, and lightness of
///     [`HsvColor`](crate::HsvColor) and [`HslColor`](crate::HslColor);
///   * `0..=7` for the index of [`AnsiColor`](crate::termco::AnsiColor) and
///     `0..=15` for its combined code;
///   * `0..=100` for the index of
///     [`GrayscaleColor`](crate::termco::GrayscaleColor);
///   * `0..=5` and `0..=4` for the coordinates of the color cubes.
///
/// ```
/// # use prompter_colors::HsvColor;
/// let error = HsvColor::new(0, 101, 50).unwrap_err();
/// assert_eq!(error.name, "saturation");
/// assert_eq!(error.to_string(), "saturation 101 does not fit into range 0..=100");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub name: &'static str,
    pub value: i64,
    pub expected: std::ops::RangeInclusive<i64>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(
        name: &'static str,
        value: impl Into<i64>,
        expected: std::ops::RangeInclusive<i64>,
    ) -> Self {
        Self {
            name,
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} {} does not fit into range {}..={}",
            self.name,
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color format.
///
/// Colors parse from hashed hexadecimal notation with one or two digits per
/// channel, e.g., `#f80` or `#ff8800`, or from the name of a web color, e.g.,
/// `DarkOrange`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that is neither hexadecimal nor a plain name.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A hexadecimal color format with a malformed digit, e.g., `#efg`.
    MalformedHex,

    /// A name that is not one of the web colors.
    UnknownName,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str("color format should start with `#` or be a color name"),
            UnexpectedCharacters => {
                f.write_str("color format should contain 3 or 6 ASCII hex digits after `#`")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
            UnknownName => f.write_str("color name should be a web color but is not"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, OutOfBoundsError};

    #[test]
    fn test_messages() {
        let error = OutOfBoundsError::new("index", 8, 0..=7);
        assert_eq!(error.to_string(), "index 8 does not fit into range 0..=7");

        let error = OutOfBoundsError::new("red", -1, 0..=255);
        assert_eq!(error.value, -1);
        assert_eq!(error.to_string(), "red -1 does not fit into range 0..=255");

        assert!(ColorFormatError::UnknownName.to_string().contains("web color"));
    }
}
