//! The palette color representations.
//!
//! This module offers the 16 [`AnsiColor`]s, the 256 [`XtermColor`]s, the
//! 101-step [`GrayscaleColor`]s, and the three color cubes
//! [`Cube6Color`], [`Cube5Color`], and [`Cube6XtermColor`]. Each palette
//! color has a fixed RGB value, from the [`theme`](crate::theme) tables for
//! the ANSI and xterm palettes and from arithmetic for the others. Converting
//! an arbitrary RGB color to a palette color quantizes; for the ANSI and xterm
//! palettes, quantization runs a cascade of refinement stages so that the
//! result always is an actual palette entry.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::OutOfBoundsError;
use crate::theme::{
    ANSI_COLORS, CUBE5_LEVELS, CUBE6_LEVELS, CUBE6_XTERM_LEVELS, GRAY_RAMP, XTERM_COLORS,
};
use crate::trans::{find_entry, ANSI_CASCADE, XTERM_CASCADE};
use crate::{Float, RgbColor};

// ====================================================================================================================
// Ansi Color
// ====================================================================================================================

/// The 16 ANSI colors.
///
/// Each ANSI color combines a base index `0..=7` with a bright flag. Rust code
/// creates ANSI colors with [`AnsiColor::new`] from index and flag or with
/// [`AnsiColor as
/// TryFrom<u8>`](enum.AnsiColor.html#impl-TryFrom%3Cu8%3E-for-AnsiColor) from
/// the combined code `0..=15`.
///
/// ```
/// # use prompter_colors::termco::AnsiColor;
/// # use prompter_colors::error::OutOfBoundsError;
/// let cyan = AnsiColor::new(6, true)?;
/// assert_eq!(cyan, AnsiColor::BrightCyan);
/// assert_eq!(cyan, AnsiColor::try_from(14)?);
/// assert_eq!((cyan.index(), cyan.is_bright()), (6, true));
///
/// let error = AnsiColor::new(8, false).unwrap_err();
/// assert_eq!(error.expected, 0..=7);
/// # Ok::<(), OutOfBoundsError>(())
/// ```
///
/// Conversion from RGB quantizes. Dim and bright levels never mix, and the
/// light gray of [`AnsiColor::White`] never leaks into a chromatic color.
/// ```
/// # use prompter_colors::RgbColor;
/// # use prompter_colors::termco::AnsiColor;
/// assert_eq!(AnsiColor::from_rgb(&RgbColor::new(200, 30, 30)), AnsiColor::BrightRed);
/// assert_eq!(AnsiColor::from_rgb(&RgbColor::new(190, 200, 195)), AnsiColor::White);
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "prompter_colors")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// Create a new ANSI color from its base index `0..=7` and bright flag.
    pub fn new(index: u8, bright: bool) -> Result<Self, OutOfBoundsError> {
        if 8 <= index {
            Err(OutOfBoundsError::new("index", index, 0..=7))
        } else {
            Ok(Self::from_code(index + if bright { 8 } else { 0 }))
        }
    }

    /// Get an iterator over all ANSI colors in order.
    pub fn all() -> AnsiColorIterator {
        AnsiColorIterator::new()
    }

    // The combined code wraps modulo 16.
    const fn from_code(code: u8) -> Self {
        use AnsiColor::*;

        match code % 16 {
            0 => Black,
            1 => Red,
            2 => Green,
            3 => Yellow,
            4 => Blue,
            5 => Magenta,
            6 => Cyan,
            7 => White,
            8 => BrightBlack,
            9 => BrightRed,
            10 => BrightGreen,
            11 => BrightYellow,
            12 => BrightBlue,
            13 => BrightMagenta,
            14 => BrightCyan,
            _ => BrightWhite,
        }
    }

    /// Get the base index `0..=7`.
    pub const fn index(&self) -> u8 {
        *self as u8 % 8
    }

    /// Determine whether this ANSI color is bright.
    pub const fn is_bright(&self) -> bool {
        8 <= *self as u8
    }

    /// Determine whether this ANSI color is achromatic.
    pub fn is_achromatic(&self) -> bool {
        use AnsiColor::*;
        matches!(self, Black | White | BrightBlack | BrightWhite)
    }

    /// Get the non-bright version of this ANSI color.
    pub const fn to_base(&self) -> AnsiColor {
        Self::from_code(self.index())
    }

    /// Get the bright version of this ANSI color.
    pub const fn to_bright(&self) -> AnsiColor {
        Self::from_code(self.index() + 8)
    }

    /// Get this ANSI color's name, e.g., `"bright green"` for
    /// [`AnsiColor::BrightGreen`].
    pub fn name(&self) -> &'static str {
        use AnsiColor::*;

        match self {
            Black => "black",
            Red => "red",
            Green => "green",
            Yellow => "yellow",
            Blue => "blue",
            Magenta => "magenta",
            Cyan => "cyan",
            White => "white",
            BrightBlack => "bright black",
            BrightRed => "bright red",
            BrightGreen => "bright green",
            BrightYellow => "bright yellow",
            BrightBlue => "bright blue",
            BrightMagenta => "bright magenta",
            BrightCyan => "bright cyan",
            BrightWhite => "bright white",
        }
    }

    /// Get a two-letter abbreviation for this ANSI color.
    ///
    /// Abbreviations of a non-bright and bright pair only differ in case, with
    /// the bright color in upper case.
    pub fn abbr(&self) -> &'static str {
        const ABBREVIATIONS: [&str; 8] = ["bk", "rd", "gn", "yl", "bu", "mg", "cn", "wt"];
        const BRIGHT_ABBREVIATIONS: [&str; 8] = ["BK", "RD", "GN", "YL", "BU", "MG", "CN", "WT"];

        let index = self.index() as usize;
        if self.is_bright() {
            BRIGHT_ABBREVIATIONS[index]
        } else {
            ABBREVIATIONS[index]
        }
    }

    /// Quantize the RGB color to the ANSI palette.
    pub fn from_rgb(rgb: &RgbColor) -> Self {
        let levels = ANSI_CASCADE.quantize(rgb);
        Self::from_code(find_entry(&ANSI_COLORS, &levels) as u8)
    }

    /// Look up this color's RGB value.
    pub const fn to_rgb(&self) -> RgbColor {
        ANSI_COLORS[*self as usize]
    }
}

impl TryFrom<u8> for AnsiColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if 16 <= value {
            Err(OutOfBoundsError::new("code", value, 0..=15))
        } else {
            Ok(Self::from_code(value))
        }
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> u8 {
        value as u8
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over ANSI colors.
///
/// This iterator is fused and exact.
#[derive(Debug)]
pub struct AnsiColorIterator {
    code: u8,
}

impl AnsiColorIterator {
    fn new() -> Self {
        Self { code: 0 }
    }
}

impl Iterator for AnsiColorIterator {
    type Item = AnsiColor;

    fn next(&mut self) -> Option<Self::Item> {
        if 16 <= self.code {
            None
        } else {
            let code = self.code;
            self.code += 1;
            Some(AnsiColor::from_code(code))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for AnsiColorIterator {
    fn len(&self) -> usize {
        16 - self.code as usize
    }
}

impl std::iter::FusedIterator for AnsiColorIterator {}

// ====================================================================================================================
// Xterm Color
// ====================================================================================================================

/// The 256 xterm colors.
///
/// The palette comprises the 16 ANSI colors, a 6x6x6 cube, and 24 grays. Since
/// `u8` covers exactly the legal indexes, [`XtermColor::new`] is infallible,
/// whereas [`XtermColor as
/// TryFrom<i32>`](struct.XtermColor.html#impl-TryFrom%3Ci32%3E-for-XtermColor)
/// checks wider integers.
///
/// ```
/// # use prompter_colors::RgbColor;
/// # use prompter_colors::termco::XtermColor;
/// let azure = XtermColor::from_rgb(&RgbColor::new(0, 128, 255));
/// assert_eq!(azure.index(), 33);
/// assert_eq!(azure.to_rgb(), RgbColor::new(0, 135, 255));
/// assert_eq!(XtermColor::from_rgb(&azure.to_rgb()), azure);
/// ```
///
/// Some cube entries duplicate ANSI entries. Quantization always picks the
/// lowest index with a given RGB value, so index 16 maps back to index 0.
/// ```
/// # use prompter_colors::termco::XtermColor;
/// let black = XtermColor::new(16);
/// assert_eq!(XtermColor::from_rgb(&black.to_rgb()), XtermColor::new(0));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "prompter_colors"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct XtermColor(u8);

impl XtermColor {
    /// Create a new xterm color from its index.
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the index.
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Get the ANSI color with the same index, if this color is one of the
    /// first 16.
    pub fn as_ansi(&self) -> Option<AnsiColor> {
        AnsiColor::try_from(self.0).ok()
    }

    /// Get the embedded cube color with the same index, if this color is in
    /// `16..=231`.
    pub fn as_cube(&self) -> Option<Cube6XtermColor> {
        Cube6XtermColor::try_from(*self).ok()
    }

    /// Get the gray ramp level `0..=23`, if this color is in `232..=255`.
    pub fn as_gray_level(&self) -> Option<u8> {
        self.0.checked_sub(232)
    }

    /// Quantize the RGB color to the xterm palette.
    pub fn from_rgb(rgb: &RgbColor) -> Self {
        let levels = XTERM_CASCADE.quantize(rgb);
        Self(find_entry(&XTERM_COLORS, &levels) as u8)
    }

    /// Look up this color's RGB value.
    pub const fn to_rgb(&self) -> RgbColor {
        XTERM_COLORS[self.0 as usize]
    }
}

impl TryFrom<i32> for XtermColor {
    type Error = OutOfBoundsError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| OutOfBoundsError::new("index", value, 0..=255))
    }
}

impl From<u8> for XtermColor {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<XtermColor> for u8 {
    fn from(value: XtermColor) -> Self {
        value.0
    }
}

impl From<AnsiColor> for XtermColor {
    fn from(value: AnsiColor) -> Self {
        Self(value as u8)
    }
}

impl From<Cube6XtermColor> for XtermColor {
    fn from(value: Cube6XtermColor) -> Self {
        let [r, g, b] = value.0;
        Self(16 + 36 * r + 6 * g + b)
    }
}

// ====================================================================================================================
// Grayscale
// ====================================================================================================================

/// A 101-step grayscale.
///
/// Index 0 is black and index 100 is white. Conversion from RGB uses the
/// luminosity weights 0.21, 0.72, and 0.07.
///
/// ```
/// # use prompter_colors::RgbColor;
/// # use prompter_colors::termco::GrayscaleColor;
/// # use prompter_colors::error::OutOfBoundsError;
/// let gray = GrayscaleColor::from_rgb(&RgbColor::new(255, 0, 0));
/// assert_eq!(gray.index(), 21);
/// assert_eq!(gray.to_rgb(), RgbColor::new(54, 54, 54));
/// assert!(GrayscaleColor::new(101).is_err());
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "prompter_colors"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GrayscaleColor(u8);

impl GrayscaleColor {
    /// Create a new grayscale color from its index `0..=100`.
    pub fn new(index: u8) -> Result<Self, OutOfBoundsError> {
        if 100 < index {
            Err(OutOfBoundsError::new("index", index, 0..=100))
        } else {
            Ok(Self(index))
        }
    }

    /// Create a new grayscale color, clamping the index into `0..=100`.
    pub(crate) fn saturating(index: i32) -> Self {
        Self(index.clamp(0, 100) as u8)
    }

    /// Get the index.
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Convert the RGB color to its grayscale luminosity.
    pub fn from_rgb(rgb: &RgbColor) -> Self {
        let [r, g, b] = rgb.as_ref().map(Float::from);
        let luminosity = (0.21 * r + 0.72 * g + 0.07 * b) * 100.0 / 255.0;
        Self(luminosity.round().clamp(0.0, 100.0) as u8)
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> RgbColor {
        let level = (self.0 as Float / 100.0 * 255.0).round().clamp(0.0, 255.0) as u8;
        RgbColor::new(level, level, level)
    }
}

// ====================================================================================================================
// Color Cubes
// ====================================================================================================================

/// Find the index of the level closest to the value. Ties resolve to the lower
/// index.
fn nearest_level(levels: &[u8], value: u8) -> u8 {
    levels
        .iter()
        .enumerate()
        .min_by_key(|(_, level)| level.abs_diff(value))
        .map_or(0, |(index, _)| index as u8)
}

macro_rules! color_cube {
    ($(#[$attr:meta])* $name:ident, $levels:ident, $count:literal) => {
        $(#[$attr])*
        #[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "prompter_colors"))]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name([u8; 3]);

        impl $name {
            /// The number of levels per axis.
            pub const LEVELS: u8 = $count;

            /// Create a new cube color from its coordinates.
            pub fn new(r: u8, g: u8, b: u8) -> Result<Self, OutOfBoundsError> {
                for (name, value) in [("red", r), ("green", g), ("blue", b)] {
                    if Self::LEVELS <= value {
                        return Err(OutOfBoundsError::new(
                            name,
                            value,
                            0..=(Self::LEVELS as i64 - 1),
                        ));
                    }
                }

                Ok(Self([r, g, b]))
            }

            /// Get the channel levels of each axis.
            pub const fn levels() -> &'static [u8] {
                &$levels
            }

            /// Snap each RGB channel to the nearest level.
            pub fn from_rgb(rgb: &RgbColor) -> Self {
                Self(rgb.as_ref().map(|channel| nearest_level(&$levels, channel)))
            }

            /// Convert this color to RGB.
            pub fn to_rgb(&self) -> RgbColor {
                RgbColor::from(self.0.map(|coordinate| $levels[coordinate as usize]))
            }
        }

        impl AsRef<[u8; 3]> for $name {
            fn as_ref(&self) -> &[u8; 3] {
                &self.0
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = u8;

            /// Access the coordinate with the given index.
            ///
            /// # Panics
            ///
            /// This method panics if `2 < index`.
            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }
    };
}

color_cube!(
    /// A 6x6x6 color cube with evenly spaced levels `0x00`, `0x33`, `0x66`,
    /// `0x99`, `0xcc`, and `0xff`.
    ///
    /// ```
    /// # use prompter_colors::RgbColor;
    /// # use prompter_colors::termco::Cube6Color;
    /// let orange = Cube6Color::from_rgb(&RgbColor::new(255, 140, 0));
    /// assert_eq!(orange.as_ref(), &[5, 3, 0]);
    /// assert_eq!(orange.to_rgb(), RgbColor::new(0xff, 0x99, 0x00));
    /// ```
    Cube6Color,
    CUBE6_LEVELS,
    6
);

color_cube!(
    /// A 5x5x5 color cube with levels `0x00`, `0x40`, `0x80`, `0xbf`, and
    /// `0xff`.
    Cube5Color,
    CUBE5_LEVELS,
    5
);

color_cube!(
    /// The 6x6x6 color cube embedded in the xterm palette, with levels 0, 95,
    /// 135, 175, 215, and 255.
    ///
    /// Cube colors convert to and from their xterm indexes `16..=231`.
    /// ```
    /// # use prompter_colors::termco::{Cube6XtermColor, XtermColor};
    /// # use prompter_colors::error::OutOfBoundsError;
    /// let orange = Cube6XtermColor::new(5, 2, 0)?;
    /// assert_eq!(XtermColor::from(orange).index(), 208);
    /// assert_eq!(Cube6XtermColor::try_from(XtermColor::new(208))?, orange);
    /// # Ok::<(), OutOfBoundsError>(())
    /// ```
    Cube6XtermColor,
    CUBE6_XTERM_LEVELS,
    6
);

impl TryFrom<XtermColor> for Cube6XtermColor {
    type Error = OutOfBoundsError;

    fn try_from(value: XtermColor) -> Result<Self, Self::Error> {
        let index = value.index();
        if !(16..=231).contains(&index) {
            return Err(OutOfBoundsError::new("index", index, 16..=231));
        }

        let offset = index - 16;
        Ok(Self([offset / 36, offset / 6 % 6, offset % 6]))
    }
}

/// Get the RGB value of the xterm gray ramp level `0..=23`.
pub fn gray_ramp(level: u8) -> Option<RgbColor> {
    GRAY_RAMP
        .get(level as usize)
        .map(|&value| RgbColor::new(value, value, value))
}

#[cfg(test)]
mod test {
    use super::{
        gray_ramp, AnsiColor, Cube5Color, Cube6Color, Cube6XtermColor, GrayscaleColor,
        XtermColor,
    };
    use crate::error::OutOfBoundsError;
    use crate::theme::{ANSI_COLORS, XTERM_COLORS};
    use crate::RgbColor;

    #[test]
    fn test_ansi() -> Result<(), OutOfBoundsError> {
        assert_eq!(AnsiColor::new(0, false)?, AnsiColor::Black);
        assert_eq!(AnsiColor::new(7, true)?, AnsiColor::BrightWhite);
        assert_eq!(
            AnsiColor::new(8, false),
            Err(OutOfBoundsError::new("index", 8, 0..=7))
        );
        assert_eq!(AnsiColor::try_from(16).unwrap_err().expected, 0..=15);

        assert_eq!(AnsiColor::BrightBlue.to_base(), AnsiColor::Blue);
        assert_eq!(AnsiColor::Blue.to_bright(), AnsiColor::BrightBlue);
        assert_eq!(AnsiColor::BrightBlue.index(), 4);
        assert_eq!(AnsiColor::BrightBlue.abbr(), "BU");
        assert_eq!(AnsiColor::Magenta.abbr(), "mg");
        assert_eq!(AnsiColor::all().len(), 16);
        assert_eq!(AnsiColor::all().last(), Some(AnsiColor::BrightWhite));
        Ok(())
    }

    #[test]
    fn test_ansi_quantization() -> Result<(), OutOfBoundsError> {
        let expectations = [
            ((192, 192, 192), (7, false)),
            ((0, 128, 255), (6, true)),
            ((200, 30, 30), (1, true)),
            ((255, 128, 0), (3, true)),
            ((100, 100, 100), (0, true)),
            ((130, 130, 130), (0, true)),
            ((10, 10, 10), (0, false)),
            ((250, 250, 250), (7, true)),
            ((160, 160, 160), (0, true)),
            ((255, 165, 0), (3, true)),
            ((190, 200, 195), (7, false)),
            ((128, 0, 0), (1, false)),
            ((64, 64, 64), (0, false)),
            ((96, 96, 96), (0, true)),
        ];

        for ((r, g, b), (index, bright)) in expectations {
            let ansi = AnsiColor::from_rgb(&RgbColor::new(r, g, b));
            assert_eq!(ansi, AnsiColor::new(index, bright)?, "{:?}", (r, g, b));
        }

        for color in AnsiColor::all() {
            assert_eq!(AnsiColor::from_rgb(&color.to_rgb()), color);
        }
        Ok(())
    }

    #[test]
    fn test_xterm_quantization() {
        let expectations = [
            ((192, 192, 192), 7),
            ((0, 128, 255), 33),
            ((200, 30, 30), 160),
            ((255, 128, 0), 208),
            ((100, 100, 100), 241),
            ((130, 130, 130), 8),
            ((10, 10, 10), 232),
            ((250, 250, 250), 15),
            ((160, 160, 160), 247),
            ((255, 165, 0), 214),
            ((190, 200, 195), 151),
            ((128, 0, 0), 1),
            ((64, 64, 64), 238),
            ((96, 96, 96), 59),
        ];

        for ((r, g, b), index) in expectations {
            let xterm = XtermColor::from_rgb(&RgbColor::new(r, g, b));
            assert_eq!(xterm, XtermColor::new(index), "{:?}", (r, g, b));
        }
    }

    #[test]
    fn test_xterm_idempotence() {
        let aliases = [16, 21, 46, 51, 196, 201, 226, 231, 244];

        for index in 0..=255_u8 {
            let color = XtermColor::new(index);
            let quantized = XtermColor::from_rgb(&color.to_rgb());
            assert_eq!(quantized.to_rgb(), color.to_rgb(), "{index}");
            if !aliases.contains(&index) {
                assert_eq!(quantized, color);
            }
        }

        for index in aliases {
            let quantized = XtermColor::from_rgb(&XtermColor::new(index).to_rgb());
            assert!(quantized.index() < index);
        }
    }

    #[test]
    fn test_xterm_regions() -> Result<(), OutOfBoundsError> {
        assert_eq!(XtermColor::new(9).as_ansi(), Some(AnsiColor::BrightRed));
        assert_eq!(XtermColor::new(16).as_ansi(), None);
        assert_eq!(XtermColor::new(75).as_cube(), Some(Cube6XtermColor::new(1, 3, 5)?));
        assert_eq!(XtermColor::new(243).as_gray_level(), Some(11));
        assert_eq!(XtermColor::new(231).as_gray_level(), None);
        assert_eq!(XtermColor::try_from(256_i32).unwrap_err().expected, 0..=255);
        assert_eq!(XtermColor::try_from(-1_i32).unwrap_err().value, -1);

        for index in 16..=231 {
            let xterm = XtermColor::new(index);
            let cube = Cube6XtermColor::try_from(xterm)?;
            assert_eq!(XtermColor::from(cube), xterm);
            assert_eq!(cube.to_rgb(), XTERM_COLORS[index as usize]);
        }

        assert_eq!(gray_ramp(0), Some(RgbColor::new(8, 8, 8)));
        assert_eq!(gray_ramp(24), None);
        Ok(())
    }

    #[test]
    fn test_grayscale() -> Result<(), OutOfBoundsError> {
        assert_eq!(GrayscaleColor::new(101).unwrap_err().expected, 0..=100);
        assert_eq!(GrayscaleColor::new(100)?.to_rgb(), RgbColor::new(255, 255, 255));
        assert_eq!(GrayscaleColor::new(0)?.to_rgb(), RgbColor::new(0, 0, 0));
        assert_eq!(GrayscaleColor::from_rgb(&RgbColor::new(255, 255, 255)).index(), 100);

        for index in 0..=100 {
            let gray = GrayscaleColor::new(index)?;
            assert_eq!(GrayscaleColor::from_rgb(&gray.to_rgb()), gray);
        }
        Ok(())
    }

    #[test]
    fn test_cubes() -> Result<(), OutOfBoundsError> {
        let error = Cube6Color::new(0, 6, 0).unwrap_err();
        assert_eq!((error.name, error.expected), ("green", 0..=5));
        let error = Cube5Color::new(0, 0, 5).unwrap_err();
        assert_eq!((error.name, error.expected), ("blue", 0..=4));

        // Ties resolve to the lower level.
        assert_eq!(Cube5Color::from_rgb(&RgbColor::new(0x20, 0x60, 0xff)).as_ref(), &[0, 1, 4]);
        assert_eq!(Cube6Color::from_rgb(&RgbColor::new(0x1a, 0x1a, 0x1a))[0], 1);
        assert_eq!(Cube6XtermColor::from_rgb(&RgbColor::new(47, 48, 115))[1], 1);
        assert_eq!(Cube5Color::new(4, 3, 2)?.to_rgb(), RgbColor::new(0xff, 0xbf, 0x80));

        for r in 0..Cube6Color::LEVELS {
            for b in 0..Cube6Color::LEVELS {
                let cube = Cube6Color::new(r, 0, b)?;
                assert_eq!(Cube6Color::from_rgb(&cube.to_rgb()), cube);
                let cube = Cube6XtermColor::new(r, 5, b)?;
                assert_eq!(Cube6XtermColor::from_rgb(&cube.to_rgb()), cube);
            }
        }

        assert_eq!(ANSI_COLORS.len(), 16);
        Ok(())
    }
}
