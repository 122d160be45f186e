//! The continuous color models: 24-bit RGB, HSV, and HSL.
//!
//! [`RgbColor`] is the pivot for all conversions in this crate. [`HsvColor`]
//! and [`HslColor`] use integer degrees for hue and integer percentages for
//! the other two components, hence conversions between them and RGB round.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    hsl_to_rgb, hsv_to_rgb, hue_distance, normalize_hue, parse, rgb_to_hsl, rgb_to_hsv,
    shift_hue, to_percent,
};
use crate::error::{ColorFormatError, OutOfBoundsError};
use crate::Float;

// ====================================================================================================================
// RGB
// ====================================================================================================================

/// A 24-bit RGB color.
///
/// Since each channel is a `u8`, every value of this type is valid. Wider
/// integers convert with [`RgbColor as
/// TryFrom<[i32; 3]>`](struct.RgbColor.html#impl-TryFrom%3C%5Bi32;+3%5D%3E-for-RgbColor),
/// which names the offending channel on failure.
///
/// ```
/// # use prompter_colors::RgbColor;
/// # use prompter_colors::error::OutOfBoundsError;
/// let orange = RgbColor::try_from([255, 135, 0])?;
/// assert_eq!(orange, RgbColor::new(255, 135, 0));
/// assert_eq!(format!("{}", orange), "#ff8700");
///
/// let error: OutOfBoundsError = RgbColor::try_from([0, 256, 0]).unwrap_err();
/// assert_eq!(error.name, "green");
/// # Ok::<(), OutOfBoundsError>(())
/// ```
///
/// Colors also parse from hashed hexadecimal notation and from web color
/// names.
/// ```
/// # use prompter_colors::RgbColor;
/// # use prompter_colors::error::ColorFormatError;
/// let rose: RgbColor = "#ffd7ff".parse()?;
/// assert_eq!(rose[1], 215);
///
/// let red: RgbColor = "Red".parse()?;
/// assert_eq!(red.as_ref(), &[255, 0, 0]);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "prompter_colors"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RgbColor([u8; 3]);

impl RgbColor {
    /// Create a new RGB color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new RGB color, clamping each channel into `0..=255`.
    pub(crate) fn saturating(r: i32, g: i32, b: i32) -> Self {
        Self([r, g, b].map(|channel| channel.clamp(0, 255) as u8))
    }

    /// Get the red channel.
    pub const fn red(&self) -> u8 {
        self.0[0]
    }

    /// Get the green channel.
    pub const fn green(&self) -> u8 {
        self.0[1]
    }

    /// Get the blue channel.
    pub const fn blue(&self) -> u8 {
        self.0[2]
    }

    /// Determine whether all three channels are the same.
    pub const fn is_gray(&self) -> bool {
        self.0[0] == self.0[1] && self.0[1] == self.0[2]
    }

    /// Return this color. Exists so that all color types share the pivot
    /// conversions.
    pub const fn from_rgb(rgb: &RgbColor) -> Self {
        *rgb
    }

    /// Return this color.
    pub const fn to_rgb(&self) -> RgbColor {
        *self
    }

    /// Convert this color to HSV.
    pub fn to_hsv(&self) -> HsvColor {
        HsvColor::from_rgb(self)
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> HslColor {
        HslColor::from_rgb(self)
    }

    /// Calculate the weighted Euclidian distance between the two colors.
    ///
    /// The metric weighs the red and blue deltas by the mean red level,
    /// approximating perceptual distance at integer precision.
    pub fn weighted_euclidian_distance(&self, other: &RgbColor) -> u32 {
        let [r1, g1, b1] = self.0.map(i32::from);
        let [r2, g2, b2] = other.0.map(i32::from);

        let r_sum = r1 + r2;
        let r_delta = r1 - r2;
        let g_delta = g1 - g2;
        let b_delta = b1 - b2;

        let r = (2 * 512 + r_sum) * r_delta * r_delta;
        let g = 4 * g_delta * g_delta * (1 << 8);
        let b = (2 * 767 - r_sum) * b_delta * b_delta;

        (r + g + b) as u32
    }
}

impl TryFrom<[i32; 3]> for RgbColor {
    type Error = OutOfBoundsError;

    fn try_from(value: [i32; 3]) -> Result<Self, Self::Error> {
        fn check(name: &'static str, value: i32) -> Result<u8, OutOfBoundsError> {
            u8::try_from(value).map_err(|_| OutOfBoundsError::new(name, value, 0..=255))
        }

        let [r, g, b] = value;
        Ok(Self([check("red", r)?, check("green", g)?, check("blue", b)?]))
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(value: RgbColor) -> Self {
        value.0
    }
}

impl AsRef<[u8; 3]> for RgbColor {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for RgbColor {
    type Output = u8;

    /// Access the channel with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::str::FromStr for RgbColor {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

// ====================================================================================================================
// HSV
// ====================================================================================================================

/// A color in the hue, saturation, value model.
///
/// The hue is in degrees `0..360` and wraps on construction. Saturation and
/// value are percentages `0..=100`.
///
/// ```
/// # use prompter_colors::{HsvColor, RgbColor};
/// # use prompter_colors::error::OutOfBoundsError;
/// let red = HsvColor::new(-360, 100, 100)?;
/// assert_eq!(red.hue(), 0);
/// assert_eq!(red.to_rgb(), RgbColor::new(255, 0, 0));
///
/// let magenta = red.decrease_hue(60);
/// assert_eq!(magenta.hue(), 300);
/// assert_eq!(red.hue_distance(&magenta), -60);
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "prompter_colors"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HsvColor {
    hue: u16,
    saturation: u8,
    value: u8,
}

impl HsvColor {
    /// Create a new HSV color.
    ///
    /// The hue wraps into `0..360`. This function fails if saturation or value
    /// exceed 100.
    pub fn new(hue: i32, saturation: u8, value: u8) -> Result<Self, OutOfBoundsError> {
        if 100 < saturation {
            Err(OutOfBoundsError::new("saturation", saturation, 0..=100))
        } else if 100 < value {
            Err(OutOfBoundsError::new("value", value, 0..=100))
        } else {
            Ok(Self {
                hue: normalize_hue(hue),
                saturation,
                value,
            })
        }
    }

    /// Create a new HSV color, clamping saturation and value into `0..=100`.
    pub(crate) fn saturating(hue: i32, saturation: i32, value: i32) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: saturation.clamp(0, 100) as u8,
            value: value.clamp(0, 100) as u8,
        }
    }

    /// Get the hue in degrees.
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Get the saturation as percentage.
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Get the value as percentage.
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Convert the RGB color to HSV, rounding to whole degrees and percents.
    pub fn from_rgb(rgb: &RgbColor) -> Self {
        let [hue, saturation, value] = rgb_to_hsv(rgb.as_ref());
        Self {
            hue: normalize_hue(hue.round() as i32),
            saturation: to_percent(saturation),
            value: to_percent(value),
        }
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor(hsv_to_rgb(&[
            self.hue as Float,
            self.saturation as Float / 100.0,
            self.value as Float / 100.0,
        ]))
    }

    /// Rotate the hue clockwise by the given degrees. Negative degrees
    /// rotate counter-clockwise.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn increase_hue(&self, degrees: i32) -> Self {
        self.shift_hue(degrees)
    }

    /// Rotate the hue counter-clockwise by the given degrees. Negative degrees
    /// rotate clockwise.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn decrease_hue(&self, degrees: i32) -> Self {
        self.shift_hue(-degrees.rem_euclid(360))
    }

    /// Rotate the hue by the signed degrees.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn shift_hue(&self, degrees: i32) -> Self {
        Self {
            hue: shift_hue(self.hue, degrees),
            ..*self
        }
    }

    /// Compute the shortest signed rotation from this color's hue to the
    /// other color's hue.
    ///
    /// The result lies in `-179..=180`; ties resolve clockwise.
    pub fn hue_distance(&self, other: &HsvColor) -> i32 {
        hue_distance(self.hue, other.hue)
    }
}

// ====================================================================================================================
// HSL
// ====================================================================================================================

/// A color in the hue, saturation, lightness model.
///
/// The hue is in degrees `0..360` and wraps on construction. Saturation and
/// lightness are percentages `0..=100`.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "prompter_colors"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HslColor {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

impl HslColor {
    /// Create a new HSL color.
    ///
    /// The hue wraps into `0..360`. This function fails if saturation or
    /// lightness exceed 100.
    pub fn new(hue: i32, saturation: u8, lightness: u8) -> Result<Self, OutOfBoundsError> {
        if 100 < saturation {
            Err(OutOfBoundsError::new("saturation", saturation, 0..=100))
        } else if 100 < lightness {
            Err(OutOfBoundsError::new("lightness", lightness, 0..=100))
        } else {
            Ok(Self {
                hue: normalize_hue(hue),
                saturation,
                lightness,
            })
        }
    }

    /// Create a new HSL color, clamping saturation and lightness into
    /// `0..=100`.
    pub(crate) fn saturating(hue: i32, saturation: i32, lightness: i32) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: saturation.clamp(0, 100) as u8,
            lightness: lightness.clamp(0, 100) as u8,
        }
    }

    /// Get the hue in degrees.
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Get the saturation as percentage.
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Get the lightness as percentage.
    pub const fn lightness(&self) -> u8 {
        self.lightness
    }

    /// Convert the RGB color to HSL, rounding to whole degrees and percents.
    pub fn from_rgb(rgb: &RgbColor) -> Self {
        let [hue, saturation, lightness] = rgb_to_hsl(rgb.as_ref());
        Self {
            hue: normalize_hue(hue.round() as i32),
            saturation: to_percent(saturation),
            lightness: to_percent(lightness),
        }
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor(hsl_to_rgb(&[
            self.hue as Float,
            self.saturation as Float / 100.0,
            self.lightness as Float / 100.0,
        ]))
    }

    /// Rotate the hue clockwise by the given degrees. Negative degrees
    /// rotate counter-clockwise.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn increase_hue(&self, degrees: i32) -> Self {
        self.shift_hue(degrees)
    }

    /// Rotate the hue counter-clockwise by the given degrees. Negative degrees
    /// rotate clockwise.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn decrease_hue(&self, degrees: i32) -> Self {
        self.shift_hue(-degrees.rem_euclid(360))
    }

    /// Rotate the hue by the signed degrees.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn shift_hue(&self, degrees: i32) -> Self {
        Self {
            hue: shift_hue(self.hue, degrees),
            ..*self
        }
    }

    /// Compute the shortest signed rotation from this color's hue to the
    /// other color's hue.
    pub fn hue_distance(&self, other: &HslColor) -> i32 {
        hue_distance(self.hue, other.hue)
    }
}
