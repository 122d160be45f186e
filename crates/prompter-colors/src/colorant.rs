//! The conversion hub.
//!
//! All color types implement [`Representation`], which converts between any
//! two representations by pivoting through [`RgbColor`]. [`Colorant`] wraps
//! any one of the nine color types and [`ColorKind`] names them, so that code
//! can pick a conversion target at runtime. [`Target`] extends a colorant
//! with the relative hue shift accepted as gradient endpoint.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::gradient::Gradient;
use crate::termco::{
    AnsiColor, Cube5Color, Cube6Color, Cube6XtermColor, GrayscaleColor, XtermColor,
};
use crate::{HslColor, HsvColor, RgbColor};

/// The nine kinds of color representations.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prompter_colors")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorKind {
    Rgb,
    Hsv,
    Hsl,
    Ansi,
    Xterm,
    Grayscale,
    Cube6,
    Cube5,
    Cube6Xterm,
}

impl ColorKind {
    /// All color kinds in order.
    pub const ALL: [ColorKind; 9] = [
        ColorKind::Rgb,
        ColorKind::Hsv,
        ColorKind::Hsl,
        ColorKind::Ansi,
        ColorKind::Xterm,
        ColorKind::Grayscale,
        ColorKind::Cube6,
        ColorKind::Cube5,
        ColorKind::Cube6Xterm,
    ];

    /// Get this kind's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
            Self::Hsl => "hsl",
            Self::Ansi => "ansi",
            Self::Xterm => "xterm",
            Self::Grayscale => "grayscale",
            Self::Cube6 => "cube6",
            Self::Cube5 => "cube5",
            Self::Cube6Xterm => "cube6xterm",
        }
    }

    /// Determine whether this kind is a palette with finitely many colors.
    pub const fn is_palette(&self) -> bool {
        !matches!(self, Self::Rgb | Self::Hsv | Self::Hsl)
    }
}

// ====================================================================================================================
// Representation
// ====================================================================================================================

/// A color representation.
///
/// Implementors only provide the conversions to and from RGB plus extraction
/// from a [`Colorant`]. Everything else follows, with [`Representation::to`]
/// converting to any other representation through RGB and leaving a color
/// unchanged when converting to its own type.
///
/// ```
/// # use prompter_colors::{Representation, HsvColor, RgbColor};
/// # use prompter_colors::termco::{AnsiColor, XtermColor};
/// let orange = RgbColor::new(255, 128, 0);
/// assert_eq!(orange.to::<XtermColor>(), XtermColor::new(208));
/// assert_eq!(orange.to_ansi(), AnsiColor::BrightYellow);
///
/// let hsv = orange.to_hsv();
/// assert_eq!(hsv.to::<HsvColor>(), hsv);
/// ```
pub trait Representation: Copy + Into<Colorant> {
    /// This representation's kind.
    const KIND: ColorKind;

    /// Convert this color to RGB.
    fn to_rgb(&self) -> RgbColor;

    /// Convert the RGB color to this representation.
    fn from_rgb(rgb: &RgbColor) -> Self;

    /// Extract a color of this representation from the colorant, if it wraps
    /// one.
    fn from_colorant(colorant: &Colorant) -> Option<Self>;

    /// Convert this color to another representation.
    fn to<T: Representation>(&self) -> T {
        T::from_colorant(&(*self).into()).unwrap_or_else(|| T::from_rgb(&self.to_rgb()))
    }

    /// Convert this color to HSV.
    fn to_hsv(&self) -> HsvColor {
        self.to()
    }

    /// Convert this color to HSL.
    fn to_hsl(&self) -> HslColor {
        self.to()
    }

    /// Convert this color to one of the 16 ANSI colors.
    fn to_ansi(&self) -> AnsiColor {
        self.to()
    }

    /// Convert this color to one of the 256 xterm colors.
    fn to_xterm(&self) -> XtermColor {
        self.to()
    }

    /// Convert this color to the 101-step grayscale.
    fn to_grayscale(&self) -> GrayscaleColor {
        self.to()
    }

    /// Convert this color to the 6x6x6 cube.
    fn to_cube6(&self) -> Cube6Color {
        self.to()
    }

    /// Convert this color to the 5x5x5 cube.
    fn to_cube5(&self) -> Cube5Color {
        self.to()
    }

    /// Convert this color to the 6x6x6 cube embedded in the xterm palette.
    fn to_cube6_xterm(&self) -> Cube6XtermColor {
        self.to()
    }

    /// Create the gradient from this color to the end, interpolating in this
    /// representation's default space.
    ///
    /// ```
    /// # use prompter_colors::{Representation, RgbColor};
    /// let steps: Vec<_> = RgbColor::new(10, 20, 30)
    ///     .gradient(RgbColor::new(20, 40, 50))
    ///     .collect();
    /// assert_eq!(steps.len(), 21);
    /// assert_eq!(steps[20], RgbColor::new(20, 40, 50));
    /// ```
    fn gradient(&self, end: impl Into<Target>) -> impl Iterator<Item = Self> {
        Gradient::new(*self, end)
            .into_iter()
            .filter_map(|colorant| Self::from_colorant(&colorant))
    }
}

// ====================================================================================================================
// Colorant
// ====================================================================================================================

/// A color of any representation.
///
/// Dispatch over the closed set of color types is an exhaustive match.
///
/// ```
/// # use prompter_colors::{ColorKind, Colorant, RgbColor};
/// # use prompter_colors::termco::XtermColor;
/// let azure = Colorant::from(RgbColor::new(0, 128, 255));
/// assert_eq!(azure.kind(), ColorKind::Rgb);
/// assert_eq!(azure.to(ColorKind::Xterm), Colorant::Xterm(XtermColor::new(33)));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "prompter_colors"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Colorant {
    Rgb(RgbColor),
    Hsv(HsvColor),
    Hsl(HslColor),
    Ansi(AnsiColor),
    Xterm(XtermColor),
    Grayscale(GrayscaleColor),
    Cube6(Cube6Color),
    Cube5(Cube5Color),
    Cube6Xterm(Cube6XtermColor),
}

impl Colorant {
    /// Get the kind of the wrapped color.
    pub const fn kind(&self) -> ColorKind {
        match self {
            Self::Rgb(_) => ColorKind::Rgb,
            Self::Hsv(_) => ColorKind::Hsv,
            Self::Hsl(_) => ColorKind::Hsl,
            Self::Ansi(_) => ColorKind::Ansi,
            Self::Xterm(_) => ColorKind::Xterm,
            Self::Grayscale(_) => ColorKind::Grayscale,
            Self::Cube6(_) => ColorKind::Cube6,
            Self::Cube5(_) => ColorKind::Cube5,
            Self::Cube6Xterm(_) => ColorKind::Cube6Xterm,
        }
    }

    /// Convert the wrapped color to RGB.
    pub fn to_rgb(&self) -> RgbColor {
        match self {
            Self::Rgb(c) => *c,
            Self::Hsv(c) => c.to_rgb(),
            Self::Hsl(c) => c.to_rgb(),
            Self::Ansi(c) => c.to_rgb(),
            Self::Xterm(c) => c.to_rgb(),
            Self::Grayscale(c) => c.to_rgb(),
            Self::Cube6(c) => c.to_rgb(),
            Self::Cube5(c) => c.to_rgb(),
            Self::Cube6Xterm(c) => c.to_rgb(),
        }
    }

    /// Convert the RGB color to the given kind.
    pub fn from_rgb(kind: ColorKind, rgb: &RgbColor) -> Self {
        match kind {
            ColorKind::Rgb => Self::Rgb(*rgb),
            ColorKind::Hsv => Self::Hsv(HsvColor::from_rgb(rgb)),
            ColorKind::Hsl => Self::Hsl(HslColor::from_rgb(rgb)),
            ColorKind::Ansi => Self::Ansi(AnsiColor::from_rgb(rgb)),
            ColorKind::Xterm => Self::Xterm(XtermColor::from_rgb(rgb)),
            ColorKind::Grayscale => Self::Grayscale(GrayscaleColor::from_rgb(rgb)),
            ColorKind::Cube6 => Self::Cube6(Cube6Color::from_rgb(rgb)),
            ColorKind::Cube5 => Self::Cube5(Cube5Color::from_rgb(rgb)),
            ColorKind::Cube6Xterm => Self::Cube6Xterm(Cube6XtermColor::from_rgb(rgb)),
        }
    }

    /// Convert the wrapped color to the given kind.
    ///
    /// Converting to the wrapped color's own kind returns the colorant
    /// unchanged. All other conversions go through RGB.
    #[must_use = "method returns a new colorant and does not mutate original value"]
    pub fn to(&self, kind: ColorKind) -> Self {
        if self.kind() == kind {
            *self
        } else {
            Self::from_rgb(kind, &self.to_rgb())
        }
    }

    /// Convert the wrapped color to the given representation.
    pub fn to_color<T: Representation>(&self) -> T {
        T::from_colorant(self).unwrap_or_else(|| T::from_rgb(&self.to_rgb()))
    }
}

impl std::fmt::Display for Colorant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb(c) => write!(f, "{}", c),
            Self::Hsv(c) => write!(
                f,
                "hsv({}, {}%, {}%)",
                c.hue(),
                c.saturation(),
                c.value()
            ),
            Self::Hsl(c) => write!(
                f,
                "hsl({}, {}%, {}%)",
                c.hue(),
                c.saturation(),
                c.lightness()
            ),
            Self::Ansi(c) => f.write_str(c.name()),
            Self::Xterm(c) => write!(f, "xterm({})", c.index()),
            Self::Grayscale(c) => write!(f, "gray({})", c.index()),
            Self::Cube6(c) => write!(f, "cube6({}, {}, {})", c[0], c[1], c[2]),
            Self::Cube5(c) => write!(f, "cube5({}, {}, {})", c[0], c[1], c[2]),
            Self::Cube6Xterm(c) => write!(f, "cube6xterm({}, {}, {})", c[0], c[1], c[2]),
        }
    }
}

// ====================================================================================================================
// Target
// ====================================================================================================================

/// The end of a gradient.
///
/// Besides an absolute color, a gradient may end at a hue shift relative to
/// its start. Positive shifts rotate clockwise, negative shifts
/// counter-clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Color(Colorant),
    HueShift(i32),
}

impl From<Colorant> for Target {
    fn from(value: Colorant) -> Self {
        Self::Color(value)
    }
}

impl From<i32> for Target {
    fn from(value: i32) -> Self {
        Self::HueShift(value)
    }
}

// --------------------------------------------------------------------------------------------------------------------

macro_rules! representation {
    ($type:ty, $variant:ident) => {
        impl Representation for $type {
            const KIND: ColorKind = ColorKind::$variant;

            fn to_rgb(&self) -> RgbColor {
                <$type>::to_rgb(self)
            }

            fn from_rgb(rgb: &RgbColor) -> Self {
                <$type>::from_rgb(rgb)
            }

            fn from_colorant(colorant: &Colorant) -> Option<Self> {
                match colorant {
                    Colorant::$variant(color) => Some(*color),
                    _ => None,
                }
            }
        }

        impl From<$type> for Colorant {
            fn from(value: $type) -> Self {
                Self::$variant(value)
            }
        }

        impl From<$type> for Target {
            fn from(value: $type) -> Self {
                Self::Color(Colorant::$variant(value))
            }
        }
    };
}

representation!(RgbColor, Rgb);
representation!(HsvColor, Hsv);
representation!(HslColor, Hsl);
representation!(AnsiColor, Ansi);
representation!(XtermColor, Xterm);
representation!(GrayscaleColor, Grayscale);
representation!(Cube6Color, Cube6);
representation!(Cube5Color, Cube5);
representation!(Cube6XtermColor, Cube6Xterm);
