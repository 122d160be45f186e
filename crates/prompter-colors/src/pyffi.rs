//! Python bindings. Each color type gets a constructor, a representation,
//! and conversion to RGB; module-level functions cover gradients and escape
//! sequences.
use pyo3::prelude::*;

use crate::error::{ColorFormatError, OutOfBoundsError};
use crate::style::Layer;
use crate::termco::{AnsiColor, Cube5Color, Cube6Color, Cube6XtermColor, GrayscaleColor, XtermColor};
use crate::{ColorKind, Colorant, Gradient, HslColor, HsvColor, RgbColor};

#[pymethods]
impl RgbColor {
    #[new]
    fn py_new(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b)
    }

    /// Parse a hashed hexadecimal color or web color name.
    #[staticmethod]
    fn parse(s: &str) -> Result<Self, ColorFormatError> {
        s.parse()
    }

    #[pyo3(name = "to_hsv")]
    fn py_to_hsv(&self) -> HsvColor {
        self.to_hsv()
    }

    #[pyo3(name = "to_hsl")]
    fn py_to_hsl(&self) -> HslColor {
        self.to_hsl()
    }

    fn __repr__(&self) -> String {
        format!("RgbColor({}, {}, {})", self.red(), self.green(), self.blue())
    }

    fn __str__(&self) -> String {
        format!("{}", self)
    }
}

#[pymethods]
impl HsvColor {
    #[new]
    fn py_new(hue: i32, saturation: u8, value: u8) -> Result<Self, OutOfBoundsError> {
        Self::new(hue, saturation, value)
    }

    #[pyo3(name = "to_rgb")]
    fn py_to_rgb(&self) -> RgbColor {
        self.to_rgb()
    }

    fn __repr__(&self) -> String {
        format!("HsvColor({}, {}, {})", self.hue(), self.saturation(), self.value())
    }
}

#[pymethods]
impl HslColor {
    #[new]
    fn py_new(hue: i32, saturation: u8, lightness: u8) -> Result<Self, OutOfBoundsError> {
        Self::new(hue, saturation, lightness)
    }

    #[pyo3(name = "to_rgb")]
    fn py_to_rgb(&self) -> RgbColor {
        self.to_rgb()
    }

    fn __repr__(&self) -> String {
        format!(
            "HslColor({}, {}, {})",
            self.hue(),
            self.saturation(),
            self.lightness()
        )
    }
}

#[pymethods]
impl AnsiColor {
    #[pyo3(name = "to_rgb")]
    fn py_to_rgb(&self) -> RgbColor {
        self.to_rgb()
    }

    #[pyo3(name = "name")]
    fn py_name(&self) -> &'static str {
        self.name()
    }
}

#[pymethods]
impl XtermColor {
    #[new]
    fn py_new(index: u8) -> Self {
        Self::new(index)
    }

    #[pyo3(name = "to_rgb")]
    fn py_to_rgb(&self) -> RgbColor {
        self.to_rgb()
    }

    fn __repr__(&self) -> String {
        format!("XtermColor({})", self.index())
    }
}

#[pymethods]
impl GrayscaleColor {
    #[new]
    fn py_new(index: u8) -> Result<Self, OutOfBoundsError> {
        Self::new(index)
    }

    #[pyo3(name = "to_rgb")]
    fn py_to_rgb(&self) -> RgbColor {
        self.to_rgb()
    }

    fn __repr__(&self) -> String {
        format!("GrayscaleColor({})", self.index())
    }
}

macro_rules! py_cube {
    ($name:ident) => {
        #[pymethods]
        impl $name {
            #[new]
            fn py_new(r: u8, g: u8, b: u8) -> Result<Self, OutOfBoundsError> {
                Self::new(r, g, b)
            }

            #[pyo3(name = "to_rgb")]
            fn py_to_rgb(&self) -> RgbColor {
                self.to_rgb()
            }

            fn __repr__(&self) -> String {
                format!("{}({}, {}, {})", stringify!($name), self[0], self[1], self[2])
            }
        }
    };
}

py_cube!(Cube6Color);
py_cube!(Cube5Color);
py_cube!(Cube6XtermColor);

#[pymethods]
impl Colorant {
    #[pyo3(name = "kind")]
    fn py_kind(&self) -> ColorKind {
        self.kind()
    }

    #[pyo3(name = "to")]
    fn py_to(&self, kind: ColorKind) -> Self {
        self.to(kind)
    }

    #[pyo3(name = "to_rgb")]
    fn py_to_rgb(&self) -> RgbColor {
        self.to_rgb()
    }

    fn __str__(&self) -> String {
        format!("{}", self)
    }
}

/// Render the color as an SGR escape sequence for the given layer.
#[pyfunction]
pub(crate) fn sgr(color: Colorant, layer: Layer) -> String {
    format!("{}", color.display(layer))
}

/// Compute the gradient between two colors.
#[pyfunction]
pub(crate) fn gradient(start: Colorant, end: Colorant) -> Vec<Colorant> {
    Gradient::new(start, end).into_iter().collect()
}

/// Compute the gradient from a color to the relative hue shift.
#[pyfunction]
pub(crate) fn hue_gradient(start: Colorant, shift: i32) -> Vec<Colorant> {
    Gradient::new(start, shift).into_iter().collect()
}

/// Look up a web color by case-insensitive name.
#[pyfunction]
pub(crate) fn web_color(name: &str) -> Option<RgbColor> {
    crate::theme::web_color(name)
}
