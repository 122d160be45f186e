//! # Prompter Colors
//!
//! Color models, palette quantization, and gradients for terminal prompts.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. The `pyffi` feature adds Python bindings for the same types."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! The crate's main abstractions are:
//!
//!   * [`RgbColor`], [`HsvColor`], and [`HslColor`] are the **continuous
//!     color models**. RGB has 8-bit channels, HSV and HSL integer degrees
//!     and percentages.
//!   * The [`termco`] module offers the **palette colors**
//!     [`AnsiColor`](termco::AnsiColor), [`XtermColor`](termco::XtermColor),
//!     [`GrayscaleColor`](termco::GrayscaleColor), as well as the color cubes
//!     [`Cube6Color`](termco::Cube6Color), [`Cube5Color`](termco::Cube5Color),
//!     and [`Cube6XtermColor`](termco::Cube6XtermColor). ANSI and xterm colors
//!     quantize through a refinement cascade that never mixes levels no
//!     palette entry has.
//!   * [`Representation`] is implemented by all nine color types and
//!     **converts between any two of them** by pivoting through RGB.
//!     [`Colorant`] wraps any one of them, [`ColorKind`] names them, and
//!     [`Translator`] memoizes conversions.
//!   * [`Gradient`] computes **gradients** between two colors or from a color
//!     to a hue shift.
//!   * The [`style`] module renders colors as **SGR escape sequences** and
//!     caps them to a terminal's [`Fidelity`](style::Fidelity).
//!
//!
//! ## 2. Converting Colors
//!
//! ```
//! # use prompter_colors::{Representation, RgbColor};
//! # use prompter_colors::termco::{AnsiColor, XtermColor};
//! let orange: RgbColor = "#ff8000".parse()?;
//! assert_eq!(orange.to_ansi(), AnsiColor::BrightYellow);
//! assert_eq!(orange.to_xterm(), XtermColor::new(208));
//!
//! let hsv = orange.to_hsv();
//! assert_eq!((hsv.hue(), hsv.saturation(), hsv.value()), (30, 100, 100));
//! # Ok::<(), prompter_colors::error::ColorFormatError>(())
//! ```
//!
//!
//! ## 3. Gradients
//!
//! A gradient's end is another color or a hue shift relative to the start.
//! Gradients between palette colors skip steps that quantize to an already
//! emitted color.
//!
//! ```
//! # use prompter_colors::{generate_gradient, Colorant, Representation};
//! # use prompter_colors::termco::XtermColor;
//! let colors: Vec<_> = XtermColor::new(16).gradient(XtermColor::new(21)).collect();
//! let indexes: Vec<_> = colors.iter().map(XtermColor::index).collect();
//! assert_eq!(indexes, vec![16, 17, 4, 18, 19, 20, 12]);
//!
//! let red = Colorant::from(prompter_colors::RgbColor::new(255, 0, 0));
//! let rainbow = generate_gradient(red, 360);
//! assert_eq!(rainbow.iter().next(), Some(red));
//! ```
//!
//!
//! ## 4. Terminal Output
//!
//! ```
//! # use prompter_colors::{Colorant, RgbColor};
//! # use prompter_colors::style::{Fidelity, Layer};
//! let orange = Colorant::from(RgbColor::new(255, 128, 0));
//! let capped = orange.cap(Fidelity::EightBit);
//! assert_eq!(
//!     capped.map(|c| format!("{}", c.display(Layer::Foreground))),
//!     Some("\x1b[38;5;208m".to_string())
//! );
//! ```
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Create a new RGB color in const contexts.
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::RgbColor::new($r, $g, $b)
    };
}

/// The floating point type used for color computations.
pub type Float = f64;

mod color;
mod colorant;
mod core;
pub mod error;
mod gradient;
#[cfg(feature = "pyffi")]
mod pyffi;
pub mod style;
pub mod termco;
pub mod theme;
mod trans;
mod util;

pub use color::{HslColor, HsvColor, RgbColor};
pub use colorant::{ColorKind, Colorant, Representation, Target};
pub use gradient::{generate_gradient, Gradient, GradientIter, GradientSpace};
pub use trans::Translator;

/// Report the color models as a Python module.
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colors(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // ------------------------------------------------------------------- continuous
    m.add_class::<RgbColor>()?;
    m.add_class::<HsvColor>()?;
    m.add_class::<HslColor>()?;

    // ---------------------------------------------------------------------- palette
    m.add_class::<termco::AnsiColor>()?;
    m.add_class::<termco::XtermColor>()?;
    m.add_class::<termco::GrayscaleColor>()?;
    m.add_class::<termco::Cube6Color>()?;
    m.add_class::<termco::Cube5Color>()?;
    m.add_class::<termco::Cube6XtermColor>()?;

    // -------------------------------------------------------------------------- hub
    m.add_class::<ColorKind>()?;
    m.add_class::<Colorant>()?;
    m.add_class::<style::Fidelity>()?;
    m.add_class::<style::Layer>()?;

    m.add_function(wrap_pyfunction!(pyffi::sgr, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::gradient, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::hue_gradient, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::web_color, m)?)?;

    Ok(())
}
