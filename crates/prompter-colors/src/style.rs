//! Terminal escape sequences for colors.
//!
//! A [`Colorant`] renders as the SGR escape sequence selecting it as
//! foreground or background color, with [`Layer`] choosing between the two.
//! [`Fidelity`] captures how many colors a terminal supports, and
//! [`Colorant::cap`] quantizes a color down to that level first.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::colorant::{ColorKind, Colorant};
use crate::termco::XtermColor;
use crate::util::{Env, Environment};

/// The targeted display layer: Foreground or background.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prompter_colors")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    #[default]
    Foreground,
    /// The background layer.
    Background,
}

impl Layer {
    /// Determine the offset added to foreground SGR parameters, which is 0
    /// for the foreground and 10 for the background.
    pub const fn offset(&self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

/// The color fidelity of terminal output.
///
/// The levels are ordered, from [`Fidelity::Plain`] for output without any
/// escape sequences to [`Fidelity::TwentyFourBit`] for full RGB colors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "prompter_colors")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fidelity {
    /// Plain text, no escape sequences
    Plain,
    /// Escape sequences but no colors
    NoColor,
    /// The 16 ANSI colors
    Ansi,
    /// The 256 xterm colors
    EightBit,
    /// 24-bit RGB colors
    TwentyFourBit,
}

impl Fidelity {
    /// Determine the fidelity of terminal output from environment variables.
    ///
    /// `NO_COLOR` and `FORCE_COLOR` take precedence over everything else.
    /// Otherwise, output to a stream that is not a terminal is plain and
    /// `COLORTERM`, `TERM_PROGRAM`, and `TERM` determine the level.
    pub fn from_environment(has_tty: bool) -> Self {
        fidelity_from_environment(&Env, has_tty)
    }

    /// Determine whether this fidelity renders the colorant without
    /// conversion.
    pub fn covers(&self, colorant: impl Into<Colorant>) -> bool {
        Fidelity::from(&colorant.into()) <= *self
    }
}

impl From<&Colorant> for Fidelity {
    fn from(value: &Colorant) -> Self {
        match value {
            Colorant::Ansi(_) => Self::Ansi,
            Colorant::Xterm(_) | Colorant::Cube6Xterm(_) => Self::EightBit,
            _ => Self::TwentyFourBit,
        }
    }
}

pub(crate) fn fidelity_from_environment(env: &impl Environment, has_tty: bool) -> Fidelity {
    if env.is_non_empty("NO_COLOR") {
        return Fidelity::NoColor;
    }

    if let Some(force) = env.var("FORCE_COLOR").filter(|value| !value.is_empty()) {
        return match force.as_str() {
            "0" | "false" => Fidelity::NoColor,
            "2" => Fidelity::EightBit,
            "3" => Fidelity::TwentyFourBit,
            _ => Fidelity::Ansi,
        };
    }

    if !has_tty || env.has_value("TERM", "dumb") {
        return Fidelity::Plain;
    } else if env.has_value("COLORTERM", "truecolor") || env.has_value("COLORTERM", "24bit") {
        return Fidelity::TwentyFourBit;
    } else if env.has_value("TERM_PROGRAM", "Apple_Terminal") {
        return Fidelity::EightBit;
    }

    if let Some(term) = env.var("TERM") {
        let term = term.to_ascii_lowercase();
        if term.ends_with("-256color") || term.ends_with("-256") {
            return Fidelity::EightBit;
        } else if ["xterm", "screen", "tmux", "vt100", "vt220", "rxvt"]
            .iter()
            .any(|prefix| term.starts_with(prefix))
            || ["ansi", "color", "cygwin", "linux"].contains(&term.as_str())
        {
            return Fidelity::Ansi;
        }
    } else if env.is_defined("COLORTERM") {
        return Fidelity::Ansi;
    }

    Fidelity::Plain
}

// ====================================================================================================================

impl Colorant {
    /// Get the SGR parameters for this colorant.
    ///
    /// ANSI colors use the 3-bit codes `30..=37` and the aixterm codes
    /// `90..=97` for bright colors, so they leave the text weight alone. Xterm
    /// colors and the embedded cube use `38;5;n`, and all other colors use
    /// `38;2;r;g;b`. Background parameters are 10 larger.
    pub fn sgr_parameters(&self, layer: Layer) -> Vec<u8> {
        match self {
            Self::Ansi(c) => {
                let base = (if c.is_bright() { 90 } else { 30 }) + layer.offset();
                vec![base + c.index()]
            }
            Self::Xterm(c) => vec![38 + layer.offset(), 5, c.index()],
            Self::Cube6Xterm(c) => vec![38 + layer.offset(), 5, XtermColor::from(*c).index()],
            _ => {
                let [r, g, b] = *self.to_rgb().as_ref();
                vec![38 + layer.offset(), 2, r, g, b]
            }
        }
    }

    /// Write the colorant's SGR parameters for the given layer with the given
    /// formatter.
    pub fn write_sgr_params(
        &self,
        layer: Layer,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let mut first = true;
        for parameter in self.sgr_parameters(layer) {
            if !first {
                f.write_str(";")?;
            }
            write!(f, "{}", parameter)?;
            first = false;
        }
        Ok(())
    }

    /// Provide a layer to make this colorant displayable as an escape
    /// sequence.
    ///
    /// ```
    /// # use prompter_colors::{Colorant, RgbColor};
    /// # use prompter_colors::style::Layer;
    /// # use prompter_colors::termco::AnsiColor;
    /// let red = Colorant::from(AnsiColor::BrightRed);
    /// assert_eq!(format!("{}", red.display(Layer::Foreground)), "\x1b[91m");
    ///
    /// let orange = Colorant::from(RgbColor::new(255, 135, 0));
    /// assert_eq!(format!("{}", orange.display(Layer::Background)), "\x1b[48;2;255;135;0m");
    /// ```
    pub fn display(&self, layer: Layer) -> impl std::fmt::Display + '_ {
        LayeredColorant {
            layer,
            colorant: self,
        }
    }

    /// Cap this colorant to the given fidelity.
    ///
    /// This method returns `None` if the fidelity has no colors, this
    /// colorant if the fidelity covers it, and the closest ANSI or xterm
    /// color otherwise.
    pub fn cap(&self, fidelity: Fidelity) -> Option<Colorant> {
        match fidelity {
            Fidelity::Plain | Fidelity::NoColor => None,
            _ if fidelity.covers(*self) => Some(*self),
            Fidelity::Ansi => Some(self.to(ColorKind::Ansi)),
            _ => Some(self.to(ColorKind::Xterm)),
        }
    }
}

struct LayeredColorant<'a> {
    layer: Layer,
    colorant: &'a Colorant,
}

impl std::fmt::Display for LayeredColorant<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("\x1b[")?;
        self.colorant.write_sgr_params(self.layer, f)?;
        f.write_str("m")
    }
}

#[cfg(test)]
mod test {
    use super::{fidelity_from_environment, Fidelity, Layer};
    use crate::colorant::Colorant;
    use crate::error::OutOfBoundsError;
    use crate::termco::{AnsiColor, Cube6XtermColor, GrayscaleColor, XtermColor};
    use crate::util::FakeEnv;
    use crate::{HsvColor, RgbColor};

    #[test]
    fn test_fidelity() {
        let env = FakeEnv::default();
        assert_eq!(fidelity_from_environment(&env, true), Fidelity::Plain);
        let env = env.with("TERM", "xterm");
        assert_eq!(fidelity_from_environment(&env, true), Fidelity::Ansi);
        assert_eq!(fidelity_from_environment(&env, false), Fidelity::Plain);
        let env = env.with("TERM", "xterm-256color");
        assert_eq!(fidelity_from_environment(&env, true), Fidelity::EightBit);
        let env = env.with("COLORTERM", "truecolor");
        assert_eq!(fidelity_from_environment(&env, true), Fidelity::TwentyFourBit);
        let env = env.with("FORCE_COLOR", "1");
        assert_eq!(fidelity_from_environment(&env, false), Fidelity::Ansi);
        let env = env.with("NO_COLOR", "1");
        assert_eq!(fidelity_from_environment(&env, true), Fidelity::NoColor);

        let env = FakeEnv::default().with("TERM", "dumb").with("COLORTERM", "24bit");
        assert_eq!(fidelity_from_environment(&env, true), Fidelity::Plain);
        let env = FakeEnv::default().with("TERM_PROGRAM", "Apple_Terminal");
        assert_eq!(fidelity_from_environment(&env, true), Fidelity::EightBit);
    }

    #[test]
    fn test_sgr() -> Result<(), OutOfBoundsError> {
        let fg = Layer::Foreground;
        let bg = Layer::Background;

        assert_eq!(Colorant::from(AnsiColor::Red).sgr_parameters(fg), vec![31]);
        assert_eq!(Colorant::from(AnsiColor::BrightCyan).sgr_parameters(bg), vec![106]);
        assert_eq!(Colorant::from(XtermColor::new(208)).sgr_parameters(fg), vec![38, 5, 208]);
        assert_eq!(
            Colorant::from(Cube6XtermColor::new(5, 2, 0)?).sgr_parameters(bg),
            vec![48, 5, 208]
        );
        assert_eq!(
            Colorant::from(GrayscaleColor::new(50)?).sgr_parameters(fg),
            vec![38, 2, 128, 128, 128]
        );
        assert_eq!(
            Colorant::from(HsvColor::new(0, 100, 100)?).sgr_parameters(fg),
            vec![38, 2, 255, 0, 0]
        );

        // ANSI colors take a single parameter and never set bold or faint.
        for color in AnsiColor::all() {
            let base = if color.is_bright() { 90 } else { 30 };
            assert_eq!(
                Colorant::from(color).sgr_parameters(fg),
                vec![base + color.index()]
            );
            assert_eq!(
                Colorant::from(color).sgr_parameters(bg),
                vec![base + 10 + color.index()]
            );
        }

        let colorant = Colorant::from(XtermColor::new(33));
        assert_eq!(format!("{}", colorant.display(bg)), "\x1b[48;5;33m");
        Ok(())
    }

    #[test]
    fn test_cap() {
        let orange = Colorant::from(RgbColor::new(255, 128, 0));
        assert_eq!(orange.cap(Fidelity::Plain), None);
        assert_eq!(orange.cap(Fidelity::NoColor), None);
        assert_eq!(orange.cap(Fidelity::Ansi), Some(Colorant::Ansi(AnsiColor::BrightYellow)));
        assert_eq!(orange.cap(Fidelity::EightBit), Some(Colorant::Xterm(XtermColor::new(208))));
        assert_eq!(orange.cap(Fidelity::TwentyFourBit), Some(orange));

        let red = Colorant::from(AnsiColor::Red);
        assert_eq!(red.cap(Fidelity::EightBit), Some(red));
        assert!(Fidelity::Ansi.covers(AnsiColor::Red));
        assert!(!Fidelity::Ansi.covers(XtermColor::new(1)));
    }
}
