use std::io::{stdout, IsTerminal, Result, Write};

use prompter_colors::style::{Fidelity, Layer};
use prompter_colors::termco::XtermColor;
use prompter_colors::{Colorant, Gradient, HsvColor, RgbColor};

fn show(out: &mut impl Write, label: &str, gradient: &Gradient, fidelity: Fidelity) -> Result<()> {
    write!(out, "{:<12}", label)?;
    let stride = (gradient.steps() as usize / 48).max(1);
    for colorant in gradient.iter().step_by(stride) {
        match colorant.cap(fidelity) {
            Some(capped) => write!(out, "{}  ", capped.display(Layer::Background))?,
            None => write!(out, "{} ", colorant)?,
        }
    }
    if Fidelity::NoColor < fidelity {
        write!(out, "\x1b[49m")?;
    }
    writeln!(out)
}

fn main() -> Result<()> {
    let fidelity = Fidelity::from_environment(stdout().is_terminal());
    let mut out = stdout().lock();

    let gradients = [
        (
            "rgb",
            Gradient::new(RgbColor::new(0, 0, 128), RgbColor::new(255, 128, 0)),
        ),
        (
            "hsv",
            Gradient::new(
                HsvColor::new(200, 100, 100).unwrap_or_default(),
                HsvColor::new(320, 100, 100).unwrap_or_default(),
            ),
        ),
        ("hue shift", Gradient::new(RgbColor::new(215, 40, 39), 180)),
        (
            "xterm",
            Gradient::new(XtermColor::new(16), Colorant::from(XtermColor::new(51))),
        ),
    ];

    for (label, gradient) in &gradients {
        show(&mut out, label, gradient, fidelity)?;
    }
    Ok(())
}
