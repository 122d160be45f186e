//! Gradients between two colors.
//!
//! A [`Gradient`] interpolates between a start color and a [`Target`] in one
//! of four [`GradientSpace`]s, taking one integer step along the channel with
//! the largest difference at a time. Hue channels follow the shorter way
//! around the color wheel. Every step converts back to the start color's
//! representation, and steps that repeat an already emitted color are
//! skipped. So a gradient never yields the same color twice and never
//! yields more than [`Gradient::steps`] plus one colors.
//!
//! ```
//! # use prompter_colors::{generate_gradient, Colorant, HsvColor};
//! # use prompter_colors::error::OutOfBoundsError;
//! let gradient = generate_gradient(HsvColor::new(350, 100, 100)?, HsvColor::new(10, 100, 100)?);
//! let hues: Vec<_> = gradient
//!     .iter()
//!     .filter_map(|colorant| match colorant {
//!         Colorant::Hsv(color) => Some(color.hue()),
//!         _ => None,
//!     })
//!     .collect();
//!
//! assert_eq!(hues.len(), 21);
//! assert_eq!(&hues[8..13], &[358, 359, 0, 1, 2]);
//! # Ok::<(), OutOfBoundsError>(())
//! ```
use std::collections::HashSet;

use log::debug;

use crate::colorant::{ColorKind, Colorant, Target};
use crate::core::hue_distance;
use crate::termco::GrayscaleColor;
use crate::{Float, HslColor, HsvColor, RgbColor};

/// The space for interpolating a gradient.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GradientSpace {
    /// Interpolate red, green, and blue channels.
    Rgb,
    /// Interpolate hue, saturation, and value, with the hue wrapping around.
    Hsv,
    /// Interpolate hue, saturation, and lightness, with the hue wrapping
    /// around.
    Hsl,
    /// Interpolate the index of the 101-step grayscale.
    Grayscale,
}

impl GradientSpace {
    /// Determine the default space for gradients starting with a color of the
    /// given kind.
    ///
    /// HSV, HSL, and grayscale colors interpolate in their own spaces. All
    /// other colors interpolate in RGB.
    pub const fn default_for(kind: ColorKind) -> Self {
        match kind {
            ColorKind::Hsv => Self::Hsv,
            ColorKind::Hsl => Self::Hsl,
            ColorKind::Grayscale => Self::Grayscale,
            _ => Self::Rgb,
        }
    }

    /// Determine whether the first coordinate is a hue.
    pub const fn has_hue(&self) -> bool {
        matches!(self, Self::Hsv | Self::Hsl)
    }

    fn coordinates(&self, colorant: &Colorant) -> [i32; 3] {
        match self {
            Self::Rgb => colorant.to_rgb().as_ref().map(i32::from),
            Self::Hsv => {
                let color = colorant.to_color::<HsvColor>();
                [
                    color.hue() as i32,
                    color.saturation() as i32,
                    color.value() as i32,
                ]
            }
            Self::Hsl => {
                let color = colorant.to_color::<HslColor>();
                [
                    color.hue() as i32,
                    color.saturation() as i32,
                    color.lightness() as i32,
                ]
            }
            Self::Grayscale => [colorant.to_color::<GrayscaleColor>().index() as i32, 0, 0],
        }
    }

    /// Resolve the target into coordinates. Hue shifts rotate the start's hue
    /// in HSV for RGB space and leave grayscale unchanged.
    fn target_coordinates(&self, start: &Colorant, target: &Target) -> [i32; 3] {
        let degrees = match target {
            Target::Color(color) => return self.coordinates(color),
            Target::HueShift(degrees) => *degrees,
        };

        match self {
            Self::Rgb => {
                let shifted = start.to_color::<HsvColor>().shift_hue(degrees);
                self.coordinates(&Colorant::Hsv(shifted))
            }
            Self::Hsv => {
                let shifted = start.to_color::<HsvColor>().shift_hue(degrees);
                self.coordinates(&Colorant::Hsv(shifted))
            }
            Self::Hsl => {
                let shifted = start.to_color::<HslColor>().shift_hue(degrees);
                self.coordinates(&Colorant::Hsl(shifted))
            }
            Self::Grayscale => self.coordinates(start),
        }
    }

    fn to_colorant(self, coordinates: [i32; 3]) -> Colorant {
        let [c1, c2, c3] = coordinates;
        match self {
            Self::Rgb => Colorant::Rgb(RgbColor::saturating(c1, c2, c3)),
            Self::Hsv => Colorant::Hsv(HsvColor::saturating(c1, c2, c3)),
            Self::Hsl => Colorant::Hsl(HslColor::saturating(c1, c2, c3)),
            Self::Grayscale => Colorant::Grayscale(GrayscaleColor::saturating(c1)),
        }
    }
}

// ====================================================================================================================
// Gradient
// ====================================================================================================================

/// A gradient from a start color to a target.
///
/// A gradient is a cheap, copyable plan. Each call to [`Gradient::iter`]
/// lazily produces the colors from the start again.
///
/// ```
/// # use prompter_colors::{Gradient, Colorant};
/// # use prompter_colors::termco::AnsiColor;
/// let gradient = Gradient::new(AnsiColor::Red, AnsiColor::Blue);
/// let colors: Vec<_> = gradient.iter().collect();
/// assert_eq!(
///     colors,
///     vec![
///         Colorant::Ansi(AnsiColor::Red),
///         Colorant::Ansi(AnsiColor::Black),
///         Colorant::Ansi(AnsiColor::Blue),
///     ]
/// );
/// assert_eq!(gradient.iter().count(), 3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gradient {
    start: Colorant,
    space: GradientSpace,
    origin: [i32; 3],
    increments: [Float; 3],
    steps: u32,
}

impl Gradient {
    /// Create a new gradient in the start color's default space.
    pub fn new(start: impl Into<Colorant>, target: impl Into<Target>) -> Self {
        let start = start.into();
        Self::with_space(start, target, GradientSpace::default_for(start.kind()))
    }

    /// Create a new gradient in the given space.
    ///
    /// The colors still are of the start color's kind, with each step
    /// converted from the interpolation space.
    pub fn with_space(
        start: impl Into<Colorant>,
        target: impl Into<Target>,
        space: GradientSpace,
    ) -> Self {
        let start = start.into();
        let target = target.into();

        let origin = space.coordinates(&start);
        let end = space.target_coordinates(&start, &target);

        let mut deltas = [end[0] - origin[0], end[1] - origin[1], end[2] - origin[2]];
        if space.has_hue() {
            deltas[0] = hue_distance(origin[0] as u16, end[0] as u16);
        }

        let steps = deltas
            .iter()
            .map(|delta| delta.unsigned_abs())
            .max()
            .unwrap_or(0);
        let increments = if steps == 0 {
            [0.0; 3]
        } else {
            deltas.map(|delta| delta as Float / steps as Float)
        };

        debug!(
            "gradient from {} to {:?} in {:?} over {} steps",
            start, end, space, steps
        );

        Self {
            start,
            space,
            origin,
            increments,
            steps,
        }
    }

    /// Get the start color.
    pub const fn start(&self) -> Colorant {
        self.start
    }

    /// Get the interpolation space.
    pub const fn space(&self) -> GradientSpace {
        self.space
    }

    /// Get the number of steps from start to end, i.e., the largest absolute
    /// difference between start and end coordinates.
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// Get an iterator over this gradient's colors.
    pub fn iter(&self) -> GradientIter {
        GradientIter::new(*self)
    }

    fn step(&self, index: u32) -> Colorant {
        let mut coordinates = [0; 3];
        for (coordinate, (origin, increment)) in coordinates
            .iter_mut()
            .zip(self.origin.iter().zip(self.increments.iter()))
        {
            *coordinate = (*origin as Float + index as Float * increment).round() as i32;
        }

        self.space
            .to_colorant(coordinates)
            .to(self.start.kind())
    }
}

impl IntoIterator for Gradient {
    type Item = Colorant;
    type IntoIter = GradientIter;

    fn into_iter(self) -> Self::IntoIter {
        GradientIter::new(self)
    }
}

impl IntoIterator for &Gradient {
    type Item = Colorant;
    type IntoIter = GradientIter;

    fn into_iter(self) -> Self::IntoIter {
        GradientIter::new(*self)
    }
}

/// Create the gradient from start to target in the start color's default
/// space.
pub fn generate_gradient(start: impl Into<Colorant>, target: impl Into<Target>) -> Gradient {
    Gradient::new(start, target)
}

// --------------------------------------------------------------------------------------------------------------------

/// An iterator over a gradient's colors.
///
/// This iterator is fused. For palette colors, a step counts as repeated if it
/// has the same RGB value as an emitted color, so xterm indexes that duplicate
/// ANSI entries never follow the entries they duplicate.
#[derive(Debug)]
pub struct GradientIter {
    gradient: Gradient,
    index: u32,
    seen: HashSet<Colorant>,
}

impl GradientIter {
    fn new(gradient: Gradient) -> Self {
        Self {
            gradient,
            index: 0,
            seen: HashSet::new(),
        }
    }

    fn dedup_key(colorant: &Colorant) -> Colorant {
        if colorant.kind().is_palette() {
            Colorant::Rgb(colorant.to_rgb())
        } else {
            *colorant
        }
    }
}

impl Iterator for GradientIter {
    type Item = Colorant;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index <= self.gradient.steps {
            let colorant = if self.index == 0 {
                self.gradient.start
            } else {
                self.gradient.step(self.index)
            };
            self.index += 1;

            if self.seen.insert(Self::dedup_key(&colorant)) {
                return Some(colorant);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.gradient.steps + 1).saturating_sub(self.index) as usize;
        // Only the start is certain to be emitted.
        let lower = if self.index == 0 { 1 } else { 0 };
        (lower, Some(remaining))
    }
}

impl std::iter::FusedIterator for GradientIter {}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::{generate_gradient, Gradient, GradientSpace};
    use crate::colorant::{Colorant, Representation, Target};
    use crate::error::OutOfBoundsError;
    use crate::termco::{AnsiColor, Cube6Color, GrayscaleColor, XtermColor};
    use crate::{HslColor, HsvColor, RgbColor};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn hues(gradient: &Gradient) -> Vec<u16> {
        gradient
            .iter()
            .map(|colorant| match colorant {
                Colorant::Hsv(color) => color.hue(),
                Colorant::Hsl(color) => color.hue(),
                _ => panic!("gradient should produce hue colors"),
            })
            .collect()
    }

    #[test]
    fn test_rgb() {
        let black = RgbColor::new(0, 0, 0);
        let red = RgbColor::new(255, 0, 0);
        let colors: Vec<_> = black.gradient(red).collect();
        assert_eq!(colors.len(), 256);
        assert_eq!(colors[0], black);
        assert_eq!(colors[1], RgbColor::new(1, 0, 0));
        assert_eq!(colors[255], red);
        for (index, pair) in colors.windows(2).enumerate() {
            assert!(pair[0].red() < pair[1].red(), "step {}", index);
        }
        assert!(colors
            .iter()
            .all(|color| color.green() == 0 && color.blue() == 0));

        let colors: Vec<_> = generate_gradient(black, black).iter().collect();
        assert_eq!(colors, vec![Colorant::Rgb(black)]);

        let gradient = generate_gradient(RgbColor::new(10, 20, 30), RgbColor::new(20, 40, 50));
        assert_eq!(gradient.steps(), 20);
        assert_eq!(gradient.space(), GradientSpace::Rgb);
        let colors: Vec<_> = gradient.iter().collect();
        assert_eq!(colors.len(), 21);
        assert_eq!(colors[1], Colorant::Rgb(RgbColor::new(11, 21, 31)));
        assert_eq!(colors[20], Colorant::Rgb(RgbColor::new(20, 40, 50)));
    }

    #[test]
    fn test_degenerate() -> Result<(), OutOfBoundsError> {
        let color = HsvColor::new(42, 50, 50)?;
        let gradient = Gradient::new(color, color);
        assert_eq!(gradient.steps(), 0);
        assert_eq!(gradient.iter().collect::<Vec<_>>(), vec![Colorant::Hsv(color)]);

        let gradient = Gradient::new(color, 0);
        assert_eq!(gradient.iter().count(), 1);
        let gradient = Gradient::new(color, 360);
        assert_eq!(gradient.iter().count(), 1);
        Ok(())
    }

    #[test]
    fn test_hue_wrapping() -> Result<(), OutOfBoundsError> {
        let a = HsvColor::new(350, 100, 100)?;
        let b = HsvColor::new(10, 100, 100)?;

        let forward = hues(&Gradient::new(a, b));
        assert_eq!(forward.len(), 21);
        assert_eq!(forward[0], 350);
        assert_eq!(forward[10], 0);
        assert_eq!(forward[20], 10);

        let backward = hues(&Gradient::new(b, a));
        assert_eq!(backward.len(), 21);
        assert_eq!(&backward[..3], &[10, 9, 8]);
        assert_eq!(backward[20], 350);

        let start = HslColor::new(0, 100, 50)?;
        let opposite = hues(&Gradient::new(start, HslColor::new(180, 100, 50)?));
        assert_eq!(opposite.len(), 181);
        assert_eq!(opposite[1], 1);
        Ok(())
    }

    #[test]
    fn test_hue_shift() -> Result<(), OutOfBoundsError> {
        let red = HsvColor::new(0, 100, 100)?;

        let shifted = hues(&Gradient::new(red, 120));
        assert_eq!(shifted.len(), 121);
        assert_eq!(shifted[120], 120);

        let shifted = hues(&Gradient::new(red, Target::HueShift(-30)));
        assert_eq!(shifted.len(), 31);
        assert_eq!(shifted[1], 359);
        assert_eq!(shifted[30], 330);

        let colors: Vec<_> = RgbColor::new(255, 0, 0).gradient(120).collect();
        assert_eq!(colors.len(), 256);
        assert_eq!(colors[255], RgbColor::new(0, 255, 0));

        let gray = GrayscaleColor::new(30)?;
        assert_eq!(Gradient::new(gray, 90).iter().count(), 1);

        let color = HsvColor::new(10, 100, 100)?;
        let shifted = hues(&Gradient::new(color, i32::MAX));
        assert_eq!(shifted.len(), 128);
        assert_eq!(shifted[127], 137);
        let shifted = hues(&Gradient::new(color, i32::MIN));
        assert_eq!(shifted.len(), 129);
        assert_eq!(shifted[128], 242);
        Ok(())
    }

    #[test]
    fn test_palettes() -> Result<(), OutOfBoundsError> {
        let colors: Vec<_> = AnsiColor::Black.gradient(AnsiColor::BrightWhite).collect();
        assert_eq!(
            colors,
            vec![
                AnsiColor::Black,
                AnsiColor::BrightBlack,
                AnsiColor::White,
                AnsiColor::BrightWhite
            ]
        );

        let colors: Vec<_> = XtermColor::new(16)
            .gradient(XtermColor::new(21))
            .map(|color| color.index())
            .collect();
        assert_eq!(colors, vec![16, 17, 4, 18, 19, 20, 12]);

        let colors: Vec<_> = Cube6Color::new(0, 0, 0)?
            .gradient(Cube6Color::new(5, 0, 0)?)
            .collect();
        assert_eq!(colors.len(), 6);
        for (index, color) in colors.iter().enumerate() {
            assert_eq!(color, &Cube6Color::new(index as u8, 0, 0)?);
        }

        let grays: Vec<_> = GrayscaleColor::new(0)?
            .gradient(GrayscaleColor::new(100)?)
            .collect();
        assert_eq!(grays.len(), 101);
        assert_eq!(grays[50], GrayscaleColor::new(50)?);
        Ok(())
    }

    #[test]
    fn test_explicit_space() -> Result<(), OutOfBoundsError> {
        let red = RgbColor::new(255, 0, 0);
        let green = RgbColor::new(0, 255, 0);

        let gradient = Gradient::with_space(red, green, GradientSpace::Hsv);
        let colors: Vec<_> = gradient.iter().collect();
        assert_eq!(colors[0], Colorant::Rgb(red));
        assert_eq!(colors.last(), Some(&Colorant::Rgb(green)));
        // Halfway through HSV, yellow is fully saturated.
        assert!(colors.contains(&Colorant::Rgb(RgbColor::new(255, 255, 0))));

        let gradient = Gradient::with_space(red, green, GradientSpace::Grayscale);
        assert!(gradient.iter().all(|colorant| colorant.to_rgb().is_gray()
            || colorant == Colorant::Rgb(red)));
        Ok(())
    }

    #[test]
    fn test_properties() {
        let mut rng = StdRng::seed_from_u64(0x6ad1e47);

        for _ in 0..200 {
            let start = RgbColor::new(rng.random(), rng.random(), rng.random());
            let end = RgbColor::new(rng.random(), rng.random(), rng.random());

            for gradient in [
                Gradient::new(start, end),
                Gradient::new(start.to_hsv(), end.to_hsv()),
                Gradient::new(start.to_hsl(), end.to_hsl()),
                Gradient::new(start.to_xterm(), end.to_xterm()),
                Gradient::new(start.to_hsv(), rng.random_range(-720..=720_i32)),
            ] {
                let colors: Vec<_> = gradient.iter().collect();
                assert_eq!(colors[0], gradient.start());
                assert!(colors.len() <= gradient.steps() as usize + 1);

                let unique: HashSet<_> = colors.iter().collect();
                assert_eq!(unique.len(), colors.len());

                // Restartable
                assert_eq!(gradient.iter().collect::<Vec<_>>(), colors);
                assert!(colors
                    .iter()
                    .all(|colorant| colorant.kind() == gradient.start().kind()));
            }
        }
    }
}
