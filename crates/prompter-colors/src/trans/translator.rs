use std::collections::HashMap;

use log::{debug, trace};

use crate::colorant::{ColorKind, Colorant, Representation};

/// A memoizing color translator.
///
/// Conversions between representations are pure functions, so a translator
/// may remember their results. That pays off when the same few colors are
/// converted over and over again, e.g., when capping every style of a prompt
/// to a terminal's fidelity. A translator always returns exactly what
/// [`Colorant::to`] returns.
///
/// ```
/// # use prompter_colors::{ColorKind, Colorant, RgbColor, Translator};
/// # use prompter_colors::termco::XtermColor;
/// let mut translator = Translator::new();
/// let orange = RgbColor::new(255, 128, 0);
///
/// let xterm = translator.translate(orange, ColorKind::Xterm);
/// assert_eq!(xterm, Colorant::Xterm(XtermColor::new(208)));
/// assert_eq!(translator.translate(orange, ColorKind::Xterm), xterm);
/// assert_eq!((translator.hits(), translator.misses()), (1, 1));
/// ```
#[derive(Debug, Default)]
pub struct Translator {
    cache: HashMap<(Colorant, ColorKind), Colorant>,
    limit: Option<usize>,
    hits: usize,
    misses: usize,
}

impl Translator {
    /// Create a new translator with an empty, unbounded cache.
    ///
    /// An unbounded cache suits the small working sets of prompts and themes.
    /// Use [`Translator::with_limit`] when translating arbitrary colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new translator whose cache holds at most `limit`
    /// translations. A full cache is flushed before the next insertion.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Get the cache's capacity limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Translate the color to the given kind.
    pub fn translate(&mut self, color: impl Into<Colorant>, kind: ColorKind) -> Colorant {
        let color = color.into();
        if color.kind() == kind {
            return color;
        }

        if let Some(result) = self.cache.get(&(color, kind)) {
            self.hits += 1;
            trace!("translation of {} to {} is cached", color, kind.name());
            return *result;
        }

        self.misses += 1;
        let result = color.to(kind);
        debug!("translated {} to {} as {}", color, kind.name(), result);
        if let Some(limit) = self.limit {
            if limit <= self.cache.len() {
                debug!("flushing {} cached translations", self.cache.len());
                self.cache.clear();
            }
            if limit == 0 {
                return result;
            }
        }
        self.cache.insert((color, kind), result);
        result
    }

    /// Translate the color to the given representation.
    pub fn translate_to<T: Representation>(&mut self, color: impl Into<Colorant>) -> T {
        self.translate(color, T::KIND).to_color()
    }

    /// Get the number of cached translations.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Determine whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get the number of translations served from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of translations computed afresh.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Forget all cached translations.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod test {
    use super::Translator;
    use crate::colorant::{ColorKind, Colorant};
    use crate::termco::{AnsiColor, GrayscaleColor};
    use crate::RgbColor;

    #[test]
    fn test_translator() {
        let mut translator = Translator::new();
        assert!(translator.is_empty());

        let colors = [
            RgbColor::new(0, 128, 255),
            RgbColor::new(200, 30, 30),
            RgbColor::new(96, 96, 96),
        ];

        for _ in 0..3 {
            for color in colors {
                for kind in ColorKind::ALL {
                    let expected = Colorant::from(color).to(kind);
                    assert_eq!(translator.translate(color, kind), expected);
                }
            }
        }

        // Translations to RGB itself bypass the cache.
        assert_eq!(translator.len(), 3 * 8);
        assert_eq!(translator.misses(), 3 * 8);
        assert_eq!(translator.hits(), 2 * 3 * 8);

        let ansi: AnsiColor = translator.translate_to(RgbColor::new(0, 128, 255));
        assert_eq!(ansi, AnsiColor::BrightCyan);
        let gray: GrayscaleColor = translator.translate_to(AnsiColor::BrightWhite);
        assert_eq!(gray.index(), 100);

        translator.clear();
        assert!(translator.is_empty());
        assert_eq!(translator.hits(), 0);
    }

    #[test]
    fn test_limit() {
        let mut translator = Translator::with_limit(4);
        assert_eq!(translator.limit(), Some(4));

        for value in 0..=255 {
            let color = RgbColor::new(value, 255 - value, value / 2);
            assert_eq!(
                translator.translate(color, ColorKind::Xterm),
                Colorant::from(color).to(ColorKind::Xterm)
            );
            assert!(translator.len() <= 4);
        }
        assert_eq!(translator.misses(), 256);

        let mut translator = Translator::with_limit(0);
        let color = RgbColor::new(1, 2, 3);
        translator.translate(color, ColorKind::Ansi);
        translator.translate(color, ColorKind::Ansi);
        assert!(translator.is_empty());
        assert_eq!((translator.hits(), translator.misses()), (0, 2));
        assert_eq!(Translator::new().limit(), None);
    }
}
