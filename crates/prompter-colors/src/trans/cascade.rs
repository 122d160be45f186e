use log::{trace, warn};

use crate::theme::{CUBE6_XTERM_LEVELS, GRAY_RAMP};
use crate::RgbColor;

/// A set of channel levels `0..=255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LevelSet([u64; 4]);

impl LevelSet {
    /// Create a new level set with the given levels.
    pub const fn of(levels: &[u8]) -> Self {
        let mut bits = [0_u64; 4];
        let mut index = 0;
        while index < levels.len() {
            let level = levels[index] as usize;
            bits[level / 64] |= 1_u64 << (level % 64);
            index += 1;
        }
        Self(bits)
    }

    pub const fn union(&self, other: &Self) -> Self {
        let [a0, a1, a2, a3] = self.0;
        let [b0, b1, b2, b3] = other.0;
        Self([a0 | b0, a1 | b1, a2 | b2, a3 | b3])
    }

    pub const fn difference(&self, other: &Self) -> Self {
        let [a0, a1, a2, a3] = self.0;
        let [b0, b1, b2, b3] = other.0;
        Self([a0 & !b0, a1 & !b1, a2 & !b2, a3 & !b3])
    }

    pub const fn contains(&self, level: u8) -> bool {
        let level = level as usize;
        self.0[level / 64] & (1_u64 << (level % 64)) != 0
    }

    /// Find the member closest to the given value. Ties resolve to the lower
    /// member.
    pub fn nearest(&self, value: u8) -> Option<u8> {
        (0..=u8::MAX).find_map(|distance| {
            value
                .checked_sub(distance)
                .filter(|level| self.contains(*level))
                .or_else(|| {
                    value
                        .checked_add(distance)
                        .filter(|level| self.contains(*level))
                })
        })
    }

    /// Snap each channel to its nearest member. An empty set leaves channels
    /// unchanged.
    fn snap(&self, levels: &[u8; 3]) -> [u8; 3] {
        levels.map(|level| self.nearest(level).unwrap_or(level))
    }

    fn contains_any(&self, levels: &[u8; 3]) -> bool {
        levels.iter().any(|level| self.contains(*level))
    }
}

// ====================================================================================================================

/// A cascade of refinement stages that quantizes 24-bit RGB onto a palette.
///
/// A palette's levels fall into three categories: achromatic levels that only
/// occur in grays, levels of the dim colors, and levels of the bright colors.
/// Snapping each channel to the nearest level independently may combine
/// levels that no palette entry has. So the cascade starts with all levels,
/// falls back on dim and bright levels when a gray level ended up in a
/// chromatic triple, and falls back on bright levels when dim-only and
/// bright-only levels ended up in the same triple. Each stage snaps the
/// original channels again but over the smaller set.
#[derive(Debug)]
pub(crate) struct Cascade {
    all: LevelSet,
    chromatic: LevelSet,
    bright: LevelSet,
    gray_only: LevelSet,
    dim_only: LevelSet,
    bright_only: LevelSet,
}

impl Cascade {
    pub const fn new(grays: LevelSet, dim: LevelSet, bright: LevelSet) -> Self {
        let chromatic = dim.union(&bright);
        Self {
            all: grays.union(&chromatic),
            chromatic,
            bright,
            gray_only: grays.difference(&chromatic),
            dim_only: dim.difference(&bright),
            bright_only: bright.difference(&dim),
        }
    }

    /// Quantize the color onto the levels of this cascade's palette.
    pub fn quantize(&self, color: &RgbColor) -> [u8; 3] {
        let channels = color.as_ref();

        let mut levels = self.all.snap(channels);
        trace!("quantizing {} snapped to {:?}", color, levels);

        let is_gray = levels[0] == levels[1] && levels[1] == levels[2];
        if !is_gray && self.gray_only.contains_any(&levels) {
            levels = self.chromatic.snap(channels);
            trace!("quantizing {} refined to chromatic {:?}", color, levels);
        }

        if self.dim_only.contains_any(&levels) && self.bright_only.contains_any(&levels) {
            levels = self.bright.snap(channels);
            trace!("quantizing {} refined to bright {:?}", color, levels);
        }

        levels
    }
}

/// The cascade for the 16 ANSI colors.
pub(crate) const ANSI_CASCADE: Cascade = Cascade::new(
    LevelSet::of(&[192]),
    LevelSet::of(&[0, 128]),
    LevelSet::of(&[0, 255]),
);

/// The cascade for the 256 xterm colors.
pub(crate) const XTERM_CASCADE: Cascade = Cascade::new(
    LevelSet::of(&[192]).union(&LevelSet::of(&GRAY_RAMP)),
    LevelSet::of(&[0, 128]),
    LevelSet::of(&[0, 255]).union(&LevelSet::of(&CUBE6_XTERM_LEVELS)),
);

/// Find the first table entry with the given levels.
///
/// If the table has no such entry, this function falls back on the entry
/// closest by weighted Euclidian distance, which is the first entry for an
/// empty table.
pub(crate) fn find_entry(table: &[RgbColor], levels: &[u8; 3]) -> usize {
    if let Some(index) = table.iter().position(|entry| entry.as_ref() == levels) {
        return index;
    }

    let target = RgbColor::from(*levels);
    warn!("no palette entry with levels {:?}, using closest", levels);
    table
        .iter()
        .enumerate()
        .min_by_key(|(_, entry)| entry.weighted_euclidian_distance(&target))
        .map_or(0, |(index, _)| index)
}
