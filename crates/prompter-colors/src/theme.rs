//! The reference tables.
//!
//! All tables are compile-time constants and hence shared, immutable, and
//! initialized exactly once. The ANSI and xterm tables fix the RGB values for
//! the palette types in [`termco`](crate::termco), and the cube level tables
//! fix the axis values of the three color cubes. [`WEB_COLORS`] lists the
//! named X11 web colors accepted when parsing an
//! [`RgbColor`](crate::RgbColor).
use crate::RgbColor;

/// The RGB values of the 16 ANSI colors.
///
/// The first eight entries are the normal colors, the second eight entries
/// the bright colors, both in the order black, red, green, yellow, blue,
/// magenta, cyan, white.
pub const ANSI_COLORS: [RgbColor; 16] = [
    rgb!(0, 0, 0),       // Black
    rgb!(128, 0, 0),     // Red
    rgb!(0, 128, 0),     // Green
    rgb!(128, 128, 0),   // Yellow
    rgb!(0, 0, 128),     // Blue
    rgb!(128, 0, 128),   // Magenta
    rgb!(0, 128, 128),   // Cyan
    rgb!(192, 192, 192), // White
    rgb!(128, 128, 128), // Bright Black
    rgb!(255, 0, 0),     // Bright Red
    rgb!(0, 255, 0),     // Bright Green
    rgb!(255, 255, 0),   // Bright Yellow
    rgb!(0, 0, 255),     // Bright Blue
    rgb!(255, 0, 255),   // Bright Magenta
    rgb!(0, 255, 255),   // Bright Cyan
    rgb!(255, 255, 255), // Bright White
];

/// The axis levels of the 6x6x6 cube with evenly spaced levels.
pub const CUBE6_LEVELS: [u8; 6] = [0x00, 0x33, 0x66, 0x99, 0xcc, 0xff];

/// The axis levels of the 5x5x5 cube.
pub const CUBE5_LEVELS: [u8; 5] = [0x00, 0x40, 0x80, 0xbf, 0xff];

/// The axis levels of the 6x6x6 cube embedded in the xterm palette.
pub const CUBE6_XTERM_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// The 24 levels of the gray ramp at the end of the xterm palette.
pub const GRAY_RAMP: [u8; 24] = gray_ramp();

const fn gray_ramp() -> [u8; 24] {
    let mut ramp = [0; 24];
    let mut index = 0;
    while index < 24 {
        ramp[index] = 8 + 10 * index as u8;
        index += 1;
    }
    ramp
}

/// The RGB values of the 256 xterm colors.
///
/// The table comprises the 16 ANSI colors, followed by the 6x6x6 cube with
/// [`CUBE6_XTERM_LEVELS`] in red-major order, followed by the 24 levels of
/// [`GRAY_RAMP`]. Several cube entries repeat ANSI entries, e.g., index 16
/// and index 0 both are black.
pub const XTERM_COLORS: [RgbColor; 256] = xterm_colors();

const fn xterm_colors() -> [RgbColor; 256] {
    let mut table = [RgbColor::new(0, 0, 0); 256];
    let mut index = 0;

    while index < 16 {
        table[index] = ANSI_COLORS[index];
        index += 1;
    }

    while index < 232 {
        let cube = index - 16;
        table[index] = RgbColor::new(
            CUBE6_XTERM_LEVELS[cube / 36],
            CUBE6_XTERM_LEVELS[cube / 6 % 6],
            CUBE6_XTERM_LEVELS[cube % 6],
        );
        index += 1;
    }

    while index < 256 {
        let level = GRAY_RAMP[index - 232];
        table[index] = RgbColor::new(level, level, level);
        index += 1;
    }

    table
}

// ====================================================================================================================

/// The X11 web colors by name.
pub const WEB_COLORS: [(&str, RgbColor); 141] = [
    // Pink colors
    ("Pink", rgb!(255, 192, 203)),
    ("LightPink", rgb!(255, 182, 193)),
    ("HotPink", rgb!(255, 105, 180)),
    ("DeepPink", rgb!(255, 20, 147)),
    ("PaleVioletRed", rgb!(219, 112, 147)),
    ("MediumVioletRed", rgb!(199, 21, 133)),
    // Red colors
    ("LightSalmon", rgb!(255, 160, 122)),
    ("Salmon", rgb!(250, 128, 114)),
    ("DarkSalmon", rgb!(233, 150, 122)),
    ("LightCoral", rgb!(240, 128, 128)),
    ("IndianRed", rgb!(205, 92, 92)),
    ("Crimson", rgb!(220, 20, 60)),
    ("FireBrick", rgb!(178, 34, 34)),
    ("DarkRed", rgb!(139, 0, 0)),
    ("Red", rgb!(255, 0, 0)),
    // Orange colors
    ("OrangeRed", rgb!(255, 69, 0)),
    ("Tomato", rgb!(255, 99, 71)),
    ("Coral", rgb!(255, 127, 80)),
    ("DarkOrange", rgb!(255, 140, 0)),
    ("Orange", rgb!(255, 165, 0)),
    // Yellow colors
    ("Yellow", rgb!(255, 255, 0)),
    ("LightYellow", rgb!(255, 255, 224)),
    ("LemonChiffon", rgb!(255, 250, 205)),
    ("LightGoldenrodYellow", rgb!(250, 250, 210)),
    ("PapayaWhip", rgb!(255, 239, 213)),
    ("Moccasin", rgb!(255, 228, 181)),
    ("PeachPuff", rgb!(255, 218, 185)),
    ("PaleGoldenrod", rgb!(238, 232, 170)),
    ("Khaki", rgb!(240, 230, 140)),
    ("DarkKhaki", rgb!(189, 183, 107)),
    ("Gold", rgb!(255, 215, 0)),
    // Brown colors
    ("Cornsilk", rgb!(255, 248, 220)),
    ("BlanchedAlmond", rgb!(255, 235, 205)),
    ("Bisque", rgb!(255, 228, 196)),
    ("NavajoWhite", rgb!(255, 222, 173)),
    ("Wheat", rgb!(245, 222, 173)),
    ("BurlyWood", rgb!(222, 184, 135)),
    ("Tan", rgb!(210, 180, 140)),
    ("RosyBrown", rgb!(188, 143, 143)),
    ("SandyBrown", rgb!(244, 164, 96)),
    ("Goldenrod", rgb!(218, 165, 32)),
    ("DarkGoldenrod", rgb!(184, 134, 11)),
    ("Peru", rgb!(205, 133, 63)),
    ("Chocolate", rgb!(210, 105, 30)),
    ("SaddleBrown", rgb!(139, 69, 19)),
    ("Sienna", rgb!(160, 82, 45)),
    ("Brown", rgb!(165, 42, 42)),
    ("Maroon", rgb!(128, 0, 0)),
    // Green colors
    ("DarkOliveGreen", rgb!(85, 107, 47)),
    ("Olive", rgb!(128, 128, 0)),
    ("OliveDrab", rgb!(107, 142, 35)),
    ("YellowGreen", rgb!(154, 205, 50)),
    ("LimeGreen", rgb!(50, 205, 50)),
    ("Lime", rgb!(0, 255, 0)),
    ("LawnGreen", rgb!(124, 252, 0)),
    ("Chartreuse", rgb!(127, 255, 0)),
    ("GreenYellow", rgb!(173, 255, 47)),
    ("SpringGreen", rgb!(0, 255, 127)),
    ("MediumSpringGreen", rgb!(0, 250, 154)),
    ("LightGreen", rgb!(144, 238, 144)),
    ("PaleGreen", rgb!(152, 251, 152)),
    ("DarkSeaGreen", rgb!(143, 188, 143)),
    ("MediumSeaGreen", rgb!(80, 179, 113)),
    ("SeaGreen", rgb!(46, 139, 87)),
    ("ForestGreen", rgb!(34, 139, 34)),
    ("Green", rgb!(0, 128, 0)),
    ("DarkGreen", rgb!(0, 100, 0)),
    // Cyan colors
    ("MediumAquamarine", rgb!(102, 205, 170)),
    ("Aqua", rgb!(0, 255, 255)),
    ("Cyan", rgb!(0, 255, 255)),
    ("LightCyan", rgb!(224, 255, 255)),
    ("PaleTurquoise", rgb!(175, 238, 238)),
    ("Aquamarine", rgb!(127, 255, 212)),
    ("Turquoise", rgb!(64, 224, 208)),
    ("MediumTurquoise", rgb!(72, 209, 204)),
    ("DarkTurquoise", rgb!(0, 206, 209)),
    ("LightSeaGreen", rgb!(32, 178, 170)),
    ("CadetBlue", rgb!(95, 158, 160)),
    ("DarkCyan", rgb!(0, 139, 139)),
    ("Teal", rgb!(0, 128, 128)),
    // Blue colors
    ("LightSteelBlue", rgb!(176, 196, 222)),
    ("PowderBlue", rgb!(176, 224, 230)),
    ("LightBlue", rgb!(173, 216, 230)),
    ("SkyBlue", rgb!(135, 206, 235)),
    ("LightSkyBlue", rgb!(135, 206, 250)),
    ("DeepSkyBlue", rgb!(0, 191, 255)),
    ("DodgerBlue", rgb!(30, 144, 255)),
    ("CornflowerBlue", rgb!(100, 149, 237)),
    ("SteelBlue", rgb!(70, 130, 180)),
    ("RoyalBlue", rgb!(65, 105, 225)),
    ("Blue", rgb!(0, 0, 255)),
    ("MediumBlue", rgb!(0, 0, 205)),
    ("DarkBlue", rgb!(0, 0, 139)),
    ("Navy", rgb!(0, 0, 128)),
    ("MidnightBlue", rgb!(25, 25, 112)),
    // Purple colors
    ("Lavender", rgb!(230, 230, 250)),
    ("Thistle", rgb!(216, 191, 216)),
    ("Plum", rgb!(221, 160, 221)),
    ("Violet", rgb!(238, 130, 238)),
    ("Orchid", rgb!(218, 112, 214)),
    ("Fuchsia", rgb!(255, 0, 255)),
    ("Magenta", rgb!(255, 0, 255)),
    ("MediumOrchid", rgb!(186, 85, 211)),
    ("MediumPurple", rgb!(147, 112, 219)),
    ("BlueViolet", rgb!(138, 43, 226)),
    ("DarkViolet", rgb!(148, 0, 211)),
    ("DarkOrchid", rgb!(153, 50, 204)),
    ("DarkMagenta", rgb!(139, 0, 139)),
    ("Purple", rgb!(128, 0, 128)),
    ("Indigo", rgb!(75, 0, 130)),
    ("DarkSlateBlue", rgb!(72, 61, 139)),
    ("RebeccaPurple", rgb!(102, 51, 153)),
    ("SlateBlue", rgb!(106, 90, 205)),
    ("MediumSlateBlue", rgb!(123, 104, 238)),
    // White colors
    ("White", rgb!(255, 255, 255)),
    ("Snow", rgb!(255, 250, 250)),
    ("Honeydew", rgb!(240, 255, 240)),
    ("MintCream", rgb!(245, 255, 250)),
    ("Azure", rgb!(240, 255, 255)),
    ("AliceBlue", rgb!(240, 248, 255)),
    ("GhostWhite", rgb!(248, 248, 255)),
    ("WhiteSmoke", rgb!(245, 245, 245)),
    ("SeaShell", rgb!(255, 245, 238)),
    ("Beige", rgb!(245, 245, 220)),
    ("OldLace", rgb!(253, 245, 230)),
    ("FloralWhite", rgb!(255, 250, 240)),
    ("Ivory", rgb!(255, 255, 240)),
    ("AntiqueWhite", rgb!(250, 235, 215)),
    ("Linen", rgb!(250, 240, 230)),
    ("LavenderBlush", rgb!(255, 240, 245)),
    ("MistyRose", rgb!(255, 228, 225)),
    // Gray/Black colors
    ("Gainsboro", rgb!(220, 220, 220)),
    ("LightGray", rgb!(211, 211, 211)),
    ("Silver", rgb!(192, 192, 192)),
    ("DarkGray", rgb!(169, 169, 169)),
    ("Gray", rgb!(128, 128, 128)),
    ("DimGray", rgb!(105, 105, 105)),
    ("LightSlateGray", rgb!(119, 136, 153)),
    ("SlateGray", rgb!(112, 128, 144)),
    ("DarkSlateGray", rgb!(47, 79, 79)),
    ("Black", rgb!(0, 0, 0)),
];

/// Look up a web color by name, ignoring ASCII case.
///
/// ```
/// # use prompter_colors::{theme::web_color, RgbColor};
/// assert_eq!(web_color("darkorange"), Some(RgbColor::new(255, 140, 0)));
/// assert_eq!(web_color("Unobtainium"), None);
/// ```
pub fn web_color(name: &str) -> Option<RgbColor> {
    WEB_COLORS
        .iter()
        .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod test {
    use super::{web_color, ANSI_COLORS, GRAY_RAMP, WEB_COLORS, XTERM_COLORS};
    use crate::RgbColor;

    #[test]
    fn test_xterm_colors() {
        assert_eq!(&XTERM_COLORS[..16], &ANSI_COLORS[..]);
        assert_eq!(XTERM_COLORS[16], RgbColor::new(0, 0, 0));
        assert_eq!(XTERM_COLORS[33], RgbColor::new(0, 135, 255));
        assert_eq!(XTERM_COLORS[208], RgbColor::new(255, 135, 0));
        assert_eq!(XTERM_COLORS[231], RgbColor::new(255, 255, 255));
        assert_eq!(XTERM_COLORS[232], RgbColor::new(8, 8, 8));
        assert_eq!(XTERM_COLORS[255], RgbColor::new(238, 238, 238));
        assert_eq!(GRAY_RAMP[12], 128);
    }

    #[test]
    fn test_web_colors() {
        assert_eq!(web_color("Silver"), Some(RgbColor::new(192, 192, 192)));
        assert_eq!(web_color("REBECCAPURPLE"), Some(RgbColor::new(102, 51, 153)));
        assert_eq!(web_color("Aqua"), web_color("Cyan"));

        for (index, (name, _)) in WEB_COLORS.iter().enumerate() {
            assert!(!name.is_empty());
            assert!(
                WEB_COLORS[..index].iter().all(|(other, _)| other != name),
                "duplicate {name}"
            );
        }
    }
}
