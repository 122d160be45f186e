mod conversion;
mod hue;
mod string;

// conversion
pub(crate) use conversion::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, to_percent};

// hue
pub(crate) use hue::{hue_distance, normalize_hue, shift_hue};

// string
pub(crate) use string::parse;
