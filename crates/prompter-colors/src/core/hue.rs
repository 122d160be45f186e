/// Wrap the hue in degrees into `0..360`.
#[inline]
pub(crate) fn normalize_hue(hue: i32) -> u16 {
    hue.rem_euclid(360) as u16
}

/// Rotate the hue by the signed number of degrees. Any `i32` is a valid
/// rotation.
#[inline]
pub(crate) fn shift_hue(hue: u16, degrees: i32) -> u16 {
    normalize_hue(hue as i32 + degrees.rem_euclid(360))
}

/// Compute the signed, shortest rotation from one hue to another.
///
/// A positive result rotates clockwise, i.e., with increasing hue, and a
/// negative result rotates counter-clockwise. When both directions are equally
/// long, the rotation is clockwise.
pub(crate) fn hue_distance(from: u16, to: u16) -> i32 {
    let counter_clockwise = (from as i32 - to as i32).rem_euclid(360);
    let clockwise = (to as i32 - from as i32).rem_euclid(360);

    if counter_clockwise < clockwise {
        -counter_clockwise
    } else {
        clockwise
    }
}

#[cfg(test)]
mod test {
    use super::{hue_distance, normalize_hue, shift_hue};

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_hue(0), 0);
        assert_eq!(normalize_hue(360), 0);
        assert_eq!(normalize_hue(725), 5);
        assert_eq!(normalize_hue(-30), 330);
        assert_eq!(shift_hue(350, 20), 10);
        assert_eq!(shift_hue(10, -20), 350);
    }

    #[test]
    fn test_extreme_shifts() {
        assert_eq!(shift_hue(10, i32::MAX), 137);
        assert_eq!(shift_hue(10, i32::MIN), 242);
        assert_eq!(shift_hue(359, i32::MAX), 126);
        assert_eq!(shift_hue(0, i32::MIN + 1), 233);
    }

    #[test]
    fn test_distance() {
        assert_eq!(hue_distance(10, 350), -20);
        assert_eq!(hue_distance(350, 10), 20);
        assert_eq!(hue_distance(90, 300), -150);
        assert_eq!(hue_distance(0, 180), 180);
        assert_eq!(hue_distance(180, 0), 180);
        assert_eq!(hue_distance(42, 42), 0);

        for from in (0..360).step_by(7) {
            for to in (0..360).step_by(11) {
                let distance = hue_distance(from, to);
                assert!((-180..=180).contains(&distance));
                assert_eq!(shift_hue(from, distance), to);
            }
        }
    }
}
