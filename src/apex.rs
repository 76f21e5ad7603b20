//! APEX (Additive System of Photographic Exposure) conversions.
//!
//! EXIF stores shutter speed and aperture as logarithmic APEX values:
//! `Tv = -log2(t)` for an exposure time `t` and `Av = 2 * log2(N)` for an
//! f-number `N`. These helpers turn whole APEX stops back into the notation
//! printed on cameras.

use serde::{Deserialize, Serialize};

/// Conventional shutter-speed labels for whole stops, from 30s (`Tv = -5`) to 1/8000s (`Tv = 13`).
const SHUTTER_SPEEDS: [(i32, &str); 19] = [
    (-5, "30"),
    (-4, "15"),
    (-3, "8"),
    (-2, "4"),
    (-1, "2"),
    (0, "1"),
    (1, "1/2"),
    (2, "1/4"),
    (3, "1/8"),
    (4, "1/15"),
    (5, "1/30"),
    (6, "1/60"),
    (7, "1/125"),
    (8, "1/250"),
    (9, "1/500"),
    (10, "1/1000"),
    (11, "1/2000"),
    (12, "1/4000"),
    (13, "1/8000"),
];

/// What to do with a shutter APEX value that has no conventional label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShutterRangePolicy {
    /// Keep going with an empty shutter-speed label.
    #[default]
    Preserve,
    /// Treat the value as a conversion error.
    Reject,
}

/// The display label for a whole-stop shutter APEX value.
///
/// Returns an empty string outside `-5..=13`.
pub fn shutter_speed_from_apex(apex: i32) -> String {
    SHUTTER_SPEEDS
        .iter()
        .find(|(stop, _)| *stop == apex)
        .map(|(_, label)| label.to_string())
        .unwrap_or_default()
}

/// The f-number `2^(apex/2)` for an aperture APEX value.
pub fn aperture_from_apex(apex: i32) -> String {
    let f_number = (f64::from(apex) / 2.0).exp2();
    format!("{f_number}")
}

/// Round a raw APEX value to the nearest whole stop, ties away from zero.
///
/// Returns `None` for values that are not finite or do not fit an `i32`.
pub fn round_apex(raw: f64) -> Option<i32> {
    let rounded = raw.round();
    if rounded.is_finite() && rounded >= f64::from(i32::MIN) && rounded <= f64::from(i32::MAX) {
        Some(rounded as i32)
    } else {
        None
    }
}
