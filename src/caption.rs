use serde::Serialize;
use std::fmt;

/// Exposure and identity details of one shot, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotInfo {
    pub camera_model: String,
    pub lens_model: String,
    pub focal_length_mm: u32,
    /// F-number as a decimal, without the leading `F`.
    pub aperture: String,
    /// `1/125`-style fraction, or whole seconds for long exposures.
    pub shutter_speed: String,
    pub iso: String,
}

impl ShotInfo {
    /// The one-line caption, e.g. `NIKON D90, 50mm f/1.8, 50mm, F2, 1/125, ISO 200`.
    pub fn caption(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ShotInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}mm, F{}, {}, ISO {}",
            self.camera_model,
            self.lens_model,
            self.focal_length_mm,
            self.aperture,
            self.shutter_speed,
            self.iso
        )
    }
}
