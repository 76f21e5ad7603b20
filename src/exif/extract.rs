use super::tags::{RequiredTag, TagSource, TagValue};
use crate::apex::{self, ShutterRangePolicy};
use crate::caption::ShotInfo;
use crate::error::{CaptionError, Result};

/// Build a [`ShotInfo`] from decoded tags.
///
/// All required tags are checked for presence before any value is converted.
/// APEX values are rounded to whole stops (ties away from zero) before lookup.
pub fn extract_shot_info<S: TagSource + ?Sized>(
    tags: &S,
    shutter_policy: ShutterRangePolicy,
) -> Result<ShotInfo> {
    if let Some(missing) = RequiredTag::ALL.into_iter().find(|t| tags.get(*t).is_none()) {
        return Err(CaptionError::MissingTag(missing));
    }

    let camera_model = text(tags, RequiredTag::Model)?;
    let lens_model = text(tags, RequiredTag::LensModel)?;
    let focal_length_mm = focal_length(tags)?;

    let aperture_apex = apex_stop(tags, RequiredTag::ApertureValue)?;
    let aperture = apex::aperture_from_apex(aperture_apex);

    let shutter_apex = apex_stop(tags, RequiredTag::ShutterSpeedValue)?;
    let shutter_speed = apex::shutter_speed_from_apex(shutter_apex);
    if shutter_speed.is_empty() {
        match shutter_policy {
            ShutterRangePolicy::Preserve => {
                log::warn!("Shutter APEX {shutter_apex} has no standard label; leaving it blank")
            }
            ShutterRangePolicy::Reject => {
                return Err(CaptionError::conversion(
                    RequiredTag::ShutterSpeedValue,
                    format!("APEX {shutter_apex} is outside the -5..=13 stop range"),
                ));
            }
        }
    }

    let iso = require(tags, RequiredTag::ISOSpeedRatings)?.to_string();

    Ok(ShotInfo {
        camera_model,
        lens_model,
        focal_length_mm,
        aperture,
        shutter_speed,
        iso,
    })
}

fn require<S: TagSource + ?Sized>(tags: &S, tag: RequiredTag) -> Result<&TagValue> {
    tags.get(tag).ok_or(CaptionError::MissingTag(tag))
}

fn text<S: TagSource + ?Sized>(tags: &S, tag: RequiredTag) -> Result<String> {
    match require(tags, tag)? {
        TagValue::Text(s) => Ok(s.clone()),
        other => Err(CaptionError::conversion(
            tag,
            format!("expected text, found {other}"),
        )),
    }
}

fn rational<S: TagSource + ?Sized>(tags: &S, tag: RequiredTag) -> Result<(i64, i64)> {
    match require(tags, tag)? {
        TagValue::Rational { den: 0, .. } => {
            Err(CaptionError::conversion(tag, "rational has a zero denominator"))
        }
        TagValue::Rational { num, den } => Ok((*num, *den)),
        other => Err(CaptionError::conversion(
            tag,
            format!("expected a rational, found {other}"),
        )),
    }
}

fn apex_stop<S: TagSource + ?Sized>(tags: &S, tag: RequiredTag) -> Result<i32> {
    let (num, den) = rational(tags, tag)?;
    let raw = num as f64 / den as f64;
    apex::round_apex(raw)
        .ok_or_else(|| CaptionError::conversion(tag, format!("APEX value {raw} is out of range")))
}

fn focal_length<S: TagSource + ?Sized>(tags: &S) -> Result<u32> {
    let (num, den) = rational(tags, RequiredTag::FocalLength)?;
    let mm = num / den;
    u32::try_from(mm)
        .ok()
        .filter(|mm| *mm > 0)
        .ok_or_else(|| {
            CaptionError::conversion(
                RequiredTag::FocalLength,
                format!("{num}/{den} is not a positive focal length"),
            )
        })
}
