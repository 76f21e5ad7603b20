use nom_exif::*;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use super::tags::{RequiredTag, TagSet, TagValue};
use crate::error::{CaptionError, Result};

/// Read the required tags from an image file.
///
/// Tags missing from the EXIF block are left out of the returned set; the
/// extractor decides what to do about them.
pub fn read_tags(path: &Path) -> Result<TagSet> {
    let file = File::open(path).map_err(|source| CaptionError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Reading EXIF from {}", path.display());
    read_tags_from_reader(file)
}

/// Read the required tags from any seekable byte stream holding an image.
pub fn read_tags_from_reader<R: Read + Seek>(reader: R) -> Result<TagSet> {
    let ms = MediaSource::seekable(reader)
        .map_err(|e| CaptionError::MalformedMetadata(e.to_string()))?;

    if !ms.has_exif() {
        return Err(CaptionError::MalformedMetadata(
            "source format carries no EXIF block".to_string(),
        ));
    }

    let mut parser = MediaParser::new();
    let iter: ExifIter = parser
        .parse(ms)
        .map_err(|e| CaptionError::MalformedMetadata(e.to_string()))?;
    let exif: Exif = iter.into();

    let mut tags = TagSet::new();
    for tag in RequiredTag::ALL {
        // Exif sub-IFD entries are reported under IFD0.
        match exif.get_by_ifd_tag_code(0, tag.code()) {
            Some(entry) => {
                let value = entry_to_tag_value(entry);
                log::debug!("  {tag} = {value}");
                tags.insert(tag, value);
            }
            None => log::debug!("  {tag} not present"),
        }
    }

    Ok(tags)
}

/// Convert a nom-exif entry into a library-independent value.
fn entry_to_tag_value(entry: &EntryValue) -> TagValue {
    match entry {
        EntryValue::Text(s) => TagValue::text(s),
        EntryValue::URational(r) => TagValue::rational(i64::from(r.0), i64::from(r.1)),
        EntryValue::IRational(r) => TagValue::rational(i64::from(r.0), i64::from(r.1)),
        EntryValue::U16(n) => TagValue::Integer(i64::from(*n)),
        EntryValue::U32(n) => TagValue::Integer(i64::from(*n)),
        other => TagValue::text(&other.to_string()),
    }
}
