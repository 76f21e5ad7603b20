//! EXIF tag reading and shot-info extraction.
//!
//! - [`read_tags`]: decode the required tags from an image file via nom-exif
//! - [`extract_shot_info`]: resolve those tags into a displayable [`ShotInfo`](crate::caption::ShotInfo)

mod extract;
mod reader;
mod tags;

pub use extract::extract_shot_info;
pub use reader::{read_tags, read_tags_from_reader};
pub use tags::{RequiredTag, TagSet, TagSource, TagValue};
