use std::path::PathBuf;

use crate::exif::RequiredTag;

/// Errors raised while turning an image file into a caption.
///
/// Every variant is fatal for the current invocation: the pipeline stops at the
/// first error and never produces a partial caption.
#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    /// The source file could not be opened or read.
    #[error("failed to read {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source has no EXIF block, or the block cannot be parsed.
    #[error("no parseable EXIF metadata: {0}")]
    MalformedMetadata(String),

    /// One of the required tags is absent from the EXIF block.
    #[error("required tag {0} is missing")]
    MissingTag(RequiredTag),

    /// A tag is present but its value cannot be converted.
    #[error("cannot convert {tag}: {reason}")]
    ValueConversion { tag: RequiredTag, reason: String },

    /// Decoding the source image or encoding the canvas failed.
    #[error("image codec error")]
    Image(#[from] image::ImageError),
}

impl CaptionError {
    pub(crate) fn conversion(tag: RequiredTag, reason: impl Into<String>) -> Self {
        Self::ValueConversion {
            tag,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CaptionError>;
