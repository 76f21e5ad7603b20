use std::path::{Path, PathBuf};

use crate::annotate::{AnnotatedCanvas, ImageAnnotator};
use crate::caption::ShotInfo;
use crate::config::Config;
use crate::error::{CaptionError, Result};
use crate::exif;

/// The outcome of captioning one image.
#[derive(Debug)]
pub struct CaptionResult {
    pub path: PathBuf,
    pub shot: ShotInfo,
    pub caption: String,
    pub canvas: AnnotatedCanvas,
    /// Set when the canvas was encoded to `output.destination`.
    pub written_to: Option<PathBuf>,
}

/// Read the EXIF block of `path` and resolve it into a [`ShotInfo`].
pub fn decode_shot_info(path: &Path, config: &Config) -> Result<ShotInfo> {
    let tags = exif::read_tags(path)?;
    exif::extract_shot_info(&tags, config.conversion.shutter_policy())
}

/// Decode the image at `path` and draw `caption` onto a canvas of the same size.
pub fn annotate_file(path: &Path, caption: &str, config: &Config) -> Result<AnnotatedCanvas> {
    let bytes = std::fs::read(path).map_err(|source| CaptionError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let source = image::load_from_memory(&bytes)?;
    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        source.width(),
        source.height()
    );
    Ok(ImageAnnotator::new(config.render.mode).annotate(&source, caption))
}

/// Run the whole flow for one image: extract, convert, format, annotate and
/// optionally encode.
///
/// Stops at the first error; metadata problems surface before the image
/// itself is decoded.
///
/// # Example
///
/// ```rust,no_run
/// use exif_caption::config::Config;
/// use exif_caption::pipeline::caption_image;
/// use std::path::Path;
///
/// let config = Config::default();
/// let result = caption_image(Path::new("DSC_6846.jpg"), &config).unwrap();
/// println!("{}", result.caption);
/// ```
pub fn caption_image(path: &Path, config: &Config) -> Result<CaptionResult> {
    let shot = decode_shot_info(path, config)?;
    let caption = shot.caption();
    log::info!("{caption}");

    let canvas = annotate_file(path, &caption, config)?;

    let written_to = match config.output.destination.as_deref() {
        Some(destination) => {
            canvas.save(destination)?;
            Some(destination.to_path_buf())
        }
        None => None,
    };

    Ok(CaptionResult {
        path: path.to_path_buf(),
        shot,
        caption,
        canvas,
        written_to,
    })
}
