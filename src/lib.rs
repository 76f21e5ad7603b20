//! # exif-caption
//!
//! Read the exposure metadata embedded in a photo, turn its APEX-encoded values
//! into the notation photographers use, and draw the result as a caption onto a
//! canvas the size of the photo.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exif_caption::config::Config;
//! use exif_caption::pipeline::caption_image;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut config = Config::default();
//!     config.output.destination = Some("labeled.png".into());
//!
//!     let result = caption_image(Path::new("DSC_6846.jpg"), &config)?;
//!     println!("{}", result.caption); // NIKON D90, 50mm f/1.8, 50mm, F2, 1/125, ISO 200
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! ```rust,no_run
//! use exif_caption::annotate::{ImageAnnotator, RenderMode};
//! use exif_caption::apex::ShutterRangePolicy;
//! use exif_caption::exif::{extract_shot_info, read_tags};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let path = Path::new("DSC_6846.jpg");
//!
//!     // 1. Decode the required tags
//!     let tags = read_tags(path)?;
//!
//!     // 2. Resolve APEX values and format the caption
//!     let shot = extract_shot_info(&tags, ShutterRangePolicy::Preserve)?;
//!
//!     // 3. Draw it
//!     let source = image::open(path)?;
//!     let canvas = ImageAnnotator::new(RenderMode::Composite).annotate(&source, &shot.caption());
//!     canvas.save(Path::new("labeled.png"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`apex`]: APEX to shutter-speed / f-number conversion
//! - [`exif`]: tag decoding (nom-exif) and shot-info extraction
//! - [`caption`]: the [`ShotInfo`](caption::ShotInfo) record and its caption format
//! - [`annotate`]: caption rendering onto a raster canvas
//! - [`config`]: configuration loading/saving
//! - [`pipeline`]: the end-to-end flow for one file

pub mod annotate;
pub mod apex;
pub mod caption;
pub mod config;
pub mod error;
pub mod exif;
pub mod pipeline;

pub use error::CaptionError;
