use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use exif_caption::annotate::RenderMode;
use exif_caption::{config, pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "exif-caption",
    version,
    about = "Caption a photo with its camera, lens, focal length, aperture, shutter speed and ISO"
)]
struct Cli {
    /// Image file to caption (default: `source` from the config file)
    #[arg(value_name = "IMAGE")]
    source: Option<PathBuf>,

    /// Path to config file (default: config.json next to binary)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the annotated image here (format follows the extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Draw the caption over the source pixels instead of a blank canvas
    #[arg(long)]
    composite: bool,

    /// Fail when the shutter speed falls outside 30s..1/8000s
    #[arg(long)]
    strict: bool,

    /// Initialize a default config.json and exit
    #[arg(long)]
    init: bool,

    /// Print the decoded shot info as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Handle --init
    if cli.init {
        let config = config::Config::default();
        let path = cli.config.as_deref();
        config.save(path)?;
        let save_path = match path {
            Some(p) => p.to_path_buf(),
            None => config::Config::config_path()?,
        };
        println!("Default config written to {}", save_path.display());
        return Ok(());
    }

    // Load config, then apply command-line overrides
    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        config.source = Some(source);
    }
    if let Some(output) = cli.output {
        config.output.destination = Some(output);
    }
    if cli.composite {
        config.render.mode = RenderMode::Composite;
    }
    if cli.strict {
        config.conversion.strict_shutter_range = true;
    }

    let Some(source) = config.source.clone() else {
        anyhow::bail!("No input image specified. Pass a path or set `source` in the config file.");
    };

    log::debug!("Captioning {}", source.display());
    let result = pipeline::caption_image(&source, &config)
        .with_context(|| format!("Failed to caption {}", source.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result.shot)?);
    }

    if result.written_to.is_none() {
        log::debug!(
            "Canvas kept in memory ({}x{}); pass --output to write it",
            result.canvas.width(),
            result.canvas.height()
        );
    }

    Ok(())
}
