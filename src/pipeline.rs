use std::path::PathBuf;

use crate::assets::decode::load_image;
use crate::config::ConvertConfig;
use crate::encode::sink::DocumentSink;
use crate::foundation::error::PixelResult;

/// Outcome of a successful [`convert`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertReport {
    /// Source image path.
    pub image: PathBuf,
    /// Written document path.
    pub output: PathBuf,
    /// Image (and container) width in pixels.
    pub width: u32,
    /// Image (and container) height in pixels.
    pub height: u32,
    /// Number of gradient stops written; always `width * height`.
    pub stops: u64,
}

/// Decode `cfg.image` and write its gradient document to `cfg.output`.
///
/// The output file is only created after the image decoded successfully, so open and decode
/// failures never leave a file behind. A write failure may leave a truncated one.
#[tracing::instrument(skip(cfg), fields(image = %cfg.image.display(), output = %cfg.output.display()))]
pub fn convert(cfg: &ConvertConfig) -> PixelResult<ConvertReport> {
    let grid = load_image(&cfg.image, cfg.alpha)?;

    let sink = DocumentSink::create(&cfg.output)?;
    let stats = sink.write_grid(&grid)?;
    tracing::debug!(stops = stats.stops, "document written");

    Ok(ConvertReport {
        image: cfg.image.clone(),
        output: cfg.output.clone(),
        width: stats.width,
        height: stats.height,
        stops: stats.stops,
    })
}
