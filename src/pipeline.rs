//! Load, normalize, save
//!
//! The run is a straight line: any error ends it, and the output file is
//! only written once normalization has succeeded.

use log::{debug, info, warn};

use crate::cli::Args;
use crate::display::{Checkpoint, PipelineObserver};
use crate::error::NormalizeError;
use crate::image::{dimensions_of, load_rgb, normalize_image, save_rgb};
use crate::types::NormalizationReport;

/// Normalize `args.input` into `args.output`
///
/// # Errors
///
/// Any [`NormalizeError`]; observer failures are logged and ignored
pub fn run(
    args: &Args,
    observer: &mut dyn PipelineObserver,
) -> Result<NormalizationReport, NormalizeError> {
    info!("Opening input file {}", args.input.display());
    let mut rgb = load_rgb(&args.input)?;

    info!(
        "Image {} consists of 3 channels and {} pixels",
        args.input.display(),
        dimensions_of(&rgb)
    );
    notify(observer, Checkpoint::Loaded, &rgb);

    let report = normalize_image(&mut rgb)?;
    for (channel, range) in report.ranges.iter() {
        debug!("{channel}: {range}");
    }
    debug!("shared domain: {}", report.domain);

    notify(observer, Checkpoint::Normalized, &rgb);

    save_rgb(&rgb, &args.output)?;
    info!("Wrote {}", args.output.display());

    Ok(report)
}

fn notify(observer: &mut dyn PipelineObserver, checkpoint: Checkpoint, rgb: &image::RgbImage) {
    if let Err(e) = observer.observe(checkpoint, rgb) {
        warn!("{e:#}");
    }
}
