use clap::Parser;
use std::path::PathBuf;

/// Stretch the RGB channels of an image to 0-255 using one shared scale
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input image file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Output image file, format taken from the extension
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Log progress and channel ranges
    #[arg(short, long)]
    pub verbose: bool,

    /// Print channel ranges and the shared domain after normalizing
    #[arg(short = 'm', long = "statistics")]
    pub statistics: bool,

    /// Show the input and normalized images in the terminal
    #[arg(short, long)]
    pub preview: bool,
}

impl Args {
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
