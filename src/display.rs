use anyhow::{Result, anyhow};
use image::{DynamicImage, RgbImage};
use std::io::{IsTerminal, Write};
use viuer::{Config as ViuerConfig, print};

/// Points in the pipeline where an observer gets to look at the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    Loaded,
    Normalized,
}

impl Checkpoint {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Checkpoint::Loaded => "Input image",
            Checkpoint::Normalized => "Normalized image",
        }
    }
}

/// Side channel for showing intermediate images; never alters them
pub trait PipelineObserver {
    /// # Errors
    ///
    /// Implementations report their own failures; the pipeline only logs them
    fn observe(&mut self, checkpoint: Checkpoint, image: &RgbImage) -> Result<()>;
}

/// Headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPreview;

impl PipelineObserver for NoPreview {
    fn observe(&mut self, _checkpoint: Checkpoint, _image: &RgbImage) -> Result<()> {
        Ok(())
    }
}

/// Renders each checkpoint inline in the terminal
#[derive(Debug, Clone, Copy)]
pub struct TerminalPreview {
    pub width: u32,
}

impl Default for TerminalPreview {
    fn default() -> Self {
        Self { width: 48 }
    }
}

impl PipelineObserver for TerminalPreview {
    fn observe(&mut self, checkpoint: Checkpoint, image: &RgbImage) -> Result<()> {
        let is_tty = std::io::stdout().is_terminal();

        let config = ViuerConfig {
            width: Some(self.width),
            height: None,
            absolute_offset: false,
            use_kitty: is_tty,
            use_iterm: is_tty,
            use_sixel: is_tty,
            ..Default::default()
        };

        println!("{}", checkpoint.title());
        std::io::stdout().flush()
            .map_err(|e| anyhow!("Failed to flush stdout: {e}"))?;

        print(&DynamicImage::ImageRgb8(image.clone()), &config)
            .map_err(|e| anyhow!("Failed to display {}: {e}", checkpoint.title()))?;

        Ok(())
    }
}
