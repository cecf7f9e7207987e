//! Compare command - side-by-side frequencies and rotation estimate.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rotfreq::chart::render_comparison;
use rotfreq::{estimate_rotation, letters_count};

use super::{load_settings, CommandExecutor};

/// Compare the letter frequencies of a clear text and a cipher text.
///
/// Draws both a-z distributions side by side and reports the rotation
/// that best maps one onto the other.
#[derive(Args, Debug)]
pub struct CompareCommand {
    /// Reference (clear text) file
    pub plain: PathBuf,

    /// Encrypted file
    pub cipher: PathBuf,

    /// Maximum bar width (default from config)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Settings file (defaults to ~/.rotfreq/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CommandExecutor for CompareCommand {
    fn execute(&self) -> Result<()> {
        let settings = load_settings(self.config.as_deref())?;
        let width = self.width.unwrap_or(settings.chart.width);

        let plain = letters_count(&self.plain)
            .with_context(|| format!("Failed to read {}", self.plain.display()))?;
        let cipher = letters_count(&self.cipher)
            .with_context(|| format!("Failed to read {}", self.cipher.display()))?;

        print!(
            "{}",
            render_comparison(
                &self.plain.display().to_string(),
                &plain,
                &self.cipher.display().to_string(),
                &cipher,
                width,
            )
        );

        match estimate_rotation(&plain, &cipher) {
            Some(rot) => println!("\nEstimated rotation: {}", rot),
            None => println!("\nEstimated rotation: unknown (no letters to compare)"),
        }
        Ok(())
    }
}
