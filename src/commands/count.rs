//! Count command - letter frequencies of a text file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rotfreq::chart::render_histogram;
use rotfreq::letters_count;

use super::{load_settings, print_counts, CommandExecutor};

/// Count letter frequencies in a text file.
///
/// Letters are lower-cased; digits and underscores count too, everything
/// else is ignored.
#[derive(Args, Debug)]
pub struct CountCommand {
    /// Text file to analyze
    pub file: PathBuf,

    /// Print counts as a JSON object
    #[arg(long, conflicts_with = "chart")]
    pub json: bool,

    /// Draw a bar chart of a-z instead of listing counts
    #[arg(long)]
    pub chart: bool,

    /// Settings file (defaults to ~/.rotfreq/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CommandExecutor for CountCommand {
    fn execute(&self) -> Result<()> {
        let settings = load_settings(self.config.as_deref())?;
        let counts = letters_count(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        if self.chart {
            print!("{}", render_histogram(&counts, settings.chart.width));
            return Ok(());
        }

        print_counts(&counts, self.json)
    }
}
