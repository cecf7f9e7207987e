//! PDF count command - letter frequencies of PDF body text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rotfreq::pdf::{fragments_in_window, FragmentSource};
use rotfreq::{count_pdf_letters, FragmentDocument, PageWindow};

use super::{load_settings, print_counts, CommandExecutor};

/// Count letter frequencies in a range of PDF pages.
///
/// Reads a JSON dump of positioned text fragments produced by a PDF text
/// extractor. Fragments outside the vertical band (y-min, y-max) are
/// skipped, which removes running headers and footers.
#[derive(Args, Debug)]
pub struct PdfCountCommand {
    /// JSON fragment dump: {"pages": [{"fragments": [{"text", "transform"}]}]}
    #[arg(short, long)]
    pub fragments: PathBuf,

    /// First page to include (zero-based)
    #[arg(long, default_value = "0")]
    pub page_start: usize,

    /// Page to stop before (exclusive); defaults to the last page
    #[arg(long)]
    pub page_stop: Option<usize>,

    /// Drop fragments at or below this vertical position (default from config)
    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,

    /// Drop fragments at or above this vertical position (default from config)
    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,

    /// Print counts as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Settings file (defaults to ~/.rotfreq/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output (shows the window and how many fragments were kept)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for PdfCountCommand {
    fn execute(&self) -> Result<()> {
        let settings = load_settings(self.config.as_deref())?;
        let document = FragmentDocument::from_file(&self.fragments).with_context(|| {
            format!("Failed to load fragments from {}", self.fragments.display())
        })?;

        let window = PageWindow::new(
            self.page_start,
            self.page_stop.unwrap_or_else(|| document.page_count()),
            self.y_min.unwrap_or(settings.pdf.y_min),
            self.y_max.unwrap_or(settings.pdf.y_max),
        );

        if self.verbose {
            eprintln!(
                "Pages {}..{} of {}, keeping {} < y < {}",
                window.page_start,
                window.page_stop,
                document.page_count(),
                window.y_min,
                window.y_max
            );
        }

        let counts = count_pdf_letters(&document, &window).context("Failed to count letters")?;

        if self.verbose {
            let kept = fragments_in_window(&document, &window)
                .context("Failed to select fragments")?;
            let total = window
                .pages()
                .map(|index| document.page_fragments(index).map(|page| page.len()))
                .sum::<Result<usize, _>>()
                .context("Failed to read page fragments")?;
            eprintln!("Kept {} of {} fragments", kept.len(), total);
        }

        print_counts(&counts, self.json)
    }
}
