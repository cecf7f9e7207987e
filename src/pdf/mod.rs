//! Letter counting over positioned text extracted from PDF pages.
//!
//! Parsing PDFs is left to an external extractor. Anything that can hand out
//! per-page [`TextFragment`]s implements [`FragmentSource`]; the
//! [`FragmentDocument`] type reads such fragments from a JSON dump.
//!
//! A [`PageWindow`] selects a range of pages and a vertical band on each
//! page, which is how running headers and footers are excluded.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::{normalize_letters, FrequencyMap};

/// Errors that can occur while reading fragments.
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid fragment dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange { page: usize, page_count: usize },
}

/// A run of text with the text matrix it was drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    /// `[a, b, c, d, e, f]`; `e`/`f` are the horizontal/vertical offsets.
    pub transform: [f64; 6],
}

impl TextFragment {
    /// Creates a fragment drawn at vertical position `y` with an identity scale.
    pub fn at(text: impl Into<String>, y: f64) -> Self {
        Self {
            text: text.into(),
            transform: [1.0, 0.0, 0.0, 1.0, 0.0, y],
        }
    }

    /// Vertical coordinate of the fragment (PDF user space, origin at the bottom).
    pub fn y(&self) -> f64 {
        self.transform[5]
    }
}

/// A page-addressable source of positioned text.
pub trait FragmentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Fragments on page `index` (zero-based), in drawing order.
    fn page_fragments(&self, index: usize) -> Result<Vec<TextFragment>, PdfError>;
}

/// Pages `[page_start, page_stop)` and the open vertical band `(y_min, y_max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageWindow {
    pub page_start: usize,
    pub page_stop: usize,
    pub y_min: f64,
    pub y_max: f64,
}

impl PageWindow {
    pub fn new(page_start: usize, page_stop: usize, y_min: f64, y_max: f64) -> Self {
        Self {
            page_start,
            page_stop,
            y_min,
            y_max,
        }
    }

    /// True if `fragment` lies strictly inside the vertical band.
    pub fn contains(&self, fragment: &TextFragment) -> bool {
        let y = fragment.y();
        y > self.y_min && y < self.y_max
    }

    /// Selected page indices; empty when `page_start >= page_stop`.
    pub fn pages(&self) -> std::ops::Range<usize> {
        self.page_start..self.page_stop.max(self.page_start)
    }
}

/// Collects the fragments inside `window`, page by page.
pub fn fragments_in_window<S: FragmentSource + ?Sized>(
    source: &S,
    window: &PageWindow,
) -> Result<Vec<TextFragment>, PdfError> {
    let page_count = source.page_count();
    if window.page_stop > page_count && window.page_start < window.page_stop {
        return Err(PdfError::PageOutOfRange {
            page: window.page_stop - 1,
            page_count,
        });
    }

    let mut kept = Vec::new();
    for page in window.pages() {
        kept.extend(
            source
                .page_fragments(page)?
                .into_iter()
                .filter(|fragment| window.contains(fragment)),
        );
    }
    Ok(kept)
}

/// Normalized letters of every fragment inside `window`, in page order.
pub fn letters_in_pages<S: FragmentSource + ?Sized>(
    source: &S,
    window: &PageWindow,
) -> Result<Vec<char>, PdfError> {
    let fragments = fragments_in_window(source, window)?;
    Ok(fragments
        .iter()
        .flat_map(|fragment| normalize_letters(&fragment.text))
        .collect())
}

/// Counts the letters inside `window`.
pub fn count_pdf_letters<S: FragmentSource + ?Sized>(
    source: &S,
    window: &PageWindow,
) -> Result<FrequencyMap, PdfError> {
    Ok(letters_in_pages(source, window)?.into_iter().collect())
}

/// Fragments of one page in a [`FragmentDocument`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageFragments {
    #[serde(default)]
    pub fragments: Vec<TextFragment>,
}

/// An in-memory document of positioned fragments, usually loaded from JSON:
///
/// `{"pages": [{"fragments": [{"text": "Title", "transform": [1, 0, 0, 1, 72, 780]}]}]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FragmentDocument {
    #[serde(default)]
    pub pages: Vec<PageFragments>,
}

impl FragmentDocument {
    /// Parses a JSON fragment dump.
    pub fn from_json(json: &str) -> Result<Self, PdfError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON fragment dump from `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PdfError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes the document back to pretty JSON.
    pub fn to_json(&self) -> Result<String, PdfError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FragmentSource for FragmentDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_fragments(&self, index: usize) -> Result<Vec<TextFragment>, PdfError> {
        self.pages
            .get(index)
            .map(|page| page.fragments.clone())
            .ok_or(PdfError::PageOutOfRange {
                page: index,
                page_count: self.pages.len(),
            })
    }
}
