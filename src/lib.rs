//! # rotfreq - letter frequencies and Caesar rotation
//!
//! A small toolkit for classical cryptanalysis exercises:
//! count how often each letter occurs in a text (or in the body text of a
//! PDF), encrypt and decrypt files with a Caesar rotation, and compare the
//! letter distributions before and after.
//!
//! ## Example Usage
//!
//! ```rust
//! use rotfreq::{rotate_text, SubstitutionTable};
//!
//! let table = SubstitutionTable::new(13, false);
//! let secret = rotate_text("Hello, World!", &table);
//! assert_eq!(secret, "Uryyb, Jbeyq!");
//!
//! let back = rotate_text(&secret, &SubstitutionTable::new(13, true));
//! assert_eq!(back, "Hello, World!");
//! ```
//!
//! ## Modules
//!
//! - [`text`]: Letter extraction and frequency maps
//! - [`cipher`]: Substitution tables, text rotation, file pipeline, frequency analysis
//! - [`pdf`]: Letter counting over positioned text fragments from PDF pages
//! - [`chart`]: Plain-text bar charts
//! - [`config`]: Optional TOML settings

/// Number of letters in the Latin alphabet.
pub const ALPHABET_LEN: usize = 26;

pub mod chart;
pub mod cipher;
pub mod config;
pub mod pdf;
pub mod text;

// Re-export commonly used types at the crate root
pub use cipher::{
    caesar_cipher, caesar_decipher, estimate_rotation, normalize_rotation, rotate_text,
    transform_file, CipherError, PipelineReport, SubstitutionTable,
};
pub use config::{ConfigError, Settings};
pub use pdf::{count_pdf_letters, FragmentDocument, FragmentSource, PageWindow, PdfError, TextFragment};
pub use text::{is_word_char, letters_count, letters_in_file, normalize_letters, FrequencyMap, Letters};
