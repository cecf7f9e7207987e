//! Text processing for letter statistics.
//!
//! This module provides:
//! - Word-character classification and normalization
//! - Lazy, line-by-line letter streams over files
//! - Letter frequency maps

pub mod frequency;
pub mod letters;

pub use frequency::{letters_count, FrequencyMap};
pub use letters::{is_word_char, letters_in_file, normalize_letters, Letters};
