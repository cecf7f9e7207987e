//! Applying substitution tables to text.

use super::table::SubstitutionTable;

/// Replaces every Latin letter in `text` with its counterpart in `table`.
///
/// Any other character (digits, punctuation, whitespace, non-Latin letters)
/// is copied unchanged, so the output has the same length as the input.
pub fn rotate_text(text: &str, table: &SubstitutionTable) -> String {
    text.chars().map(|c| table.get(c).unwrap_or(c)).collect()
}
