//! Letter extraction from text sources.
//!
//! A "word character" is anything alphanumeric plus the underscore. Extraction
//! lower-cases every word character and drops everything else (whitespace,
//! punctuation, line breaks).

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

/// Returns true if `c` belongs to the word-character class.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Yields the normalized letters of `text` in order.
///
/// Lower-casing can expand one character into several (e.g. 'İ'); only the
/// parts that are still word characters are kept.
pub fn normalize_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .filter(|c| is_word_char(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| is_word_char(*c))
}

/// Lazy, single-pass stream of normalized letters read line by line.
///
/// Only one line is held in memory at a time. Read errors are yielded as
/// `Err` items; the stream ends after the first error.
pub struct Letters<R> {
    lines: Lines<R>,
    pending: std::vec::IntoIter<char>,
    failed: bool,
}

impl<R: BufRead> Letters<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new().into_iter(),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for Letters<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(letter) = self.pending.next() {
                return Some(Ok(letter));
            }
            if self.failed {
                return None;
            }

            match self.lines.next()? {
                Ok(line) => {
                    self.pending = normalize_letters(&line).collect::<Vec<_>>().into_iter();
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Opens `path` and returns the stream of its normalized letters.
///
/// Each call re-opens the file, so calling again restarts the sequence.
pub fn letters_in_file(path: impl AsRef<Path>) -> io::Result<Letters<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(Letters::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_is_word_char() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(is_word_char('é'));

        assert!(!is_word_char(' '));
        assert!(!is_word_char('.'));
        assert!(!is_word_char(','));
        assert!(!is_word_char('\n'));
        assert!(!is_word_char('-'));
    }

    #[test]
    fn test_normalize_letters_drops_punctuation() {
        let letters: String = normalize_letters("Mr. Jock, TV!").collect();
        assert_eq!(letters, "mrjocktv");
    }

    #[test]
    fn test_normalize_letters_keeps_digits_and_underscore() {
        let letters: String = normalize_letters("Page_42 (B)").collect();
        assert_eq!(letters, "page_42b");
    }

    #[test]
    fn test_normalize_letters_unicode() {
        let letters: String = normalize_letters("ÁÉ Ñ").collect();
        assert_eq!(letters, "áéñ");

        // 'İ' lowercases to 'i' + combining dot; only 'i' is a word character
        let letters: String = normalize_letters("İ").collect();
        assert_eq!(letters, "i");
    }

    #[test]
    fn test_letters_flatten_across_lines() {
        let reader = Cursor::new("Ab\n\nc, D\n");
        let letters: Vec<char> = Letters::new(reader).map(|l| l.unwrap()).collect();
        assert_eq!(letters, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_letters_empty_source() {
        let reader = Cursor::new("");
        assert_eq!(Letters::new(reader).count(), 0);

        let reader = Cursor::new("... ,,, \n !!\n");
        assert_eq!(Letters::new(reader).count(), 0);
    }

    #[test]
    fn test_letters_invalid_utf8_yields_error() {
        let reader = Cursor::new(vec![b'a', b'\n', 0xff, 0xfe, b'\n', b'b']);
        let items: Vec<_> = Letters::new(reader).collect();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), &'a');
        assert_eq!(items[1].as_ref().unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_letters_in_file_restarts_on_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.txt");
        std::fs::write(&path, "Hi there\n").unwrap();

        let first: String = letters_in_file(&path).unwrap().map(|l| l.unwrap()).collect();
        let second: String = letters_in_file(&path).unwrap().map(|l| l.unwrap()).collect();
        assert_eq!(first, "hithere");
        assert_eq!(first, second);
    }

    #[test]
    fn test_letters_in_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = letters_in_file(dir.path().join("missing.txt"));
        assert_eq!(result.err().unwrap().kind(), io::ErrorKind::NotFound);
    }
}
