//! Letter frequency counting.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use super::letters::letters_in_file;
use crate::ALPHABET_LEN;

/// Occurrence count per normalized letter.
///
/// Letters that never occurred are absent and report a count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<char, usize>,
}

impl FrequencyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from a fallible letter stream, stopping at the first error.
    pub fn try_from_letters<I>(letters: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = io::Result<char>>,
    {
        let mut map = Self::new();
        for letter in letters {
            map.add(letter?);
        }
        Ok(map)
    }

    /// Records one occurrence of `letter`.
    pub fn add(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }

    /// Count for `letter`; zero if it never occurred.
    pub fn get(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct letters seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(letter, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }

    /// All entries sorted by letter.
    pub fn sorted(&self) -> Vec<(char, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|(c, _)| *c);
        entries
    }

    /// Counts restricted to the lowercase Latin letters, indexed `a` = 0.
    pub fn alphabet_counts(&self) -> [usize; ALPHABET_LEN] {
        let mut counts = [0; ALPHABET_LEN];
        for (i, slot) in counts.iter_mut().enumerate() {
            *slot = self.get((b'a' + i as u8) as char);
        }
        counts
    }
}

impl FromIterator<char> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl Extend<char> for FrequencyMap {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for letter in iter {
            self.add(letter);
        }
    }
}

/// Counts the normalized letters of the file at `path`.
pub fn letters_count(path: impl AsRef<Path>) -> io::Result<FrequencyMap> {
    FrequencyMap::try_from_letters(letters_in_file(path)?)
}
