//! Caesar substitution tables.
//!
//! A table is a permutation of the 52 Latin letters that never crosses case:
//! lowercase letters map to lowercase letters and uppercase to uppercase.

use crate::ALPHABET_LEN;

/// Number of letters covered by a table (26 lowercase + 26 uppercase).
pub const TABLE_SIZE: usize = 2 * ALPHABET_LEN;

/// Reduces any rotation amount into `[0, 26)` using floored modulo.
///
/// `-3` becomes `23`, `49` becomes `23`, `26` becomes `0`.
pub fn normalize_rotation(amount: i64) -> u8 {
    amount.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Position of a Latin letter in table order: `a..z` = 0..26, `A..Z` = 26..52.
fn slot(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        'A'..='Z' => Some(ALPHABET_LEN + c as usize - 'A' as usize),
        _ => None,
    }
}

/// Letter stored at a table slot.
fn letter(slot: usize) -> char {
    if slot < ALPHABET_LEN {
        (b'a' + slot as u8) as char
    } else {
        (b'A' + (slot - ALPHABET_LEN) as u8) as char
    }
}

/// Character-to-character mapping for a Caesar rotation.
///
/// Characters outside the Latin alphabet have no entry and [`get`](Self::get)
/// returns `None` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubstitutionTable {
    /// Target letter offset within its case, indexed by source slot.
    targets: [u8; TABLE_SIZE],
}

impl SubstitutionTable {
    /// Builds the table for rotating by `amount` positions.
    ///
    /// The rotated alphabet is the plain alphabet shifted left by
    /// `amount mod 26`, so with a rotation of 3 `a` maps to `d`. When
    /// `reversed` is set the mapping is inverted: the same amount then
    /// produces the table that undoes the forward rotation.
    pub fn new(amount: i64, reversed: bool) -> Self {
        let shift = normalize_rotation(amount) as usize;
        let mut targets = [0u8; TABLE_SIZE];

        for i in 0..ALPHABET_LEN {
            let rotated = (i + shift) % ALPHABET_LEN;
            let (from, to) = if reversed { (rotated, i) } else { (i, rotated) };

            targets[from] = to as u8;
            targets[ALPHABET_LEN + from] = to as u8;
        }

        Self { targets }
    }

    /// Encryption table for `amount`.
    pub fn encrypt(amount: i64) -> Self {
        Self::new(amount, false)
    }

    /// Decryption table for `amount`.
    pub fn decrypt(amount: i64) -> Self {
        Self::new(amount, true)
    }

    /// The identity table.
    pub fn identity() -> Self {
        Self::new(0, false)
    }

    /// Mapped counterpart of `c`, or `None` if `c` is not a Latin letter.
    pub fn get(&self, c: char) -> Option<char> {
        let from = slot(c)?;
        let case_base = from - from % ALPHABET_LEN;
        Some(letter(case_base + self.targets[from] as usize))
    }

    /// Effective forward shift of this table, in `[0, 26)`.
    pub fn shift(&self) -> u8 {
        self.targets[0]
    }

    /// True if every letter maps to itself.
    pub fn is_identity(&self) -> bool {
        self.shift() == 0
    }

    /// Table that undoes this one.
    pub fn inverse(&self) -> Self {
        Self::new(self.shift() as i64, true)
    }

    /// All `(from, to)` pairs, lowercase first.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        (0..TABLE_SIZE).map(move |from| {
            let c = letter(from);
            (c, self.get(c).unwrap_or(c))
        })
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rotation() {
        assert_eq!(normalize_rotation(0), 0);
        assert_eq!(normalize_rotation(3), 3);
        assert_eq!(normalize_rotation(-3), 23);
        assert_eq!(normalize_rotation(26), 0);
        assert_eq!(normalize_rotation(-26), 0);
        assert_eq!(normalize_rotation(49), 23);
        assert_eq!(normalize_rotation(-53), 25);
        assert_eq!(normalize_rotation(i64::MIN), normalize_rotation(i64::MIN % 26));
    }

    #[test]
    fn test_forward_mapping() {
        let table = SubstitutionTable::new(3, false);
        assert_eq!(table.get('a'), Some('d'));
        assert_eq!(table.get('x'), Some('a'));
        assert_eq!(table.get('A'), Some('D'));
        assert_eq!(table.get('Z'), Some('C'));
        assert_eq!(table.shift(), 3);
    }

    #[test]
    fn test_reversed_mapping() {
        let table = SubstitutionTable::new(3, true);
        assert_eq!(table.get('d'), Some('a'));
        assert_eq!(table.get('a'), Some('x'));
        assert_eq!(table.get('C'), Some('Z'));
        assert_eq!(table.shift(), 23);
    }

    #[test]
    fn test_non_letters_absent() {
        let table = SubstitutionTable::new(5, false);
        for c in ['1', ' ', '.', '\n', 'é', 'ß', '_'] {
            assert_eq!(table.get(c), None);
        }
    }

    #[test]
    fn test_identity_rotations() {
        for amount in [0, 26, -26, 52, -520] {
            let table = SubstitutionTable::new(amount, false);
            assert!(table.is_identity());
            assert_eq!(table, SubstitutionTable::identity());
            assert!(table.pairs().all(|(from, to)| from == to));
        }
    }

    #[test]
    fn test_equivalent_rotations() {
        assert_eq!(SubstitutionTable::new(49, false), SubstitutionTable::new(23, false));
        assert_eq!(SubstitutionTable::new(-3, false), SubstitutionTable::new(23, false));
        assert_eq!(SubstitutionTable::new(3, true), SubstitutionTable::new(-3, false));
    }

    #[test]
    fn test_case_preserved_and_bijective() {
        let table = SubstitutionTable::new(11, false);
        let pairs: Vec<_> = table.pairs().collect();
        assert_eq!(pairs.len(), TABLE_SIZE);

        let mut seen = std::collections::HashSet::new();
        for (from, to) in pairs {
            assert_eq!(from.is_ascii_lowercase(), to.is_ascii_lowercase());
            assert!(seen.insert(to), "{} mapped twice", to);
        }
    }

    #[test]
    fn test_inverse() {
        let table = SubstitutionTable::encrypt(7);
        let inverse = table.inverse();
        assert_eq!(inverse, SubstitutionTable::decrypt(7));

        for (from, to) in table.pairs() {
            assert_eq!(inverse.get(to), Some(from));
        }
    }
}
