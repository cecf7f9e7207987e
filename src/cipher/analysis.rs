//! Frequency analysis for recovering a Caesar rotation.

use crate::text::FrequencyMap;
use crate::ALPHABET_LEN;

/// Relative a–z distribution of a map, or `None` if it has no a–z letters.
fn distribution(map: &FrequencyMap) -> Option<[f64; ALPHABET_LEN]> {
    let counts = map.alphabet_counts();
    let total: usize = counts.iter().sum();
    if total == 0 {
        return None;
    }

    let mut dist = [0.0; ALPHABET_LEN];
    for (p, n) in dist.iter_mut().zip(counts) {
        *p = n as f64 / total as f64;
    }
    Some(dist)
}

/// Guesses the rotation that turns text with the `reference` distribution
/// into text with the `observed` distribution.
///
/// Every shift in `[0, 26)` is scored by the correlation of the reference
/// distribution with the shifted observed one; the best score wins, the
/// smallest shift on ties. Returns `None` if either map has no a–z letters.
pub fn estimate_rotation(reference: &FrequencyMap, observed: &FrequencyMap) -> Option<u8> {
    let reference = distribution(reference)?;
    let observed = distribution(observed)?;

    let mut best = (0u8, f64::NEG_INFINITY);
    for shift in 0..ALPHABET_LEN {
        let score: f64 = (0..ALPHABET_LEN)
            .map(|i| reference[i] * observed[(i + shift) % ALPHABET_LEN])
            .sum();
        if score > best.1 {
            best = (shift as u8, score);
        }
    }

    Some(best.0)
}
