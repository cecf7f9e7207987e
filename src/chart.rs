//! Plain-text bar charts of letter frequencies.
//!
//! Charts cover the 26 lowercase Latin letters only; letters absent from a
//! map are drawn as zero.

use crate::text::FrequencyMap;
use crate::ALPHABET_LEN;

/// Character used to draw bars.
pub const BAR: char = '#';

/// Default maximum bar width in characters.
pub const DEFAULT_WIDTH: usize = 40;

/// Bar of `count` scaled against `max`. Non-zero counts get at least one cell.
fn bar(count: usize, max: usize, width: usize) -> String {
    if count == 0 || max == 0 || width == 0 {
        return String::new();
    }
    let cells = ((count * width) as f64 / max as f64).round() as usize;
    BAR.to_string().repeat(cells.clamp(1, width))
}

fn letter(i: usize) -> char {
    (b'a' + i as u8) as char
}

/// One row per letter: `a | ####     12`.
pub fn render_histogram(map: &FrequencyMap, width: usize) -> String {
    let counts = map.alphabet_counts();
    let max = counts.iter().copied().max().unwrap_or(0);

    let mut out = String::new();
    for (i, count) in counts.iter().enumerate() {
        out.push_str(&format!(
            "{} | {:<width$} {}\n",
            letter(i),
            bar(*count, max, width),
            count,
            width = width
        ));
    }
    out
}

/// Two maps side by side, scaled against their common maximum.
pub fn render_comparison(
    left_label: &str,
    left: &FrequencyMap,
    right_label: &str,
    right: &FrequencyMap,
    width: usize,
) -> String {
    let left_counts = left.alphabet_counts();
    let right_counts = right.alphabet_counts();
    let max = left_counts
        .iter()
        .chain(right_counts.iter())
        .copied()
        .max()
        .unwrap_or(0);

    // Bar column plus room for a count of up to six digits.
    let column = width + 7;

    let mut out = format!(
        "    {:<column$} | {}\n",
        left_label,
        right_label,
        column = column
    );
    for i in 0..ALPHABET_LEN {
        let left_cell = format!(
            "{:<width$} {}",
            bar(left_counts[i], max, width),
            left_counts[i],
            width = width
        );
        out.push_str(&format!(
            "{} | {:<column$} | {:<width$} {}\n",
            letter(i),
            left_cell,
            bar(right_counts[i], max, width),
            right_counts[i],
            column = column,
            width = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize_letters;

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0, 10, 20), "");
        assert_eq!(bar(10, 10, 20), "#".repeat(20));
        assert_eq!(bar(5, 10, 20), "#".repeat(10));
        // tiny counts are still visible
        assert_eq!(bar(1, 1000, 20), "#");
        assert_eq!(bar(3, 0, 20), "");
    }

    #[test]
    fn test_histogram_has_row_per_letter() {
        let map: FrequencyMap = normalize_letters("aab z 9").collect();
        let chart = render_histogram(&map, 10);
        let rows: Vec<&str> = chart.lines().collect();

        assert_eq!(rows.len(), ALPHABET_LEN);
        assert_eq!(rows[0], format!("a | {} 2", "#".repeat(10)));
        assert_eq!(rows[1], format!("b | {:<10} 1", "#####"));
        assert_eq!(rows[2], format!("c | {:<10} 0", ""));
        assert!(rows[25].starts_with("z | #####"));
    }

    #[test]
    fn test_histogram_empty_map() {
        let chart = render_histogram(&FrequencyMap::new(), 5);
        assert_eq!(chart.lines().count(), ALPHABET_LEN);
        assert!(!chart.contains(BAR));
    }

    #[test]
    fn test_every_row_ends_with_newline() {
        let map: FrequencyMap = normalize_letters("abc").collect();
        let histogram = render_histogram(&map, 4);
        let comparison = render_comparison("l", &map, "r", &map, 4);

        assert_eq!(histogram.matches('\n').count(), ALPHABET_LEN);
        assert!(histogram.ends_with("z |      0\n"));
        assert_eq!(comparison.matches('\n').count(), ALPHABET_LEN + 1);
        assert!(comparison.starts_with("    l"));
    }

    #[test]
    fn test_comparison_shares_scale() {
        let plain: FrequencyMap = normalize_letters("aaaa").collect();
        let cipher: FrequencyMap = normalize_letters("bb").collect();
        let chart = render_comparison("plain", &plain, "cipher", &cipher, 8);
        let rows: Vec<&str> = chart.lines().collect();

        assert_eq!(rows.len(), ALPHABET_LEN + 1);
        assert!(rows[0].contains("plain"));
        assert!(rows[0].contains("cipher"));
        assert!(rows[1].starts_with(&format!("a | {} 4", "#".repeat(8))));
        assert!(rows[2].ends_with(&format!("| {:<8} 2", "####")));
    }
}
