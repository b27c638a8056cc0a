use std::cmp;

/// Levenshtein edit distance counted in chars.
pub(crate) fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current: Vec<usize> = vec![0; b.len() + 1];

    for (i, ac) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let sub_cost = if ac == *bc { 0 } else { 1 };
            current[j + 1] = cmp::min(
                cmp::min(previous[j + 1] + 1, current[j] + 1),
                previous[j] + sub_cost,
            );
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Scores `hay` against `needle` token by token, in `0.0..=1.0`.
/// Both inputs are expected to be normalized already.
pub(crate) fn score(needle: &str, hay: &str) -> f64 {
    let needle_tokens: Vec<_> = needle.split_whitespace().collect();
    if needle_tokens.is_empty() {
        return 0.0;
    }
    let hay_tokens: Vec<_> = hay.split_whitespace().collect();

    let total: f64 = needle_tokens
        .iter()
        .map(|needle| {
            hay_tokens
                .iter()
                .map(|hay| token_score(needle, hay))
                .fold(0.0, f64::max)
        })
        .sum();
    total / needle_tokens.len() as f64
}

fn token_score(needle: &str, hay: &str) -> f64 {
    if hay.starts_with(needle) {
        return 1.0;
    }
    let longest = cmp::max(needle.chars().count(), hay.chars().count());
    1.0 - (distance(needle, hay) as f64 / longest as f64)
}

/// Lowercases and splits names on the `-` and `_` the data files use in place of spaces.
pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c,
        })
        .collect::<String>()
        .to_lowercase()
}

#[test]
fn fuzzy_empty_vs_empty() {
    assert_eq!(distance("", ""), 0);
}

#[test]
fn fuzzy_empty_vs_nonempty() {
    assert_eq!(distance("", "abc"), 3);
    assert_eq!(distance("abc", ""), 3);
}

#[test]
fn fuzzy_substitution() {
    assert_eq!(distance("cat", "cut"), 1);
}

#[test]
fn fuzzy_insertion_and_deletion() {
    assert_eq!(distance("cat", "cart"), 1);
    assert_eq!(distance("cart", "cat"), 1);
}

#[test]
fn fuzzy_unicode_distinct() {
    assert_eq!(distance("café", "cafe"), 1);
}

#[test]
fn fuzzy_longer_sequence() {
    assert_eq!(distance("intention", "execution"), 5);
}

#[test]
fn fuzzy_transposed_station() {
    assert_eq!(distance("petnoe", "petone"), 2);
}

#[test]
fn score_prefix_is_full_match() {
    assert_eq!(score("upper", "upper hutt"), 1.0);
}

#[test]
fn score_empty_needle() {
    assert_eq!(score("", "petone"), 0.0);
}

#[test]
fn normalize_separators() {
    assert_eq!(normalize("Wellington_Upper-Hutt"), "wellington upper hutt");
}
