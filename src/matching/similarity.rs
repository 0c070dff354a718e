//! Fuzzy string similarity on a 0–100 scale.
//!
//! The scorer follows the weighted-ratio family of fuzzy matchers: a plain
//! edit-distance ratio, a best-window partial ratio for strings of very
//! different length, and token sort/set ratios that tolerate reordered or
//! extra words. The base ratio is the normalized Levenshtein similarity
//! from `strsim`, scaled to 100 and rounded.
//!
//! The engine's default thresholds (80 for company matches, 95 for
//! duplicates) are calibrated against [`score`].

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Scale applied to token-based ratios so they never outrank an equally
/// good plain ratio.
const TOKEN_SCALE: f64 = 0.95;

/// Length ratio at which partial (substring) matching is attempted.
const PARTIAL_LENGTH_RATIO: f64 = 1.5;

/// Length ratio beyond which partial matches are discounted further.
const LONG_PARTIAL_LENGTH_RATIO: f64 = 8.0;

/// Scores the similarity of two strings from 0 to 100.
///
/// Both strings are lower-cased and stripped of punctuation first; if
/// either is then empty the score is 0. Identical processed strings score
/// 100. The score is symmetric.
///
/// # Examples
///
/// ```
/// use internship_pay_filter::matching::score;
///
/// assert_eq!(score("Amazon", "amazon"), 100);
/// assert_eq!(score("amazon", "amazoninc"), 90);
/// assert_eq!(score("two sigma", "sigma two"), 95);
/// ```
pub fn score(a: &str, b: &str) -> u8 {
    let a = process(a);
    let b = process(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let base = f64::from(raw_ratio(&a, &b));
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let length_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;

    let best = if length_ratio < PARTIAL_LENGTH_RATIO {
        let token_sort = f64::from(token_sort(&a, &b, raw_ratio)) * TOKEN_SCALE;
        let token_set = f64::from(token_set(&a, &b, raw_ratio)) * TOKEN_SCALE;
        base.max(token_sort).max(token_set)
    } else {
        let partial_scale = if length_ratio < LONG_PARTIAL_LENGTH_RATIO {
            0.9
        } else {
            0.6
        };
        let partial = f64::from(raw_partial_ratio(&a, &b)) * partial_scale;
        let token_sort =
            f64::from(token_sort(&a, &b, raw_partial_ratio)) * TOKEN_SCALE * partial_scale;
        let token_set =
            f64::from(token_set(&a, &b, raw_partial_ratio)) * TOKEN_SCALE * partial_scale;
        base.max(partial).max(token_sort).max(token_set)
    };

    best.round().min(100.0) as u8
}

/// Plain edit-distance ratio of two strings after processing.
pub fn ratio(a: &str, b: &str) -> u8 {
    raw_ratio(&process(a), &process(b))
}

/// Best ratio of the shorter string against any equal-length window of the
/// longer one.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    raw_partial_ratio(&process(a), &process(b))
}

/// Ratio of the two strings after sorting their words.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    token_sort(&process(a), &process(b), raw_ratio)
}

/// Ratio over the shared and differing word sets of the two strings.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    token_set(&process(a), &process(b), raw_ratio)
}

/// Lower-cases, replaces every non-alphanumeric character with a space,
/// and trims.
fn process(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else {
            out.push(' ');
        }
    }
    out.trim().to_string()
}

fn to_percent(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

fn raw_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    to_percent(normalized_levenshtein(a, b))
}

fn raw_partial_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (a, b_chars)
    } else {
        (b, a_chars)
    };
    let window_len = shorter.chars().count();

    let mut best = 0.0_f64;
    for start in 0..=(longer.len() - window_len) {
        let window: String = longer[start..start + window_len].iter().collect();
        best = best.max(normalized_levenshtein(shorter, &window));
        if best >= 1.0 {
            break;
        }
    }
    to_percent(best)
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort(a: &str, b: &str, compare: fn(&str, &str) -> u8) -> u8 {
    compare(&sorted_tokens(a), &sorted_tokens(b))
}

fn token_set(a: &str, b: &str, compare: fn(&str, &str) -> u8) -> u8 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let shared = join_tokens(tokens_a.intersection(&tokens_b));
    let only_a = join_tokens(tokens_a.difference(&tokens_b));
    let only_b = join_tokens(tokens_b.difference(&tokens_a));

    let combined_a = format!("{} {}", shared, only_a).trim().to_string();
    let combined_b = format!("{} {}", shared, only_b).trim().to_string();

    compare(&shared, &combined_a)
        .max(compare(&shared, &combined_b))
        .max(compare(&combined_a, &combined_b))
}

fn join_tokens<'a, 'b: 'a>(tokens: impl Iterator<Item = &'a &'b str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}
