//! Near-duplicate detection against an "already applied" list.
//!
//! Whole lines are compared, not extracted company names: the same posting
//! is often written with different role or date text, which the fuzzy
//! score tolerates, while two roles at the same company should not be
//! flagged just for sharing a name.

use crate::models::DuplicateFlag;

use super::similarity::score;

/// Flags every new input whose best score against the applied list is at
/// or above `threshold`.
///
/// Each flag carries the closest applied entry (the earliest one on equal
/// scores). An empty applied list yields no flags.
///
/// # Examples
///
/// ```
/// use internship_pay_filter::matching::find_duplicates;
///
/// let applied = ["Google - SWE Intern"];
/// let flags = find_duplicates(&["google - swe intern", "Radix Trading"], &applied, 95);
///
/// assert_eq!(flags.len(), 1);
/// assert_eq!(flags[0].matched_applied, "Google - SWE Intern");
/// assert_eq!(flags[0].score, 100);
/// ```
pub fn find_duplicates<N, A>(new_inputs: &[N], applied: &[A], threshold: u8) -> Vec<DuplicateFlag>
where
    N: AsRef<str>,
    A: AsRef<str>,
{
    if applied.is_empty() {
        return Vec::new();
    }

    new_inputs
        .iter()
        .filter_map(|new_input| {
            let new_input = new_input.as_ref();
            let (best_applied, best_score) = best_applied_match(new_input, applied)?;
            (best_score >= threshold).then(|| DuplicateFlag {
                new_input: new_input.to_string(),
                matched_applied: best_applied.to_string(),
                score: best_score,
            })
        })
        .collect()
}

fn best_applied_match<'a, A: AsRef<str>>(new_input: &str, applied: &'a [A]) -> Option<(&'a str, u8)> {
    applied
        .iter()
        .map(|candidate| (candidate.as_ref(), score(new_input, candidate.as_ref())))
        .fold(None, |best, (candidate, candidate_score)| match best {
            Some((_, best_score)) if best_score >= candidate_score => best,
            _ => Some((candidate, candidate_score)),
        })
}
