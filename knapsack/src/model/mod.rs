//! Validated data objects for single- and multi-budget PB instances.

mod multi;
mod single;

pub use multi::MultiProblem;
pub use single::SingleProblem;

use crate::error::ValidationError;

/// Resolves the actual project/voter count against a caller-supplied id
/// list, returning `(actual_count, ids)`.
///
/// `None` means "no custom ids given" (the ordinary case): it fills in
/// positional ids `"0", "1", …` up to `declared_len`, the same default
/// `_PBProblem.__init__` assigns before it ever checks for a length
/// mismatch. A `Some` list whose length disagrees with `declared_len` is
/// the actual mismatch case §3 documents — but the id list, not the
/// declared count, is authoritative: `_PBProblem.__init__` (pbproblem.py)
/// resets `num_projects`/`num_voters` to `len(projects)`/`len(voters)`
/// and validates `costs`/`utilities` against *that*, so a caller-supplied
/// id list silently overrides a wrong declared count rather than being
/// truncated or padded to match it.
pub(crate) fn resolve_count<Id: Clone + From<String>>(
    ids: Option<Vec<Id>>,
    declared_len: usize,
    what: &str,
) -> (usize, Vec<Id>) {
    match ids {
        None => (declared_len, (0..declared_len).map(|i| Id::from(i.to_string())).collect()),
        Some(ids) => {
            let actual_len = ids.len();
            if actual_len != declared_len {
                tracing::warn!(
                    found = actual_len,
                    declared = declared_len,
                    "{what} id count does not match the declared instance size, using the id list's length"
                );
            }
            (actual_len, ids)
        }
    }
}

/// Validates the shape of a voter-by-project utility matrix against the
/// declared `num_voters`/`num_projects`. Both are fatal on mismatch, per
/// §3's "mismatch → fatal" rule for `utilities`.
pub(crate) fn validate_utilities(
    utilities: &[Vec<i64>],
    num_voters: usize,
    num_projects: usize,
) -> Result<(), ValidationError> {
    if utilities.len() != num_voters {
        return Err(ValidationError::VoterUtilityCountMismatch {
            found: utilities.len(),
            expected: num_voters,
        });
    }
    for (voter_index, row) in utilities.iter().enumerate() {
        if row.len() != num_projects {
            return Err(ValidationError::UtilityWidthMismatch {
                voter_index,
                found: row.len(),
                expected: num_projects,
            });
        }
    }
    Ok(())
}

/// Sums each project's column across all voters. Assumes `utilities` has
/// already been validated against `num_projects`.
pub(crate) fn aggregate_values(utilities: &[Vec<i64>], num_projects: usize) -> Vec<i64> {
    let mut values = vec![0i64; num_projects];
    for row in utilities {
        for (value, utility) in values.iter_mut().zip(row.iter()) {
            *value += utility;
        }
    }
    values
}

/// Checks that every cost in a single cost row is strictly positive.
pub(crate) fn validate_positive_costs(costs: &[i64]) -> Result<(), ValidationError> {
    for (project_index, &cost) in costs.iter().enumerate() {
        if cost <= 0 {
            return Err(ValidationError::NonPositiveCost { project_index, cost });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_count_fills_positional_ids_when_none_given() {
        let (count, ids) = resolve_count::<String>(None, 3, "project");
        assert_eq!(count, 3);
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn resolve_count_follows_a_short_id_list_rather_than_padding_it() {
        let (count, ids) = resolve_count(Some(vec!["a".to_string()]), 3, "project");
        assert_eq!(count, 1);
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn resolve_count_follows_a_long_id_list_rather_than_truncating_it() {
        let (count, ids) = resolve_count(
            Some(vec!["a".to_string(), "b".into(), "c".into(), "d".into()]),
            2,
            "project",
        );
        assert_eq!(count, 4);
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn validate_utilities_rejects_wrong_voter_count() {
        let err = validate_utilities(&[vec![1, 1]], 2, 2).unwrap_err();
        assert_eq!(err, ValidationError::VoterUtilityCountMismatch { found: 1, expected: 2 });
    }

    #[test]
    fn validate_utilities_rejects_wrong_row_width() {
        let err = validate_utilities(&[vec![1, 1, 1]], 1, 2).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UtilityWidthMismatch {
                voter_index: 0,
                found: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn aggregate_values_sums_columns_across_voters() {
        let utilities = vec![vec![1, 0, 1], vec![0, 1, 1]];
        assert_eq!(aggregate_values(&utilities, 3), vec![1, 1, 2]);
    }

    #[test]
    fn validate_positive_costs_rejects_zero_and_negative() {
        let err = validate_positive_costs(&[5, 0, 3]).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveCost { project_index: 1, cost: 0 });

        let err = validate_positive_costs(&[5, -3]).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveCost { project_index: 1, cost: -3 });
    }
}
