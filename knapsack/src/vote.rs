//! Vote aggregator & converter (§4.A): turns votes cast under a given
//! voting method into a per-project utility vector, and sums per-voter
//! utilities into aggregated project values.
//!
//! Grounded in `community_knapsack/pbutils.py`, which is the richer,
//! validating sibling of `pbfunc.py` (the original package carried both; the
//! error conditions spec.md documents for this component match
//! `pbutils.py`'s behavior, so that is the one reproduced here).

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::InputError;

/// The four voting methods a `VOTES` row can be cast under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteType {
    Approval,
    Cumulative,
    Scoring,
    Ordinal,
}

impl FromStr for VoteType {
    type Err = InputError;

    /// Case-insensitive, trims surrounding whitespace — the same
    /// normalization the PB file parser applies to every recognized token
    /// (§9's "vote-type lowercasing and whitespace trimming" note).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approval" => Ok(Self::Approval),
            "cumulative" => Ok(Self::Cumulative),
            "scoring" => Ok(Self::Scoring),
            "ordinal" => Ok(Self::Ordinal),
            other => Err(InputError::UnknownVoteType(other.to_string())),
        }
    }
}

/// Sums each project's column of `utilities` into an aggregated value
/// vector. Fails if any voter's row width does not match `num_projects`.
pub fn aggregate(num_projects: usize, utilities: &[Vec<i64>]) -> Result<Vec<i64>, crate::error::ValidationError> {
    crate::model::validate_utilities(utilities, utilities.len(), num_projects)?;
    Ok(crate::model::aggregate_values(utilities, num_projects))
}

fn validate_votes(num_projects: usize, votes: &[usize]) -> Result<(), InputError> {
    let mut seen = HashSet::with_capacity(votes.len());
    for &index in votes {
        if index >= num_projects {
            return Err(InputError::ProjectIndexOutOfRange { index, num_projects });
        }
        if !seen.insert(index) {
            return Err(InputError::DuplicateVote(index));
        }
    }
    Ok(())
}

/// Converts a single ranked (ordinal) vote into a utility vector.
///
/// `ordered_votes` lists project indices from most to least preferred;
/// projects absent from the list receive utility 0. An empty vote is
/// accepted and yields an all-zero row, matching `pbutils.py`'s own
/// handling of an unranked voter.
///
/// `min_len`/`max_len` of `-1` mean "no bound" and resolve, before the
/// scoring formula is chosen, to `0` and `num_projects` respectively —
/// the same resolution `pbutils.py` performs (`max_vote_length =
/// num_projects` when unset) before it ever computes `not_submitted`.
///
/// - resolved `min_len == max_len` (both positive): plain **Borda** — the
///   least-preferred ranked project scores 1, the next 2, … the
///   most-preferred scores `len(ordered_votes)`.
/// - Otherwise: a shifted-Borda, scoring from `u` upward where
///   `u = 1 + Σ_{k=1..(resolved_max_len - len)} k`, assigned from least to
///   most preferred.
///
/// TODO: the non-Borda scoring formula is the one the source package left
/// unverified (`pbutils.py`'s own `# TODO: Verify or prove this function`);
/// implemented here exactly as documented, not independently re-derived.
pub fn ordinal_to_utility(
    num_projects: usize,
    ordered_votes: &[usize],
    min_len: i64,
    max_len: i64,
) -> Result<Vec<i64>, InputError> {
    validate_votes(num_projects, ordered_votes)?;

    let len = ordered_votes.len() as i64;
    let min_len = if min_len < 0 { 0 } else { min_len };
    let max_len = if max_len < 0 { num_projects as i64 } else { max_len };

    if len < min_len {
        return Err(InputError::MinLengthViolated {
            votes: ordered_votes.len(),
            min_length: min_len as usize,
        });
    }
    if len > max_len {
        return Err(InputError::MaxLengthViolated {
            votes: ordered_votes.len(),
            max_length: max_len as usize,
        });
    }

    let base = if min_len == max_len && min_len > 0 {
        1
    } else {
        let unsubmitted = (max_len - len).max(0);
        1 + (1..=unsubmitted).sum::<i64>()
    };

    let mut utility = vec![0i64; num_projects];
    for (rank, &project) in ordered_votes.iter().enumerate() {
        let rank = rank as i64;
        utility[project] = base + (len - 1 - rank);
    }
    Ok(utility)
}

/// Converts a single vote, cast under `vote_type`, into a utility vector.
///
/// `points` is required (and must match `votes` in length) for
/// `cumulative`/`scoring`; ignored otherwise. Delegates `ordinal` to
/// [`ordinal_to_utility`] with no length bound, matching the plain contract
/// described for this entry point; callers that need bounded ordinal votes
/// (e.g. `pbgen`) should call [`ordinal_to_utility`] directly.
pub fn vote_to_utility(
    num_projects: usize,
    vote_type: VoteType,
    votes: &[usize],
    points: Option<&[i64]>,
) -> Result<Vec<i64>, InputError> {
    match vote_type {
        VoteType::Approval => {
            validate_votes(num_projects, votes)?;
            let mut utility = vec![0i64; num_projects];
            for &index in votes {
                utility[index] = 1;
            }
            Ok(utility)
        }
        VoteType::Cumulative | VoteType::Scoring => {
            validate_votes(num_projects, votes)?;
            let points = points.unwrap_or(&[]);
            if points.len() != votes.len() {
                return Err(InputError::PointsVotesLengthMismatch {
                    found: points.len(),
                    expected: votes.len(),
                });
            }
            let mut utility = vec![0i64; num_projects];
            for (&index, &point) in votes.iter().zip(points) {
                utility[index] = point;
            }
            Ok(utility)
        }
        VoteType::Ordinal => ordinal_to_utility(num_projects, votes, -1, -1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_sums_columns() {
        let utilities = vec![vec![1, 0, 1], vec![0, 1, 1]];
        assert_eq!(aggregate(3, &utilities).unwrap(), vec![1, 1, 2]);
    }

    #[test]
    fn aggregate_rejects_width_mismatch() {
        let utilities = vec![vec![1, 0]];
        assert!(aggregate(3, &utilities).is_err());
    }

    #[test]
    fn approval_vote_is_idempotent() {
        let utility = vote_to_utility(5, VoteType::Approval, &[0, 2, 4], None).unwrap();
        assert_eq!(utility, vec![1, 0, 1, 0, 1]);
        assert_eq!(utility.iter().filter(|&&u| u == 1).count(), 3);
    }

    #[test]
    fn scoring_vote_requires_matching_points() {
        let err = vote_to_utility(3, VoteType::Scoring, &[0, 1], Some(&[5])).unwrap_err();
        assert_eq!(
            err,
            InputError::PointsVotesLengthMismatch { found: 1, expected: 2 }
        );
    }

    #[test]
    fn duplicate_vote_is_rejected() {
        let err = vote_to_utility(3, VoteType::Approval, &[0, 0], None).unwrap_err();
        assert_eq!(err, InputError::DuplicateVote(0));
    }

    #[test]
    fn out_of_range_vote_is_rejected() {
        let err = vote_to_utility(3, VoteType::Approval, &[5], None).unwrap_err();
        assert_eq!(
            err,
            InputError::ProjectIndexOutOfRange {
                index: 5,
                num_projects: 3
            }
        );
    }

    #[test]
    fn borda_scores_most_preferred_highest() {
        // 3 ranked out of 5 projects, no length bound beyond len == len (plain Borda).
        let utility = ordinal_to_utility(5, &[2, 0, 4], 3, 3).unwrap();
        assert_eq!(utility[2], 3);
        assert_eq!(utility[0], 2);
        assert_eq!(utility[4], 1);
        assert_eq!(utility[1], 0);
        assert_eq!(utility[3], 0);
    }

    #[test]
    fn shifted_borda_offsets_by_unsubmitted_ranks() {
        // max_len=5, only 2 ranked: unsubmitted = 5-2 = 3, u = 1+1+2+3 = 7.
        let utility = ordinal_to_utility(5, &[1, 0], -1, 5).unwrap();
        assert_eq!(utility[0], 7);
        assert_eq!(utility[1], 8);
    }

    #[test]
    fn unbounded_ordinal_resolves_max_len_to_num_projects() {
        // No explicit bound (-1, -1): max_len resolves to num_projects=5 before
        // the offset is computed, same as the unbounded case is scored
        // with an explicit max_len=5.
        let utility = ordinal_to_utility(5, &[1, 0], -1, -1).unwrap();
        assert_eq!(utility[0], 7);
        assert_eq!(utility[1], 8);
    }

    #[test]
    fn vote_to_utility_ordinal_matches_the_unbounded_resolution() {
        let utility = vote_to_utility(5, VoteType::Ordinal, &[1, 0], None).unwrap();
        assert_eq!(utility[0], 7);
        assert_eq!(utility[1], 8);
    }

    #[test]
    fn empty_ordinal_vote_yields_an_all_zero_row() {
        let utility = ordinal_to_utility(3, &[], -1, -1).unwrap();
        assert_eq!(utility, vec![0, 0, 0]);
    }

    #[test]
    fn vote_type_parses_case_insensitively_and_trims() {
        assert_eq!(" Approval ".parse::<VoteType>().unwrap(), VoteType::Approval);
        assert!("nonsense".parse::<VoteType>().is_err());
    }
}
