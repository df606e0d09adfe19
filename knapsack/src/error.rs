use thiserror::Error;

/// A problem instance failed construction or mutation because its inputs are
/// inconsistent with each other (wrong shape, non-positive cost, ...).
///
/// Distinguished from [`InputError`] because these are raised by the data
/// model itself (constructing or updating a problem instance), while
/// `InputError` is raised by the vote-conversion helpers, which are usually
/// called before a problem instance even exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{found} utility rows were given but there are {expected} voters")]
    VoterUtilityCountMismatch { found: usize, expected: usize },

    #[error("voter {voter_index} has utilities for {found} projects but {expected} were expected")]
    UtilityWidthMismatch {
        voter_index: usize,
        found: usize,
        expected: usize,
    },

    #[error("project {project_index} has non-positive cost {cost}")]
    NonPositiveCost { project_index: usize, cost: i64 },

    #[error("{found} budgets were given for {expected} cost dimensions")]
    BudgetDimensionMismatch { found: usize, expected: usize },

    #[error("cost dimension {dimension} has {found} entries but {expected} projects were expected")]
    CostRowWidthMismatch {
        dimension: usize,
        found: usize,
        expected: usize,
    },
}

/// A single vote (or a batch of raw utility rows) could not be converted into
/// a utility vector because it violates the shape or range rules for its
/// vote type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown vote type {0:?}")]
    UnknownVoteType(String),

    #[error("vote references project index {index} but there are only {num_projects} projects")]
    ProjectIndexOutOfRange { index: usize, num_projects: usize },

    #[error("project index {0} appears more than once in the same vote")]
    DuplicateVote(usize),

    #[error("{found} points were given for {expected} votes")]
    PointsVotesLengthMismatch { found: usize, expected: usize },

    #[error("{votes} votes were cast but min_length requires at least {min_length}")]
    MinLengthViolated { votes: usize, min_length: usize },

    #[error("{votes} votes were cast but max_length allows at most {max_length}")]
    MaxLengthViolated { votes: usize, max_length: usize },
}
