use thiserror::Error;

/// Everything that can go wrong reading or writing a `.pb` file.
///
/// Grounded in `community_knapsack/pbfileservice.py`: every place that file
/// raises a bare `KeyError`/`ValueError` parsing a malformed instance gets a
/// named variant here instead.
#[derive(Debug, Error)]
pub enum PbFileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("integer field could not be parsed: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("section {section:?} is missing its header row")]
    MissingHeader { section: String },

    #[error("row found outside of a META/PROJECTS/VOTES section")]
    RowOutsideSection,

    #[error("META is missing required key {0:?}")]
    MissingMetaKey(String),

    #[error("{entity} {id:?} is missing required field {field:?}")]
    MissingField {
        entity: &'static str,
        id: String,
        field: &'static str,
    },

    #[error("project {project_id:?} lists {found} costs but the instance has {expected} budget dimensions")]
    CostDimensionMismatch {
        project_id: String,
        found: usize,
        expected: usize,
    },

    #[error("vote references unknown project id {0:?}")]
    UnknownProject(String),

    #[error(transparent)]
    Input(#[from] pbknapsack::InputError),

    #[error(transparent)]
    Validation(#[from] pbknapsack::ValidationError),
}
