use thiserror::Error;

/// A caller-supplied `(min, max)` bound was not usable for random
/// generation (§7's BoundsError). Grounded in `pbgenerator.py`'s
/// `_generate_int`, which raises `ValueError` on exactly these two cases.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundsError {
    #[error("bound ({min}, {max}) must not contain a negative endpoint")]
    Negative { min: i64, max: i64 },

    #[error("lower bound {min} must be less than or equal to upper bound {max}")]
    Inverted { min: i64, max: i64 },

    #[error("cost bound ({min}, {max}) must contain only positive integers")]
    NonPositiveCost { min: i64, max: i64 },
}
