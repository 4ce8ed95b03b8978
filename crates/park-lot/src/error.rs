//! Lot-subsystem error type.

use thiserror::Error;

use park_core::SpotId;

/// Errors produced by `park-lot`.
#[derive(Debug, Error)]
pub enum LotError {
    #[error("layout parse error: {0}")]
    Parse(String),

    #[error("{0} is listed twice in the layout")]
    DuplicateSpot(SpotId),

    #[error("layout ids must be contiguous from 0: {0} is missing")]
    MissingSpot(SpotId),

    #[error("{spot} has floor 0; floors are numbered from 1")]
    InvalidFloor { spot: SpotId },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LotResult<T> = Result<T, LotError>;
