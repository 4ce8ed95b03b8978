use park_core::CoreError;
use park_lot::LotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] CoreError),

    #[error("layout error: {0}")]
    Layout(#[from] LotError),

    #[error("the lot has no spots")]
    EmptyLayout,
}

pub type SimResult<T> = Result<T, SimError>;
