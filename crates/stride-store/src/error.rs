use thiserror::Error;

use stride_core::error::CoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no active goal: set a goal first")]
    NoActiveGoal,

    #[error("validation failed: {0}")]
    Validation(#[from] CoreError),
}
