use thiserror::Error;

use stride_insight::error::InsightError;
use stride_store::error::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Insight(#[from] InsightError),
}

impl AppError {
    /// Whether the user should be offered a "try again" action.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Insight(e) => e.is_retryable(),
            AppError::Store(_) => false,
        }
    }
}
