use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidRange {
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },
}
