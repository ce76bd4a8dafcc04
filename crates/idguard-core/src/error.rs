use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("facebook id matches neither the numeric id nor the username shape")]
    ValidationFailure,
}
