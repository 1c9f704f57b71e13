use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityLogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type ActivityLogResult<T> = Result<T, ActivityLogError>;
