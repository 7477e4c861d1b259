//! Orders service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Reasons a checkout payload is refused before it reaches storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("{0} is required")]
    BlankField(&'static str),

    #[error("order has no items")]
    NoItems,

    #[error("item {0} has a zero quantity")]
    ZeroQuantity(usize),

    #[error("item {0} has a negative price")]
    NegativePrice(usize),

    #[error("item {0} has no name")]
    BlankItemName(usize),
}

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order already exists")]
    AlreadyExists,

    #[error("order not found")]
    NotFound,

    #[error("invalid order: {0}")]
    Invalid(#[from] OrderValidationError),

    #[error("no free order number after {0} attempts")]
    OrderNumberExhausted(u32),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => return Self::NotFound,
            Error::Encode(_) => return Self::InvalidData,
            _ => {}
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
