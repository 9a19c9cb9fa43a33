//! The module contains the error the engine can throw.
//!
//! Validation errors are meant to be shown to the user as they are:
//!
//! - [`InvalidCostFormat`] thrown when a cost token is not a whole number.
//! - [`CountMismatch`] thrown when product names and costs differ in number.
//!
//! Database and export failures have no recovery path and are propagated.
//!
//!  [`InvalidCostFormat`]: EngineError::InvalidCostFormat
//!  [`CountMismatch`]: EngineError::CountMismatch
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid cost \"{0}\": costs must be whole numbers")]
    InvalidCostFormat(String),
    #[error("Got {products} product names but {costs} costs")]
    CountMismatch { products: usize, costs: usize },
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid projection: {0}")]
    InvalidProjection(String),
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
    #[error("Export failed: {0}")]
    Export(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidCostFormat(a), Self::InvalidCostFormat(b)) => a == b,
            (
                Self::CountMismatch {
                    products: a,
                    costs: b,
                },
                Self::CountMismatch {
                    products: c,
                    costs: d,
                },
            ) => a == c && b == d,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::InvalidProjection(a), Self::InvalidProjection(b)) => a == b,
            (Self::UnknownFormat(a), Self::UnknownFormat(b)) => a == b,
            (Self::Export(a), Self::Export(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
