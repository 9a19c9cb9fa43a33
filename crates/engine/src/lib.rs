//! Expense ledger and FIRE projection engine.
//!
//! The [`Engine`] owns the database connection and exposes the storage and
//! ledger operations over the `expenses` and `categories` tables. Projection
//! and export are pure modules working on plain values.

pub use categories::{Category, CategoryChoices, DEFAULT_CATEGORIES};
pub use error::EngineError;
pub use expenses::Expense;
pub use export::{ExportFormat, ExportRow};
pub use ledger::{BulkInput, parse_bulk_input};
pub use ops::Engine;
pub use projection::{Forecast, ForecastRequest, ProjectionInput, Series, forecast, project};

mod categories;
mod error;
mod expenses;
pub mod export;
mod ledger;
mod ops;
pub mod projection;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
