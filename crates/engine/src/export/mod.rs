//! Export of a ledger snapshot.
//!
//! Every encoder takes the rows returned by [`Engine::list_expenses`] and
//! drops the storage id, keeping the `category`, `product` and `cost`
//! columns in that order.
//!
//! [`Engine::list_expenses`]: crate::Engine::list_expenses

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{EngineError, Expense, ResultEngine};

mod csv;
mod json;
mod xlsx;

pub use self::csv::to_csv;
pub use self::json::to_json_lines;
pub use self::xlsx::{SHEET_NAME, to_xlsx};

/// Column names shared by every format.
pub const HEADER: [&str; 3] = ["category", "product", "cost"];

/// Exported view of one expense.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub category: String,
    pub product: String,
    pub cost: i64,
}

impl From<&Expense> for ExportRow {
    fn from(expense: &Expense) -> Self {
        Self {
            category: expense.category.clone(),
            product: expense.product.clone(),
            cost: expense.cost,
        }
    }
}

/// Supported download formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Csv, Self::Xlsx, Self::Json];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Json => "json",
        }
    }

    /// Fixed download file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Csv => "expenses.csv",
            Self::Xlsx => "expenses.xlsx",
            Self::Json => "expenses.json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Json => "application/json",
        }
    }

    /// Serialize `rows` in this format.
    pub fn encode(self, rows: &[Expense]) -> ResultEngine<Vec<u8>> {
        match self {
            Self::Csv => to_csv(rows),
            Self::Xlsx => to_xlsx(rows),
            Self::Json => to_json_lines(rows),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == lowered)
            .ok_or_else(|| EngineError::UnknownFormat(value.to_string()))
    }
}

fn export_error(err: impl fmt::Display) -> EngineError {
    EngineError::Export(err.to_string())
}

#[cfg(test)]
pub(crate) fn sample_rows() -> Vec<Expense> {
    vec![
        Expense {
            id: 1,
            category: "Food".to_string(),
            product: "Coffee".to_string(),
            cost: 300,
        },
        Expense {
            id: 7,
            category: "Food".to_string(),
            product: "Tea, green".to_string(),
            cost: 450,
        },
        Expense {
            id: 9,
            category: "Rent".to_string(),
            product: "Apartment \"Sakura\"".to_string(),
            cost: 50000,
        },
    ]
}
