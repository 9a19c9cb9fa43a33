use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: i64,
        pub category: String,
        pub product: String,
        pub cost: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListResponse {
        pub expenses: Vec<ExpenseView>,
    }

    /// Request body for the bulk insert form.
    ///
    /// `products` and `costs` are the raw comma separated inputs.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BulkAdd {
        pub category: String,
        pub products: String,
        pub costs: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BulkAdded {
        pub created: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseDelete {
        pub ids: Vec<i64>,
    }

    /// `deleted` may be lower than `requested` when some ids were unknown.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseDeleted {
        pub requested: usize,
        pub deleted: u64,
    }
}

pub mod category {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryListResponse {
        pub categories: Vec<String>,
        /// True when no category was stored and the defaults are returned.
        pub defaults: bool,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryCreate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryCreated {
        pub id: i64,
        pub name: String,
    }
}

pub mod forecast {
    use super::*;

    /// FIRE form inputs. Rates are percentages in `[-100, 100]`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ForecastParams {
        pub annual_income: f64,
        pub income_growth_rate: f64,
        pub current_assets: f64,
        pub assets_growth_rate: f64,
        #[serde(default = "default_years")]
        pub years: u32,
    }

    fn default_years() -> u32 {
        10
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SeriesView {
        pub label: String,
        pub values: Vec<f64>,
        pub final_value: f64,
    }

    /// Two line series sharing the `periods` x axis.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ForecastResponse {
        pub periods: Vec<u32>,
        pub series: Vec<SeriesView>,
    }
}
