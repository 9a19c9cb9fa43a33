//! Parsing of bulk expense input.
//!
//! A bulk request carries one category plus two comma separated lists: the
//! product names and their costs. The lists are validated as a whole before
//! anything is written, so a bad token or a length mismatch rejects the
//! entire request.

use crate::{EngineError, ResultEngine};

/// Validated bulk request, products and costs have the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkInput {
    products: Vec<String>,
    costs: Vec<i64>,
}

impl BulkInput {
    /// `(product, cost)` pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, i64)> {
        self.products
            .iter()
            .map(String::as_str)
            .zip(self.costs.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

/// Split and validate raw form input.
///
/// Cost tokens are checked first: any token that is not a whole number
/// fails with [`EngineError::InvalidCostFormat`]. Only then the list lengths
/// are compared, failing with [`EngineError::CountMismatch`].
pub fn parse_bulk_input(raw_products: &str, raw_costs: &str) -> ResultEngine<BulkInput> {
    let products: Vec<String> = raw_products
        .split(',')
        .map(|name| name.trim().to_string())
        .collect();

    let costs = raw_costs
        .split(',')
        .map(parse_cost)
        .collect::<ResultEngine<Vec<i64>>>()?;

    if products.len() != costs.len() {
        return Err(EngineError::CountMismatch {
            products: products.len(),
            costs: costs.len(),
        });
    }

    Ok(BulkInput { products, costs })
}

fn parse_cost(token: &str) -> ResultEngine<i64> {
    let token = token.trim();
    token
        .parse()
        .map_err(|_| EngineError::InvalidCostFormat(token.to_string()))
}
