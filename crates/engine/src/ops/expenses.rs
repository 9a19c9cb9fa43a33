use sea_orm::{
    ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*,
};

use crate::{Expense, ResultEngine, expenses, ledger::parse_bulk_input};

use super::{Engine, with_tx};

impl Engine {
    /// Insert one expense and return its id.
    pub async fn create_expense(
        &self,
        category: &str,
        product: &str,
        cost: i64,
    ) -> ResultEngine<i64> {
        insert_expense(&self.database, category, product, cost).await
    }

    /// Every expense, oldest first.
    pub async fn list_expenses(&self) -> ResultEngine<Vec<Expense>> {
        let rows = expenses::Entity::find()
            .order_by_asc(expenses::Column::Id)
            .all(&self.database)
            .await?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    /// Remove the expenses with the given ids.
    ///
    /// Unknown ids are ignored. Returns how many rows were removed.
    pub async fn delete_expenses(&self, ids: &[i64]) -> ResultEngine<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = expenses::Entity::delete_many()
            .filter(expenses::Column::Id.is_in(ids.iter().copied()))
            .exec(&self.database)
            .await?;
        tracing::debug!(
            requested = ids.len(),
            deleted = result.rows_affected,
            "deleted expenses"
        );
        Ok(result.rows_affected)
    }

    /// Record one expense per `(product, cost)` pair parsed from the raw
    /// comma separated lists.
    ///
    /// Nothing is written unless the whole input is valid, see
    /// [`parse_bulk_input`]. Returns the number of created rows.
    pub async fn bulk_add(
        &self,
        category: &str,
        raw_products: &str,
        raw_costs: &str,
    ) -> ResultEngine<usize> {
        let input = match parse_bulk_input(raw_products, raw_costs) {
            Ok(input) => input,
            Err(err) => {
                tracing::warn!("rejected bulk input: {err}");
                return Err(err);
            }
        };

        with_tx!(self, |db_tx| {
            for (product, cost) in input.pairs() {
                insert_expense(&db_tx, category, product, cost).await?;
            }
            tracing::debug!(category, created = input.len(), "bulk added expenses");
            Ok(input.len())
        })
    }
}

async fn insert_expense<C: ConnectionTrait>(
    db: &C,
    category: &str,
    product: &str,
    cost: i64,
) -> ResultEngine<i64> {
    let active = expenses::ActiveModel {
        id: ActiveValue::NotSet,
        category: ActiveValue::Set(category.to_string()),
        product: ActiveValue::Set(product.to_string()),
        cost: ActiveValue::Set(cost),
    };
    let model = active.insert(db).await?;
    Ok(model.id)
}
