//! Expense rows.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One recorded expense.
///
/// `category` is a free-form copy of the name chosen at insert time, it does
/// not reference the `categories` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Expense {
    pub id: i64,
    pub category: String,
    pub product: String,
    pub cost: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category: String,
    pub product: String,
    pub cost: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            category: model.category,
            product: model.product,
            cost: model.cost,
        }
    }
}
