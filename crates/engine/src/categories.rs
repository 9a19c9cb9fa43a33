//! Category registry.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Names offered when no category has been added yet.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Rent", "Food", "Transport", "Hobby"];

/// Names to offer when picking a category for new expenses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryChoices {
    pub names: Vec<String>,
    /// `true` when nothing is stored and `names` are the defaults.
    pub defaults: bool,
}

/// Category entry exposed to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.category_name,
        }
    }
}
