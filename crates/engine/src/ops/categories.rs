use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};

use crate::{
    Category, CategoryChoices, DEFAULT_CATEGORIES, ResultEngine, categories,
    util::normalize_required_name,
};

use super::Engine;

impl Engine {
    /// Add a category and return its id.
    ///
    /// Names are trimmed but not deduplicated.
    pub async fn add_category(&self, name: &str) -> ResultEngine<i64> {
        let name = normalize_required_name(name, "category")?;
        let active = categories::ActiveModel {
            id: ActiveValue::NotSet,
            category_name: ActiveValue::Set(name),
        };
        let model = active.insert(&self.database).await?;
        Ok(model.id)
    }

    /// Every category, oldest first.
    pub async fn categories(&self) -> ResultEngine<Vec<Category>> {
        let rows = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.database)
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// Category names, oldest first.
    pub async fn list_categories(&self) -> ResultEngine<Vec<String>> {
        Ok(self
            .categories()
            .await?
            .into_iter()
            .map(|category| category.name)
            .collect())
    }

    /// Stored category names, or [`DEFAULT_CATEGORIES`] while none exist.
    pub async fn category_choices(&self) -> ResultEngine<CategoryChoices> {
        let names = self.list_categories().await?;
        if names.is_empty() {
            return Ok(CategoryChoices {
                names: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
                defaults: true,
            });
        }
        Ok(CategoryChoices {
            names,
            defaults: false,
        })
    }

    /// Remove every category called `name`. Returns how many were removed.
    pub async fn delete_category(&self, name: &str) -> ResultEngine<u64> {
        let result = categories::Entity::delete_many()
            .filter(categories::Column::CategoryName.eq(name.trim()))
            .exec(&self.database)
            .await?;
        Ok(result.rows_affected)
    }
}
