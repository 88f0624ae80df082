use sqlx::Result;

use crate::db::Db;
use crate::models::Category;
use crate::pagination::QueryOptions;
use crate::repos::foods;

/// All categories with their foods; `food_opts` windows each category's foods.
pub async fn find_many(db: &Db, food_opts: QueryOptions) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name
        FROM categories
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db.pool().await?)
    .await?;

    with_foods(db, categories, food_opts).await
}

pub async fn find_unique(db: &Db, id: i32, food_opts: QueryOptions) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name
        FROM categories
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db.pool().await?)
    .await?;

    match category {
        Some(category) => Ok(with_foods(db, vec![category], food_opts).await?.pop()),
        None => Ok(None),
    }
}

async fn with_foods(
    db: &Db,
    mut categories: Vec<Category>,
    food_opts: QueryOptions,
) -> Result<Vec<Category>> {
    let ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
    let mut foods = foods::find_many_by_categories(db, &ids, food_opts).await?;

    for category in &mut categories {
        category.foods = Some(foods.remove(&category.id).unwrap_or_default());
    }
    Ok(categories)
}
