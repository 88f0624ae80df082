use std::collections::HashMap;

use sqlx::types::Json;
use sqlx::{FromRow, Postgres, QueryBuilder, Result};

use crate::db::Db;
use crate::models::{AminoAcid, Category, FattyAcid, Food, Nutrient};
use crate::pagination::QueryOptions;

/// Every food query includes its category and all three measurement
/// profiles; the relations come back as JSON columns of the same statement.
const FOOD_SELECT: &str = r#"
    SELECT f.id, f.name,
           to_jsonb(c) AS category,
           CASE WHEN aa.id IS NULL THEN NULL ELSE to_jsonb(aa) END AS amino_acids,
           CASE WHEN fa.food_id IS NULL THEN NULL ELSE to_jsonb(fa) END AS fatty_acids,
           CASE WHEN n.food_id IS NULL THEN NULL ELSE to_jsonb(n) END AS nutrients
"#;

const FOOD_RELATIONS: &str = r#"
    JOIN categories c ON c.id = f.category_id
    LEFT JOIN amino_acids aa ON aa.food_id = f.id
    LEFT JOIN fatty_acids fa ON fa.food_id = f.id
    LEFT JOIN nutrients n ON n.food_id = f.id
"#;

#[derive(Debug, Clone, Default)]
pub struct FoodFilter {
    /// Case-sensitive literal substring of the food name.
    pub name_contains: Option<String>,
}

#[derive(Debug, FromRow)]
struct FoodRow {
    id: i32,
    name: String,
    category: Json<Category>,
    amino_acids: Option<Json<AminoAcid>>,
    fatty_acids: Option<Json<FattyAcid>>,
    nutrients: Option<Json<Nutrient>>,
}

impl From<FoodRow> for Food {
    fn from(row: FoodRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category.0,
            amino_acids: row.amino_acids.map(|j| j.0),
            fatty_acids: row.fatty_acids.map(|j| j.0),
            nutrients: row.nutrients.map(|j| j.0),
        }
    }
}

pub async fn find_many(db: &Db, filter: FoodFilter, opts: QueryOptions) -> Result<Vec<Food>> {
    let mut query = QueryBuilder::<Postgres>::new(FOOD_SELECT);
    query.push(" FROM foods f ");
    query.push(FOOD_RELATIONS);

    if let Some(name) = filter.name_contains {
        // strpos keeps `%` and `_` literal, unlike LIKE
        query.push(" WHERE strpos(f.name, ");
        query.push_bind(name);
        query.push(") > 0");
    }

    query.push(" ORDER BY f.id ASC");
    query.push(" LIMIT ");
    query.push_bind(opts.take);
    query.push(" OFFSET ");
    query.push_bind(opts.skip);

    let rows: Vec<FoodRow> = query
        .build_query_as::<FoodRow>()
        .fetch_all(db.pool().await?)
        .await?;

    Ok(rows.into_iter().map(Food::from).collect())
}

pub async fn find_unique(db: &Db, id: i32) -> Result<Option<Food>> {
    let mut query = QueryBuilder::<Postgres>::new(FOOD_SELECT);
    query.push(" FROM foods f ");
    query.push(FOOD_RELATIONS);
    query.push(" WHERE f.id = ");
    query.push_bind(id);

    let row = query
        .build_query_as::<FoodRow>()
        .fetch_optional(db.pool().await?)
        .await?;

    Ok(row.map(Food::from))
}

/// Foods of several categories at once, the window applied to each category
/// separately. Keyed by category id; categories without foods are absent.
pub async fn find_many_by_categories(
    db: &Db,
    category_ids: &[i32],
    opts: QueryOptions,
) -> Result<HashMap<i32, Vec<Food>>> {
    if category_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut query = QueryBuilder::<Postgres>::new(FOOD_SELECT);
    query.push(
        r#"
        FROM categories owner
        CROSS JOIN LATERAL (
            SELECT id, name, category_id
            FROM foods
            WHERE category_id = owner.id
            ORDER BY id ASC
            LIMIT "#,
    );
    query.push_bind(opts.take);
    query.push(" OFFSET ");
    query.push_bind(opts.skip);
    query.push(") f ");
    query.push(FOOD_RELATIONS);
    query.push(" WHERE owner.id = ANY(");
    query.push_bind(category_ids.to_vec());
    query.push(") ORDER BY f.category_id ASC, f.id ASC");

    let rows: Vec<FoodRow> = query
        .build_query_as::<FoodRow>()
        .fetch_all(db.pool().await?)
        .await?;

    let mut grouped: HashMap<i32, Vec<Food>> = HashMap::new();
    for row in rows {
        let food = Food::from(row);
        grouped.entry(food.category.id).or_default().push(food);
    }
    Ok(grouped)
}
