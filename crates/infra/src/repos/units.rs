use sqlx::Result;

use crate::db::Db;
use crate::models::Unit;

#[derive(Debug, Clone, Default)]
pub struct UnitFilter {
    pub field_name: Option<String>,
}

pub async fn find_many(db: &Db) -> Result<Vec<Unit>> {
    sqlx::query_as::<_, Unit>(
        r#"
        SELECT id, field_name, unit, label_pt, infoods_tagname, systematic_name, common_name
        FROM units
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db.pool().await?)
    .await
}

/// First unit matching the filter in id order. An empty filter matches any unit.
pub async fn find_first(db: &Db, filter: UnitFilter) -> Result<Option<Unit>> {
    sqlx::query_as::<_, Unit>(
        r#"
        SELECT id, field_name, unit, label_pt, infoods_tagname, systematic_name, common_name
        FROM units
        WHERE ($1::text IS NULL OR field_name = $1)
        ORDER BY id ASC
        LIMIT 1
        "#,
    )
    .bind(filter.field_name)
    .fetch_optional(db.pool().await?)
    .await
}
