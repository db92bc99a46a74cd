//! Customer category access. Read-only from the API surface.

use crate::error::AppError;
use crate::model::CustomerCategory;
use sqlx::PgPool;

const COLUMNS: &str = "id, name";

pub async fn list_ordered_by_name(pool: &PgPool) -> Result<Vec<CustomerCategory>, AppError> {
    let rows = sqlx::query_as::<_, CustomerCategory>(&format!(
        "SELECT {} FROM customer_categories ORDER BY name",
        COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find(pool: &PgPool, id: i64) -> Result<Option<CustomerCategory>, AppError> {
    let row = sqlx::query_as::<_, CustomerCategory>(&format!(
        "SELECT {} FROM customer_categories WHERE id = $1",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Batch lookup for relation loading on list responses.
pub async fn find_by_ids(pool: &PgPool, ids: &[i64]) -> Result<Vec<CustomerCategory>, AppError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows = sqlx::query_as::<_, CustomerCategory>(&format!(
        "SELECT {} FROM customer_categories WHERE id = ANY($1)",
        COLUMNS
    ))
    .bind(ids.to_vec())
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let row: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM customer_categories WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
    Ok(row.0)
}
