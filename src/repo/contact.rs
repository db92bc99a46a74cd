//! Contact access. Every contact belongs to exactly one customer.

use crate::error::AppError;
use crate::model::{Contact, NewContact};
use sqlx::PgPool;

const COLUMNS: &str = "id, customer_id, first_name, last_name, created_at, updated_at, deleted_at";

/// A customer's non-deleted contacts, newest first.
pub async fn list_for_customer(pool: &PgPool, customer_id: i64) -> Result<Vec<Contact>, AppError> {
    let rows = sqlx::query_as::<_, Contact>(&format!(
        "SELECT {} FROM contacts WHERE customer_id = $1 AND deleted_at IS NULL \
         ORDER BY created_at DESC, id DESC",
        COLUMNS
    ))
    .bind(customer_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Contact>, AppError> {
    let row = sqlx::query_as::<_, Contact>(&format!(
        "SELECT {} FROM contacts WHERE id = $1 AND deleted_at IS NULL",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn insert(pool: &PgPool, fields: &NewContact) -> Result<Contact, AppError> {
    let row = sqlx::query_as::<_, Contact>(&format!(
        "INSERT INTO contacts (customer_id, first_name, last_name) \
         VALUES ($1, $2, $3) RETURNING {}",
        COLUMNS
    ))
    .bind(fields.customer_id)
    .bind(&fields.first_name)
    .bind(&fields.last_name)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Full-field update of a non-deleted contact.
pub async fn update(
    pool: &PgPool,
    id: i64,
    fields: &NewContact,
) -> Result<Option<Contact>, AppError> {
    let row = sqlx::query_as::<_, Contact>(&format!(
        "UPDATE contacts SET customer_id = $1, first_name = $2, last_name = $3, \
         updated_at = NOW() WHERE id = $4 AND deleted_at IS NULL RETURNING {}",
        COLUMNS
    ))
    .bind(fields.customer_id)
    .bind(&fields.first_name)
    .bind(&fields.last_name)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Soft delete. False when the id was already deleted or never existed.
pub async fn soft_delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let row: Option<(i64,)> = sqlx::query_as(
        "UPDATE contacts SET deleted_at = NOW(), updated_at = NOW() \
         WHERE id = $1 AND deleted_at IS NULL RETURNING id",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.is_some())
}
