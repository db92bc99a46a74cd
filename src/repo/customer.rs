//! Customer access: filtered listing, lookups, validated writes, soft delete.

use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, name, reference, customer_category_id, start_date, description, \
                       created_at, updated_at, deleted_at";

/// List filter: free-text search over name/reference/description plus an
/// optional category constraint.
#[derive(Debug, Default)]
pub struct ListFilter {
    pub search: Option<String>,
    pub category_id: Option<i64>,
}

/// A customer row with its live contact count, as the list endpoint returns it.
#[derive(Debug, FromRow)]
pub struct CustomerWithContactCount {
    #[sqlx(flatten)]
    pub customer: Customer,
    pub contacts_count: i64,
}

/// Non-deleted customers matching the filter, newest first. No pagination.
pub async fn list(
    pool: &PgPool,
    filter: &ListFilter,
) -> Result<Vec<CustomerWithContactCount>, AppError> {
    let mut sql = format!(
        "SELECT {}, \
         (SELECT COUNT(*) FROM contacts ct \
          WHERE ct.customer_id = c.id AND ct.deleted_at IS NULL) AS contacts_count \
         FROM customers c WHERE c.deleted_at IS NULL",
        qualified_columns()
    );
    let search_pattern = filter
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| format!("%{}%", escape_like(s)));
    if search_pattern.is_some() {
        sql.push_str(" AND (c.name ILIKE $1 OR c.reference ILIKE $1 OR c.description ILIKE $1)");
    }
    if filter.category_id.is_some() {
        let n = if search_pattern.is_some() { 2 } else { 1 };
        sql.push_str(&format!(" AND c.customer_category_id = ${}", n));
    }
    sql.push_str(" ORDER BY c.created_at DESC, c.id DESC");

    tracing::debug!(sql = %sql, "list customers");
    let mut query = sqlx::query_as::<_, CustomerWithContactCount>(&sql);
    if let Some(pattern) = &search_pattern {
        query = query.bind(pattern);
    }
    if let Some(id) = filter.category_id {
        query = query.bind(id);
    }
    Ok(query.fetch_all(pool).await?)
}

pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Customer>, AppError> {
    let row = sqlx::query_as::<_, Customer>(&format!(
        "SELECT {} FROM customers WHERE id = $1 AND deleted_at IS NULL",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let row: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1 AND deleted_at IS NULL)",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}

/// True when a non-deleted customer other than `exclude_id` holds `reference`.
pub async fn reference_in_use(
    pool: &PgPool,
    reference: &str,
    exclude_id: Option<i64>,
) -> Result<bool, AppError> {
    let row: (bool,) = match exclude_id {
        Some(id) => {
            sqlx::query_as(
                "SELECT EXISTS(SELECT 1 FROM customers \
                 WHERE reference = $1 AND deleted_at IS NULL AND id <> $2)",
            )
            .bind(reference)
            .bind(id)
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_as(
                "SELECT EXISTS(SELECT 1 FROM customers \
                 WHERE reference = $1 AND deleted_at IS NULL)",
            )
            .bind(reference)
            .fetch_one(pool)
            .await?
        }
    };
    Ok(row.0)
}

pub async fn insert(pool: &PgPool, fields: &NewCustomer) -> Result<Customer, AppError> {
    let row = sqlx::query_as::<_, Customer>(&format!(
        "INSERT INTO customers (name, reference, customer_category_id, start_date, description) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {}",
        COLUMNS
    ))
    .bind(&fields.name)
    .bind(&fields.reference)
    .bind(fields.customer_category_id)
    .bind(fields.start_date)
    .bind(&fields.description)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Full-field update of a non-deleted customer. None when the id does not
/// resolve to a live row.
pub async fn update(
    pool: &PgPool,
    id: i64,
    fields: &NewCustomer,
) -> Result<Option<Customer>, AppError> {
    let row = sqlx::query_as::<_, Customer>(&format!(
        "UPDATE customers SET name = $1, reference = $2, customer_category_id = $3, \
         start_date = $4, description = $5, updated_at = NOW() \
         WHERE id = $6 AND deleted_at IS NULL RETURNING {}",
        COLUMNS
    ))
    .bind(&fields.name)
    .bind(&fields.reference)
    .bind(fields.customer_category_id)
    .bind(fields.start_date)
    .bind(&fields.description)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Soft delete. False when the id was already deleted or never existed.
/// Contacts are left untouched; they become unreachable behind the deleted
/// parent rather than being cascaded.
pub async fn soft_delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let row: Option<(i64,)> = sqlx::query_as(
        "UPDATE customers SET deleted_at = NOW(), updated_at = NOW() \
         WHERE id = $1 AND deleted_at IS NULL RETURNING id",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.is_some())
}

fn qualified_columns() -> String {
    COLUMNS
        .split(", ")
        .map(|c| format!("c.{}", c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape LIKE wildcards in a search needle so they match literally.
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("Acme"), "Acme");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn qualified_columns_prefix_every_column() {
        let cols = qualified_columns();
        assert!(cols.starts_with("c.id, c.name"));
        assert!(cols.ends_with("c.deleted_at"));
        assert_eq!(cols.matches("c.").count(), COLUMNS.split(", ").count());
    }
}
