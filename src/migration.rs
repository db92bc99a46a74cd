//! Schema DDL: tables, indexes, and foreign keys. Idempotent; runs at startup.
//! Order follows PostgreSQL dependencies: categories before customers before contacts.

use crate::error::AppError;
use sqlx::PgPool;

/// Apply the schema to the database: CREATE TABLE, CREATE INDEX, ADD FK.
/// Tables and indexes use IF NOT EXISTS; the FK statements are allowed to
/// fail when the constraint already exists.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customer_categories (
          id BIGSERIAL PRIMARY KEY,
          name TEXT NOT NULL,
          created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
          updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
          id BIGSERIAL PRIMARY KEY,
          name TEXT NOT NULL,
          reference TEXT NOT NULL,
          customer_category_id BIGINT NOT NULL,
          start_date DATE NOT NULL,
          description TEXT,
          created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
          updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
          deleted_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
          id BIGSERIAL PRIMARY KEY,
          customer_id BIGINT NOT NULL,
          first_name TEXT NOT NULL,
          last_name TEXT NOT NULL,
          created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
          updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
          deleted_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Uniqueness of reference is enforced by the validation layer; the index
    // only backs the lookup and stays partial so soft-deleted rows drop out.
    for ddl in [
        "CREATE INDEX IF NOT EXISTS customers_reference_idx ON customers (reference) WHERE deleted_at IS NULL",
        "CREATE INDEX IF NOT EXISTS customers_category_idx ON customers (customer_category_id)",
        "CREATE INDEX IF NOT EXISTS contacts_customer_idx ON contacts (customer_id)",
    ] {
        sqlx::query(ddl).execute(pool).await?;
    }

    for ddl in [
        "ALTER TABLE customers ADD CONSTRAINT customers_category_fk \
         FOREIGN KEY (customer_category_id) REFERENCES customer_categories (id)",
        "ALTER TABLE contacts ADD CONSTRAINT contacts_customer_fk \
         FOREIGN KEY (customer_id) REFERENCES customers (id)",
    ] {
        let _ = sqlx::query(ddl).execute(pool).await;
    }

    tracing::info!("schema up to date");
    Ok(())
}
