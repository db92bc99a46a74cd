//! Demo data: three categories, fifteen customers, a handful of contacts per
//! customer. Idempotent; skipped entirely when customers already exist.

use crate::error::AppError;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::collections::HashMap;

const CATEGORIES: [&str; 3] = ["Gold", "Silver", "Bronze"];

// (name, reference, category, start_date, description)
const CUSTOMERS: [(&str, &str, &str, &str, &str); 15] = [
    (
        "Acme Corporation",
        "CUST001",
        "Gold",
        "2024-01-15",
        "Leading technology company specializing in software solutions.",
    ),
    (
        "Global Trading Ltd",
        "CUST002",
        "Silver",
        "2024-02-20",
        "International trading company with operations worldwide.",
    ),
    (
        "TechStart Inc",
        "CUST003",
        "Bronze",
        "2024-03-10",
        "Startup company focused on innovative technology products.",
    ),
    (
        "Mega Industries",
        "CUST004",
        "Gold",
        "2024-01-05",
        "Large industrial manufacturing company.",
    ),
    (
        "Digital Solutions Co",
        "CUST005",
        "Silver",
        "2024-04-12",
        "Digital transformation consultancy firm.",
    ),
    (
        "Prime Services",
        "CUST006",
        "Bronze",
        "2024-05-18",
        "Professional services provider.",
    ),
    (
        "Elite Business Group",
        "CUST007",
        "Gold",
        "2024-02-01",
        "Premium business consulting and advisory services.",
    ),
    (
        "Future Systems",
        "CUST008",
        "Silver",
        "2024-06-25",
        "IT systems integration and support services.",
    ),
    (
        "Innovation Labs",
        "CUST009",
        "Bronze",
        "2024-07-08",
        "Research and development laboratory.",
    ),
    (
        "Stellar Enterprises",
        "CUST010",
        "Gold",
        "2024-03-22",
        "Enterprise-level solutions provider.",
    ),
    (
        "Smart Solutions",
        "CUST011",
        "Silver",
        "2024-08-14",
        "Smart technology solutions for modern businesses.",
    ),
    (
        "NextGen Technologies",
        "CUST012",
        "Bronze",
        "2024-09-30",
        "Next generation technology development company.",
    ),
    (
        "Apex Corporation",
        "CUST013",
        "Gold",
        "2024-04-05",
        "Top-tier corporation with extensive market presence.",
    ),
    (
        "Dynamic Ventures",
        "CUST014",
        "Silver",
        "2024-10-11",
        "Venture capital and business development firm.",
    ),
    (
        "Quality First Ltd",
        "CUST015",
        "Bronze",
        "2024-11-20",
        "Quality assurance and testing services company.",
    ),
];

const FIRST_NAMES: [&str; 16] = [
    "John", "Jane", "Michael", "Sarah", "David", "Emily", "Robert", "Jessica", "William", "Amanda",
    "James", "Lisa", "Richard", "Jennifer", "Joseph", "Michelle",
];

const LAST_NAMES: [&str; 16] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor",
];

pub async fn seed_demo_data(pool: &PgPool) -> Result<(), AppError> {
    let existing: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;
    if existing.0 > 0 {
        tracing::info!("demo data already present, skipping seed");
        return Ok(());
    }

    for name in CATEGORIES {
        sqlx::query(
            "INSERT INTO customer_categories (name) SELECT $1 \
             WHERE NOT EXISTS (SELECT 1 FROM customer_categories WHERE name = $1)",
        )
        .bind(name)
        .execute(pool)
        .await?;
    }

    let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM customer_categories")
        .fetch_all(pool)
        .await?;
    let category_ids: HashMap<String, i64> = rows.into_iter().map(|(id, n)| (n, id)).collect();

    for (idx, (name, reference, category, start_date, description)) in
        CUSTOMERS.iter().enumerate()
    {
        let category_id = category_ids
            .get(*category)
            .copied()
            .ok_or_else(|| AppError::Config(format!("seed category '{}' missing", category)))?;
        let date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .map_err(|e| AppError::Config(format!("seed date '{}': {}", start_date, e)))?;
        let customer_id: (i64,) = sqlx::query_as(
            "INSERT INTO customers (name, reference, customer_category_id, start_date, description) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(name)
        .bind(reference)
        .bind(category_id)
        .bind(date)
        .bind(description)
        .fetch_one(pool)
        .await?;

        // 2 to 5 contacts per customer, names picked deterministically
        let contact_count = 2 + idx % 4;
        for j in 0..contact_count {
            let first = FIRST_NAMES[(idx * 3 + j * 5) % FIRST_NAMES.len()];
            let last = LAST_NAMES[(idx * 7 + j * 3) % LAST_NAMES.len()];
            sqlx::query("INSERT INTO contacts (customer_id, first_name, last_name) VALUES ($1, $2, $3)")
                .bind(customer_id.0)
                .bind(first)
                .bind(last)
                .execute(pool)
                .await?;
        }
    }

    tracing::info!(customers = CUSTOMERS.len(), "seeded demo data");
    Ok(())
}
