//! Row structs for the three entities, plus the validated write payloads.
//! Persistence lives in `repo`; these carry data only.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub reference: String,
    pub customer_category_id: i64,
    pub start_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct CustomerCategory {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: i64,
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated customer write payload. Updates replace every field here.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub reference: String,
    pub customer_category_id: i64,
    pub start_date: NaiveDate,
    pub description: Option<String>,
}

/// Validated contact write payload.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
}
