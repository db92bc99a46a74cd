//! Request validation: typed inputs, pure field checks, database-backed checks.
//!
//! Create and update share one rule set per entity; the only difference is
//! that the reference uniqueness check excludes the record being updated.

use crate::error::{AppError, ValidationErrors};
use crate::model::{NewContact, NewCustomer};
use crate::repo;
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;

const MAX_NAME_LEN: usize = 255;
const MAX_REFERENCE_LEN: usize = 50;

/// Raw customer write body. Presence is checked here, not by serde, so a
/// missing field yields a field error instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerInput {
    pub name: Option<String>,
    pub reference: Option<String>,
    pub customer_category_id: Option<i64>,
    pub start_date: Option<String>,
    pub description: Option<String>,
}

/// Raw contact write body.
#[derive(Debug, Default, Deserialize)]
pub struct ContactInput {
    pub customer_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Pure field checks for a customer body: presence, length, date shape.
pub fn validate_customer_fields(input: &CustomerInput) -> Result<NewCustomer, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = require_string(&mut errors, "name", &input.name, MAX_NAME_LEN);
    let reference = require_string(&mut errors, "reference", &input.reference, MAX_REFERENCE_LEN);
    let customer_category_id = match input.customer_category_id {
        Some(id) => Some(id),
        None => {
            errors.add("customer_category_id", "customer_category_id is required");
            None
        }
    };
    let start_date = match input.start_date.as_deref() {
        Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                errors.add("start_date", "start_date must be a valid date");
                None
            }
        },
        None => {
            errors.add("start_date", "start_date is required");
            None
        }
    };

    match (name, reference, customer_category_id, start_date) {
        (Some(name), Some(reference), Some(customer_category_id), Some(start_date))
            if errors.is_empty() =>
        {
            Ok(NewCustomer {
                name,
                reference,
                customer_category_id,
                start_date,
                description: input.description.clone(),
            })
        }
        _ => Err(errors),
    }
}

/// Pure field checks for a contact body.
pub fn validate_contact_fields(input: &ContactInput) -> Result<NewContact, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let customer_id = match input.customer_id {
        Some(id) => Some(id),
        None => {
            errors.add("customer_id", "customer_id is required");
            None
        }
    };
    let first_name = require_string(&mut errors, "first_name", &input.first_name, MAX_NAME_LEN);
    let last_name = require_string(&mut errors, "last_name", &input.last_name, MAX_NAME_LEN);

    match (customer_id, first_name, last_name) {
        (Some(customer_id), Some(first_name), Some(last_name)) if errors.is_empty() => {
            Ok(NewContact {
                customer_id,
                first_name,
                last_name,
            })
        }
        _ => Err(errors),
    }
}

/// Full customer validation: pure checks plus uniqueness and foreign-key
/// existence against the database. `exclude_id` is the record being updated,
/// so a customer may keep its own reference.
pub async fn validate_customer(
    pool: &PgPool,
    input: &CustomerInput,
    exclude_id: Option<i64>,
) -> Result<NewCustomer, AppError> {
    let (fields, mut errors) = match validate_customer_fields(input) {
        Ok(f) => (Some(f), ValidationErrors::new()),
        Err(e) => (None, e),
    };

    // DB-backed rules run even when field checks failed, so the caller sees
    // every violation at once.
    if let Some(reference) = input.reference.as_deref().filter(|s| !s.trim().is_empty()) {
        if repo::customer::reference_in_use(pool, reference, exclude_id).await? {
            errors.add("reference", "reference has already been taken");
        }
    }
    if let Some(category_id) = input.customer_category_id {
        if !repo::category::exists(pool, category_id).await? {
            errors.add(
                "customer_category_id",
                "customer_category_id does not reference an existing category",
            );
        }
    }

    match (fields, errors.is_empty()) {
        (Some(f), true) => Ok(f),
        _ => Err(AppError::Validation(errors)),
    }
}

/// Full contact validation: pure checks plus owning-customer existence.
pub async fn validate_contact(pool: &PgPool, input: &ContactInput) -> Result<NewContact, AppError> {
    let (fields, mut errors) = match validate_contact_fields(input) {
        Ok(f) => (Some(f), ValidationErrors::new()),
        Err(e) => (None, e),
    };

    if let Some(customer_id) = input.customer_id {
        if !repo::customer::exists(pool, customer_id).await? {
            errors.add(
                "customer_id",
                "customer_id does not reference an existing customer",
            );
        }
    }

    match (fields, errors.is_empty()) {
        (Some(f), true) => Ok(f),
        _ => Err(AppError::Validation(errors)),
    }
}

fn require_string(
    errors: &mut ValidationErrors,
    field: &str,
    value: &Option<String>,
    max_len: usize,
) -> Option<String> {
    match value.as_deref() {
        Some(s) if !s.trim().is_empty() => {
            if s.len() > max_len {
                errors.add(field, format!("{} must be at most {} characters", field, max_len));
            }
            Some(s.to_string())
        }
        _ => {
            errors.add(field, format!("{} is required", field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_customer_input() -> CustomerInput {
        CustomerInput {
            name: Some("Acme".into()),
            reference: Some("CUST001".into()),
            customer_category_id: Some(1),
            start_date: Some("2024-01-15".into()),
            description: None,
        }
    }

    #[test]
    fn accepts_a_valid_customer_body() {
        let fields = validate_customer_fields(&valid_customer_input()).unwrap();
        assert_eq!(fields.name, "Acme");
        assert_eq!(fields.reference, "CUST001");
        assert_eq!(fields.start_date.to_string(), "2024-01-15");
        assert_eq!(fields.description, None);
    }

    #[test]
    fn empty_body_reports_every_required_field() {
        let errors = validate_customer_fields(&CustomerInput::default()).unwrap_err();
        for field in ["name", "reference", "customer_category_id", "start_date"] {
            assert_eq!(errors.messages_for(field).len(), 1, "missing error for {}", field);
        }
        assert!(errors.messages_for("description").is_empty());
    }

    #[test]
    fn rejects_overlong_name_and_reference() {
        let input = CustomerInput {
            name: Some("x".repeat(256)),
            reference: Some("y".repeat(51)),
            ..valid_customer_input()
        };
        let errors = validate_customer_fields(&input).unwrap_err();
        assert_eq!(
            errors.messages_for("name"),
            ["name must be at most 255 characters"]
        );
        assert_eq!(
            errors.messages_for("reference"),
            ["reference must be at most 50 characters"]
        );
    }

    #[test]
    fn rejects_malformed_start_date() {
        let input = CustomerInput {
            start_date: Some("15/01/2024".into()),
            ..valid_customer_input()
        };
        let errors = validate_customer_fields(&input).unwrap_err();
        assert_eq!(
            errors.messages_for("start_date"),
            ["start_date must be a valid date"]
        );
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let input = CustomerInput {
            name: Some("   ".into()),
            ..valid_customer_input()
        };
        let errors = validate_customer_fields(&input).unwrap_err();
        assert_eq!(errors.messages_for("name"), ["name is required"]);
    }

    #[test]
    fn description_is_optional() {
        let input = CustomerInput {
            description: Some("Leading technology company".into()),
            ..valid_customer_input()
        };
        let fields = validate_customer_fields(&input).unwrap();
        assert_eq!(fields.description.as_deref(), Some("Leading technology company"));
    }

    #[test]
    fn contact_requires_all_fields() {
        let errors = validate_contact_fields(&ContactInput::default()).unwrap_err();
        for field in ["customer_id", "first_name", "last_name"] {
            assert_eq!(errors.messages_for(field).len(), 1, "missing error for {}", field);
        }

        let fields = validate_contact_fields(&ContactInput {
            customer_id: Some(7),
            first_name: Some("Jane".into()),
            last_name: Some("Smith".into()),
        })
        .unwrap();
        assert_eq!(fields.customer_id, 7);
    }
}
