//! API resources: the fixed JSON shape of each entity.
//!
//! Relations are `Option` fields skipped when absent, so "not loaded" is
//! distinguishable from an empty value; the handlers decide what gets loaded.
//! Dates render as `YYYY-MM-DD`, timestamps as `YYYY-MM-DD HH:MM:SS`. The
//! structs also deserialize so the typed client can reuse them.

use crate::model::{Contact, Customer, CustomerCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResource {
    pub id: i64,
    pub name: String,
}

impl CategoryResource {
    pub fn new(category: &CustomerCategory) -> Self {
        CategoryResource {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResource {
    pub id: i64,
    pub name: String,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResource>,
    pub customer_category_id: i64,
    pub start_date: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<ContactResource>>,
    pub created_at: String,
    pub updated_at: String,
}

impl CustomerResource {
    pub fn new(customer: &Customer) -> Self {
        CustomerResource {
            id: customer.id,
            name: customer.name.clone(),
            reference: customer.reference.clone(),
            category: None,
            customer_category_id: customer.customer_category_id,
            start_date: customer.start_date.format(DATE_FORMAT).to_string(),
            description: customer.description.clone(),
            contacts_count: None,
            contacts: None,
            created_at: format_timestamp(customer.created_at),
            updated_at: format_timestamp(customer.updated_at),
        }
    }

    pub fn with_category(mut self, category: &CustomerCategory) -> Self {
        self.category = Some(CategoryResource::new(category));
        self
    }

    /// Attach the category when it was found; single lookups can miss.
    pub fn maybe_category(self, category: Option<&CustomerCategory>) -> Self {
        match category {
            Some(c) => self.with_category(c),
            None => self,
        }
    }

    pub fn with_contacts(mut self, contacts: &[Contact]) -> Self {
        self.contacts = Some(contacts.iter().map(ContactResource::new).collect());
        self
    }

    pub fn with_contacts_count(mut self, count: i64) -> Self {
        self.contacts_count = Some(count);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResource {
    pub id: i64,
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Box<CustomerResource>>,
    pub created_at: String,
    pub updated_at: String,
}

impl ContactResource {
    pub fn new(contact: &Contact) -> Self {
        ContactResource {
            id: contact.id,
            customer_id: contact.customer_id,
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            full_name: contact.full_name(),
            customer: None,
            created_at: format_timestamp(contact.created_at),
            updated_at: format_timestamp(contact.updated_at),
        }
    }

    pub fn maybe_customer(mut self, customer: Option<&Customer>) -> Self {
        self.customer = customer.map(|c| Box::new(CustomerResource::new(c)));
        self
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn sample_customer() -> Customer {
        Customer {
            id: 1,
            name: "Acme Corporation".into(),
            reference: "CUST001".into(),
            customer_category_id: 2,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap(),
            deleted_at: None,
        }
    }

    fn sample_contact() -> Contact {
        Contact {
            id: 5,
            customer_id: 1,
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            deleted_at: None,
        }
    }

    #[test]
    fn unloaded_relations_are_absent_not_null() {
        let value = serde_json::to_value(CustomerResource::new(&sample_customer())).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("category"));
        assert!(!obj.contains_key("contacts"));
        assert!(!obj.contains_key("contacts_count"));
        // description is a scalar, not a relation: present and null
        assert_eq!(obj.get("description"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn dates_and_timestamps_use_fixed_formats() {
        let value = serde_json::to_value(CustomerResource::new(&sample_customer())).unwrap();
        assert_eq!(value["start_date"], "2024-01-15");
        assert_eq!(value["created_at"], "2024-01-15 09:30:00");
        assert_eq!(value["updated_at"], "2024-02-01 10:00:00");
    }

    #[test]
    fn loaded_relations_appear_in_the_output() {
        let category = CustomerCategory {
            id: 2,
            name: "Gold".into(),
        };
        let resource = CustomerResource::new(&sample_customer())
            .with_category(&category)
            .with_contacts(&[sample_contact()])
            .with_contacts_count(1);
        let value = serde_json::to_value(resource).unwrap();
        assert_eq!(value["category"]["name"], "Gold");
        assert_eq!(value["contacts_count"], 1);
        assert_eq!(value["contacts"][0]["full_name"], "Jane Smith");
    }

    #[test]
    fn contact_embeds_customer_only_when_loaded() {
        let bare = serde_json::to_value(ContactResource::new(&sample_contact())).unwrap();
        assert!(!bare.as_object().unwrap().contains_key("customer"));

        let customer = sample_customer();
        let loaded = serde_json::to_value(
            ContactResource::new(&sample_contact()).maybe_customer(Some(&customer)),
        )
        .unwrap();
        assert_eq!(loaded["customer"]["reference"], "CUST001");
    }
}
