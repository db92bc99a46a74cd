//! Typed client against a mock API server: request shapes, response parsing,
//! and structured error surfacing.

use customer_api::client::{ApiClient, ClientError, ContactPayload, CustomerPayload};
use httpmock::prelude::*;
use serde_json::json;

fn customer_json(id: i64, name: &str, reference: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "reference": reference,
        "category": { "id": 1, "name": "Gold" },
        "customer_category_id": 1,
        "start_date": "2024-01-15",
        "description": null,
        "contacts_count": 2,
        "created_at": "2024-01-15 09:30:00",
        "updated_at": "2024-01-15 09:30:00"
    })
}

#[tokio::test]
async fn lists_customers_with_search_and_category_filter() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/customers")
            .query_param("search", "Acme")
            .query_param("category_id", "1");
        then.status(200)
            .json_body(json!([customer_json(1, "Acme Corporation", "CUST001")]));
    });

    let client = ApiClient::new(server.url("/api"));
    let customers = client.get_customers(Some("Acme"), Some(1)).await.unwrap();

    mock.assert();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].reference, "CUST001");
    assert_eq!(customers[0].contacts_count, Some(2));
    assert_eq!(customers[0].category.as_ref().unwrap().name, "Gold");
    assert!(customers[0].contacts.is_none());
}

#[tokio::test]
async fn creates_a_customer_and_parses_the_created_representation() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/customers").json_body(json!({
            "name": "Acme",
            "reference": "CUST001",
            "customer_category_id": 1,
            "start_date": "2024-01-15",
            "description": "Leading technology company"
        }));
        then.status(201).json_body(json!({
            "id": 42,
            "name": "Acme",
            "reference": "CUST001",
            "category": { "id": 1, "name": "Gold" },
            "customer_category_id": 1,
            "start_date": "2024-01-15",
            "description": "Leading technology company",
            "contacts": [],
            "created_at": "2024-01-15 09:30:00",
            "updated_at": "2024-01-15 09:30:00"
        }));
    });

    let client = ApiClient::new(server.url("/api"));
    let payload = CustomerPayload {
        name: "Acme".into(),
        reference: "CUST001".into(),
        customer_category_id: 1,
        start_date: "2024-01-15".into(),
        description: Some("Leading technology company".into()),
    };
    let created = client.create_customer(&payload).await.unwrap();

    mock.assert();
    assert_eq!(created.id, 42);
    assert!(created.contacts.as_ref().is_some_and(Vec::is_empty));
}

#[tokio::test]
async fn surfaces_validation_errors_with_field_details() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/customers");
        then.status(422).json_body(json!({
            "error": {
                "code": "validation_error",
                "message": "the given data was invalid",
                "details": { "reference": ["reference has already been taken"] }
            }
        }));
    });

    let client = ApiClient::new(server.url("/api"));
    let payload = CustomerPayload {
        name: "Acme".into(),
        reference: "CUST001".into(),
        customer_category_id: 1,
        start_date: "2024-01-15".into(),
        description: None,
    };
    let err = client.create_customer(&payload).await.unwrap_err();

    match err {
        ClientError::Api {
            status,
            code,
            details,
            ..
        } => {
            assert_eq!(status, 422);
            assert_eq!(code, "validation_error");
            let details = details.unwrap();
            assert_eq!(
                details["reference"][0],
                "reference has already been taken"
            );
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_customer_maps_to_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/customers/999");
        then.status(404).json_body(json!({
            "error": { "code": "not_found", "message": "not found: customer 999" }
        }));
    });

    let client = ApiClient::new(server.url("/api"));
    let err = client.get_customer(999).await.unwrap_err();

    match err {
        ClientError::Api { status, code, .. } => {
            assert_eq!(status, 404);
            assert_eq!(code, "not_found");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn delete_returns_the_confirmation_message() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/customers/1");
        then.status(200)
            .json_body(json!({ "message": "Customer deleted successfully" }));
    });

    let client = ApiClient::new(server.url("/api"));
    let confirmation = client.delete_customer(1).await.unwrap();

    mock.assert();
    assert_eq!(confirmation.message, "Customer deleted successfully");
}

#[tokio::test]
async fn lists_and_creates_contacts() {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/customers/1/contacts");
        then.status(200).json_body(json!([{
            "id": 5,
            "customer_id": 1,
            "first_name": "Jane",
            "last_name": "Smith",
            "full_name": "Jane Smith",
            "created_at": "2024-03-01 12:00:00",
            "updated_at": "2024-03-01 12:00:00"
        }]));
    });
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contacts").json_body(json!({
            "customer_id": 1,
            "first_name": "John",
            "last_name": "Taylor"
        }));
        then.status(201).json_body(json!({
            "id": 6,
            "customer_id": 1,
            "first_name": "John",
            "last_name": "Taylor",
            "full_name": "John Taylor",
            "customer": customer_json(1, "Acme Corporation", "CUST001"),
            "created_at": "2024-03-02 08:00:00",
            "updated_at": "2024-03-02 08:00:00"
        }));
    });

    let client = ApiClient::new(server.url("/api"));

    let contacts = client.get_contacts(1).await.unwrap();
    list_mock.assert();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].full_name, "Jane Smith");
    assert!(contacts[0].customer.is_none());

    let created = client
        .create_contact(&ContactPayload {
            customer_id: 1,
            first_name: "John".into(),
            last_name: "Taylor".into(),
        })
        .await
        .unwrap();
    create_mock.assert();
    assert_eq!(created.customer.as_ref().unwrap().reference, "CUST001");
}

#[tokio::test]
async fn lists_customer_categories() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/customer-categories");
        then.status(200).json_body(json!([
            { "id": 3, "name": "Bronze" },
            { "id": 1, "name": "Gold" },
            { "id": 2, "name": "Silver" }
        ]));
    });

    let client = ApiClient::new(server.url("/api"));
    let categories = client.get_customer_categories().await.unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0].name, "Bronze");
}
