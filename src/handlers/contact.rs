//! Contact CRUD handlers, plus the per-customer contact listing.

use crate::error::AppError;
use crate::repo;
use crate::resource::ContactResource;
use crate::response;
use crate::state::AppState;
use crate::validation::{self, ContactInput};
use axum::{
    extract::{Path, State},
    Json,
};

/// GET /customers/:id/contacts — a customer's contacts, newest first.
pub async fn index_for_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !repo::customer::exists(&state.pool, customer_id).await? {
        return Err(AppError::NotFound(format!("customer {}", customer_id)));
    }
    let contacts = repo::contact::list_for_customer(&state.pool, customer_id).await?;
    let resources: Vec<ContactResource> = contacts.iter().map(ContactResource::new).collect();
    Ok(response::ok(resources))
}

/// POST /contacts — validate, insert, respond 201 with the customer loaded.
pub async fn store(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let fields = validation::validate_contact(&state.pool, &input).await?;
    let contact = repo::contact::insert(&state.pool, &fields).await?;
    tracing::info!(contact_id = contact.id, customer_id = contact.customer_id, "contact created");

    let customer = repo::customer::find(&state.pool, contact.customer_id).await?;
    let resource = ContactResource::new(&contact).maybe_customer(customer.as_ref());
    Ok(response::created(resource))
}

/// GET /contacts/:id — single contact with its customer loaded.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let contact = repo::contact::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("contact {}", id)))?;
    let customer = repo::customer::find(&state.pool, contact.customer_id).await?;
    let resource = ContactResource::new(&contact).maybe_customer(customer.as_ref());
    Ok(response::ok(resource))
}

/// PUT /contacts/:id — full replacement of all mutable fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ContactInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if repo::contact::find(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound(format!("contact {}", id)));
    }
    let fields = validation::validate_contact(&state.pool, &input).await?;
    let contact = repo::contact::update(&state.pool, id, &fields)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("contact {}", id)))?;

    let customer = repo::customer::find(&state.pool, contact.customer_id).await?;
    let resource = ContactResource::new(&contact).maybe_customer(customer.as_ref());
    Ok(response::ok(resource))
}

/// DELETE /contacts/:id — soft delete.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !repo::contact::soft_delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("contact {}", id)));
    }
    tracing::info!(contact_id = id, "contact soft-deleted");
    Ok(response::message("Contact deleted successfully"))
}
