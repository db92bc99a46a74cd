//! Customer CRUD handlers.

use crate::error::AppError;
use crate::repo;
use crate::repo::customer::ListFilter;
use crate::resource::CustomerResource;
use crate::response;
use crate::state::AppState;
use crate::validation::{self, CustomerInput};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub category_id: Option<i64>,
}

/// GET /customers?search=&category_id= — non-deleted customers, newest first,
/// each with its category and live contact count.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let filter = ListFilter {
        search: params.search,
        category_id: params.category_id,
    };
    let rows = repo::customer::list(&state.pool, &filter).await?;

    let mut category_ids: Vec<i64> = rows
        .iter()
        .map(|r| r.customer.customer_category_id)
        .collect();
    category_ids.sort_unstable();
    category_ids.dedup();
    let categories: HashMap<i64, _> = repo::category::find_by_ids(&state.pool, &category_ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    let resources: Vec<CustomerResource> = rows
        .iter()
        .map(|row| {
            CustomerResource::new(&row.customer)
                .maybe_category(categories.get(&row.customer.customer_category_id))
                .with_contacts_count(row.contacts_count)
        })
        .collect();
    Ok(response::ok(resources))
}

/// POST /customers — validate, insert, respond 201 with the category loaded
/// and an empty contact list.
pub async fn store(
    State(state): State<AppState>,
    Json(input): Json<CustomerInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let fields = validation::validate_customer(&state.pool, &input, None).await?;
    let customer = repo::customer::insert(&state.pool, &fields).await?;
    tracing::info!(customer_id = customer.id, reference = %customer.reference, "customer created");

    let category = repo::category::find(&state.pool, customer.customer_category_id).await?;
    let resource = CustomerResource::new(&customer)
        .maybe_category(category.as_ref())
        .with_contacts(&[]);
    Ok(response::created(resource))
}

/// GET /customers/:id — single customer with category and contacts loaded.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let customer = repo::customer::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))?;
    let category = repo::category::find(&state.pool, customer.customer_category_id).await?;
    let contacts = repo::contact::list_for_customer(&state.pool, customer.id).await?;
    let resource = CustomerResource::new(&customer)
        .maybe_category(category.as_ref())
        .with_contacts(&contacts);
    Ok(response::ok(resource))
}

/// PUT /customers/:id — full replacement of all mutable fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<CustomerInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !repo::customer::exists(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("customer {}", id)));
    }
    let fields = validation::validate_customer(&state.pool, &input, Some(id)).await?;
    let customer = repo::customer::update(&state.pool, id, &fields)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))?;

    let category = repo::category::find(&state.pool, customer.customer_category_id).await?;
    let resource = CustomerResource::new(&customer).maybe_category(category.as_ref());
    Ok(response::ok(resource))
}

/// DELETE /customers/:id — soft delete; contacts are not cascaded.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !repo::customer::soft_delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("customer {}", id)));
    }
    tracing::info!(customer_id = id, "customer soft-deleted");
    Ok(response::message("Customer deleted successfully"))
}
