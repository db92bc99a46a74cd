//! The JSON API route table.

use crate::handlers::{category, contact, customer};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/customer-categories", get(category::index))
        .route("/customers", get(customer::index).post(customer::store))
        .route(
            "/customers/:id",
            get(customer::show)
                .put(customer::update)
                .delete(customer::destroy),
        )
        .route("/customers/:id/contacts", get(contact::index_for_customer))
        .route("/contacts", post(contact::store))
        .route(
            "/contacts/:id",
            get(contact::show)
                .put(contact::update)
                .delete(contact::destroy),
        )
        .with_state(state)
}
