//! Customer category handlers. Categories are read-only on the API surface.

use crate::error::AppError;
use crate::repo;
use crate::resource::CategoryResource;
use crate::response;
use crate::state::AppState;
use axum::extract::State;

/// GET /customer-categories — all categories ordered by name.
pub async fn index(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let categories = repo::category::list_ordered_by_name(&state.pool).await?;
    let resources: Vec<CategoryResource> = categories.iter().map(CategoryResource::new).collect();
    Ok(response::ok(resources))
}
