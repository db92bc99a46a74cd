mod api;
mod common;

pub use api::api_routes;
pub use common::{common_routes, common_routes_with_ready};
