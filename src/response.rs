//! Response helpers. Single resources are flat objects and collections are
//! unwrapped arrays; the only envelope is the delete confirmation message.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn message(text: &str) -> (StatusCode, Json<Message>) {
    (
        StatusCode::OK,
        Json(Message {
            message: text.to_string(),
        }),
    )
}
