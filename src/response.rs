//! Success response helpers. Bodies are serialized before headers go out, so an encoding failure surfaces as a 500.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct CreatedId {
    pub id: String,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created_id(id: String) -> (StatusCode, Json<CreatedId>) {
    (StatusCode::CREATED, Json(CreatedId { id }))
}
