use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;

#[derive(Deserialize)]
pub struct AddParams {
    a: i64,
    b: i64,
}

/// Liveness check: `GET /api/add?a=3&b=4` answers `{"result": 7}`.
pub async fn add(query: web::Query<AddParams>) -> Result<HttpResponse, AppError> {
    let result = query
        .a
        .checked_add(query.b)
        .ok_or_else(|| AppError::ValidationError("a + b is out of range".to_string()))?;
    Ok(HttpResponse::Ok().json(json!({ "result": result })))
}
